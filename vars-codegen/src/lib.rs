//! Generates Rust lookup-table arms from a variable schema (`vars.json`).
//!
//! ```
//! let schema = serde_json::json!({
//!     "fields": {
//!         "f1": {"name": "f1", "display_name": "Field One", "type": "long"}
//!     }
//! });
//! let generated = vars_codegen::generate(&schema, &Default::default()).unwrap();
//! assert_eq!(
//!     generated.lines,
//!     vec![r#""f1" => Variable { display_name: "Field One", type_of: TypeOf::Long, functions: Function::None },"#]
//! );
//! ```
pub mod ast;
pub mod compiler;
pub mod emit_rs;
pub mod settings;
pub mod splice;

pub use ast::SkipReason;
pub use compiler::CompileError;
pub use settings::{Mode, Settings};

/// Output of one generation pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Generated {
    /// One arm per emitted field, in document order, without newlines.
    pub lines: Vec<String>,
    /// Fields that produced no line.
    pub skipped: Vec<(String, SkipReason)>,
    /// `<value> not found!` messages for fields typed as `None`.
    pub diagnostics: Vec<String>,
}

impl Generated {
    /// The arms as printed: one newline-terminated line each.
    pub fn render(&self) -> String {
        emit_rs::render(&self.lines)
    }
}

/// Compile `schema` and render its arms.
pub fn generate(schema: &serde_json::Value, settings: &Settings) -> Result<Generated, CompileError> {
    let table = compiler::compile(schema, settings)?;
    Ok(Generated {
        lines: emit_rs::emit_lines(&table),
        skipped: table
            .skipped()
            .map(|(id, reason)| (id.to_string(), reason))
            .collect(),
        diagnostics: table.diagnostics,
    })
}

/// Parse `json` and generate. JSON syntax errors are reported as-is.
pub fn generate_str(json: &str, settings: &Settings) -> Result<Generated, GenerateError> {
    let schema: serde_json::Value = serde_json::from_str(json)?;
    Ok(generate(&schema, settings)?)
}

#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid variable schema: {0}")]
    Compile(#[from] CompileError),
}
