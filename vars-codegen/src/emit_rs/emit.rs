/// Top-level composition: walks a compiled table and renders one arm per
/// emitted field, in document order.
use super::types::{function_literal, type_of_literal};
use super::writer::{escape_rs, ArmWriter};
use crate::ast::{CompiledTable, Field};

/// Render one field as a table arm (no trailing newline).
pub fn emit_arm(field: &Field) -> String {
    format!(
        "\"{}\" => Variable {{ display_name: \"{}\", type_of: {}, functions: {} }},",
        escape_rs(&field.name),
        escape_rs(&field.display_name),
        type_of_literal(&field.type_of),
        function_literal(&field.functions),
    )
}

pub fn emit_lines(table: &CompiledTable) -> Vec<String> {
    table.fields().map(emit_arm).collect()
}

/// Join rendered arms into a newline-terminated block.
pub fn render<S: AsRef<str>>(arms: &[S]) -> String {
    let mut w = ArmWriter::new();
    w.lines(arms.iter().map(|a| a.as_ref()));
    w.finish()
}
