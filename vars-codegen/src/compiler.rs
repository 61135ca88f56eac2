/// Variable schema compiler: resolves each descriptor under `fields` into a
/// [`Field`] or a [`SkipReason`].
use crate::ast::{
    CompiledTable, Field, FieldOutcome, FunctionSupport, SkipReason, TypeName, NONE_SENTINEL,
};
use crate::settings::{Mode, Settings};
use serde_json::{Map, Value};

#[derive(Debug, thiserror::Error)]
pub enum CompileError {
    #[error("schema must be a JSON object")]
    NotAnObject,
    #[error("schema has no 'fields' key")]
    MissingFields,
    #[error("'fields' must be a JSON object")]
    FieldsNotObject,
    #[error("field '{0}' must be a JSON object")]
    FieldNotObject(String),
    #[error("field '{field}' has unknown type '{value}'")]
    UnknownType { field: String, value: String },
}

/// Compile a variable schema document.
///
/// Only structural problems and unknown type strings are errors. Missing
/// descriptor keys are handled per field according to `settings.mode`.
pub fn compile(schema: &Value, settings: &Settings) -> Result<CompiledTable, CompileError> {
    let obj = schema.as_object().ok_or(CompileError::NotAnObject)?;
    let fields = obj
        .get("fields")
        .ok_or(CompileError::MissingFields)?
        .as_object()
        .ok_or(CompileError::FieldsNotObject)?;

    let mut table = CompiledTable::default();
    for (id, descriptor) in fields {
        let descriptor = descriptor
            .as_object()
            .ok_or_else(|| CompileError::FieldNotObject(id.clone()))?;
        let outcome = match compile_field(id, descriptor, settings, &mut table.diagnostics)? {
            Ok(field) => {
                tracing::debug!(field = %id, type_of = field.type_of.variant(), "resolved field");
                FieldOutcome::Emitted(field)
            }
            Err(reason) => {
                tracing::debug!(field = %id, %reason, "skipped field");
                FieldOutcome::Skipped {
                    id: id.clone(),
                    reason,
                }
            }
        };
        table.outcomes.push(outcome);
    }

    tracing::info!(
        fields = table.outcomes.len(),
        skipped = table.skipped().count(),
        "compiled variable schema"
    );
    Ok(table)
}

/// The outer `Result` aborts the whole run; the inner one skips this field.
fn compile_field(
    id: &str,
    obj: &Map<String, Value>,
    settings: &Settings,
    diagnostics: &mut Vec<String>,
) -> Result<Result<Field, SkipReason>, CompileError> {
    let strict = settings.mode == Mode::Strict;

    let name = match (str_key(obj, "name"), strict) {
        (Some(name), _) => name.to_string(),
        (None, true) => return Ok(Err(SkipReason::MissingName)),
        (None, false) => id.to_string(),
    };

    let display_name = match (str_key(obj, "display_name"), strict) {
        (Some(display), _) => display.to_string(),
        (None, true) => return Ok(Err(SkipReason::MissingDisplayName)),
        (None, false) => name.clone(),
    };

    let type_str = match (str_key(obj, "type"), strict) {
        (Some(t), _) => t,
        (None, true) => return Ok(Err(SkipReason::MissingType)),
        (None, false) => NONE_SENTINEL,
    };
    let type_name = TypeName::parse(type_str).ok_or_else(|| CompileError::UnknownType {
        field: id.to_string(),
        value: type_str.to_string(),
    })?;
    if type_name == TypeName::None {
        diagnostics.push(format!("{type_str} not found!"));
    }

    let values = if type_name == TypeName::Keyword {
        match (enum_values(obj), strict) {
            (Some(values), _) => values,
            (None, true) => return Ok(Err(SkipReason::MissingEnum)),
            (None, false) => Vec::new(),
        }
    } else {
        Vec::new()
    };

    Ok(Ok(Field {
        id: id.to_string(),
        name,
        display_name,
        type_of: type_name.into_tag(values),
        functions: function_support(obj.get("summary"), &settings.functions),
    }))
}

fn str_key<'a>(obj: &'a Map<String, Value>, key: &str) -> Option<&'a str> {
    obj.get(key).and_then(|v| v.as_str())
}

/// `constraint.enum` as strings, in order. Non-string entries are ignored.
fn enum_values(obj: &Map<String, Value>) -> Option<Vec<String>> {
    let arr = obj.get("constraint")?.get("enum")?.as_array()?;
    Some(
        arr.iter()
            .filter_map(|v| v.as_str())
            .map(str::to_string)
            .collect(),
    )
}

/// `Some` only when `summary` is an array listing every recognised function.
pub fn function_support(summary: Option<&Value>, recognised: &[String]) -> FunctionSupport {
    let Some(listed) = summary.and_then(|v| v.as_array()) else {
        return FunctionSupport::None;
    };
    let all_listed = recognised
        .iter()
        .all(|f| listed.iter().any(|v| v.as_str() == Some(f.as_str())));
    if all_listed && !recognised.is_empty() {
        FunctionSupport::Some(recognised.to_vec())
    } else {
        FunctionSupport::None
    }
}
