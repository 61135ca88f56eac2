/// Pure functions: resolved type and function support -> Rust expressions
/// naming the matching `TypeOf` / `Function` value.
use super::writer::quoted_list;
use crate::ast::{FunctionSupport, TypeTag};

/// `TypeOf::<Variant>`, with a `vec![..]` payload for keywords.
pub fn type_of_literal(tag: &TypeTag) -> String {
    match tag {
        TypeTag::Keyword(values) => format!("TypeOf::Keyword(vec![{}])", quoted_list(values)),
        other => format!("TypeOf::{}", other.variant()),
    }
}

pub fn function_literal(functions: &FunctionSupport) -> String {
    match functions {
        FunctionSupport::None => "Function::None".to_string(),
        FunctionSupport::Some(names) => format!("Function::Some(vec![{}])", quoted_list(names)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_tags_have_no_payload() {
        for tag in [
            TypeTag::Long,
            TypeTag::Short,
            TypeTag::OneDP,
            TypeTag::TwoDP,
            TypeTag::Integer,
            TypeTag::Date,
            TypeTag::HalfFloat,
            TypeTag::None,
        ] {
            let lit = type_of_literal(&tag);
            assert!(!lit.contains('('), "{lit}");
            assert_eq!(lit, format!("TypeOf::{}", tag.variant()));
        }
    }

    #[test]
    fn test_keyword() {
        let tag = TypeTag::Keyword(vec!["a".into(), "b".into()]);
        assert_eq!(type_of_literal(&tag), r#"TypeOf::Keyword(vec!["a", "b"])"#);
    }

    #[test]
    fn test_empty_keyword() {
        let tag = TypeTag::Keyword(vec![]);
        assert_eq!(type_of_literal(&tag), r#"TypeOf::Keyword(vec![""])"#);
    }

    #[test]
    fn test_functions() {
        assert_eq!(function_literal(&FunctionSupport::None), "Function::None");
        let mm = FunctionSupport::Some(vec!["min".into(), "max".into()]);
        assert_eq!(function_literal(&mm), r#"Function::Some(vec!["min", "max"])"#);
    }
}
