/// Resolved field types produced by the compiler and consumed by the emitter.
/// Values are built once per field and discarded after the line is rendered.
use std::fmt;

/// Type string used when a descriptor carries no usable `type`.
pub const NONE_SENTINEL: &str = "None";

/// The value formats a variable can take, as named by the `type` key of a
/// field descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeTag {
    Long,
    Short,
    OneDP,
    TwoDP,
    Integer,
    Date,
    HalfFloat,
    /// Allowed values in declaration order.
    Keyword(Vec<String>),
    None,
}

/// Result of looking a `type` string up in the fixed vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeName {
    Long,
    Short,
    OneDP,
    TwoDP,
    Integer,
    Date,
    HalfFloat,
    Keyword,
    None,
}

impl TypeName {
    pub fn parse(s: &str) -> Option<TypeName> {
        match s {
            "long" => Some(TypeName::Long),
            "short" => Some(TypeName::Short),
            "1dp" => Some(TypeName::OneDP),
            "2dp" => Some(TypeName::TwoDP),
            "integer" => Some(TypeName::Integer),
            "date" => Some(TypeName::Date),
            "half_float" => Some(TypeName::HalfFloat),
            "keyword" => Some(TypeName::Keyword),
            NONE_SENTINEL => Some(TypeName::None),
            _ => None,
        }
    }

    /// Attach the keyword payload. `values` is dropped for every other name.
    pub fn into_tag(self, values: Vec<String>) -> TypeTag {
        match self {
            TypeName::Long => TypeTag::Long,
            TypeName::Short => TypeTag::Short,
            TypeName::OneDP => TypeTag::OneDP,
            TypeName::TwoDP => TypeTag::TwoDP,
            TypeName::Integer => TypeTag::Integer,
            TypeName::Date => TypeTag::Date,
            TypeName::HalfFloat => TypeTag::HalfFloat,
            TypeName::Keyword => TypeTag::Keyword(values),
            TypeName::None => TypeTag::None,
        }
    }
}

impl TypeTag {
    /// Variant name as it appears after `TypeOf::` in generated code.
    pub fn variant(&self) -> &'static str {
        match self {
            TypeTag::Long => "Long",
            TypeTag::Short => "Short",
            TypeTag::OneDP => "OneDP",
            TypeTag::TwoDP => "TwoDP",
            TypeTag::Integer => "Integer",
            TypeTag::Date => "Date",
            TypeTag::HalfFloat => "HalfFloat",
            TypeTag::Keyword(_) => "Keyword",
            TypeTag::None => "None",
        }
    }
}

/// Aggregate functions a field can be summarised with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FunctionSupport {
    None,
    Some(Vec<String>),
}

/// A fully resolved field, ready to be rendered as one match arm.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub id: String,
    pub name: String,
    pub display_name: String,
    pub type_of: TypeTag,
    pub functions: FunctionSupport,
}

/// Why a field produced no output line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    MissingName,
    MissingDisplayName,
    MissingType,
    MissingEnum,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::MissingName => write!(f, "missing 'name'"),
            SkipReason::MissingDisplayName => write!(f, "missing 'display_name'"),
            SkipReason::MissingType => write!(f, "missing 'type'"),
            SkipReason::MissingEnum => write!(f, "keyword field missing 'constraint.enum'"),
        }
    }
}

/// Per-field result of compilation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldOutcome {
    Emitted(Field),
    Skipped { id: String, reason: SkipReason },
}

/// A compiled `fields` mapping, in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompiledTable {
    pub outcomes: Vec<FieldOutcome>,
    /// `<value> not found!` lines, one per field that resolved to the sentinel type.
    pub diagnostics: Vec<String>,
}

impl CompiledTable {
    pub fn fields(&self) -> impl Iterator<Item = &Field> {
        self.outcomes.iter().filter_map(|o| match o {
            FieldOutcome::Emitted(field) => Some(field),
            FieldOutcome::Skipped { .. } => None,
        })
    }

    pub fn skipped(&self) -> impl Iterator<Item = (&str, SkipReason)> {
        self.outcomes.iter().filter_map(|o| match o {
            FieldOutcome::Skipped { id, reason } => Some((id.as_str(), *reason)),
            FieldOutcome::Emitted(_) => None,
        })
    }
}
