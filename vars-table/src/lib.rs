//! Variable metadata for the `taxon` and `assembly` search indexes.
//!
//! The tables are generated at build time from `vars/<index>.json`.
use once_cell::sync::Lazy;
use std::collections::BTreeMap;
use std::fmt;

/// Builds a map from `key => value` pairs.
macro_rules! collection {
    ($($k:expr => $v:expr),* $(,)?) => {{
        use std::iter::{IntoIterator, Iterator};
        Iterator::collect(IntoIterator::into_iter([$(($k, $v),)*]))
    }};
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeOf<'a> {
    Long,
    Short,
    OneDP,
    TwoDP,
    Integer,
    Date,
    HalfFloat,
    Keyword(Vec<&'a str>),
    None,
}

/// Lists the comparison operators a variable accepts, or its keywords.
impl fmt::Display for TypeOf<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeOf::Long
            | TypeOf::Short
            | TypeOf::OneDP
            | TypeOf::TwoDP
            | TypeOf::Integer
            | TypeOf::Date
            | TypeOf::HalfFloat => write!(f, "!=, <, <=, =, ==, >, >="),
            TypeOf::Keyword(k) => write!(f, "== {}", k.join(", ")),
            TypeOf::None => write!(f, ""),
        }
    }
}

/// Summary functions a variable supports, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Function<'a> {
    None,
    Some(Vec<&'a str>),
}

impl fmt::Display for Function<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Function::None => write!(f, ""),
            Function::Some(fun) => write!(f, "{}", fun.join(", ")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Variable<'a> {
    pub display_name: &'a str,
    pub type_of: TypeOf<'a>,
    pub functions: Function<'a>,
}

include!(concat!(env!("OUT_DIR"), "/variable_data.rs"));

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexType {
    Taxon,
    Assembly,
}

impl IndexType {
    pub fn variables(self) -> &'static BTreeMap<&'static str, Variable<'static>> {
        match self {
            IndexType::Taxon => &*TAXON_VARIABLE_DATA,
            IndexType::Assembly => &*ASSEMBLY_VARIABLE_DATA,
        }
    }
}

/// Look a variable up by name in one index.
pub fn lookup(index: IndexType, name: &str) -> Option<&'static Variable<'static>> {
    index.variables().get(name)
}
