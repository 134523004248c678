// used to print out readable forms of an element
use std::fmt;

/// A primitive value produced by the compiler's evaluation of an expression.
///
/// Only string and long elements may address a node in the configuration
/// tree; the other variants are rejected when building terms.
#[derive(Debug, Clone, PartialEq)]
pub enum Element {
    String(String),
    Long(i64),
    Double(f64),
    Boolean(bool),
    Null,
    Undef,
}

impl Element {
    pub fn type_name(&self) -> &'static str {
        match self {
            Element::String(_) => "string",
            Element::Long(_) => "long",
            Element::Double(_) => "double",
            Element::Boolean(_) => "boolean",
            Element::Null => "null",
            Element::Undef => "undef",
        }
    }
}

impl From<&str> for Element {
    fn from(value: &str) -> Self {
        Element::String(value.to_owned())
    }
}
impl From<String> for Element {
    fn from(value: String) -> Self {
        Element::String(value)
    }
}
impl From<i64> for Element {
    fn from(value: i64) -> Self {
        Element::Long(value)
    }
}
impl From<f64> for Element {
    fn from(value: f64) -> Self {
        Element::Double(value)
    }
}
impl From<bool> for Element {
    fn from(value: bool) -> Self {
        Element::Boolean(value)
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Element::String(s) => write!(f, "\"{}\"", s),
            Element::Long(l) => write!(f, "{}", l),
            Element::Double(d) => write!(f, "{:?}", d),
            Element::Boolean(b) => write!(f, "{}", b),
            Element::Null => write!(f, "null"),
            Element::Undef => write!(f, "undef"),
        }
    }
}
