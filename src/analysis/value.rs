//! Enum value model

use std::cmp::Ordering;
use std::fmt;

/// Underlying representation of an enum type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RepresentationKind {
    String,
    SignedInteger,
    UnsignedInteger,
}

impl RepresentationKind {
    pub fn is_integer(self) -> bool {
        !matches!(self, RepresentationKind::String)
    }

    /// Literal of the representation's zero value.
    pub fn zero_literal(self) -> &'static str {
        match self {
            RepresentationKind::String => "\"\"",
            RepresentationKind::SignedInteger | RepresentationKind::UnsignedInteger => "0",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            RepresentationKind::String => "string",
            RepresentationKind::SignedInteger => "int",
            RepresentationKind::UnsignedInteger => "uint",
        }
    }
}

impl fmt::Display for RepresentationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One discovered enum constant.
///
/// Equality and ordering look at `literal` only: two constants with the same value are the same
/// enum value, whichever name they were declared under.
#[derive(Debug, Clone)]
pub struct Value {
    pub name: String,
    pub kind: RepresentationKind,
    /// Go-quoted string or decimal integer text
    pub literal: String,
    /// The type has a `String() string` method
    pub has_textual_representation: bool,
    /// Receiver name used by the type's existing methods, empty if none
    pub receiver_hint: String,
}

impl Value {
    pub fn new(name: impl Into<String>, kind: RepresentationKind, literal: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind,
            literal: literal.into(),
            has_textual_representation: false,
            receiver_hint: String::new(),
        }
    }

    pub fn with_textual_representation(mut self, textual: bool) -> Self {
        self.has_textual_representation = textual;
        self
    }

    pub fn with_receiver_hint(mut self, hint: impl Into<String>) -> Self {
        self.receiver_hint = hint.into();
        self
    }

    /// Return `true` if this is the zero value of its representation.
    pub fn is_zero(&self) -> bool {
        self.literal == self.kind.zero_literal()
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        self.literal == other.literal
    }
}

impl Eq for Value {}

impl PartialOrd for Value {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Lexicographic on the literal text, so `"10"` sorts before `"2"`.
impl Ord for Value {
    fn cmp(&self, other: &Self) -> Ordering {
        self.literal.cmp(&other.literal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equality_ignores_name() {
        let a = Value::new("One", RepresentationKind::SignedInteger, "1");
        let b = Value::new("Uno", RepresentationKind::SignedInteger, "1").with_receiver_hint("u");
        assert_eq!(a, b);
    }

    #[test]
    fn test_order_is_textual() {
        let ten = Value::new("Ten", RepresentationKind::SignedInteger, "10");
        let two = Value::new("Two", RepresentationKind::SignedInteger, "2");
        let neg = Value::new("Neg", RepresentationKind::SignedInteger, "-1");
        assert!(ten < two);
        assert!(neg < ten);
    }

    #[test]
    fn test_zero_literals() {
        assert!(Value::new("Empty", RepresentationKind::String, "\"\"").is_zero());
        assert!(Value::new("Zero", RepresentationKind::UnsignedInteger, "0").is_zero());
        assert!(!Value::new("Zero", RepresentationKind::String, "\"0\"").is_zero());
    }
}
