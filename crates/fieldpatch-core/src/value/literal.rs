use crate::value::Value;
use derive_more::Display;
use serde::{Deserialize, Serialize};

///
/// NumericLiteral
///
/// A number that arrived as decimal text. Width and signedness are
/// decided by the field it is assigned to, not by the literal.
///

#[derive(Clone, Debug, Deserialize, Display, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct NumericLiteral(String);

impl NumericLiteral {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for NumericLiteral {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for NumericLiteral {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

///
/// PatchValue
///
/// Right-hand side of one patch entry.
///
/// Numeric  → deferred numeric literal; converted to the field's width.
/// Concrete → native value; must match the field's type exactly.
///

#[derive(Clone, Debug, PartialEq)]
pub enum PatchValue {
    Numeric(NumericLiteral),
    Concrete(Value),
}

impl PatchValue {
    /// Tag decimal text as a deferred numeric literal.
    pub fn numeric(text: impl Into<String>) -> Self {
        Self::Numeric(NumericLiteral::new(text))
    }

    #[must_use]
    pub const fn is_numeric(&self) -> bool {
        matches!(self, Self::Numeric(_))
    }
}

impl From<NumericLiteral> for PatchValue {
    fn from(literal: NumericLiteral) -> Self {
        Self::Numeric(literal)
    }
}

impl From<Value> for PatchValue {
    fn from(value: Value) -> Self {
        Self::Concrete(value)
    }
}

impl From<&str> for PatchValue {
    fn from(text: &str) -> Self {
        Self::Concrete(Value::Text(text.to_string()))
    }
}
