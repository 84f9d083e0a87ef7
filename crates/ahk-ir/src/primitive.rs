use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use strum::IntoStaticStr;

/// A literal value.
///
/// `Char` is part of the upstream model (character constants survive
/// lowering for backends that have them) but AutoHotkey has no character
/// literal, so the emitter rejects it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, IntoStaticStr)]
#[serde(rename_all = "snake_case")]
pub enum Primitive {
    Null,
    String(String),
    Boolean(bool),
    Integer(i64),
    Float(f64),
    Decimal(Decimal),
    Char(char),
}

impl Primitive {
    /// Variant name for diagnostics.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        self.into()
    }

    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }
}

impl From<&str> for Primitive {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}

impl From<String> for Primitive {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<bool> for Primitive {
    fn from(b: bool) -> Self {
        Self::Boolean(b)
    }
}

impl From<i64> for Primitive {
    fn from(n: i64) -> Self {
        Self::Integer(n)
    }
}

impl From<f64> for Primitive {
    fn from(n: f64) -> Self {
        Self::Float(n)
    }
}

impl From<Decimal> for Primitive {
    fn from(d: Decimal) -> Self {
        Self::Decimal(d)
    }
}
