use std::fmt;

use super::format::format_real;

/// Result of evaluating an expression
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A concrete finite real number, rendered as a decimal
    Real(f64),
    /// Text kept unevaluated: a result outside the reals such as
    /// `sqrt(-4)`, or a non-numeric value such as a boolean
    Symbolic(String),
}

impl Value {
    pub fn is_real(&self) -> bool {
        matches!(self, Value::Real(_))
    }

    pub fn as_real(&self) -> Option<f64> {
        match self {
            Value::Real(n) => Some(*n),
            Value::Symbolic(_) => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Real(n) => f.write_str(&format_real(*n)),
            Value::Symbolic(text) => f.write_str(text),
        }
    }
}
