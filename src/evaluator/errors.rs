//! Evaluation error types
//!
//! [`EvalError`] covers everything that can go wrong between receiving the
//! substituted text and producing a [`Value`](super::value::Value): input
//! too large to evaluate safely, anything `evalexpr` rejects, and the
//! results that are refused rather than kept symbolic.

use evalexpr::EvalexprError;
use thiserror::Error;

/// Errors reported by an [`Evaluator`](super::Evaluator)
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EvalError {
    /// `evalexpr` could not parse or evaluate the text, including unknown
    /// names and wrong argument counts
    #[error("{0}")]
    Invalid(String),

    /// Nothing to evaluate
    #[error("empty expression")]
    Empty,

    #[error("input is {len} characters long, the limit is {max}")]
    TooLong { len: usize, max: usize },

    /// Parentheses or sign operators nested past the limit
    #[error("input nests {depth} levels deep, the limit is {max}")]
    TooDeep { depth: usize, max: usize },

    /// Division by zero or overflow produced an infinite result
    #[error("{expression} has no finite value")]
    NotFinite { expression: String },
}

impl From<EvalexprError> for EvalError {
    fn from(err: EvalexprError) -> Self {
        EvalError::Invalid(err.to_string())
    }
}
