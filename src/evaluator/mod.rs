//! Expression evaluation
//!
//! This module turns post-substitution text into a [`Value`]:
//! - [`builtins`]: Functions and constants installed into the `evalexpr` context
//! - [`errors`]: [`EvalError`]
//! - [`format`]: Rendering of real numbers
//! - [`syntax`]: Size limits and the rewrite into `evalexpr` syntax
//! - [`value`]: The `Real` / `Symbolic` result type
//!
//! # Evaluation Model
//!
//! Parsing and evaluation are done by [`evalexpr`]. A finite float comes back
//! as [`Value::Real`]. A NaN (a result outside the reals, like `sqrt(-4)` or
//! `(-8)**(1/3)`) keeps the input text as [`Value::Symbolic`], and so does any
//! non-numeric value. Infinite results, empty input, and unknown names are
//! errors.

pub mod builtins;
pub mod errors;
pub mod format;
pub mod syntax;
pub mod value;

pub use errors::EvalError;
pub use value::Value;

use evalexpr::Value as ExprValue;

/// The evaluator boundary the calculator depends on
pub trait Evaluator {
    /// Parse and evaluate `text`, or report why it is not a valid expression.
    fn evaluate(&self, text: &str) -> Result<Value, EvalError>;
}

/// Default evaluator, backed by `evalexpr` with the [`builtins`] context.
#[derive(Debug, Clone, Copy, Default)]
pub struct SymbolicEvaluator;

impl SymbolicEvaluator {
    pub fn new() -> Self {
        SymbolicEvaluator
    }
}

impl Evaluator for SymbolicEvaluator {
    fn evaluate(&self, text: &str) -> Result<Value, EvalError> {
        syntax::check_shape(text)?;
        let context = builtins::math_context()?;
        let value = evalexpr::eval_with_context(&syntax::to_evalexpr(text), &context)?;
        classify(text, value)
    }
}

/// Map an `evalexpr` result onto [`Value`], keeping `text` for anything
/// that is not a finite real.
fn classify(text: &str, value: ExprValue) -> Result<Value, EvalError> {
    match value {
        ExprValue::Float(n) if n.is_finite() => Ok(Value::Real(n)),
        ExprValue::Float(n) if n.is_nan() => Ok(Value::Symbolic(text.trim().to_string())),
        ExprValue::Float(_) => Err(EvalError::NotFinite {
            expression: text.trim().to_string(),
        }),
        ExprValue::Int(n) => Ok(Value::Real(n as f64)),
        ExprValue::Empty => Err(EvalError::Empty),
        other => Ok(Value::Symbolic(other.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn eval(text: &str) -> Result<Value, EvalError> {
        SymbolicEvaluator::new().evaluate(text)
    }

    fn render(text: &str) -> String {
        eval(text).unwrap().to_string()
    }

    #[test]
    fn test_arithmetic() {
        assert_eq!(eval("2+2").unwrap(), Value::Real(4.0));
        assert_eq!(render("7-10"), "-3");
        assert_eq!(render("1/4"), "0.25");
        assert_eq!(render("2**10"), "1024");
        assert_eq!(render("-2**2"), "-4");
        assert_eq!(render("(1+2)*3"), "9");
    }

    #[test]
    fn test_functions() {
        assert_eq!(render("sqrt(4)"), "2");
        assert_eq!(render("sin(0)"), "0");
        assert_eq!(render("cos(0)"), "1");
        assert_eq!(render("log(100, 10)"), "2");
        assert_eq!(render("abs(-3)"), "3");
        assert_eq!(render("sqrt(4)**2"), "4");
    }

    #[test]
    fn test_constants_resolve() {
        assert_eq!(render("pi"), "3.14159265358979");
        assert_eq!(render("e"), "2.71828182845905");
    }

    #[test]
    fn test_unknown_names_are_rejected() {
        for text in ["x + 1", "pie", "cose", "sqrtpi", "f(1)"] {
            assert!(
                matches!(eval(text), Err(EvalError::Invalid(_))),
                "{} should be rejected",
                text
            );
        }
    }

    #[test]
    fn test_non_real_results_stay_unevaluated() {
        assert_eq!(eval("sqrt(-4)").unwrap(), Value::Symbolic("sqrt(-4)".into()));
        assert_eq!(render("(-8)**(1/3)"), "(-8)**(1/3)");
        assert_eq!(render("0/0"), "0/0");
    }

    #[test]
    fn test_non_numeric_results_are_symbolic() {
        let value = eval("1 < 2").unwrap();
        assert!(!value.is_real());
        assert_eq!(value.to_string(), "true");
    }

    #[test]
    fn test_infinite_results_are_errors() {
        assert!(matches!(eval("1/0"), Err(EvalError::NotFinite { .. })));
        assert!(matches!(eval("10**400"), Err(EvalError::NotFinite { .. })));
        assert!(matches!(eval("log(0)"), Err(EvalError::NotFinite { .. })));
    }

    #[test]
    fn test_syntax_errors() {
        assert!(matches!(eval("2++"), Err(EvalError::Invalid(_))));
        assert!(matches!(eval("2 3"), Err(EvalError::Invalid(_))));
        assert!(matches!(eval("(1"), Err(EvalError::Invalid(_))));
        assert_eq!(eval(""), Err(EvalError::Empty));
    }

    #[test]
    fn test_assignment_is_rejected() {
        assert!(eval("a = 1").is_err());
    }

    #[test]
    fn test_deep_input_is_rejected_not_overflowed() {
        let parens = format!("{}1{}", "(".repeat(20_000), ")".repeat(20_000));
        assert!(matches!(eval(&parens), Err(EvalError::TooLong { .. })));

        let nested = format!("{}1{}", "(".repeat(500), ")".repeat(500));
        assert!(matches!(eval(&nested), Err(EvalError::TooDeep { .. })));

        let negations = format!("{}1", "-".repeat(50_000));
        assert!(eval(&negations).is_err());
    }

    #[test]
    fn test_results_reevaluate_to_same_text() {
        for text in ["sqrt(2)", "10**20*1.5", "1/70000", "sqrt(-2)"] {
            let first = render(text);
            assert_eq!(render(&first), first, "re-evaluating {}", text);
        }
    }
}
