//! Built-in functions and constants known to the evaluator
//!
//! Everything here is installed into an `evalexpr` context. Names missing
//! from that context are errors, so a run of letters like `pie` or `sqrtpi`
//! is rejected instead of becoming a made-up symbol.

use evalexpr::{
    ContextWithMutableFunctions, ContextWithMutableVariables, EvalexprError, EvalexprResult,
    Function, HashMapContext, Value as ExprValue,
};

/// Single-argument functions, applied to the argument as a float
const UNARY: &[(&str, fn(f64) -> f64)] = &[
    ("sin", f64::sin),
    ("cos", f64::cos),
    ("tan", f64::tan),
    ("cot", |x| 1.0 / x.tan()),
    ("sec", |x| 1.0 / x.cos()),
    ("csc", |x| 1.0 / x.sin()),
    ("asin", f64::asin),
    ("acos", f64::acos),
    ("atan", f64::atan),
    ("sinh", f64::sinh),
    ("cosh", f64::cosh),
    ("tanh", f64::tanh),
    ("exp", f64::exp),
    ("ln", f64::ln),
    ("sqrt", f64::sqrt),
    ("abs", f64::abs),
];

const CONSTANTS: &[(&str, f64)] = &[("pi", std::f64::consts::PI), ("e", std::f64::consts::E)];

/// Natural log, or `log(x, base)` with an explicit base.
fn log(argument: &ExprValue) -> EvalexprResult<ExprValue> {
    let result = match argument {
        ExprValue::Tuple(args) => match args.as_slice() {
            [x, base] => x.as_number()?.ln() / base.as_number()?.ln(),
            _ => {
                return Err(EvalexprError::CustomMessage(format!(
                    "log() takes 1 or 2 arguments, got {}",
                    args.len()
                )));
            }
        },
        other => other.as_number()?.ln(),
    };
    Ok(ExprValue::Float(result))
}

/// Build the context every evaluation runs against.
pub fn math_context() -> EvalexprResult<HashMapContext> {
    let mut context = HashMapContext::new();
    for &(name, apply) in UNARY {
        context.set_function(
            name.to_string(),
            Function::new(move |argument| Ok(ExprValue::Float(apply(argument.as_number()?)))),
        )?;
    }
    context.set_function("log".to_string(), Function::new(log))?;
    for &(name, value) in CONSTANTS {
        context.set_value(name.to_string(), ExprValue::Float(value))?;
    }
    Ok(context)
}

#[cfg(test)]
mod tests {
    use super::*;
    use evalexpr::eval_with_context;

    fn eval(text: &str) -> EvalexprResult<ExprValue> {
        eval_with_context(text, &math_context().unwrap())
    }

    #[test]
    fn test_unary_functions() {
        assert_eq!(eval("sqrt(4.0)").unwrap(), ExprValue::Float(2.0));
        assert_eq!(eval("abs(-3.0)").unwrap(), ExprValue::Float(3.0));
        assert_eq!(eval("cos(0.0)").unwrap(), ExprValue::Float(1.0));
    }

    #[test]
    fn test_log_bases() {
        let natural = eval("log(2.718281828459045)").unwrap().as_number().unwrap();
        assert!((natural - 1.0).abs() < 1e-12);
        let base_two = eval("log(8.0, 2.0)").unwrap().as_number().unwrap();
        assert!((base_two - 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_wrong_argument_count_is_error() {
        assert!(eval("sin(1.0, 2.0)").is_err());
        assert!(matches!(
            eval("log(1.0, 2.0, 3.0)"),
            Err(EvalexprError::CustomMessage(_))
        ));
    }

    #[test]
    fn test_constants_are_floats() {
        assert_eq!(eval("pi").unwrap(), ExprValue::Float(std::f64::consts::PI));
    }

    #[test]
    fn test_unknown_names_are_errors() {
        assert!(eval("pie").is_err());
        assert!(eval("f(1.0)").is_err());
    }
}
