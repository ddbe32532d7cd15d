//! Input buffer controller
//!
//! [`Calculator`] owns the input text, the only state in the application.
//! Every button press goes through [`Calculator::press`]:
//! - [`layout`]: The fixed button grid and each label's [`ButtonAction`]
//! - [`substitution`]: Shorthand → evaluator syntax, applied before evaluation
//!
//! Appending and clearing cannot fail. Evaluation either replaces the text
//! with the rendered result or leaves it untouched and reports
//! [`CalcError::InvalidExpression`].

pub mod layout;
pub mod substitution;

use thiserror::Error;
use tracing::{debug, info, warn};

use crate::evaluator::{EvalError, Evaluator, SymbolicEvaluator, Value};
use layout::ButtonAction;
use substitution::substitute;

/// The single error kind surfaced to the user
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalcError {
    #[error("invalid input '{input}': {source}")]
    InvalidExpression {
        input: String,
        #[source]
        source: EvalError,
    },
}

/// What a button press did
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// The text was appended to or cleared
    Edited,
    /// The text now holds this result
    Evaluated(Value),
    /// Evaluation failed; the text is unchanged
    Rejected(CalcError),
}

/// Owns the input text and applies button presses to it
#[derive(Debug, Clone, Default)]
pub struct Calculator<E = SymbolicEvaluator> {
    text: String,
    evaluator: E,
}

impl Calculator {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<E: Evaluator> Calculator<E> {
    /// Create a calculator backed by a custom evaluator.
    pub fn with_evaluator(evaluator: E) -> Self {
        Calculator {
            text: String::new(),
            evaluator,
        }
    }

    /// The current input text
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Dispatch a button label by its action.
    pub fn press(&mut self, label: &str) -> Outcome {
        debug!(label, "press");
        match ButtonAction::of(label) {
            ButtonAction::Append => {
                self.append(label);
                Outcome::Edited
            }
            ButtonAction::Clear => {
                self.clear();
                Outcome::Edited
            }
            ButtonAction::Evaluate => match self.evaluate() {
                Ok(value) => Outcome::Evaluated(value),
                Err(err) => Outcome::Rejected(err),
            },
        }
    }

    /// Append `label` verbatim at the end of the text.
    pub fn append(&mut self, label: &str) {
        self.text.push_str(label);
    }

    pub fn clear(&mut self) {
        self.text.clear();
    }

    /// Remove the last character, if any.
    pub fn backspace(&mut self) {
        self.text.pop();
    }

    /// Substitute, evaluate, and replace the text with the rendered result.
    ///
    /// On error the text is left exactly as it was.
    pub fn evaluate(&mut self) -> Result<Value, CalcError> {
        let expression = substitute(&self.text);
        debug!(input = %self.text, expression = %expression, "evaluate");

        match self.evaluator.evaluate(&expression) {
            Ok(value) => {
                info!(input = %self.text, result = %value, real = value.is_real(), "evaluated");
                self.text = value.to_string();
                Ok(value)
            }
            Err(source) => {
                warn!(input = %self.text, error = %source, "invalid input");
                Err(CalcError::InvalidExpression {
                    input: self.text.clone(),
                    source,
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press_all(calc: &mut Calculator, labels: &[&str]) {
        for label in labels {
            calc.press(label);
        }
    }

    #[test]
    fn test_append_is_verbatim() {
        let mut calc = Calculator::new();
        press_all(&mut calc, &["3", "x^2", "+", "sin", "("]);
        assert_eq!(calc.text(), "3x^2+sin(");
    }

    #[test]
    fn test_clear() {
        let mut calc = Calculator::new();
        press_all(&mut calc, &["1", "+", "2", "C"]);
        assert_eq!(calc.text(), "");
    }

    #[test]
    fn test_backspace() {
        let mut calc = Calculator::new();
        press_all(&mut calc, &["1", "2"]);
        calc.backspace();
        assert_eq!(calc.text(), "1");
        calc.backspace();
        calc.backspace();
        assert_eq!(calc.text(), "");
    }

    #[test]
    fn test_evaluate_replaces_text() {
        let mut calc = Calculator::new();
        press_all(&mut calc, &["2", "+", "2"]);
        assert_eq!(calc.press("="), Outcome::Evaluated(Value::Real(4.0)));
        assert_eq!(calc.text(), "4");
    }

    #[test]
    fn test_square_button() {
        let mut calc = Calculator::new();
        press_all(&mut calc, &["3", "x^2", "="]);
        assert_eq!(calc.text(), "9");

        press_all(&mut calc, &["C", "2", "x^3", "="]);
        assert_eq!(calc.text(), "8");
    }

    #[test]
    fn test_invalid_input_leaves_text() {
        let mut calc = Calculator::new();
        press_all(&mut calc, &["2", "+", "+"]);

        let outcome = calc.press("=");
        assert!(matches!(
            outcome,
            Outcome::Rejected(CalcError::InvalidExpression { ref input, .. }) if input == "2++"
        ));
        assert_eq!(calc.text(), "2++");
    }

    #[test]
    fn test_adjacent_name_buttons_are_rejected() {
        for labels in [["pi", "e"], ["cos", "e"], ["sqrt", "pi"]] {
            let mut calc = Calculator::new();
            press_all(&mut calc, &labels);
            let before = calc.text().to_string();
            assert!(matches!(calc.press("="), Outcome::Rejected(_)), "{}", before);
            assert_eq!(calc.text(), before);
        }
    }

    #[test]
    fn test_append_after_result_continues() {
        let mut calc = Calculator::new();
        press_all(&mut calc, &["6", "*", "7", "=", "+", "1", "="]);
        assert_eq!(calc.text(), "43");
    }

    struct Always(Value);

    impl Evaluator for Always {
        fn evaluate(&self, _text: &str) -> Result<Value, EvalError> {
            Ok(self.0.clone())
        }
    }

    #[test]
    fn test_custom_evaluator_receives_substituted_text() {
        struct Echo;
        impl Evaluator for Echo {
            fn evaluate(&self, text: &str) -> Result<Value, EvalError> {
                Ok(Value::Symbolic(text.to_string()))
            }
        }

        let mut calc = Calculator::with_evaluator(Echo);
        calc.append("2^3frac4");
        calc.evaluate().unwrap();
        assert_eq!(calc.text(), "2**3/4");

        let mut calc = Calculator::with_evaluator(Always(Value::Real(0.5)));
        calc.append("anything");
        calc.evaluate().unwrap();
        assert_eq!(calc.text(), "0.5");
    }
}
