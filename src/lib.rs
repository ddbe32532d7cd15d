//! # Introduction
//!
//! A scientific calculator for the terminal. A fixed grid of buttons appends
//! tokens to a single line of input text; `=` evaluates it in place and `C`
//! clears it. The UI is built with [ratatui](https://docs.rs/ratatui).
//!
//! ## Evaluation pipeline
//!
//! ```text
//! Input text → Substitution → evalexpr → Value → Input text
//! ```
//!
//! 1. [`calculator`] — owns the input text, applies presses, and runs the
//!    substitution pass (`x^2` → `**2`, `^` → `**`, `frac` → `/`, `pi`/`e` →
//!    decimals).
//! 2. [`evaluator`] — checks size limits and hands the text to
//!    [evalexpr](https://docs.rs/evalexpr) behind the
//!    [`evaluator::Evaluator`] trait, producing a `Real` or `Symbolic`
//!    [`evaluator::Value`].
//! 3. [`ui`] — ratatui-based TUI; not part of the stable library API.
//!
//! ## Supported input
//!
//! Operators: `+ - * /`, `^` or `**`. Functions: `sqrt`, `sin`, `cos`,
//! `tan`, `cot`, `log`, plus `sec`, `csc`, `asin`, `acos`, `atan`, `sinh`,
//! `cosh`, `tanh`, `exp`, `ln`, `abs`. Constants: `pi`, `e`. Any other name is
//! rejected as an invalid expression.

pub mod calculator;
pub mod evaluator;
pub mod ui;

pub use calculator::{CalcError, Calculator, Outcome};
pub use evaluator::{EvalError, Evaluator, SymbolicEvaluator, Value};
