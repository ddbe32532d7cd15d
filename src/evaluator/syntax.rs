//! Preparing entry text for `evalexpr`
//!
//! The entry uses Python-style `**` and has no separate integer type, while
//! `evalexpr` spells power `^` and divides integers with truncation. Before
//! evaluation every power operator is rewritten and every bare integer
//! literal gets a `.0` suffix, so `1/4` evaluates as `1.0/4.0`.
//!
//! The text is also checked against fixed size limits first. `evalexpr`
//! builds and walks its tree recursively, so a long run of `(` or `-`
//! would otherwise exhaust the stack.

use super::errors::EvalError;

/// Longest entry, in characters, that is handed to the evaluator
pub const MAX_INPUT_LEN: usize = 1024;

/// Deepest parenthesis nesting, and longest run of sign operators, accepted
pub const MAX_NESTING: usize = 64;

/// Reject input too long or too deeply nested to evaluate safely.
pub fn check_shape(text: &str) -> Result<(), EvalError> {
    let len = text.chars().count();
    if len > MAX_INPUT_LEN {
        return Err(EvalError::TooLong {
            len,
            max: MAX_INPUT_LEN,
        });
    }

    let mut depth = 0usize;
    let mut signs = 0usize;
    let mut deepest = 0usize;
    for c in text.chars() {
        match c {
            '(' => {
                depth += 1;
                signs = 0;
            }
            ')' => {
                depth = depth.saturating_sub(1);
                signs = 0;
            }
            '+' | '-' => signs += 1,
            c if c.is_whitespace() => {}
            _ => signs = 0,
        }
        deepest = deepest.max(depth).max(signs);
    }

    if deepest > MAX_NESTING {
        return Err(EvalError::TooDeep {
            depth: deepest,
            max: MAX_NESTING,
        });
    }
    Ok(())
}

/// Rewrite entry syntax into `evalexpr` syntax.
pub fn to_evalexpr(text: &str) -> String {
    promote_integers(&text.replace("**", "^"))
}

/// Part of a number or identifier token
fn is_literal_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '.'
}

/// Append `.0` to every standalone run of digits.
fn promote_integers(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len() + 8);
    let mut i = 0;
    while i < chars.len() {
        let c = chars[i];
        let starts_integer = c.is_ascii_digit() && (i == 0 || !is_literal_char(chars[i - 1]));
        if !starts_integer {
            out.push(c);
            i += 1;
            continue;
        }

        let start = i;
        while i < chars.len() && chars[i].is_ascii_digit() {
            i += 1;
        }
        out.extend(&chars[start..i]);
        // `2.5`, `1E5` and `x2` already are (or belong to) a single literal
        if i == chars.len() || !is_literal_char(chars[i]) {
            out.push_str(".0");
        }
    }
    out
}
