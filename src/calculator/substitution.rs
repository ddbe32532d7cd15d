//! Token substitution pass
//!
//! Translates calculator shorthand into evaluator syntax before parsing. The
//! rules run in order: the square/cube shorthands must see their caret before
//! the generic `^` rule rewrites it, so `3x^2` becomes `3**2` and a manually
//! typed `2^10` becomes `2**10`.

use tracing::trace;

/// How a rule finds its pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Match {
    /// Every occurrence
    Anywhere,
    /// Only where the pattern is not part of a longer run of letters
    Word,
}

#[derive(Debug, Clone, Copy)]
struct Rule {
    pattern: &'static str,
    replacement: &'static str,
    matching: Match,
}

const PI: &str = "3.141592653589793";
const E: &str = "2.718281828459045";

const RULES: [Rule; 6] = [
    Rule { pattern: "x^2", replacement: "**2", matching: Match::Anywhere },
    Rule { pattern: "x^3", replacement: "**3", matching: Match::Anywhere },
    Rule { pattern: "^", replacement: "**", matching: Match::Anywhere },
    Rule { pattern: "frac", replacement: "/", matching: Match::Anywhere },
    Rule { pattern: "pi", replacement: PI, matching: Match::Word },
    Rule { pattern: "e", replacement: E, matching: Match::Word },
];

/// Apply every substitution rule, in order, to `input`.
pub fn substitute(input: &str) -> String {
    let output = RULES.iter().fold(input.to_string(), |text, rule| match rule.matching {
        Match::Anywhere => text.replace(rule.pattern, rule.replacement),
        Match::Word => replace_word(&text, rule.pattern, rule.replacement),
    });
    trace!(input, output = %output, "substituted");
    output
}

/// Replace `word` where neither neighbour is an ASCII letter. Digits and
/// operators next to the word do not block the match, so `2pi` still
/// becomes `23.14...`.
fn replace_word(text: &str, word: &str, replacement: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut last = 0;

    for (start, _) in text.match_indices(word) {
        let end = start + word.len();
        let before = text[..start].chars().next_back();
        let after = text[end..].chars().next();
        let is_letter = |c: Option<char>| c.is_some_and(|c| c.is_ascii_alphabetic());

        if !is_letter(before) && !is_letter(after) {
            out.push_str(&text[last..start]);
            out.push_str(replacement);
            last = end;
        }
    }

    out.push_str(&text[last..]);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_square_and_cube_shorthand() {
        assert_eq!(substitute("3x^2"), "3**2");
        assert_eq!(substitute("2x^3"), "2**3");
    }

    #[test]
    fn test_manual_caret() {
        assert_eq!(substitute("3^2"), "3**2");
        assert_eq!(substitute("(1+1)^(2x^2)"), "(1+1)**(2**2)");
    }

    #[test]
    fn test_frac() {
        assert_eq!(substitute("1frac4"), "1/4");
    }

    #[test]
    fn test_constants() {
        assert_eq!(substitute("pi"), PI);
        assert_eq!(substitute("e"), E);
        assert_eq!(substitute("2*pi"), format!("2*{}", PI));
        assert_eq!(substitute("2pi"), format!("2{}", PI));
    }

    #[test]
    fn test_e_inside_names_is_left_alone() {
        assert_eq!(substitute("exp(1)"), "exp(1)");
        assert_eq!(substitute("sec(0)+e"), format!("sec(0)+{}", E));
        assert_eq!(substitute("pie"), "pie");
    }

    #[test]
    fn test_pi_substitution_does_not_feed_e_rule() {
        // The decimal expansion of pi contains no letters for the e rule to
        // match.
        assert!(!substitute("pi").contains('e'));
    }

    #[test]
    fn test_passthrough() {
        assert_eq!(substitute("sqrt(4)+sin(0)"), "sqrt(4)+sin(0)");
        assert_eq!(substitute(""), "");
    }
}
