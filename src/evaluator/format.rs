//! Textual rendering of real results

/// Significant digits kept when rendering a real value.
pub const SIGNIFICANT_DIGITS: usize = 15;

/// Plain decimal notation is used for magnitudes in `[SMALL, LARGE)`.
const LARGE: f64 = 1e15;
const SMALL: f64 = 1e-4;

/// Render a real number the way the entry field shows it.
///
/// Values keep at most [`SIGNIFICANT_DIGITS`] significant digits with trailing
/// zeros trimmed, so `4.0` renders as `4`. Very large or very small
/// magnitudes use `m*10**k`, which evaluates back to the same value.
pub fn format_real(value: f64) -> String {
    if value == 0.0 {
        // Also folds -0.0
        return "0".to_string();
    }
    if !value.is_finite() {
        return if value.is_nan() {
            "nan".to_string()
        } else if value > 0.0 {
            "oo".to_string()
        } else {
            "-oo".to_string()
        };
    }

    let magnitude = value.abs();
    if (SMALL..LARGE).contains(&magnitude) {
        let int_digits = magnitude.log10().floor() as i32 + 1;
        let decimals = (SIGNIFICANT_DIGITS as i32 - int_digits).max(0) as usize;
        let text = trim_fraction(format!("{:.*}", decimals, value));
        // Rounding can still land on "-0" for tiny negatives
        if text == "-0" {
            return "0".to_string();
        }
        return text;
    }

    let scientific = format!("{:.*e}", SIGNIFICANT_DIGITS - 1, value);
    match scientific.split_once('e') {
        Some((mantissa, exponent)) => {
            format!("{}*10**{}", trim_fraction(mantissa.to_string()), exponent)
        }
        None => scientific,
    }
}

fn trim_fraction(mut text: String) -> String {
    if text.contains('.') {
        while text.ends_with('0') {
            text.pop();
        }
        if text.ends_with('.') {
            text.pop();
        }
    }
    text
}
