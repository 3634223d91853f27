//! Metric formatting.
//!
//! Rounding happens here and nowhere else; the model works on unrounded
//! `f64` values.

/// Formats an amount as whole dollars with thousands separators.
///
/// Negative amounts keep the sign after the currency symbol (`$-1,500`).
pub fn format_currency(amount: f64) -> String {
    if !amount.is_finite() {
        return format!("${}", amount);
    }

    let digits = format!("{:.0}", amount.abs());
    let sign = if amount < 0.0 && digits != "0" { "-" } else { "" };
    format!("${}{}", sign, group_thousands(&digits))
}

/// Formats a ratio as a multiple with two decimals (`19.00x`).
pub fn format_multiple(ratio: f64) -> String {
    format!("{:.2}x", ratio)
}

/// Formats a whole-number percentage (`40%`).
pub fn format_percent(percent: f64) -> String {
    format!("{:.0}%", percent)
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
