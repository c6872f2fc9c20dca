use rust_decimal::Decimal;

pub(crate) const CURRENCY: &str = "₦";

/// Naira amount for display: sign, then `₦`, grouped thousands and exactly
/// two decimals, e.g. `-₦1,234.50`.
pub(crate) fn format_amount(val: Decimal) -> String {
    let fixed = format!("{:.2}", val.abs());
    let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if val < Decimal::ZERO { "-" } else { "" };
    format!("{sign}{CURRENCY}{grouped}.{cents}")
}

/// Truncate a string to `max` visible characters, appending "…" if truncated.
/// Safe for multi-byte UTF-8 characters.
pub(crate) fn truncate(s: &str, max: usize) -> String {
    if max == 0 {
        return String::new();
    }
    if s.chars().count() <= max {
        return s.to_string();
    }
    let truncated: String = s.chars().take(max.saturating_sub(1)).collect();
    format!("{truncated}…")
}

/// Left-align `s` in a column of `width` characters, truncating if needed.
/// `format!("{:<w$}")` pads by chars too, but does not truncate.
pub(crate) fn cell(s: &str, width: usize) -> String {
    format!("{:<width$}", truncate(s, width))
}

#[cfg(test)]
#[path = "format_tests.rs"]
mod tests;
