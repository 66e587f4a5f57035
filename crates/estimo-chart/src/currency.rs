//! Euro amounts in thousands.
//!
//! Two precisions are in use: price per square meter is shown to one decimal
//! (`€2.3k`), property valuations as whole thousands (`€125k`). Rounding is
//! half-to-even.

/// Currency symbol prefixed to every amount
pub const CURRENCY_SYMBOL: &str = "€";

/// Rounding applied when converting to thousands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Precision {
    /// One decimal place: `€125.0k`
    Tenths,
    /// Whole thousands: `€125k`
    Thousands,
}

/// Format `value` in thousands with the given precision
pub fn format_currency(value: f64, precision: Precision) -> String {
    let thousands = value / 1000.0;
    match precision {
        Precision::Tenths => {
            // `+ 0.0` turns a rounded -0.0 into 0.0
            let rounded = (thousands * 10.0).round_ties_even() / 10.0 + 0.0;
            format!("{CURRENCY_SYMBOL}{:.1}k", rounded)
        }
        Precision::Thousands => {
            let rounded = thousands.round_ties_even() + 0.0;
            format!("{CURRENCY_SYMBOL}{:.0}k", rounded)
        }
    }
}

/// One-decimal thousands, used for price per square meter
pub fn format_currency_tenths(value: f64) -> String {
    format_currency(value, Precision::Tenths)
}

/// Whole thousands, used for valuations
pub fn format_currency_thousands(value: f64) -> String {
    format_currency(value, Precision::Thousands)
}

/// Round to an integer and group digits by thousands: `12,345`
pub fn format_grouped(value: f64) -> String {
    let rounded = value.round();
    let digits = format!("{:.0}", rounded.abs());
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if rounded < 0.0 {
        grouped.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Fraction as a whole percentage: `0.25` → `25%`
pub fn format_percent(fraction: f64) -> String {
    format!("{:.0}%", fraction * 100.0)
}
