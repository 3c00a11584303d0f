//! Free-text money parsing.
//!
//! Records carry money as display strings ("$2.26M", "$85K", "$500"). All
//! values are read into one base unit, thousands of dollars:
//!
//! - every character other than a digit or `.` is dropped,
//! - the rest is parsed as a float,
//! - an `M` anywhere in the raw string scales by 1000.
//!
//! A bare number is taken to be thousands already, so "$500" is 500.

use crate::error::{MetricsError, Result};

/// Parses a money string into thousands of dollars.
pub fn try_parse_money(raw: &str) -> Result<f64> {
    let digits: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();
    let value: f64 = digits
        .parse()
        .map_err(|_| MetricsError::InvalidMoney(raw.to_string()))?;
    if raw.contains('M') {
        Ok(value * 1000.0)
    } else {
        Ok(value)
    }
}

/// Lenient form of [`try_parse_money`]: unparseable input becomes `NaN`,
/// which then shows up in any total it is added to.
pub fn parse_money(raw: &str) -> f64 {
    try_parse_money(raw).unwrap_or(f64::NAN)
}

/// Renders thousands of dollars as millions, e.g. `2260.0` → `$2.26M`.
pub fn format_millions(thousands: f64) -> String {
    format!("${:.2}M", thousands / 1000.0)
}

/// Renders thousands of dollars with no decimals, e.g. `85.0` → `$85K`.
pub fn format_thousands(thousands: f64) -> String {
    format!("${:.0}K", thousands)
}
