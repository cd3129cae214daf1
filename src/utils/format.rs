//! Format - Formatting Utilities

use chrono::{DateTime, Local, NaiveDateTime};

/// Date presentation styles
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DateStyle {
    /// `Nov 4, 2025`
    #[default]
    Default,
    /// `November 4, 2025, 01:00 PM`
    Full,
    /// `01:00 PM`
    Time,
}

impl DateStyle {
    fn pattern(self) -> &'static str {
        match self {
            DateStyle::Default => "%b %-d, %Y",
            DateStyle::Full => "%B %-d, %Y, %I:%M %p",
            DateStyle::Time => "%I:%M %p",
        }
    }
}

/// Format a date-time in one of the fixed en-US styles
pub fn format_date(dt: &NaiveDateTime, style: DateStyle) -> String {
    dt.format(style.pattern()).to_string()
}

/// Format time with milliseconds
pub fn format_time_ms(dt: &DateTime<Local>) -> String {
    dt.format("%H:%M:%S%.3f").to_string()
}

/// Truncate a string to max characters with ellipsis
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        s.chars().take(max_len).collect()
    } else {
        let head: String = s.chars().take(max_len - 3).collect();
        format!("{head}...")
    }
}

/// Format an integer with thousand separators
pub fn format_count(n: i64) -> String {
    let digits = group_thousands(&n.unsigned_abs().to_string());
    if n < 0 { format!("-{digits}") } else { digits }
}

/// Insert a comma every three digits of an unsigned integer string
fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut result = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result
}

/// Options for [`format_number`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberFormat {
    /// Fixed number of fraction digits
    pub decimals: usize,
    /// Prefix with `$`
    pub currency: bool,
    /// Scale with K/M/B/T suffixes
    pub compact: bool,
}

impl Default for NumberFormat {
    fn default() -> Self {
        Self {
            decimals: 2,
            currency: false,
            compact: false,
        }
    }
}

impl NumberFormat {
    pub fn decimals(mut self, decimals: usize) -> Self {
        self.decimals = decimals;
        self
    }

    pub fn currency(mut self) -> Self {
        self.currency = true;
        self
    }

    pub fn compact(mut self) -> Self {
        self.compact = true;
        self
    }
}

const COMPACT_SUFFIXES: [&str; 5] = ["", "K", "M", "B", "T"];

/// Format a number in en-US style.
///
/// Non-finite input is rendered as-is (`NaN`, `inf`).
pub fn format_number(n: f64, options: NumberFormat) -> String {
    if !n.is_finite() {
        return n.to_string();
    }

    let negative = n < 0.0;
    let mut magnitude = n.abs();
    let mut suffix = "";

    if options.compact {
        let mut unit = 0;
        while unit + 1 < COMPACT_SUFFIXES.len() && magnitude >= 1000.0 {
            magnitude /= 1000.0;
            unit += 1;
        }
        // Rounding can carry into the next unit (999.999K -> 1.00M)
        let rounded: f64 = format!("{magnitude:.prec$}", prec = options.decimals)
            .parse()
            .unwrap_or(magnitude);
        if rounded >= 1000.0 && unit + 1 < COMPACT_SUFFIXES.len() {
            magnitude = rounded / 1000.0;
            unit += 1;
        }
        suffix = COMPACT_SUFFIXES[unit];
    }

    let fixed = format!("{magnitude:.prec$}", prec = options.decimals);
    let (int_part, frac_part) = match fixed.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (fixed.as_str(), None),
    };

    let mut body = if options.compact {
        int_part.to_string()
    } else {
        group_thousands(int_part)
    };
    if let Some(frac) = frac_part {
        body.push('.');
        body.push_str(frac);
    }
    body.push_str(suffix);

    // "-0.00" reads as zero
    let is_zero = body.chars().all(|c| !c.is_ascii_digit() || c == '0');
    let sign = if negative && !is_zero { "-" } else { "" };
    let currency = if options.currency { "$" } else { "" };
    format!("{sign}{currency}{body}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn sample_datetime() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 11, 4)
            .and_then(|d| d.and_hms_opt(13, 0, 0))
            .expect("valid date")
    }

    #[test]
    fn test_format_date_styles() {
        let dt = sample_datetime();
        assert_eq!(format_date(&dt, DateStyle::Default), "Nov 4, 2025");
        assert_eq!(format_date(&dt, DateStyle::Full), "November 4, 2025, 01:00 PM");
        assert_eq!(format_date(&dt, DateStyle::Time), "01:00 PM");
    }

    #[test]
    fn test_format_number_default() {
        assert_eq!(format_number(1234567.891, NumberFormat::default()), "1,234,567.89");
        assert_eq!(format_number(-42.0, NumberFormat::default()), "-42.00");
        assert_eq!(format_number(7.0, NumberFormat::default().decimals(0)), "7");
        assert_eq!(format_number(-0.001, NumberFormat::default()), "0.00");
    }

    #[test]
    fn test_format_number_currency() {
        let fmt = NumberFormat::default().currency();
        assert_eq!(format_number(50000.0, fmt), "$50,000.00");
        assert_eq!(format_number(-12.5, fmt), "-$12.50");
    }

    #[test]
    fn test_format_number_compact() {
        let fmt = NumberFormat::default().decimals(1).compact();
        assert_eq!(format_number(1234.0, fmt), "1.2K");
        assert_eq!(format_number(2_500_000.0, fmt), "2.5M");
        assert_eq!(format_number(999.0, fmt), "999.0");
        assert_eq!(format_number(999_999.0, fmt), "1.0M");
        assert_eq!(format_number(3.2e12, fmt), "3.2T");
        assert_eq!(format_number(45_678.0, fmt.currency()), "$45.7K");
    }

    #[test]
    fn test_truncate_is_char_safe() {
        assert_eq!(truncate("hello", 10), "hello");
        assert_eq!(truncate("hello world", 8), "hello...");
        assert_eq!(truncate("数据表格组件", 5), "数据...");
        assert_eq!(truncate("abcdef", 2), "ab");
    }

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(1234), "1,234");
        assert_eq!(format_count(-1234567), "-1,234,567");
        assert_eq!(format_count(12), "12");
        assert_eq!(format_count(i64::MIN), "-9,223,372,036,854,775,808");
    }
}
