use chrono::{DateTime, NaiveDate, NaiveDateTime};

fn group_digits(digits: &str, separator: char) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(ch);
    }
    grouped
}

/// Shortest decimal rendering: `10` for whole numbers, `10.5` otherwise.
pub fn format_plain_number(value: f64) -> String {
    if !value.is_finite() {
        return String::new();
    }
    if value.fract().abs() < f64::EPSILON {
        format!("{}", value as i64)
    } else {
        let mut text = format!("{value:.6}");
        while text.ends_with('0') {
            text.pop();
        }
        if text.ends_with('.') {
            text.pop();
        }
        text
    }
}

/// en-US grouping with at most three fraction digits.
pub fn format_thousands(value: f64) -> String {
    if !value.is_finite() {
        return String::new();
    }
    let fixed = format!("{:.3}", value.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let frac_part = frac_part.trim_end_matches('0');
    let is_zero = int_part == "0" && frac_part.is_empty();
    let sign = if value < 0.0 && !is_zero { "-" } else { "" };

    let mut text = format!("{sign}{}", group_digits(int_part, ','));
    if !frac_part.is_empty() {
        text.push('.');
        text.push_str(frac_part);
    }
    text
}

/// Colombian pesos, no decimals, `.` as the thousands separator.
pub fn format_currency(value: f64) -> String {
    if !value.is_finite() {
        return String::new();
    }
    let rounded = value.abs().round();
    let digits = format!("{rounded:.0}");
    let sign = if value < 0.0 && rounded > 0.0 { "-" } else { "" };
    format!("{sign}$ {}", group_digits(&digits, '.'))
}

pub fn format_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

/// Accepts RFC 3339 timestamps, zone-less ISO timestamps and plain dates.
pub fn parse_date(text: &str) -> Option<NaiveDate> {
    let text = text.trim();
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(text) {
        return Some(timestamp.date_naive());
    }
    if let Ok(timestamp) = NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(timestamp.date());
    }
    NaiveDate::parse_from_str(text, "%Y-%m-%d").ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_numbers_drop_trailing_zeros() {
        assert_eq!(format_plain_number(10.0), "10");
        assert_eq!(format_plain_number(10.5), "10.5");
        assert_eq!(format_plain_number(f64::NAN), "");
    }

    #[test]
    fn thousands_use_comma_groups() {
        assert_eq!(format_thousands(0.0), "0");
        assert_eq!(format_thousands(999.0), "999");
        assert_eq!(format_thousands(1234567.0), "1,234,567");
        assert_eq!(format_thousands(-1500.25), "-1,500.25");
        assert_eq!(format_thousands(2.0004), "2");
    }

    #[test]
    fn currency_rounds_to_whole_pesos() {
        assert_eq!(format_currency(12500.0), "$ 12.500");
        assert_eq!(format_currency(2.5), "$ 3");
        assert_eq!(format_currency(1999999.4), "$ 1.999.999");
        assert_eq!(format_currency(-300.0), "-$ 300");
    }

    #[test]
    fn parse_date_accepts_backend_timestamps() {
        let expected = NaiveDate::from_ymd_opt(2024, 5, 17).expect("valid date");

        assert_eq!(parse_date("2024-05-17T10:20:30.000Z"), Some(expected));
        assert_eq!(parse_date("2024-05-17T10:20:30.123"), Some(expected));
        assert_eq!(parse_date("2024-05-17"), Some(expected));
        assert_eq!(parse_date("ayer"), None);
        assert_eq!(format_date(expected), "17/05/2024");
    }
}
