// src/core/numeric.rs
use std::fmt;

/// Visit count from a raw cell: thousands separators stripped,
/// anything empty / `nan` / non-numeric / negative reads as 0.
pub fn parse_visits(cell: &str) -> u64 {
    let cleaned: String = cell.chars().filter(|c| *c != ',').collect();
    let t = cleaned.trim();
    if t.is_empty() || t.eq_ignore_ascii_case("nan") {
        return 0;
    }
    if let Ok(v) = t.parse::<u64>() {
        return v;
    }
    match t.parse::<f64>() {
        Ok(v) if v.is_finite() && v > 0.0 => v.round() as u64,
        _ => 0,
    }
}

/// Latitude/longitude cell; empty or junk is absent.
pub fn parse_coordinate(cell: &str) -> Option<f64> {
    let t = cell.trim();
    if t.is_empty() {
        return None;
    }
    t.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Signed difference without overflow surprises.
pub fn change(previous: u64, current: u64) -> i64 {
    (current as i128 - previous as i128).clamp(i64::MIN as i128, i64::MAX as i128) as i64
}

/// Percentage change against a previous period.
/// A zero or missing previous value has no meaningful ratio.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PercentChange {
    Finite(f64),
    Undefined,
}

impl PercentChange {
    pub fn between(previous: Option<u64>, current: u64) -> Self {
        match previous {
            Some(p) if p > 0 => PercentChange::Finite(change(p, current) as f64 / p as f64 * 100.0),
            _ => PercentChange::Undefined,
        }
    }

    pub fn value(&self) -> Option<f64> {
        match self {
            PercentChange::Finite(v) => Some(*v),
            PercentChange::Undefined => None,
        }
    }

    pub fn is_defined(&self) -> bool {
        matches!(self, PercentChange::Finite(_))
    }
}

impl fmt::Display for PercentChange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PercentChange::Finite(v) => write!(f, "{:+.1}%", v),
            PercentChange::Undefined => f.write_str("n/a"),
        }
    }
}

/// `1234567` -> `1,234,567`
pub fn fmt_thousands(v: u64) -> String {
    let digits = v.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// `-1234` -> `-1,234`, `0` -> `+0`
pub fn fmt_signed_thousands(v: i64) -> String {
    let sign = if v < 0 { '-' } else { '+' };
    join!(&sign.to_string(), &fmt_thousands(v.unsigned_abs()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thousands() {
        assert_eq!(fmt_thousands(0), "0");
        assert_eq!(fmt_thousands(999), "999");
        assert_eq!(fmt_thousands(1000), "1,000");
        assert_eq!(fmt_thousands(1234567), "1,234,567");
        assert_eq!(fmt_signed_thousands(-1234), "-1,234");
        assert_eq!(fmt_signed_thousands(0), "+0");
    }

    #[test]
    fn float_cells_round() {
        assert_eq!(parse_visits("1234.0"), 1234);
        assert_eq!(parse_visits(" 12.6 "), 13);
        assert_eq!(parse_visits("-5"), 0);
        assert_eq!(parse_visits("n/a"), 0);
    }

    #[test]
    fn percent_display() {
        assert_eq!(PercentChange::between(Some(200), 250).to_string(), "+25.0%");
        assert_eq!(PercentChange::between(Some(200), 150).to_string(), "-25.0%");
        assert_eq!(PercentChange::between(None, 150).to_string(), "n/a");
    }
}
