// src/core/dates.rs
use chrono::{Datelike, NaiveDate};

const DAY_FORMATS: [&str; 4] = ["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y", "%d %B %Y"];

/// Parse the date spellings traffic exports use.
/// Month-only forms ("2024-03", "March 2024", "Mar 2024") land on the 1st.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let s = raw.trim();
    if s.is_empty() {
        return None;
    }

    for f in DAY_FORMATS {
        if let Ok(d) = NaiveDate::parse_from_str(s, f) {
            return Some(d);
        }
    }

    // "2024-03-01 00:00:00" / "2024-03-01T00:00:00"
    if s.len() > 10 && s.is_char_boundary(10) {
        if let Ok(d) = NaiveDate::parse_from_str(&s[..10], "%Y-%m-%d") {
            return Some(d);
        }
    }

    // "2024-03"
    if let Ok(d) = NaiveDate::parse_from_str(&join!(s, "-01"), "%Y-%m-%d") {
        return Some(d);
    }

    // "March 2024" / "Mar 2024"
    let with_day = join!("1 ", s);
    for f in ["%d %B %Y", "%d %b %Y"] {
        if let Ok(d) = NaiveDate::parse_from_str(&with_day, f) {
            return Some(d);
        }
    }
    None
}

/// Table display.
pub fn fmt_date(d: NaiveDate) -> String {
    d.format("%Y-%m-%d").to_string()
}

/// Axis tick label.
pub fn fmt_month(d: NaiveDate) -> String {
    d.format("%b %Y").to_string()
}

/// Plot x coordinate for a date (days since 0001-01-01).
pub fn date_to_x(d: NaiveDate) -> f64 {
    d.num_days_from_ce() as f64
}

pub fn x_to_date(x: f64) -> Option<NaiveDate> {
    if !x.is_finite() || x.abs() > i32::MAX as f64 {
        return None;
    }
    NaiveDate::from_num_days_from_ce_opt(x.round() as i32)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn accepted_spellings() {
        assert_eq!(parse_date("2024-03-15"), Some(ymd(2024, 3, 15)));
        assert_eq!(parse_date("2024/03/15"), Some(ymd(2024, 3, 15)));
        assert_eq!(parse_date("03/15/2024"), Some(ymd(2024, 3, 15)));
        assert_eq!(parse_date("2024-03-15 00:00:00"), Some(ymd(2024, 3, 15)));
        assert_eq!(parse_date("2024-03"), Some(ymd(2024, 3, 1)));
        assert_eq!(parse_date("March 2024"), Some(ymd(2024, 3, 1)));
        assert_eq!(parse_date("Mar 2024"), Some(ymd(2024, 3, 1)));
        assert_eq!(parse_date("someday"), None);
        assert_eq!(parse_date(""), None);
    }

    #[test]
    fn plot_x_round_trips() {
        let d = ymd(2023, 12, 31);
        assert_eq!(x_to_date(date_to_x(d)), Some(d));
    }
}
