//! Expiration warnings shown next to inventory items.
//!
//! - `expired`: the date has passed
//! - `soon`: today or within [`SOON_THRESHOLD_DAYS`] days
//! - `ok`: anything later
use chrono::NaiveDate;
use serde::Serialize;

pub const SOON_THRESHOLD_DAYS: i64 = 3;
pub const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Expiry {
    Ok,
    Soon,
    Expired,
}

#[derive(Serialize, Debug, PartialEq, Eq)]
pub struct ExpiryReport {
    pub status: Expiry,
    pub days_left: i64,
}

pub fn parse_date(date: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(date.trim(), DATE_FORMAT).ok()
}

pub fn days_left(expiration: NaiveDate, today: NaiveDate) -> i64 {
    (expiration - today).num_days()
}

pub fn classify(expiration: NaiveDate, today: NaiveDate) -> Expiry {
    match days_left(expiration, today) {
        days if days < 0 => Expiry::Expired,
        days if days <= SOON_THRESHOLD_DAYS => Expiry::Soon,
        _ => Expiry::Ok,
    }
}

pub fn report(expiration: NaiveDate, today: NaiveDate) -> ExpiryReport {
    ExpiryReport {
        status: classify(expiration, today),
        days_left: days_left(expiration, today),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        parse_date(s).unwrap()
    }

    #[test]
    fn test_thresholds() {
        let today = date("2025-03-10");

        assert_eq!(classify(date("2025-03-09"), today), Expiry::Expired);
        assert_eq!(classify(date("2025-03-10"), today), Expiry::Soon);
        assert_eq!(classify(date("2025-03-13"), today), Expiry::Soon);
        assert_eq!(classify(date("2025-03-14"), today), Expiry::Ok);
    }

    #[test]
    fn test_across_month_boundary() {
        assert_eq!(
            report(date("2025-03-01"), date("2025-02-27")),
            ExpiryReport {
                status: Expiry::Soon,
                days_left: 2
            }
        );
        assert_eq!(days_left(date("2024-12-31"), date("2025-01-02")), -2);
    }

    #[test]
    fn test_parse_date() {
        assert!(parse_date(" 2025-01-05 ").is_some());
        assert!(parse_date("05.01.2025").is_none());
        assert!(parse_date("2025-02-30").is_none());
        assert!(parse_date("").is_none());
    }
}
