//! Civil UTC date-time to Julian Day.

use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike};

/// JD UTC of a calendar date and day fraction (Meeus, Gregorian calendar).
fn calendar_to_jd(year: i32, month: u32, day_frac: f64) -> f64 {
    let (y, m) = if month <= 2 {
        (year as f64 - 1.0, month as f64 + 12.0)
    } else {
        (year as f64, month as f64)
    };
    let a = (y / 100.0).floor();
    let b = 2.0 - a + (a / 4.0).floor();

    (365.25 * (y + 4716.0)).floor() + (30.6001 * (m + 1.0)).floor() + day_frac + b - 1524.5
}

/// JD UTC of a UTC date-time.
pub fn jd_from_datetime(utc: NaiveDateTime) -> f64 {
    let day_frac = utc.day() as f64
        + utc.hour() as f64 / 24.0
        + utc.minute() as f64 / 1440.0
        + (utc.second() as f64 + utc.nanosecond() as f64 * 1e-9) / 86_400.0;
    calendar_to_jd(utc.year(), utc.month(), day_frac)
}

/// JD UTC of 00:00 UTC on `date`.
pub fn jd_from_date(date: NaiveDate) -> f64 {
    calendar_to_jd(date.year(), date.month(), date.day() as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn j2000_epoch() {
        let dt = NaiveDate::from_ymd_opt(2000, 1, 1)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap();
        assert!((jd_from_datetime(dt) - 2_451_545.0).abs() < 1e-9);
    }

    #[test]
    fn date_is_midnight() {
        let d = NaiveDate::from_ymd_opt(2024, 3, 20).unwrap();
        assert!((jd_from_date(d) - 2_460_389.5).abs() < 1e-9);
    }

    #[test]
    fn consecutive_days_differ_by_one() {
        let d = NaiveDate::from_ymd_opt(1999, 2, 28).unwrap();
        let next = d.succ_opt().unwrap();
        assert!((jd_from_date(next) - jd_from_date(d) - 1.0).abs() < 1e-9);
    }
}
