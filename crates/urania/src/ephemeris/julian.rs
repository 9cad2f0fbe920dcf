//! Calendar → continuous day count conversions.

use chrono::{DateTime, Datelike, NaiveDate, TimeZone, Timelike, Utc};

/// Julian Day of the J2000.0 epoch (2000-01-01 12:00 TT)
pub const J2000_EPOCH: f64 = 2451545.0;

/// Julian Day Number of a Gregorian calendar date (noon-based integer).
pub fn julian_day_number(year: i32, month: u32, day: u32) -> i64 {
    let a = (14 - month as i64) / 12;
    let y = year as i64 + 4800 - a;
    let m = month as i64 + 12 * a - 3;

    day as i64 + (153 * m + 2) / 5 + 365 * y + y / 4 - y / 100 + y / 400 - 32045
}

/// Julian Day including the fractional day from the UTC time of day.
pub fn julian_day(datetime: DateTime<Utc>) -> f64 {
    let jdn = julian_day_number(datetime.year(), datetime.month(), datetime.day());
    jdn as f64
        + (datetime.hour() as f64 - 12.0) / 24.0
        + datetime.minute() as f64 / 1440.0
        + datetime.second() as f64 / 86400.0
}

pub fn days_since_j2000(julian_day: f64) -> f64 {
    julian_day - J2000_EPOCH
}

/// Calendar date as the integer YYYYMMDD, the base of every daily seed.
pub fn date_seed(datetime: DateTime<Utc>) -> i64 {
    datetime.year() as i64 * 10000 + datetime.month() as i64 * 100 + datetime.day() as i64
}

/// Midnight UTC of a calendar date.
pub fn midnight_utc(date: NaiveDate) -> DateTime<Utc> {
    Utc.from_utc_datetime(&date.and_time(chrono::NaiveTime::MIN))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_julian_day_j2000() {
        let noon = Utc.with_ymd_and_hms(2000, 1, 1, 12, 0, 0).unwrap();
        assert_eq!(julian_day(noon), J2000_EPOCH);
        assert_eq!(days_since_j2000(julian_day(noon)), 0.0);
    }

    #[test]
    fn test_julian_day_midnight_is_half_day() {
        let midnight = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        assert_eq!(julian_day_number(2024, 1, 1), 2460311);
        assert_eq!(julian_day(midnight), 2460310.5);
    }

    #[test]
    fn test_time_of_day_fraction() {
        let dt = Utc.with_ymd_and_hms(2024, 3, 20, 18, 30, 0).unwrap();
        let expected = julian_day_number(2024, 3, 20) as f64 + 6.0 / 24.0 + 30.0 / 1440.0;
        assert!((julian_day(dt) - expected).abs() < 1e-9);
    }

    #[test]
    fn test_date_seed() {
        let dt = Utc.with_ymd_and_hms(2025, 7, 4, 23, 59, 59).unwrap();
        assert_eq!(date_seed(dt), 20250704);
        let date = NaiveDate::from_ymd_opt(2025, 7, 4).unwrap();
        assert_eq!(date_seed(midnight_utc(date)), 20250704);
    }
}
