//! Time handling for epoch-stamped settlement layers.
//!
//! GHSL epochs are reference years; each becomes a calendar-date time
//! coordinate of the form `YYYY-01-01` on the dataset's time axis.

use chrono::{Datelike, NaiveDate};

/// Convert an epoch year to its time-axis coordinate (January 1st).
pub fn epoch_date(epoch: i32) -> NaiveDate {
    // Jan 1 exists for every year chrono can represent.
    NaiveDate::from_ymd_opt(epoch, 1, 1).expect("valid epoch year")
}

/// Extract the calendar year from a time coordinate.
pub fn date_year(date: NaiveDate) -> i32 {
    date.year()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_epoch_date_format() {
        let d = epoch_date(2020);
        assert_eq!(d.to_string(), "2020-01-01");
    }

    #[test]
    fn test_date_year_roundtrip() {
        assert_eq!(date_year(epoch_date(1975)), 1975);
    }
}
