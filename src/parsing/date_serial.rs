//! Spreadsheet date serial decoding (1900 date system).
//!
//! Serial 1 is 1900-01-01. The 1900 system counts a phantom 1900-02-29 as
//! serial 60, so serials from 61 onwards are offset from a 1899-12-30 base
//! while the serials below 60 are offset from 1899-12-31. Serial 60 itself
//! reads as 1900-02-28, the same day as serial 59.

use chrono::{Days, NaiveDate};

use crate::models::Cell;

/// Serials at or below this value are ignored when looking for the date row.
///
/// It covers serials 0 through 59, i.e. 1899-12-31 to 1900-02-28. Serial 60,
/// the phantom leap day, lies above the floor and counts like any other date.
pub const DEFAULT_DATE_SERIAL_FLOOR: f64 = 59.0;

/// The serial the 1900 system assigns to the non-existent 1900-02-29.
const PHANTOM_LEAP_DAY: u64 = 60;

/// Converts a date serial to a calendar date.
///
/// The fractional (time-of-day) part is ignored. The phantom 1900-02-29
/// (serial 60, and anything up to 61) decodes as 1900-02-28 since the day
/// does not exist. Returns `None` only for negative or non-finite serials
/// and for serials beyond the representable date range.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use shift_roster::parsing::serial_to_date;
///
/// assert_eq!(serial_to_date(1.0), NaiveDate::from_ymd_opt(1900, 1, 1));
/// assert_eq!(serial_to_date(44927.0), NaiveDate::from_ymd_opt(2023, 1, 1));
/// assert_eq!(serial_to_date(44927.75), NaiveDate::from_ymd_opt(2023, 1, 1));
/// assert_eq!(serial_to_date(60.0), NaiveDate::from_ymd_opt(1900, 2, 28));
/// assert_eq!(serial_to_date(-1.0), None);
/// ```
pub fn serial_to_date(serial: f64) -> Option<NaiveDate> {
    if !serial.is_finite() || serial < 0.0 {
        return None;
    }

    let days = serial.floor() as u64;
    let base = match days {
        PHANTOM_LEAP_DAY => return NaiveDate::from_ymd_opt(1900, 2, 28),
        0..PHANTOM_LEAP_DAY => NaiveDate::from_ymd_opt(1899, 12, 31)?,
        _ => NaiveDate::from_ymd_opt(1899, 12, 30)?,
    };

    base.checked_add_days(Days::new(days))
}

/// Decodes a cell as a date, if it is a numeric cell holding a valid serial.
pub fn cell_to_date(cell: &Cell) -> Option<NaiveDate> {
    cell.serial().and_then(serial_to_date)
}
