//! Shared constructors for the crate's tests.

use crate::Params;
use chrono::{NaiveDate, NaiveDateTime};

/// Params with just a pattern and a start date.
pub fn date_params(pattern: &str, start: &str) -> Params {
    Params {
        pattern: Some(pattern.to_owned()),
        start: Some(start.to_owned()),
        ..Params::default()
    }
}

/// Params describing a full start/end/period range.
pub fn ranged_params(pattern: &str, start: &str, end: &str, period: &str) -> Params {
    Params {
        end: Some(end.to_owned()),
        period: Some(period.to_owned()),
        ..date_params(pattern, start)
    }
}

/// A concrete moment from its components.
pub fn moment(year: i32, month: u32, day: u32, hour: u32, min: u32, sec: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|date| date.and_hms_opt(hour, min, sec))
        .unwrap_or_else(|| panic!("invalid test moment {year}-{month}-{day} {hour}:{min}:{sec}"))
}
