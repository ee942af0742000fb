use std::fmt::Write as _;

use chrono::{Datelike, Days, Duration, Months, NaiveDate, NaiveDateTime, NaiveTime};

use crate::consts::{DATE_FORMAT, DATETIME_FORMAT};
use crate::types::{Period, PeriodUnit};
use crate::{Config, SeriesError};

/// Runs the whole generation pipeline for a validated configuration:
/// parse start/end, realign the start when a day period applies, enumerate,
/// and render every moment with the configured pattern.
pub(crate) fn generate(config: &Config) -> Result<Vec<String>, SeriesError> {
    let mut start = parse_moment(config.start(), config.has_time())?;
    let end = config
        .end()
        .map(|value| parse_moment(value, config.has_time()))
        .transpose()?;

    // Day periods snap the start forward to a period boundary counted from
    // Jan 1 of its year, unless exact dates were requested.
    if let Some(period) = config.period() {
        if period.unit() == PeriodUnit::Days && !config.exact_dates() {
            start = align_start(start, period.count())?;
        }
    }

    let moments = match end {
        Some(end) => {
            // validate() guarantees a period whenever an end is present
            let period = config.period().ok_or(SeriesError::MissingPeriod)?;
            enumerate(start, end, period)?
        }
        None => vec![start],
    };

    moments
        .into_iter()
        .map(|moment| render(moment, config.pattern()))
        .collect()
}

/// Parses a date or date-time string against the strict input format
/// selected by `has_time`. A date-only value lands at midnight.
pub(crate) fn parse_moment(value: &str, has_time: bool) -> Result<NaiveDateTime, SeriesError> {
    if has_time {
        NaiveDateTime::parse_from_str(value, DATETIME_FORMAT)
    } else {
        NaiveDate::parse_from_str(value, DATE_FORMAT).map(|date| date.and_time(NaiveTime::MIN))
    }
    .map_err(|_| SeriesError::InvalidDate {
        value: value.to_owned(),
    })
}

/// Snaps `start` forward to the next 1-based multiple of `every` days
/// counted from Jan 1 of its year. A start already on a boundary is
/// returned unchanged (time-of-day included); a realigned start is
/// reconstructed from the ordinal day and therefore lands at midnight.
///
/// # Errors
/// Returns `SeriesError::InvalidAlignment` when the realigned ordinal day
/// falls past the end of the start's year.
pub(crate) fn align_start(
    start: NaiveDateTime,
    every: u32,
) -> Result<NaiveDateTime, SeriesError> {
    let doy = start.ordinal();
    if (doy - 1) % every == 0 {
        return Ok(start);
    }
    let aligned = (doy - 1).div_ceil(every) * every + 1;
    let year = start.year();
    NaiveDate::from_yo_opt(year, aligned)
        .map(|date| date.and_time(NaiveTime::MIN))
        .ok_or(SeriesError::InvalidAlignment { doy: aligned, year })
}

/// Produces every moment `start + k * period` up to and including `end`.
/// An end before the start yields an empty sequence.
fn enumerate(
    start: NaiveDateTime,
    end: NaiveDateTime,
    period: Period,
) -> Result<Vec<NaiveDateTime>, SeriesError> {
    let mut moments = Vec::new();
    let mut step = 0;
    loop {
        let current = advance(start, period, step)?;
        if current > end {
            break;
        }
        moments.push(current);
        step += 1;
    }
    Ok(moments)
}

/// Advances `origin` by `step` whole periods. Steps are always taken from
/// the origin rather than cumulatively, so month and year steps preserve
/// the origin's day-of-month where possible (clamping at month end) and a
/// month-end start does not drift after passing through February.
fn advance(origin: NaiveDateTime, period: Period, step: u32) -> Result<NaiveDateTime, SeriesError> {
    let n = u64::from(period.count()) * u64::from(step);
    let advanced = match period.unit() {
        PeriodUnit::Hours => i64::try_from(n)
            .ok()
            .and_then(Duration::try_hours)
            .and_then(|d| origin.checked_add_signed(d)),
        PeriodUnit::Days => origin.checked_add_days(Days::new(n)),
        PeriodUnit::Weeks => n
            .checked_mul(7)
            .and_then(|days| origin.checked_add_days(Days::new(days))),
        PeriodUnit::Months => u32::try_from(n)
            .ok()
            .and_then(|months| origin.checked_add_months(Months::new(months))),
        PeriodUnit::Years => n
            .checked_mul(12)
            .and_then(|months| u32::try_from(months).ok())
            .and_then(|months| origin.checked_add_months(Months::new(months))),
    };
    advanced.ok_or_else(|| SeriesError::RangeError {
        reason: format!("cannot advance {origin} by {step} steps of {period}"),
    })
}

/// Renders one moment with the user pattern. Driving the formatter through
/// `write!` surfaces an unknown specifier as a `fmt::Error` instead of the
/// panic that `to_string` would produce.
fn render(moment: NaiveDateTime, pattern: &str) -> Result<String, SeriesError> {
    let mut rendered = String::new();
    write!(rendered, "{}", moment.format(pattern)).map_err(|_| SeriesError::BadPattern {
        pattern: pattern.to_owned(),
    })?;
    Ok(rendered)
}
