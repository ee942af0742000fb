mod consts;
mod prelude;
mod series;
#[cfg(test)]
mod test_utils;
mod types;

pub use consts::*;
pub use types::{Period, PeriodUnit};

use serde::{Deserialize, Deserializer};

/// The single failure kind surfaced to the host. Every validation, parsing,
/// alignment, enumeration, or formatting failure is one of these variants;
/// generation aborts on the first failure and returns no partial output.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SeriesError {
    /// `pattern` or `start` was not provided.
    #[error("Required parameter {param} not provided")]
    MissingRequiredParam { param: &'static str },

    /// An end date was provided without a period.
    #[error("A period is required when both start and end are provided")]
    MissingPeriod,

    /// A start or end value does not match the expected format or does not
    /// denote a real calendar date.
    #[error("Invalid date value: {value}")]
    InvalidDate { value: String },

    /// The period string has an unrecognized unit or a bad magnitude.
    #[error("Invalid period {value:?}: {reason}")]
    InvalidPeriod { value: String, reason: &'static str },

    /// Day-of-year realignment landed past the end of the start's year.
    #[error("Period alignment lands on day {doy}, past the end of {year}")]
    InvalidAlignment { doy: u32, year: i32 },

    /// Stepping arithmetic could not proceed.
    #[error("Cannot enumerate the range: {reason}")]
    RangeError { reason: String },

    /// The pattern failed while rendering a moment.
    #[error("Cannot format with pattern: {pattern:?}")]
    BadPattern { pattern: String },
}

/// Raw named parameters as the host hands them over. Everything is optional
/// here; [`Params::validate`] decides what is actually required and applies
/// the flag defaults.
///
/// The two boolean flags may arrive as native booleans or as string
/// spellings ([`TRUE_WORDS`] / [`FALSE_WORDS`]), depending on host
/// convention.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Params {
    pub pattern: Option<String>,
    pub start: Option<String>,
    pub end: Option<String>,
    pub period: Option<String>,
    #[serde(deserialize_with = "flag")]
    pub has_time: Option<bool>,
    #[serde(deserialize_with = "flag")]
    pub exact_dates: Option<bool>,
}

impl Params {
    /// Checks completeness and consistency before any date math: `pattern`
    /// and `start` must be present, an `end` requires a `period`, and the
    /// period string must parse. Flag defaults (`false`) are applied here.
    ///
    /// # Errors
    /// Returns `MissingRequiredParam`, `MissingPeriod`, or `InvalidPeriod`.
    pub fn validate(self) -> Result<Config, SeriesError> {
        let pattern = self
            .pattern
            .ok_or(SeriesError::MissingRequiredParam { param: "pattern" })?;
        let start = self
            .start
            .ok_or(SeriesError::MissingRequiredParam { param: "start" })?;
        if self.end.is_some() && self.period.is_none() {
            return Err(SeriesError::MissingPeriod);
        }
        let period = self
            .period
            .as_deref()
            .map(str::parse::<Period>)
            .transpose()?;
        Ok(Config {
            pattern,
            start,
            end: self.end,
            period,
            has_time: self.has_time.unwrap_or(false),
            exact_dates: self.exact_dates.unwrap_or(false),
        })
    }
}

/// A validated, immutable generation configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pattern: String,
    start: String,
    end: Option<String>,
    period: Option<Period>,
    has_time: bool,
    exact_dates: bool,
}

impl Config {
    /// Produces the ordered list of formatted values for this
    /// configuration. Pure: calling it again yields an identical list.
    ///
    /// # Errors
    /// Returns `InvalidDate`, `InvalidAlignment`, `RangeError`, or
    /// `BadPattern` depending on the stage that failed.
    pub fn values(&self) -> Result<Vec<String>, SeriesError> {
        series::generate(self)
    }

    /// Returns the formatting pattern
    #[inline]
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Returns the raw start string
    #[inline]
    pub fn start(&self) -> &str {
        &self.start
    }

    /// Returns the raw end string, if one was given
    #[inline]
    pub fn end(&self) -> Option<&str> {
        self.end.as_deref()
    }

    /// Returns the period, if one was given
    #[inline]
    pub const fn period(&self) -> Option<Period> {
        self.period
    }

    /// Returns whether start/end carry a time-of-day component
    #[inline]
    pub const fn has_time(&self) -> bool {
        self.has_time
    }

    /// Returns whether day-period alignment is disabled
    #[inline]
    pub const fn exact_dates(&self) -> bool {
        self.exact_dates
    }
}

/// Validates `params` and produces the ordered list of formatted values in
/// one call.
///
/// # Errors
/// Returns the first [`SeriesError`] hit by validation or generation.
pub fn expand(params: Params) -> Result<Vec<String>, SeriesError> {
    params.validate()?.values()
}

fn coerce_flag(text: &str) -> Option<bool> {
    let lowered = text.trim().to_ascii_lowercase();
    if TRUE_WORDS.contains(&lowered.as_str()) {
        Some(true)
    } else if FALSE_WORDS.contains(&lowered.as_str()) {
        Some(false)
    } else {
        None
    }
}

fn flag<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Bool(bool),
        Text(String),
    }

    match Option::<Raw>::deserialize(deserializer)? {
        None => Ok(None),
        Some(Raw::Bool(value)) => Ok(Some(value)),
        Some(Raw::Text(text)) => coerce_flag(&text).map(Some).ok_or_else(|| {
            serde::de::Error::custom(format!("unrecognized boolean flag value: {text:?}"))
        }),
    }
}
