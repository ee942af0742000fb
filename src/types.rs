use crate::SeriesError;
use crate::prelude::*;
use std::str::FromStr;

/// Unit code for a period, matching the single-character frequency codes
/// accepted in period strings (`H`, `D`, `W`, `M`, `Y`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum PeriodUnit {
    /// `H`: whole hours
    #[display(fmt = "H")]
    Hours,
    /// `D`: calendar days
    #[display(fmt = "D")]
    Days,
    /// `W`: weeks (seven days)
    #[display(fmt = "W")]
    Weeks,
    /// `M`: calendar months, clamped at month end
    #[display(fmt = "M")]
    Months,
    /// `Y`: calendar years
    #[display(fmt = "Y")]
    Years,
}

impl PeriodUnit {
    /// Maps a frequency code character to its unit. Codes are
    /// case-sensitive: `d` is not a valid day code.
    pub const fn from_code(code: char) -> Option<Self> {
        match code {
            'H' => Some(Self::Hours),
            'D' => Some(Self::Days),
            'W' => Some(Self::Weeks),
            'M' => Some(Self::Months),
            'Y' => Some(Self::Years),
            _ => None,
        }
    }

    /// Returns the single-character code for this unit
    pub const fn code(self) -> char {
        match self {
            Self::Hours => 'H',
            Self::Days => 'D',
            Self::Weeks => 'W',
            Self::Months => 'M',
            Self::Years => 'Y',
        }
    }
}

/// A step size for date enumeration: a positive integer magnitude followed
/// by a unit code, e.g. `5D` is every five days and `2M` every two months.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[display(fmt = "{count}{unit}")]
pub struct Period {
    count: u32,
    unit: PeriodUnit,
}

impl Period {
    /// Creates a new period, validating that the magnitude is positive.
    ///
    /// # Errors
    /// Returns `SeriesError::InvalidPeriod` if `count` is zero.
    pub fn new(count: u32, unit: PeriodUnit) -> Result<Self, SeriesError> {
        if count == 0 {
            return Err(SeriesError::InvalidPeriod {
                value: format!("0{unit}"),
                reason: "magnitude must be positive",
            });
        }
        Ok(Self { count, unit })
    }

    /// Returns the magnitude (always >= 1)
    #[inline]
    pub const fn count(self) -> u32 {
        self.count
    }

    /// Returns the unit
    #[inline]
    pub const fn unit(self) -> PeriodUnit {
        self.unit
    }
}

impl FromStr for Period {
    type Err = SeriesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let Some(code) = trimmed.chars().last() else {
            return Err(SeriesError::InvalidPeriod {
                value: s.to_owned(),
                reason: "empty period string",
            });
        };
        let unit = PeriodUnit::from_code(code).ok_or_else(|| SeriesError::InvalidPeriod {
            value: s.to_owned(),
            reason: "unrecognized unit code",
        })?;
        let digits = &trimmed[..trimmed.len() - code.len_utf8()];
        if digits.is_empty() {
            return Err(SeriesError::InvalidPeriod {
                value: s.to_owned(),
                reason: "missing magnitude",
            });
        }
        let count = digits
            .parse::<u32>()
            .map_err(|_| SeriesError::InvalidPeriod {
                value: s.to_owned(),
                reason: "magnitude is not an unsigned integer",
            })?;
        Self::new(count, unit).map_err(|_| SeriesError::InvalidPeriod {
            value: s.to_owned(),
            reason: "magnitude must be positive",
        })
    }
}

impl serde::Serialize for Period {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for Period {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
