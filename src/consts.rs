/// Strict input format for a date without a time-of-day (`mm/dd/yyyy`)
pub const DATE_FORMAT: &str = "%m/%d/%Y";

/// Strict input format for a date with a time-of-day
/// (`mm/dd/yyyy hh:mm:ss`, 24-hour clock)
pub const DATETIME_FORMAT: &str = "%m/%d/%Y %H:%M:%S";

/// Spellings accepted as a true flag value (compared case-insensitively)
pub const TRUE_WORDS: [&str; 5] = ["true", "t", "yes", "y", "1"];

/// Spellings accepted as a false flag value (compared case-insensitively)
pub const FALSE_WORDS: [&str; 5] = ["false", "f", "no", "n", "0"];
