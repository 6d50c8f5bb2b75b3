//! Date parsing against a fixed format pattern

use super::Transform;
use crate::error::{MappingError, Result};
use chrono::format::{Item, Parsed, StrftimeItems};
use chrono::{DateTime, FixedOffset, NaiveTime, Offset, TimeZone, Utc};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Pattern {
    Strftime(String),
    Rfc3339,
}

/// Parses string nodes into UTC timestamps
///
/// The pattern uses `chrono` strftime syntax and must consume the whole input.
/// Patterns with an offset specifier (`%z`, `%:z`) yield the instant they
/// describe. Patterns without one are read in the transform's offset (UTC by
/// default); date-only patterns resolve to midnight in that offset, and an
/// hour without minutes or seconds resolves to the top of that hour. `%s`
/// timestamps are absolute and ignore the offset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateTransform {
    pattern: Pattern,
    offset: FixedOffset,
}

impl DateTransform {
    /// Create a transform for a strftime-style pattern
    ///
    /// Fails with [`MappingError::InvalidDateFormat`] if the pattern contains
    /// an unknown or malformed specifier.
    pub fn new(format: impl Into<String>) -> Result<Self> {
        let format = format.into();
        if StrftimeItems::new(&format).any(|item| matches!(item, Item::Error)) {
            return Err(MappingError::InvalidDateFormat { format });
        }

        Ok(Self {
            pattern: Pattern::Strftime(format),
            offset: utc_offset(),
        })
    }

    /// Create a transform accepting RFC 3339 timestamps
    pub fn rfc3339() -> Self {
        Self {
            pattern: Pattern::Rfc3339,
            offset: utc_offset(),
        }
    }

    /// Offset used for inputs that carry none
    pub fn with_offset(mut self, offset: FixedOffset) -> Self {
        self.offset = offset;
        self
    }

    /// The strftime pattern, or `None` for RFC 3339
    pub fn format(&self) -> Option<&str> {
        match &self.pattern {
            Pattern::Strftime(format) => Some(format),
            Pattern::Rfc3339 => None,
        }
    }

    /// Offset applied to inputs without one
    pub fn offset(&self) -> FixedOffset {
        self.offset
    }

    fn parse(&self, text: &str) -> Option<DateTime<Utc>> {
        let format = match &self.pattern {
            Pattern::Rfc3339 => {
                return DateTime::parse_from_rfc3339(text)
                    .ok()
                    .map(|dt| dt.with_timezone(&Utc));
            }
            Pattern::Strftime(format) => format.as_str(),
        };

        let mut parsed = Parsed::new();
        chrono::format::parse(&mut parsed, text, StrftimeItems::new(format)).ok()?;

        if parsed.timestamp().is_some() {
            let naive = parsed.to_naive_datetime_with_offset(0).ok()?;
            return Some(Utc.from_utc_datetime(&naive));
        }

        let date = parsed.to_naive_date().ok()?;
        let time = resolve_time(&parsed)?;
        let offset = match parsed.offset() {
            Some(seconds) => FixedOffset::east_opt(seconds)?,
            None => self.offset,
        };

        offset
            .from_local_datetime(&date.and_time(time))
            .single()
            .map(|dt| dt.with_timezone(&Utc))
    }
}

/// Time of day from the parsed fields. No time fields means midnight; an hour
/// without minutes or seconds fills them with zero.
fn resolve_time(parsed: &Parsed) -> Option<NaiveTime> {
    let has_time = parsed.hour_div_12().is_some()
        || parsed.hour_mod_12().is_some()
        || parsed.minute().is_some()
        || parsed.second().is_some()
        || parsed.nanosecond().is_some();
    if !has_time {
        return NaiveTime::from_hms_opt(0, 0, 0);
    }

    let mut parsed = parsed.clone();
    if parsed.minute().is_none() {
        parsed.set_minute(0).ok()?;
    }
    if parsed.second().is_none() {
        parsed.set_second(0).ok()?;
    }
    parsed.to_naive_time().ok()
}

impl Transform for DateTransform {
    type Output = DateTime<Utc>;

    fn apply(&self, input: &Value) -> Option<Self::Output> {
        match input {
            Value::String(text) => self.parse(text),
            _ => None,
        }
    }
}

fn utc_offset() -> FixedOffset {
    Utc.fix()
}
