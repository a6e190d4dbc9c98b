use std::fmt;

use serde::{Serialize, Serializer};
use time::{format_description, OffsetDateTime, PrimitiveDateTime};
use time::macros::format_description;

use crate::error::Error;

/// Format used by the `temporal` filter when none is given.
pub const DEFAULT_FORMAT: &str = "[year]-[month]-[day] [hour]:[minute]:[second]";

/// A date and time without an offset, serialized into a view model as
/// `YYYY-MM-DDTHH:MM:SS.fffffffff`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocalDateTime(PrimitiveDateTime);

impl LocalDateTime {
    /// The current wall-clock time in the local offset, or in UTC when the
    /// local offset can't be determined.
    ///
    /// On Unix, `time` refuses to read the local offset once the process has
    /// more than one thread, so under Rocket's multi-threaded runtime this is
    /// effectively UTC.
    pub fn now() -> Self {
        let now = OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc());
        LocalDateTime(PrimitiveDateTime::new(now.date(), now.time()))
    }

    /// Parses the serialized form produced by `Serialize`/`Display`.
    pub fn parse(input: &str) -> Result<Self, Error> {
        let iso = format_description!(
            "[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond digits:9]"
        );

        PrimitiveDateTime::parse(input, &iso)
            .map(LocalDateTime)
            .map_err(|e| Error::Temporal(format!("{}: {}", input, e)))
    }

    /// Formats `self` with a `time` format description such as
    /// `[year]-[month]-[day] [hour]:[minute]`.
    pub fn format(&self, description: &str) -> Result<String, Error> {
        let items = format_description::parse(description)
            .map_err(|e| Error::Format(e.to_string()))?;

        self.0.format(&items).map_err(|e| Error::Format(e.to_string()))
    }
}

impl fmt::Display for LocalDateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let iso = format_description!(
            "[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond digits:9]"
        );

        let formatted = self.0.format(&iso).map_err(|_| fmt::Error)?;
        f.write_str(&formatted)
    }
}

impl Serialize for LocalDateTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
