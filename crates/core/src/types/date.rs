//! Join date of a user record.

use core::fmt;

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// The calendar day a user record was created.
///
/// Displays as `DD Mon YYYY`, e.g. `25 Apr 2024`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JoinDate(NaiveDate);

impl JoinDate {
    /// `strftime` pattern for the display form.
    pub const DISPLAY_FORMAT: &'static str = "%d %b %Y";

    /// Build from year, month and day. Returns `None` for an impossible date.
    #[must_use]
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }

    /// Today's date in UTC.
    #[must_use]
    pub fn today() -> Self {
        Self(Utc::now().date_naive())
    }
}

impl fmt::Display for JoinDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(Self::DISPLAY_FORMAT))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_display_format() {
        let date = JoinDate::from_ymd(2024, 4, 25).unwrap();
        assert_eq!(date.to_string(), "25 Apr 2024");
    }

    #[test]
    fn test_display_pads_day() {
        let date = JoinDate::from_ymd(2026, 10, 3).unwrap();
        assert_eq!(date.to_string(), "03 Oct 2026");
    }

    #[test]
    fn test_invalid_date() {
        assert!(JoinDate::from_ymd(2024, 2, 30).is_none());
    }
}
