//! Custom Askama template filters.

#![allow(clippy::unnecessary_wraps)]

use std::fmt::Display;

use bluebox_core::UserStatus;

/// Returns the current year.
///
/// Usage in templates: `{{ ""|current_year }}`
#[allow(clippy::unnecessary_wraps)]
#[askama::filter_fn]
pub fn current_year(_value: impl Display, _env: &dyn askama::Values) -> askama::Result<i32> {
    use chrono::Datelike;
    Ok(chrono::Utc::now().year())
}

/// Maps a status label to its badge CSS class.
///
/// Usage in templates: `{{ user.status|status_badge }}`
#[askama::filter_fn]
pub fn status_badge(value: impl Display, _env: &dyn askama::Values) -> askama::Result<&'static str> {
    Ok(badge_class(&value.to_string()))
}

fn badge_class(label: &str) -> &'static str {
    match label.parse::<UserStatus>() {
        Ok(UserStatus::Approved) => "badge badge--approved",
        Ok(UserStatus::Pending) => "badge badge--pending",
        Ok(UserStatus::Denied) | Err(_) => "badge badge--denied",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_badge_class() {
        assert_eq!(badge_class("APPROVED"), "badge badge--approved");
        assert_eq!(badge_class("PENDING"), "badge badge--pending");
        assert_eq!(badge_class("DENIED"), "badge badge--denied");
    }
}
