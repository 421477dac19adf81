//! Email address type.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing an [`Email`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum EmailError {
    /// The input is empty or only whitespace.
    #[error("email cannot be empty")]
    Empty,
    /// The input contains whitespace somewhere.
    #[error("email cannot contain whitespace")]
    ContainsWhitespace,
    /// The input does not contain an @ symbol.
    #[error("email must contain an @ symbol")]
    MissingAtSymbol,
    /// The input contains more than one @ symbol.
    #[error("email must contain exactly one @ symbol")]
    MultipleAtSymbols,
    /// The local part (before @) is empty.
    #[error("email local part cannot be empty")]
    EmptyLocalPart,
    /// The domain has no dot separating two non-empty labels.
    #[error("email domain must look like domain.tld")]
    InvalidDomain,
}

/// An email address.
///
/// Validation is deliberately simple: the whole value must match
/// `^[^\s@]+@[^\s@]+\.[^\s@]+$`. That is, no whitespace anywhere, exactly
/// one `@`, a non-empty local part, and a domain containing a dot with at
/// least one character on each side of it. It is not RFC 5321 validation.
///
/// ## Examples
///
/// ```
/// use bluebox_core::Email;
///
/// // Valid emails
/// assert!(Email::parse("ada@x.com").is_ok());
/// assert!(Email::parse("user.name+tag@domain.co.uk").is_ok());
///
/// // Invalid emails
/// assert!(Email::parse("").is_err());            // empty
/// assert!(Email::parse("bad").is_err());         // missing @
/// assert!(Email::parse("user@localhost").is_err()); // no dot in domain
/// assert!(Email::parse("a b@c.d").is_err());     // whitespace
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(try_from = "String", into = "String")]
pub struct Email(String);

impl Email {
    /// Parse an `Email` from a string.
    ///
    /// The emptiness check ignores surrounding whitespace; every other check
    /// runs against the raw input, so `" a@b.c"` is rejected as containing
    /// whitespace rather than being trimmed.
    ///
    /// # Errors
    ///
    /// Returns an error if the input:
    /// - Is empty after trimming
    /// - Contains whitespace
    /// - Does not contain exactly one @ symbol
    /// - Has an empty local part or a domain without an inner dot
    pub fn parse(s: &str) -> Result<Self, EmailError> {
        if s.trim_matches(is_space).is_empty() {
            return Err(EmailError::Empty);
        }

        if s.chars().any(is_space) {
            return Err(EmailError::ContainsWhitespace);
        }

        let (local, domain) = s.split_once('@').ok_or(EmailError::MissingAtSymbol)?;

        if domain.contains('@') {
            return Err(EmailError::MultipleAtSymbols);
        }

        if local.is_empty() {
            return Err(EmailError::EmptyLocalPart);
        }

        if !has_inner_dot(domain) {
            return Err(EmailError::InvalidDomain);
        }

        Ok(Self(s.to_owned()))
    }

    /// Returns the email address as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Whitespace as a JavaScript-style `\s` class sees it: the Unicode `Zs`
/// space separators, ASCII `\t \n \v \f \r`, the line and paragraph
/// separators, and the byte order mark.
///
/// Differs from [`char::is_whitespace`], which also counts U+0085 (NEL).
const fn is_space(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n' | '\u{0b}' | '\u{0c}' | '\r'
            | ' '
            | '\u{a0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200a}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202f}'
            | '\u{205f}'
            | '\u{3000}'
            | '\u{feff}'
    )
}

/// True when some `.` in `domain` has at least one character before and after it.
fn has_inner_dot(domain: &str) -> bool {
    let last = domain.len().saturating_sub(1);
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i < last)
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for Email {
    type Err = EmailError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Email {
    type Error = EmailError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Email> for String {
    fn from(email: Email) -> Self {
        email.0
    }
}

impl AsRef<str> for Email {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_emails() {
        assert!(Email::parse("maxbrand@mail.com").is_ok());
        assert!(Email::parse("user.name@example.com").is_ok());
        assert!(Email::parse("user+tag@example.com").is_ok());
        assert!(Email::parse("user@subdomain.example.com").is_ok());
        assert!(Email::parse("a@b.c").is_ok());
        // Dots next to each other still leave a non-empty label on each side
        assert!(Email::parse("a@b..c").is_ok());
        assert!(Email::parse("a@.b.c").is_ok());
    }

    #[test]
    fn test_parse_empty() {
        assert_eq!(Email::parse(""), Err(EmailError::Empty));
        assert_eq!(Email::parse("   "), Err(EmailError::Empty));
        assert_eq!(Email::parse("\t\n"), Err(EmailError::Empty));
    }

    #[test]
    fn test_parse_whitespace_is_not_trimmed() {
        assert_eq!(
            Email::parse(" ada@x.com"),
            Err(EmailError::ContainsWhitespace)
        );
        assert_eq!(
            Email::parse("ada@x.com "),
            Err(EmailError::ContainsWhitespace)
        );
        assert_eq!(
            Email::parse("a da@x.com"),
            Err(EmailError::ContainsWhitespace)
        );
        assert_eq!(
            Email::parse("ada@x.\u{feff}com"),
            Err(EmailError::ContainsWhitespace)
        );
    }

    #[test]
    fn test_parse_missing_at() {
        assert_eq!(Email::parse("bad"), Err(EmailError::MissingAtSymbol));
    }

    #[test]
    fn test_parse_multiple_at() {
        assert_eq!(
            Email::parse("a@b@c.com"),
            Err(EmailError::MultipleAtSymbols)
        );
    }

    #[test]
    fn test_parse_empty_local_part() {
        assert_eq!(Email::parse("@domain.com"), Err(EmailError::EmptyLocalPart));
    }

    #[test]
    fn test_parse_invalid_domain() {
        assert_eq!(Email::parse("user@"), Err(EmailError::InvalidDomain));
        assert_eq!(Email::parse("user@localhost"), Err(EmailError::InvalidDomain));
        assert_eq!(Email::parse("user@domain."), Err(EmailError::InvalidDomain));
        assert_eq!(Email::parse("user@.com"), Err(EmailError::InvalidDomain));
        assert_eq!(Email::parse("user@."), Err(EmailError::InvalidDomain));
    }

    #[test]
    fn test_whitespace_matches_js_class() {
        for space in ['\u{0b}', '\u{0c}', '\u{a0}', '\u{2003}', '\u{2028}', '\u{3000}'] {
            assert_eq!(
                Email::parse(&format!("a{space}b@x.com")),
                Err(EmailError::ContainsWhitespace),
                "U+{:04X}",
                u32::from(space)
            );
        }

        // NEL and zero-width space are not in the class.
        assert!(Email::parse("a\u{85}b@x.com").is_ok());
        assert!(Email::parse("a\u{200b}b@x.com").is_ok());
        assert_eq!(Email::parse("\u{85}"), Err(EmailError::MissingAtSymbol));
    }

    #[test]
    fn test_display() {
        let email = Email::parse("info@gmail.com").unwrap();
        assert_eq!(format!("{email}"), "info@gmail.com");
    }

    #[test]
    fn test_deserialize_validates() {
        let parsed: Email = serde_json::from_str("\"kevinp@gmail.com\"").unwrap();
        assert_eq!(parsed.as_str(), "kevinp@gmail.com");

        assert!(serde_json::from_str::<Email>("\"not-an-email\"").is_err());
    }
}
