//! Kebab-case name validation.
//!
//! Plugin, skill, command, and agent names all share the same shape:
//! lowercase alphanumeric segments joined by single hyphens.

use std::fmt;

pub const MAX_LENGTH: usize = 64;

/// Check that a name is valid kebab-case.
///
/// # Errors
///
/// Returns an error describing the first violation found.
pub fn validate_kebab_name(name: &str) -> Result<(), InvalidName> {
    if name.is_empty() {
        return Err(InvalidName::Empty);
    }

    if name.len() > MAX_LENGTH {
        return Err(InvalidName::TooLong(name.len()));
    }

    if name.starts_with('-') || name.ends_with('-') {
        return Err(InvalidName::LeadingOrTrailingHyphen);
    }

    if name.contains("--") {
        return Err(InvalidName::ConsecutiveHyphens);
    }

    for c in name.chars() {
        if !c.is_ascii_lowercase() && !c.is_ascii_digit() && c != '-' {
            return Err(InvalidName::InvalidCharacter(c));
        }
    }

    Ok(())
}

/// Ways a kebab-case name can be invalid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidName {
    /// Name is empty.
    Empty,
    /// Name exceeds maximum length.
    TooLong(usize),
    /// Name starts or ends with a hyphen.
    LeadingOrTrailingHyphen,
    /// Name contains consecutive hyphens.
    ConsecutiveHyphens,
    /// Name contains an invalid character.
    InvalidCharacter(char),
}

impl fmt::Display for InvalidName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "name cannot be empty"),
            Self::TooLong(len) => {
                write!(f, "name too long ({len} chars, max {MAX_LENGTH})")
            }
            Self::LeadingOrTrailingHyphen => {
                write!(f, "name cannot start or end with a hyphen")
            }
            Self::ConsecutiveHyphens => {
                write!(f, "name cannot contain consecutive hyphens")
            }
            Self::InvalidCharacter(c) => {
                write!(
                    f,
                    "invalid character '{c}': only lowercase alphanumeric and hyphens allowed"
                )
            }
        }
    }
}

impl std::error::Error for InvalidName {}
