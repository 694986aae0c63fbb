//! Locale-aware normalization of numeric form input.
//!
//! Price and weight fields arrive from the product form as free text typed
//! by the user. An empty field means "no value"; anything else must parse as
//! a decimal number written with the configured decimal separator. The
//! integer part may be split into thousands groups with the locale's
//! grouping character or whitespace (including no-break spaces), so
//! `1,234.50` and `1 234,50` both normalize to `1234.50` under their
//! respective locales. Groups must be well formed: `12.5` under a comma
//! locale is rejected rather than read as `125`.

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Errors that can occur when normalizing numeric form input.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum NormalizeError {
    #[error("Invalid decimal number: {input:?}")]
    Invalid { input: String },
    #[error("Weight cannot be negative: {input:?}")]
    NegativeWeight { input: String },
    #[error("Unknown decimal separator: {0:?}")]
    UnknownSeparator(String),
}

/// Character used to separate the integer and fractional parts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DecimalSeparator {
    /// `1,234.50`
    #[default]
    Dot,
    /// `1.234,50`
    Comma,
}

impl DecimalSeparator {
    /// The separator character itself.
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Self::Dot => '.',
            Self::Comma => ',',
        }
    }

    /// The digit-grouping character used alongside this separator.
    #[must_use]
    pub const fn grouping_char(self) -> char {
        match self {
            Self::Dot => ',',
            Self::Comma => '.',
        }
    }
}

impl FromStr for DecimalSeparator {
    type Err = NormalizeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "." | "dot" => Ok(Self::Dot),
            "," | "comma" => Ok(Self::Comma),
            other => Err(NormalizeError::UnknownSeparator(other.to_string())),
        }
    }
}

/// Normalize a decimal form field.
///
/// Returns `Ok(None)` for an empty (or whitespace-only) field.
///
/// # Errors
///
/// Returns [`NormalizeError::Invalid`] if the text is not a decimal number
/// in the given locale.
pub fn normalize_decimal(
    input: &str,
    separator: DecimalSeparator,
) -> Result<Option<Decimal>, NormalizeError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    let invalid = || NormalizeError::Invalid {
        input: input.to_string(),
    };

    let (integer, fraction) = match trimmed.split_once(separator.as_char()) {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (trimmed, None),
    };
    let (negative, integer) = match integer.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, integer.strip_prefix('+').unwrap_or(integer)),
    };

    let mut canonical = String::with_capacity(trimmed.len());
    if negative {
        canonical.push('-');
    }
    canonical.push_str(&ungroup(integer, separator).ok_or_else(invalid)?);
    if let Some(fraction) = fraction {
        if !fraction.chars().all(|c| c.is_ascii_digit()) {
            return Err(invalid());
        }
        canonical.push('.');
        canonical.push_str(fraction);
    }
    if !canonical.chars().any(|c| c.is_ascii_digit()) {
        return Err(invalid());
    }

    Decimal::from_str(&canonical)
        .map(|value| Some(value.normalize()))
        .map_err(|_| invalid())
}

/// Join the thousands groups of an integer part.
///
/// A single group is taken as is. Otherwise the first group holds one to
/// three digits and every later group exactly three.
fn ungroup(integer: &str, separator: DecimalSeparator) -> Option<String> {
    let mut groups = integer.split(|c: char| c == separator.grouping_char() || c.is_whitespace());
    let first = groups.next()?;
    if !first.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }

    let mut digits = first.to_string();
    let mut grouped = false;
    for group in groups {
        if group.len() != 3 || !group.chars().all(|c| c.is_ascii_digit()) {
            return None;
        }
        digits.push_str(group);
        grouped = true;
    }

    if grouped && !(1..=3).contains(&first.len()) {
        return None;
    }
    Some(digits)
}

/// Normalize a weight form field.
///
/// Same rules as [`normalize_decimal`], and additionally rejects negative
/// weights.
///
/// # Errors
///
/// Returns [`NormalizeError::Invalid`] for unparseable text and
/// [`NormalizeError::NegativeWeight`] for values below zero.
pub fn normalize_weight(
    input: &str,
    separator: DecimalSeparator,
) -> Result<Option<Decimal>, NormalizeError> {
    match normalize_decimal(input, separator)? {
        Some(weight) if weight.is_sign_negative() && !weight.is_zero() => {
            Err(NormalizeError::NegativeWeight {
                input: input.to_string(),
            })
        }
        weight => Ok(weight),
    }
}
