//! SIRET and SIREN validation, extraction and formatting
//!
//! A SIRET is 14 digits: the 9-digit SIREN of the legal entity followed by
//! the 5-digit NIC of the establishment. The whole number carries a Luhn
//! checksum where digits at even positions (0, 2, ..., 12) are doubled.
//!
//! The free functions take `Option<&str>` so form code can pass an unset
//! field straight through; they never fail, an unusable input simply yields
//! `false`, an empty string or `None`.

use std::fmt;
use std::str::FromStr;

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::IdentifierError;

/// Number of digits in a SIRET
pub const SIRET_LEN: usize = 14;

/// Number of digits in a SIREN (the SIRET root)
pub const SIREN_LEN: usize = 9;

lazy_static! {
    // Unicode whitespace plus the BOM, which browsers also treat as whitespace
    static ref WHITESPACE: Regex = Regex::new(r"[\s\x{FEFF}]").unwrap();

    // ASCII digits only; `\d` would also accept other Unicode digits
    static ref SIRET_PATTERN: Regex = Regex::new(r"^[0-9]{14}$").unwrap();
}

/// Remove every whitespace character, wherever it appears
pub(crate) fn strip_whitespace(s: &str) -> String {
    WHITESPACE.replace_all(s, "").into_owned()
}

/// Luhn sum over a digit string
///
/// Digits at even positions are doubled, with 9 subtracted when the result
/// exceeds 9. Non-digit characters are skipped.
pub fn luhn_sum(digits: &str) -> u32 {
    digits
        .chars()
        .filter_map(|c| c.to_digit(10))
        .enumerate()
        .map(|(i, digit)| {
            if i % 2 == 0 {
                let doubled = digit * 2;
                if doubled > 9 {
                    doubled - 9
                } else {
                    doubled
                }
            } else {
                digit
            }
        })
        .sum()
}

/// Validate a SIRET: 14 digits (whitespace ignored) with a valid Luhn sum
///
/// An all-zero SIRET passes the checksum and is reported valid.
pub fn is_valid_siret(siret: Option<&str>) -> bool {
    let Some(raw) = siret.filter(|s| !s.is_empty()) else {
        return false;
    };

    let clean = strip_whitespace(raw);
    SIRET_PATTERN.is_match(&clean) && luhn_sum(&clean) % 10 == 0
}

/// Extract the SIREN (first 9 characters) from a SIRET
///
/// No checksum or digit check is performed. Returns an empty string when
/// fewer than 9 characters remain after stripping whitespace.
pub fn extract_siren(siret: Option<&str>) -> String {
    let Some(raw) = siret else {
        return String::new();
    };

    let clean = strip_whitespace(raw);
    if clean.chars().count() < SIREN_LEN {
        return String::new();
    }

    clean.chars().take(SIREN_LEN).collect()
}

/// Format a SIRET for display as `XXX XXX XXX XXXXX`
///
/// Only the length is checked: anything that is not 14 characters once
/// whitespace is removed comes back unchanged.
pub fn format_siret(siret: Option<&str>) -> String {
    let Some(raw) = siret.filter(|s| !s.is_empty()) else {
        return String::new();
    };

    let clean: Vec<char> = strip_whitespace(raw).chars().collect();
    if clean.len() != SIRET_LEN {
        return raw.to_string();
    }

    let group = |range: std::ops::Range<usize>| clean[range].iter().collect::<String>();
    format!(
        "{} {} {} {}",
        group(0..3),
        group(3..6),
        group(6..9),
        group(9..SIRET_LEN)
    )
}

/// Outcome of [`validate_and_extract_siret`] for a valid SIRET
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiretCheck {
    pub is_valid: bool,
    pub siren: String,
}

/// Validate a SIRET and extract its SIREN in one call
///
/// Returns `None` when the SIRET is invalid.
pub fn validate_and_extract_siret(siret: Option<&str>) -> Option<SiretCheck> {
    if !is_valid_siret(siret) {
        return None;
    }

    Some(SiretCheck {
        is_valid: true,
        siren: extract_siren(siret),
    })
}

fn check_digits(clean: &str, expected: usize) -> Result<(), IdentifierError> {
    if clean.is_empty() {
        return Err(IdentifierError::Empty);
    }

    let found = clean.chars().count();
    if found != expected {
        return Err(IdentifierError::InvalidLength { expected, found });
    }

    if let Some((position, character)) = clean
        .chars()
        .enumerate()
        .find(|(_, c)| !c.is_ascii_digit())
    {
        return Err(IdentifierError::NonDigit {
            position,
            character,
        });
    }

    Ok(())
}

/// A checksum-valid SIRET, stored without whitespace
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Siret(String);

impl Siret {
    /// Parse a SIRET, ignoring whitespace
    pub fn parse(input: &str) -> Result<Self, IdentifierError> {
        let clean = strip_whitespace(input);
        check_digits(&clean, SIRET_LEN)?;

        if luhn_sum(&clean) % 10 != 0 {
            return Err(IdentifierError::Checksum);
        }

        Ok(Self(clean))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The legal entity this establishment belongs to
    pub fn siren(&self) -> Siren {
        Siren(self.0[..SIREN_LEN].to_string())
    }

    /// Establishment number (last 5 digits)
    pub fn nic(&self) -> &str {
        &self.0[SIREN_LEN..]
    }
}

impl fmt::Display for Siret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = &self.0;
        write!(f, "{} {} {} {}", &s[0..3], &s[3..6], &s[6..9], &s[9..])
    }
}

impl FromStr for Siret {
    type Err = IdentifierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Siret {
    type Error = IdentifierError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Siret> for String {
    fn from(siret: Siret) -> Self {
        siret.0
    }
}

/// A 9-digit SIREN. SIRENs carry their own Luhn digit but the organization
/// screens never check it, so neither does this type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Siren(String);

impl Siren {
    /// Parse a SIREN, ignoring whitespace
    pub fn parse(input: &str) -> Result<Self, IdentifierError> {
        let clean = strip_whitespace(input);
        check_digits(&clean, SIREN_LEN)?;
        Ok(Self(clean))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Siren {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Siren {
    type Err = IdentifierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Siren {
    type Error = IdentifierError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Siren> for String {
    fn from(siren: Siren) -> Self {
        siren.0
    }
}
