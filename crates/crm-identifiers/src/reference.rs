//! Client reference (customer code) rules
//!
//! Uniqueness is checked server-side; only length is validated here.

/// Minimum significant length of a client reference
pub const CLIENT_REF_MIN_LEN: usize = 4;

/// Maximum length accepted by the organization form
pub const CLIENT_REF_MAX_LEN: usize = 13;

/// Trim whitespace and BOMs from both ends
pub(crate) fn trim_form_value(value: &str) -> &str {
    value.trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}')
}

/// Validate a client reference: at least 4 characters once trimmed
///
/// There is no upper bound and no charset restriction here; the form applies
/// [`CLIENT_REF_MAX_LEN`] separately. Length is counted in `char`s, so a
/// character outside the BMP (an emoji) counts once, not twice as in UTF-16.
pub fn is_valid_client_ref(client_ref: Option<&str>) -> bool {
    match client_ref {
        Some(r) if !r.is_empty() => trim_form_value(r).chars().count() >= CLIENT_REF_MIN_LEN,
        _ => false,
    }
}

/// Client references are stored trimmed and uppercase
pub fn normalize_client_ref(client_ref: &str) -> String {
    trim_form_value(client_ref).to_uppercase()
}
