// Allow manual modulo checks since .is_multiple_of() is nightly-only
#![allow(clippy::manual_is_multiple_of)]

//! Identifier validation for the CRM organization forms
//!
//! This crate provides the pure checks behind the organization screens:
//! - SIRET checksum validation (Luhn over 14 digits)
//! - SIREN extraction and SIRET display formatting
//! - Client reference (customer code) length rules
//! - Company form validation combining the above

pub mod company;
pub mod error;
pub mod reference;
pub mod siret;

pub use company::*;
pub use error::*;
pub use reference::*;
pub use siret::*;
