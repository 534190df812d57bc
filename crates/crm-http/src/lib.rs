//! CRM HTTP failure handling
//!
//! Observes failed requests and sends the user to the login page on 401 or
//! to the forbidden page on 403. The failure itself is always handed back
//! to the caller untouched.

pub mod config;
pub mod error;
pub mod layer;
pub mod router;

pub use config::RouterConfig;
pub use error::{ConfigError, HttpFailure};
pub use layer::{AuthFailure, AuthFailureLayer};
pub use router::{AuthFailureRouter, Destination, FailureKind, Navigator};
