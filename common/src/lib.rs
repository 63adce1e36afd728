//! Shared primitives for the PetFriends conformance suite.
//!
//! This crate carries the pieces every layer needs but none owns:
//! structured error locations, HTTP status classification, and redacted
//! secret handling. No business logic lives here.

pub mod error;
pub mod http_status;
pub mod redacted_secret;

pub use error::error_location::ErrorLocation;
pub use error::redact::RedactError;
pub use http_status::HttpStatusCode;
pub use redacted_secret::RedactedSecret;
