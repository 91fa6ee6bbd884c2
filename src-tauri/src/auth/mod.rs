//! Auth Layer
//!
//! Credential checks and signed session tokens.

mod token;
mod service;

pub use service::AuthService;
