//! Foundation types for husk.
//!
//! This crate contains the pieces shared by every other husk crate: the
//! error type and the session configuration loaded at startup.

pub mod config;
pub mod error;

pub use config::Config;
pub use error::{HuskError, Result};
