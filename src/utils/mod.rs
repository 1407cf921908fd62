//! Shared utilities.
//!
//! - [`app_data`] - per-user application data directory management
//!   (XDG-compliant)

pub mod app_data;

pub use app_data::*;
