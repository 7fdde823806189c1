//! Browser-facing services.
//!
//! # Services
//!
//! - [`predict`] - multipart submission to the prediction endpoints
//! - [`notify`] - blocking user notifications

pub mod predict;
pub mod notify;

pub use predict::*;
pub use notify::*;
