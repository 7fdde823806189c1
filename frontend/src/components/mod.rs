//! UI Components for the prediction frontend.
//!
//! # Layout Components
//! - [`Header`] - Navigation between prediction modes
//! - [`Hero`] - Page title and description
//! - [`Footer`] - Page footer
//!
//! # Feature Components
//! - [`UploadBox`] - File upload form with drag & drop
//! - [`PredictionGallery`] - Rendered predictions with per-entry deletion
//! - [`ModelSelect`], [`ModelChecklist`] - Model choice form fields
//! - [`PredictionPage`] - One upload form plus its gallery

mod header;
mod hero;
mod upload;
mod gallery;
mod models;
mod page;
mod footer;

pub use header::*;
pub use hero::*;
pub use upload::*;
pub use gallery::*;
pub use models::*;
pub use page::*;
pub use footer::*;
