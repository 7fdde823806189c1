//! Application configuration.
//!
//! Centralized configuration for the spheroid prediction frontend.
//! These are hardcoded for the bundled deployment, where the frontend is
//! served by the prediction service itself.

use std::ops::Range;

/// Backend base URL.
///
/// Empty means same origin: the prediction service serves this frontend.
pub const BACKEND_URL: &str = "";

/// Endpoint running the best available model on every file.
pub const BEST_MODEL_PATH: &str = "/";

/// Endpoint running a single, user-chosen model (`model` form field).
pub const CHOOSE_MODEL_PATH: &str = "/chooseModel";

/// Endpoint running several models plus AND/OR ensembles (`models` form fields).
pub const MODEL_COMPARISON_PATH: &str = "/modelComparison";

/// Models exposed by the prediction service.
///
/// Must match the model file names deployed next to the backend.
pub const AVAILABLE_MODELS: &[&str] = &[
    "DeepLabV3",
    "FCN",
    "HRNet",
    "Mask-RCNN",
    "U^2-Net",
    "U-Net",
];

/// Name of the multipart field carrying the files.
pub const FILE_FIELD: &str = "file";

/// File types the backend can read (`.nd2` is Nikon microscopy).
pub const ACCEPTED_FILES: &str = ".png,.jpg,.jpeg,.tif,.tiff,.bmp,.nd2";

/// Caption shown when more than one file is selected.
///
/// `{count}` is replaced by the number of files.
pub const MULTIPLE_CAPTION: &str = "{count} files selected";

/// HTTP statuses treated as a successful submission.
pub const SUCCESS_STATUS: Range<u16> = 200..400;

/// Width and height of every rendered thumbnail, in pixels.
pub const THUMBNAIL_SIZE: u32 = 350;

/// Id of the page-level results container.
pub const RESULTS_CONTAINER_ID: &str = "predictions";

/// Message shown when the form is submitted without files.
pub const NO_FILE_MESSAGE: &str = "You must select a file before submit!";
