//! Common types used across the frontend application.
//!
//! This module centralizes type definitions to avoid duplication
//! and ensure consistency across components.
//!
//! # Categories
//!
//! - **API Types** - Prediction service response structures
//! - **Error Types** - Submission and rendering errors

use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// API Response Types
// =============================================================================

/// Response from a prediction endpoint: one result per submitted file.
pub type PredictionResponse = Vec<PredictionResult>;

/// Prediction output for a single submitted file.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    /// Name of the uploaded file
    pub filename: String,
    /// Base64 PNG of the (resized) original image
    pub image: String,
    /// Masks produced for this file, in model order
    pub mask: Vec<MaskPrediction>,
}

/// A single mask overlay and the model that produced it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MaskPrediction {
    /// Base64 PNG of the image blended with the mask
    pub mask_data: String,
    /// Producing model, or "Ensemble AND"/"Ensemble OR"
    pub model_name: String,
}

// =============================================================================
// Error Types
// =============================================================================

/// A submission attempt that did not produce a gallery update.
#[derive(Clone, Debug, PartialEq)]
pub enum SubmitError {
    /// The multipart payload could not be assembled.
    Payload(String),
    /// The request never completed.
    Transport(String),
    /// The service answered outside the success range.
    Server {
        /// HTTP status code
        status: u16,
        /// Response body, if readable
        body: String,
    },
    /// Success status, but the body is not a prediction response.
    MalformedBody(String),
}

impl SubmitError {
    /// Blocking message shown to the user for this failure.
    pub fn user_message(&self) -> &'static str {
        match self {
            SubmitError::Payload(_) | SubmitError::Transport(_) => "Error. Please, try again!",
            SubmitError::Server { .. } => "Error. Please, contact the operator!",
            SubmitError::MalformedBody(_) => {
                "Error. The server sent an unreadable response, please contact the operator!"
            }
        }
    }
}

impl fmt::Display for SubmitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubmitError::Payload(msg) => write!(f, "Payload error: {}", msg),
            SubmitError::Transport(msg) => write!(f, "Network error: {}", msg),
            SubmitError::Server { status, body } => {
                write!(f, "Server error ({}): {}", status, body)
            }
            SubmitError::MalformedBody(msg) => write!(f, "Malformed response: {}", msg),
        }
    }
}

impl std::error::Error for SubmitError {}

/// A prediction result that cannot be turned into a gallery entry.
#[derive(Clone, Debug, PartialEq)]
pub enum RenderError {
    /// The original image payload is not valid base64.
    InvalidImage {
        /// File the image belongs to
        filename: String,
        /// Decoder message
        reason: String,
    },
    /// A mask payload is not valid base64.
    InvalidMask {
        /// File the mask belongs to
        filename: String,
        /// Model that produced the mask
        model_name: String,
        /// Decoder message
        reason: String,
    },
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::InvalidImage { filename, reason } => {
                write!(f, "Invalid image for '{}': {}", filename, reason)
            }
            RenderError::InvalidMask { filename, model_name, reason } => {
                write!(f, "Invalid mask '{}' for '{}': {}", model_name, filename, reason)
            }
        }
    }
}

impl std::error::Error for RenderError {}

impl From<RenderError> for SubmitError {
    fn from(err: RenderError) -> Self {
        SubmitError::MalformedBody(err.to_string())
    }
}

impl From<serde_json::Error> for SubmitError {
    fn from(err: serde_json::Error) -> Self {
        SubmitError::MalformedBody(err.to_string())
    }
}

/// Result type alias for submission operations.
pub type SubmitResult<T> = Result<T, SubmitError>;
