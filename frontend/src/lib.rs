//! Spheroid Predict - Frontend Rust/Leptos Application
//!
//! A WebAssembly frontend for submitting microscopy images to the tumour
//! spheroid segmentation service and browsing the predicted masks.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                   │
//! │  (drag & drop capability detected once here)                 │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Header (navigation between prediction modes)                │
//! ├─────────────────────────────────────────────────────────────┤
//! │  PredictionPage  ( /  |  /chooseModel  |  /modelComparison ) │
//! │  ├── Hero (title, description)                               │
//! │  ├── UploadBox (WidgetState + submission)                    │
//! │  └── PredictionGallery (#predictions)                        │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Footer                                                      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`capability`] - Drag & drop support detection
//! - [`widget`] - Upload form state machine
//! - [`gallery`] - Ordered prediction gallery model
//! - [`types`] - API response and error types
//! - [`components`] - UI components
//! - [`services`] - Prediction endpoint client, notifications

use leptos::*;
use leptos_meta::*;
use leptos_router::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod config;
pub mod types;
pub mod capability;
pub mod widget;
pub mod gallery;
pub mod components;
pub mod services;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Types
pub use types::{
    // API
    PredictionResponse, PredictionResult, MaskPrediction,
    // Errors
    SubmitError, SubmitResult, RenderError,
};

pub use capability::AdvancedUpload;

// Components
pub use components::*;

// =============================================================================
// Application Entry Point
// =============================================================================

/// Install panic hook and logging, then mount the application.
pub fn start() {
    // Setup panic hook for better error messages
    console_error_panic_hook::set_once();

    // Setup console logging
    _ = console_log::init_with_level(log::Level::Debug);

    log::info!("🦀 Spheroid Predict - Starting Leptos App");

    mount_to_body(|| view! { <App/> });
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // Evaluated once per page load, then only passed down
    let advanced = AdvancedUpload::detect();

    view! {
        <Title text="Spheroid Predict"/>
        <Router>
            <Header/>
            <main class="container">
                <Routes>
                    <Route
                        path=BEST_MODEL_PATH
                        view=move || view! { <BestModelPage advanced=advanced/> }
                    />
                    <Route
                        path=CHOOSE_MODEL_PATH
                        view=move || view! { <ChooseModelPage advanced=advanced/> }
                    />
                    <Route
                        path=MODEL_COMPARISON_PATH
                        view=move || view! { <ModelComparisonPage advanced=advanced/> }
                    />
                </Routes>
            </main>
            <Footer/>
        </Router>
    }
}

#[component]
fn BestModelPage(advanced: AdvancedUpload) -> impl IntoView {
    view! {
        <PredictionPage
            title="Tumour spheroid segmentation"
            subtitle="Upload one or more images; each is segmented with the best available model."
            advanced=advanced
            action=BEST_MODEL_PATH
        />
    }
}

#[component]
fn ChooseModelPage(advanced: AdvancedUpload) -> impl IntoView {
    view! {
        <PredictionPage
            title="Segment with a chosen model"
            subtitle="Pick the model to run on every uploaded image."
            advanced=advanced
            action=CHOOSE_MODEL_PATH
        >
            <ModelSelect/>
        </PredictionPage>
    }
}

#[component]
fn ModelComparisonPage(advanced: AdvancedUpload) -> impl IntoView {
    view! {
        <PredictionPage
            title="Compare models"
            subtitle="Run several models on each image. With two or more models the AND and OR ensembles are shown too."
            advanced=advanced
            action=MODEL_COMPARISON_PATH
        >
            <ModelChecklist/>
        </PredictionPage>
    }
}
