//! Navigation bar between the prediction modes.

use leptos::*;
use leptos_router::A;

use crate::config::{BEST_MODEL_PATH, CHOOSE_MODEL_PATH, MODEL_COMPARISON_PATH};

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header>
            <div class="header-left">
                <A href=BEST_MODEL_PATH class="logo">"SPHEROID PREDICT"</A>
            </div>
            <nav class="header-right">
                <A href=BEST_MODEL_PATH class="nav-link" exact=true>"Best model"</A>
                <A href=CHOOSE_MODEL_PATH class="nav-link">"Choose model"</A>
                <A href=MODEL_COMPARISON_PATH class="nav-link">"Model comparison"</A>
            </nav>
        </header>
    }
}
