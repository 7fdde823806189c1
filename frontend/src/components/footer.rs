//! Footer component

use leptos::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer>
            <div>"Deep Tumour Spheroid • Powered by " <span class="rust-badge">"🦀 Rust + Leptos"</span></div>
            <div class="footer-links">
                <span class="footer-note">
                    "Predictions are research output and not a diagnosis."
                </span>
            </div>
        </footer>
    }
}
