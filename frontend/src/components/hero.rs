//! Page title section

use leptos::*;

#[component]
pub fn Hero(title: &'static str, subtitle: &'static str) -> impl IntoView {
    view! {
        <div class="hero">
            <h1>{title}</h1>
            <p class="subtitle">{subtitle}</p>
        </div>
    }
}
