//! Model choice fields for the "choose model" and "comparison" forms.

use leptos::*;

use crate::config::AVAILABLE_MODELS;

/// Single model picker, sent as the `model` form field.
#[component]
pub fn ModelSelect() -> impl IntoView {
    view! {
        <div class="model-picker mb-3">
            <label class="form-label" for="model">"Model"</label>
            <select class="form-select" id="model" name="model">
                {AVAILABLE_MODELS
                    .iter()
                    .map(|name| view! { <option value=*name>{*name}</option> })
                    .collect_view()}
            </select>
        </div>
    }
}

/// One checkbox per model, each checked one sent as a `models` form field.
///
/// The first model starts checked.
#[component]
pub fn ModelChecklist() -> impl IntoView {
    view! {
        <fieldset class="model-picker mb-3">
            <legend class="form-label">"Models to compare"</legend>
            {AVAILABLE_MODELS
                .iter()
                .enumerate()
                .map(|(index, name)| {
                    let id = format!("models-{}", index);
                    view! {
                        <div class="form-check form-check-inline">
                            <input
                                class="form-check-input"
                                type="checkbox"
                                id=id.clone()
                                name="models"
                                value=*name
                                checked={index == 0}
                            />
                            <label class="form-check-label" for=id>{*name}</label>
                        </div>
                    }
                })
                .collect_view()}
        </fieldset>
    }
}
