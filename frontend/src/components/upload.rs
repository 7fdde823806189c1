//! Upload form with drag & drop support.
//!
//! Handles file selection, drops, single-flight submission to the form's
//! endpoint and hands decoded predictions to the page gallery.

use leptos::ev::{DragEvent, MouseEvent, SubmitEvent};
use leptos::*;
use wasm_bindgen::JsCast;
use web_sys::{Event, File, HtmlFormElement, HtmlInputElement};

use crate::capability::AdvancedUpload;
use crate::config::{ACCEPTED_FILES, FILE_FIELD, MULTIPLE_CAPTION, NO_FILE_MESSAGE};
use crate::gallery::Gallery;
use crate::services::{alert, build_payload, files_from_list, submit_form, SubmitTarget};
use crate::types::SubmitError;
use crate::widget::{complete_submission, SubmitGate, WidgetState};

#[component]
pub fn UploadBox(
    /// Drag & drop support, detected once for the page
    advanced: AdvancedUpload,
    /// Endpoint the form is submitted to
    action: &'static str,
    /// Id of the file input, unique per page
    input_id: &'static str,
    /// Extra form fields sent along with the files
    #[prop(optional)]
    children: Option<Children>,
) -> impl IntoView {
    let gallery = expect_context::<RwSignal<Gallery>>();
    let state = create_rw_signal(WidgetState::<File>::new(advanced));

    let on_drag_over = move |ev: DragEvent| {
        suppress_default(&ev, advanced);
        state.update(|s| {
            s.drag_over();
        });
    };
    let on_drag_leave = move |ev: DragEvent| {
        suppress_default(&ev, advanced);
        state.update(|s| s.drag_leave());
    };
    let on_drop = move |ev: DragEvent| {
        suppress_default(&ev, advanced);
        let files = ev
            .data_transfer()
            .and_then(|transfer| transfer.files())
            .map(|list| files_from_list(&list))
            .unwrap_or_default();
        log::debug!("Dropped {} file(s)", files.len());
        state.update(|s| s.drop_files(files));
    };

    let on_file_change = move |ev: Event| {
        let input: HtmlInputElement = event_target(&ev);
        let files = input
            .files()
            .map(|list| files_from_list(&list))
            .unwrap_or_default();
        state.update(|s| s.select_files(&files));
    };

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let form: HtmlFormElement = event_target(&ev);
        let selected = file_input(input_id)
            .and_then(|input| input.files())
            .map(|list| files_from_list(&list))
            .unwrap_or_default();

        let files = match state.try_update(|s| s.begin_submit(selected)) {
            Some(SubmitGate::Send(files)) => files,
            Some(SubmitGate::NoFiles) => {
                alert(NO_FILE_MESSAGE);
                return;
            }
            Some(SubmitGate::Busy) | None => {
                log::debug!("Submission already in progress, ignoring");
                return;
            }
        };

        let target = SubmitTarget::from_form(&form);
        let payload = build_payload(&form, &files);
        log::info!("📤 Uploading {} file(s) to {}", files.len(), target.url);

        spawn_local(async move {
            let response = match payload {
                Ok(payload) => submit_form(payload, &target).await,
                Err(e) => Err(e),
            };

            let outcome = gallery
                .try_update(|g| state.try_update(|s| complete_submission(s, g, response)))
                .flatten();

            match outcome {
                Some(Ok(count)) => log::info!("✅ {} prediction(s) added", count),
                Some(Err(e)) => report_failure(&e),
                None => log::warn!("Upload form was removed before the response arrived"),
            }
        });
    };

    let on_restart = move |ev: MouseEvent| {
        ev.prevent_default();
        state.update(|s| s.restart());
        if let Some(input) = file_input(input_id) {
            input.click();
        }
    };

    view! {
        <form
            class="box"
            method="post"
            action=action
            enctype="multipart/form-data"
            novalidate=true
            class:has-advanced-upload=move || state.with(|s| s.has_advanced_upload())
            class:is-dragover=move || state.with(|s| s.is_dragover())
            class:is-uploading=move || state.with(|s| s.is_uploading())
            class:is-error=move || state.with(|s| s.is_error())
            class:is-success=move || state.with(|s| s.is_success())
            on:drag=move |ev: DragEvent| suppress_default(&ev, advanced)
            on:dragstart=move |ev: DragEvent| suppress_default(&ev, advanced)
            on:dragenter=on_drag_over
            on:dragover=on_drag_over
            on:dragleave=on_drag_leave
            on:dragend=on_drag_leave
            on:drop=on_drop
            on:submit=on_submit
        >
            {children.map(|children| children())}

            <div class="box__input">
                <input
                    type="file"
                    class="box__file"
                    class:has-focus=move || state.with(|s| s.has_focus())
                    id=input_id
                    name=FILE_FIELD
                    accept=ACCEPTED_FILES
                    multiple=true
                    data-multiple-caption=MULTIPLE_CAPTION
                    on:change=on_file_change
                    on:focus=move |_| state.update(|s| s.set_focus(true))
                    on:blur=move |_| state.update(|s| s.set_focus(false))
                />
                <label for=input_id>
                    {move || match state.with(|s| s.label().caption(MULTIPLE_CAPTION)) {
                        Some(caption) => caption.into_view(),
                        None => view! {
                            <strong>"Choose files"</strong>
                            <span class="box__dragndrop">" or drag them here"</span>
                            "."
                        }
                        .into_view(),
                    }}
                </label>
                <button
                    type="submit"
                    class="box__button btn btn-primary"
                    disabled=move || state.with(|s| s.is_uploading())
                >
                    "Upload"
                </button>
            </div>

            <div class="box__uploading">"Uploading…"</div>
            <div class="box__success">
                "Done! "
                <a href="#" class="box__restart" role="button" on:click=on_restart>"Upload more?"</a>
            </div>
            <div class="box__error">
                "Error! "
                <span>{move || state.with(|s| s.error_message().unwrap_or_default().to_string())}</span>
                " "
                <a href="#" class="box__restart" role="button" on:click=on_restart>"Try again!"</a>
            </div>
        </form>
    }
}

fn report_failure(err: &SubmitError) {
    log::error!("❌ Prediction failed: {}", err);
    alert(err.user_message());
}

/// Drag events must not reach the browser, which would open the file.
fn suppress_default(ev: &Event, advanced: AdvancedUpload) {
    if advanced.enabled() {
        ev.prevent_default();
        ev.stop_propagation();
    }
}

fn file_input(id: &str) -> Option<HtmlInputElement> {
    web_sys::window()?
        .document()?
        .get_element_by_id(id)?
        .dyn_into::<HtmlInputElement>()
        .ok()
}
