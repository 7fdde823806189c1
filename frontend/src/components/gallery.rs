//! Prediction gallery: the `#predictions` container and its cards.
//!
//! Server strings (filenames, model names) are only ever rendered as text
//! nodes, never as markup.

use std::rc::Rc;

use leptos::*;

use crate::config::{RESULTS_CONTAINER_ID, THUMBNAIL_SIZE};
use crate::gallery::{Gallery, GalleryEntry, MaskPanel};

#[component]
pub fn PredictionGallery() -> impl IntoView {
    let gallery = expect_context::<RwSignal<Gallery>>();

    view! {
        <div
            id=RESULTS_CONTAINER_ID
            class="predictions"
            class:is-empty=move || gallery.with(Gallery::is_empty)
        >
            <For
                each=move || gallery.with(|g| g.entries().to_vec())
                key=|entry| entry.id
                children={move |entry: Rc<GalleryEntry>| view! { <PredictionCard entry=entry/> }}
            />
        </div>
    }
}

#[component]
fn PredictionCard(entry: Rc<GalleryEntry>) -> impl IntoView {
    let gallery = expect_context::<RwSignal<Gallery>>();
    let id = entry.id;
    let filename = entry.filename.clone();

    let on_delete = move |_| {
        gallery.update(|g| {
            if g.remove(id) {
                log::info!("🗑️ Prediction {:?} deleted", id);
            }
        });
    };

    view! {
        <div class="prediction d-flex flex-column position-relative justify-content-around my-4 flex-wrap border border-primary border-3 p-3 rounded">
            <button
                type="button"
                class="delete btn btn-link d-flex position-absolute justify-content-center align-items-center text-danger"
                title="Delete prediction"
                on:click=on_delete
            >
                <i class="fas fa-trash-alt"></i>
            </button>
            <div class="d-flex flex-column align-items-center">
                <img
                    class="img-fluid"
                    height=THUMBNAIL_SIZE
                    width=THUMBNAIL_SIZE
                    src=entry.image_src.clone()
                    alt=filename.clone()
                />
                <div class="text-primary font-weight-bold">{filename}</div>
            </div>
            <div class="row">
                {entry.masks.iter().cloned().map(|panel| view! { <MaskCell panel=panel/> }).collect_view()}
            </div>
        </div>
    }
}

#[component]
fn MaskCell(panel: MaskPanel) -> impl IntoView {
    let MaskPanel { image_src, model_name } = panel;

    view! {
        <div class="mask d-flex flex-column align-items-center col-12 col-md">
            <img
                class="img-fluid"
                height=THUMBNAIL_SIZE
                width=THUMBNAIL_SIZE
                src=image_src
                alt=model_name.clone()
            />
            <div class="text-primary font-weight-bold">{model_name}</div>
        </div>
    }
}
