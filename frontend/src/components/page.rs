//! A prediction page: title, one upload form and the page gallery.

use leptos::*;

use crate::capability::AdvancedUpload;
use crate::components::{Hero, PredictionGallery, UploadBox};
use crate::gallery::Gallery;

#[component]
pub fn PredictionPage(
    title: &'static str,
    subtitle: &'static str,
    /// Drag & drop support, detected once for the page
    advanced: AdvancedUpload,
    /// Endpoint the upload form posts to
    action: &'static str,
    /// Extra form fields (model choice)
    #[prop(optional)]
    children: Option<Children>,
) -> impl IntoView {
    // One gallery per page, shared by every form on it
    provide_context(create_rw_signal(Gallery::new()));

    let upload = match children {
        Some(children) => view! {
            <UploadBox advanced=advanced action=action input_id="file">
                {children()}
            </UploadBox>
        }
        .into_view(),
        None => view! { <UploadBox advanced=advanced action=action input_id="file"/> }.into_view(),
    };

    view! {
        <Hero title=title subtitle=subtitle/>
        {upload}
        <PredictionGallery/>
    }
}
