//! Upload Page Component
//!
//! Multipart image upload form.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::api;

/// Image upload page
#[component]
pub fn UploadPage() -> impl IntoView {
    let (uploading, set_uploading) = signal(false);

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if uploading.get() {
            return;
        }

        let Some(target) = ev.target() else { return };
        let Ok(form) = target.dyn_into::<web_sys::HtmlFormElement>() else {
            return;
        };
        let Ok(data) = web_sys::FormData::new_with_form(&form) else {
            log::warn!("Could not read upload form data");
            return;
        };

        set_uploading.set(true);
        spawn_local(async move {
            match api::upload_image(data).await {
                Ok(ack) => {
                    log::info!("{}", ack);
                    form.reset();
                }
                Err(err) => log::warn!("Unable to upload image: {}", err),
            }
            set_uploading.set(false);
        });
    };

    view! {
        <main class="upload-page">
            <h1>"Image Upload"</h1>
            <h2 class="subtitle">"Upload images for future use"</h2>
            <hr/>

            <form class="upload-form" on:submit=submit>
                <label>
                    <span>"Choose an Image to Upload"</span>
                    <input name="fileUpload" type="file"/>
                </label>
                <button type="submit" prop:disabled=move || uploading.get()>
                    {move || if uploading.get() { "Uploading..." } else { "Upload" }}
                </button>
            </form>
        </main>
    }
}
