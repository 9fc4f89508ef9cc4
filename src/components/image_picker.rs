//! File input that reads the picked image into memory.

use js_sys::{ArrayBuffer, Uint8Array};
use leptos::html::Input;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};

use snaplens_core::ImageFile;

use crate::gateway::log_error;

#[component]
pub fn ImagePicker(
    /// Lets the page clear the input after a successful upload
    input_ref: NodeRef<Input>,
    /// Called with the loaded image, or `None` when the selection is cleared
    on_pick: Callback<Option<ImageFile>>,
) -> impl IntoView {
    let on_change = move |ev: web_sys::Event| {
        let file = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
            .and_then(|input| input.files())
            .and_then(|files| files.get(0));

        let Some(file) = file else {
            on_pick.run(None);
            return;
        };

        spawn_local(async move {
            match read_image(file).await {
                Ok(image) => on_pick.run(Some(image)),
                Err(e) => {
                    log_error("Failed to read file", &e);
                    on_pick.run(None);
                }
            }
        });
    };

    view! {
        <input type="file" accept="image/*" node_ref=input_ref on:change=on_change />
    }
}

/// Read a File fully into memory.
async fn read_image(file: web_sys::File) -> Result<ImageFile, String> {
    let array_buffer: ArrayBuffer = JsFuture::from(file.array_buffer())
        .await
        .map_err(|e| format!("{:?}", e))?
        .dyn_into()
        .map_err(|_| "Failed to convert to ArrayBuffer")?;

    let bytes = Uint8Array::new(&array_buffer).to_vec();
    Ok(ImageFile::from_bytes(file.name(), &bytes))
}
