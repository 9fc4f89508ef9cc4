//! Upload page: email plus one image, sent to the upload gateway.

use leptos::html::Input;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use snaplens_core::{ImageFile, UploadForm, UploadOutcome};

use crate::components::email_field::EmailField;
use crate::components::image_picker::ImagePicker;
use crate::gateway::{log_error, Gateway};

#[component]
pub fn HomePage() -> impl IntoView {
    let gateway = expect_context::<Gateway>();
    let (form, set_form) = signal(UploadForm::default());
    let (message, set_message) = signal(String::new());
    let file_input = NodeRef::<Input>::new();

    let email = Signal::derive(move || form.with(|f| f.email.clone()));

    let on_upload = move |_| {
        let current = form.get_untracked();
        let transport = gateway.transport();
        spawn_local(async move {
            let outcome = current.submit(&transport).await;
            match outcome {
                UploadOutcome::Failed(ref e) => log_error("Image upload error", e),
                UploadOutcome::Uploaded => {
                    if let Some(input) = file_input.get_untracked() {
                        input.set_value("");
                    }
                }
                UploadOutcome::MissingInput => {}
            }
            set_form.update(|f| f.apply(&outcome));
            set_message.set(outcome.message().to_string());
        });
    };

    view! {
        <div class="info">
            "Welcome to Image Processing app!!"
            <div class="login-box">
                <EmailField
                    value=email
                    on_input=Callback::new(move |value: String| {
                        set_form.update(|f| f.email = value);
                    })
                />
                <ImagePicker
                    input_ref=file_input
                    on_pick=Callback::new(move |file: Option<ImageFile>| {
                        set_form.update(|f| f.file = file);
                    })
                />
                <button class="btn" on:click=on_upload>"Upload"</button>
                <p>{move || message.get()}</p>
            </div>
        </div>
    }
}
