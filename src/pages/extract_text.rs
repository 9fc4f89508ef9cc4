use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use snaplens_core::text::TextOutcome;
use snaplens_core::extract_text;

use crate::components::email_field::EmailField;
use crate::gateway::{log_error, Gateway};

#[component]
pub fn ExtractTextPage() -> impl IntoView {
    let gateway = expect_context::<Gateway>();
    let (email, set_email) = signal(String::new());
    let (message, set_message) = signal(String::new());
    let (extracted, set_extracted) = signal(String::new());

    let on_extract = move |_| {
        let email = email.get_untracked();
        let transport = gateway.transport();
        spawn_local(async move {
            let outcome = extract_text(&transport, &email).await;
            if let TextOutcome::Failed(ref e) = outcome {
                log_error("Text extraction error", e);
            }
            set_extracted.update(|shown| outcome.apply(shown));
            set_message.set(outcome.message());
        });
    };

    view! {
        <div class="content">
            <EmailField
                value=email
                on_input=Callback::new(move |value: String| set_email.set(value))
            />
            <button class="btn" on:click=on_extract>"Extract Text"</button>
            <p>{move || message.get()}</p>
            <Show when=move || !extracted.get().is_empty()>
                <div class="extracted-text">
                    <h3>"Extracted Text:"</h3>
                    <p>{move || extracted.get()}</p>
                </div>
            </Show>
        </div>
    }
}
