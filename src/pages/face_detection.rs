use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use snaplens_core::{analyze_face, FaceAnalysis, FaceOutcome};

use crate::components::email_field::EmailField;
use crate::components::face_report::FaceReport;
use crate::gateway::{log_error, Gateway};

#[component]
pub fn FaceDetectionPage() -> impl IntoView {
    let gateway = expect_context::<Gateway>();
    let (email, set_email) = signal(String::new());
    let (message, set_message) = signal(String::new());
    let (analysis, set_analysis) = signal::<Option<FaceAnalysis>>(None);

    let on_analyze = move |_| {
        let email = email.get_untracked();
        let transport = gateway.transport();
        spawn_local(async move {
            let outcome = analyze_face(&transport, &email).await;
            if let FaceOutcome::Failed(ref e) = outcome {
                log_error("Analysis request error", e);
            }
            set_analysis.update(|shown| outcome.apply(shown));
            set_message.set(outcome.message().to_string());
        });
    };

    view! {
        <div class="content">
            <EmailField
                value=email
                on_input=Callback::new(move |value: String| set_email.set(value))
            />
            <button class="btn" on:click=on_analyze>"Generate Analysis"</button>
            <p>{move || message.get()}</p>
            {move || analysis.get().map(|a| view! {
                <FaceReport summary=a.summary() />
            })}
        </div>
    }
}
