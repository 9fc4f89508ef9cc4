use leptos::prelude::*;

use snaplens_core::FaceSummary;

/// Breakdown of the first detected face.
#[component]
pub fn FaceReport(summary: FaceSummary) -> impl IntoView {
    view! {
        <div class="face-report">
            <h3>"Analysis Result:"</h3>
            <ul>
                <li><strong>"Age Range:"</strong>" "{summary.age_range}</li>
                <li><strong>"Gender:"</strong>" "{summary.gender}</li>
                <li><strong>"Smile:"</strong>" "{summary.smile}</li>
                <li>
                    <strong>"Emotions:"</strong>
                    <ul>
                        {summary.emotions.into_iter().map(|emotion| view! {
                            <li>{emotion}</li>
                        }).collect::<Vec<_>>()}
                    </ul>
                </li>
            </ul>
        </div>
    }
}
