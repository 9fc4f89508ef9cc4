use leptos::prelude::*;

/// Email input shared by every flow. The owning page keeps the value.
#[component]
pub fn EmailField(
    #[prop(into)]
    value: Signal<String>,
    /// Receives the new value on every keystroke
    on_input: Callback<String>,
) -> impl IntoView {
    view! {
        <input
            class="btn"
            type="email"
            placeholder="Enter your email ID"
            prop:value=move || value.get()
            on:input=move |ev| {
                on_input.run(event_target_value(&ev));
            }
        />
    }
}
