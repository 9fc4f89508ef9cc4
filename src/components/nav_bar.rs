use leptos::prelude::*;

#[component]
pub fn NavBar() -> impl IntoView {
    view! {
        <header class="header">
            <a href="/" class="nav-link">"Home"</a>
            <a href="/detection" class="nav-link">"Face Detection"</a>
            <a href="/extract" class="nav-link">"Extract Text"</a>
        </header>
    }
}
