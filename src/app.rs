use leptos::prelude::*;
use leptos_router::components::*;
use leptos_router::path;

use crate::components::nav_bar::NavBar;
use crate::gateway::{self, Gateway};
use crate::pages::extract_text::ExtractTextPage;
use crate::pages::face_detection::FaceDetectionPage;
use crate::pages::home::HomePage;

#[component]
pub fn App() -> impl IntoView {
    let gateway = match Gateway::from_build_env() {
        Ok(gateway) => gateway,
        Err(e) => {
            gateway::log_error("Gateway configuration error", &e);
            return view! {
                <div class="config-error">
                    <h2>"Configuration error"</h2>
                    <p>{e.to_string()}</p>
                </div>
            }
            .into_any();
        }
    };
    provide_context(gateway);

    view! {
        <Router>
            <NavBar />
            <Routes fallback=|| view! { <p>"Page not found"</p> }>
                <Route path=path!("/") view=HomePage />
                <Route path=path!("/detection") view=FaceDetectionPage />
                <Route path=path!("/extract") view=ExtractTextPage />
            </Routes>
        </Router>
    }
    .into_any()
}
