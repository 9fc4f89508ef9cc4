mod app;
mod components;
mod gateway;
mod pages;

use app::App;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use tracing_web::MakeWebConsoleWriter;

fn main() {
    // No process environment in the browser, so the filter is fixed.
    // wasm32 has no system clock for the fmt timer.
    tracing_subscriber::registry()
        .with(EnvFilter::new("info"))
        .with(
            fmt::layer()
                .with_ansi(false)
                .without_time()
                .with_writer(MakeWebConsoleWriter::new()),
        )
        .init();

    leptos::mount::mount_to_body(App);
}
