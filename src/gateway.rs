//! Endpoint wiring for the browser build.
//!
//! WebAssembly has no process environment, so the gateway URLs are captured
//! from the build environment when the bundle is compiled.

use std::fmt::Display;

use snaplens_core::config::{FACE_DETECTION_URL_VAR, TEXT_EXTRACTION_URL_VAR, UPLOAD_URL_VAR};
use snaplens_core::{ConfigError, EndpointConfig, HttpTransport};

fn build_env(key: &str) -> Option<String> {
    let value = match key {
        UPLOAD_URL_VAR => option_env!("IMAGE_UPLOAD_API_GATEWAY_URL"),
        FACE_DETECTION_URL_VAR => option_env!("FACE_DETECTION_API_GATEWAY_URL"),
        TEXT_EXTRACTION_URL_VAR => option_env!("TEXT_EXTRACTION_API_GATEWAY_URL"),
        _ => None,
    };
    value.map(str::to_string)
}

/// Endpoints shared with every page through context.
#[derive(Debug, Clone)]
pub struct Gateway {
    endpoints: EndpointConfig,
}

impl Gateway {
    pub fn from_build_env() -> Result<Self, ConfigError> {
        EndpointConfig::from_lookup(build_env).map(|endpoints| Self { endpoints })
    }

    /// A transport for one submission.
    pub fn transport(&self) -> HttpTransport {
        HttpTransport::new(self.endpoints.clone())
    }
}

/// Report a failure on the browser console.
pub fn log_error(context: &str, err: &impl Display) {
    web_sys::console::error_1(&format!("{}: {}", context, err).into());
}
