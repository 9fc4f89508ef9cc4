//! Request flows behind the SnapLens screens.
//!
//! Each flow validates its input, sends one request through a [`Transport`],
//! and turns the reply into an outcome carrying the status message to show.

pub mod config;
pub mod envelope;
mod error;
pub mod face;
pub mod text;
pub mod transport;
pub mod upload;

pub use config::EndpointConfig;
pub use error::{ConfigError, DecodeError, FlowError, TransportError};
pub use face::{analyze_face, FaceAnalysis, FaceOutcome, FaceSummary};
pub use text::{extract_text, TextOutcome};
pub use transport::{Endpoint, HttpTransport, Transport};
pub use upload::{submit_upload, ImageFile, UploadForm, UploadOutcome};
