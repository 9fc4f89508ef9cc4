//! HTTP transport to the three gateway endpoints.
//!
//! Flows never talk to `reqwest` directly; they go through [`Transport`] so
//! they can be exercised without a network.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use url::Url;

use crate::config::EndpointConfig;
use crate::error::TransportError;

/// Which gateway a request goes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Upload,
    FaceDetection,
    TextExtraction,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Endpoint::Upload => "upload",
            Endpoint::FaceDetection => "face-detection",
            Endpoint::TextExtraction => "text-extraction",
        };
        f.write_str(name)
    }
}

/// Body for the face detection and text extraction endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmailPayload {
    pub email: String,
}

/// Issues exactly one POST per call and returns the raw success body.
///
/// No retries, no timeout override, no cancellation.
#[allow(async_fn_in_trait)]
pub trait Transport {
    async fn post_json<P>(&self, endpoint: Endpoint, payload: &P) -> Result<String, TransportError>
    where
        P: Serialize + ?Sized;
}

/// `reqwest`-backed transport bound to a fixed set of endpoints.
pub struct HttpTransport {
    client: reqwest::Client,
    endpoints: EndpointConfig,
}

impl HttpTransport {
    pub fn new(endpoints: EndpointConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoints,
        }
    }

    fn url_for(&self, endpoint: Endpoint) -> &Url {
        match endpoint {
            Endpoint::Upload => &self.endpoints.upload,
            Endpoint::FaceDetection => &self.endpoints.face_detection,
            Endpoint::TextExtraction => &self.endpoints.text_extraction,
        }
    }
}

impl Transport for HttpTransport {
    async fn post_json<P>(&self, endpoint: Endpoint, payload: &P) -> Result<String, TransportError>
    where
        P: Serialize + ?Sized,
    {
        let url = self.url_for(endpoint).clone();
        info!("POST {} ({})", url, endpoint);

        let response = self
            .client
            .post(url)
            .json(payload)
            .send()
            .await
            .map_err(classify)?;

        let status = response.status();
        if !status.is_success() {
            warn!("{} endpoint returned {}", endpoint, status.as_u16());
            // The status is already known, so an unreadable body only loses the message.
            let message = match response.text().await {
                Ok(body) => server_message(&body),
                Err(e) => {
                    warn!("Failed to read {} error body: {}", endpoint, e);
                    None
                }
            };
            return Err(TransportError::Status {
                status: status.as_u16(),
                message,
            });
        }

        response.text().await.map_err(|e| {
            warn!("Failed to read {} response body: {}", endpoint, e);
            TransportError::NoResponse(e.to_string())
        })
    }
}

/// Split send failures into "never left the client" and "left but no reply".
fn classify(err: reqwest::Error) -> TransportError {
    if err.is_builder() {
        warn!("Request setup failed: {}", err);
        TransportError::Setup(err.to_string())
    } else {
        warn!("No response: {}", err);
        TransportError::NoResponse(err.to_string())
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// Pull a `message` string out of a JSON error body, if there is one.
fn server_message(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.message)
        .filter(|m| !m.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_message_from_json_body() {
        assert_eq!(
            server_message(r#"{"message": "Internal server error"}"#),
            Some("Internal server error".to_string())
        );
    }

    #[test]
    fn test_server_message_absent() {
        assert_eq!(server_message(r#"{"error": "nope"}"#), None);
        assert_eq!(server_message(r#"{"message": ""}"#), None);
        assert_eq!(server_message("<html>Bad Gateway</html>"), None);
        assert_eq!(server_message(""), None);
    }

    #[test]
    fn test_email_payload_shape() {
        let payload = EmailPayload {
            email: "ada@example.com".to_string(),
        };
        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            serde_json::json!({ "email": "ada@example.com" })
        );
    }

    #[test]
    fn test_endpoint_display() {
        assert_eq!(Endpoint::Upload.to_string(), "upload");
        assert_eq!(Endpoint::FaceDetection.to_string(), "face-detection");
        assert_eq!(Endpoint::TextExtraction.to_string(), "text-extraction");
    }
}
