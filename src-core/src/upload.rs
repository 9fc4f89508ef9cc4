//! Image upload flow.

use base64::{engine::general_purpose::STANDARD, Engine};
use serde::Serialize;
use tracing::{error, info, warn};

use crate::error::FlowError;
use crate::transport::{Endpoint, Transport};

pub const MISSING_INPUT_MESSAGE: &str = "Please upload an image and enter your email ID";
pub const UPLOADED_MESSAGE: &str = "Image uploaded successfully";
pub const UPLOAD_ERROR_MESSAGE: &str = "Image upload error";

/// An image picked by the user, already read into memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageFile {
    pub name: String,
    /// Base64 of the file content, without any data-URL prefix.
    encoded: String,
}

impl ImageFile {
    pub fn from_bytes(name: impl Into<String>, bytes: &[u8]) -> Self {
        Self {
            name: name.into(),
            encoded: STANDARD.encode(bytes),
        }
    }

    /// Accept the output of `FileReader.readAsDataURL`, e.g.
    /// `data:image/png;base64,iVBORw0...`, keeping only the payload.
    pub fn from_data_url(name: impl Into<String>, data_url: &str) -> Self {
        Self {
            name: name.into(),
            encoded: strip_data_url_prefix(data_url).to_string(),
        }
    }

    pub fn base64(&self) -> &str {
        &self.encoded
    }
}

/// Drop everything up to and including the first comma of a data URL.
/// Strings that are not data URLs are returned as-is.
pub fn strip_data_url_prefix(data: &str) -> &str {
    if !data.starts_with("data:") {
        return data;
    }
    data.split_once(',').map(|(_, payload)| payload).unwrap_or("")
}

/// Request body for the upload endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UploadPayload {
    pub email: String,
    pub image_data: String,
}

impl UploadPayload {
    pub fn new(email: &str, file: &ImageFile) -> Self {
        Self {
            email: email.to_string(),
            image_data: file.base64().to_string(),
        }
    }
}

#[derive(Debug)]
pub enum UploadOutcome {
    /// Email or file missing; nothing was sent.
    MissingInput,
    Uploaded,
    Failed(FlowError),
}

impl UploadOutcome {
    pub fn message(&self) -> &'static str {
        match self {
            UploadOutcome::MissingInput => MISSING_INPUT_MESSAGE,
            UploadOutcome::Uploaded => UPLOADED_MESSAGE,
            UploadOutcome::Failed(_) => UPLOAD_ERROR_MESSAGE,
        }
    }
}

/// Validate, encode and send one upload.
pub async fn submit_upload<T: Transport>(
    transport: &T,
    email: &str,
    file: Option<&ImageFile>,
) -> UploadOutcome {
    let file = match file {
        Some(file) if !email.is_empty() => file,
        _ => {
            warn!("Upload rejected: email or image missing");
            return UploadOutcome::MissingInput;
        }
    };

    let payload = UploadPayload::new(email, file);
    info!(
        "Uploading {} ({} base64 chars)",
        file.name,
        payload.image_data.len()
    );

    match transport.post_json(Endpoint::Upload, &payload).await {
        Ok(_) => {
            info!("Upload of {} accepted", file.name);
            UploadOutcome::Uploaded
        }
        Err(e) => {
            error!("Image upload error: {}", e);
            UploadOutcome::Failed(e.into())
        }
    }
}

/// Input state of the upload screen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UploadForm {
    pub email: String,
    pub file: Option<ImageFile>,
}

impl UploadForm {
    pub async fn submit<T: Transport>(&self, transport: &T) -> UploadOutcome {
        submit_upload(transport, &self.email, self.file.as_ref()).await
    }

    /// Apply an outcome to the form; a successful upload empties it.
    pub fn apply(&mut self, outcome: &UploadOutcome) {
        if matches!(outcome, UploadOutcome::Uploaded) {
            *self = Self::default();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_bytes_encodes_standard_base64() {
        let file = ImageFile::from_bytes("pixel.png", b"\x89PNG\r\n");
        assert_eq!(file.base64(), "iVBORw0K");
    }

    #[test]
    fn test_strip_data_url_prefix() {
        assert_eq!(
            strip_data_url_prefix("data:image/jpeg;base64,/9j/4AAQ"),
            "/9j/4AAQ"
        );
        assert_eq!(strip_data_url_prefix("/9j/4AAQ"), "/9j/4AAQ");
        assert_eq!(strip_data_url_prefix("data:,"), "");
        assert_eq!(strip_data_url_prefix("data:image/png;base64"), "");
    }

    #[test]
    fn test_data_url_and_bytes_agree() {
        let bytes = b"hello image";
        let from_bytes = ImageFile::from_bytes("a.png", bytes);
        let data_url = format!("data:image/png;base64,{}", STANDARD.encode(bytes));
        let from_url = ImageFile::from_data_url("a.png", &data_url);
        assert_eq!(from_bytes, from_url);
    }

    #[test]
    fn test_payload_shape() {
        let file = ImageFile::from_bytes("a.png", b"abc");
        let payload = UploadPayload::new("ada@example.com", &file);
        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            serde_json::json!({ "email": "ada@example.com", "image_data": "YWJj" })
        );
    }

    #[test]
    fn test_apply_keeps_form_on_failure() {
        let mut form = UploadForm {
            email: "ada@example.com".to_string(),
            file: Some(ImageFile::from_bytes("a.png", b"abc")),
        };
        let before = form.clone();

        form.apply(&UploadOutcome::MissingInput);
        assert_eq!(form, before);

        form.apply(&UploadOutcome::Failed(FlowError::Transport(
            crate::error::TransportError::NoResponse("connection reset".to_string()),
        )));
        assert_eq!(form, before);

        form.apply(&UploadOutcome::Uploaded);
        assert_eq!(form, UploadForm::default());
    }
}
