//! Text extraction flow.
//!
//! The gateway replies with a Textract-style block list. Only `LINE` blocks
//! are kept; duplicate lines collapse to their first occurrence.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};

use crate::envelope::decode_inner;
use crate::error::{FlowError, TransportError};
use crate::transport::{EmailPayload, Endpoint, Transport};

pub const MISSING_EMAIL_MESSAGE: &str = "Please enter your email ID";
pub const NO_TEXT_MESSAGE: &str = "No text found";
pub const EXTRACTED_MESSAGE: &str = "Text extracted successfully";

const LINE_BLOCK: &str = "LINE";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TextExtractionResult {
    #[serde(default)]
    pub blocks: Vec<Block>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Block {
    #[serde(default)]
    pub block_type: String,
    pub text: Option<String>,
}

impl Block {
    pub fn line(text: &str) -> Self {
        Self {
            block_type: LINE_BLOCK.to_string(),
            text: Some(text.to_string()),
        }
    }

    pub fn is_line(&self) -> bool {
        self.block_type == LINE_BLOCK
    }
}

/// Unique line texts in first-seen order.
pub fn unique_lines(blocks: &[Block]) -> Vec<&str> {
    let mut seen = HashSet::new();
    blocks
        .iter()
        .filter(|b| b.is_line())
        .filter_map(|b| b.text.as_deref())
        .filter(|text| seen.insert(*text))
        .collect()
}

/// Joined text, or `None` when there are no lines.
pub fn extracted_text(result: &TextExtractionResult) -> Option<String> {
    let lines = unique_lines(&result.blocks);
    if lines.is_empty() {
        None
    } else {
        Some(lines.join(" "))
    }
}

#[derive(Debug)]
pub enum TextOutcome {
    MissingEmail,
    NoText,
    Extracted(String),
    Failed(FlowError),
}

impl TextOutcome {
    pub fn message(&self) -> String {
        match self {
            TextOutcome::MissingEmail => MISSING_EMAIL_MESSAGE.to_string(),
            TextOutcome::NoText => NO_TEXT_MESSAGE.to_string(),
            TextOutcome::Extracted(_) => EXTRACTED_MESSAGE.to_string(),
            TextOutcome::Failed(e) => failure_message(e),
        }
    }

    pub fn text(&self) -> Option<&str> {
        match self {
            TextOutcome::Extracted(text) => Some(text.as_str()),
            _ => None,
        }
    }

    /// Update the displayed text. An empty result clears it; validation
    /// failures and errors leave it as it was.
    pub fn apply(&self, shown: &mut String) {
        match self {
            TextOutcome::Extracted(text) => shown.clone_from(text),
            TextOutcome::NoText => shown.clear(),
            TextOutcome::MissingEmail | TextOutcome::Failed(_) => {}
        }
    }
}

/// User-facing text for each failure class.
///
/// Server replies surface their message (or status code), a missing reply
/// says so, and anything that failed locally shows the raw error.
pub fn failure_message(err: &FlowError) -> String {
    let detail = match err {
        FlowError::Transport(TransportError::NoResponse(_)) => "No response from server".to_string(),
        other => other.to_string(),
    };
    format!("Error extracting text: {}", detail)
}

pub fn interpret(result: &TextExtractionResult) -> TextOutcome {
    match extracted_text(result) {
        Some(text) => {
            info!("Extracted {} chars of text", text.len());
            TextOutcome::Extracted(text)
        }
        None => {
            info!("No text found");
            TextOutcome::NoText
        }
    }
}

pub async fn extract_text<T: Transport>(transport: &T, email: &str) -> TextOutcome {
    if email.is_empty() {
        warn!("Text extraction rejected: email missing");
        return TextOutcome::MissingEmail;
    }

    let payload = EmailPayload {
        email: email.to_string(),
    };
    match request(transport, &payload).await {
        Ok(result) => interpret(&result),
        Err(e) => {
            match &e {
                FlowError::Transport(TransportError::Status { status, message }) => {
                    error!("Error response: status {} message {:?}", status, message)
                }
                FlowError::Transport(TransportError::NoResponse(detail)) => {
                    error!("Error request: {}", detail)
                }
                other => error!("Error message: {}", other),
            }
            TextOutcome::Failed(e)
        }
    }
}

async fn request<T: Transport>(
    transport: &T,
    payload: &EmailPayload,
) -> Result<TextExtractionResult, FlowError> {
    let raw = transport.post_json(Endpoint::TextExtraction, payload).await?;
    Ok(decode_inner(&raw)?)
}
