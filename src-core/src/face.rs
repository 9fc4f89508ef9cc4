//! Face detection flow.
//!
//! The gateway replies with a Rekognition-style `DetectFaces` result wrapped
//! in an envelope. Only the first face is ever shown.

use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};

use crate::envelope::decode_inner;
use crate::error::FlowError;
use crate::transport::{EmailPayload, Endpoint, Transport};

pub const MISSING_EMAIL_MESSAGE: &str = "Please enter your email ID";
pub const NO_FACE_MESSAGE: &str = "No face detected";
pub const ANALYZED_MESSAGE: &str = "Analysis request sent successfully";
pub const ANALYSIS_ERROR_MESSAGE: &str = "Error generating analysis";

const UNKNOWN: &str = "Unknown";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct FaceDetectionResult {
    #[serde(default)]
    pub face_details: Vec<FaceDetail>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct FaceDetail {
    pub age_range: Option<AgeRange>,
    pub gender: Option<Gender>,
    pub smile: Option<Smile>,
    #[serde(default)]
    pub emotions: Vec<Emotion>,
}

/// Every inner field may be absent; a missing value renders as `Unknown`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct AgeRange {
    pub low: Option<f64>,
    pub high: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Gender {
    pub value: Option<String>,
    pub confidence: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Smile {
    pub value: Option<bool>,
    pub confidence: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Emotion {
    #[serde(rename = "Type")]
    pub kind: Option<String>,
    pub confidence: Option<f64>,
}

/// Display-ready view of the first detected face.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FaceSummary {
    pub age_range: String,
    pub gender: String,
    pub smile: String,
    pub emotions: Vec<String>,
}

impl FaceSummary {
    pub fn from_detail(detail: &FaceDetail) -> Self {
        Self {
            age_range: match detail.age_range {
                Some(AgeRange {
                    low: Some(low),
                    high: Some(high),
                }) => format!("{} - {}", low, high),
                _ => UNKNOWN.to_string(),
            },
            gender: detail
                .gender
                .as_ref()
                .and_then(|g| g.value.clone())
                .unwrap_or_else(|| UNKNOWN.to_string()),
            smile: match detail.smile.as_ref().and_then(|s| s.value) {
                Some(true) => "Smiling".to_string(),
                Some(false) => "Not Smiling".to_string(),
                None => UNKNOWN.to_string(),
            },
            emotions: detail.emotions.iter().map(emotion_line).collect(),
        }
    }
}

fn emotion_line(emotion: &Emotion) -> String {
    let kind = emotion.kind.as_deref().unwrap_or(UNKNOWN);
    match emotion.confidence {
        Some(confidence) => format!("{}: {}%", kind, format_percent(confidence)),
        None => format!("{}: {}", kind, UNKNOWN),
    }
}

/// Two decimals, halves rounded away from zero (87.345 -> "87.35").
pub fn format_percent(value: f64) -> String {
    format!("{:.2}", (value * 100.0).round() / 100.0)
}

/// A result that contains at least one face.
#[derive(Debug, Clone, PartialEq)]
pub struct FaceAnalysis {
    result: FaceDetectionResult,
}

impl FaceAnalysis {
    /// `None` when the result has no faces.
    pub fn new(result: FaceDetectionResult) -> Option<Self> {
        if result.face_details.is_empty() {
            None
        } else {
            Some(Self { result })
        }
    }

    pub fn face_count(&self) -> usize {
        self.result.face_details.len()
    }

    pub fn summary(&self) -> FaceSummary {
        // non-empty by construction
        FaceSummary::from_detail(&self.result.face_details[0])
    }
}

#[derive(Debug)]
pub enum FaceOutcome {
    MissingEmail,
    NoFace,
    Analyzed(FaceAnalysis),
    Failed(FlowError),
}

impl FaceOutcome {
    pub fn message(&self) -> &'static str {
        match self {
            FaceOutcome::MissingEmail => MISSING_EMAIL_MESSAGE,
            FaceOutcome::NoFace => NO_FACE_MESSAGE,
            FaceOutcome::Analyzed(_) => ANALYZED_MESSAGE,
            FaceOutcome::Failed(_) => ANALYSIS_ERROR_MESSAGE,
        }
    }

    pub fn analysis(&self) -> Option<&FaceAnalysis> {
        match self {
            FaceOutcome::Analyzed(analysis) => Some(analysis),
            _ => None,
        }
    }

    /// Update the displayed analysis. "No face" clears it; validation
    /// failures and errors leave it as it was.
    pub fn apply(&self, shown: &mut Option<FaceAnalysis>) {
        match self {
            FaceOutcome::Analyzed(analysis) => *shown = Some(analysis.clone()),
            FaceOutcome::NoFace => *shown = None,
            FaceOutcome::MissingEmail | FaceOutcome::Failed(_) => {}
        }
    }
}

/// Interpret an already-decoded inner result.
pub fn interpret(result: FaceDetectionResult) -> FaceOutcome {
    match FaceAnalysis::new(result) {
        Some(analysis) => {
            info!("Detected {} face(s)", analysis.face_count());
            FaceOutcome::Analyzed(analysis)
        }
        None => {
            info!("No face detected");
            FaceOutcome::NoFace
        }
    }
}

pub async fn analyze_face<T: Transport>(transport: &T, email: &str) -> FaceOutcome {
    if email.is_empty() {
        warn!("Face analysis rejected: email missing");
        return FaceOutcome::MissingEmail;
    }

    let payload = EmailPayload {
        email: email.to_string(),
    };
    match request(transport, &payload).await {
        Ok(result) => interpret(result),
        Err(e) => {
            error!("Analysis request error: {}", e);
            FaceOutcome::Failed(e)
        }
    }
}

async fn request<T: Transport>(
    transport: &T,
    payload: &EmailPayload,
) -> Result<FaceDetectionResult, FlowError> {
    let raw = transport.post_json(Endpoint::FaceDetection, payload).await?;
    Ok(decode_inner(&raw)?)
}
