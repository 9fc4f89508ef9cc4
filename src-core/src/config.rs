use std::env;

use tracing::{info, warn};
use url::Url;

use crate::error::ConfigError;

pub const UPLOAD_URL_VAR: &str = "IMAGE_UPLOAD_API_GATEWAY_URL";
pub const FACE_DETECTION_URL_VAR: &str = "FACE_DETECTION_API_GATEWAY_URL";
pub const TEXT_EXTRACTION_URL_VAR: &str = "TEXT_EXTRACTION_API_GATEWAY_URL";

/// The three gateway endpoints, one per flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointConfig {
    pub upload: Url,
    pub face_detection: Url,
    pub text_extraction: Url,
}

impl EndpointConfig {
    /// Read the endpoints from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the config from any key lookup.
    ///
    /// The browser build has no process environment, so it passes a lookup
    /// over values captured at compile time.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            upload: load_url(&lookup, UPLOAD_URL_VAR)?,
            face_detection: load_url(&lookup, FACE_DETECTION_URL_VAR)?,
            text_extraction: load_url(&lookup, TEXT_EXTRACTION_URL_VAR)?,
        })
    }
}

fn load_url<F>(lookup: &F, var: &'static str) -> Result<Url, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let raw = lookup(var)
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .ok_or_else(|| {
            warn!("{var} not set");
            ConfigError::Missing(var)
        })?;

    let url = Url::parse(&raw).map_err(|source| {
        warn!("Invalid {var} value: {source}");
        ConfigError::InvalidUrl { var, source }
    })?;

    info!("{var} = {url}");
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_all_endpoints_present() {
        let config = EndpointConfig::from_lookup(lookup_from(&[
            (UPLOAD_URL_VAR, "https://gw.example.com/prod/upload"),
            (FACE_DETECTION_URL_VAR, "https://gw.example.com/prod/faces"),
            (TEXT_EXTRACTION_URL_VAR, " https://gw.example.com/prod/text "),
        ]))
        .unwrap();

        assert_eq!(config.upload.as_str(), "https://gw.example.com/prod/upload");
        assert_eq!(config.face_detection.path(), "/prod/faces");
        assert_eq!(config.text_extraction.path(), "/prod/text");
    }

    #[test]
    fn test_missing_endpoint_is_named() {
        let err = EndpointConfig::from_lookup(lookup_from(&[
            (UPLOAD_URL_VAR, "https://gw.example.com/upload"),
            (FACE_DETECTION_URL_VAR, "https://gw.example.com/faces"),
        ]))
        .unwrap_err();

        assert!(matches!(err, ConfigError::Missing(TEXT_EXTRACTION_URL_VAR)));
        assert_eq!(err.to_string(), "TEXT_EXTRACTION_API_GATEWAY_URL is not set");
    }

    #[test]
    fn test_blank_endpoint_counts_as_missing() {
        let err = EndpointConfig::from_lookup(lookup_from(&[(UPLOAD_URL_VAR, "   ")])).unwrap_err();
        assert!(matches!(err, ConfigError::Missing(UPLOAD_URL_VAR)));
    }

    #[test]
    fn test_relative_endpoint_is_rejected() {
        let err = EndpointConfig::from_lookup(lookup_from(&[
            (UPLOAD_URL_VAR, "/upload"),
            (FACE_DETECTION_URL_VAR, "https://gw.example.com/faces"),
            (TEXT_EXTRACTION_URL_VAR, "https://gw.example.com/text"),
        ]))
        .unwrap_err();

        match err {
            ConfigError::InvalidUrl { var, .. } => assert_eq!(var, UPLOAD_URL_VAR),
            other => panic!("Expected InvalidUrl, got {:?}", other),
        }
    }
}
