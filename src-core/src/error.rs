use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} is not set")]
    Missing(&'static str),

    #[error("{var} is not a valid URL: {source}")]
    InvalidUrl {
        var: &'static str,
        #[source]
        source: url::ParseError,
    },
}

/// Failure to get a usable reply out of a gateway endpoint.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The server answered with a non-success status.
    #[error("{}", status_text(.status, .message))]
    Status { status: u16, message: Option<String> },

    /// The request went out but nothing usable came back.
    #[error("No response from server")]
    NoResponse(String),

    /// The request could not be built or sent.
    #[error("{0}")]
    Setup(String),
}

/// Failure in one of the two stages of decoding a double-encoded reply.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("Malformed response envelope: {0}")]
    Envelope(#[source] serde_json::Error),

    #[error("Malformed result payload: {0}")]
    Inner(#[source] serde_json::Error),
}

fn status_text(status: &u16, message: &Option<String>) -> String {
    message.clone().unwrap_or_else(|| status.to_string())
}

#[derive(Debug, Error)]
pub enum FlowError {
    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error(transparent)]
    Decode(#[from] DecodeError),
}

impl From<ConfigError> for String {
    fn from(err: ConfigError) -> Self {
        err.to_string()
    }
}

impl From<FlowError> for String {
    fn from(err: FlowError) -> Self {
        err.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_prefers_server_message() {
        let err = TransportError::Status {
            status: 400,
            message: Some("Email not registered".to_string()),
        };
        assert_eq!(err.to_string(), "Email not registered");
    }

    #[test]
    fn test_status_error_falls_back_to_code() {
        let err = TransportError::Status {
            status: 502,
            message: None,
        };
        assert_eq!(err.to_string(), "502");
    }

    #[test]
    fn test_flow_error_is_transparent() {
        let err: FlowError = TransportError::Setup("relative URL without a base".to_string()).into();
        assert_eq!(String::from(err), "relative URL without a base");
    }
}
