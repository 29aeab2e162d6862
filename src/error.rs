//! Error types for the booking relay.

use axum::http::StatusCode;
use serde_json::Value;

/// Configuration-related errors. All of them are fatal at startup.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("Invalid configuration value for {key}: {message}")]
    InvalidValue { key: String, message: String },
}

/// Failures of the forwarding pipeline.
///
/// The `Display` text is the `detail` string returned to the caller.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("Empty response received from webhook")]
    EmptyUpstreamResponse,

    #[error("Invalid JSON response from webhook. Response text: {raw}")]
    MalformedUpstreamResponse { raw: String },

    #[error("Webhook returned error status: {status}. Response: {body}")]
    UpstreamStatusError { status: u16, body: Value },

    #[error("RBTWebhookUrl not found in response. Response data: {body}")]
    MissingCallbackUrl { body: Value },

    #[error("Tool provisioning failed (upstream status {status}): {reason}")]
    ToolProvisioningFailed { status: u16, reason: String },

    #[error("Invalid JSON in assistant response. Raw response: {raw}")]
    MalformedAssistantResponse { raw: String },

    #[error("Assistant creation failed with status: {status}. Error details: {details}")]
    AssistantProvisioningFailed { status: u16, details: String },

    #[error("Error making API requests: {message}")]
    UpstreamTransport { message: String },
}

impl PipelineError {
    /// HTTP status surfaced to the inbound caller.
    ///
    /// Upstream statuses are mirrored where the pipeline rejects a status
    /// code; anything that is not a valid status collapses to 500.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::UpstreamStatusError { status, .. }
            | Self::AssistantProvisioningFailed { status, .. } => {
                StatusCode::from_u16(*status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
            }
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Which stage produced this error, for logging.
    pub fn stage(&self) -> &'static str {
        match self {
            Self::EmptyUpstreamResponse
            | Self::MalformedUpstreamResponse { .. }
            | Self::UpstreamStatusError { .. }
            | Self::MissingCallbackUrl { .. } => "webhook",
            Self::ToolProvisioningFailed { .. } => "tool",
            Self::MalformedAssistantResponse { .. } | Self::AssistantProvisioningFailed { .. } => {
                "assistant"
            }
            Self::UpstreamTransport { .. } => "transport",
        }
    }
}

impl From<reqwest::Error> for PipelineError {
    fn from(e: reqwest::Error) -> Self {
        Self::UpstreamTransport {
            message: e.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upstream_status_is_mirrored() {
        let err = PipelineError::UpstreamStatusError {
            status: 404,
            body: serde_json::json!({"error": "nope"}),
        };
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(err.stage(), "webhook");
    }

    #[test]
    fn invalid_mirrored_status_collapses_to_500() {
        let err = PipelineError::AssistantProvisioningFailed {
            status: 42,
            details: "weird".into(),
        };
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn gate_failures_are_500() {
        let errors = [
            PipelineError::EmptyUpstreamResponse,
            PipelineError::MalformedUpstreamResponse { raw: "x".into() },
            PipelineError::MissingCallbackUrl {
                body: serde_json::json!({}),
            },
            PipelineError::ToolProvisioningFailed {
                status: 200,
                reason: "Tool ID not found in response".into(),
            },
            PipelineError::MalformedAssistantResponse { raw: "".into() },
            PipelineError::UpstreamTransport {
                message: "connection refused".into(),
            },
        ];
        for err in errors {
            assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR, "{err}");
        }
    }

    #[test]
    fn detail_includes_raw_body() {
        let err = PipelineError::MalformedUpstreamResponse {
            raw: "<html>bad gateway</html>".into(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid JSON response from webhook. Response text: <html>bad gateway</html>"
        );
    }
}
