//! Stage 1: relay the booking to the automation webhook and pull the
//! callback URL out of its reply.

use serde_json::Value;
use tracing::{debug, info};

use crate::error::PipelineError;
use crate::pipeline::types::{BookingRequest, WebhookRelay};
use crate::transport::{UpstreamClient, UpstreamReply};

/// Field in the webhook reply that carries the tool callback URL.
pub const CALLBACK_URL_FIELD: &str = "RBTWebhookUrl";

/// POST the booking to the webhook and validate the reply.
pub async fn relay_booking(
    client: &UpstreamClient,
    webhook_url: &str,
    request: &BookingRequest,
) -> Result<WebhookRelay, PipelineError> {
    debug!(client_name = %request.client_name, "Relaying booking to webhook");

    let reply = client.post_json(webhook_url, request, None).await?;
    let relay = validate_webhook_reply(&reply)?;

    info!(
        status = relay.status,
        callback_url = %relay.callback_url,
        "Webhook returned callback URL"
    );
    Ok(relay)
}

/// Gate chain for the webhook reply, applied in order:
/// non-empty body, JSON body, status 200, non-empty `RBTWebhookUrl`.
pub fn validate_webhook_reply(reply: &UpstreamReply) -> Result<WebhookRelay, PipelineError> {
    if reply.body.is_empty() {
        return Err(PipelineError::EmptyUpstreamResponse);
    }

    let data: Value =
        serde_json::from_str(&reply.body).map_err(|_| PipelineError::MalformedUpstreamResponse {
            raw: reply.body.clone(),
        })?;

    if reply.status != 200 {
        return Err(PipelineError::UpstreamStatusError {
            status: reply.status,
            body: data,
        });
    }

    let callback_url = data
        .get(CALLBACK_URL_FIELD)
        .and_then(Value::as_str)
        .filter(|url| !url.is_empty())
        .map(str::to_string);

    match callback_url {
        Some(callback_url) => Ok(WebhookRelay {
            status: reply.status,
            data,
            callback_url,
        }),
        None => Err(PipelineError::MissingCallbackUrl { body: data }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reply(status: u16, body: &str) -> UpstreamReply {
        UpstreamReply {
            status,
            body: body.to_string(),
        }
    }

    #[test]
    fn extracts_callback_url() {
        let relay =
            validate_webhook_reply(&reply(200, r#"{"RBTWebhookUrl":"https://example.com/cb"}"#))
                .unwrap();
        assert_eq!(relay.callback_url, "https://example.com/cb");
        assert_eq!(relay.status, 200);
        assert_eq!(relay.data["RBTWebhookUrl"], "https://example.com/cb");
    }

    #[test]
    fn empty_body_fails_before_status_check() {
        let err = validate_webhook_reply(&reply(502, "")).unwrap_err();
        assert!(matches!(err, PipelineError::EmptyUpstreamResponse));
    }

    #[test]
    fn non_json_body_keeps_raw_text() {
        let err = validate_webhook_reply(&reply(200, "Accepted")).unwrap_err();
        match err {
            PipelineError::MalformedUpstreamResponse { raw } => assert_eq!(raw, "Accepted"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn non_json_body_wins_over_bad_status() {
        let err = validate_webhook_reply(&reply(500, "Internal error")).unwrap_err();
        assert!(matches!(err, PipelineError::MalformedUpstreamResponse { .. }));
    }

    #[test]
    fn non_200_status_is_rejected_with_body() {
        let err = validate_webhook_reply(&reply(201, r#"{"RBTWebhookUrl":"https://x"}"#))
            .unwrap_err();
        match err {
            PipelineError::UpstreamStatusError { status, body } => {
                assert_eq!(status, 201);
                assert_eq!(body["RBTWebhookUrl"], "https://x");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn missing_or_empty_callback_url_is_rejected() {
        for body in [
            r#"{"other":"value"}"#,
            r#"{"RBTWebhookUrl":""}"#,
            r#"{"RBTWebhookUrl":null}"#,
            r#"{"RBTWebhookUrl":42}"#,
            r#"["RBTWebhookUrl"]"#,
        ] {
            let err = validate_webhook_reply(&reply(200, body)).unwrap_err();
            assert!(
                matches!(err, PipelineError::MissingCallbackUrl { .. }),
                "body {body} gave {err:?}"
            );
        }
    }
}
