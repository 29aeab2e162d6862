//! Shared types for the forwarding pipeline.

use serde::{Deserialize, Serialize};
use serde_json::Value;

// ── Inbound request ─────────────────────────────────────────────────

/// Booking request as posted by the caller and relayed verbatim to the
/// automation webhook.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRequest {
    pub subaccount_token: String,
    pub subaccount_location_id: String,
    pub subaccount_calendar_id: String,
    pub client_name: String,
}

// ── Stage outputs ───────────────────────────────────────────────────

/// Stage 1 result: the webhook's reply plus the callback URL it handed back.
#[derive(Debug, Clone)]
pub struct WebhookRelay {
    pub status: u16,
    pub data: Value,
    pub callback_url: String,
}

/// Stage 2 result: the tool that now exists on the voice platform.
#[derive(Debug, Clone)]
pub struct ProvisionedTool {
    pub id: String,
    pub response: Value,
}

// ── Tool descriptor ─────────────────────────────────────────────────

/// Tool-registration payload.
#[derive(Debug, Clone, Serialize)]
pub struct ToolDescriptor {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub function: ToolFunction,
    pub server: ToolServer,
    #[serde(rename = "async")]
    pub is_async: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct ToolFunction {
    pub name: &'static str,
    pub description: &'static str,
    pub strict: bool,
}

/// Where the platform sends tool invocations.
#[derive(Debug, Clone, Serialize)]
pub struct ToolServer {
    pub url: String,
}

// ── Assistant descriptor ────────────────────────────────────────────

/// Assistant-creation payload.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssistantDescriptor {
    pub transcriber: Transcriber,
    pub model: AssistantModel,
    pub first_message: &'static str,
    pub voice: Voice,
    pub first_message_mode: &'static str,
    pub background_denoising_enabled: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct Transcriber {
    pub provider: &'static str,
    pub language: &'static str,
    pub model: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct AssistantModel {
    pub provider: &'static str,
    pub model: &'static str,
    pub temperature: f64,
    pub messages: Vec<PromptMessage>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PromptMessage {
    pub role: &'static str,
    pub content: &'static str,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Voice {
    pub provider: &'static str,
    pub voice_id: &'static str,
}

// ── Aggregate result ────────────────────────────────────────────────

/// Success payload returned to the caller.
#[derive(Debug, Clone, Serialize)]
pub struct ForwardingOutcome {
    pub status: &'static str,
    pub webhook_response: u16,
    pub webhook_data: Value,
    pub vapi_tool_response: Value,
    pub assistant_response: Value,
}

impl ForwardingOutcome {
    pub fn success(webhook: WebhookRelay, tool: ProvisionedTool, assistant: Value) -> Self {
        Self {
            status: "success",
            webhook_response: webhook.status,
            webhook_data: webhook.data,
            vapi_tool_response: tool.response,
            assistant_response: assistant,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn booking_request_uses_camel_case_on_the_wire() {
        let req = BookingRequest {
            subaccount_token: "t1".into(),
            subaccount_location_id: "l1".into(),
            subaccount_calendar_id: "c1".into(),
            client_name: "Jane".into(),
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "subaccountToken": "t1",
                "subaccountLocationId": "l1",
                "subaccountCalendarId": "c1",
                "clientName": "Jane"
            })
        );
    }

    #[test]
    fn booking_request_rejects_missing_fields() {
        let result: Result<BookingRequest, _> =
            serde_json::from_str(r#"{"subaccountToken":"t1","clientName":"Jane"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn outcome_serializes_all_sub_fields() {
        let outcome = ForwardingOutcome::success(
            WebhookRelay {
                status: 200,
                data: serde_json::json!({"RBTWebhookUrl": "https://example.com/cb"}),
                callback_url: "https://example.com/cb".into(),
            },
            ProvisionedTool {
                id: "tool_123".into(),
                response: serde_json::json!({"id": "tool_123"}),
            },
            serde_json::json!({"id": "asst_456"}),
        );
        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["status"], "success");
        assert_eq!(json["webhook_response"], 200);
        assert_eq!(json["webhook_data"]["RBTWebhookUrl"], "https://example.com/cb");
        assert_eq!(json["vapi_tool_response"]["id"], "tool_123");
        assert_eq!(json["assistant_response"]["id"], "asst_456");
    }
}
