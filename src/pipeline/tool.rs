//! Stage 2: register the calendar availability tool on the voice platform,
//! pointed at the callback URL from stage 1.

use secrecy::SecretString;
use serde_json::Value;
use tracing::info;

use crate::error::PipelineError;
use crate::pipeline::prompts::CALENDAR_TOOL_DESCRIPTION;
use crate::pipeline::types::{ProvisionedTool, ToolDescriptor, ToolFunction, ToolServer};
use crate::transport::{UpstreamClient, UpstreamReply};

/// Name the assistant prompt uses to refer to the tool.
pub const CALENDAR_TOOL_NAME: &str = "Getcalendaravailabletimes";

impl ToolDescriptor {
    /// The calendar availability function, executed synchronously against
    /// `callback_url`.
    pub fn calendar_availability(callback_url: impl Into<String>) -> Self {
        Self {
            kind: "function",
            function: ToolFunction {
                name: CALENDAR_TOOL_NAME,
                description: CALENDAR_TOOL_DESCRIPTION,
                strict: false,
            },
            server: ToolServer {
                url: callback_url.into(),
            },
            is_async: false,
        }
    }
}

/// Register the tool and return its platform id.
pub async fn provision_tool(
    client: &UpstreamClient,
    tool_url: &str,
    api_key: &SecretString,
    callback_url: &str,
) -> Result<ProvisionedTool, PipelineError> {
    let descriptor = ToolDescriptor::calendar_availability(callback_url);
    let reply = client.post_json(tool_url, &descriptor, Some(api_key)).await?;
    let tool = validate_tool_reply(&reply)?;

    info!(tool_id = %tool.id, "Provisioned calendar tool");
    Ok(tool)
}

/// The reply must be JSON, carry a 2xx status, and contain a non-empty `id`.
pub fn validate_tool_reply(reply: &UpstreamReply) -> Result<ProvisionedTool, PipelineError> {
    let response: Value =
        serde_json::from_str(&reply.body).map_err(|_| PipelineError::ToolProvisioningFailed {
            status: reply.status,
            reason: format!("Invalid JSON in tool response. Raw response: {}", reply.body),
        })?;

    if !(200..300).contains(&reply.status) {
        return Err(PipelineError::ToolProvisioningFailed {
            status: reply.status,
            reason: format!("Tool registration rejected. Response: {response}"),
        });
    }

    let id = response
        .get("id")
        .and_then(Value::as_str)
        .filter(|id| !id.is_empty())
        .map(str::to_string);

    match id {
        Some(id) => Ok(ProvisionedTool { id, response }),
        None => Err(PipelineError::ToolProvisioningFailed {
            status: reply.status,
            reason: "Tool ID not found in response".to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::prompts::ASSISTANT_SYSTEM_PROMPT;

    fn reply(status: u16, body: &str) -> UpstreamReply {
        UpstreamReply {
            status,
            body: body.to_string(),
        }
    }

    #[test]
    fn descriptor_wire_shape() {
        let json =
            serde_json::to_value(ToolDescriptor::calendar_availability("https://example.com/cb"))
                .unwrap();
        assert_eq!(json["type"], "function");
        assert_eq!(json["function"]["name"], CALENDAR_TOOL_NAME);
        assert_eq!(json["function"]["strict"], false);
        assert!(
            json["function"]["description"]
                .as_str()
                .unwrap()
                .contains("selectedSlot")
        );
        assert_eq!(json["server"]["url"], "https://example.com/cb");
        assert_eq!(json["async"], false);
    }

    #[test]
    fn assistant_prompt_refers_to_tool_by_name() {
        assert!(ASSISTANT_SYSTEM_PROMPT.contains(CALENDAR_TOOL_NAME));
    }

    #[test]
    fn accepts_reply_with_id() {
        let tool = validate_tool_reply(&reply(201, r#"{"id":"tool_123","type":"function"}"#))
            .unwrap();
        assert_eq!(tool.id, "tool_123");
        assert_eq!(tool.response["type"], "function");
    }

    #[test]
    fn missing_id_is_rejected() {
        for body in [r#"{"name":"x"}"#, r#"{"id":""}"#, r#"{"id":7}"#] {
            let err = validate_tool_reply(&reply(200, body)).unwrap_err();
            assert!(
                matches!(err, PipelineError::ToolProvisioningFailed { .. }),
                "body {body}"
            );
        }
    }

    #[test]
    fn error_status_is_rejected_even_with_id() {
        let err = validate_tool_reply(&reply(400, r#"{"id":"tool_1","message":"bad"}"#))
            .unwrap_err();
        match err {
            PipelineError::ToolProvisioningFailed { status, reason } => {
                assert_eq!(status, 400);
                assert!(reason.contains("bad"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn non_json_reply_is_rejected() {
        let err = validate_tool_reply(&reply(502, "Bad Gateway")).unwrap_err();
        assert!(err.to_string().contains("Bad Gateway"));
    }
}
