//! Stage 3: create the booking assistant on the voice platform.
//!
//! The descriptor is static. The tool id from stage 2 is not linked into it.

use secrecy::SecretString;
use serde_json::Value;
use tracing::info;

use crate::error::PipelineError;
use crate::pipeline::prompts::{ASSISTANT_FIRST_MESSAGE, ASSISTANT_SYSTEM_PROMPT};
use crate::pipeline::types::{
    AssistantDescriptor, AssistantModel, PromptMessage, Transcriber, Voice,
};
use crate::transport::{UpstreamClient, UpstreamReply};

impl Default for AssistantDescriptor {
    fn default() -> Self {
        Self {
            transcriber: Transcriber {
                provider: "deepgram",
                language: "en",
                model: "nova-2",
            },
            model: AssistantModel {
                provider: "openai",
                model: "gpt-4o-mini",
                temperature: 0.7,
                messages: vec![PromptMessage {
                    role: "system",
                    content: ASSISTANT_SYSTEM_PROMPT,
                }],
            },
            first_message: ASSISTANT_FIRST_MESSAGE,
            voice: Voice {
                provider: "11labs",
                voice_id: "burt",
            },
            first_message_mode: "assistant-speaks-first",
            background_denoising_enabled: true,
        }
    }
}

/// Create the assistant and return the platform's description of it.
pub async fn provision_assistant(
    client: &UpstreamClient,
    assistant_url: &str,
    api_key: &SecretString,
) -> Result<Value, PipelineError> {
    let descriptor = AssistantDescriptor::default();
    let reply = client
        .post_json(assistant_url, &descriptor, Some(api_key))
        .await?;
    let assistant = validate_assistant_reply(&reply)?;

    let assistant_id = assistant
        .get("id")
        .and_then(Value::as_str)
        .unwrap_or("unknown");
    info!(assistant_id = %assistant_id, "Created assistant");
    Ok(assistant)
}

/// The reply must be JSON and carry status 200 or 201.
pub fn validate_assistant_reply(reply: &UpstreamReply) -> Result<Value, PipelineError> {
    let data: Value =
        serde_json::from_str(&reply.body).map_err(|_| PipelineError::MalformedAssistantResponse {
            raw: reply.body.clone(),
        })?;

    if !matches!(reply.status, 200 | 201) {
        let details = if is_empty_value(&data) {
            "No error details available".to_string()
        } else {
            data.to_string()
        };
        return Err(PipelineError::AssistantProvisioningFailed {
            status: reply.status,
            details,
        });
    }

    Ok(data)
}

fn is_empty_value(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::String(s) => s.is_empty(),
        Value::Array(a) => a.is_empty(),
        Value::Object(o) => o.is_empty(),
        Value::Number(_) => false,
    }
}
