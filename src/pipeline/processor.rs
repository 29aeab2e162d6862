//! Forwarding pipeline — runs the three stages in order.
//!
//! Each stage consumes the previous stage's output; the first failure
//! aborts the request. There is no partial success. Without cleanup enabled,
//! a tool created in stage 2 is left in place when stage 3 fails.

use tracing::{Instrument, error, info, info_span, warn};
use uuid::Uuid;

use crate::config::RelayConfig;
use crate::error::PipelineError;
use crate::pipeline::types::{BookingRequest, ForwardingOutcome, ProvisionedTool};
use crate::pipeline::{assistant, tool, webhook};
use crate::transport::UpstreamClient;

/// Runs booking → tool → assistant against the configured upstreams.
pub struct ForwardingPipeline {
    config: RelayConfig,
    client: UpstreamClient,
}

impl ForwardingPipeline {
    /// Build the pipeline and its shared outbound client.
    pub fn new(config: RelayConfig) -> Result<Self, PipelineError> {
        let client = UpstreamClient::new(config.request_timeout, config.retry.clone())?;
        Ok(Self { config, client })
    }

    /// Process a single booking through all three stages.
    pub async fn forward(
        &self,
        request: &BookingRequest,
    ) -> Result<ForwardingOutcome, PipelineError> {
        let request_id = Uuid::new_v4();
        let span = info_span!("forward_booking", %request_id);

        async {
            info!(
                location_id = %request.subaccount_location_id,
                calendar_id = %request.subaccount_calendar_id,
                "Forwarding booking"
            );

            let result = self.run_stages(request).await;
            match &result {
                Ok(_) => info!("Booking forwarded"),
                Err(e) => error!(
                    stage = e.stage(),
                    status = e.status_code().as_u16(),
                    error = %e,
                    "Booking forwarding failed"
                ),
            }
            result
        }
        .instrument(span)
        .await
    }

    async fn run_stages(
        &self,
        request: &BookingRequest,
    ) -> Result<ForwardingOutcome, PipelineError> {
        let api_key = &self.config.vapi_api_key;

        // Stage 1: webhook relay
        let relay = webhook::relay_booking(&self.client, &self.config.webhook_url, request).await?;

        // Stage 2: tool provisioning
        let tool = tool::provision_tool(
            &self.client,
            &self.config.tool_url(),
            api_key,
            &relay.callback_url,
        )
        .await?;

        // Stage 3: assistant provisioning
        let assistant =
            match assistant::provision_assistant(&self.client, &self.config.assistant_url(), api_key)
                .await
            {
                Ok(assistant) => assistant,
                Err(e) => {
                    if self.config.cleanup_orphaned_tools {
                        self.remove_orphaned_tool(&tool).await;
                    } else {
                        warn!(tool_id = %tool.id, "Assistant creation failed; tool left orphaned");
                    }
                    return Err(e);
                }
            };

        Ok(ForwardingOutcome::success(relay, tool, assistant))
    }

    /// Best-effort delete of a tool whose assistant could not be created.
    /// Failures are logged and never replace the assistant error.
    async fn remove_orphaned_tool(&self, tool: &ProvisionedTool) {
        let url = format!("{}/{}", self.config.tool_url(), tool.id);
        match self
            .client
            .delete(&url, Some(&self.config.vapi_api_key))
            .await
        {
            Ok(reply) if (200..300).contains(&reply.status) => {
                info!(tool_id = %tool.id, "Removed orphaned tool");
            }
            Ok(reply) => {
                warn!(
                    tool_id = %tool.id,
                    status = reply.status,
                    body = %reply.body,
                    "Orphaned tool cleanup rejected"
                );
            }
            Err(e) => {
                warn!(tool_id = %tool.id, error = %e, "Orphaned tool cleanup failed");
            }
        }
    }
}
