//! Booking forwarding pipeline.
//!
//! Every booking flows through three strictly ordered stages:
//! 1. `webhook::relay_booking()`: POST to the automation webhook, extract `RBTWebhookUrl`
//! 2. `tool::provision_tool()`: register the calendar tool against that URL
//! 3. `assistant::provision_assistant()`: create the voice assistant
//!
//! A stage only runs if the previous one returned a validated result.

pub mod assistant;
pub mod processor;
pub mod prompts;
pub mod tool;
pub mod types;
pub mod webhook;

pub use processor::ForwardingPipeline;
pub use types::{BookingRequest, ForwardingOutcome};
