//! Booking relay — forwards bookings to an automation webhook and provisions
//! a voice assistant for them.

pub mod config;
pub mod error;
pub mod pipeline;
pub mod routes;
pub mod transport;
