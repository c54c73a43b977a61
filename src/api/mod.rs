//! Webhook Lambda handler and request processing

pub mod commands;
pub mod handler;
pub mod helpers;
pub mod parsing;

// Re-export the main handler for convenience
pub use handler::{WebhookApp, handler};
