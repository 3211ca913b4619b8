//! Lambda handler and request processing

pub mod event;
pub mod handler;
pub mod helpers;

// Re-export the main handler for convenience
pub use handler::handler;
