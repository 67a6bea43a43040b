//! API Lambda handler

pub mod handler;

// Re-export the main handler for convenience
pub use handler::function_handler as handler;
