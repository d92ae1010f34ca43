/// Shared kernel - error types and common aliases used across layers
pub mod error;
pub mod result;

pub use result::Result;
