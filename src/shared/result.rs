/// Type alias for Result with anyhow::Error as the error type.
/// Layer-specific failures are raised as `LookupError` and travel inside it.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
