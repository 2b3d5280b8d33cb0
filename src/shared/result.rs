/// Type alias for Result with anyhow::Error as the error type.
/// Use cases attach file context to typed errors on the way out.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
