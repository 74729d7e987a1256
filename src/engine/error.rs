use thiserror::Error;

/// Configuration rejected by the engine.
///
/// This is the only error the engine surfaces; every other misuse of the
/// command interface (stale clicks, clicks outside a round) is a defined
/// no-op rather than an error.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The round duration must be a positive number of milliseconds. The
    /// previous valid value is kept when this is returned.
    #[error("invalid round duration: {0} ms (must be positive)")]
    InvalidRoundDuration(i64),
}
