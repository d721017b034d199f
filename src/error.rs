/// Failures raised by the tools and by server startup.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The timezone identifier is not in the IANA database.
    #[error("unknown timezone '{0}'")]
    UnknownTimeZone(String),

    /// The sum does not fit in a signed 64-bit integer.
    #[error("integer overflow: {a} + {b} does not fit in 64 bits")]
    Overflow { a: i64, b: i64 },

    #[error("system clock unavailable: {0}")]
    ClockUnavailable(String),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Failed to access file system: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
