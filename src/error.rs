use thiserror::Error;

pub type PlotResult<T> = Result<T, PlotError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlotError {
    /// Caller passed malformed input (length mismatch, tick count < 2, ...).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Operation requested before the plot holds any data.
    #[error("invalid state: {0}")]
    InvalidState(String),

    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    /// A render primitive carries non-finite or otherwise unusable geometry.
    #[error("invalid data: {0}")]
    InvalidData(String),
}
