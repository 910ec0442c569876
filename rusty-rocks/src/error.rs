use comms::WireError;
use thiserror::Error;

/// The dataset could not be fetched or decoded. The page degrades to an empty
/// dataset; nothing is retried.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("request failed: {0}")]
    Network(String),

    #[error("server answered with status {0}")]
    Status(u16),

    #[error("malformed dataset: {0}")]
    Decode(#[from] WireError),
}

/// The device position could not be obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GeolocationError {
    #[error("permission to read the location was denied")]
    PermissionDenied,

    #[error("position unavailable")]
    PositionUnavailable,

    #[error("timed out waiting for a position")]
    Timeout,

    #[error("geolocation is not supported")]
    Unsupported,
}

impl From<u16> for GeolocationError {
    /// Maps the browser's `GeolocationPositionError.code`.
    fn from(value: u16) -> Self {
        match value {
            1 => Self::PermissionDenied,
            3 => Self::Timeout,
            _ => Self::PositionUnavailable,
        }
    }
}
