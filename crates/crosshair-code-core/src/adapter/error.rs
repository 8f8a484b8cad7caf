use thiserror::Error;

/// Error type for UI-side values that have no record equivalent.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AdapterError {
    #[error("unknown crosshair shape: {0:?}")]
    UnknownShape(String),
    #[error("invalid color {0:?}, expected #rrggbb")]
    InvalidColor(String),
}
