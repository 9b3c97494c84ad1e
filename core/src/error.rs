use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum ThemeError {
    #[error("Unknown color scheme")]
    UnknownScheme,
}

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum StorageError {
    #[error("Persistent storage is not available")]
    Unavailable,
    #[error("Could not read from persistent storage")]
    ReadFailed,
    #[error("Could not write to persistent storage")]
    WriteFailed,
}

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum SurfaceError {
    #[error("Document has no root element")]
    MissingRoot,
    #[error("Document has no body yet")]
    MissingBody,
    #[error("Root element rejected the theme attribute")]
    AttributeRejected,
    #[error("Body rejected the transition style")]
    StyleRejected,
}

pub type Result<T, E = ThemeError> = core::result::Result<T, E>;
