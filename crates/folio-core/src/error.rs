use thiserror::Error;

/// Failures while building a field from its content source.
///
/// Callers log these and fall back to an empty field; none of them is
/// fatal to the hosting view.
#[derive(Debug, Error)]
pub enum FieldError {
    #[error("pixel buffer holds {actual} bytes, expected {expected} for {width}x{height} RGBA")]
    PixelBuffer {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },
    #[error("invalid color `{0}`")]
    Color(String),
    #[error("malformed payload: {0}")]
    Payload(#[from] serde_json::Error),
    #[error("remote endpoint reported: {0}")]
    Remote(String),
    #[error("invalid layout: {0}")]
    Layout(&'static str),
}

/// Reasons an adapter could not draw an entity this frame.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RenderError {
    #[error("render target `{0}` is not mounted")]
    TargetUnavailable(String),
    #[error("render surface unavailable")]
    SurfaceUnavailable,
}
