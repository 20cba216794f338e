use thiserror::Error;

#[derive(Debug, Error)]
pub enum GridError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("yaml error: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("invalid metadata: {0}")]
    InvalidMetadata(String),
    #[error("out of bounds: {0}")]
    OutOfBounds(String),
    #[error("camera info unavailable; cannot project without intrinsics")]
    MissingCameraInfo,
    #[error("transform lookup failed: {0}")]
    Transform(String),
    #[error("degenerate geometry: {0}")]
    DegenerateGeometry(String),
}
