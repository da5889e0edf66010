use thiserror::Error;

#[derive(Debug, Error)]
pub enum LevelError {
    #[error("asset '{0}' is not loaded")]
    MissingAsset(String),
    #[error("failed to load '{url}': {reason}")]
    AssetLoad { url: String, reason: String },
    #[error("invalid level data: {0}")]
    Parse(#[from] ron::error::SpannedError),
    #[error("level data version {0} unsupported (expected 1)")]
    UnsupportedVersion(u32),
    #[error("level data contains no levels")]
    EmptySequence,
    #[error("level {level} has invalid scroll ({x}, {y}); x must be finite and >= 0")]
    InvalidScroll { level: usize, x: f64, y: f64 },
    #[error("block size must be non-zero")]
    ZeroBlockSize,
    #[error("{0}")]
    Dom(String),
}

pub type Result<T, E = LevelError> = std::result::Result<T, E>;
