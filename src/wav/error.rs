use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WavError {
    #[error(transparent)]
    IoError(#[from] std::io::Error),

    #[error(transparent)]
    BinRWError(#[from] binrw::Error),

    #[error("Failed to open WAV file: {}", path.display())]
    InputOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid or unsupported WAV file format: {}", .0.display())]
    UnsupportedFormat(PathBuf),
}

pub type WavResult<T> = Result<T, WavError>;
