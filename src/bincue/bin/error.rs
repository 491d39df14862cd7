use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BinError {
    #[error(transparent)]
    IoError(#[from] std::io::Error),

    #[error("Failed to open BIN file for writing: {}", path.display())]
    OutputOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("BIN image exceeds the addressable number of frames")]
    TooManyFrames,
}

pub type BinResult<T> = Result<T, BinError>;
