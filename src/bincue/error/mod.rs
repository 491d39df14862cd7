use crate::bincue::bin::error::BinError;
use crate::bincue::cue::error::CueError;
use crate::wav::error::WavError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConvertError {
    #[error(transparent)]
    WavError(#[from] WavError),

    #[error(transparent)]
    BinError(#[from] BinError),

    #[error(transparent)]
    CueError(#[from] CueError),
}

pub type ConvertResult<T> = Result<T, ConvertError>;
