use crate::bincue::cue::error::{CueError, CueResult};
use crate::bincue::cue::models::CueSheet;
use std::path::{Path, PathBuf};

pub mod error;
pub mod models;

pub struct CueWriter {
    cue_path: PathBuf,
}

impl CueWriter {
    pub fn new(cue_path: impl AsRef<Path>) -> Self {
        Self {
            cue_path: cue_path.as_ref().to_path_buf(),
        }
    }

    pub async fn write(&self, cue_sheet: &CueSheet) -> CueResult<()> {
        tokio::fs::write(&self.cue_path, cue_sheet.to_string())
            .await
            .map_err(|source| CueError::OutputOpen {
                path: self.cue_path.clone(),
                source,
            })
    }
}
