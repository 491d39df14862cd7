pub mod error;

use crate::bincue::bin::error::{BinError, BinResult};
use crate::bincue::models::TrackInfo;
use crate::cd::{SECTOR_SIZE, sectors_for};
use std::path::{Path, PathBuf};
use tokio::fs::File;
use tokio::io::{AsyncWriteExt, BufWriter};

// BIN image writer
#[derive(Debug)]
pub struct BinWriter {
    path: PathBuf,
    writer: BufWriter<File>,
    current_offset_frames: u32,
    tracks: Vec<TrackInfo>,
}

impl BinWriter {
    /// Creates (or truncates) the image file.
    pub async fn create(bin_path: impl AsRef<Path>) -> BinResult<Self> {
        let path = bin_path.as_ref().to_path_buf();
        let file = File::create(&path)
            .await
            .map_err(|source| BinError::OutputOpen {
                path: path.clone(),
                source,
            })?;

        Ok(Self {
            path,
            writer: BufWriter::with_capacity(8 * 1024 * 1024, file), // 8 MB buffer
            current_offset_frames: 0,
            tracks: Vec::new(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Appends a track's sector-aligned audio and records where it starts.
    pub async fn append_track(&mut self, title: String, payload: &[u8]) -> BinResult<&TrackInfo> {
        debug_assert_eq!(
            payload.len() % SECTOR_SIZE,
            0,
            "track payload must be sector aligned"
        );

        let frames =
            u32::try_from(sectors_for(payload.len())).map_err(|_| BinError::TooManyFrames)?;
        let next_offset = self
            .current_offset_frames
            .checked_add(frames)
            .ok_or(BinError::TooManyFrames)?;

        self.writer.write_all(payload).await?;

        let index = self.tracks.len();
        self.tracks.push(TrackInfo {
            title,
            offset_frames: self.current_offset_frames,
        });
        self.current_offset_frames = next_offset;

        Ok(&self.tracks[index])
    }

    pub fn total_frames(&self) -> u32 {
        self.current_offset_frames
    }

    /// Flushes and closes the image, handing back the packed tracks in order.
    pub async fn finish(mut self) -> BinResult<Vec<TrackInfo>> {
        self.writer.flush().await?;
        self.writer.into_inner().sync_all().await?;
        Ok(self.tracks)
    }

    /// Flushes whatever has been packed so far without finishing the image, for the error path.
    pub async fn abort(mut self) -> BinResult<()> {
        self.writer.flush().await?;
        Ok(())
    }
}
