// src/bincue/cue/models
use crate::bincue::models::TrackInfo;
use crate::cd::Msf;
use std::fmt;

/// A single-file audio cue sheet.
#[derive(Debug, Clone)]
pub struct CueSheet {
    pub file: CueFile,
    pub tracks: Vec<CueTrack>,
}

#[derive(Debug, Clone)]
pub struct CueFile {
    pub filename: String,
    pub file_type: FileType,
}

#[derive(Debug, Clone)]
pub struct CueTrack {
    pub number: u32,
    pub track_type: TrackType,
    pub title: String,
    pub index: Index,
}

#[derive(Debug, Clone, Copy)]
pub struct Index {
    pub number: u8,
    pub position: Msf,
}

#[derive(Debug, Clone, Copy)]
pub enum TrackType {
    Audio,
}

#[derive(Debug, Clone, Copy)]
pub enum FileType {
    Binary,
}

impl CueSheet {
    /// One AUDIO track per packed track, numbered from 1, each starting at INDEX 01.
    pub fn from_tracks(bin_filename: impl Into<String>, tracks: &[TrackInfo]) -> Self {
        let tracks = tracks
            .iter()
            .enumerate()
            .map(|(i, track)| CueTrack {
                number: i as u32 + 1,
                track_type: TrackType::Audio,
                title: track.title.clone(),
                index: Index {
                    number: 1,
                    position: track.start(),
                },
            })
            .collect();

        Self {
            file: CueFile {
                filename: bin_filename.into(),
                file_type: FileType::Binary,
            },
            tracks,
        }
    }
}

impl fmt::Display for TrackType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrackType::Audio => f.write_str("AUDIO"),
        }
    }
}

impl fmt::Display for FileType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileType::Binary => f.write_str("BINARY"),
        }
    }
}

impl fmt::Display for CueSheet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "FILE \"{}\" {}", self.file.filename, self.file.file_type)?;
        for track in &self.tracks {
            writeln!(f, "  TRACK {:02} {}", track.number, track.track_type)?;
            writeln!(f, "    TITLE \"{}\"", track.title)?;
            writeln!(
                f,
                "    INDEX {:02} {}",
                track.index.number, track.index.position
            )?;
        }
        Ok(())
    }
}
