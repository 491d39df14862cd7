use crate::cd::sector_align;
use crate::wav::error::{WavError, WavResult};
use crate::wav::models::{DATA_TAG, FMT_TAG, WAV_HEADER_SIZE, WavHeader};
use binrw::BinRead;
use log::{debug, warn};
use std::io::{Cursor, ErrorKind};
use std::path::{Path, PathBuf};
use tokio::fs::File;
use tokio::io::{AsyncReadExt, BufReader};

pub mod error;
pub mod models;

/// Reads the sample payload of a single PCM WAV file.
///
/// The header is parsed at the fixed offsets of a minimal WAV file; chunks are not walked.
#[derive(Debug)]
pub struct WavReader {
    path: PathBuf,
    reader: BufReader<File>,
    header: WavHeader,
}

impl WavReader {
    pub async fn open(path: impl AsRef<Path>) -> WavResult<Self> {
        let path = path.as_ref().to_path_buf();
        let file = File::open(&path)
            .await
            .map_err(|source| WavError::InputOpen {
                path: path.clone(),
                source,
            })?;
        let mut reader = BufReader::new(file);

        let mut buf = [0u8; WAV_HEADER_SIZE];
        match reader.read_exact(&mut buf).await {
            Ok(_) => {}
            Err(e) if e.kind() == ErrorKind::UnexpectedEof => {
                return Err(WavError::UnsupportedFormat(path));
            }
            Err(e) => return Err(e.into()),
        }

        let header = WavHeader::read(&mut Cursor::new(&buf))?;
        if !header.is_riff_wave() || !header.is_pcm() {
            return Err(WavError::UnsupportedFormat(path));
        }

        if header.subchunk1_id != FMT_TAG || header.subchunk2_id != DATA_TAG {
            warn!(
                "{} does not have the minimal fmt/data chunk layout, reading it at fixed offsets anyway",
                path.display()
            );
        }

        debug!(
            "{}: {} ch, {} Hz, {} bit, {} bytes of audio",
            path.display(),
            header.num_channels,
            header.sample_rate,
            header.bits_per_sample,
            header.subchunk2_size
        );

        Ok(Self {
            path,
            reader,
            header,
        })
    }

    pub fn header(&self) -> &WavHeader {
        &self.header
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Track title: the file name without its extension.
    pub fn title(&self) -> String {
        self.path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    /// Reads the payload into a buffer zero-padded up to the next sector boundary.
    ///
    /// A file that ends before the declared data length is not an error, the missing bytes stay
    /// zero.
    pub async fn read_sector_aligned(mut self) -> WavResult<Vec<u8>> {
        let raw_size = self.header.data_size();
        let mut payload = Vec::with_capacity(sector_align(raw_size));

        (&mut self.reader)
            .take(raw_size as u64)
            .read_to_end(&mut payload)
            .await?;

        if payload.len() < raw_size {
            warn!(
                "{} declares {} bytes of audio but only {} are present, padding with silence",
                self.path.display(),
                raw_size,
                payload.len()
            );
        }

        payload.resize(sector_align(raw_size), 0);
        Ok(payload)
    }
}
