use crate::bincue::bin::BinWriter;
use crate::bincue::cue::CueWriter;
use crate::bincue::cue::models::CueSheet;
use crate::bincue::error::ConvertResult;
use crate::bincue::models::TrackInfo;
use crate::wav::WavReader;
use indicatif::{MultiProgress, ProgressBar};
use log::{debug, info, warn};
use std::path::PathBuf;

mod bin;
mod cue;
pub mod error;
pub mod models;

/// Packs the given WAV files, in order, into one BIN image and writes a CUE sheet describing it.
///
/// Inputs are processed one after another since each track's offset depends on the aligned size
/// of every track before it. On error the tracks packed so far are flushed to the image, which is
/// otherwise left incomplete, and no CUE sheet is written.
pub async fn convert_to_bin_cue(
    pb: MultiProgress,
    bin_path: PathBuf,
    cue_path: PathBuf,
    wav_paths: &[PathBuf],
) -> ConvertResult<Vec<TrackInfo>> {
    debug!("Creating BIN file: {:?}", bin_path);
    let mut bin_writer = BinWriter::create(&bin_path).await?;

    let progress = pb.add(ProgressBar::new(wav_paths.len() as u64));
    let packed = pack_tracks(&mut bin_writer, wav_paths, &progress).await;
    progress.finish_and_clear();

    if let Err(err) = packed {
        if let Err(flush_err) = bin_writer.abort().await {
            warn!("Could not flush partial BIN file {:?}: {}", bin_path, flush_err);
        }
        return Err(err);
    }

    debug!(
        "Finalizing {:?}, {} frames total",
        bin_writer.path(),
        bin_writer.total_frames()
    );
    let tracks = bin_writer.finish().await?;

    debug!("Writing CUE file: {:?}", cue_path);
    let cue_sheet = CueSheet::from_tracks(bin_path.to_string_lossy(), &tracks);
    CueWriter::new(&cue_path).write(&cue_sheet).await?;

    Ok(tracks)
}

async fn pack_tracks(
    bin_writer: &mut BinWriter,
    wav_paths: &[PathBuf],
    progress: &ProgressBar,
) -> ConvertResult<()> {
    for wav_path in wav_paths {
        let wav = WavReader::open(wav_path).await?;
        debug!(
            "Packing {:?} ({} bytes of audio)",
            wav.path(),
            wav.header().data_size()
        );

        let title = wav.title();
        let payload = wav.read_sector_aligned().await?;
        let track = bin_writer.append_track(title, &payload).await?;
        info!("Track \"{}\" starts at {}", track.title, track.start());

        progress.inc(1);
    }

    Ok(())
}
