use clap::Parser;
use std::path::PathBuf;

/// Packs PCM WAV files into a single CD audio BIN image and writes a CUE sheet for it.
#[derive(Parser, Debug, Clone, Eq, PartialEq)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output BIN image path
    #[arg(value_name = "OUTPUT_BIN")]
    pub output_bin: PathBuf,

    /// Output CUE sheet path
    #[arg(value_name = "OUTPUT_CUE")]
    pub output_cue: PathBuf,

    /// Input WAV files, one track each, in disc order
    #[arg(value_name = "INPUT_WAV", required = true, num_args = 1..)]
    pub inputs: Vec<PathBuf>,
}
