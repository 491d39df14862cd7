use crate::commands::Cli;
use anyhow::Result;
use clap::{Parser, crate_name, crate_version};
use indicatif::MultiProgress;
use indicatif_log_bridge::LogWrapper;
use std::process::ExitCode;
use wav2bin::bincue::convert_to_bin_cue;

mod commands;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    dotenv::dotenv().ok();
    let logger = env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .build();

    let level = logger.filter();
    let pb = MultiProgress::new();

    LogWrapper::new(pb.clone(), logger).try_init()?;
    log::set_max_level(level);

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        // --help and --version
        Err(err) if !err.use_stderr() => {
            err.print()?;
            return Ok(ExitCode::SUCCESS);
        }
        Err(err) => {
            println!("{} {}", crate_name!(), crate_version!());
            err.print()?;
            return Ok(ExitCode::FAILURE);
        }
    };

    match convert_to_bin_cue(pb, cli.output_bin, cli.output_cue, &cli.inputs).await {
        Ok(_) => {
            println!("Conversion completed successfully.");
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            eprintln!("Error: {:#}", anyhow::Error::from(err));
            Ok(ExitCode::FAILURE)
        }
    }
}
