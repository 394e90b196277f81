use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};
use mp4fastopt::{Cancel, Config, Error, Listener, NullListener};

#[derive(Parser)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Rewrite `input` so its `moov` box precedes `mdat`, writing the result to `output`.
    Optimize {
        input: PathBuf,
        output: PathBuf,

        /// Refuse inputs whose moov payload exceeds this many bytes.
        #[arg(long, default_value_t = Config::DEFAULT_MOOV_CAP)]
        moov_cap: u64,

        /// Size, in bytes, of the chunks used to stream mdat from input to output.
        #[arg(long, default_value_t = Config::DEFAULT_CHUNK_SIZE)]
        chunk_size: usize,
    },

    /// Exit 0 if `input` is already fast-start, 1 otherwise.
    Check { input: PathBuf },
}

struct CliListener;

impl Listener for CliListener {
    fn on_progress(&mut self, fraction: f32) {
        log::info!("progress: {:.0}%", fraction * 100.0);
    }

    fn on_success(&mut self, output_path: Option<&std::path::Path>) {
        if let Some(path) = output_path {
            log::info!("wrote fast-start output to {}", path.display());
        }
    }

    fn on_error(&mut self, error: &Error) {
        log::error!("optimize failed: {error}");
    }
}

fn main() -> anyhow::Result<ExitCode> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .try_init()
        .context("error initializing logging")?;

    let args = Args::try_parse().context("error parsing command line arguments")?;

    match args.command {
        Command::Optimize { input, output, moov_cap, chunk_size } => {
            let config = Config { moov_cap, chunk_size };
            let mut listener = CliListener;
            let cancel = Cancel::new();
            match mp4fastopt::optimize_file(&input, &output, &config, &mut listener, &cancel) {
                Ok(()) => Ok(ExitCode::SUCCESS),
                Err(err) => {
                    eprintln!("error: {err}");
                    Ok(ExitCode::from(1))
                }
            }
        }

        Command::Check { input } => match mp4fastopt::is_optimized_file(&input) {
            Ok(true) => {
                println!("{}: already fast-start", input.display());
                Ok(ExitCode::SUCCESS)
            }
            Ok(false) => {
                println!("{}: not fast-start", input.display());
                Ok(ExitCode::from(1))
            }
            Err(err) => {
                let mut listener = NullListener;
                listener.on_error(&err);
                eprintln!("error: {err}");
                Ok(ExitCode::from(2))
            }
        },
    }
}
