use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::{error, info};

use notes_rollup::{RenderMode, RollupConfig};

#[derive(Parser)]
#[command(
    name = "notes-rollup",
    version,
    about = "Collects dated notes from markdown journals into weekly rollups"
)]
struct Cli {
    /// Directory to scan
    #[arg(short, long, default_value = ".")]
    directory: PathBuf,

    /// Output directory
    #[arg(short, long, default_value = ".")]
    output_dir: PathBuf,

    /// Scan back this many weeks before the most recent one (week-files mode)
    #[arg(short = 'w', long = "weeks-back", default_value_t = 1)]
    weeks_back: usize,

    /// Output layout
    #[arg(short, long, value_enum, default_value_t = RenderMode::WeekFiles)]
    mode: RenderMode,

    /// Skip files whose path contains this text (previous rollups)
    #[arg(long, default_value = "rollup")]
    skip_marker: String,

    /// Extension of the documents to scan, without the dot
    #[arg(long, default_value = "md")]
    extension: String,

    /// Character opening a dated header line
    #[arg(long, default_value_t = '#')]
    header_marker: char,
}

impl From<Cli> for RollupConfig {
    fn from(cli: Cli) -> Self {
        RollupConfig {
            directory: cli.directory,
            output_dir: cli.output_dir,
            scan_back_weeks: cli.weeks_back,
            mode: cli.mode,
            skip_marker: cli.skip_marker,
            extension: cli.extension,
            header_marker: cli.header_marker,
        }
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config: RollupConfig = Cli::parse().into();
    let today = chrono::Local::now().date_naive();

    match notes_rollup::run(&config, today) {
        Ok(written) => {
            if written.is_empty() {
                info!("No notes found under {}", config.directory.display());
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}
