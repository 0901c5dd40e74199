use std::process::ExitCode;

use clap::Parser;

use gapdash_cli::args::Args;
use gapdash_cli::config::Config;
use gapdash_cli::error::AppError;
use gapdash_cli::presentation;
use gapdash_infra::dataset::{CsvDatasetSource, EmbeddedDatasetSource};
use gapdash_infra::options::WatchOutput;
use gapdash_ports::dataset::DatasetSource;
use gapdash_usecase::BuildDashboard;

fn main() -> ExitCode {
    let args = Args::parse();
    let config = Config::from(args);

    if config.watch {
        let Some(path) = config.data.clone() else {
            eprintln!("Watch mode requires a dataset file.");
            return ExitCode::FAILURE;
        };

        let run_cycle = || {
            // Clear screen between renders unless streaming jsonl.
            if matches!(config.watch_output, WatchOutput::Full) {
                print!("\x1B[2J\x1B[1;1H");
            }
            if let Err(e) = run_once(&config) {
                eprintln!("Error in watch cycle: {e}");
            }
        };

        if let Err(e) = gapdash_infra::watch::watch_loop(&path, config.watch_interval, run_cycle) {
            eprintln!("Watch Error: {e}");
            ExitCode::FAILURE
        } else {
            ExitCode::SUCCESS
        }
    } else {
        match run_once(&config) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("Application Error: {e}");
                ExitCode::FAILURE
            }
        }
    }
}

fn run_once(config: &Config) -> Result<(), AppError> {
    let source: Box<dyn DatasetSource> = match &config.data {
        Some(path) => Box::new(CsvDatasetSource::new(path)),
        None => Box::new(EmbeddedDatasetSource::new()),
    };

    let views = BuildDashboard::new(source.as_ref()).run(&config.spec)?;
    presentation::print_results(views, &config.render)
}
