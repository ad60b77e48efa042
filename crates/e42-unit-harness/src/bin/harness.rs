//! CLI entrypoint for the word-count exercise suite.

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use e42_unit::structured_log::LogEmitter;
use e42_unit::{DisplayMode, SuiteReport, config};
use e42_unit_harness::{SUITE_NAME, exit_status, word_count_suite};

/// Run the word-count exercise and report the outcome.
#[derive(Debug, Parser)]
#[command(name = "harness")]
#[command(version = e42_unit::VERSION)]
#[command(about = "Runs the word-count exercise suite")]
struct Cli {
    /// Console display mode: details, summary or quiet (defaults to E42_UNIT_DISPLAY).
    #[arg(long)]
    display: Option<String>,
    /// Output report path (markdown). A `.json` sibling is written next to it.
    #[arg(long)]
    report: Option<PathBuf>,
    /// Structured JSONL log path.
    #[arg(long)]
    log: Option<PathBuf>,
}

fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let mut suite = word_count_suite()?;

    // Case panics are already recorded as failures.
    std::panic::set_hook(Box::new(|_| {}));

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match (&cli.log, cli.display.as_deref()) {
        (None, None) => suite.run_and_display(&mut out)?,
        (log, display) => {
            match log {
                Some(path) => {
                    let run_id = format!("pid{}", std::process::id());
                    let mut emitter = LogEmitter::to_file(path, SUITE_NAME, &run_id)?;
                    suite.run_logged(&mut emitter)?;
                }
                None => suite.run(),
            }
            let mode = display.map_or_else(config::display_mode, DisplayMode::from_str_loose);
            suite.display(mode, &mut out)?;
        }
    }
    out.flush()?;

    if let Some(path) = &cli.report {
        let report = SuiteReport::from_suite(SUITE_NAME, &suite);
        std::fs::write(path, report.to_markdown())?;
        let json_path = path.with_extension("json");
        std::fs::write(&json_path, report.to_json()?)?;
        eprintln!(
            "Report written to {} and {}",
            path.display(),
            json_path.display()
        );
    }

    Ok(ExitCode::from(exit_status(&suite)))
}
