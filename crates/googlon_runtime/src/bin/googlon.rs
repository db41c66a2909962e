//! Googlon CLI entry point.

use clap::Parser;
use googlon_foundation::{Error, ErrorKind};
use googlon_lexicon::Analyzer;
use googlon_runtime::logging::init_tracing;
use googlon_runtime::render::format_error;
use googlon_runtime::{BatchSummary, Cli, Repl, run_batch};
use std::fs::File;
use std::io::{self, BufReader};
use std::process::ExitCode;
use tracing::info;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    match run(&cli) {
        Ok(summary) if summary.is_success() => ExitCode::SUCCESS,
        Ok(_) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("\x1b[31m{}\x1b[0m", format_error(&e));
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<BatchSummary, Error> {
    let analyzer = Analyzer::new(cli.analyzer_config());
    info!(config = ?analyzer.config(), "starting");

    let stdout = io::stdout();
    let stderr = io::stderr();

    if !cli.files.is_empty() {
        let mut total = BatchSummary::default();
        for path in &cli.files {
            let file = File::open(path).map_err(|e| {
                Error::new(ErrorKind::Io(format!(
                    "failed to open {}: {e}",
                    path.display()
                )))
            })?;
            let summary = run_batch(
                &analyzer,
                cli.format,
                &path.display().to_string(),
                BufReader::new(file),
                &mut stdout.lock(),
                &mut stderr.lock(),
            )?;
            total.merge(summary);
        }
        return Ok(total);
    }

    if cli.batch {
        return run_batch(
            &analyzer,
            cli.format,
            "<stdin>",
            io::stdin().lock(),
            &mut stdout.lock(),
            &mut stderr.lock(),
        );
    }

    let mut repl = Repl::new()?.with_analyzer(analyzer).with_format(cli.format);
    repl.run()?;
    Ok(BatchSummary::default())
}
