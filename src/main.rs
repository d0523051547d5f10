use std::io::{self, BufWriter};

use clap::Parser;

use cc_style_guard::cli::Cli;
use cc_style_guard::commands::{ScanSummary, run_scan};
use cc_style_guard::config::{ConfigLoader, FileConfigLoader};
use cc_style_guard::output::{CodeClimateWriter, DiagnosticSink};
use cc_style_guard::{EXIT_CONFIG_ERROR, EXIT_RUNTIME_ERROR, EXIT_SUCCESS, ScanContext};

fn main() {
    let cli = Cli::parse();
    init_logging(&cli);

    let exit_code = match run(&cli) {
        Ok(summary) => {
            log::info!(
                "{} issue(s): {} long line(s), {} trailing whitespace, {} unguarded header(s)",
                summary.total_issues(),
                summary.long_lines,
                summary.trailing_whitespace,
                summary.unguarded_headers
            );
            EXIT_SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            if let Some(source) = std::error::Error::source(&e) {
                log::debug!("{} error caused by: {source}", e.error_type());
            }
            if e.is_config_error() {
                EXIT_CONFIG_ERROR
            } else {
                EXIT_RUNTIME_ERROR
            }
        }
    };

    std::process::exit(exit_code);
}

fn init_logging(cli: &Cli) {
    env_logger::Builder::new()
        .filter_level(cli.log_level())
        .parse_default_env()
        .target(env_logger::Target::Stderr)
        .init();
}

fn run(cli: &Cli) -> cc_style_guard::Result<ScanSummary> {
    // 1. Load configuration
    let config = FileConfigLoader::new().load_from_path(&cli.config)?;

    // 2. Build the scan context
    let ctx = ScanContext::new(&cli.root, &config);

    // 3. Scan, streaming issues to stdout
    let stdout = io::stdout();
    let mut writer = CodeClimateWriter::new(BufWriter::new(stdout.lock()));
    let result = run_scan(&ctx, &mut writer);

    // Issues emitted before a fatal error are still delivered
    let flushed = writer.flush();
    let summary = result?;
    flushed?;
    Ok(summary)
}
