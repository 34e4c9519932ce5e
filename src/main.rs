use clap::Parser;
use mga_foursomes::config::Config;
use mga_foursomes::logging;
use mga_foursomes::source::Source;
use mga_foursomes::{Pipeline, RunOptions};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "mga_foursomes")]
#[command(about = "Convert an MGA foursome list page to CSV (one player per row)")]
#[command(version)]
struct Cli {
    /// URL to the foursome list page OR a local HTML file path
    source: String,

    /// Output CSV path (default: mga_foursomes.csv, or output.default_path from config)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Configuration file (default: $FOURSOMES_CONFIG or ./foursomes.toml if present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// HTTP timeout in seconds for URL sources
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    timeout: Option<u64>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    dotenv::dotenv().ok();
    let cli = Cli::parse();

    let mut config = match Config::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::from(2);
        }
    };
    if let Some(timeout) = cli.timeout {
        config.http.timeout_seconds = timeout;
    }

    let _log_guard = logging::init_logging(&config.logging, cli.verbose);

    let options = RunOptions {
        source: Source::parse(&cli.source),
        output: cli
            .output
            .unwrap_or_else(|| config.output.default_path.clone()),
    };

    match Pipeline::new(config).run(&options) {
        Ok(summary) => {
            if summary.rows_written == 0 {
                eprintln!("No foursome rows found.");
            }
            println!(
                "Wrote {} rows to {}",
                summary.rows_written,
                summary.output_path.display()
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::from(2)
        }
    }
}
