use crate::config::Config;
use crate::error::Result;
use crate::output::write_csv;
use crate::parser::{FoursomeListParser, Parser};
use crate::rows::build_rows;
use crate::sort::sort_rows;
use crate::source::{load_html, Source};
use crate::types::PlayerRow;
use std::path::PathBuf;
use tracing::{debug, info, instrument};

/// Markup in, sorted player rows out.
pub fn parse_foursomes(html: &str) -> Result<Vec<PlayerRow>> {
    parse_with(&FoursomeListParser::new(), html.as_bytes())
}

/// Run `parser` over the page bytes, then build and sort the rows.
pub fn parse_with<P: Parser>(parser: &P, bytes: &[u8]) -> Result<Vec<PlayerRow>> {
    let blocks = parser.parse(bytes)?;
    let mut rows = build_rows(&blocks)?;
    sort_rows(&mut rows)?;
    info!("Built {} player rows from {} groups", rows.len(), blocks.len());
    Ok(rows)
}

#[derive(Debug, Clone)]
pub struct RunOptions {
    pub source: Source,
    pub output: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub rows_written: usize,
    pub output_path: PathBuf,
}

pub struct Pipeline {
    config: Config,
}

impl Pipeline {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Load the page, convert it, and write the CSV.
    ///
    /// Everything is parsed before the output file is opened, so a failed
    /// run never leaves a partial CSV behind. Zero rows is not an error;
    /// callers report it from `RunSummary::rows_written`.
    #[instrument(skip(self, options), fields(source = %options.source))]
    pub fn run(&self, options: &RunOptions) -> Result<RunSummary> {
        let html = load_html(&options.source, &self.config.http)?;
        let rows = parse_with(&FoursomeListParser::new(), html.as_bytes())?;
        if rows.is_empty() {
            debug!("no player rows; writing header-only CSV");
        }
        write_csv(&rows, &options.output)?;

        Ok(RunSummary {
            rows_written: rows.len(),
            output_path: options.output.clone(),
        })
    }
}
