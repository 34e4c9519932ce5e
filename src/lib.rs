pub mod config;
pub mod constants;
pub mod error;
pub mod logging;
pub mod normalize;
pub mod output;
pub mod parser;
pub mod pipeline;
pub mod rows;
pub mod sort;
pub mod source;
pub mod types;

pub use error::{ExportError, Result};
pub use pipeline::{parse_foursomes, Pipeline, RunOptions, RunSummary};
pub use types::PlayerRow;
