/// Page layout and output constants shared across the pipeline

// Markup classes used by the foursome list page
pub const FOURSOMES_CONTAINER_CLASS: &str = "foursomes";
pub const FOURSOME_BLOCK_CLASS: &str = "foursome";
pub const HEADER_CLASS: &str = "list-header";

// Header layout: "Group 7 - 9:06 AM"
pub const HEADER_SEPARATOR: char = '-';

// Tee time formats (chrono strftime syntax)
pub const TIME_PARSE_FORMAT: &str = "%I:%M%p";
pub const TIME_DISPLAY_FORMAT: &str = "%-I:%M%p";

// Output
pub const DEFAULT_OUTPUT_PATH: &str = "mga_foursomes.csv";
pub const CSV_HEADERS: [&str; 4] = ["Group", "Time", "FirstName", "LastName"];

// Configuration
pub const DEFAULT_CONFIG_PATH: &str = "foursomes.toml";
pub const CONFIG_PATH_ENV: &str = "FOURSOMES_CONFIG";
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;
pub const DEFAULT_USER_AGENT: &str = concat!("mga_foursomes/", env!("CARGO_PKG_VERSION"));
pub const LOG_FILE_NAME: &str = "mga_foursomes.log";
