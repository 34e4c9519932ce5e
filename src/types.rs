use serde::Serialize;

/// One foursome as found in the markup, before any normalization
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawGroupBlock {
    pub header: String,
    pub player_lines: Vec<String>,
}

/// Group number and tee time resolved from a block header
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedHeader {
    pub group_number: u32,
    /// Normalized `H:MMAM` label, empty when the header carries no time
    pub time_label: String,
}

/// A single player's row in the exported CSV
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlayerRow {
    #[serde(rename = "Group")]
    pub group: u32,
    #[serde(rename = "Time")]
    pub time: String,
    #[serde(rename = "FirstName")]
    pub first_name: String,
    #[serde(rename = "LastName")]
    pub last_name: String,
}
