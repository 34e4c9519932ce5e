use crate::constants::HEADER_SEPARATOR;
use crate::error::Result;
use crate::normalize::{clean_player_text, parse_group_number, parse_time_label, split_name};
use crate::types::{ParsedHeader, PlayerRow, RawGroupBlock};
use tracing::debug;

/// Resolve "Group 7 - 9:06 AM" into its group number and normalized tee time.
///
/// Only the first two `-` separated segments are used. A missing or blank
/// time segment leaves `time_label` empty.
pub fn parse_header(header: &str) -> Result<ParsedHeader> {
    let mut segments = header.split(HEADER_SEPARATOR).map(str::trim);
    let group_label = segments.next().unwrap_or_default();
    let time_segment = segments.next().unwrap_or_default();

    let time_label = if time_segment.is_empty() {
        String::new()
    } else {
        parse_time_label(time_segment)?
    };

    Ok(ParsedHeader {
        group_number: parse_group_number(group_label),
        time_label,
    })
}

pub fn build_block_rows(block: &RawGroupBlock) -> Result<Vec<PlayerRow>> {
    let header = parse_header(&block.header)?;

    let mut rows = Vec::with_capacity(block.player_lines.len());
    for line in &block.player_lines {
        let player = clean_player_text(line);
        if player.is_empty() {
            debug!("group {}: skipping blank player line {:?}", header.group_number, line);
            continue;
        }
        let (first_name, last_name) = split_name(&player);
        rows.push(PlayerRow {
            group: header.group_number,
            time: header.time_label.clone(),
            first_name,
            last_name,
        });
    }
    Ok(rows)
}

/// Flatten every block into player rows, stopping at the first bad tee time.
pub fn build_rows(blocks: &[RawGroupBlock]) -> Result<Vec<PlayerRow>> {
    let mut rows = Vec::new();
    for block in blocks {
        rows.extend(build_block_rows(block)?);
    }
    Ok(rows)
}
