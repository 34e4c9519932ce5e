pub mod dom;

use crate::constants::{FOURSOMES_CONTAINER_CLASS, FOURSOME_BLOCK_CLASS, HEADER_CLASS};
use crate::error::Result;
use crate::types::RawGroupBlock;
use dom::{MarkupElement, Step};
use scraper::Html;
use tracing::{debug, info};

const BLOCK_PATH: [Step<'static>; 2] = [
    Step::tag_class("div", FOURSOMES_CONTAINER_CLASS),
    Step::tag_class("div", FOURSOME_BLOCK_CLASS),
];
const HEADER_PATH: [Step<'static>; 1] = [Step::class(HEADER_CLASS)];
const PLAYER_PATH: [Step<'static>; 2] = [Step::tag("ul"), Step::tag("li")];

pub trait Parser {
    fn parse(&self, bytes: &[u8]) -> Result<Vec<RawGroupBlock>>;
}

/// Parses the foursome list page layout:
///
/// ```html
/// <div class="foursomes">
///   <div class="foursome">
///     <div class="list-header">Group 7 - 9:06 AM</div>
///     <ul><li>1. Chris Dohrn</li>...</ul>
///   </div>
/// </div>
/// ```
#[derive(Debug, Default)]
pub struct FoursomeListParser;

impl FoursomeListParser {
    pub fn new() -> Self {
        Self
    }
}

impl Parser for FoursomeListParser {
    fn parse(&self, bytes: &[u8]) -> Result<Vec<RawGroupBlock>> {
        debug!("FoursomeListParser: start bytes_len={}", bytes.len());
        let body = String::from_utf8_lossy(bytes);
        extract_from_html(&body)
    }
}

/// Parse markup and pull out every foursome block in document order.
///
/// The HTML parser recovers from any input, so plain text simply has no
/// blocks. Only a query that fails to compile is an error.
pub fn extract_from_html(html: &str) -> Result<Vec<RawGroupBlock>> {
    let document = Html::parse_document(html);
    for error in &document.errors {
        debug!("markup recovery: {}", error);
    }

    let blocks = extract_groups(document.root_element())?;
    info!("Found {} foursome blocks", blocks.len());
    Ok(blocks)
}

/// Extract group blocks beneath `root` using only the traversal capability.
pub fn extract_groups<E: MarkupElement>(root: E) -> Result<Vec<RawGroupBlock>> {
    let block_query = E::compile(&BLOCK_PATH)?;
    let header_query = E::compile(&HEADER_PATH)?;
    let player_query = E::compile(&PLAYER_PATH)?;

    let mut blocks = Vec::new();
    for (index, block) in root.select_all(&block_query).into_iter().enumerate() {
        let Some(header) = block.select_first(&header_query) else {
            debug!("skipping foursome block #{} without a header", index);
            continue;
        };

        let player_lines: Vec<String> = block
            .select_all(&player_query)
            .into_iter()
            .map(|item| item.joined_text())
            .collect();

        blocks.push(RawGroupBlock {
            header: header.joined_text(),
            player_lines,
        });
    }
    Ok(blocks)
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"
        <html><body>
        <div class="foursomes">
          <div class="foursome">
            <div class="list-header">Group 2 - 9:06 AM</div>
            <ul><li>1. Chris Dohrn</li><li>2. Pat   Lee</li></ul>
          </div>
          <div class="foursome">
            <p>no header here</p>
            <ul><li>1. Ghost Player</li></ul>
          </div>
          <div class="foursome">
            <h3 class="list-header">Group 1 - <span>8:00</span> AM</h3>
            <ul><li>1. Amy Zinn</li></ul>
          </div>
        </div>
        <div class="foursome">
          <div class="list-header">Group 9 - 1:00 PM</div>
          <ul><li>1. Outside Container</li></ul>
        </div>
        </body></html>
    "#;

    #[test]
    fn test_extracts_blocks_in_document_order() {
        let blocks = extract_from_html(PAGE).unwrap();
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0].header, "Group 2 - 9:06 AM");
        assert_eq!(blocks[0].player_lines, vec!["1. Chris Dohrn", "2. Pat   Lee"]);
        assert_eq!(blocks[1].header, "Group 1 - 8:00 AM");
        assert_eq!(blocks[1].player_lines, vec!["1. Amy Zinn"]);
    }

    #[test]
    fn test_block_without_items_has_no_lines() {
        let html = r#"<div class="foursomes"><div class="foursome">
            <div class="list-header">Group 4 - 10:00 AM</div></div></div>"#;
        let blocks = extract_from_html(html).unwrap();
        assert_eq!(blocks.len(), 1);
        assert!(blocks[0].player_lines.is_empty());
    }

    #[test]
    fn test_items_outside_list_are_ignored() {
        let html = r#"<div class="foursomes"><div class="foursome">
            <div class="list-header">Group 4</div>
            <ol><li>1. Not In Ul</li></ol>
            <ul><li>2. In Ul</li></ul></div></div>"#;
        let blocks = extract_from_html(html).unwrap();
        assert_eq!(blocks[0].player_lines, vec!["2. In Ul"]);
    }

    #[test]
    fn test_empty_input_yields_no_blocks() {
        assert!(extract_from_html("").unwrap().is_empty());
        assert!(extract_from_html("<html></html>").unwrap().is_empty());
    }

    #[test]
    fn test_plain_text_has_no_blocks() {
        let blocks = extract_from_html("Tee sheet not yet posted").unwrap();
        assert!(blocks.is_empty());
    }

    #[test]
    fn test_script_text_not_part_of_player_line() {
        let html = r#"<div class="foursomes"><div class="foursome">
            <div class="list-header">Group 1<style>.x{}</style> - 8:00 AM</div>
            <ul><li>1. Amy<script>x=1</script> Zinn</li></ul></div></div>"#;
        let blocks = extract_from_html(html).unwrap();
        assert_eq!(blocks[0].header, "Group 1 - 8:00 AM");
        assert_eq!(blocks[0].player_lines, vec!["1. Amy Zinn"]);
    }

    #[test]
    fn test_parser_trait_accepts_lossy_bytes() {
        let mut bytes = br#"<div class="foursomes"><div class="foursome"><div class="list-header">Group 1</div><ul><li>1. Jos"#.to_vec();
        bytes.push(0xFF);
        bytes.extend_from_slice(b"e Ruiz</li></ul></div></div>");
        let blocks = FoursomeListParser::new().parse(&bytes).unwrap();
        assert_eq!(blocks[0].player_lines, vec!["1. Jos\u{FFFD}e Ruiz"]);
    }
}
