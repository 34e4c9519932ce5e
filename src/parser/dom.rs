//! Minimal element traversal used by the group extractor.
//!
//! Extraction rules only need two things from a document tree: finding
//! descendants along a chain of tag/class steps, and reading an element's
//! text. [`MarkupElement`] captures exactly that, with the `scraper`
//! implementation below.

use crate::error::{ExportError, Result};
use scraper::{ElementRef, Selector};

/// Elements whose text is code or markup, not page content.
const NON_TEXT_ELEMENTS: [&str; 3] = ["script", "style", "template"];

/// One hop in a descendant path: an optional tag name and an optional class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step<'a> {
    pub tag: Option<&'a str>,
    pub class: Option<&'a str>,
}

impl<'a> Step<'a> {
    pub const fn tag(tag: &'a str) -> Self {
        Self { tag: Some(tag), class: None }
    }

    pub const fn class(class: &'a str) -> Self {
        Self { tag: None, class: Some(class) }
    }

    pub const fn tag_class(tag: &'a str, class: &'a str) -> Self {
        Self { tag: Some(tag), class: Some(class) }
    }

    fn to_css(self) -> String {
        let mut css = String::from(self.tag.unwrap_or("*"));
        if let Some(class) = self.class {
            css.push('.');
            css.push_str(class);
        }
        css
    }
}

/// Render a descendant path as a CSS selector, e.g. `div.foursomes div.foursome`.
pub fn path_to_css(path: &[Step<'_>]) -> String {
    path.iter()
        .map(|step| step.to_css())
        .collect::<Vec<_>>()
        .join(" ")
}

pub trait MarkupElement: Copy {
    /// A compiled form of a descendant path.
    type Query;

    fn compile(path: &[Step<'_>]) -> Result<Self::Query>;

    /// All descendants matching the query, in document order, without duplicates.
    fn select_all(self, query: &Self::Query) -> Vec<Self>;

    fn select_first(self, query: &Self::Query) -> Option<Self> {
        self.select_all(query).into_iter().next()
    }

    /// Descendant text pieces, each trimmed, empties dropped, joined by one space.
    /// Text inside `script`, `style` and `template` is skipped.
    fn joined_text(self) -> String;
}

impl<'a> MarkupElement for ElementRef<'a> {
    type Query = Selector;

    fn compile(path: &[Step<'_>]) -> Result<Selector> {
        if path.is_empty() {
            return Err(ExportError::Parse("empty element path".to_string()));
        }
        let css = path_to_css(path);
        Selector::parse(&css)
            .map_err(|e| ExportError::Parse(format!("invalid element path {css:?}: {e}")))
    }

    fn select_all(self, query: &Selector) -> Vec<Self> {
        self.select(query).collect()
    }

    fn select_first(self, query: &Selector) -> Option<Self> {
        self.select(query).next()
    }

    fn joined_text(self) -> String {
        self.descendants()
            .filter_map(|node| {
                let text = node.value().as_text()?;
                let hidden = node
                    .ancestors()
                    .take_while(|ancestor| ancestor.id() != self.id())
                    .filter_map(|ancestor| ancestor.value().as_element())
                    .any(|element| NON_TEXT_ELEMENTS.contains(&element.name()));
                (!hidden).then(|| text.trim())
            })
            .filter(|piece| !piece.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::Html;

    #[test]
    fn test_path_to_css() {
        let path = [Step::tag_class("div", "foursomes"), Step::tag("li")];
        assert_eq!(path_to_css(&path), "div.foursomes li");
        assert_eq!(path_to_css(&[Step::class("list-header")]), "*.list-header");
    }

    #[test]
    fn test_compile_rejects_empty_path() {
        let result = <ElementRef<'_> as MarkupElement>::compile(&[]);
        assert!(matches!(result, Err(ExportError::Parse(_))));
    }

    #[test]
    fn test_compile_rejects_bad_class() {
        let result = <ElementRef<'_> as MarkupElement>::compile(&[Step::class("[")]);
        assert!(matches!(result, Err(ExportError::Parse(_))));
    }

    #[test]
    fn test_select_all_in_document_order() {
        let doc = Html::parse_document(
            "<ul><li>one</li><li>two</li></ul><ul><li>three</li></ul>",
        );
        let query = ElementRef::compile(&[Step::tag("ul"), Step::tag("li")]).unwrap();
        let texts: Vec<String> = doc
            .root_element()
            .select_all(&query)
            .into_iter()
            .map(|el| el.joined_text())
            .collect();
        assert_eq!(texts, vec!["one", "two", "three"]);
    }

    #[test]
    fn test_joined_text_strips_and_joins_pieces() {
        let doc = Html::parse_document(
            "<div class=\"h\">  Group 7 <span> - </span>\n 9:06 <b>AM</b> </div>",
        );
        let query = ElementRef::compile(&[Step::class("h")]).unwrap();
        let el = doc.root_element().select_first(&query).unwrap();
        assert_eq!(el.joined_text(), "Group 7 - 9:06 AM");
    }

    #[test]
    fn test_joined_text_skips_script_style_and_template() {
        let doc = Html::parse_document(
            "<ul><li>1. Amy<script>x=1</script> Zinn<style>li{}</style>\
             <template><b>hidden</b></template></li></ul>",
        );
        let query = ElementRef::compile(&[Step::tag("li")]).unwrap();
        let el = doc.root_element().select_first(&query).unwrap();
        assert_eq!(el.joined_text(), "1. Amy Zinn");
    }
}
