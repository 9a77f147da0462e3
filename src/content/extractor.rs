// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! HTML content extraction
//!
//! Pulls the copy a visitor actually reads from a page: title, meta
//! description, headings, button labels and paragraphs.

use scraper::{ElementRef, Html, Selector};

/// Elements whose text is never visible copy
const HIDDEN_ELEMENTS: &[&str] = &["script", "style", "noscript"];

/// Visible copy pulled from a page, one field per category
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractedContent {
    pub title: String,
    pub meta_description: String,
    /// `h1` and `h2` text in document order
    pub headings: String,
    /// `button` text in document order
    pub buttons: String,
    /// `p` text in document order
    pub body_copy: String,
}

impl ExtractedContent {
    /// Parse a document and collect each category
    pub fn from_html(html: &str) -> Self {
        let document = Html::parse_document(html);

        let title = select_texts(&document, "title")
            .into_iter()
            .next()
            .unwrap_or_default();

        let meta_description = Selector::parse(r#"meta[name="description"]"#)
            .ok()
            .and_then(|selector| document.select(&selector).next())
            .and_then(|meta| meta.value().attr("content"))
            .map(|content| content.trim().to_string())
            .unwrap_or_default();

        Self {
            title,
            meta_description,
            headings: select_texts(&document, "h1, h2").join(" "),
            buttons: select_texts(&document, "button").join(" "),
            body_copy: select_texts(&document, "p").join(" "),
        }
    }

    /// Render the labeled block sent to the model
    pub fn to_labeled_block(&self) -> String {
        format!(
            "\nTITLE:\n{}\n\nMETA DESCRIPTION:\n{}\n\nHEADINGS:\n{}\n\nCTA / BUTTON TEXT:\n{}\n\nBODY COPY:\n{}\n",
            self.title, self.meta_description, self.headings, self.buttons, self.body_copy
        )
    }
}

/// Extract the labeled content block from HTML
///
/// # Arguments
/// * `html` - Raw HTML string
/// * `max_chars` - Maximum characters to return
///
/// # Returns
/// The labeled block, cut to at most `max_chars` characters
pub fn extract_page_content(html: &str, max_chars: usize) -> String {
    let block = ExtractedContent::from_html(html).to_labeled_block();
    truncate_chars(&block, max_chars)
}

/// Visible text of every element matching `selector`, empty ones dropped
fn select_texts(document: &Html, selector: &str) -> Vec<String> {
    let Ok(selector) = Selector::parse(selector) else {
        return Vec::new();
    };

    document
        .select(&selector)
        .map(visible_text)
        .filter(|text| !text.is_empty())
        .collect()
}

/// Text nodes under `element`, whitespace-normalized and joined with spaces.
/// Anything below a hidden element is skipped.
fn visible_text(element: ElementRef) -> String {
    element
        .descendants()
        .filter_map(|node| {
            let text = node.value().as_text()?;
            let hidden = node.ancestors().any(|ancestor| {
                ancestor
                    .value()
                    .as_element()
                    .map_or(false, |e| HIDDEN_ELEMENTS.contains(&e.name()))
            });
            if hidden {
                return None;
            }
            let cleaned = clean_text(text);
            (!cleaned.is_empty()).then_some(cleaned)
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Clean text: collapse runs of whitespace into single spaces
fn clean_text(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Truncate to `max_chars` characters without splitting a code point
fn truncate_chars(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => text[..byte_idx].to_string(),
        None => text.to_string(),
    }
}
