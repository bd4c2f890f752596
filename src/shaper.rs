//! Arabic text shaping for terminal display
//!
//! Terminals draw characters in the order they receive them and rarely join
//! Arabic letters. Shaping replaces each letter with the presentation form for
//! its position in the word (`ar_reshaper`) and then reorders every paragraph
//! into visual order with the Unicode bidirectional algorithm.

use ar_reshaper::reshape_line;
use thiserror::Error;
use unicode_bidi::BidiInfo;

#[derive(Error, Debug, PartialEq)]
pub enum ShapeError {
    #[error("text carries explicit bidi formatting character U+{:04X}", *.0 as u32)]
    ExplicitFormatting(char),
}

/// Turns logical-order text into something a terminal can print.
pub trait Shaper: Send + Sync {
    /// Never fails: text that cannot be shaped comes back unchanged.
    fn shape(&self, text: &str) -> String;
}

/// Contextual Arabic, Persian and Urdu shaping followed by bidi reordering.
#[derive(Debug, Clone)]
pub struct ArabicShaper {
    enabled: bool,
}

impl Default for ArabicShaper {
    fn default() -> Self {
        Self { enabled: true }
    }
}

impl ArabicShaper {
    /// A disabled shaper passes text through, for terminals that shape on their own.
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    pub fn try_shape(&self, text: &str) -> Result<String, ShapeError> {
        if !self.enabled || !text.chars().any(is_rtl) {
            return Ok(text.to_string());
        }

        if let Some(c) = text.chars().find(|c| is_explicit_formatting(*c)) {
            return Err(ShapeError::ExplicitFormatting(c));
        }

        let joined: String = text
            .split_inclusive(is_paragraph_separator)
            .map(|line| {
                let content = line.trim_end_matches(is_paragraph_separator);
                format!("{}{}", reshape_line(content), &line[content.len()..])
            })
            .collect();
        Ok(visual_order(&joined))
    }
}

impl Shaper for ArabicShaper {
    fn shape(&self, text: &str) -> String {
        self.try_shape(text).unwrap_or_else(|e| {
            tracing::debug!("Leaving text unshaped: {}", e);
            text.to_string()
        })
    }
}

fn is_rtl(c: char) -> bool {
    matches!(c, '\u{0590}'..='\u{08FF}' | '\u{FB1D}'..='\u{FDFF}' | '\u{FE70}'..='\u{FEFF}')
}

fn is_explicit_formatting(c: char) -> bool {
    matches!(c, '\u{202A}'..='\u{202E}' | '\u{2066}'..='\u{2069}')
}

fn is_paragraph_separator(c: char) -> bool {
    matches!(c, '\n' | '\r' | '\u{1C}'..='\u{1E}' | '\u{85}' | '\u{2029}')
}

/// Reorder each paragraph from logical to visual order.
///
/// Separators stay at the end of their paragraph.
fn visual_order(text: &str) -> String {
    let bidi = BidiInfo::new(text, None);
    let mut out = String::with_capacity(text.len());
    for para in &bidi.paragraphs {
        let range = para.range.clone();
        let content = text[range.clone()].trim_end_matches(is_paragraph_separator);
        let content_end = range.start + content.len();

        if !content.is_empty() {
            out.push_str(&bidi.reorder_line(para, range.start..content_end));
        }
        out.push_str(&text[content_end..range.end]);
    }
    out
}
