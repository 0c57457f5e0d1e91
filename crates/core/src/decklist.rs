//! Decklist line handling
//!
//! Pure functions that turn pasted decklist text into ordered lines and extract a
//! card name from each one. Malformed lines are a normal result, never an error.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// `SB:` or `Commander:` at the start of a line, with any whitespace after it
static BOARD_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^(?:SB|Commander):\s*").expect("valid board marker regex"));

/// Leading quantity such as `4`, `4x` or `4 x`, followed by whitespace or end of line
static QUANTITY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+\s*[xX]?(?:\s+|$)").expect("valid quantity regex"));

/// A line holding nothing but a quantity
static QUANTITY_ONLY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+\s*[xX]?$").expect("valid quantity-only regex"));

/// Trailing `(SET)`, optionally followed by a collector number and a foil/etched marker
static SET_ANNOTATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\s*\([^\s()]+\)(?:\s+[^\s()*]+)?(?:\s+\*[A-Za-z]\*)?\s*$")
        .expect("valid set annotation regex")
});

/// One surviving line of the pasted decklist
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecklistLine {
    /// Ordinal among the surviving lines, which is also the output index
    pub position: usize,
    /// 1-indexed line number in the raw text
    pub line_number: usize,
    /// Trimmed line text
    pub text: String,
}

/// A line together with the card name extracted from it, if any
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedQuery {
    pub source: DecklistLine,
    pub extracted_name: Option<String>,
}

impl ParsedQuery {
    /// Name to report for this line: the extracted name, or the raw text when unparseable
    pub fn display_name(&self) -> &str {
        self.extracted_name
            .as_deref()
            .unwrap_or(self.source.text.as_str())
    }
}

/// Whether a line carries no card information at all
///
/// Whitespace-only lines and lines holding only a quantity (`"3"`, `"3x"`) are blank.
pub fn is_blank_line(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.is_empty() || QUANTITY_ONLY.is_match(trimmed)
}

/// Split raw decklist text into trimmed lines, dropping blank ones
pub fn split_decklist(raw: &str) -> Vec<DecklistLine> {
    raw.lines()
        .enumerate()
        .filter(|(_, line)| !is_blank_line(line))
        .enumerate()
        .map(|(position, (index, line))| DecklistLine {
            position,
            line_number: index + 1,
            text: line.trim().to_string(),
        })
        .collect()
}

/// Extract the card name from a single line
///
/// Strips, in order, a board marker, a quantity and a trailing set/collector
/// annotation. Returns `None` when nothing is left.
pub fn parse_line(line: &str) -> Option<String> {
    let rest = BOARD_MARKER.replace(line.trim(), "");
    let rest = QUANTITY.replace(rest.trim_start(), "");
    let rest = SET_ANNOTATION.replace(&rest, "");
    let name = rest.trim();

    if name.is_empty() {
        None
    } else {
        Some(name.to_string())
    }
}

/// Parse every surviving line of a decklist, preserving order
pub fn parse_decklist(raw: &str) -> Vec<ParsedQuery> {
    split_decklist(raw)
        .into_iter()
        .map(|line| {
            let extracted_name = parse_line(&line.text);
            ParsedQuery {
                source: line,
                extracted_name,
            }
        })
        .collect()
}
