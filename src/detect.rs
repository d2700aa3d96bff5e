//! Input format detection.
//!
//! Two input shapes exist: structured JSON documents and free-form outline
//! text. Detection is a sniff, not a validation pass: input that looks like
//! JSON but fails to deserialize falls back to outline parsing with a
//! warning, so sloppy callers still get a deck.

use crate::error::{Error, Result};
use crate::model::Document;
use std::fs;
use std::path::Path;

/// The detected shape of an input payload.
#[derive(Debug, Clone, PartialEq)]
pub enum ParsedInput {
    /// A structured document, already deserialized.
    Structured(Document),
    /// Outline text, to be fed to the outline parser.
    Outline(String),
}

impl ParsedInput {
    /// Whether this input was recognized as a structured document.
    pub fn is_structured(&self) -> bool {
        matches!(self, ParsedInput::Structured(_))
    }
}

/// Detect the shape of an input string.
///
/// # Returns
/// * `Ok(ParsedInput::Structured)` when the text parses as a document
/// * `Ok(ParsedInput::Outline)` for everything else non-empty
/// * `Err(Error::EmptyInput)` when the text is blank
///
/// # Example
/// ```
/// use autodeck::detect::detect_input;
///
/// let input = detect_input("# Title\n### Topic\n- point").unwrap();
/// assert!(!input.is_structured());
/// ```
pub fn detect_input(text: &str) -> Result<ParsedInput> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(Error::EmptyInput);
    }

    if trimmed.starts_with('{') {
        match serde_json::from_str::<Document>(trimmed) {
            Ok(doc) => return Ok(ParsedInput::Structured(doc)),
            Err(e) => {
                log::warn!("input looks like JSON but failed to parse ({e}), treating as outline");
            }
        }
    }

    Ok(ParsedInput::Outline(text.to_string()))
}

/// Detect the shape of a file's contents.
///
/// The file must be valid UTF-8; anything else is an encoding error rather
/// than a silent lossy read.
pub fn detect_input_from_path<P: AsRef<Path>>(path: P) -> Result<ParsedInput> {
    let bytes = fs::read(&path)?;
    let text = String::from_utf8(bytes)
        .map_err(|e| Error::Encoding(format!("{}: {e}", path.as_ref().display())))?;
    detect_input(&text)
}

/// Check if a string would be treated as a structured document.
pub fn is_structured(text: &str) -> bool {
    matches!(detect_input(text), Ok(ParsedInput::Structured(_)))
}
