//! Outline parsing: line classification, options, and the document builder.

mod line;
mod options;
mod outline;

pub use line::{LineClassifier, LineToken};
pub use options::ParseOptions;
pub use outline::{OutlineParser, DEFAULT_COVER_SUBTITLE, DEFAULT_ENDING_TITLE};
