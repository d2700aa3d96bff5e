//! Parsing options.

use crate::theme::ThemeName;

/// Options for building a document from outline text.
#[derive(Debug, Clone, Copy)]
pub struct ParseOptions {
    /// Theme written into metadata when the input names none
    pub theme: ThemeName,

    /// Append a default ending slide when the outline has none
    pub synthesize_ending: bool,

    /// Stamp `metadata.generated` with the current time
    pub timestamp: bool,
}

impl ParseOptions {
    /// Create new parse options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the default theme.
    pub fn with_theme(mut self, theme: ThemeName) -> Self {
        self.theme = theme;
        self
    }

    /// Disable the synthesized ending slide.
    pub fn without_ending(mut self) -> Self {
        self.synthesize_ending = false;
        self
    }

    /// Disable the generation timestamp, for byte-stable output.
    pub fn without_timestamp(mut self) -> Self {
        self.timestamp = false;
        self
    }
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            theme: ThemeName::MilitarySolemn,
            synthesize_ending: true,
            timestamp: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_options_builder() {
        let options = ParseOptions::new()
            .with_theme(ThemeName::TechBlue)
            .without_ending()
            .without_timestamp();

        assert_eq!(options.theme, ThemeName::TechBlue);
        assert!(!options.synthesize_ending);
        assert!(!options.timestamp);
    }

    #[test]
    fn test_default_options() {
        let options = ParseOptions::default();
        assert_eq!(options.theme, ThemeName::MilitarySolemn);
        assert!(options.synthesize_ending);
        assert!(options.timestamp);
    }
}
