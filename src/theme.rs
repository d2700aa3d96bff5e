//! Theme presets and color inference.
//!
//! A theme is a fixed palette the render plan attaches to every run and
//! region. Four presets ship with the crate; [`infer_palette`] is an
//! independent utility that derives a palette from color-usage statistics
//! sampled out of an existing rendered deck.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// An RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
}

impl Color {
    /// Create a color from channel values.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Sum of the three channels, used by the inference heuristics.
    pub fn channel_sum(&self) -> u16 {
        self.r as u16 + self.g as u16 + self.b as u16
    }

    /// Difference between the largest and smallest channel.
    pub fn channel_spread(&self) -> u8 {
        let max = self.r.max(self.g).max(self.b);
        let min = self.r.min(self.g).min(self.b);
        max - min
    }

    /// Hex representation, e.g. `#1A237E`.
    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// Name of a built-in theme preset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThemeName {
    /// Deep blue with red accents
    MilitarySolemn,
    /// Blue with orange accents
    TechBlue,
    /// Green with amber accents
    NatureGreen,
    /// Gray with teal accents
    BusinessGray,
}

/// All preset names, in menu order.
pub const THEME_PRESETS: [ThemeName; 4] = [
    ThemeName::MilitarySolemn,
    ThemeName::TechBlue,
    ThemeName::NatureGreen,
    ThemeName::BusinessGray,
];

impl ThemeName {
    /// The snake_case name used in metadata.
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeName::MilitarySolemn => "military_solemn",
            ThemeName::TechBlue => "tech_blue",
            ThemeName::NatureGreen => "nature_green",
            ThemeName::BusinessGray => "business_gray",
        }
    }
}

impl fmt::Display for ThemeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeName {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        THEME_PRESETS
            .iter()
            .find(|t| t.as_str() == s)
            .copied()
            .ok_or_else(|| Error::UnknownTheme(s.to_string()))
    }
}

/// A resolved color palette.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Theme {
    /// Human-readable theme name
    pub name: String,
    /// Brand color: cover background, titles, label runs
    pub primary: Color,
    /// Accent color: underlines, slogans
    pub accent: Color,
    /// Body text color
    pub text: Color,
    /// Slide background
    pub background: Color,
    /// Quote band color
    pub quote: Color,
    /// Chart series color
    pub chart: Color,
}

impl Theme {
    /// Look up a built-in preset.
    pub fn preset(name: ThemeName) -> Self {
        match name {
            ThemeName::MilitarySolemn => Self {
                name: name.to_string(),
                primary: Color::new(26, 35, 126),
                accent: Color::new(213, 0, 0),
                text: Color::new(33, 33, 33),
                background: Color::new(250, 250, 250),
                quote: Color::new(0, 150, 136),
                chart: Color::new(63, 81, 181),
            },
            ThemeName::TechBlue => Self {
                name: name.to_string(),
                primary: Color::new(0, 119, 200),
                accent: Color::new(255, 152, 0),
                text: Color::new(33, 33, 33),
                background: Color::new(250, 250, 250),
                quote: Color::new(0, 150, 136),
                chart: Color::new(0, 119, 200),
            },
            ThemeName::NatureGreen => Self {
                name: name.to_string(),
                primary: Color::new(46, 125, 50),
                accent: Color::new(255, 193, 7),
                text: Color::new(33, 33, 33),
                background: Color::new(250, 250, 250),
                quote: Color::new(0, 121, 107),
                chart: Color::new(46, 125, 50),
            },
            ThemeName::BusinessGray => Self {
                name: name.to_string(),
                primary: Color::new(66, 66, 66),
                accent: Color::new(0, 150, 136),
                text: Color::new(33, 33, 33),
                background: Color::new(250, 250, 250),
                quote: Color::new(0, 121, 107),
                chart: Color::new(96, 125, 139),
            },
        }
    }

    /// Resolve a theme from a metadata name, falling back to the default
    /// preset with a logged warning when the name is unknown or empty.
    pub fn resolve(name: &str) -> Self {
        match name.parse::<ThemeName>() {
            Ok(preset) => Self::preset(preset),
            Err(_) => {
                if !name.is_empty() {
                    log::warn!("unknown theme '{name}', using {}", ThemeName::MilitarySolemn);
                }
                Self::default()
            }
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::preset(ThemeName::MilitarySolemn)
    }
}

/// A color together with how often it was observed.
#[derive(Debug, Clone, Copy)]
pub struct ColorSample {
    /// Observed color
    pub color: Color,
    /// Occurrence count
    pub count: usize,
}

/// Palette inferred from color-usage statistics.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InferredPalette {
    /// Dominant non-near-white fill color
    pub primary: Option<Color>,
    /// Dominant vivid text color
    pub accent: Option<Color>,
    /// Dominant near-black text color
    pub text: Option<Color>,
}

/// Infer a palette from fill and text color frequencies.
///
/// Heuristics follow the original deck-analysis rules: the primary color is
/// the most frequent fill that is not near-white (channel sum < 700), the
/// text color the most frequent dark text sample (sum < 400), and the accent
/// the most frequent colored text sample (150 < sum < 600 with a channel
/// spread over 50).
pub fn infer_palette(fills: &[ColorSample], texts: &[ColorSample]) -> InferredPalette {
    fn most_frequent<'a>(
        samples: impl Iterator<Item = &'a ColorSample>,
    ) -> Option<Color> {
        samples.max_by_key(|s| s.count).map(|s| s.color)
    }

    let primary = most_frequent(fills.iter().filter(|s| s.color.channel_sum() < 700));
    let text = most_frequent(texts.iter().filter(|s| s.color.channel_sum() < 400));
    let accent = most_frequent(texts.iter().filter(|s| {
        let sum = s.color.channel_sum();
        sum > 150 && sum < 600 && s.color.channel_spread() > 50
    }));

    InferredPalette {
        primary,
        accent,
        text,
    }
}

/// Build a full theme from an inferred palette, filling gaps from a preset.
pub fn theme_from_palette(palette: &InferredPalette) -> Theme {
    let base = Theme::default();
    Theme {
        name: "custom".to_string(),
        primary: palette.primary.unwrap_or(base.primary),
        accent: palette.accent.unwrap_or(base.accent),
        text: palette.text.unwrap_or(base.text),
        quote: palette.accent.unwrap_or(base.quote),
        chart: palette.primary.unwrap_or(base.chart),
        background: base.background,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(r: u8, g: u8, b: u8, count: usize) -> ColorSample {
        ColorSample {
            color: Color::new(r, g, b),
            count,
        }
    }

    #[test]
    fn test_preset_lookup() {
        let theme = Theme::preset(ThemeName::TechBlue);
        assert_eq!(theme.primary, Color::new(0, 119, 200));
        assert_eq!(theme.name, "tech_blue");
    }

    #[test]
    fn test_resolve_falls_back() {
        let theme = Theme::resolve("plasma_purple");
        assert_eq!(theme.name, "military_solemn");
        let theme = Theme::resolve("nature_green");
        assert_eq!(theme.name, "nature_green");
    }

    #[test]
    fn test_infer_skips_near_white_fills() {
        let fills = [sample(255, 255, 255, 90), sample(26, 35, 126, 10)];
        let palette = infer_palette(&fills, &[]);
        assert_eq!(palette.primary, Some(Color::new(26, 35, 126)));
    }

    #[test]
    fn test_infer_accent_needs_spread() {
        // gray is frequent but has no spread; orange qualifies
        let texts = [sample(120, 120, 120, 50), sample(255, 152, 0, 8)];
        let palette = infer_palette(&[], &texts);
        assert_eq!(palette.accent, Some(Color::new(255, 152, 0)));
        // the gray still wins the dark-text slot
        assert_eq!(palette.text, Some(Color::new(120, 120, 120)));
    }

    #[test]
    fn test_theme_from_empty_palette_is_default_colors() {
        let theme = theme_from_palette(&InferredPalette::default());
        assert_eq!(theme.primary, Theme::default().primary);
        assert_eq!(theme.name, "custom");
    }

    #[test]
    fn test_color_hex() {
        assert_eq!(Color::new(26, 35, 126).to_hex(), "#1A237E");
    }
}
