//! Outline line classification.
//!
//! One ordered rule table, first match wins. The classifier is stateless and
//! deterministic; anything that matches no rule degrades to plain text so the
//! document builder can still make something of it.

use regex::Regex;

/// A classified outline line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineToken {
    /// Empty line; dropped
    Blank,
    /// A run of separator characters (`---`, `===`); dropped
    Separator,
    /// `# ` document title line
    Title(String),
    /// `## ` chapter heading
    SectionHeader(String),
    /// `## ` heading whose text signals cover semantics
    CoverMarker(String),
    /// `## ` heading whose text signals ending/summary semantics
    EndingMarker(String),
    /// `### ` heading; always opens a fresh content slide
    SubsectionHeader(String),
    /// `- ` / `* ` bullet line, cleaned of markdown noise
    Bullet(String),
    /// `> ` quote line
    Quote(String),
    /// Any other non-empty line
    PlainText(String),
}

/// Suffix words stripped from the document title line.
const TITLE_SUFFIXES: [&str; 4] = ["大纲", "提纲", "outline", "summary"];

/// Keywords marking a `##` heading as the cover.
const COVER_KEYWORDS: [&str; 2] = ["封面", "cover"];

/// Keywords marking a `##` heading as the ending.
const ENDING_KEYWORDS: [&str; 6] = ["结束", "谢谢", "总结", "ending", "summary", "thanks"];

/// Line classifier with its compiled patterns.
pub struct LineClassifier {
    section_numbering: Regex,
    bracket_groups: Regex,
}

impl LineClassifier {
    /// Build a classifier. Patterns are static, so this cannot fail.
    pub fn new() -> Self {
        Self {
            section_numbering: Regex::new(
                r"^(?:第[一二三四五六七八九十百0-9]+[章节部讲篇]|(?i:chapter|section|part|page)\s*\d+)\s*[:：.、]?\s*(.*)$",
            )
            .unwrap(),
            bracket_groups: Regex::new(r"\[[^\]]*\]|【[^】]*】").unwrap(),
        }
    }

    /// Classify one raw line. Leading whitespace is significant only for
    /// bullet detection; all emitted text is trimmed.
    pub fn classify(&self, raw: &str) -> LineToken {
        let trimmed = raw.trim();

        if trimmed.is_empty() {
            return LineToken::Blank;
        }
        if trimmed.chars().count() >= 3 && trimmed.chars().all(|c| "-=*_".contains(c)) {
            return LineToken::Separator;
        }

        if let Some(rest) = heading_text(trimmed, 1) {
            return LineToken::Title(strip_title_suffix(rest));
        }
        if let Some(rest) = heading_text(trimmed, 2) {
            return self.classify_section(rest);
        }
        if let Some(rest) = heading_text(trimmed, 3) {
            return LineToken::SubsectionHeader(rest.trim().to_string());
        }

        let unindented = raw.trim_start();
        if let Some(rest) = bullet_text(unindented) {
            return LineToken::Bullet(self.clean_bullet(rest));
        }

        if let Some(rest) = unindented.strip_prefix('>') {
            if rest.starts_with(char::is_whitespace) {
                return LineToken::Quote(rest.trim().to_string());
            }
        }

        LineToken::PlainText(trimmed.to_string())
    }

    /// Interpret a `##` heading: cover/ending markers beat the numbered
    /// "Chapter N: Title" form, whose trailing title is kept.
    fn classify_section(&self, text: &str) -> LineToken {
        let text = text.trim();
        let lower = text.to_lowercase();

        if COVER_KEYWORDS.iter().any(|k| lower.contains(k)) {
            return LineToken::CoverMarker(text.to_string());
        }
        if ENDING_KEYWORDS.iter().any(|k| lower.contains(k)) {
            return LineToken::EndingMarker(text.to_string());
        }

        if let Some(caps) = self.section_numbering.captures(text) {
            let title = caps.get(1).map_or("", |m| m.as_str()).trim();
            if !title.is_empty() {
                return LineToken::SectionHeader(title.to_string());
            }
        }
        LineToken::SectionHeader(text.to_string())
    }

    /// Strip markdown emphasis markers and bracket groups from a bullet.
    fn clean_bullet(&self, text: &str) -> String {
        let without_brackets = self.bracket_groups.replace_all(text, "");
        without_brackets
            .trim()
            .trim_matches(|c| c == '*' || c == '_')
            .trim()
            .to_string()
    }
}

impl Default for LineClassifier {
    fn default() -> Self {
        Self::new()
    }
}

/// Extract the text of a heading with exactly `level` leading hashes.
fn heading_text(line: &str, level: usize) -> Option<&str> {
    let hashes = line.chars().take_while(|&c| c == '#').count();
    if hashes != level {
        return None;
    }
    let rest = &line[hashes..];
    rest.strip_prefix(char::is_whitespace).map(str::trim)
}

/// Extract bullet text after a `-`/`*` marker followed by whitespace.
fn bullet_text(line: &str) -> Option<&str> {
    let rest = line.strip_prefix('-').or_else(|| line.strip_prefix('*'))?;
    if rest.starts_with(char::is_whitespace) {
        Some(rest.trim())
    } else {
        None
    }
}

/// Strip a trailing outline/summary suffix word from the title.
fn strip_title_suffix(title: &str) -> String {
    let trimmed = title.trim();
    let lower = trimmed.to_lowercase();
    for suffix in TITLE_SUFFIXES {
        if lower.ends_with(suffix) {
            let cut = trimmed.len() - suffix.len();
            return trimmed[..cut].trim().to_string();
        }
    }
    trimmed.to_string()
}
