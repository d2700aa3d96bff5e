//! Text-flow engine.
//!
//! Turns a slide's bullet strings into styled paragraph/run sequences:
//! label/body splitting on colons, forced wrap of over-length bodies, and
//! punctuation-aware segmentation of long colon-free lines. The engine is
//! pure: identical bullets always produce the identical run sequence.
//!
//! All length limits count chars, not bytes, so CJK text budgets the same
//! number of glyphs as ASCII.

use serde::{Deserialize, Serialize};

/// Body text at most this long stays on the label's line.
pub const INLINE_BODY_LIMIT: usize = 25;

/// Colon-free text at most this long is emitted as a single run.
pub const SINGLE_LINE_LIMIT: usize = 35;

/// Break-point search window for long colon-free text.
const BREAK_SEARCH_WINDOW: usize = 40;

/// A break point is only taken when it falls after this position.
const MIN_BREAK_POS: usize = 20;

/// Preferred break punctuation, highest priority first.
const BREAK_PUNCTUATION: [char; 5] = ['，', '、', '；', '。', ' '];

/// Two-space indent for overflow body paragraphs.
const BODY_INDENT: &str = "  ";

/// The role a run plays within its bullet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RunRole {
    /// Pre-colon label, rendered bold in the primary color
    Label,
    /// Bullet body text
    Body,
}

/// Which theme color a run or region takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorRole {
    /// Theme primary color
    Primary,
    /// Theme accent color
    Accent,
    /// Theme body-text color
    Text,
    /// Theme quote color
    Quote,
}

/// A styled span of text destined for one rendered paragraph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextRun {
    /// The text content
    pub text: String,
    /// Role within the bullet
    pub role: RunRole,
    /// Bold weight
    pub bold: bool,
    /// Font size in points
    pub size_pt: f64,
    /// Theme color slot
    pub color: ColorRole,
}

/// Vertical rhythm constants attached to a paragraph.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ParagraphSpacing {
    /// Space before the paragraph in points
    pub before_pt: f64,
    /// Space after the paragraph in points
    pub after_pt: f64,
    /// Line spacing multiplier
    pub line_spacing: f64,
}

/// Uniform spacing for regular bullet paragraphs.
pub const NORMAL_SPACING: ParagraphSpacing = ParagraphSpacing {
    before_pt: 1.0,
    after_pt: 1.0,
    line_spacing: 1.05,
};

/// Tighter leading for an overflow body paragraph under its label.
pub const OVERFLOW_BODY_SPACING: ParagraphSpacing = ParagraphSpacing {
    before_pt: 0.0,
    after_pt: 2.0,
    line_spacing: 1.05,
};

/// One rendered paragraph of a bullet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlowParagraph {
    /// Runs making up the paragraph
    pub runs: Vec<TextRun>,
    /// Vertical rhythm
    pub spacing: ParagraphSpacing,
}

impl FlowParagraph {
    /// Concatenated text of all runs.
    pub fn text(&self) -> String {
        self.runs.iter().map(|r| r.text.as_str()).collect()
    }
}

/// Font sizes the engine styles runs with.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FlowStyle {
    /// Size for label runs and short plain bullets, in points
    pub label_size_pt: f64,
    /// Size for body runs and wrapped segments, in points
    pub body_size_pt: f64,
}

impl Default for FlowStyle {
    fn default() -> Self {
        // Small sizes keep dense bullets inside the fixed text regions.
        Self {
            label_size_pt: 9.0,
            body_size_pt: 8.0,
        }
    }
}

/// Flow a slide's bullets into paragraphs, in order.
pub fn flow_bullets(bullets: &[String], style: &FlowStyle) -> Vec<FlowParagraph> {
    let mut out = Vec::with_capacity(bullets.len());
    for bullet in bullets {
        flow_bullet(bullet, style, &mut out);
    }
    out
}

/// Flow a single bullet, appending its paragraphs to `out`.
pub fn flow_bullet(bullet: &str, style: &FlowStyle, out: &mut Vec<FlowParagraph>) {
    if let Some((label, sep, body)) = split_label(bullet) {
        flow_labelled(label, sep, body, style, out);
    } else {
        flow_plain(bullet, style, out);
    }
}

/// Split a bullet at its first colon. The full-width colon wins when both
/// are present, matching how mixed-language bullets are authored.
fn split_label(bullet: &str) -> Option<(&str, char, &str)> {
    let sep = if bullet.contains('：') {
        '：'
    } else if bullet.contains(':') {
        ':'
    } else {
        return None;
    };
    let idx = bullet.find(sep)?;
    let label = &bullet[..idx];
    let body = &bullet[idx + sep.len_utf8()..];
    Some((label, sep, body))
}

fn flow_labelled(
    label: &str,
    sep: char,
    body: &str,
    style: &FlowStyle,
    out: &mut Vec<FlowParagraph>,
) {
    let label = label.trim();
    let body = body.trim();

    let label_run = TextRun {
        text: format!("{label}{sep}"),
        role: RunRole::Label,
        bold: true,
        size_pt: style.label_size_pt,
        color: ColorRole::Primary,
    };

    if body.chars().count() > INLINE_BODY_LIMIT {
        // Over-length body drops to its own indented paragraph.
        out.push(FlowParagraph {
            runs: vec![label_run],
            spacing: NORMAL_SPACING,
        });
        out.push(FlowParagraph {
            runs: vec![TextRun {
                text: format!("{BODY_INDENT}{body}"),
                role: RunRole::Body,
                bold: false,
                size_pt: style.body_size_pt,
                color: ColorRole::Text,
            }],
            spacing: OVERFLOW_BODY_SPACING,
        });
    } else {
        let mut runs = vec![label_run];
        if !body.is_empty() {
            runs.push(TextRun {
                text: body.to_string(),
                role: RunRole::Body,
                bold: false,
                size_pt: style.body_size_pt,
                color: ColorRole::Text,
            });
        }
        out.push(FlowParagraph {
            runs,
            spacing: NORMAL_SPACING,
        });
    }
}

fn flow_plain(bullet: &str, style: &FlowStyle, out: &mut Vec<FlowParagraph>) {
    let chars: Vec<char> = bullet.chars().collect();

    if chars.len() <= SINGLE_LINE_LIMIT {
        out.push(FlowParagraph {
            runs: vec![TextRun {
                text: bullet.to_string(),
                role: RunRole::Body,
                bold: false,
                size_pt: style.label_size_pt,
                color: ColorRole::Text,
            }],
            spacing: NORMAL_SPACING,
        });
        return;
    }

    // Greedy left-to-right segmentation with punctuation-aware break points.
    // Known rough edge: runs with no late punctuation cut mid-word at 35.
    let mut rest = &chars[..];
    while rest.len() > SINGLE_LINE_LIMIT {
        let cut = find_break(rest);
        push_segment(&rest[..cut], style, out);
        rest = &rest[cut..];
    }
    if !rest.is_empty() {
        push_segment(rest, style, out);
    }
}

/// Find the cut position for the next segment: just after the
/// highest-priority punctuation mark found late enough inside the search
/// window, else a hard cut at the single-line limit.
fn find_break(chars: &[char]) -> usize {
    let window = BREAK_SEARCH_WINDOW.min(chars.len());
    for punct in BREAK_PUNCTUATION {
        let pos = chars[..window].iter().rposition(|&c| c == punct);
        if let Some(pos) = pos {
            if pos > MIN_BREAK_POS {
                return pos + 1;
            }
        }
    }
    SINGLE_LINE_LIMIT
}

fn push_segment(chars: &[char], style: &FlowStyle, out: &mut Vec<FlowParagraph>) {
    out.push(FlowParagraph {
        runs: vec![TextRun {
            text: chars.iter().collect(),
            role: RunRole::Body,
            bold: false,
            size_pt: style.body_size_pt,
            color: ColorRole::Text,
        }],
        spacing: NORMAL_SPACING,
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flow(bullet: &str) -> Vec<FlowParagraph> {
        let mut out = Vec::new();
        flow_bullet(bullet, &FlowStyle::default(), &mut out);
        out
    }

    #[test]
    fn test_short_body_stays_inline() {
        let paras = flow("Label: short value");
        assert_eq!(paras.len(), 1);
        assert_eq!(paras[0].runs.len(), 2);
        assert_eq!(paras[0].runs[0].text, "Label:");
        assert!(paras[0].runs[0].bold);
        assert_eq!(paras[0].runs[0].role, RunRole::Label);
        assert_eq!(paras[0].runs[1].text, "short value");
        assert_eq!(paras[0].runs[1].role, RunRole::Body);
    }

    #[test]
    fn test_long_body_becomes_indented_paragraph() {
        let body: String = "y".repeat(30);
        let paras = flow(&format!("X：{body}"));
        assert_eq!(paras.len(), 2);
        assert_eq!(paras[0].runs[0].text, "X：");
        assert!(paras[0].runs[0].bold);
        assert_eq!(paras[1].runs.len(), 1);
        assert_eq!(paras[1].runs[0].text.trim_start(), body);
        assert!(paras[1].runs[0].text.starts_with("  "));
        assert_eq!(paras[1].spacing, OVERFLOW_BODY_SPACING);
    }

    #[test]
    fn test_body_at_limit_stays_inline() {
        let body: String = "y".repeat(INLINE_BODY_LIMIT);
        let paras = flow(&format!("K: {body}"));
        assert_eq!(paras.len(), 1);
        assert_eq!(paras[0].runs[1].text, body);
    }

    #[test]
    fn test_fullwidth_colon_preferred() {
        let paras = flow("阶段: 说明：后半");
        // The full-width colon splits, not the earlier ASCII one.
        assert_eq!(paras[0].runs[0].text, "阶段: 说明：");
    }

    #[test]
    fn test_colon_with_empty_body() {
        let paras = flow("Heading:");
        assert_eq!(paras.len(), 1);
        assert_eq!(paras[0].runs.len(), 1);
        assert_eq!(paras[0].runs[0].text, "Heading:");
    }

    #[test]
    fn test_short_plain_single_run() {
        let paras = flow("a perfectly ordinary line");
        assert_eq!(paras.len(), 1);
        assert_eq!(paras[0].runs.len(), 1);
        assert_eq!(paras[0].runs[0].text, "a perfectly ordinary line");
        assert_eq!(paras[0].runs[0].size_pt, 9.0);
    }

    #[test]
    fn test_plain_at_limit_not_segmented() {
        let text: String = "x".repeat(SINGLE_LINE_LIMIT);
        let paras = flow(&text);
        assert_eq!(paras.len(), 1);
        assert_eq!(paras[0].runs[0].text, text);
    }

    #[test]
    fn test_segmentation_roundtrip_ascii() {
        let text = "the quick brown fox jumps over the lazy dog and keeps on running far away";
        let paras = flow(text);
        assert!(paras.len() > 1);
        let joined: String = paras.iter().map(|p| p.text()).collect();
        assert_eq!(joined, text);
    }

    #[test]
    fn test_segmentation_roundtrip_cjk() {
        let text = "电磁脉冲通过天线耦合进入设备内部，随后沿电缆传导扩散，最终在敏感电路上形成破坏性的瞬态电压与电流峰值";
        let paras = flow(text);
        assert!(paras.len() > 1);
        let joined: String = paras.iter().map(|p| p.text()).collect();
        assert_eq!(joined, text);
    }

    #[test]
    fn test_segment_cuts_after_punctuation() {
        // A comma at char 24 (> 20) inside the window becomes the cut point.
        let head: String = "x".repeat(24);
        let text = format!("{head}，{}", "z".repeat(30));
        let paras = flow(&text);
        assert!(paras[0].runs[0].text.ends_with('，'));
        assert_eq!(paras[0].runs[0].text.chars().count(), 25);
    }

    #[test]
    fn test_hard_cut_without_punctuation() {
        let text: String = "q".repeat(80);
        let paras = flow(&text);
        assert_eq!(paras[0].runs[0].text.chars().count(), SINGLE_LINE_LIMIT);
        assert_eq!(paras[1].runs[0].text.chars().count(), SINGLE_LINE_LIMIT);
        assert_eq!(paras[2].runs[0].text.chars().count(), 10);
        let joined: String = paras.iter().map(|p| p.text()).collect();
        assert_eq!(joined, text);
    }

    #[test]
    fn test_early_punctuation_ignored() {
        // Comma at position 5 is before the minimum break position.
        let text = format!("abcde，{}", "k".repeat(60));
        let paras = flow(&text);
        assert_eq!(paras[0].runs[0].text.chars().count(), SINGLE_LINE_LIMIT);
    }

    #[test]
    fn test_flow_bullets_preserves_order() {
        let bullets = vec!["A: one".to_string(), "B: two".to_string()];
        let paras = flow_bullets(&bullets, &FlowStyle::default());
        assert_eq!(paras.len(), 2);
        assert_eq!(paras[0].runs[0].text, "A:");
        assert_eq!(paras[1].runs[0].text, "B:");
    }

    #[test]
    fn test_determinism() {
        let bullets = vec![
            "Label: a body well over the twenty-five char limit".to_string(),
            "纯文本要点".to_string(),
        ];
        let a = flow_bullets(&bullets, &FlowStyle::default());
        let b = flow_bullets(&bullets, &FlowStyle::default());
        assert_eq!(a, b);
    }
}
