//! Document builder: outline token stream -> document model.
//!
//! A small state machine walks the classified lines in order, accumulating
//! one in-progress slide at a time. It never fails on content: malformed
//! lines degrade to plain text and the worst case is an under-populated
//! slide. The only hard error is completely empty input.

use super::line::{LineClassifier, LineToken};
use super::options::ParseOptions;
use crate::error::{Error, Result};
use crate::layout::LayoutName;
use crate::model::{Document, Metadata, SlideKind, SlideSpec};
use unicode_normalization::UnicodeNormalization;

/// Subtitle used when the outline never provides one.
pub const DEFAULT_COVER_SUBTITLE: &str = "general presentation";

/// Title of the cover when the outline has no `#` line.
const DEFAULT_COVER_TITLE: &str = "Untitled";

/// Fixed title of the synthesized ending slide.
pub const DEFAULT_ENDING_TITLE: &str = "Thank You";

/// Single bullet of the synthesized ending slide.
const DEFAULT_ENDING_BULLET: &str = "Questions and discussion welcome";

/// Closing quote of the synthesized ending slide.
const DEFAULT_ENDING_QUOTE: &str = "Every ending is a new beginning";

/// Outline-to-document parser.
pub struct OutlineParser {
    options: ParseOptions,
    classifier: LineClassifier,
}

/// Mutable state for one parse call. Discarded once the document is built.
struct ParseState {
    current: Option<ActiveSlide>,
    cover_title: Option<String>,
    cover_subtitle: Option<String>,
    rotation: usize,
    slides: Vec<SlideSpec>,
}

/// The in-progress slide. The cover placeholder is never pushed; its
/// captured fields feed the synthesized cover instead.
enum ActiveSlide {
    CoverPlaceholder,
    Slide(SlideSpec),
}

impl OutlineParser {
    /// Create a parser with default options.
    pub fn new() -> Self {
        Self::with_options(ParseOptions::default())
    }

    /// Create a parser with the given options.
    pub fn with_options(options: ParseOptions) -> Self {
        Self {
            options,
            classifier: LineClassifier::new(),
        }
    }

    /// Parse outline text into a document.
    pub fn parse(&self, text: &str) -> Result<Document> {
        if text.trim().is_empty() {
            return Err(Error::EmptyInput);
        }
        let text: String = text.nfc().collect();

        let mut state = ParseState {
            current: None,
            cover_title: None,
            cover_subtitle: None,
            rotation: 0,
            slides: Vec::new(),
        };

        for line in text.lines() {
            self.consume(&mut state, self.classifier.classify(line));
        }
        state.close_current();

        Ok(self.finish(state))
    }

    fn consume(&self, state: &mut ParseState, token: LineToken) {
        match token {
            LineToken::Blank | LineToken::Separator => {}

            LineToken::Title(title) => {
                if !title.is_empty() {
                    state.cover_title = Some(title);
                }
            }

            LineToken::CoverMarker(_) => {
                state.close_current();
                state.current = Some(ActiveSlide::CoverPlaceholder);
            }

            LineToken::SectionHeader(title) => {
                state.close_current();
                state.current = Some(ActiveSlide::Slide(SlideSpec::Section { title }));
            }

            LineToken::EndingMarker(title) => {
                state.close_current();
                state.current = Some(ActiveSlide::Slide(SlideSpec::Ending {
                    title,
                    bullets: Vec::new(),
                    quote: None,
                }));
            }

            LineToken::SubsectionHeader(title) => {
                state.close_current();
                state.current = Some(ActiveSlide::Slide(state.open_content(title)));
            }

            LineToken::Bullet(text) => {
                if text.is_empty() {
                    return;
                }
                if matches!(state.current, Some(ActiveSlide::CoverPlaceholder)) {
                    state.cover_override(&text);
                } else if let Some(ActiveSlide::Slide(slide)) = state.current.as_mut() {
                    slide.push_bullet(text);
                } else {
                    log::debug!("bullet before any slide, dropped: {text}");
                }
            }

            LineToken::Quote(text) => {
                if let Some(ActiveSlide::Slide(slide)) = state.current.as_mut() {
                    slide.set_quote(text);
                }
            }

            LineToken::PlainText(text) => self.consume_plain(state, text),
        }
    }

    fn consume_plain(&self, state: &mut ParseState, text: String) {
        match state.current.as_mut() {
            Some(ActiveSlide::Slide(slide)) => {
                let noisy = (text.starts_with('*') || text.starts_with('_'))
                    && !text.contains(':')
                    && !text.contains('：');
                if noisy {
                    log::debug!("plain line looks like markup noise, dropped: {text}");
                } else {
                    slide.push_bullet(text);
                }
            }
            // Before the first real slide the first free line is the subtitle.
            _ => {
                if state.cover_subtitle.is_none() {
                    state.cover_subtitle = Some(text);
                }
            }
        }
    }

    fn finish(&self, mut state: ParseState) -> Document {
        let cover_title = state
            .cover_title
            .take()
            .unwrap_or_else(|| DEFAULT_COVER_TITLE.to_string());
        let cover_subtitle = state
            .cover_subtitle
            .take()
            .unwrap_or_else(|| DEFAULT_COVER_SUBTITLE.to_string());

        let mut slides = Vec::with_capacity(state.slides.len() + 2);
        slides.push(SlideSpec::Cover {
            title: cover_title.clone(),
            subtitle: Some(cover_subtitle),
            slogan: None,
        });
        slides.extend(state.slides);

        let has_ending = slides.iter().any(|s| s.kind() == SlideKind::Ending);
        if self.options.synthesize_ending && !has_ending {
            slides.push(SlideSpec::Ending {
                title: DEFAULT_ENDING_TITLE.to_string(),
                bullets: vec![DEFAULT_ENDING_BULLET.to_string()],
                quote: Some(DEFAULT_ENDING_QUOTE.to_string()),
            });
        }

        let metadata = Metadata {
            title: cover_title,
            theme: self.options.theme.to_string(),
            total_slides: slides.len(),
            generated: self.options.timestamp.then(chrono::Utc::now),
        };

        log::debug!("built document with {} slides", slides.len());
        Document { metadata, slides }
    }
}

impl Default for OutlineParser {
    fn default() -> Self {
        Self::new()
    }
}

impl ParseState {
    /// Push the in-progress slide, discarding a cover placeholder.
    fn close_current(&mut self) {
        match self.current.take() {
            Some(ActiveSlide::Slide(slide)) => self.slides.push(slide),
            Some(ActiveSlide::CoverPlaceholder) | None => {}
        }
    }

    /// Open a content slide with the synthesized rotation defaults.
    fn open_content(&mut self, title: String) -> SlideSpec {
        let layout = LayoutName::from_rotation(self.rotation);
        let image = format!("image_{}.jpg", self.rotation + 1);
        let image_desc = format!("{title} illustration");
        self.rotation += 1;
        SlideSpec::ContentImage {
            title,
            bullets: Vec::new(),
            quote: None,
            layout: Some(layout),
            image_desc,
            image_prompt: None,
            image: Some(image),
        }
    }

    /// Apply a `title:`/`subtitle:` override bullet inside the cover block.
    fn cover_override(&mut self, bullet: &str) {
        let Some((key, value)) = bullet
            .split_once('：')
            .or_else(|| bullet.split_once(':'))
        else {
            log::debug!("cover bullet without override key, dropped: {bullet}");
            return;
        };
        let value = value.trim();
        if value.is_empty() {
            return;
        }
        match key.trim().to_lowercase().as_str() {
            "title" | "标题" => self.cover_title = Some(value.to_string()),
            "subtitle" | "副标题" => self.cover_subtitle = Some(value.to_string()),
            other => log::debug!("unknown cover override '{other}', dropped"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str) -> Document {
        OutlineParser::with_options(ParseOptions::new().without_timestamp())
            .parse(text)
            .unwrap()
    }

    #[test]
    fn test_empty_input_is_hard_error() {
        let parser = OutlineParser::new();
        assert!(matches!(parser.parse(""), Err(Error::EmptyInput)));
        assert!(matches!(parser.parse("  \n \n"), Err(Error::EmptyInput)));
    }

    #[test]
    fn test_minimal_outline_end_to_end() {
        let doc = parse("# Demo\n## Chapter One\n### Topic\n- Label: short\n> A quote");
        // cover + section + content + synthesized ending
        assert_eq!(doc.slide_count(), 4);
        assert_eq!(doc.metadata.title, "Demo");
        assert_eq!(doc.metadata.total_slides, 4);

        match &doc.slides[0] {
            SlideSpec::Cover {
                title, subtitle, ..
            } => {
                assert_eq!(title, "Demo");
                assert_eq!(subtitle.as_deref(), Some(DEFAULT_COVER_SUBTITLE));
            }
            other => panic!("expected cover, got {other:?}"),
        }
        match &doc.slides[2] {
            SlideSpec::ContentImage {
                title,
                bullets,
                quote,
                ..
            } => {
                assert_eq!(title, "Topic");
                assert_eq!(bullets, &["Label: short"]);
                assert_eq!(quote.as_deref(), Some("A quote"));
            }
            other => panic!("expected content slide, got {other:?}"),
        }
        match &doc.slides[3] {
            SlideSpec::Ending { title, .. } => assert_eq!(title, DEFAULT_ENDING_TITLE),
            other => panic!("expected ending, got {other:?}"),
        }
    }

    #[test]
    fn test_first_plain_line_becomes_subtitle() {
        let doc = parse("# 培训\n智能防护系统介绍\n### 内容\n- 要点");
        match &doc.slides[0] {
            SlideSpec::Cover { subtitle, .. } => {
                assert_eq!(subtitle.as_deref(), Some("智能防护系统介绍"));
            }
            other => panic!("expected cover, got {other:?}"),
        }
    }

    #[test]
    fn test_cover_marker_overrides() {
        let doc = parse("# Original\n## 封面\n- title: Better Title\n- subtitle: Sub\n### Body");
        assert_eq!(doc.metadata.title, "Better Title");
        match &doc.slides[0] {
            SlideSpec::Cover {
                title, subtitle, ..
            } => {
                assert_eq!(title, "Better Title");
                assert_eq!(subtitle.as_deref(), Some("Sub"));
            }
            other => panic!("expected cover, got {other:?}"),
        }
        // the placeholder itself produced no slide
        assert_eq!(doc.count_kind(SlideKind::Cover), 1);
    }

    #[test]
    fn test_layout_rotation_over_content_slides() {
        let outline: String = (0..8).map(|n| format!("### S{n}\n- b\n")).collect();
        let doc = parse(&format!("# R\n{outline}"));
        let layouts: Vec<_> = doc
            .content_slides()
            .map(|s| match s {
                SlideSpec::ContentImage { layout, .. } => layout.unwrap(),
                _ => unreachable!(),
            })
            .collect();
        assert_eq!(layouts.len(), 8);
        assert_eq!(layouts[0], LayoutName::LeftTextRightImage);
        assert_eq!(layouts[0], layouts[6]);
        assert_eq!(layouts[1], layouts[7]);
        assert_ne!(layouts[0], layouts[3]);
    }

    #[test]
    fn test_synthesized_image_defaults() {
        let doc = parse("# T\n### 屏蔽技术\n- 金属屏蔽：法拉第笼原理");
        match &doc.slides[1] {
            SlideSpec::ContentImage {
                image, image_desc, ..
            } => {
                assert_eq!(image.as_deref(), Some("image_1.jpg"));
                assert_eq!(image_desc, "屏蔽技术 illustration");
            }
            other => panic!("expected content slide, got {other:?}"),
        }
    }

    #[test]
    fn test_quote_overwrites_previous() {
        let doc = parse("# T\n### X\n> first\n> second");
        assert_eq!(doc.slides[1].quote(), Some("second"));
    }

    #[test]
    fn test_explicit_ending_suppresses_default() {
        let doc = parse("# T\n## 总结\n- 回顾要点\n> 完美");
        assert_eq!(doc.count_kind(SlideKind::Ending), 1);
        match doc.slides.last().unwrap() {
            SlideSpec::Ending { title, quote, .. } => {
                assert_eq!(title, "总结");
                assert_eq!(quote.as_deref(), Some("完美"));
            }
            other => panic!("expected ending, got {other:?}"),
        }
    }

    #[test]
    fn test_plain_noise_dropped_inside_slide() {
        let doc = parse("# T\n### X\n- real bullet\n**emphasis noise\nplain addition");
        match &doc.slides[1] {
            SlideSpec::ContentImage { bullets, .. } => {
                assert_eq!(bullets, &["real bullet", "plain addition"]);
            }
            other => panic!("expected content slide, got {other:?}"),
        }
    }

    #[test]
    fn test_quote_before_any_slide_ignored() {
        let doc = parse("# T\n> stray quote\n### X\n- b");
        assert!(doc.slides[1].quote().is_none());
    }

    #[test]
    fn test_chapter_structure_counts() {
        let outline = "# 电磁防护技术培训\n智能防护系统介绍\n\n## 第一章 威胁分析\n### 电磁脉冲威胁\n- EMP攻击：高空核爆产生的电磁脉冲\n- 雷电感应：自然界的电磁威胁\n> 知己知彼，百战不殆\n\n### 辐射效应分析\n- 传导耦合：通过电缆传播\n> 防患于未然\n\n## 第二章 防护措施\n### 屏蔽技术\n- 金属屏蔽：法拉第笼原理\n";
        let doc = parse(outline);
        assert_eq!(doc.count_kind(SlideKind::Section), 2);
        assert_eq!(doc.count_kind(SlideKind::ContentImage), 3);
        let quotes = doc.slides.iter().filter(|s| s.quote().is_some()).count();
        // two outline quotes plus the synthesized ending's
        assert_eq!(quotes, 3);
        match &doc.slides[1] {
            SlideSpec::Section { title } => assert_eq!(title, "威胁分析"),
            other => panic!("expected section, got {other:?}"),
        }
    }
}
