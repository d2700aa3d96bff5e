//! Image resolution and prompt synthesis.
//!
//! The core never downloads anything. It hands each content slide's image
//! job to an [`ImageResolver`] collaborator and treats failure as "render a
//! placeholder region". Prompt synthesis maps the slide's Chinese keywords
//! onto English illustration phrases, since generation services respond far
//! better to English prompts.

use crate::model::{Document, SlideSpec};
use std::path::{Path, PathBuf};

/// One image job extracted from a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageTask {
    /// Generation prompt, explicit or synthesized.
    pub prompt: String,
    /// Suggested local file path for the downloaded image.
    pub path: String,
    /// Human-readable descriptor from the slide.
    pub desc: String,
    /// Owning slide's title.
    pub title: String,
}

/// Collaborator that turns an image descriptor into a usable local file.
///
/// Implementations may hit the network, probe the filesystem, or do nothing
/// at all. Returning `None` means "use a placeholder"; it is never an error.
pub trait ImageResolver {
    fn resolve(&self, descriptor: &str, suggested_path: &str) -> Option<PathBuf>;
}

/// Resolver that only probes the local filesystem.
///
/// Candidate order: the suggested path as given, then its file name under
/// each configured search directory.
#[derive(Debug, Default)]
pub struct LocalImageResolver {
    search_dirs: Vec<PathBuf>,
}

impl LocalImageResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a directory to probe for image file names.
    pub fn with_search_dir<P: Into<PathBuf>>(mut self, dir: P) -> Self {
        self.search_dirs.push(dir.into());
        self
    }
}

impl ImageResolver for LocalImageResolver {
    fn resolve(&self, _descriptor: &str, suggested_path: &str) -> Option<PathBuf> {
        let suggested = Path::new(suggested_path);
        if suggested.is_file() {
            return Some(suggested.to_path_buf());
        }
        let name = suggested.file_name()?;
        for dir in &self.search_dirs {
            let candidate = dir.join(name);
            if candidate.is_file() {
                return Some(candidate);
            }
        }
        log::debug!("image not found locally: {suggested_path}");
        None
    }
}

/// Resolver that resolves nothing. Every slide gets a placeholder.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullResolver;

impl ImageResolver for NullResolver {
    fn resolve(&self, _descriptor: &str, _suggested_path: &str) -> Option<PathBuf> {
        None
    }
}

/// Chinese topic keyword -> English illustration phrase.
const KEYWORD_PHRASES: [(&str, &str); 25] = [
    ("电磁", "electromagnetic waves, radar systems"),
    ("雷达", "military radar system, antenna array"),
    ("脉冲", "electromagnetic pulse, EMP effect"),
    ("攻击", "cyber attack visualization, security threat"),
    ("防护", "protective shield, defense system"),
    ("辐射", "radiation protection, electromagnetic shielding"),
    ("屏蔽", "metal shielding box, Faraday cage"),
    ("干扰", "electronic jamming, signal interference"),
    ("通信", "communication systems, satellite links"),
    ("导弹", "missile defense system, military technology"),
    ("战场", "modern battlefield, military operations"),
    ("武器", "advanced weapons system, military equipment"),
    ("传导", "electrical conduction, circuit protection"),
    ("耦合", "electromagnetic coupling, signal transmission"),
    ("滤波", "electronic filter, signal processing"),
    ("芯片", "microchip, semiconductor technology"),
    ("设备", "electronic equipment, technical devices"),
    ("系统", "integrated system, technical architecture"),
    ("标准", "technical standards, certification documents"),
    ("试验", "laboratory testing, scientific experiment"),
    ("验证", "verification process, quality control"),
    ("技术", "advanced technology, innovation"),
    ("科技", "high-tech, futuristic design"),
    ("数据", "data visualization, digital information"),
    ("网络", "network topology, cyber infrastructure"),
];

/// Fallback phrases when no keyword matches.
const DEFAULT_PHRASES: &str = "technical illustration, professional diagram";

/// How many matched phrase groups are kept in one prompt.
const MAX_PHRASES: usize = 3;

/// Synthesize a generation prompt from slide title and bullets.
///
/// Keywords are taken from the title plus the pre-colon label of each of the
/// first three bullets (or the bullet's first 10 characters when it has no
/// colon), matched against the phrase table, and rendered into a fixed
/// single-line illustration template.
pub fn build_image_prompt(title: &str, bullets: &[String]) -> String {
    let mut keywords = String::from(title);
    for bullet in bullets.iter().take(3) {
        keywords.push(' ');
        if let Some((label, _)) = bullet.split_once('：').or_else(|| bullet.split_once(':')) {
            keywords.push_str(label.trim());
        } else {
            keywords.extend(bullet.chars().take(10));
        }
    }

    let mut phrases: Vec<&str> = KEYWORD_PHRASES
        .iter()
        .filter(|(key, _)| keywords.contains(key))
        .map(|&(_, phrase)| phrase)
        .collect();
    phrases.truncate(MAX_PHRASES);
    let subject = if phrases.is_empty() {
        DEFAULT_PHRASES.to_string()
    } else {
        phrases.join(", ")
    };

    format!(
        "Professional technical illustration showing {subject}. \
         Style: Clean modern infographic, technical diagram, blueprint aesthetic. \
         Colors: Blue and white color scheme, professional look. \
         Quality: High resolution, 4K, detailed, sharp focus. \
         Background: Clean gradient or solid color, minimalist. \
         NO text, NO watermarks, NO human faces."
    )
}

/// List every content slide's image job for an external downloader.
///
/// Slides without an explicit `image_prompt` get a synthesized one; slides
/// without an explicit `image` path get a sequential default name.
pub fn collect_image_tasks(document: &Document) -> Vec<ImageTask> {
    let mut tasks = Vec::new();
    for slide in document.content_slides() {
        let SlideSpec::ContentImage {
            title,
            bullets,
            image_desc,
            image_prompt,
            image,
            ..
        } = slide
        else {
            continue;
        };
        let prompt = match image_prompt {
            Some(p) if !p.trim().is_empty() => p.clone(),
            _ => build_image_prompt(title, bullets),
        };
        let path = image
            .clone()
            .unwrap_or_else(|| format!("image_{}.jpg", tasks.len() + 1));
        tasks.push(ImageTask {
            prompt,
            path,
            desc: image_desc.clone(),
            title: title.clone(),
        });
    }
    tasks
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Metadata;

    fn content_slide(title: &str, bullets: &[&str], image: Option<&str>) -> SlideSpec {
        SlideSpec::ContentImage {
            title: title.to_string(),
            bullets: bullets.iter().map(|s| s.to_string()).collect(),
            quote: None,
            layout: None,
            image_desc: format!("{title} illustration"),
            image_prompt: None,
            image: image.map(String::from),
        }
    }

    #[test]
    fn test_prompt_uses_keyword_phrases() {
        let bullets = vec!["金属屏蔽：法拉第笼原理".to_string()];
        let prompt = build_image_prompt("电磁防护", &bullets);
        assert!(prompt.contains("electromagnetic waves"));
        assert!(prompt.contains("Faraday cage"));
        assert!(prompt.ends_with("NO text, NO watermarks, NO human faces."));
        // compressed to a single line
        assert!(!prompt.contains('\n'));
    }

    #[test]
    fn test_prompt_falls_back_to_default_subject() {
        let prompt = build_image_prompt("Quarterly Review", &[]);
        assert!(prompt.contains("technical illustration, professional diagram"));
    }

    #[test]
    fn test_prompt_caps_phrase_count() {
        let prompt = build_image_prompt("电磁雷达脉冲攻击防护", &[]);
        // at most three phrase groups survive
        let commas = prompt.split("Style:").next().unwrap();
        assert!(commas.matches(", ").count() <= 6);
    }

    #[test]
    fn test_collect_image_tasks() {
        let doc = Document {
            metadata: Metadata {
                title: "T".to_string(),
                theme: "tech_blue".to_string(),
                total_slides: 3,
                generated: None,
            },
            slides: vec![
                SlideSpec::Section {
                    title: "S".to_string(),
                },
                content_slide("屏蔽技术", &["金属屏蔽：原理"], Some("image_1.jpg")),
                content_slide("Other", &[], None),
            ],
        };
        let tasks = collect_image_tasks(&doc);
        assert_eq!(tasks.len(), 2);
        assert_eq!(tasks[0].path, "image_1.jpg");
        assert!(tasks[0].prompt.contains("Faraday cage"));
        assert_eq!(tasks[1].path, "image_2.jpg");
        assert_eq!(tasks[1].title, "Other");
    }

    #[test]
    fn test_local_resolver_probes_search_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("image_1.jpg");
        std::fs::write(&file, b"jpg").unwrap();

        let resolver = LocalImageResolver::new().with_search_dir(dir.path());
        let found = resolver.resolve("desc", "missing/image_1.jpg");
        assert_eq!(found, Some(file));
        assert!(resolver.resolve("desc", "nope.jpg").is_none());
    }

    #[test]
    fn test_null_resolver() {
        assert!(NullResolver.resolve("desc", "image_1.jpg").is_none());
    }
}
