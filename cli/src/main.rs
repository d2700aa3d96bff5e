//! autodeck CLI - outline-to-presentation planning tool

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;

use autodeck::{
    collect_image_tasks, Autodeck, JsonFormat, LocalImageResolver, SlideKind, Theme, ThemeName,
};

#[derive(Parser)]
#[command(name = "autodeck")]
#[command(version)]
#[command(about = "Turn text outlines into presentation render plans", long_about = None)]
struct Cli {
    /// Input outline or JSON document
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Output file (stdout if not specified)
    #[arg(value_name = "OUTPUT")]
    output: Option<PathBuf>,

    /// Color theme
    #[arg(long, value_enum)]
    theme: Option<ThemeChoice>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve an input into a full render plan (JSON)
    Plan {
        /// Input outline or JSON document
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Color theme
        #[arg(long, value_enum)]
        theme: Option<ThemeChoice>,

        /// Directory to probe for already-downloaded images
        #[arg(long, value_name = "DIR")]
        image_dir: Option<PathBuf>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,
    },

    /// Parse an input into the document model (JSON)
    Json {
        /// Input outline or JSON document
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Color theme
        #[arg(long, value_enum)]
        theme: Option<ThemeChoice>,

        /// Do not synthesize a default ending slide
        #[arg(long)]
        no_ending: bool,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,
    },

    /// Show document information
    Info {
        /// Input outline or JSON document
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },

    /// List image generation tasks for a document
    Prompts {
        /// Input outline or JSON document
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },

    /// List available themes
    Themes,

    /// Show version information
    Version,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum ThemeChoice {
    /// Dark red and gray, solemn
    MilitarySolemn,
    /// Deep blue on light, technical
    TechBlue,
    /// Green on light, natural
    NatureGreen,
    /// Neutral grays, corporate
    BusinessGray,
}

impl From<ThemeChoice> for ThemeName {
    fn from(choice: ThemeChoice) -> Self {
        match choice {
            ThemeChoice::MilitarySolemn => ThemeName::MilitarySolemn,
            ThemeChoice::TechBlue => ThemeName::TechBlue,
            ThemeChoice::NatureGreen => ThemeName::NatureGreen,
            ThemeChoice::BusinessGray => ThemeName::BusinessGray,
        }
    }
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Plan {
            input,
            output,
            theme,
            image_dir,
            compact,
        }) => cmd_plan(
            &input,
            output.as_deref(),
            theme,
            image_dir.as_deref(),
            compact,
        ),
        Some(Commands::Json {
            input,
            output,
            theme,
            no_ending,
            compact,
        }) => cmd_json(&input, output.as_deref(), theme, no_ending, compact),
        Some(Commands::Info { input }) => cmd_info(&input),
        Some(Commands::Prompts { input }) => cmd_prompts(&input),
        Some(Commands::Themes) => {
            cmd_themes();
            Ok(())
        }
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => {
            // Default behavior: plan if input is provided
            if let Some(input) = cli.input {
                cmd_plan(&input, cli.output.as_deref(), cli.theme, None, false)
            } else {
                println!("{}", "Usage: autodeck <FILE> [OUTPUT]".yellow());
                println!("       autodeck --help for more information");
                Ok(())
            }
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn builder(theme: Option<ThemeChoice>) -> Autodeck {
    let mut builder = Autodeck::new();
    if let Some(choice) = theme {
        builder = builder.with_theme(choice.into());
    }
    builder
}

fn write_or_print(output: Option<&Path>, text: &str) -> Result<(), Box<dyn std::error::Error>> {
    match output {
        Some(path) => {
            fs::write(path, text)?;
            println!("{} {}", "Wrote".green().bold(), path.display());
        }
        None => println!("{text}"),
    }
    Ok(())
}

fn cmd_plan(
    input: &Path,
    output: Option<&Path>,
    theme: Option<ThemeChoice>,
    image_dir: Option<&Path>,
    compact: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let result = builder(theme).parse_path(input)?;

    let plan = match image_dir {
        Some(dir) => {
            let resolver = LocalImageResolver::new().with_search_dir(dir);
            result.plan_with_resolver(&resolver)
        }
        None => result.plan(),
    };

    let format = if compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    };
    let json = autodeck::render::plan_to_json(&plan, format)?;
    write_or_print(output, &json)
}

fn cmd_json(
    input: &Path,
    output: Option<&Path>,
    theme: Option<ThemeChoice>,
    no_ending: bool,
    compact: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut builder = builder(theme);
    if no_ending {
        builder = builder.without_ending();
    }
    let result = builder.parse_path(input)?;

    let format = if compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    };
    let json = result.to_json(format)?;
    write_or_print(output, &json)
}

fn cmd_info(input: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let result = Autodeck::new().parse_path(input)?;
    let doc = result.document();

    println!("{}", "Document Information".cyan().bold());
    println!("  Title:  {}", doc.metadata.title);
    println!("  Theme:  {}", doc.metadata.theme);
    println!("  Slides: {}", doc.slide_count());
    for kind in [
        SlideKind::Cover,
        SlideKind::Section,
        SlideKind::ContentImage,
        SlideKind::Chart,
        SlideKind::Ending,
    ] {
        let count = doc.count_kind(kind);
        if count > 0 {
            println!("    {:<14} {}", kind.as_str(), count);
        }
    }
    Ok(())
}

fn cmd_prompts(input: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let result = Autodeck::new().parse_path(input)?;
    let tasks = collect_image_tasks(result.document());

    if tasks.is_empty() {
        println!("{}", "No image tasks in this document".yellow());
        return Ok(());
    }
    for task in &tasks {
        println!("{} {}", "Image:".green().bold(), task.path);
        println!("  Slide:  {}", task.title);
        println!("  Prompt: {}", task.prompt);
    }
    Ok(())
}

fn cmd_themes() {
    println!("{}", "Available Themes".cyan().bold());
    for name in autodeck::theme::THEME_PRESETS {
        let theme = Theme::preset(name);
        println!(
            "  {:<16} primary {}  accent {}",
            name.as_str(),
            theme.primary.to_hex(),
            theme.accent.to_hex()
        );
    }
}

fn cmd_version() {
    println!("autodeck {}", env!("CARGO_PKG_VERSION"));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_choice_mapping() {
        assert_eq!(ThemeName::from(ThemeChoice::TechBlue), ThemeName::TechBlue);
        assert_eq!(
            ThemeName::from(ThemeChoice::MilitarySolemn),
            ThemeName::MilitarySolemn
        );
    }

    #[test]
    fn test_cmd_plan_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("deck.md");
        let output = dir.path().join("plan.json");
        fs::write(&input, "# Demo\n### Topic\n- Label: short").unwrap();

        cmd_plan(&input, Some(&output), None, None, true).unwrap();

        let json = fs::read_to_string(&output).unwrap();
        assert!(json.contains("\"canvas_width\""));
    }

    #[test]
    fn test_cmd_json_no_ending() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("deck.md");
        let output = dir.path().join("doc.json");
        fs::write(&input, "# Demo\n### Topic\n- point").unwrap();

        cmd_json(&input, Some(&output), None, true, false).unwrap();

        let json = fs::read_to_string(&output).unwrap();
        assert!(!json.contains("\"ending\""));
    }
}
