//! readme-help CLI - README to UI help text tool

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand, ValueEnum};
use colored::Colorize;

use readme_help::{
    extract_chapter, read_document, write_symbols, HelpOptions, InjectReport, JsonFormat,
    ReadmeHelp, DEFAULT_LEVEL,
};

const DEFAULT_README: &str = "README.md";
const DEFAULT_TARGET: &str = "ui/help.slint";
const DEFAULT_SYMBOLS: &str = "ui/fonts/symbols.txt";

#[derive(Parser)]
#[command(name = "readme-help")]
#[command(version)]
#[command(about = "Copy README chapters into UI help text", long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    generate: GenerateArgs,
}

#[derive(Args)]
struct GenerateArgs {
    /// Source README
    #[arg(long, value_name = "FILE", env = "README_HELP_README", default_value = DEFAULT_README)]
    readme: PathBuf,

    /// UI file rewritten in place
    #[arg(long, value_name = "FILE", env = "README_HELP_TARGET", default_value = DEFAULT_TARGET)]
    target: PathBuf,

    /// Chapter heading to copy (repeatable, replaces the default list)
    #[arg(short, long = "chapter", value_name = "LABEL")]
    chapters: Vec<String>,

    /// Heading level of the chapters
    #[arg(long, default_value_t = DEFAULT_LEVEL)]
    level: usize,

    /// Wrap width in characters
    #[arg(long, default_value_t = readme_help::render::DEFAULT_WIDTH)]
    width: usize,

    /// Injection report format
    #[arg(long, value_enum, default_value = "text")]
    report: ReportFormat,
}

#[derive(Subcommand)]
enum Commands {
    /// Inject README chapters into the help UI file (default)
    Generate(GenerateArgs),

    /// List the headings of a README
    Chapters {
        /// Source README
        #[arg(long, value_name = "FILE", env = "README_HELP_README", default_value = DEFAULT_README)]
        readme: PathBuf,
    },

    /// Print a single chapter
    Extract {
        /// Chapter heading
        #[arg(value_name = "LABEL")]
        label: String,

        /// Source README
        #[arg(long, value_name = "FILE", env = "README_HELP_README", default_value = DEFAULT_README)]
        readme: PathBuf,

        /// Heading level of the chapter
        #[arg(long, default_value_t = DEFAULT_LEVEL)]
        level: usize,

        /// Wrap width in characters
        #[arg(long, default_value_t = readme_help::render::DEFAULT_WIDTH)]
        width: usize,

        /// Print the chapter lines unrendered
        #[arg(long)]
        raw: bool,
    },

    /// Write the list of non-ASCII glyphs used by a UI file
    Symbols {
        /// UI file to scan
        #[arg(short, long, value_name = "FILE", env = "README_HELP_TARGET", default_value = DEFAULT_TARGET)]
        input: PathBuf,

        /// Glyph list output
        #[arg(short, long, value_name = "FILE", default_value = DEFAULT_SYMBOLS)]
        output: PathBuf,
    },

    /// Show version information
    Version,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum ReportFormat {
    /// Colored summary lines
    Text,
    /// Compact JSON
    Json,
    /// Pretty-printed JSON
    Pretty,
}

impl ReportFormat {
    fn json_format(self) -> Option<JsonFormat> {
        match self {
            ReportFormat::Text => None,
            ReportFormat::Json => Some(JsonFormat::Compact),
            ReportFormat::Pretty => Some(JsonFormat::Pretty),
        }
    }
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Some(Commands::Generate(args)) => cmd_generate(args),
        Some(Commands::Chapters { readme }) => cmd_chapters(&readme),
        Some(Commands::Extract {
            label,
            readme,
            level,
            width,
            raw,
        }) => cmd_extract(&label, &readme, level, width, raw),
        Some(Commands::Symbols { input, output }) => cmd_symbols(&input, &output),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        // Default behavior: the build step, with top-level flags and env fallbacks
        None => cmd_generate(cli.generate),
    }
}

fn cmd_generate(args: GenerateArgs) -> Result<(), Box<dyn std::error::Error>> {
    let mut options = HelpOptions::new()
        .with_level(args.level)
        .with_width(args.width);
    if !args.chapters.is_empty() {
        options = options.with_chapters(args.chapters);
    }

    log::debug!(
        "Rendering {} chapters from {}",
        options.chapters.len(),
        args.readme.display()
    );
    let report = ReadmeHelp::with_options(options)
        .load(&args.readme)?
        .inject_file(&args.target)?;

    match args.report.json_format() {
        Some(format) => println!("{}", readme_help::render::to_json(&report, format)?),
        None => print_report(&report, &args.target),
    }

    Ok(())
}

fn print_report(report: &InjectReport, target: &Path) {
    for injection in &report.injected {
        println!(
            "{} {} {}",
            "Injected".green(),
            injection.label,
            format!("(line {})", injection.text_line + 1).dimmed()
        );
    }
    for skipped in &report.skipped {
        println!(
            "{} {} {}",
            "Skipped".yellow(),
            skipped.label,
            format!("({})", skipped.reason).dimmed()
        );
    }
    println!("{} {}", "Updated".green().bold(), target.display());
}

fn cmd_chapters(readme: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let doc = read_document(readme)?;
    let headings = doc.headings(readme_help::extract::DEFAULT_MARKER);

    println!("{}", "Chapters".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    for heading in &headings {
        let indent = "  ".repeat(heading.level.saturating_sub(1));
        println!(
            "{}{} {}",
            indent,
            heading.label,
            format!("(level {}, line {})", heading.level, heading.line + 1).dimmed()
        );
    }

    Ok(())
}

fn cmd_extract(
    label: &str,
    readme: &Path,
    level: usize,
    width: usize,
    raw: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    if raw {
        let doc = read_document(readme)?;
        let chapter = extract_chapter(&doc, label, level, readme_help::extract::DEFAULT_MARKER)?;
        print!("{}", chapter.lines.concat());
        return Ok(());
    }

    let result = ReadmeHelp::new()
        .with_chapters([label])
        .with_level(level)
        .with_width(width)
        .load(readme)?;

    for chapter in &result.chapters {
        println!("{}", chapter.text);
    }

    Ok(())
}

fn cmd_symbols(input: &Path, output: &Path) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let symbols = write_symbols(input, output)?;

    println!(
        "{} {} glyphs to {}",
        "Wrote".green(),
        symbols.len(),
        output.display()
    );

    Ok(())
}

fn cmd_version() {
    println!("{} {}", "readme-help".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("README to UI help text tool");
    println!();
    println!("License: GPL-3.0");
}
