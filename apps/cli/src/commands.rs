//! CLI command definitions, routing, and tracing setup.

use std::path::PathBuf;

use bookbuilder_core::assembler::LocalClock;
use bookbuilder_core::pipeline::{BuildSummary, ProgressReporter};
use bookbuilder_discovery::scan_chapters;
use bookbuilder_shared::BuildConfig;
use clap::{Args, Parser, Subcommand};
use color_eyre::eyre::Result;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;

// ---------------------------------------------------------------------------
// CLI structure
// ---------------------------------------------------------------------------

/// BookBuilder: merge numbered markdown chapters into a single book.
#[derive(Parser)]
#[command(
    name = "bookbuilder",
    version,
    about = "Merge a directory of numbered markdown chapters into one book with a table of contents.",
    long_about = None,
)]
pub(crate) struct Cli {
    /// Log format: text (default) or json.
    #[arg(long, default_value = "text", global = true)]
    pub log_format: LogFormat,

    /// Verbosity level (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Log output format.
#[derive(Clone, Debug, clap::ValueEnum)]
pub(crate) enum LogFormat {
    Text,
    Json,
}

/// Overrides applied on top of the built-in defaults.
#[derive(Args, Debug, Default)]
pub(crate) struct SourceArgs {
    /// Directory holding the chapter files (default: ./chapters).
    #[arg(short, long)]
    pub chapters_dir: Option<PathBuf>,

    /// Include markdown files without a numeric prefix; they sort last.
    #[arg(long)]
    pub include_unnumbered: bool,
}

/// Top-level CLI subcommands.
#[derive(Subcommand)]
pub(crate) enum Command {
    /// Build the merged book.
    Build {
        #[command(flatten)]
        source: SourceArgs,

        /// Output file, overwritten on every build.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print the ordered chapter manifest without building.
    Manifest {
        #[command(flatten)]
        source: SourceArgs,

        /// Print the manifest as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Show the resolved configuration.
    Config {
        #[command(flatten)]
        source: SourceArgs,

        /// Output file, overwritten on every build.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Resolve the build config from defaults plus CLI overrides.
pub(crate) fn resolve_config(source: SourceArgs, output: Option<PathBuf>) -> BuildConfig {
    let mut config = BuildConfig::default();
    if let Some(dir) = source.chapters_dir {
        config.chapters_dir = dir;
    }
    if let Some(out) = output {
        config.output_file = out;
    }
    config.include_unnumbered = source.include_unnumbered;
    config
}

// ---------------------------------------------------------------------------
// Tracing setup
// ---------------------------------------------------------------------------

/// Initialize tracing based on CLI flags.
pub(crate) fn init_tracing(cli: &Cli) {
    use tracing_subscriber::{EnvFilter, fmt};

    let filter = match cli.verbose {
        0 => "bookbuilder=warn",
        1 => "bookbuilder=info",
        2 => "bookbuilder=debug",
        _ => "bookbuilder=trace",
    };

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter));

    match cli.log_format {
        LogFormat::Text => {
            fmt()
                .with_env_filter(env_filter)
                .with_writer(std::io::stderr)
                .with_target(false)
                .init();
        }
        LogFormat::Json => {
            fmt()
                .json()
                .with_env_filter(env_filter)
                .with_writer(std::io::stderr)
                .init();
        }
    }
}

// ---------------------------------------------------------------------------
// Command dispatch
// ---------------------------------------------------------------------------

/// Run the CLI command.
pub(crate) async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Build { source, output } => cmd_build(resolve_config(source, output)).await,
        Command::Manifest { source, json } => cmd_manifest(resolve_config(source, None), json).await,
        Command::Config { source, output } => cmd_config(&resolve_config(source, output)),
    }
}

async fn cmd_build(config: BuildConfig) -> Result<()> {
    info!(
        chapters_dir = %config.chapters_dir.display(),
        output = %config.output_file.display(),
        "building book"
    );

    let reporter = CliProgress::new();
    let summary = bookbuilder_core::pipeline::build_book(&config, &LocalClock, &reporter).await?;

    println!();
    println!("  Book built successfully!");
    println!("  Output:   {}", summary.output_file.display());
    println!("  Chapters: {}", summary.chapter_count);
    println!("  Bodies:   {}", summary.body_count);
    if !summary.skipped.is_empty() {
        println!("  Skipped:  {}", summary.skipped.join(", "));
    }
    println!("  Size:     ~{} characters", summary.char_count);
    println!("  Time:     {:.2}s", summary.elapsed.as_secs_f64());
    println!();

    Ok(())
}

async fn cmd_manifest(config: BuildConfig, json: bool) -> Result<()> {
    config.validate_source()?;
    let manifest = scan_chapters(&config).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&manifest)?);
        return Ok(());
    }

    for chapter in &manifest {
        println!(
            "{:>7}  {}  ->  #{}",
            chapter.key.to_string(),
            chapter.filename,
            chapter.anchor
        );
    }
    println!();
    println!("  {} chapter files in {}", manifest.len(), config.chapters_dir.display());

    Ok(())
}

fn cmd_config(config: &BuildConfig) -> Result<()> {
    let toml_str = toml::to_string_pretty(config)?;
    println!("{toml_str}");
    Ok(())
}

// ---------------------------------------------------------------------------
// CLI progress reporter
// ---------------------------------------------------------------------------

/// CLI progress reporter using indicatif spinners/bars.
struct CliProgress {
    bar: ProgressBar,
}

impl CliProgress {
    fn new() -> Self {
        let bar = ProgressBar::new_spinner();
        bar.set_style(
            ProgressStyle::with_template("{spinner:.cyan} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner())
                .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"]),
        );
        bar.enable_steady_tick(std::time::Duration::from_millis(80));
        Self { bar }
    }

    /// Print a line above the bar; works whether or not the bar is drawn.
    fn line(&self, msg: String) {
        self.bar.suspend(|| println!("{msg}"));
    }
}

impl ProgressReporter for CliProgress {
    fn phase(&self, name: &str) {
        self.bar.set_message(name.to_string());
    }

    fn chapters_found(&self, count: usize) {
        self.line(format!("  Found {count} chapter files"));
        self.bar.set_length(count as u64);
        self.bar.set_style(
            ProgressStyle::with_template("{bar:30.cyan/blue} {pos}/{len} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar()),
        );
    }

    fn chapter_started(&self, filename: &str, current: usize, total: usize) {
        self.line(format!("  Processing [{current}/{total}] {filename}"));
        self.bar.set_position(current as u64);
    }

    fn chapter_skipped(&self, filename: &str) {
        self.line(format!("  Skipped {filename}: empty or unreadable"));
    }

    fn done(&self, _summary: &BuildSummary) {
        self.bar.finish_and_clear();
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
