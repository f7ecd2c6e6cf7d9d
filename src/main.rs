use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use ink_remap::{ChannelMapping, Destination};
use out_of_ink::models::{validate_quality, Settings, SourceDocument};
use out_of_ink::rendering::{encode_png, PdfDocumentWriter, SvgRasterizer};
use out_of_ink::services::{ExportProgress, PagePipeline};

#[derive(Parser)]
#[command(name = "out-of-ink")]
#[command(about = "Out of Ink - reprint documents with empty ink cartridges")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a document into an ink-corrected PDF
    Convert {
        /// SVG/PNG file, or a directory of page files
        input: PathBuf,

        /// Output PDF path (default: out-of-ink-<name>.pdf)
        #[arg(short, long)]
        output: Option<PathBuf>,

        #[command(flatten)]
        channels: ChannelArgs,

        /// Rasterization scale for export (1-8)
        #[arg(short, long)]
        quality: Option<u32>,
    },
    /// Render one corrected page to a PNG file
    Preview {
        /// SVG/PNG file, or a directory of page files
        input: PathBuf,

        /// Page number (1-based)
        #[arg(short, long, default_value_t = 1)]
        page: usize,

        /// Output PNG file path
        #[arg(short, long)]
        output: PathBuf,

        /// Also write the uncorrected page to this PNG file
        #[arg(long)]
        source: Option<PathBuf>,

        #[command(flatten)]
        channels: ChannelArgs,
    },
    /// Show or reset the saved channel mapping and quality
    Settings {
        /// Delete the settings file and restore defaults
        #[arg(long)]
        reset: bool,
    },
}

/// Channel mapping overrides
#[derive(Args)]
struct ChannelArgs {
    /// Where cyan goes: none, cyan, magenta, yellow, cyan+magenta,
    /// cyan+yellow, magenta+yellow or black
    #[arg(long)]
    cyan: Option<Destination>,

    /// Where magenta goes
    #[arg(long)]
    magenta: Option<Destination>,

    /// Where yellow goes
    #[arg(long)]
    yellow: Option<Destination>,
}

impl ChannelArgs {
    fn is_empty(&self) -> bool {
        self.cyan.is_none() && self.magenta.is_none() && self.yellow.is_none()
    }

    fn apply(&self, settings: &mut Settings) {
        let current = settings.mapping();
        settings.set_mapping(ChannelMapping::new(
            self.cyan.unwrap_or(current.cyan),
            self.magenta.unwrap_or(current.magenta),
            self.yellow.unwrap_or(current.yellow),
        ));
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "out_of_ink=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();

    match cli.command {
        Some(Commands::Convert {
            input,
            output,
            channels,
            quality,
        }) => run_convert_command(&input, output, &channels, quality).await,
        Some(Commands::Preview {
            input,
            page,
            output,
            source,
            channels,
        }) => run_preview_command(&input, page, &output, source.as_deref(), &channels).await,
        Some(Commands::Settings { reset }) => run_settings_command(reset),
        None => {
            run_status_command();
            Ok(())
        }
    }
}

/// Export every page of `input` as a corrected PDF
async fn run_convert_command(
    input: &Path,
    output: Option<PathBuf>,
    channels: &ChannelArgs,
    quality: Option<u32>,
) -> anyhow::Result<()> {
    let settings_path = Settings::default_path();
    let mut settings = Settings::load(&settings_path)
        .with_context(|| format!("Failed to load settings from {}", settings_path.display()))?;

    if !channels.is_empty() || quality.is_some() {
        channels.apply(&mut settings);
        if let Some(quality) = quality {
            settings.quality = validate_quality(quality)?;
        }
        settings
            .save(&settings_path)
            .with_context(|| format!("Failed to save settings to {}", settings_path.display()))?;
    }

    let document = SourceDocument::open(input)
        .await
        .with_context(|| format!("Failed to open {}", input.display()))?;
    let output = output.unwrap_or_else(|| PathBuf::from(document.output_file_name()));
    let writer = PdfDocumentWriter::with_title(document.name());

    let mut pipeline = PagePipeline::new(SvgRasterizer::new());
    let total = pipeline.load(document)?;

    println!("Converting page 1 of {total}...");
    let pdf = pipeline
        .export(&writer, &settings.mapping(), settings.quality, print_progress)
        .await?;

    tokio::fs::write(&output, &pdf)
        .await
        .with_context(|| format!("Failed to write {}", output.display()))?;

    println!("Done. Wrote {} ({} bytes)", output.display(), pdf.len());
    Ok(())
}

fn print_progress(progress: ExportProgress) {
    if progress.is_last() {
        println!("Saving PDF...");
    } else {
        println!(
            "Converting page {} of {}...",
            progress.page + 1,
            progress.total
        );
    }
}

/// Render one page with the current (or overridden) mapping
async fn run_preview_command(
    input: &Path,
    page: usize,
    output: &Path,
    source_output: Option<&Path>,
    channels: &ChannelArgs,
) -> anyhow::Result<()> {
    let settings_path = Settings::default_path();
    let mut settings = Settings::load(&settings_path)
        .with_context(|| format!("Failed to load settings from {}", settings_path.display()))?;
    channels.apply(&mut settings);

    let document = SourceDocument::open(input)
        .await
        .with_context(|| format!("Failed to open {}", input.display()))?;

    let mut pipeline = PagePipeline::new(SvgRasterizer::new());
    pipeline.load(document)?;
    let preview = pipeline.preview(page, &settings.mapping()).await?;

    let png = encode_png(&preview.corrected)?;
    tokio::fs::write(output, &png)
        .await
        .with_context(|| format!("Failed to write {}", output.display()))?;
    println!(
        "Page {} of {} ({}): {}",
        preview.page,
        preview.page_count,
        settings.mapping(),
        output.display()
    );

    if let Some(path) = source_output {
        let png = encode_png(&preview.source)?;
        tokio::fs::write(path, &png)
            .await
            .with_context(|| format!("Failed to write {}", path.display()))?;
        println!("Original page: {}", path.display());
    }

    Ok(())
}

fn run_settings_command(reset: bool) -> anyhow::Result<()> {
    let path = Settings::default_path();
    let settings = if reset {
        let settings = Settings::reset(&path)?;
        println!("Settings reset.");
        settings
    } else {
        Settings::load(&path)?
    };

    print_settings(&path, &settings);
    Ok(())
}

fn print_settings(path: &Path, settings: &Settings) {
    let source = if path.exists() { "" } else { " (not saved)" };
    println!("Settings file: {}{source}", path.display());
    println!("  Cyan    -> {}", settings.cyan.label());
    println!("  Magenta -> {}", settings.magenta.label());
    println!("  Yellow  -> {}", settings.yellow.label());
    println!("  Quality: {}", settings.quality);
}

/// Display status and configuration information
fn run_status_command() {
    const VERSION: &str = env!("CARGO_PKG_VERSION");

    println!("Out of Ink v{VERSION}");
    println!("Reprint documents with empty ink cartridges\n");

    println!("Environment Variables:");
    println!(
        "  OUT_OF_INK_SETTINGS = {}",
        std::env::var("OUT_OF_INK_SETTINGS")
            .as_deref()
            .unwrap_or("(not set)")
    );
    println!();

    let path = Settings::default_path();
    match Settings::load(&path) {
        Ok(settings) => print_settings(&path, &settings),
        Err(e) => println!("Settings file: {} (invalid: {e})", path.display()),
    }

    println!("\nCommands:");
    println!("  out-of-ink convert    Convert a document to a corrected PDF");
    println!("  out-of-ink preview    Render one corrected page to PNG");
    println!("  out-of-ink settings   Show or reset saved settings");
    println!("\nRun 'out-of-ink --help' for more details.");
}
