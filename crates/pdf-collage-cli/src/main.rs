use anyhow::Result;
use clap::{Parser, ValueEnum};
use pdf_collage::{CollageOptions, LayoutStrategy, Orientation, PaperSize, SUPPORTED_EXTENSIONS};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "collage",
    about = "Arrange a folder of images onto PDF pages",
    version
)]
struct Cli {
    /// Folder containing the images
    folder: PathBuf,

    /// Output PDF file [default: images_output.pdf]
    output: Option<PathBuf>,

    /// How images are arranged
    #[arg(long, value_enum)]
    layout: Option<LayoutArg>,

    /// Output paper size
    #[arg(long, value_enum)]
    paper: Option<PaperArg>,

    /// Output orientation
    #[arg(long, value_enum)]
    orientation: Option<OrientationArg>,

    /// Page margin in points (uniform on all sides)
    #[arg(long)]
    margin: Option<f32>,

    /// JSON options file; command-line flags take precedence
    #[arg(long)]
    config: Option<PathBuf>,

    /// Show statistics only, don't generate PDF
    #[arg(long)]
    stats_only: bool,

    /// Only log warnings and errors
    #[arg(short, long)]
    quiet: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum LayoutArg {
    Flow,
    Grid,
    Spiral,
}

#[derive(Clone, Copy, ValueEnum)]
enum PaperArg {
    A3,
    A4,
    A5,
    Letter,
    Legal,
    Tabloid,
}

#[derive(Clone, Copy, ValueEnum)]
enum OrientationArg {
    Portrait,
    Landscape,
}

impl From<LayoutArg> for LayoutStrategy {
    fn from(arg: LayoutArg) -> Self {
        match arg {
            LayoutArg::Flow => Self::Flow,
            LayoutArg::Grid => Self::Grid,
            LayoutArg::Spiral => Self::Spiral,
        }
    }
}

impl From<PaperArg> for PaperSize {
    fn from(arg: PaperArg) -> Self {
        match arg {
            PaperArg::A3 => Self::A3,
            PaperArg::A4 => Self::A4,
            PaperArg::A5 => Self::A5,
            PaperArg::Letter => Self::Letter,
            PaperArg::Legal => Self::Legal,
            PaperArg::Tabloid => Self::Tabloid,
        }
    }
}

impl From<OrientationArg> for Orientation {
    fn from(arg: OrientationArg) -> Self {
        match arg {
            OrientationArg::Portrait => Self::Portrait,
            OrientationArg::Landscape => Self::Landscape,
        }
    }
}

fn init_logging(quiet: bool) {
    let default_level = if quiet { "warn" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .format_target(false)
        .init();
}

async fn build_options(cli: &Cli) -> Result<CollageOptions> {
    let mut options = match &cli.config {
        Some(path) => CollageOptions::load(path).await?,
        None => CollageOptions::default(),
    };

    options.input_folder = cli.folder.clone();
    if let Some(output) = &cli.output {
        options.output_file = output.clone();
    }
    if let Some(layout) = cli.layout {
        options.layout = layout.into();
    }
    if let Some(paper) = cli.paper {
        options.paper_size = paper.into();
    }
    if let Some(orientation) = cli.orientation {
        options.orientation = orientation.into();
    }
    if let Some(margin) = cli.margin {
        options.margin_pt = margin;
    }

    Ok(options)
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.quiet);

    let options = build_options(&cli).await?;

    if cli.stats_only {
        let plan = pdf_collage::plan(&options).await?;
        let stats = plan.statistics();
        println!("Collage Statistics:");
        println!("  Layout: {}", options.layout.name());
        println!("  Candidate images: {}", stats.candidates);
        println!("  Measured images: {}", stats.measured);
        println!("  Unreadable images: {}", stats.probe_failures);
        println!("  Output pages: {}", stats.pages);
        println!("  Placements: {}", stats.placements);
        return Ok(());
    }

    let report = pdf_collage::convert(&options).await?;

    match report.output {
        Some(output) => println!(
            "Added {}/{} images on {} page(s) → {}",
            report.images_added,
            report.statistics.candidates,
            report.statistics.pages,
            output.display()
        ),
        None if report.statistics.candidates == 0 => {
            println!(
                "No supported image files found in: {}",
                options.input_folder.display()
            );
            println!("Supported formats: {}", SUPPORTED_EXTENSIONS.join(", "));
        }
        None => println!(
            "No readable images found in: {} ({} unreadable)",
            options.input_folder.display(),
            report.statistics.probe_failures
        ),
    }

    Ok(())
}
