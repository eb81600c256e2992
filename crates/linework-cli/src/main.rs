//! linework CLI — trace raster masks into smooth SVG outlines.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

type CliError = Box<dyn std::error::Error>;
type CliResult<T> = Result<T, CliError>;

#[derive(Parser)]
#[command(name = "linework")]
#[command(about = "Convert binary raster masks into smooth vector outlines (SVG)")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Trace a raster image into a filled outline document.
    Trace(CliTraceArgs),

    /// Emit the built-in emblem motif as a stroked document.
    Motif(CliMotifArgs),
}

#[derive(Debug, Clone, Args)]
struct CliTraceArgs {
    /// Path to the input image; it is thresholded to a binary mask.
    #[arg(long)]
    image: PathBuf,

    /// Path to write the symbol SVG.
    #[arg(long)]
    out: PathBuf,

    /// Path to write the traced outlines as JSON.
    #[arg(long)]
    json: Option<PathBuf>,

    /// Path to write an editable SVG with a caption block below the canvas.
    #[arg(long)]
    editable: Option<PathBuf>,

    /// First caption line of the editable document.
    #[arg(long, default_value = "")]
    line1: String,

    /// Second caption line of the editable document.
    #[arg(long, default_value = "")]
    line2: String,

    /// Fill color of the symbol group.
    #[arg(long, default_value = "black")]
    fill: String,

    /// Pipeline configuration overrides (JSON). Omitted stage blocks keep
    /// their defaults; individual flags below override the file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Shrink factor applied to the measured median half-width.
    #[arg(long)]
    shrink: Option<f64>,

    /// Integer upscale factor before boundary extraction.
    #[arg(long)]
    upscale: Option<u32>,

    /// Gaussian blur sigma on the upscaled field, in upscaled pixels.
    #[arg(long)]
    blur_sigma: Option<f32>,

    /// Minimum traced boundary length in points (at upscaled resolution).
    #[arg(long)]
    min_points: Option<usize>,

    /// Contour smoothing sigma in vertices.
    #[arg(long)]
    smooth_sigma: Option<f64>,

    /// Polygon simplification tolerance in pixels.
    #[arg(long)]
    tolerance: Option<f64>,

    /// Minimum vertex count for a simplified polygon to survive.
    #[arg(long)]
    min_vertices: Option<usize>,

    /// Minimum enclosed area in square pixels for a polygon to survive.
    #[arg(long)]
    min_area: Option<f64>,
}

impl CliTraceArgs {
    fn to_config(&self) -> CliResult<linework::VectorizeConfig> {
        let mut config = match &self.config {
            Some(path) => {
                let text = std::fs::read_to_string(path).map_err(|e| -> CliError {
                    format!("Failed to read config {}: {}", path.display(), e).into()
                })?;
                serde_json::from_str(&text).map_err(|e| -> CliError {
                    format!("Failed to parse config {}: {}", path.display(), e).into()
                })?
            }
            None => linework::VectorizeConfig::default(),
        };

        if let Some(v) = self.shrink {
            config.normalize.shrink = v;
        }
        if let Some(v) = self.upscale {
            config.extract.upscale = v;
        }
        if let Some(v) = self.blur_sigma {
            config.extract.blur_sigma = v;
        }
        if let Some(v) = self.min_points {
            config.extract.min_points = v;
        }
        if let Some(v) = self.smooth_sigma {
            config.smooth.sigma = v;
        }
        if let Some(v) = self.tolerance {
            config.simplify.tolerance = v;
        }
        if let Some(v) = self.min_vertices {
            config.simplify.min_vertices = v;
        }
        if let Some(v) = self.min_area {
            config.simplify.min_area = v;
        }

        Ok(config)
    }
}

#[derive(Debug, Clone, Args)]
struct CliMotifArgs {
    /// Path to write the motif SVG.
    #[arg(long)]
    out: PathBuf,

    /// Path to write an editable SVG with a caption block below the canvas.
    #[arg(long)]
    editable: Option<PathBuf>,

    /// First caption line of the editable document.
    #[arg(long, default_value = "")]
    line1: String,

    /// Second caption line of the editable document.
    #[arg(long, default_value = "")]
    line2: String,

    /// Stroke color of the motif group.
    #[arg(long, default_value = "#111111")]
    stroke: String,

    /// Stroke width in canvas units. Defaults to the built-in motif width.
    #[arg(long)]
    stroke_width: Option<f64>,
}

fn main() -> CliResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Trace(args) => run_trace(&args),
        Commands::Motif(args) => run_motif(&args),
    }
}

// ── trace ──────────────────────────────────────────────────────────────

fn run_trace(args: &CliTraceArgs) -> CliResult<()> {
    tracing::info!("Loading image: {}", args.image.display());

    let img = image::open(&args.image).map_err(|e| -> CliError {
        format!("Failed to open image {}: {}", args.image.display(), e).into()
    })?;
    let gray = img.to_luma8();
    let (w, h) = gray.dimensions();

    tracing::info!("Image size: {}x{}", w, h);

    let mask = linework::Mask::from_image(&gray);
    let config = args.to_config()?;
    let result = linework::vectorize(&mask, &config);

    tracing::info!("Traced {} outline(s)", result.outlines.len());

    let paths = result.path_data();
    let style = linework::SvgStyle::filled(&args.fill);

    let doc = linework::render_symbol_svg(&paths, w, h, &style);
    std::fs::write(&args.out, &doc)?;
    tracing::info!("Symbol SVG written to {}", args.out.display());

    if let Some(editable_path) = &args.editable {
        let doc = linework::render_editable_svg(&paths, w, h, &style, &args.line1, &args.line2);
        std::fs::write(editable_path, &doc)?;
        tracing::info!("Editable SVG written to {}", editable_path.display());
    }

    if let Some(json_path) = &args.json {
        let json = serde_json::to_string_pretty(&result)?;
        std::fs::write(json_path, &json)?;
        tracing::info!("Results written to {}", json_path.display());
    }

    Ok(())
}

// ── motif ──────────────────────────────────────────────────────────────

fn run_motif(args: &CliMotifArgs) -> CliResult<()> {
    let mut spec = linework::MotifSpec::default();
    if let Some(w) = args.stroke_width {
        spec.stroke_width = w;
    }

    let paths = spec.build_paths();
    tracing::info!("Motif geometry: {} path(s)", paths.len());

    let style = linework::SvgStyle::stroked(&args.stroke, spec.stroke_width);

    let doc = linework::render_symbol_svg(&paths, spec.width, spec.height, &style);
    std::fs::write(&args.out, &doc)?;
    tracing::info!("Motif SVG written to {}", args.out.display());

    if let Some(editable_path) = &args.editable {
        let doc = linework::render_editable_svg(
            &paths,
            spec.width,
            spec.height,
            &style,
            &args.line1,
            &args.line2,
        );
        std::fs::write(editable_path, &doc)?;
        tracing::info!("Editable SVG written to {}", editable_path.display());
    }

    Ok(())
}
