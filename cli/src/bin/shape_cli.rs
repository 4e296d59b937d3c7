use clap::{Parser, Subcommand};
use cli::{ConfigFile, DetectRequest};
use color_eyre::eyre::Result;
use shape_detect::{DetectionResult, DetectorConfig, ShapeKind};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{self, EnvFilter};

#[derive(Parser)]
#[command(author, version, about = "Detect and classify closed shapes in raster images", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Detect shapes in an image and emit the result as JSON
    Detect {
        /// Path to the input image (PNG, JPEG, BMP, ...)
        #[arg(short, long)]
        input: PathBuf,
        /// Write the result JSON here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Also export the shapes as GeoJSON
        #[arg(long)]
        geojson: Option<PathBuf>,
        /// Also render the detected outlines over the input image
        #[arg(long)]
        overlay: Option<PathBuf>,
        /// Detector configuration overrides (.toml or .json)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// List the labels a shape can carry
    Labels,
    /// Print the JSON schema of the detection result
    Schema,
    /// Print the default detector configuration as TOML
    Config,
}

fn main() -> Result<()> {
    color_eyre::install()?;

    // Logs go to stderr so stdout stays clean for JSON output.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info"))
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Detect {
            input,
            output,
            geojson,
            overlay,
            config,
        } => {
            info!("Detecting shapes in {}", input.display());
            let print_to_stdout = output.is_none();
            let request = DetectRequest {
                input,
                output,
                geojson,
                overlay,
                config,
            };
            let result = request.run()?;

            for (i, shape) in result.shapes.iter().enumerate() {
                info!(
                    "#{} {} at ({}, {}), {} vertices{}",
                    i + 1,
                    shape.name,
                    shape.center_x,
                    shape.center_y,
                    shape.points.len(),
                    if shape.is_inner { ", inner" } else { "" }
                );
            }

            if print_to_stdout {
                println!("{}", result.to_json_string()?);
            }
        }
        Commands::Labels => {
            for label in ShapeKind::labels() {
                println!("{}", label);
            }
        }
        Commands::Schema => {
            println!("{}", serde_json::to_string_pretty(&DetectionResult::schema())?);
        }
        Commands::Config => {
            print!("{}", DetectorConfig::default().to_toml()?);
        }
    }

    Ok(())
}
