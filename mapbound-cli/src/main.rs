//! mapbound CLI - plan static map images from encoded boundaries

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use mapbound::prelude::*;

#[derive(Parser)]
#[command(name = "mapbound")]
#[command(author, version, about = "Plan static map images from encoded polygon boundaries", long_about = None)]
struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Plan a static map request for an encoded boundary
    Plan {
        /// Encoded polyline of the drawn boundary
        encoded: String,
        /// Preset profile: standard or preview
        #[arg(long, default_value = "standard")]
        profile: StaticMapProfile,
        /// JSON options file; overrides the profile
        #[arg(long)]
        config: Option<PathBuf>,
        /// Image size as WIDTHxHEIGHT
        #[arg(long)]
        size: Option<ImageSize>,
        /// Pixel density (1, 2 or 4)
        #[arg(long)]
        scale: Option<u8>,
        /// Padding in pixels around the boundary
        #[arg(long)]
        padding: Option<u32>,
        /// roadmap, satellite, terrain or hybrid
        #[arg(long)]
        map_type: Option<MapType>,
        /// API key; when given the full request URL is printed
        #[arg(long, env = "MAPBOUND_API_KEY")]
        key: Option<String>,
        /// Print the plan as JSON
        #[arg(long)]
        json: bool,
    },
    /// Decode an encoded polyline into points
    Decode {
        encoded: String,
        /// Print the points as JSON
        #[arg(long)]
        json: bool,
    },
    /// Encode `lat,lng` points into a polyline
    Encode {
        #[arg(required = true, allow_hyphen_values = true)]
        points: Vec<LatLng>,
        /// Append the first point if the ring is open
        #[arg(long)]
        close: bool,
    },
    /// Print the bounding box of an encoded polyline
    Bounds { encoded: String },
    /// Find the best zoom and center for an encoded polyline in a viewport
    Fit {
        encoded: String,
        #[arg(long, default_value = "1280")]
        width: u32,
        #[arg(long, default_value = "1280")]
        height: u32,
        #[arg(long, default_value = "100")]
        padding: u32,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    match cli.command {
        Commands::Plan {
            encoded,
            profile,
            config,
            size,
            scale,
            padding,
            map_type,
            key,
            json,
        } => {
            let mut options = match config {
                Some(path) => load_options(&path)?,
                None => profile.resolve(),
            };
            if let Some(size) = size {
                options.size = size;
            }
            if let Some(scale) = scale {
                options.scale = scale;
            }
            if let Some(padding) = padding {
                options.padding = padding;
            }
            if let Some(map_type) = map_type {
                options.map_type = map_type;
            }
            options.validate().context("Invalid static map options")?;

            let Some(request) = StaticMapRequest::plan(&encoded, &options) else {
                bail!("Encoded path is empty");
            };

            let url = key
                .map(|key| request.to_url(&GoogleStaticMaps::new(), &key))
                .transpose()
                .context("Failed to build request URL")?;

            if json {
                let mut value = serde_json::to_value(&request)?;
                if let Some(url) = &url {
                    value["url"] = serde_json::Value::String(url.to_string());
                }
                println!("{}", serde_json::to_string_pretty(&value)?);
                return Ok(());
            }

            println!("Points: {}", request.point_count);
            match &request.view {
                Some(fit) => {
                    println!("Center: {}", fit.center.display_fixed(6));
                    println!("Zoom: {}", fit.zoom);
                }
                None => println!("Center: (not fitted, map service will frame the path)"),
            }
            println!("Path: {}", request.path);
            if let Some(link) = request.maps_link(options.default_link_zoom) {
                println!("Link: {}", link);
            }
            if let Some(url) = url {
                println!("URL: {}", url);
            }
        }
        Commands::Decode { encoded, json } => {
            let points = decode_polyline(encoded.trim());
            if json {
                println!("{}", serde_json::to_string_pretty(&points)?);
            } else {
                for point in points {
                    println!("{}", point);
                }
            }
        }
        Commands::Encode { points, close } => {
            let mut polyline = Polyline::new(points);
            if close && !polyline.close() {
                log::info!("ring already closed or too short, nothing appended");
            }
            println!("{}", polyline.encode());
        }
        Commands::Bounds { encoded } => {
            let points = decode_polyline(encoded.trim());
            if points.is_empty() {
                bail!("No points could be decoded");
            }
            let [south, west, north, east] = bounds_from_points(&points).to_array();
            println!("south={} west={} north={} east={}", south, west, north, east);
        }
        Commands::Fit {
            encoded,
            width,
            height,
            padding,
        } => {
            let points = decode_polyline(encoded.trim());
            if points.len() < 2 {
                bail!("At least two points are needed to fit a view");
            }
            let bounds = bounds_from_points(&points);
            match Viewport::new(width, height, padding).fit(&bounds, MAX_ZOOM) {
                Some(fit) => {
                    println!("zoom={}", fit.zoom);
                    println!("center={}", fit.center);
                }
                None => println!(
                    "longitude span {} is outside (0, 180); keep the default view",
                    bounds.span().lng
                ),
            }
        }
    }

    Ok(())
}

// ─── Helpers ────────────────────────────────────────────────────────────

fn setup_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_target(false)
        .init();
}

fn load_options(path: &PathBuf) -> Result<StaticMapOptions> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    StaticMapOptions::from_json(&json)
        .with_context(|| format!("Failed to parse options from {}", path.display()))
}
