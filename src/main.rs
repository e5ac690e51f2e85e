use anyhow::Context;
use camera_ring::{
    generate_ring, CameraLocation, ConfigurationManager, CsvFormatter, GeoJsonFormatter, GeoPoint,
    OutputFormat, TextFormatter,
};
use clap::Parser;
use log::{debug, error};
use std::path::PathBuf;
use std::process::ExitCode;

/// Print a ring of camera points around a map location
#[derive(Debug, Parser)]
#[command(name = "camera-ring", version)]
struct Cli {
    /// Marker longitude (degrees)
    #[arg(long, allow_hyphen_values = true)]
    lon: f64,

    /// Marker latitude (degrees)
    #[arg(long, allow_hyphen_values = true)]
    lat: f64,

    /// Ground altitude at the marker (meters)
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    ground: f64,

    /// Marker height above ground; defaults to the configured marker height
    #[arg(long)]
    height: Option<f64>,

    /// Ring altitude, overriding marker target plus configured offset
    #[arg(long, allow_hyphen_values = true)]
    altitude: Option<f64>,

    /// Ring radius (meters)
    #[arg(long)]
    radius: Option<f64>,

    /// Points on the ring
    #[arg(long)]
    points: Option<usize>,

    /// Owner id used as the point id prefix
    #[arg(long, default_value = "loc-1")]
    owner: String,

    /// JSON file with ring defaults
    #[arg(long)]
    config: Option<PathBuf>,

    /// geojson, text or csv
    #[arg(long, default_value_t = OutputFormat::GeoJson)]
    format: OutputFormat,

    /// Pretty-print GeoJSON
    #[arg(long)]
    pretty: bool,
}

fn run(cli: Cli) -> anyhow::Result<String> {
    let manager = match &cli.config {
        Some(path) => ConfigurationManager::from_file(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => ConfigurationManager::new(),
    };
    let config = manager.config();

    let height = cli.height.unwrap_or(config.default_height_m);
    let location = CameraLocation::new(cli.owner, GeoPoint::new(cli.lon, cli.lat, cli.ground), height);

    let mut request = location.ring_request(config);
    if let Some(radius) = cli.radius {
        request.radius_meters = radius;
    }
    if let Some(points) = cli.points {
        request.point_count = points;
    }
    if let Some(altitude) = cli.altitude {
        request.altitude = altitude;
    }
    debug!("ring request: {:?}", request);

    let ring = generate_ring(&request).context("generating ring")?;

    let output = match cli.format {
        OutputFormat::GeoJson => GeoJsonFormatter { pretty: cli.pretty }.format(&ring)?,
        OutputFormat::Text => TextFormatter::new().format_text(&ring),
        OutputFormat::Csv => CsvFormatter::new().format_csv(&ring)?,
    };
    Ok(output)
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    match run(Cli::parse()) {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("{:#}", err);
            ExitCode::FAILURE
        }
    }
}
