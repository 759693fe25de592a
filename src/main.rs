use anyhow::{Context, Result, bail};
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use std::time::Instant;

use meetup_geo::batch::{BatchOptions, run_batch_file};
use meetup_geo::config::FileConfig;
use meetup_geo::config::defaults::MAX_PRECISION;
use meetup_geo::domain::{GeocodeInput, format_coordinate};
use meetup_geo::geocode::geocode;
use meetup_geo::geohash::{Proximity, encode};

/// Turn addresses into stable coordinates and geohashes
///
/// Examples:
///   # Geocode an address with its zip code
///   meetup-geo -a "1600 Pennsylvania Ave" -z 20500
///
///   # Encode known coordinates with a shorter geohash
///   meetup-geo --lat 48.8566 --lon 2.3522 -p 6
///
///   # Geocode a file of `address|complement|zip` lines into JSON lines
///   meetup-geo --batch sessions.txt -o sessions.jsonl
///
///   # Keep only addresses near a geohash
///   meetup-geo --batch sessions.txt --near u09tv
#[derive(Parser, Debug)]
#[command(name = "meetup-geo")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to config file (optional, auto-searches meetup-geo.toml if not provided)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Street address
    #[arg(short = 'a', long)]
    address: Option<String>,

    /// Address complement (apartment, floor, building)
    #[arg(long)]
    complement: Option<String>,

    /// Zip / postal code
    #[arg(short = 'z', long)]
    zip: Option<String>,

    /// Latitude for direct geohash encoding (use with --lon)
    #[arg(long, requires = "lon", allow_hyphen_values = true)]
    lat: Option<f64>,

    /// Longitude for direct geohash encoding (use with --lat)
    #[arg(long, requires = "lat", allow_hyphen_values = true)]
    lon: Option<f64>,

    /// Geohash length in characters [default: 9]
    #[arg(short = 'p', long, value_parser = clap::value_parser!(u8).range(1..=20))]
    precision: Option<u8>,

    /// File with one `address|complement|zip` record per line
    #[arg(long)]
    batch: Option<PathBuf>,

    /// Output file for batch results (defaults to stdout)
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,

    /// Only keep batch records near this geohash
    #[arg(long)]
    near: Option<String>,

    /// Cell size used with --near, in geohash characters [default: 5]
    #[arg(long)]
    near_precision: Option<usize>,

    /// Print results as JSON
    #[arg(long)]
    json: bool,

    /// Enable verbose logging
    #[arg(short = 'v', long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let file_config = match args.config {
        Some(ref config_path) => FileConfig::from_path(config_path)?,
        None => FileConfig::load().unwrap_or_default(),
    };

    let precision = file_config.resolve_precision(args.precision.map(usize::from));
    if precision == 0 || precision > MAX_PRECISION {
        bail!("Precision must be between 1 and {}", MAX_PRECISION);
    }
    let near_precision = file_config.resolve_proximity_precision(args.near_precision);
    let verbose = args.verbose || file_config.verbose;
    let json = args.json || file_config.json;
    let output = args.output.clone().or_else(|| file_config.output.clone());

    if verbose {
        eprintln!("Configuration:");
        eprintln!("  Precision: {}", precision);
        if let Some(ref near) = args.near {
            eprintln!("  Near: {} ({} chars)", near, near_precision);
        }
        if let Some(ref out) = output {
            eprintln!("  Output: {}", out.display());
        }
        eprintln!();
    }

    if let Some(ref batch) = args.batch {
        let proximity = args
            .near
            .as_deref()
            .map(|hash| Proximity::around(hash, near_precision))
            .transpose()
            .context("Invalid --near geohash")?;

        let options = BatchOptions {
            precision,
            proximity,
            fallback_center: file_config.fallback_center(),
        };

        let spinner = create_spinner("Geocoding addresses...");
        let start = Instant::now();
        let summary = run_batch_file(batch, output.as_deref(), &options, &spinner)
            .context("Batch geocoding failed")?;
        spinner.finish_with_message(format!(
            "Geocoded {}/{} records ({} failed, {} outside area) [{:.1}s]",
            summary.located - summary.filtered,
            summary.records,
            summary.failed,
            summary.filtered,
            start.elapsed().as_secs_f32()
        ));

        let (lat, lon) = summary.center;
        eprintln!(
            "Map center: {}°, {}°",
            format_coordinate(Some(lat)),
            format_coordinate(Some(lon))
        );
        return Ok(());
    }

    if let (Some(lat), Some(lon)) = (args.lat, args.lon) {
        let geohash = encode(lat, lon, precision).context("Failed to encode coordinates")?;
        if json {
            println!(
                "{}",
                serde_json::json!({ "latitude": lat, "longitude": lon, "geohash": geohash })
            );
        } else {
            println!("{}", geohash);
        }
        return Ok(());
    }

    let input = GeocodeInput::new(
        args.address.clone().or_else(|| file_config.address.clone()),
        args.complement
            .clone()
            .or_else(|| file_config.address_complement.clone()),
        args.zip.clone().or_else(|| file_config.zip_code.clone()),
    );

    if input.parts().iter().all(Option::is_none) {
        bail!("Must provide an address (--address/--zip), --lat and --lon, or --batch");
    }

    let Some(result) = geocode(&input) else {
        bail!("Unable to calculate coordinates for this address");
    };
    let geohash = encode(result.latitude, result.longitude, precision)
        .context("Failed to encode geohash")?;

    if json {
        let mut value = serde_json::to_value(&result)?;
        value["geohash"] = serde_json::Value::String(geohash);
        println!("{}", value);
    } else {
        println!("Address:     {}", result.normalized_address);
        println!("Coordinates: {}", result);
        println!("Geohash:     {}", geohash);
    }

    Ok(())
}

fn create_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::with_template("{spinner:.green} {msg} ({pos})")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"]),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(std::time::Duration::from_millis(80));
    pb
}
