//! Line-oriented batch geocoding
//!
//! Input is one address per line as `address|addressComplement|zipCode`,
//! trailing fields optional. Blank lines are skipped, and so are comments: a
//! `#` alone or followed by whitespace. `#3 Rue du Jeu` is an address.
//! Output is one JSON object per record.

use anyhow::{Context, Result};
use indicatif::ProgressBar;
use serde::Serialize;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use crate::config::defaults::{DEFAULT_PRECISION, FALLBACK_CENTER};
use crate::domain::GeocodeInput;
use crate::geocode::geocode;
use crate::geohash::{Proximity, encode};
use crate::geometry::map_center_or;

const FIELD_SEPARATOR: char = '|';
const UNGEOCODABLE: &str = "unable to calculate coordinates for this address";

/// One geocoded (or rejected) input line
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchRecord {
    pub line: usize,
    pub normalized_address: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub geohash: Option<String>,
    pub error: Option<String>,
}

#[derive(Debug, Clone)]
pub struct BatchOptions {
    pub precision: usize,
    /// Keep only records inside this area
    pub proximity: Option<Proximity>,
    pub fallback_center: (f64, f64),
}

impl Default for BatchOptions {
    fn default() -> Self {
        Self {
            precision: DEFAULT_PRECISION,
            proximity: None,
            fallback_center: FALLBACK_CENTER,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BatchSummary {
    /// Records read (blank and comment lines excluded)
    pub records: usize,
    pub located: usize,
    pub failed: usize,
    /// Located records dropped by the proximity filter
    pub filtered: usize,
    /// Map center of the located records that were written
    pub center: (f64, f64),
}

/// Parse one input line, `None` for blank and comment lines
pub fn parse_line(line: &str) -> Option<GeocodeInput> {
    let trimmed = line.trim();
    if trimmed.is_empty() || is_comment(trimmed) {
        return None;
    }

    let mut fields = line.splitn(3, FIELD_SEPARATOR).map(str::to_string);
    Some(GeocodeInput::new(fields.next(), fields.next(), fields.next()))
}

fn is_comment(line: &str) -> bool {
    line.strip_prefix('#')
        .is_some_and(|rest| rest.is_empty() || rest.starts_with(char::is_whitespace))
}

/// Geocode a single record; an unusable address becomes an error record
pub fn process_record(line: usize, input: &GeocodeInput, precision: usize) -> Result<BatchRecord> {
    let Some(result) = geocode(input) else {
        return Ok(BatchRecord {
            line,
            normalized_address: None,
            latitude: None,
            longitude: None,
            geohash: None,
            error: Some(UNGEOCODABLE.to_string()),
        });
    };

    let geohash = encode(result.latitude, result.longitude, precision)
        .with_context(|| format!("Failed to encode geohash for line {}", line))?;

    Ok(BatchRecord {
        line,
        latitude: Some(result.latitude),
        longitude: Some(result.longitude),
        normalized_address: Some(result.normalized_address),
        geohash: Some(geohash),
        error: None,
    })
}

/// Geocode every record from `reader` and write JSON lines to `writer`
pub fn run_batch<R: BufRead, W: Write>(
    reader: R,
    mut writer: W,
    options: &BatchOptions,
    progress: &ProgressBar,
) -> Result<BatchSummary> {
    let mut records = 0;
    let mut located = 0;
    let mut failed = 0;
    let mut filtered = 0;
    let mut points = Vec::new();

    for (index, line) in reader.lines().enumerate() {
        let line_no = index + 1;
        let line = line.with_context(|| format!("Failed to read line {}", line_no))?;
        let Some(input) = parse_line(&line) else {
            continue;
        };

        records += 1;
        progress.inc(1);

        let record = process_record(line_no, &input, options.precision)?;
        match (&record.geohash, record.latitude, record.longitude) {
            (Some(hash), Some(lat), Some(lon)) => {
                located += 1;
                if let Some(area) = &options.proximity
                    && !area.contains(hash)
                {
                    filtered += 1;
                    continue;
                }
                points.push((lat, lon));
            }
            _ => failed += 1,
        }

        serde_json::to_writer(&mut writer, &record)
            .with_context(|| format!("Failed to write record for line {}", line_no))?;
        writer.write_all(b"\n")?;
    }

    writer.flush()?;

    Ok(BatchSummary {
        records,
        located,
        failed,
        filtered,
        center: map_center_or(&points, options.fallback_center),
    })
}

/// Run a batch from a file, writing to `output` or stdout
pub fn run_batch_file(
    input: &Path,
    output: Option<&Path>,
    options: &BatchOptions,
    progress: &ProgressBar,
) -> Result<BatchSummary> {
    let file = File::open(input)
        .with_context(|| format!("Failed to open batch file: {}", input.display()))?;
    let reader = BufReader::new(file);

    match output {
        Some(path) => {
            let out = File::create(path)
                .with_context(|| format!("Failed to create output file: {}", path.display()))?;
            run_batch(reader, BufWriter::new(out), options, progress)
        }
        None => {
            let stdout = std::io::stdout();
            run_batch(reader, stdout.lock(), options, progress)
        }
    }
}
