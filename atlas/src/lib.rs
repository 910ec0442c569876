pub mod error;
pub use error::*;

use std::{fs::File, io::Read, path::Path};

use csv::{ReaderBuilder, StringRecord, Trim};
use rusty_rocks::{Dataset, Sample};
use tracing::{debug, info, warn};

const ROCKS: &str = "rocks";
const PLACE: &str = "place";
const ID: &str = "id";
const LATITUDE: &str = "latitude";
const LONGITUDE: &str = "longitude";

/// Result of reading one CSV file: the kept samples and the rows that were
/// dropped, by 1-based row number.
#[derive(Debug, Default)]
pub struct Ingest {
    pub dataset: Dataset,
    pub skipped: Vec<(usize, RowError)>,
}

/// Column positions, looked up by trimmed, lower-cased header name.
struct Columns {
    rocks: Option<usize>,
    place: Option<usize>,
    id: Option<usize>,
    latitude: Option<usize>,
    longitude: Option<usize>,
}

impl Columns {
    fn from_headers(headers: &StringRecord) -> Self {
        let normalized = headers
            .iter()
            .map(|h| h.trim().to_lowercase())
            .collect::<Vec<_>>();
        debug!(?normalized, "csv headers");
        let find = |name: &str| normalized.iter().position(|h| h == name);
        Columns {
            rocks: find(ROCKS),
            place: find(PLACE),
            id: find(ID),
            latitude: find(LATITUDE),
            longitude: find(LONGITUDE),
        }
    }
}

fn field(record: &StringRecord, column: Option<usize>) -> &str {
    column.and_then(|i| record.get(i)).map_or("", str::trim)
}

/// Parse a coordinate and require it to lie within `-limit..=limit`.
/// `NaN` and the infinities parse as floats but are rejected here.
fn coordinate(
    record: &StringRecord,
    column: Option<usize>,
    name: &'static str,
    limit: f64,
) -> Result<f64, RowError> {
    let value = field(record, column);
    match value.parse::<f64>() {
        Ok(v) if v.is_finite() && v.abs() <= limit => Ok(v),
        _ => Err(RowError::BadCoordinate {
            column: name,
            value: value.to_owned(),
        }),
    }
}

fn to_sample(record: &StringRecord, columns: &Columns, row: usize) -> Result<Sample, RowError> {
    let rock = field(record, columns.rocks);
    let place = field(record, columns.place);
    let id = match field(record, columns.id) {
        "" => row.to_string(),
        id => id.to_owned(),
    };

    let latitude = coordinate(record, columns.latitude, LATITUDE, 90.0)?;
    let longitude = coordinate(record, columns.longitude, LONGITUDE, 180.0)?;

    if rock.is_empty() {
        return Err(RowError::EmptyRock);
    }
    // a zero in either axis marks a row whose position was never filled in
    if latitude == 0.0 || longitude == 0.0 {
        return Err(RowError::ZeroCoordinate);
    }

    Ok(Sample::new(id, rock, place, latitude, longitude))
}

/// Read rock samples from CSV text with a header row.
///
/// Headers are matched case-insensitively and ignoring surrounding spaces.
/// Rows without a rock name, with a zero coordinate or with a coordinate
/// that is not a finite number within range are skipped and reported in [Ingest::skipped].
pub fn read_samples<R: Read>(reader: R) -> Result<Ingest, AtlasError> {
    let mut reader = ReaderBuilder::new()
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);
    let columns = Columns::from_headers(reader.headers()?);

    let mut samples = Vec::new();
    let mut skipped = Vec::new();
    for (row, record) in (1..).zip(reader.records()) {
        let res = record
            .map_err(|e| RowError::Unreadable(e.to_string()))
            .and_then(|record| to_sample(&record, &columns, row));
        match res {
            Ok(sample) => samples.push(sample),
            Err(err) => {
                warn!(row, "skipping row: {err}");
                skipped.push((row, err));
            }
        }
    }

    let dataset = samples.into_iter().collect::<Dataset>();
    info!(
        loaded = dataset.len(),
        skipped = skipped.len(),
        "rock locations read"
    );
    Ok(Ingest { dataset, skipped })
}

pub fn load_csv(path: impl AsRef<Path>) -> Result<Ingest, AtlasError> {
    let path = path.as_ref();
    info!(path = %path.display(), "loading rock data");
    read_samples(File::open(path)?)
}

/// Like [load_csv], but a missing or unreadable file gives an empty dataset.
pub fn load_csv_or_empty(path: impl AsRef<Path>) -> Dataset {
    let path = path.as_ref();
    match load_csv(path) {
        Ok(ingest) => ingest.dataset,
        Err(err) => {
            warn!(path = %path.display(), "no rock data: {err}");
            Dataset::empty()
        }
    }
}
