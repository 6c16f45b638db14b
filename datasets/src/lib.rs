//! `arbor-datasets` turns CSV files into [`arbor::Table`]s and generates synthetic tables for
//! tests and benchmarks.
//!
//! ## Input format
//!
//! * comma separated fields, one sample per line
//! * every column except the last one is a numeric feature, the last column is the class label
//! * an optional header line; the first line is treated as header if any of its fields is not
//!   a number, and its names (without the label column) become the feature names
//! * files ending in `.gz` are decompressed on the fly
//!
//! ```no_run
//! let table = arbor_datasets::load_csv("iris.csv.gz")?;
//! let (train, test) = table.split_with_ratio(0.8)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
use std::fs::File;
use std::io::Read;
use std::path::Path;

use arbor::Table;
use csv::{ReaderBuilder, StringRecord};
use flate2::read::GzDecoder;
use tracing::{debug, info, instrument};

mod error;
pub mod generate;

pub use error::{Error, Result};

/// Read a table from the CSV file at `path`
///
/// ### Errors
///
/// Fails with [`Error::Io`] if the file can not be opened, and with the errors of
/// [`table_from_reader`] if its content is invalid.
#[instrument(skip_all, fields(path = %path.as_ref().display()))]
pub fn load_csv(path: impl AsRef<Path>) -> Result<Table<f64>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let compressed = path.extension().map_or(false, |ext| ext == "gz");
    debug!(compressed, "opened CSV file");

    if compressed {
        table_from_reader(GzDecoder::new(file))
    } else {
        table_from_reader(file)
    }
}

/// Parse a table from any CSV source
///
/// ### Errors
///
/// * [`Error::Csv`] for framing errors, e.g. rows of different lengths
/// * [`Error::MalformedInput`] for cells which are not finite numbers
/// * [`Error::TooFewColumns`] if a row has no feature column
/// * [`Error::EmptyDataset`] if there is no data row
pub fn table_from_reader<R: Read>(reader: R) -> Result<Table<f64>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .delimiter(b',')
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut header = None;
    let mut rows = Vec::new();
    let mut targets = Vec::new();

    for (idx, record) in reader.records().enumerate() {
        let record = record?;
        let line = record.position().map_or(idx as u64 + 1, |pos| pos.line());

        if record.len() < 2 {
            return Err(Error::TooFewColumns {
                line,
                columns: record.len(),
            });
        }

        if idx == 0 && is_header(&record) {
            header = Some(
                record
                    .iter()
                    .take(record.len() - 1)
                    .map(str::to_string)
                    .collect::<Vec<_>>(),
            );
            continue;
        }

        let mut values = parse_record(&record, line)?;
        targets.push(values.pop().unwrap_or_default());
        rows.push(values);
    }

    if rows.is_empty() {
        return Err(Error::EmptyDataset);
    }

    let has_header = header.is_some();
    let mut table = Table::from_rows(rows, targets)?;
    if let Some(names) = header {
        table = table.with_feature_names(names);
    }

    info!(
        nsamples = table.nsamples(),
        nfeatures = table.nfeatures(),
        has_header,
        "table loaded"
    );

    Ok(table)
}

fn is_header(record: &StringRecord) -> bool {
    record.iter().any(|field| field.parse::<f64>().is_err())
}

fn parse_record(record: &StringRecord, line: u64) -> Result<Vec<f64>> {
    record
        .iter()
        .enumerate()
        .map(|(column, field)| match field.parse::<f64>() {
            Ok(value) if value.is_finite() => Ok(value),
            _ => Err(Error::MalformedInput {
                line,
                column,
                value: field.to_string(),
            }),
        })
        .collect()
}
