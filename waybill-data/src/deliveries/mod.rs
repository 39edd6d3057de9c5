//! CSV delivery ingestion.
//!
//! Files carry a header row naming at least the columns
//! `id,lat,lon,name,weight,deadline`, in any order. Cells are trimmed. Rows
//! that fail to parse or validate are skipped with a `warn!` diagnostic and
//! recorded in [`IngestReport::skipped`]; only I/O failures and a missing
//! column abort ingestion.

mod record;

use std::collections::HashSet;
use std::io::Read;

use camino::{Utf8Path, Utf8PathBuf};
use log::{info, warn};
use thiserror::Error;
use waybill_core::{Delivery, DeliveryId};

pub use record::RowError;
use record::{COLUMNS, RawRow};

use crate::fs::open_utf8_file;

/// A row left out of the report, with its 1-based line number.
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedRow {
    /// Line on which the row starts.
    pub line: u64,
    /// Why it was skipped.
    pub reason: RowError,
}

/// Result of reading a delivery file.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct IngestReport {
    /// Valid deliveries in file order.
    pub deliveries: Vec<Delivery>,
    /// Rows that were skipped.
    pub skipped: Vec<SkippedRow>,
}

impl IngestReport {
    fn skip(&mut self, line: u64, reason: RowError) {
        warn!("Skipping delivery row at line {line}: {reason}");
        self.skipped.push(SkippedRow { line, reason });
    }
}

/// Errors that abort ingestion.
#[derive(Debug, Error)]
pub enum IngestError {
    /// The file could not be opened.
    #[error("failed to open delivery file at {path}")]
    Open {
        /// Requested path.
        path: Utf8PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },
    /// The stream failed while reading.
    #[error("failed to read delivery records")]
    Read {
        /// Underlying CSV error.
        #[source]
        source: csv::Error,
    },
    /// The header row lacks a required column.
    #[error("delivery file is missing the `{column}` column")]
    MissingColumn {
        /// Absent column.
        column: &'static str,
    },
}

/// Read deliveries from any CSV stream.
///
/// # Examples
/// ```
/// use waybill_data::read_deliveries;
///
/// let csv = "id,lat,lon,name,weight,deadline\n\
///            1,-8.05428,-34.8813,Recife,120,2\n\
///            2,oops,-34.8813,Recife,120,2\n";
/// let report = read_deliveries(csv.as_bytes()).expect("readable");
/// assert_eq!(report.deliveries.len(), 1);
/// assert_eq!(report.skipped.len(), 1);
/// assert_eq!(report.skipped[0].line, 3);
/// ```
pub fn read_deliveries<R: Read>(reader: R) -> Result<IngestReport, IngestError> {
    read_deliveries_excluding(reader, std::iter::empty())
}

/// Read deliveries from a CSV stream, treating every id in `taken` as
/// already used.
///
/// Rows reusing one of those ids are skipped as [`RowError::DuplicateId`],
/// exactly like a repeat within the file.
///
/// # Examples
/// ```
/// use waybill_data::{RowError, read_deliveries_excluding};
///
/// let csv = "id,lat,lon,name,weight,deadline\n\
///            1,-8.05428,-34.8813,Recife,120,2\n\
///            2,-8.0089,-34.8553,Olinda,80,2\n";
/// let report = read_deliveries_excluding(csv.as_bytes(), [1]).expect("readable");
/// assert_eq!(report.deliveries.len(), 1);
/// assert_eq!(report.skipped[0].reason, RowError::DuplicateId { id: 1 });
/// ```
pub fn read_deliveries_excluding<R, I>(reader: R, taken: I) -> Result<IngestReport, IngestError>
where
    R: Read,
    I: IntoIterator<Item = DeliveryId>,
{
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader);
    let headers = reader
        .headers()
        .map_err(|source| IngestError::Read { source })?
        .clone();
    if let Some(column) = COLUMNS
        .into_iter()
        .find(|column| !headers.iter().any(|header| header == *column))
    {
        return Err(IngestError::MissingColumn { column });
    }

    let mut report = IngestReport::default();
    let mut seen: HashSet<DeliveryId> = taken.into_iter().collect();
    for result in reader.records() {
        let record = match result {
            Ok(record) => record,
            Err(err) if err.is_io_error() => return Err(IngestError::Read { source: err }),
            Err(err) => {
                let line = err.position().map_or(0, csv::Position::line);
                report.skip(
                    line,
                    RowError::Malformed {
                        message: err.to_string(),
                    },
                );
                continue;
            }
        };
        let line = record.position().map_or(0, csv::Position::line);
        let parsed = record
            .deserialize::<RawRow>(Some(&headers))
            .map_err(|err| RowError::Malformed {
                message: err.to_string(),
            })
            .and_then(RawRow::into_delivery);
        match parsed {
            Ok(delivery) if !seen.insert(delivery.id()) => {
                report.skip(line, RowError::DuplicateId { id: delivery.id() });
            }
            Ok(delivery) => report.deliveries.push(delivery),
            Err(reason) => report.skip(line, reason),
        }
    }
    info!(
        "Read {} deliveries ({} rows skipped)",
        report.deliveries.len(),
        report.skipped.len()
    );
    Ok(report)
}

/// Read deliveries from a CSV file.
pub fn load_deliveries(path: &Utf8Path) -> Result<IngestReport, IngestError> {
    load_deliveries_excluding(path, std::iter::empty())
}

/// Read deliveries from a CSV file, skipping rows that reuse an id in `taken`.
pub fn load_deliveries_excluding<I>(path: &Utf8Path, taken: I) -> Result<IngestReport, IngestError>
where
    I: IntoIterator<Item = DeliveryId>,
{
    let file = open_utf8_file(path).map_err(|source| IngestError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    read_deliveries_excluding(file, taken)
}
