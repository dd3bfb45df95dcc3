//! Writer/reader for the distance tables emitted per reaction path.
//!
//! Fixed 3-column CSV: `R_(2+2),R_(4+2),R_im`, one row per path point (or a
//! single row for the stationary-point variant), every value at 4 decimals.
//! Downstream plotting consumes these files by column name.

use crate::core::models::trajectory::DistanceTriple;
use std::io;
use std::path::Path;
use thiserror::Error;

/// Column names shared by the series and single-point tables.
pub const DISTANCE_HEADER: [&str; 3] = ["R_(2+2)", "R_(4+2)", "R_im"];

#[derive(Debug, Error)]
pub enum TableError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("expected 3 columns, found {found} in data row {row}")]
    WrongWidth { row: usize, found: usize },
    #[error("invalid float '{value}' in data row {row}")]
    InvalidFloat { row: usize, value: String },
}

/// Writes the full distance series, one row per reaction-path snapshot.
pub fn write_series(path: &Path, rows: &[DistanceTriple]) -> Result<(), TableError> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(DISTANCE_HEADER)?;
    for row in rows {
        writer.write_record(formatted(row))?;
    }
    writer.flush()?;
    Ok(())
}

/// Writes a single stationary point (transition state, product, or reactant)
/// as a one-row table under the shared header.
pub fn write_single_point(path: &Path, point: &DistanceTriple) -> Result<(), TableError> {
    write_series(path, std::slice::from_ref(point))
}

/// Reads a distance table back; the header row is validated by position
/// count only, since the column names are fixed at write time.
pub fn read_series(path: &Path) -> Result<Vec<DistanceTriple>, TableError> {
    // Flexible so a short row surfaces as WrongWidth with its position
    // instead of a generic record-length error.
    let mut reader = csv::ReaderBuilder::new().flexible(true).from_path(path)?;
    let mut rows = Vec::new();
    for (index, record) in reader.records().enumerate() {
        let record = record?;
        if record.len() != 3 {
            return Err(TableError::WrongWidth {
                row: index + 1,
                found: record.len(),
            });
        }
        let mut values = [0.0f64; 3];
        for (value, field) in values.iter_mut().zip(record.iter()) {
            *value = field.parse().map_err(|_| TableError::InvalidFloat {
                row: index + 1,
                value: field.to_string(),
            })?;
        }
        rows.push(DistanceTriple {
            r1: values[0],
            r2: values[1],
            r3: values[2],
        });
    }
    Ok(rows)
}

fn formatted(row: &DistanceTriple) -> [String; 3] {
    [
        format!("{:.4}", row.r1),
        format!("{:.4}", row.r2),
        format!("{:.4}", row.r3),
    ]
}
