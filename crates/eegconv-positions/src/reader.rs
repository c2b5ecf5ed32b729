//! Digitizer export parsing.
//!
//! A `.pos` export is tab-delimited text: one format-header line followed by
//! data lines of either 4 fields (`CODE X Y Z`, a fiducial landmark) or
//! 5 fields (`ID NAME X Y Z`, a sensor when NAME is non-empty, otherwise a
//! head-shape point).

use std::path::Path;

use csv::StringRecord;

use eegconv_model::{CardinalLabel, DigitizerRecord, Position};

use crate::error::{PositionError, Result};

/// Read and classify all records of a digitizer export.
///
/// The first line is the format header and is discarded. Records are
/// returned in file order.
pub fn read_positions(path: &Path) -> Result<Vec<DigitizerRecord>> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .map_err(|e| PositionError::read(path, e))?;

    let mut records = Vec::new();

    for (idx, row) in reader.records().enumerate() {
        let row = row.map_err(|e| PositionError::read(path, e))?;
        // Physical 1-based line number; the format header occupies line 1.
        let line = (idx as u64) + 1;
        if idx == 0 {
            continue;
        }
        records.push(parse_record(&row, path, line)?);
    }

    Ok(records)
}

/// Classify a single data row by arity.
fn parse_record(row: &StringRecord, path: &Path, line: u64) -> Result<DigitizerRecord> {
    match row.len() {
        4 => {
            let label: CardinalLabel = row[0]
                .parse()
                .map_err(|e| PositionError::malformed(path, line, format!("{e}")))?;
            let position = parse_position(row, 1, path, line)?;
            Ok(DigitizerRecord::Cardinal { label, position })
        }
        5 => {
            let name = row[1].trim();
            let position = parse_position(row, 2, path, line)?;
            if name.is_empty() {
                Ok(DigitizerRecord::Shape { position })
            } else {
                Ok(DigitizerRecord::Sensor {
                    name: name.to_string(),
                    position,
                })
            }
        }
        n => Err(PositionError::malformed(
            path,
            line,
            format!("expected 4 or 5 fields, got {n}"),
        )),
    }
}

/// Parse the three coordinate fields starting at `offset`.
fn parse_position(row: &StringRecord, offset: usize, path: &Path, line: u64) -> Result<Position> {
    let mut coords = [0.0f64; 3];
    for (slot, coord) in coords.iter_mut().enumerate() {
        let field = &row[offset + slot];
        *coord = field.trim().parse().map_err(|_| {
            PositionError::malformed(path, line, format!("invalid coordinate: {field:?}"))
        })?;
    }
    Ok(Position::new(coords[0], coords[1], coords[2]))
}
