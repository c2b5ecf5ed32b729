//! Position conversion entry point.

use std::path::Path;

use tracing::{debug, info};

use eegconv_model::{PointCategory, PositionOptions};

use crate::classify::assign_identifiers;
use crate::error::{PositionError, Result};
use crate::reader::read_positions;
use crate::writer::{render_landmarks, write_atomic};

/// Convert a Polhemus digitizer export to a landmark file.
///
/// Refuses to replace an existing destination unless
/// `options.overwrite` is set; on any error the destination is left exactly
/// as it was.
///
/// # Errors
///
/// - [`PositionError::DestinationExists`] when the output path is present
///   and overwrite is not permitted.
/// - [`PositionError::MalformedRecord`] for an unparseable line, a wrong
///   field count, or an unrecognized landmark code.
/// - I/O and read errors are propagated unchanged.
pub fn convert_positions(input: &Path, output: &Path, options: &PositionOptions) -> Result<()> {
    if output.exists() && !options.overwrite {
        return Err(PositionError::destination_exists(output));
    }

    let records = read_positions(input)?;
    let entries = assign_identifiers(&records, options.index_base);

    let cardinal = entries
        .iter()
        .filter(|e| e.category == PointCategory::Cardinal)
        .count();
    let eeg = entries
        .iter()
        .filter(|e| e.category == PointCategory::Eeg)
        .count();
    let extra = entries.len() - cardinal - eeg;
    debug!(cardinal, eeg, extra, "classified digitizer records");

    let content = render_landmarks(input, output, &entries);
    write_atomic(output, &content)?;

    info!(
        input = %input.display(),
        output = %output.display(),
        entries = entries.len(),
        "position conversion complete"
    );
    Ok(())
}
