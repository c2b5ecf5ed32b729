//! Identifier assignment and unit conversion.

use eegconv_model::{DigitizerRecord, IndexBase, LandmarkEntry};

/// Assign identifiers to classified records and convert coordinates to
/// millimetres, in file order.
///
/// Cardinal landmarks carry their fixed anatomical code; `eeg` and `extra`
/// records each draw from an independent counter starting at `base`.
pub fn assign_identifiers(records: &[DigitizerRecord], base: IndexBase) -> Vec<LandmarkEntry> {
    let mut next_eeg = base.first();
    let mut next_extra = base.first();

    records
        .iter()
        .map(|record| {
            let identifier = match record {
                DigitizerRecord::Cardinal { label, .. } => label.identifier(),
                DigitizerRecord::Sensor { .. } => {
                    let id = next_eeg;
                    next_eeg += 1;
                    id
                }
                DigitizerRecord::Shape { .. } => {
                    let id = next_extra;
                    next_extra += 1;
                    id
                }
            };
            LandmarkEntry::new(record.category(), identifier, record.position().cm_to_mm())
        })
        .collect()
}
