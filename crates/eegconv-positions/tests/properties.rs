//! Property tests for unit conversion and parsing.

use std::fs;

use proptest::prelude::*;

use eegconv_model::{IndexBase, Position};
use eegconv_positions::{assign_identifiers, read_positions};

proptest! {
    /// cm -> mm conversion is exactly x10 per coordinate.
    #[test]
    fn cm_to_mm_scales_each_coordinate(
        x in -1000.0f64..1000.0,
        y in -1000.0f64..1000.0,
        z in -1000.0f64..1000.0,
    ) {
        let mm = Position::new(x, y, z).cm_to_mm();
        prop_assert_eq!(mm.x, x * 10.0);
        prop_assert_eq!(mm.y, y * 10.0);
        prop_assert_eq!(mm.z, z * 10.0);
    }

    /// Parsing a shape line and assigning identifiers yields the scaled
    /// coordinates bit-for-bit (f64 text round-trips exactly).
    #[test]
    fn parsed_shape_point_round_trips_scaled(
        x in -1000.0f64..1000.0,
        y in -1000.0f64..1000.0,
        z in -1000.0f64..1000.0,
    ) {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("points.pos");
        fs::write(&input, format!("header\n1\t\t{x}\t{y}\t{z}\n")).unwrap();

        let records = read_positions(&input).unwrap();
        let entries = assign_identifiers(&records, IndexBase::One);
        prop_assert_eq!(entries.len(), 1);
        prop_assert_eq!(entries[0].position, Position::new(x * 10.0, y * 10.0, z * 10.0));
    }
}
