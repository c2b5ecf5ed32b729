//! Polhemus digitizer (`.pos`) to landmark (`.hpts`) conversion.
//!
//! The converter reads a tab-delimited digitizer export, classifies every
//! record as a cardinal landmark, an EEG sensor, or an extra head-shape
//! point, assigns per-category identifiers, converts centimetres to
//! millimetres, and serializes a line-oriented landmark file.

pub mod classify;
pub mod convert;
pub mod error;
pub mod reader;
pub mod writer;

pub use classify::assign_identifiers;
pub use convert::convert_positions;
pub use error::{PositionError, Result};
pub use reader::read_positions;
pub use writer::{format_entry, render_landmarks};
