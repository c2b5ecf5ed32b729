//! Landmark (`.hpts`) serialization.
//!
//! Output is line-oriented text: two `#` comment lines (provenance and a
//! generation timestamp) followed by one `CATEGORY ID X Y Z` line per entry,
//! in input order. The full content is built in memory and written through a
//! temporary file in the destination directory so a mid-write failure never
//! leaves a truncated file under the output name.

use std::io::Write;
use std::path::Path;

use eegconv_model::LandmarkEntry;

use crate::error::Result;

/// Render a coordinate for output.
///
/// Integral values carry one forced decimal (`10.0`, not `10`), matching the
/// established landmark-file convention; everything else uses the
/// shortest-exact f64 rendering, which loses no precision.
pub fn format_coordinate(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{value:.1}")
    } else {
        value.to_string()
    }
}

/// Render one landmark line: space-joined `category identifier x y z`.
pub fn format_entry(entry: &LandmarkEntry) -> String {
    format!(
        "{} {} {} {} {}",
        entry.category,
        entry.identifier,
        format_coordinate(entry.position.x),
        format_coordinate(entry.position.y),
        format_coordinate(entry.position.z),
    )
}

/// Render the complete landmark file content.
pub fn render_landmarks(input: &Path, output: &Path, entries: &[LandmarkEntry]) -> String {
    let mut content = String::new();
    content.push_str(&format!(
        "# Converted from {} to {}\n",
        input.display(),
        output.display()
    ));
    content.push_str(&format!(
        "# {}\n",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    ));
    for entry in entries {
        content.push_str(&format_entry(entry));
        content.push('\n');
    }
    content
}

/// Write `content` to `output` atomically.
///
/// The content goes to a temporary file in the destination directory first
/// and is moved over the final name only once fully written.
pub fn write_atomic(output: &Path, content: &str) -> Result<()> {
    let dir = output
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let mut temp = tempfile::NamedTempFile::new_in(dir)?;
    temp.write_all(content.as_bytes())?;
    temp.flush()?;
    temp.persist(output).map_err(|e| e.error)?;
    Ok(())
}
