//! Conversion options.

use serde::{Deserialize, Serialize};

/// Starting value for the per-category sequential identifiers.
///
/// Historical exports disagree on whether `eeg`/`extra` counters start at 0
/// or 1; the later convention is 1-based, which is the default here.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IndexBase {
    Zero,
    #[default]
    One,
}

impl IndexBase {
    /// First identifier issued under this convention.
    pub fn first(&self) -> u32 {
        match self {
            IndexBase::Zero => 0,
            IndexBase::One => 1,
        }
    }
}

/// Options for the position converter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PositionOptions {
    /// Whether an existing destination file may be replaced.
    pub overwrite: bool,
    /// Base for the `eeg` and `extra` identifier counters.
    pub index_base: IndexBase,
}

impl Default for PositionOptions {
    fn default() -> Self {
        Self {
            overwrite: false,
            index_base: IndexBase::One,
        }
    }
}

impl PositionOptions {
    #[must_use]
    pub fn with_overwrite(mut self, overwrite: bool) -> Self {
        self.overwrite = overwrite;
        self
    }

    #[must_use]
    pub fn with_index_base(mut self, base: IndexBase) -> Self {
        self.index_base = base;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_refuse_overwrite_and_start_at_one() {
        let options = PositionOptions::default();
        assert!(!options.overwrite);
        assert_eq!(options.index_base.first(), 1);
        assert_eq!(IndexBase::Zero.first(), 0);
    }
}
