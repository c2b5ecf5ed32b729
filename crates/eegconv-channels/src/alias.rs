//! Alias tables: the default montage mapping and the alias-file format.
//!
//! An alias file carries one rule per line, colon-delimited:
//! `ORIGINAL:RENAMED:TYPECODE`. The type codes are integer constants owned
//! by the external renaming tool (202 = EOG, 502 = misc, 2 = EEG).

use std::fs;
use std::io::Write;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;
use tracing::debug;

use eegconv_model::{ChannelRenameRule, ChannelType};

use crate::error::{ChannelError, Result};

/// Prefix applied to renamed channels so the new names cannot collide with
/// names already present in the recording.
pub const RENAME_PREFIX: &str = "c";

/// An ordered list of channel-rename rules.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AliasTable {
    pub rules: Vec<ChannelRenameRule>,
}

impl AliasTable {
    pub fn new(rules: Vec<ChannelRenameRule>) -> Self {
        Self { rules }
    }

    /// The fixed table for the 64-channel montage: three electrooculogram
    /// leads plus the auxiliary leads (galvanic skin response, ergometer,
    /// respiration, plethysmograph, temperature), each `c`-prefixed.
    pub fn default_montage() -> Self {
        let eog = ["EXG1", "EXG2", "EXG3"];
        let misc = ["GSR1", "GSR2", "Erg1", "Erg2", "Resp", "Plet", "Temp"];

        let mut rules = Vec::with_capacity(eog.len() + misc.len());
        for name in eog {
            rules.push(prefixed_rule(name, ChannelType::Eog));
        }
        for name in misc {
            rules.push(prefixed_rule(name, ChannelType::Misc));
        }
        Self { rules }
    }

    /// Parse an alias file.
    ///
    /// Blank lines are ignored; anything else must be a 3-field
    /// colon-delimited rule with a known type code.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let mut rules = Vec::new();

        for (idx, raw) in content.lines().enumerate() {
            let line = (idx as u64) + 1;
            let trimmed = raw.trim();
            if trimmed.is_empty() {
                continue;
            }

            let fields: Vec<&str> = trimmed.split(':').collect();
            if fields.len() != 3 {
                return Err(ChannelError::malformed_alias(
                    path,
                    line,
                    format!("expected ORIGINAL:RENAMED:TYPECODE, got {} fields", fields.len()),
                ));
            }

            let code: i32 = fields[2].trim().parse().map_err(|_| {
                ChannelError::malformed_alias(
                    path,
                    line,
                    format!("invalid type code: {:?}", fields[2]),
                )
            })?;
            let channel_type = ChannelType::from_type_code(code)
                .map_err(|e| ChannelError::malformed_alias(path, line, format!("{e}")))?;

            rules.push(ChannelRenameRule::new(fields[0], fields[1], channel_type));
        }

        debug!(path = %path.display(), rules = rules.len(), "loaded alias table");
        Ok(Self { rules })
    }

    /// Serialize the table in alias-file format.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for rule in &self.rules {
            out.push_str(&format!(
                "{}:{}:{}\n",
                rule.original,
                rule.renamed,
                rule.channel_type.type_code()
            ));
        }
        out
    }

    /// Write the table to an alias file at `path`.
    pub fn write_to(&self, path: &Path) -> Result<()> {
        fs::write(path, self.render())?;
        Ok(())
    }

    /// Materialize the table as a transient alias file.
    ///
    /// The returned guard removes the file when dropped, on success and
    /// error paths alike; callers hand its path to the external renaming
    /// tool and let the guard fall out of scope afterwards.
    pub fn materialize(&self) -> Result<NamedTempFile> {
        let mut file = NamedTempFile::new()?;
        file.write_all(self.render().as_bytes())?;
        file.flush()?;
        Ok(file)
    }
}

fn prefixed_rule(name: &str, channel_type: ChannelType) -> ChannelRenameRule {
    ChannelRenameRule::new(name, format!("{RENAME_PREFIX}{name}"), channel_type)
}
