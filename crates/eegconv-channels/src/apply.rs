//! In-place application of alias rules to recording channel metadata.

use std::path::PathBuf;

use tracing::{debug, info};

use eegconv_model::Recording;

use crate::alias::AliasTable;
use crate::error::{ChannelError, Result};

/// Where the alias rules come from.
#[derive(Debug, Clone)]
pub enum AliasSource {
    /// The built-in montage table.
    Default,
    /// A user-supplied alias file.
    File(PathBuf),
    /// An already-constructed table.
    Table(AliasTable),
}

impl AliasSource {
    /// Resolve the source into a concrete table.
    pub fn resolve(&self) -> Result<AliasTable> {
        match self {
            AliasSource::Default => Ok(AliasTable::default_montage()),
            AliasSource::File(path) => AliasTable::from_file(path),
            AliasSource::Table(table) => Ok(table.clone()),
        }
    }
}

/// Rename and retype the listed channels of `recording` in place.
///
/// Channels not named by any rule are left untouched. Rules are applied in
/// a single forward pass; when a rule names a channel absent from the
/// recording the error is propagated immediately, so earlier rules have
/// already taken effect.
///
/// # Errors
///
/// [`ChannelError::ChannelNotFound`] when a rule's original channel is
/// absent from the recording.
pub fn apply_channel_types(recording: &mut Recording, source: &AliasSource) -> Result<()> {
    let table = source.resolve()?;

    for rule in &table.rules {
        let index = recording
            .channel_index(&rule.original)
            .ok_or_else(|| ChannelError::channel_not_found(&rule.original))?;

        let channel = &mut recording.channels[index];
        debug!(
            original = %rule.original,
            renamed = %rule.renamed,
            channel_type = %rule.channel_type,
            "retyping channel"
        );
        channel.name = rule.renamed.clone();
        channel.channel_type = rule.channel_type;
    }

    info!(rules = table.rules.len(), "channel types applied");
    Ok(())
}
