//! In-memory recording channel metadata.
//!
//! Only the channel-metadata surface of a recording is modelled here; sample
//! data stays with the external reader/writer collaborators.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::channel::ChannelType;

/// Metadata for a single recording channel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelInfo {
    pub name: String,
    pub channel_type: ChannelType,
}

impl ChannelInfo {
    pub fn new(name: impl Into<String>, channel_type: ChannelType) -> Self {
        Self {
            name: name.into(),
            channel_type,
        }
    }

    /// An EEG-typed channel, the default after format conversion.
    pub fn eeg(name: impl Into<String>) -> Self {
        Self::new(name, ChannelType::Eeg)
    }
}

/// Channel-metadata view of a recording.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recording {
    /// Path the recording was read from, when known.
    pub source: Option<PathBuf>,
    pub channels: Vec<ChannelInfo>,
}

impl Recording {
    pub fn new(channels: Vec<ChannelInfo>) -> Self {
        Self {
            source: None,
            channels,
        }
    }

    pub fn with_source(mut self, source: impl Into<PathBuf>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Index of the channel with the given name, if present.
    pub fn channel_index(&self, name: &str) -> Option<usize> {
        self.channels.iter().position(|c| c.name == name)
    }

    pub fn channel(&self, name: &str) -> Option<&ChannelInfo> {
        self.channels.iter().find(|c| c.name == name)
    }
}
