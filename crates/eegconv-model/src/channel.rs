//! Channel semantic types and rename rules.
//!
//! Raw-format conversion loses channel-type information; these types carry
//! the mapping used to restore it afterwards.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ModelError;

/// Semantic type of a recording channel's signal content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChannelType {
    /// Electrooculogram lead.
    Eog,
    /// Miscellaneous auxiliary lead (respiration, GSR, ergo, ...).
    Misc,
    /// Scalp EEG electrode.
    Eeg,
}

impl ChannelType {
    /// Integer type code used in alias files.
    ///
    /// The values are owned by the external renaming tool and are treated as
    /// opaque constants here.
    pub fn type_code(&self) -> i32 {
        match self {
            ChannelType::Eog => 202,
            ChannelType::Misc => 502,
            ChannelType::Eeg => 2,
        }
    }

    /// Parse an alias-file type code back into a semantic type.
    pub fn from_type_code(code: i32) -> Result<Self, ModelError> {
        match code {
            202 => Ok(ChannelType::Eog),
            502 => Ok(ChannelType::Misc),
            2 => Ok(ChannelType::Eeg),
            other => Err(ModelError::UnknownTypeCode(other)),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ChannelType::Eog => "eog",
            ChannelType::Misc => "misc",
            ChannelType::Eeg => "eeg",
        }
    }
}

impl fmt::Display for ChannelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ChannelType {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "eog" => Ok(ChannelType::Eog),
            "misc" => Ok(ChannelType::Misc),
            "eeg" => Ok(ChannelType::Eeg),
            other => Err(ModelError::UnknownChannelType(other.to_string())),
        }
    }
}

/// One channel-rename rule: an original channel name, the name it should
/// carry after remapping, and the semantic type to assign.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelRenameRule {
    pub original: String,
    pub renamed: String,
    pub channel_type: ChannelType,
}

impl ChannelRenameRule {
    pub fn new(
        original: impl Into<String>,
        renamed: impl Into<String>,
        channel_type: ChannelType,
    ) -> Self {
        Self {
            original: original.into(),
            renamed: renamed.into(),
            channel_type,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn type_codes_round_trip() {
        for ty in [ChannelType::Eog, ChannelType::Misc, ChannelType::Eeg] {
            assert_eq!(ChannelType::from_type_code(ty.type_code()).unwrap(), ty);
        }
        assert!(ChannelType::from_type_code(999).is_err());
    }

    #[test]
    fn channel_type_parses_case_insensitively() {
        assert_eq!("EOG".parse::<ChannelType>().unwrap(), ChannelType::Eog);
        assert_eq!(" misc ".parse::<ChannelType>().unwrap(), ChannelType::Misc);
        assert!("ecg".parse::<ChannelType>().is_err());
    }

    #[test]
    fn rule_serializes_with_lowercase_type() {
        let rule = ChannelRenameRule::new("EXG1", "cEXG1", ChannelType::Eog);
        let json = serde_json::to_string(&rule).expect("serialize rule");
        assert!(json.contains("\"eog\""));
        let round: ChannelRenameRule = serde_json::from_str(&json).expect("deserialize rule");
        assert_eq!(round, rule);
    }
}
