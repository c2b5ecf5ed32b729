//! Channel-metadata remapping.
//!
//! Raw-format conversion drops channel semantic types; this crate restores
//! them by applying an alias table (built-in, file-based, or supplied
//! in-memory) to a recording's channel metadata.

pub mod alias;
pub mod apply;
pub mod error;

pub use alias::{AliasTable, RENAME_PREFIX};
pub use apply::{AliasSource, apply_channel_types};
pub use error::{ChannelError, Result};
