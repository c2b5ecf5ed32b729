pub mod channel;
pub mod error;
pub mod landmark;
pub mod options;
pub mod recording;

pub use channel::{ChannelRenameRule, ChannelType};
pub use error::ModelError;
pub use landmark::{
    CM_TO_MM, CardinalLabel, DigitizerRecord, LandmarkEntry, PointCategory, Position,
};
pub use options::{IndexBase, PositionOptions};
pub use recording::{ChannelInfo, Recording};
