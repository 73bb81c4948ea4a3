//! Core library for reading, generating and editing BVH motion files.
//!
//! The crate handles a fixed 96-channel layout. The skeleton section of a
//! file is kept as opaque text; only the `MOTION` section is parsed into a
//! frame table that callers can edit one channel group at a time before
//! handing it back to the writer.

pub mod builder;
pub mod config;
pub mod edit;
pub mod error;
pub mod format;
pub mod motion;
pub mod reader;
pub mod skeleton;
pub mod writer;

pub use builder::{build_frame, build_new, GroupValues};
pub use config::GeneratorConfig;
pub use edit::{apply_edit, apply_edits, load_edits, ChannelEdit};
pub use error::{BvhError, Result};
pub use format::{format_channel_value, format_frame_time};
pub use motion::{channel_group, set_channel_group, Frame, MotionClip, CHANNELS_PER_FRAME};
pub use reader::{load_existing, parse};
pub use skeleton::{ChannelGroup, CHANNEL_GROUPS, DEFAULT_HIERARCHY};
pub use writer::{serialize, write_file, write_to};
