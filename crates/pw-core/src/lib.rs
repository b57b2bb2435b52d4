//! Core functionality for the race-replay dashboard
//!
//! This crate provides the session data model, the playback engine that
//! advances the timeline cursor, and the frame resolver that projects the
//! cursor into a ranked set of driver positions.

pub mod frame;
pub mod playback;
pub mod session;
pub mod state;

// Re-export commonly used types
pub use frame::{resolve_frame, DriverPosition, Frame};
pub use playback::{PlaybackEngine, PlaybackSnapshot};
pub use session::{DriverRecord, RaceSession, TrackOutline};
pub use state::{CommentaryState, ConnectionStatus, ViewerContext};
