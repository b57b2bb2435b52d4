//! Playback over the session timeline
//!
//! The engine owns the cursor into the timeline and advances it on the
//! repaint clock while playing; everything downstream (frames, panels,
//! the commentary trigger) derives from the cursor.

mod engine;

pub use engine::{PlaybackEngine, PlaybackSnapshot};

/// Wall-clock milliseconds between cursor advances at 1x speed.
pub const BASE_STEP_MS: f64 = 100.0;
