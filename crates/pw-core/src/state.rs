//! Shared viewer state

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use parking_lot::RwLock;
use tracing::debug;

use crate::playback::PlaybackEngine;
use crate::session::RaceSession;

/// Backend reachability, updated by the connectivity probe.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ConnectionStatus {
    #[default]
    Unknown,
    Connected,
    Disconnected,
}

/// Commentary feed state shared between the trigger and the panel.
#[derive(Debug, Clone, Default)]
pub struct CommentaryState {
    pub text: String,
    pub loading: bool,
    pub muted: bool,
    /// Race time of the last issued request, for the once-per-15s throttle.
    pub last_request_secs: f64,
}

/// Context shared between the app, views and panels.
///
/// All slots are single-writer (the app's load path and the playback
/// engine) and read without coordination from the render path, which runs
/// on the same logical thread of control.
#[derive(Clone)]
pub struct ViewerContext {
    /// Currently loaded session, replaced wholesale on each load.
    pub session: Arc<RwLock<Option<Arc<RaceSession>>>>,

    /// Bumped every time a new session installs. Async tasks capture the
    /// value when issued and discard results that no longer match.
    pub session_generation: Arc<AtomicU64>,

    /// Playback engine owning the timeline cursor.
    pub playback: Arc<PlaybackEngine>,

    /// Backend reachability flag.
    pub connection: Arc<RwLock<ConnectionStatus>>,

    /// Commentary feed state.
    pub commentary: Arc<RwLock<CommentaryState>>,

    /// Driver selected in the track map or standings.
    pub selected_driver: Arc<RwLock<Option<String>>>,

    /// Tokio runtime handle for network tasks.
    pub runtime_handle: tokio::runtime::Handle,
}

impl ViewerContext {
    pub fn new(runtime_handle: tokio::runtime::Handle) -> Self {
        Self {
            session: Arc::new(RwLock::new(None)),
            session_generation: Arc::new(AtomicU64::new(0)),
            playback: Arc::new(PlaybackEngine::new()),
            connection: Arc::new(RwLock::new(ConnectionStatus::Unknown)),
            commentary: Arc::new(RwLock::new(CommentaryState::default())),
            selected_driver: Arc::new(RwLock::new(None)),
            runtime_handle,
        }
    }

    pub fn generation(&self) -> u64 {
        self.session_generation.load(Ordering::SeqCst)
    }

    /// Install a freshly loaded session: reset the playback engine and the
    /// commentary throttle, clear the selection, then bump the generation
    /// so stale in-flight responses get discarded.
    pub fn install_session(&self, session: RaceSession) {
        debug!(event_name = %session.event_name, "installing session");
        self.playback.load_timeline(session.timeline.clone().into());
        *self.selected_driver.write() = None;
        {
            let mut commentary = self.commentary.write();
            commentary.text.clear();
            commentary.loading = false;
            commentary.last_request_secs = 0.0;
        }
        *self.session.write() = Some(Arc::new(session));
        self.session_generation.fetch_add(1, Ordering::SeqCst);
    }
}
