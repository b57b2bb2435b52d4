//! Commentary trigger
//!
//! While the replay is running, asks the backend for a new line of
//! commentary at most once per fifteen seconds of race time. Responses
//! arriving after the session was replaced are discarded.

use std::sync::atomic::Ordering;
use std::sync::Arc;

use parking_lot::RwLock;
use pw_core::frame::Frame;
use pw_core::playback::PlaybackSnapshot;
use pw_core::state::ViewerContext;
use pw_data::client::{ApiClient, CommentaryRequest};
use pw_data::config::ApiConfig;
use tracing::warn;

pub const COMMENTARY_INTERVAL_SECS: f64 = 15.0;
pub const FALLBACK_TEXT: &str = "Connection to commentary system lost...";
pub const QUIET_TEXT: &str = "The race continues...";

pub fn maybe_request_commentary(
    viewer_context: &ViewerContext,
    config: &Arc<RwLock<ApiConfig>>,
    frame: &Frame,
    snapshot: &PlaybackSnapshot,
    egui_ctx: &egui::Context,
) {
    if !snapshot.playing {
        return;
    }
    let Some(request) = CommentaryRequest::from_frame(frame, snapshot.current_time) else {
        return;
    };

    {
        let mut commentary = viewer_context.commentary.write();
        if commentary.muted || commentary.loading {
            return;
        }
        if snapshot.current_time - commentary.last_request_secs < COMMENTARY_INTERVAL_SECS {
            return;
        }
        commentary.last_request_secs = snapshot.current_time;
        commentary.loading = true;
    }

    let base_url = config.read().base_url.clone();
    let generation = viewer_context.generation();
    let generation_slot = viewer_context.session_generation.clone();
    let commentary_slot = viewer_context.commentary.clone();
    let egui_ctx = egui_ctx.clone();

    viewer_context.runtime_handle.spawn(async move {
        let client = ApiClient::new(base_url);
        let result = client.commentary(&request).await;

        // The session may have been replaced while the request was out.
        if generation_slot.load(Ordering::SeqCst) != generation {
            return;
        }
        let mut commentary = commentary_slot.write();
        commentary.loading = false;
        commentary.text = match result {
            Ok(text) if text.is_empty() => QUIET_TEXT.to_string(),
            Ok(text) => text,
            Err(err) => {
                warn!(%err, "commentary request failed");
                FALLBACK_TEXT.to_string()
            }
        };
        drop(commentary);
        egui_ctx.request_repaint();
    });
}
