//! Main application entry point

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::Result;
use eframe::egui::{self, Context};
use parking_lot::RwLock;
use tracing::{info, warn};

use pw_core::state::{ConnectionStatus, ViewerContext};
use pw_core::{resolve_frame, Frame};
use pw_data::client::ApiClient;
use pw_data::config::ApiConfig;
use pw_ui::{
    commentary_panel, playback_panel, race_info_bar, settings_button, RaceSelection,
    SettingsPanelState, Theme, Toasts,
};
use pw_views::{StandingsView, TrackMapView};

mod commentary;
use commentary::maybe_request_commentary;

const PROBE_INTERVAL: Duration = Duration::from_secs(10);
const KEYBOARD_SKIP_SECS: f64 = 10.0;

/// Main application state
struct PitwallApp {
    /// Viewer context shared with views, panels and network tasks
    viewer_context: ViewerContext,

    /// Backend configuration, editable from the settings window
    config: Arc<RwLock<ApiConfig>>,

    /// Header race picker
    selection: RaceSelection,

    /// Settings window state
    settings: SettingsPanelState,

    /// Transient notifications
    toasts: Toasts,

    track_map: TrackMapView,
    standings: StandingsView,

    /// True while a race load is in flight
    loading: Arc<AtomicBool>,

    /// Tokio runtime owning all network tasks
    runtime: tokio::runtime::Runtime,

    /// Egui context for repaint requests from async tasks
    egui_ctx: Context,
}

impl PitwallApp {
    fn new(cc: &eframe::CreationContext<'_>) -> Self {
        pw_ui::apply_theme(&cc.egui_ctx, &Theme::default());

        let runtime = tokio::runtime::Runtime::new().expect("failed to start tokio runtime");
        let viewer_context = ViewerContext::new(runtime.handle().clone());
        let config = Arc::new(RwLock::new(ApiConfig::default()));

        let app = Self {
            viewer_context,
            config,
            selection: RaceSelection::default(),
            settings: SettingsPanelState::default(),
            toasts: Toasts::default(),
            track_map: TrackMapView::default(),
            standings: StandingsView::default(),
            loading: Arc::new(AtomicBool::new(false)),
            runtime,
            egui_ctx: cc.egui_ctx.clone(),
        };
        app.spawn_probe();
        app
    }

    /// Background connectivity probe, polling the backend every ten
    /// seconds. Re-reads the configured URL each round so edits apply to
    /// the next probe.
    fn spawn_probe(&self) {
        let config = self.config.clone();
        let connection = self.viewer_context.connection.clone();
        let egui_ctx = self.egui_ctx.clone();

        self.runtime.handle().spawn(async move {
            let mut ticker = tokio::time::interval(PROBE_INTERVAL);
            loop {
                ticker.tick().await;
                let base_url = config.read().base_url.clone();
                let reachable = ApiClient::new(base_url).probe().await;
                let status = if reachable {
                    ConnectionStatus::Connected
                } else {
                    ConnectionStatus::Disconnected
                };
                let changed = {
                    let mut current = connection.write();
                    let changed = *current != status;
                    *current = status;
                    changed
                };
                if changed {
                    info!(?status, "backend connectivity changed");
                    egui_ctx.request_repaint();
                }
            }
        });
    }

    /// Kick off an async race load for the current header selection.
    fn load_race(&self) {
        if self.loading.swap(true, Ordering::SeqCst) {
            return;
        }

        let base_url = self.config.read().base_url.clone();
        let year = self.selection.year;
        let circuit = self.selection.circuit.clone();
        let generation = self.viewer_context.generation();
        let viewer_context = self.viewer_context.clone();
        let loading = self.loading.clone();
        let toasts = self.toasts.clone();
        let egui_ctx = self.egui_ctx.clone();

        info!(year, %circuit, "loading race");
        self.runtime.handle().spawn(async move {
            let client = ApiClient::new(base_url.clone());
            match client.load_race(year, &circuit).await {
                Ok(session) => {
                    // A newer load may have finished while this one ran.
                    if viewer_context.generation() == generation {
                        let event_name = session.event_name.clone();
                        viewer_context.install_session(session);
                        toasts.info(
                            "Race Loaded",
                            format!("{event_name} data is ready for replay"),
                        );
                    }
                }
                Err(err) => {
                    warn!(%err, "race load failed");
                    toasts.error(
                        "Error Loading Race",
                        format!("Make sure the backend API is running on {base_url}"),
                    );
                }
            }
            loading.store(false, Ordering::SeqCst);
            egui_ctx.request_repaint();
        });
    }

    fn handle_keyboard(&self, ctx: &Context, current_time: f64, max_time: f64) {
        if ctx.wants_keyboard_input() {
            return;
        }
        let playback = &self.viewer_context.playback;
        ctx.input(|input| {
            if input.key_pressed(egui::Key::Space) {
                playback.toggle_playback();
            }
            if input.key_pressed(egui::Key::ArrowLeft) {
                playback.seek_to_time((current_time - KEYBOARD_SKIP_SECS).max(0.0));
            }
            if input.key_pressed(egui::Key::ArrowRight) {
                playback.seek_to_time((current_time + KEYBOARD_SKIP_SECS).min(max_time));
            }
        });
    }
}

impl eframe::App for PitwallApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.viewer_context.playback.tick(Instant::now());
        let snapshot = self.viewer_context.playback.snapshot();
        if snapshot.playing {
            ctx.request_repaint();
        }

        let session = self.viewer_context.session.read().clone();
        let frame = session
            .as_deref()
            .map(|session| resolve_frame(session, snapshot.cursor))
            .unwrap_or_else(Frame::default);

        self.handle_keyboard(ctx, snapshot.current_time, snapshot.max_time);
        maybe_request_commentary(&self.viewer_context, &self.config, &frame, &snapshot, ctx);

        let mut load_requested = false;
        egui::TopBottomPanel::top("pw_header").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("Pitwall");
                ui.separator();
                let loading = self.loading.load(Ordering::SeqCst);
                load_requested = self.selection.ui(ui, loading);
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let base_url = self.config.read().base_url.clone();
                    let status = *self.viewer_context.connection.read();
                    if let Some(url) =
                        settings_button(ui, ctx, &mut self.settings, &base_url, status)
                    {
                        info!(%url, "backend url updated");
                        self.config.write().base_url = url;
                    }
                });
            });
        });
        if load_requested {
            self.load_race();
        }

        egui::TopBottomPanel::top("pw_info_bar").show(ctx, |ui| {
            let event_name = session.as_deref().map(|s| s.event_name.as_str());
            race_info_bar(ui, event_name, &frame, snapshot.current_time);
        });

        egui::TopBottomPanel::bottom("pw_transport")
            .min_height(96.0)
            .show(ctx, |ui| {
                ui.add_space(6.0);
                playback_panel(ui, &self.viewer_context.playback, &snapshot);
                ui.separator();
                let mut commentary = self.viewer_context.commentary.write();
                commentary_panel(ui, &mut commentary, snapshot.playing);
            });

        egui::SidePanel::right("pw_standings")
            .default_width(260.0)
            .show(ctx, |ui| {
                self.standings.ui(ui, &frame, &self.viewer_context);
            });

        egui::CentralPanel::default().show(ctx, |ui| match session.as_deref() {
            Some(session) => {
                self.track_map.ui(ui, session, &frame, &self.viewer_context);
            }
            None => {
                ui.centered_and_justified(|ui| {
                    ui.weak("Pick a season and circuit, then load a race to start the replay");
                });
            }
        });

        self.toasts.show(ctx);
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 840.0])
            .with_title("Pitwall"),
        ..Default::default()
    };

    eframe::run_native(
        "Pitwall",
        options,
        Box::new(|cc| Box::new(PitwallApp::new(cc))),
    )
    .map_err(|err| anyhow::anyhow!("failed to start ui: {err}"))
}
