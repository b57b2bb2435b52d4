//! User interface components for the race replay dashboard
//!
//! This crate provides the egui-based chrome around the views: transport
//! controls, commentary, race selection, settings, and toasts.

pub mod commentary_panel;
pub mod playback_panel;
pub mod race_info;
pub mod race_selector;
pub mod settings_panel;
pub mod theme;
pub mod toasts;

pub use commentary_panel::commentary_panel;
pub use playback_panel::playback_panel;
pub use race_info::race_info_bar;
pub use race_selector::RaceSelection;
pub use settings_panel::{settings_button, SettingsPanelState};
pub use theme::{apply_theme, Theme};
pub use toasts::{Toast, ToastKind, Toasts};

/// Render race time as `m:ss` for transport labels.
pub fn format_time(seconds: f64) -> String {
    let total = seconds.max(0.0) as u64;
    format!("{}:{:02}", total / 60, total % 60)
}
