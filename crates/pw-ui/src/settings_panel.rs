//! Backend settings
//!
//! Gear button with a connection indicator, opening a small window where
//! the backend URL can be edited. Saving returns the new URL; the caller
//! owns the configuration.

use egui::{Context, RichText, Ui};
use pw_core::state::ConnectionStatus;

use crate::theme;

#[derive(Default)]
pub struct SettingsPanelState {
    pub open: bool,
    draft_url: String,
}

pub fn settings_button(
    ui: &mut Ui,
    ctx: &Context,
    state: &mut SettingsPanelState,
    current_url: &str,
    status: ConnectionStatus,
) -> Option<String> {
    let response = ui.button("⚙").on_hover_text("Backend settings");
    let dot_color = match status {
        ConnectionStatus::Connected => theme::success_color(),
        ConnectionStatus::Disconnected => theme::error_color(),
        ConnectionStatus::Unknown => egui::Color32::GRAY,
    };
    ui.painter()
        .circle_filled(response.rect.right_top() + egui::vec2(-2.0, 2.0), 3.5, dot_color);

    if response.clicked() {
        state.open = !state.open;
        if state.open {
            state.draft_url = current_url.to_string();
        }
    }
    if !state.open {
        return None;
    }

    let mut saved = None;
    let mut open = state.open;
    egui::Window::new("Backend API")
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .default_width(320.0)
        .show(ctx, |ui| {
            ui.label("API base URL");
            ui.text_edit_singleline(&mut state.draft_url);
            ui.add_space(4.0);

            let (text, color) = match status {
                ConnectionStatus::Connected => ("Connected", theme::success_color()),
                ConnectionStatus::Disconnected => ("Offline", theme::error_color()),
                ConnectionStatus::Unknown => ("Checking…", egui::Color32::GRAY),
            };
            ui.label(RichText::new(text).color(color).small());
            ui.add_space(8.0);

            ui.horizontal(|ui| {
                if ui.button("Save").clicked() {
                    saved = Some(state.draft_url.trim().trim_end_matches('/').to_string());
                    state.open = false;
                }
                if ui.button("Cancel").clicked() {
                    state.open = false;
                }
            });
        });
    state.open &= open;

    saved
}
