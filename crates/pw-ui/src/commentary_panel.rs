//! Live commentary strip

use egui::{RichText, Ui};
use pw_core::state::CommentaryState;

use crate::theme;

pub fn commentary_panel(ui: &mut Ui, commentary: &mut CommentaryState, playing: bool) {
    ui.horizontal(|ui| {
        let (rect, _) = ui.allocate_exact_size(egui::vec2(10.0, 10.0), egui::Sense::hover());
        let dot_color = if playing && !commentary.muted {
            theme::accent_color()
        } else {
            egui::Color32::from_gray(90)
        };
        ui.painter().circle_filled(rect.center(), 4.0, dot_color);

        ui.label(RichText::new("LIVE COMMENTARY").strong().small());

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let mute_label = if commentary.muted { "🔇 Unmute" } else { "🔊 Mute" };
            if ui.small_button(mute_label).clicked() {
                commentary.muted = !commentary.muted;
            }
        });
    });

    if commentary.muted {
        ui.weak("Commentary muted");
    } else if commentary.loading {
        ui.horizontal(|ui| {
            ui.spinner();
            ui.weak("Analyzing the race...");
        });
    } else if commentary.text.is_empty() {
        ui.weak("Commentary will appear once the replay is running");
    } else {
        ui.label(RichText::new(format!("“{}”", commentary.text)).italics());
    }
}
