//! Session header bar

use egui::{RichText, Ui};
use pw_core::frame::Frame;
use pw_views::parse_hex_color;

use crate::format_time;

pub fn race_info_bar(ui: &mut Ui, event_name: Option<&str>, frame: &Frame, current_time: f64) {
    ui.horizontal(|ui| {
        match event_name {
            Some(name) => {
                ui.label(RichText::new(name).strong().size(15.0));
            }
            None => {
                ui.weak("No session loaded");
            }
        }

        if let Some(leader) = frame.leader() {
            ui.separator();
            ui.label(RichText::new("P1").weak().small());
            ui.label(
                RichText::new(&leader.name)
                    .color(parse_hex_color(&leader.color))
                    .strong(),
            );
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.monospace(format_time(current_time));
            ui.label(RichText::new("RACE TIME").weak().small());
        });
    });
}
