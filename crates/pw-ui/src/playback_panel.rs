//! Transport controls
//!
//! Scrub bar plus play/pause, ten-second skips, and speed selection.
//! All mutations go through the shared playback engine.

use egui::{pos2, vec2, Color32, Rounding, Sense, Stroke, Ui};
use pw_core::playback::{PlaybackEngine, PlaybackSnapshot};

use crate::{format_time, theme};

pub const SPEEDS: &[f64] = &[0.5, 1.0, 2.0, 4.0, 8.0];

const SKIP_SECS: f64 = 10.0;
const BAR_HEIGHT: f32 = 10.0;

pub fn playback_panel(ui: &mut Ui, engine: &PlaybackEngine, snapshot: &PlaybackSnapshot) {
    let has_timeline = snapshot.timeline_len > 0;

    scrub_bar(ui, engine, snapshot, has_timeline);
    ui.add_space(4.0);

    ui.horizontal(|ui| {
        ui.monospace(format_time(snapshot.current_time));

        ui.add_enabled_ui(has_timeline, |ui| {
            if ui.button("⏮").on_hover_text("Back 10 seconds").clicked() {
                engine.seek_to_time((snapshot.current_time - SKIP_SECS).max(0.0));
            }
            let play_label = if snapshot.playing { "⏸" } else { "▶" };
            if ui.button(play_label).on_hover_text("Play / pause").clicked() {
                engine.toggle_playback();
            }
            if ui.button("⏭").on_hover_text("Forward 10 seconds").clicked() {
                engine.seek_to_time((snapshot.current_time + SKIP_SECS).min(snapshot.max_time));
            }
        });

        ui.separator();
        for &speed in SPEEDS {
            let selected = (snapshot.speed - speed).abs() < f64::EPSILON;
            if ui
                .selectable_label(selected, format!("{speed}x"))
                .clicked()
            {
                engine.set_speed(speed);
            }
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.monospace(format_time(snapshot.max_time));
        });
    });
}

fn scrub_bar(ui: &mut Ui, engine: &PlaybackEngine, snapshot: &PlaybackSnapshot, enabled: bool) {
    let (response, painter) = ui.allocate_painter(
        vec2(ui.available_width(), BAR_HEIGHT),
        Sense::click_and_drag(),
    );
    let rect = response.rect;

    painter.rect_filled(rect, Rounding::same(BAR_HEIGHT / 2.0), Color32::from_gray(45));

    if enabled && snapshot.max_time > 0.0 {
        let fraction = (snapshot.current_time / snapshot.max_time).clamp(0.0, 1.0) as f32;
        let mut filled = rect;
        filled.set_right(rect.left() + rect.width() * fraction);
        painter.rect_filled(filled, Rounding::same(BAR_HEIGHT / 2.0), theme::accent_color());

        let knob = pos2(filled.right(), rect.center().y);
        painter.circle_filled(knob, BAR_HEIGHT * 0.8, Color32::WHITE);
        painter.circle_stroke(knob, BAR_HEIGHT * 0.8, Stroke::new(1.0, Color32::from_gray(30)));

        if response.clicked() || response.dragged() {
            if let Some(pointer) = response.interact_pointer_pos() {
                let fraction =
                    ((pointer.x - rect.left()) / rect.width().max(1.0)).clamp(0.0, 1.0) as f64;
                engine.seek_to_time(fraction * snapshot.max_time);
            }
        }
    }
}
