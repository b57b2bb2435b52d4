//! Live standings view
//!
//! One row per classified driver, ordered by the resolver's speed ranking.
//! Clicking a row toggles the shared driver selection.

use egui::{pos2, vec2, Align, FontId, Layout, RichText, Sense, Stroke, Ui};
use pw_core::frame::Frame;
use pw_core::state::ViewerContext;

use crate::parse_hex_color;

const ROW_HEIGHT: f32 = 34.0;

#[derive(Default)]
pub struct StandingsView;

impl StandingsView {
    pub fn ui(&mut self, ui: &mut Ui, frame: &Frame, ctx: &ViewerContext) {
        ui.heading("Standings");
        ui.add_space(4.0);

        if frame.is_empty() {
            ui.weak("Waiting for position data");
            return;
        }

        let selected = ctx.selected_driver.read().clone();
        let mut toggled: Option<String> = None;

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                for position in &frame.positions {
                    let is_selected = selected.as_deref() == Some(position.id.as_str());
                    let (rect, response) = ui.allocate_exact_size(
                        vec2(ui.available_width(), ROW_HEIGHT),
                        Sense::click(),
                    );
                    if !ui.is_rect_visible(rect) {
                        continue;
                    }

                    let painter = ui.painter_at(rect);
                    if is_selected || response.hovered() {
                        let fill = if is_selected {
                            ui.visuals().selection.bg_fill.linear_multiply(0.4)
                        } else {
                            ui.visuals().widgets.hovered.weak_bg_fill
                        };
                        painter.rect_filled(rect, 4.0, fill);
                    }
                    if is_selected {
                        painter.rect_stroke(rect, 4.0, Stroke::new(1.0, ui.visuals().selection.stroke.color));
                    }

                    let color = parse_hex_color(&position.color);
                    painter.text(
                        pos2(rect.left() + 8.0, rect.center().y),
                        egui::Align2::LEFT_CENTER,
                        format!("P{}", position.rank),
                        FontId::monospace(13.0),
                        ui.visuals().strong_text_color(),
                    );
                    painter.circle_filled(pos2(rect.left() + 44.0, rect.center().y), 5.0, color);

                    let mut row_ui = ui.child_ui(
                        rect.shrink2(vec2(56.0, 2.0)),
                        Layout::left_to_right(Align::Center),
                    );
                    row_ui.vertical(|ui| {
                        ui.spacing_mut().item_spacing.y = 0.0;
                        ui.label(RichText::new(&position.name).strong().size(13.0));
                        ui.label(
                            RichText::new(format!("{} · {}", position.team, position.compound))
                                .weak()
                                .size(10.0),
                        );
                    });
                    row_ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        ui.label(
                            RichText::new(format!("{:.0} km/h", position.speed)).monospace(),
                        );
                    });

                    if response.clicked() {
                        toggled = Some(position.id.clone());
                    }
                }
            });

        if let Some(id) = toggled {
            let mut selection = ctx.selected_driver.write();
            if selection.as_deref() == Some(id.as_str()) {
                *selection = None;
            } else {
                *selection = Some(id);
            }
        }
    }
}
