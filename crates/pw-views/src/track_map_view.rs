//! Track map view
//!
//! Draws the circuit outline in telemetry coordinates and overlays one
//! marker per driver at the current cursor. Clicking near a marker
//! selects that driver.

use egui::{pos2, vec2, Align2, Color32, FontId, Pos2, Rect, Sense, Shape, Stroke, Ui};
use pw_core::frame::Frame;
use pw_core::session::RaceSession;
use pw_core::state::ViewerContext;

use crate::{driver_code, parse_hex_color};

const MARKER_RADIUS: f32 = 5.0;
const SELECTED_RADIUS: f32 = 7.0;
const PICK_RADIUS: f32 = MARKER_RADIUS + 4.0;
const MAP_PADDING: f32 = 24.0;

/// Maps telemetry world coordinates into a screen rect, preserving the
/// aspect ratio and flipping the y axis.
struct FitTransform {
    scale: f32,
    offset_x: f32,
    offset_y: f32,
    min_x: f64,
    max_y: f64,
}

impl FitTransform {
    fn new(rect: Rect, min: (f64, f64), max: (f64, f64)) -> Self {
        let span_x = (max.0 - min.0).max(1e-9) as f32;
        let span_y = (max.1 - min.1).max(1e-9) as f32;
        let avail_x = (rect.width() - 2.0 * MAP_PADDING).max(1.0);
        let avail_y = (rect.height() - 2.0 * MAP_PADDING).max(1.0);
        let scale = (avail_x / span_x).min(avail_y / span_y);
        Self {
            scale,
            offset_x: rect.center().x - span_x * scale / 2.0,
            offset_y: rect.center().y - span_y * scale / 2.0,
            min_x: min.0,
            max_y: max.1,
        }
    }

    fn apply(&self, x: f64, y: f64) -> Pos2 {
        pos2(
            self.offset_x + (x - self.min_x) as f32 * self.scale,
            self.offset_y + (self.max_y - y) as f32 * self.scale,
        )
    }
}

#[derive(Default)]
pub struct TrackMapView;

impl TrackMapView {
    pub fn ui(&mut self, ui: &mut Ui, session: &RaceSession, frame: &Frame, ctx: &ViewerContext) {
        let (response, painter) =
            ui.allocate_painter(ui.available_size(), Sense::click());
        let rect = response.rect;

        let Some((min, max)) = world_bounds(session, frame) else {
            painter.text(
                rect.center(),
                Align2::CENTER_CENTER,
                "No track data",
                FontId::proportional(16.0),
                ui.visuals().weak_text_color(),
            );
            return;
        };
        let transform = FitTransform::new(rect, min, max);

        // Circuit outline, split wherever a sample is missing.
        let outline_stroke = Stroke::new(2.5, Color32::from_gray(90));
        let mut segment: Vec<Pos2> = Vec::new();
        for i in 0..session.track_map.len() {
            match session.track_map.point_at(i) {
                Some((x, y)) => segment.push(transform.apply(x, y)),
                None => {
                    if segment.len() > 1 {
                        painter.add(Shape::line(std::mem::take(&mut segment), outline_stroke));
                    } else {
                        segment.clear();
                    }
                }
            }
        }
        if segment.len() > 1 {
            painter.add(Shape::line(segment, outline_stroke));
        }

        let selected = ctx.selected_driver.read().clone();
        let mut clicked_driver: Option<String> = None;
        let click_pos = response
            .clicked()
            .then(|| response.interact_pointer_pos())
            .flatten();

        for position in &frame.positions {
            let center = transform.apply(position.x, position.y);
            let color = parse_hex_color(&position.color);
            let is_selected = selected.as_deref() == Some(position.id.as_str());

            if is_selected {
                painter.circle_stroke(center, SELECTED_RADIUS + 3.0, Stroke::new(2.0, Color32::WHITE));
            }
            let radius = if is_selected { SELECTED_RADIUS } else { MARKER_RADIUS };
            painter.circle_filled(center, radius, color);
            painter.text(
                center + vec2(0.0, -(radius + 4.0)),
                Align2::CENTER_BOTTOM,
                driver_code(&position.name),
                FontId::monospace(10.0),
                ui.visuals().strong_text_color(),
            );

            if let Some(pointer) = click_pos {
                if center.distance(pointer) <= PICK_RADIUS {
                    clicked_driver = Some(position.id.clone());
                }
            }
        }

        if let Some(id) = clicked_driver {
            let mut selection = ctx.selected_driver.write();
            if selection.as_deref() == Some(id.as_str()) {
                *selection = None;
            } else {
                *selection = Some(id);
            }
        }
    }
}

/// World bounds covering the outline and every visible driver.
fn world_bounds(session: &RaceSession, frame: &Frame) -> Option<((f64, f64), (f64, f64))> {
    let mut min = (f64::INFINITY, f64::INFINITY);
    let mut max = (f64::NEG_INFINITY, f64::NEG_INFINITY);
    let mut any = false;

    for i in 0..session.track_map.len() {
        if let Some((x, y)) = session.track_map.point_at(i) {
            min.0 = min.0.min(x);
            min.1 = min.1.min(y);
            max.0 = max.0.max(x);
            max.1 = max.1.max(y);
            any = true;
        }
    }
    for position in &frame.positions {
        min.0 = min.0.min(position.x);
        min.1 = min.1.min(position.y);
        max.0 = max.0.max(position.x);
        max.1 = max.1.max(position.y);
        any = true;
    }

    any.then_some((min, max))
}
