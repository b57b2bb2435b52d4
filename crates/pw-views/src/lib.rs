//! Views rendering the loaded session
//!
//! Each view draws from the shared `ViewerContext` plus the frame the app
//! resolved for the current cursor.

mod standings_view;
mod track_map_view;

pub use standings_view::StandingsView;
pub use track_map_view::TrackMapView;

use egui::Color32;

/// Parse a `#rrggbb` display color from the backend; anything malformed
/// falls back to a neutral gray.
pub fn parse_hex_color(hex: &str) -> Color32 {
    let digits = hex.trim().trim_start_matches('#');
    if digits.len() != 6 {
        return Color32::GRAY;
    }
    match (
        u8::from_str_radix(&digits[0..2], 16),
        u8::from_str_radix(&digits[2..4], 16),
        u8::from_str_radix(&digits[4..6], 16),
    ) {
        (Ok(r), Ok(g), Ok(b)) => Color32::from_rgb(r, g, b),
        _ => Color32::GRAY,
    }
}

/// Three-letter marker code for a driver, derived from the last name.
pub fn driver_code(name: &str) -> String {
    name.split_whitespace()
        .last()
        .unwrap_or(name)
        .chars()
        .take(3)
        .collect::<String>()
        .to_uppercase()
}
