//! Season and circuit picker
//!
//! Lives in the header; returns true when the user asks for a load.

use egui::Ui;
use pw_data::catalog::{CIRCUITS, YEARS};

#[derive(Clone, PartialEq)]
pub struct RaceSelection {
    pub year: u16,
    pub circuit: String,
}

impl Default for RaceSelection {
    fn default() -> Self {
        Self {
            year: YEARS[0],
            circuit: CIRCUITS[0].to_string(),
        }
    }
}

impl RaceSelection {
    /// Draw the picker. Returns true when the load button was clicked.
    pub fn ui(&mut self, ui: &mut Ui, loading: bool) -> bool {
        egui::ComboBox::from_id_source("pw_year_select")
            .selected_text(self.year.to_string())
            .width(72.0)
            .show_ui(ui, |ui| {
                for &year in YEARS {
                    ui.selectable_value(&mut self.year, year, year.to_string());
                }
            });

        egui::ComboBox::from_id_source("pw_circuit_select")
            .selected_text(self.circuit.clone())
            .width(140.0)
            .show_ui(ui, |ui| {
                for &circuit in CIRCUITS {
                    ui.selectable_value(&mut self.circuit, circuit.to_string(), circuit);
                }
            });

        let label = if loading { "Loading…" } else { "Load Race" };
        ui.add_enabled(!loading, egui::Button::new(label)).clicked()
    }
}
