//! Session data model
//!
//! Wire types deserialized from the backend's `/load_race` response. All
//! per-driver arrays run parallel to the session timeline and share its
//! index alignment. Missing values are handled permissively: an absent
//! speed sample reads as 0, and a driver with an absent coordinate is
//! simply off-track at that index.

use indexmap::IndexMap;
use serde::Deserialize;

/// Track outline as ordered point arrays. Absent points split the drawn
/// polyline rather than being interpolated over.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TrackOutline {
    #[serde(default)]
    pub x: Vec<Option<f64>>,
    #[serde(default)]
    pub y: Vec<Option<f64>>,
}

impl TrackOutline {
    /// Point at `i`, present only when both coordinates are.
    pub fn point_at(&self, i: usize) -> Option<(f64, f64)> {
        let x = self.x.get(i).copied().flatten()?;
        let y = self.y.get(i).copied().flatten()?;
        Some((x, y))
    }

    pub fn len(&self) -> usize {
        self.x.len().max(self.y.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Per-driver telemetry arrays plus static display metadata.
#[derive(Debug, Clone, Deserialize)]
pub struct DriverRecord {
    pub name: String,
    pub team: String,
    pub color: String,
    pub compound: String,
    #[serde(default)]
    pub x: Vec<Option<f64>>,
    #[serde(default)]
    pub y: Vec<Option<f64>>,
    #[serde(default)]
    pub speed: Vec<Option<f64>>,
}

impl DriverRecord {
    /// Coordinates at `i`; `None` when either axis is unsampled there.
    pub fn position_at(&self, i: usize) -> Option<(f64, f64)> {
        let x = self.x.get(i).copied().flatten()?;
        let y = self.y.get(i).copied().flatten()?;
        Some((x, y))
    }

    /// Speed at `i`, defaulting to 0 for missing samples.
    pub fn speed_at(&self, i: usize) -> f64 {
        self.speed.get(i).copied().flatten().unwrap_or(0.0)
    }
}

/// One fully loaded race: event label, track outline, the shared timeline
/// and the driver mapping. Replaced wholesale on every successful load;
/// the driver mapping's insertion order is the stable tie-break order for
/// ranking.
#[derive(Debug, Clone, Deserialize)]
pub struct RaceSession {
    pub event_name: String,
    #[serde(default)]
    pub track_map: TrackOutline,
    #[serde(default)]
    pub timeline: Vec<f64>,
    #[serde(default)]
    pub drivers: IndexMap<String, DriverRecord>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_session_with_null_samples() {
        let json = r##"{
            "event_name": "Bahrain Grand Prix",
            "track_map": { "x": [0.0, 10.0, null, 20.0], "y": [0.0, 5.0, null, 8.0] },
            "timeline": [0.0, 0.5, 1.0],
            "drivers": {
                "VER": {
                    "name": "Max Verstappen",
                    "team": "Red Bull Racing",
                    "color": "#3671C6",
                    "compound": "SOFT",
                    "x": [100.0, null, 102.0],
                    "y": [50.0, null, 51.0],
                    "speed": [280.0, null, 295.0]
                }
            }
        }"##;

        let session: RaceSession = serde_json::from_str(json).unwrap();
        assert_eq!(session.event_name, "Bahrain Grand Prix");
        assert_eq!(session.timeline.len(), 3);
        assert_eq!(session.track_map.point_at(1), Some((10.0, 5.0)));
        assert_eq!(session.track_map.point_at(2), None);

        let driver = &session.drivers["VER"];
        assert_eq!(driver.position_at(0), Some((100.0, 50.0)));
        assert_eq!(driver.position_at(1), None);
        assert_eq!(driver.speed_at(1), 0.0);
        assert_eq!(driver.speed_at(2), 295.0);
    }

    #[test]
    fn absent_arrays_default_to_empty() {
        let json = r#"{ "event_name": "Test", "drivers": {} }"#;
        let session: RaceSession = serde_json::from_str(json).unwrap();
        assert!(session.timeline.is_empty());
        assert!(session.track_map.is_empty());
        assert!(session.drivers.is_empty());
    }

    #[test]
    fn out_of_range_samples_read_as_absent() {
        let driver = DriverRecord {
            name: "Test".into(),
            team: "Test".into(),
            color: "#ffffff".into(),
            compound: "HARD".into(),
            x: vec![Some(1.0)],
            y: vec![Some(2.0)],
            speed: vec![Some(100.0)],
        };
        assert_eq!(driver.position_at(5), None);
        assert_eq!(driver.speed_at(5), 0.0);
    }
}
