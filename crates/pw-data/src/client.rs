//! HTTP client for the race backend

use std::time::Duration;

use pw_core::frame::Frame;
use pw_core::session::RaceSession;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::ApiError;

/// Status string a healthy backend answers the probe with.
pub const EXPECTED_STATUS: &str = "F1 Pro Max API Online";

/// Gap sentinel reported when the leader runs alone.
pub const NO_CHASER_GAP: f64 = 1000.0;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(20);

#[derive(Debug, Clone, Serialize)]
pub struct LoadRaceRequest {
    pub year: u16,
    pub circuit: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CommentaryRequest {
    pub time_val: f64,
    pub leader_name: String,
    pub leader_team: String,
    pub leader_compound: String,
    pub leader_speed: f64,
    pub chaser_name: String,
    pub gap: f64,
}

impl CommentaryRequest {
    /// Build a request from the current frame; `None` without a leader.
    /// The gap is the absolute x-distance between leader and chaser, or a
    /// large sentinel when there is no chaser.
    pub fn from_frame(frame: &Frame, time_val: f64) -> Option<Self> {
        let leader = frame.leader()?;
        let (chaser_name, gap) = match frame.chaser() {
            Some(chaser) => (chaser.name.clone(), (leader.x - chaser.x).abs()),
            None => ("N/A".to_string(), NO_CHASER_GAP),
        };
        Some(Self {
            time_val,
            leader_name: leader.name.clone(),
            leader_team: leader.team.clone(),
            leader_compound: leader.compound.clone(),
            leader_speed: leader.speed,
            chaser_name,
            gap,
        })
    }
}

#[derive(Debug, Deserialize)]
struct StatusResponse {
    #[serde(default)]
    status: String,
}

#[derive(Debug, Deserialize)]
struct CommentaryResponse {
    #[serde(default)]
    commentary: String,
}

/// Client bound to the base URL it was issued with. Build a fresh client
/// per operation so mid-flight configuration edits never leak in.
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());
        Self {
            http,
            base_url: base_url.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Connectivity probe: true when the backend answers with the expected
    /// status string. Any failure reads as "not connected".
    pub async fn probe(&self) -> bool {
        let url = format!("{}/", self.base_url);
        match self.http.get(&url).send().await {
            Ok(response) => match response.json::<StatusResponse>().await {
                Ok(body) => body.status == EXPECTED_STATUS,
                Err(_) => false,
            },
            Err(_) => false,
        }
    }

    /// Load a full session for `year` at `circuit`.
    pub async fn load_race(&self, year: u16, circuit: &str) -> Result<RaceSession, ApiError> {
        let url = format!("{}/load_race", self.base_url);
        debug!(%url, year, circuit, "requesting race data");
        let response = self
            .http
            .post(&url)
            .json(&LoadRaceRequest {
                year,
                circuit: circuit.to_string(),
            })
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(ApiError::Status(response.status()));
        }
        Ok(response.json::<RaceSession>().await?)
    }

    /// Fetch one line of commentary for the current race situation.
    pub async fn commentary(&self, request: &CommentaryRequest) -> Result<String, ApiError> {
        let url = format!("{}/commentary", self.base_url);
        let response = self.http.post(&url).json(request).send().await?;
        if !response.status().is_success() {
            return Err(ApiError::Status(response.status()));
        }
        let body = response.json::<CommentaryResponse>().await?;
        Ok(body.commentary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pw_core::frame::DriverPosition;

    fn position(id: &str, x: f64, speed: f64, rank: usize) -> DriverPosition {
        DriverPosition {
            id: id.to_string(),
            name: format!("{id} Driver"),
            team: "Team".to_string(),
            color: "#ffffff".to_string(),
            compound: "HARD".to_string(),
            x,
            y: 0.0,
            speed,
            rank,
        }
    }

    #[test]
    fn commentary_request_measures_the_gap() {
        let frame = Frame {
            positions: vec![position("LEC", 120.0, 310.0, 1), position("SAI", 95.0, 305.0, 2)],
        };
        let request = CommentaryRequest::from_frame(&frame, 42.0).unwrap();
        assert_eq!(request.leader_name, "LEC Driver");
        assert_eq!(request.chaser_name, "SAI Driver");
        assert_eq!(request.gap, 25.0);
        assert_eq!(request.time_val, 42.0);
        assert_eq!(request.leader_speed, 310.0);
    }

    #[test]
    fn lone_leader_uses_the_sentinel_gap() {
        let frame = Frame {
            positions: vec![position("VER", 10.0, 300.0, 1)],
        };
        let request = CommentaryRequest::from_frame(&frame, 0.0).unwrap();
        assert_eq!(request.chaser_name, "N/A");
        assert_eq!(request.gap, NO_CHASER_GAP);
    }

    #[test]
    fn empty_frame_yields_no_request() {
        assert!(CommentaryRequest::from_frame(&Frame::default(), 10.0).is_none());
    }

    #[test]
    fn wire_field_names_match_the_backend() {
        let frame = Frame {
            positions: vec![position("HAM", 0.0, 290.0, 1)],
        };
        let request = CommentaryRequest::from_frame(&frame, 15.0).unwrap();
        let value = serde_json::to_value(&request).unwrap();
        for key in [
            "time_val",
            "leader_name",
            "leader_team",
            "leader_compound",
            "leader_speed",
            "chaser_name",
            "gap",
        ] {
            assert!(value.get(key).is_some(), "missing field {key}");
        }

        let load = serde_json::to_value(LoadRaceRequest {
            year: 2024,
            circuit: "Monaco".to_string(),
        })
        .unwrap();
        assert_eq!(load["year"], 2024);
        assert_eq!(load["circuit"], "Monaco");
    }
}
