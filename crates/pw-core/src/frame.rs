//! Frame resolution: projecting the cursor into ranked driver positions

use crate::session::RaceSession;

/// One driver's state at the current cursor, with its assigned rank.
#[derive(Debug, Clone, PartialEq)]
pub struct DriverPosition {
    pub id: String,
    pub name: String,
    pub team: String,
    pub color: String,
    pub compound: String,
    pub x: f64,
    pub y: f64,
    pub speed: f64,
    /// 1-based; rank 1 is the fastest positioned driver.
    pub rank: usize,
}

/// Ranked driver positions for a single cursor value. Ephemeral: resolved
/// once per cursor change and never stored.
#[derive(Debug, Clone, Default)]
pub struct Frame {
    pub positions: Vec<DriverPosition>,
}

impl Frame {
    pub fn leader(&self) -> Option<&DriverPosition> {
        self.positions.first()
    }

    pub fn chaser(&self) -> Option<&DriverPosition> {
        self.positions.get(1)
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

/// Project the session's driver arrays at `cursor` into a ranked frame.
///
/// Drivers without both coordinates at the cursor are excluded. The order
/// is descending instantaneous speed; ties keep the driver mapping's
/// insertion order (stable sort). Speed ordering is a documented stand-in
/// for true track position, not a physically accurate race order.
pub fn resolve_frame(session: &RaceSession, cursor: usize) -> Frame {
    let mut positions: Vec<DriverPosition> = session
        .drivers
        .iter()
        .filter_map(|(id, driver)| {
            let (x, y) = driver.position_at(cursor)?;
            Some(DriverPosition {
                id: id.clone(),
                name: driver.name.clone(),
                team: driver.team.clone(),
                color: driver.color.clone(),
                compound: driver.compound.clone(),
                x,
                y,
                speed: driver.speed_at(cursor),
                rank: 0,
            })
        })
        .collect();

    positions.sort_by(|a, b| {
        b.speed
            .partial_cmp(&a.speed)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    for (i, position) in positions.iter_mut().enumerate() {
        position.rank = i + 1;
    }

    Frame { positions }
}
