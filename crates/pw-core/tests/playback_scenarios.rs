//! End-to-end playback scenarios over a small synthetic session

use std::time::{Duration, Instant};

use indexmap::IndexMap;
use pw_core::frame::resolve_frame;
use pw_core::session::{DriverRecord, RaceSession, TrackOutline};
use pw_core::state::ViewerContext;

fn driver(name: &str, speeds: Vec<Option<f64>>, xs: Vec<Option<f64>>, ys: Vec<Option<f64>>) -> DriverRecord {
    DriverRecord {
        name: name.to_string(),
        team: "Test Team".to_string(),
        color: "#00d2be".to_string(),
        compound: "SOFT".to_string(),
        x: xs,
        y: ys,
        speed: speeds,
    }
}

fn positioned(values: &[f64]) -> Vec<Option<f64>> {
    values.iter().map(|&v| Some(v)).collect()
}

fn two_driver_session() -> RaceSession {
    let mut drivers = IndexMap::new();
    drivers.insert(
        "A".to_string(),
        driver(
            "Alpha",
            positioned(&[10.0, 20.0, 30.0, 40.0]),
            positioned(&[1.0, 2.0, 3.0, 4.0]),
            positioned(&[0.0, 0.0, 0.0, 0.0]),
        ),
    );
    drivers.insert(
        "B".to_string(),
        driver(
            "Bravo",
            positioned(&[50.0, 5.0, 5.0, 5.0]),
            positioned(&[9.0, 9.0, 9.0, 9.0]),
            positioned(&[0.0, 0.0, 0.0, 0.0]),
        ),
    );
    RaceSession {
        event_name: "Scenario Grand Prix".to_string(),
        track_map: TrackOutline::default(),
        timeline: vec![0.0, 1.0, 2.0, 3.0],
        drivers,
    }
}

#[test]
fn lead_changes_as_the_cursor_advances() {
    let session = two_driver_session();

    let frame = resolve_frame(&session, 0);
    assert_eq!(frame.leader().unwrap().id, "B");
    assert_eq!(frame.chaser().unwrap().id, "A");

    let frame = resolve_frame(&session, 3);
    assert_eq!(frame.leader().unwrap().id, "A");
    assert_eq!(frame.chaser().unwrap().id, "B");
}

#[test]
fn playback_walks_the_whole_timeline_and_stops() {
    let runtime = tokio::runtime::Builder::new_current_thread().build().unwrap();
    let context = ViewerContext::new(runtime.handle().clone());
    context.install_session(two_driver_session());

    let engine = &context.playback;
    engine.play();

    let t0 = Instant::now();
    engine.tick(t0);
    let mut cursors = vec![engine.cursor()];
    for step in 1..8 {
        engine.tick(t0 + Duration::from_millis(step * 100));
        cursors.push(engine.cursor());
    }

    // strictly forward, each sample visited, parked at the final index
    assert_eq!(cursors, vec![0, 1, 2, 3, 3, 3, 3, 3]);
    assert!(!engine.is_playing());

    let frame = resolve_frame(context.session.read().as_ref().unwrap(), engine.cursor());
    assert_eq!(frame.leader().unwrap().id, "A");
}

#[test]
fn late_joining_driver_appears_mid_session() {
    let mut session = two_driver_session();
    session.drivers.insert(
        "C".to_string(),
        driver(
            "Charlie",
            positioned(&[0.0, 0.0, 0.0, 0.0]),
            vec![None, None, Some(5.0), Some(5.0)],
            vec![None, None, Some(5.0), Some(5.0)],
        ),
    );

    for cursor in [0, 1] {
        let frame = resolve_frame(&session, cursor);
        assert!(frame.positions.iter().all(|p| p.id != "C"));
    }
    for cursor in [2, 3] {
        let frame = resolve_frame(&session, cursor);
        assert!(frame.positions.iter().any(|p| p.id == "C"));
    }
}

#[test]
fn installing_a_session_resets_playback_and_bumps_the_generation() {
    let runtime = tokio::runtime::Builder::new_current_thread().build().unwrap();
    let context = ViewerContext::new(runtime.handle().clone());

    context.install_session(two_driver_session());
    let generation = context.generation();
    context.playback.seek_to_time(2.0);
    context.playback.play();
    assert_eq!(context.playback.cursor(), 2);

    context.install_session(two_driver_session());
    assert_eq!(context.generation(), generation + 1);
    let snapshot = context.playback.snapshot();
    assert_eq!(snapshot.cursor, 0);
    assert!(!snapshot.playing);
}

#[test]
fn seek_beyond_the_last_sample_wraps_to_the_start() {
    let runtime = tokio::runtime::Builder::new_current_thread().build().unwrap();
    let context = ViewerContext::new(runtime.handle().clone());
    context.install_session(RaceSession {
        event_name: "Short".to_string(),
        track_map: TrackOutline::default(),
        timeline: vec![0.0, 5.0, 10.0],
        drivers: IndexMap::new(),
    });

    context.playback.seek_to_time(100.0);
    assert_eq!(context.playback.cursor(), 0);
}
