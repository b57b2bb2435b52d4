//! Playback engine implementation

use std::sync::Arc;
use std::time::{Duration, Instant};

use parking_lot::RwLock;

use super::BASE_STEP_MS;

/// Playback state stored internally
#[derive(Debug, Clone)]
struct EngineState {
    timeline: Arc<[f64]>,
    cursor: usize,
    playing: bool,
    speed: f64,
    /// Wall-clock reference of the last cursor advancement; `None` means
    /// the next tick only establishes the reference.
    last_advance: Option<Instant>,
}

/// Consistent read of the playback state for one frame of rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaybackSnapshot {
    pub cursor: usize,
    pub current_time: f64,
    pub max_time: f64,
    pub playing: bool,
    pub speed: f64,
    pub timeline_len: usize,
}

/// The playback engine: a single-writer cursor over the session timeline.
///
/// All operations on an empty timeline are benign no-ops; the cursor stays
/// at 0 and the derived times read as 0.
pub struct PlaybackEngine {
    state: RwLock<EngineState>,
}

impl PlaybackEngine {
    pub fn new() -> Self {
        Self {
            state: RwLock::new(EngineState {
                timeline: Vec::new().into(),
                cursor: 0,
                playing: false,
                speed: 1.0,
                last_advance: None,
            }),
        }
    }

    /// Install a new session's timeline. The cursor resets to the start,
    /// playback stops, and any in-flight pacing reference is discarded.
    pub fn load_timeline(&self, timeline: Arc<[f64]>) {
        let mut state = self.state.write();
        state.timeline = timeline;
        state.cursor = 0;
        state.playing = false;
        state.last_advance = None;
    }

    /// Transition to the playing state. Clears the pacing reference so the
    /// first tick measures elapsed time from now rather than applying
    /// wall-time that passed while paused.
    pub fn play(&self) {
        let mut state = self.state.write();
        state.playing = true;
        state.last_advance = None;
    }

    /// Transition to the paused state. Idempotent.
    pub fn pause(&self) {
        self.state.write().playing = false;
    }

    pub fn toggle_playback(&self) {
        let mut state = self.state.write();
        state.playing = !state.playing;
        if state.playing {
            state.last_advance = None;
        }
    }

    /// Seek to the smallest index whose time is at or past `target`.
    /// Targets beyond the last sample wrap to the start; the asymmetry is
    /// part of the documented contract.
    pub fn seek_to_time(&self, target: f64) {
        let mut state = self.state.write();
        let idx = state.timeline.partition_point(|&t| t < target);
        state.cursor = if idx < state.timeline.len() { idx } else { 0 };
    }

    /// Set the speed multiplier. Non-positive values are ignored; the
    /// play/pause state is untouched.
    pub fn set_speed(&self, speed: f64) {
        if speed > 0.0 {
            self.state.write().speed = speed;
        }
    }

    /// Advance the cursor if enough wall time has elapsed since the last
    /// advancement. Called once per repaint while playing; returns whether
    /// the cursor moved. The advance interval is `100ms / speed`, so the
    /// cursor steps by exactly one index at a time. Trying to advance past
    /// the final index pauses playback instead of looping.
    pub fn tick(&self, now: Instant) -> bool {
        let mut state = self.state.write();
        if !state.playing || state.timeline.is_empty() {
            return false;
        }

        let reference = match state.last_advance {
            Some(at) => at,
            None => {
                state.last_advance = Some(now);
                return false;
            }
        };

        let step = Duration::from_secs_f64(BASE_STEP_MS / 1000.0 / state.speed);
        if now.duration_since(reference) < step {
            return false;
        }

        if state.cursor + 1 >= state.timeline.len() {
            // end of timeline: auto-pause, keep the cursor on the last sample
            state.playing = false;
            state.last_advance = None;
            return false;
        }

        state.cursor += 1;
        state.last_advance = Some(now);
        true
    }

    pub fn is_playing(&self) -> bool {
        self.state.read().playing
    }

    pub fn speed(&self) -> f64 {
        self.state.read().speed
    }

    pub fn cursor(&self) -> usize {
        self.state.read().cursor
    }

    /// Time value under the cursor, 0 when the timeline is empty.
    pub fn current_time(&self) -> f64 {
        let state = self.state.read();
        state.timeline.get(state.cursor).copied().unwrap_or(0.0)
    }

    /// Last time value of the timeline, 0 when empty.
    pub fn max_time(&self) -> f64 {
        self.state.read().timeline.last().copied().unwrap_or(0.0)
    }

    /// One consistent read of everything the rendering layer needs.
    pub fn snapshot(&self) -> PlaybackSnapshot {
        let state = self.state.read();
        PlaybackSnapshot {
            cursor: state.cursor,
            current_time: state.timeline.get(state.cursor).copied().unwrap_or(0.0),
            max_time: state.timeline.last().copied().unwrap_or(0.0),
            playing: state.playing,
            speed: state.speed,
            timeline_len: state.timeline.len(),
        }
    }
}

impl Default for PlaybackEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine_with(timeline: &[f64]) -> PlaybackEngine {
        let engine = PlaybackEngine::new();
        engine.load_timeline(timeline.to_vec().into());
        engine
    }

    fn ms(millis: u64) -> Duration {
        Duration::from_millis(millis)
    }

    #[test]
    fn seek_finds_smallest_index_at_or_past_target() {
        let engine = engine_with(&[0.0, 2.0, 4.0, 6.0]);
        engine.seek_to_time(3.0);
        assert_eq!(engine.cursor(), 2);
        engine.seek_to_time(4.0);
        assert_eq!(engine.cursor(), 2);
        engine.seek_to_time(0.0);
        assert_eq!(engine.cursor(), 0);
        engine.seek_to_time(6.0);
        assert_eq!(engine.cursor(), 3);
    }

    #[test]
    fn seek_past_the_end_clamps_to_start() {
        let engine = engine_with(&[0.0, 5.0, 10.0]);
        engine.seek_to_time(100.0);
        assert_eq!(engine.cursor(), 0);
    }

    #[test]
    fn empty_timeline_is_inert() {
        let engine = PlaybackEngine::new();
        engine.play();
        engine.seek_to_time(42.0);
        assert!(!engine.tick(Instant::now()));
        let snapshot = engine.snapshot();
        assert_eq!(snapshot.cursor, 0);
        assert_eq!(snapshot.current_time, 0.0);
        assert_eq!(snapshot.max_time, 0.0);
    }

    #[test]
    fn first_tick_only_establishes_the_pacing_reference() {
        let engine = engine_with(&[0.0, 1.0, 2.0]);
        engine.play();
        let t0 = Instant::now();
        assert!(!engine.tick(t0));
        assert_eq!(engine.cursor(), 0);
        assert!(engine.tick(t0 + ms(100)));
        assert_eq!(engine.cursor(), 1);
    }

    #[test]
    fn advance_interval_scales_inversely_with_speed() {
        let engine = engine_with(&[0.0, 1.0, 2.0, 3.0]);
        engine.set_speed(2.0);
        engine.play();
        let t0 = Instant::now();
        engine.tick(t0);
        assert!(!engine.tick(t0 + ms(49)));
        assert!(engine.tick(t0 + ms(50)));

        // speed 1 takes the full base interval for the next step
        engine.set_speed(1.0);
        assert!(!engine.tick(t0 + ms(100)));
        assert!(engine.tick(t0 + ms(150)));
    }

    #[test]
    fn ticks_never_move_the_cursor_backwards() {
        let engine = engine_with(&[0.0, 1.0, 2.0]);
        engine.play();
        let t0 = Instant::now();
        engine.tick(t0);
        let mut last = engine.cursor();
        for step in 1..10 {
            engine.tick(t0 + ms(step * 100));
            let cursor = engine.cursor();
            assert!(cursor >= last);
            last = cursor;
        }
    }

    #[test]
    fn reaching_the_final_index_pauses_exactly_once() {
        let engine = engine_with(&[0.0, 1.0]);
        engine.play();
        let t0 = Instant::now();
        engine.tick(t0);
        assert!(engine.tick(t0 + ms(100)));
        assert_eq!(engine.cursor(), 1);
        assert!(engine.is_playing());

        // the next eligible tick hits the end and auto-pauses
        assert!(!engine.tick(t0 + ms(200)));
        assert!(!engine.is_playing());
        assert_eq!(engine.cursor(), 1);

        // further ticks are no-ops in the paused state
        assert!(!engine.tick(t0 + ms(300)));
        assert!(!engine.is_playing());
    }

    #[test]
    fn play_resets_the_pacing_reference() {
        let engine = engine_with(&[0.0, 1.0, 2.0]);
        engine.play();
        let t0 = Instant::now();
        engine.tick(t0);
        engine.pause();

        // a long pause must not be applied retroactively
        let t1 = t0 + ms(10_000);
        engine.play();
        assert!(!engine.tick(t1));
        assert_eq!(engine.cursor(), 0);
        assert!(engine.tick(t1 + ms(100)));
    }

    #[test]
    fn pause_and_set_speed_are_idempotent() {
        let engine = engine_with(&[0.0, 1.0]);
        engine.play();
        engine.pause();
        let first = engine.snapshot();
        engine.pause();
        assert_eq!(engine.snapshot(), first);

        engine.set_speed(4.0);
        let first = engine.snapshot();
        engine.set_speed(4.0);
        assert_eq!(engine.snapshot(), first);
    }

    #[test]
    fn non_positive_speeds_are_ignored() {
        let engine = engine_with(&[0.0, 1.0]);
        engine.set_speed(0.0);
        assert_eq!(engine.speed(), 1.0);
        engine.set_speed(-2.0);
        assert_eq!(engine.speed(), 1.0);
        engine.set_speed(0.5);
        assert_eq!(engine.speed(), 0.5);
    }

    #[test]
    fn loading_a_timeline_resets_cursor_and_state() {
        let engine = engine_with(&[0.0, 1.0, 2.0, 3.0]);
        engine.seek_to_time(2.0);
        engine.play();
        assert_eq!(engine.cursor(), 2);

        engine.load_timeline(vec![0.0, 10.0].into());
        let snapshot = engine.snapshot();
        assert_eq!(snapshot.cursor, 0);
        assert!(!snapshot.playing);
        assert_eq!(snapshot.max_time, 10.0);
    }

    #[test]
    fn toggle_flips_between_states() {
        let engine = engine_with(&[0.0, 1.0]);
        assert!(!engine.is_playing());
        engine.toggle_playback();
        assert!(engine.is_playing());
        engine.toggle_playback();
        assert!(!engine.is_playing());
    }
}
