//! Timeline orchestration for multiple tweens
//!
//! A timeline owns a set of tracks, each tweening one value from `from` to
//! `to` over `duration_ms`, starting `offset_ms` after the timeline starts.
//! Tracks may overlap freely.

use crate::easing::Easing;
use slotmap::{new_key_type, SlotMap};

new_key_type! {
    pub struct TrackId;
}

/// A single tweened value
#[derive(Clone, Debug)]
struct Track {
    offset_ms: f64,
    duration_ms: f64,
    from: f32,
    to: f32,
    easing: Easing,
}

impl Track {
    fn value_at(&self, elapsed_ms: f64) -> f32 {
        let local = elapsed_ms - self.offset_ms;
        if local <= 0.0 {
            return self.from;
        }
        if self.duration_ms <= 0.0 || local >= self.duration_ms {
            return self.to;
        }
        let progress = (local / self.duration_ms) as f32;
        self.from + (self.to - self.from) * self.easing.apply(progress)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum PlayState {
    Idle,
    Playing,
    Completed,
    Killed,
}

/// A timeline that orchestrates several tracks
#[derive(Clone, Debug)]
pub struct Timeline {
    tracks: SlotMap<TrackId, Track>,
    elapsed_ms: f64,
    duration_ms: f64,
    state: PlayState,
}

impl Timeline {
    pub fn new() -> Self {
        Self {
            tracks: SlotMap::with_key(),
            elapsed_ms: 0.0,
            duration_ms: 0.0,
            state: PlayState::Idle,
        }
    }

    /// Add a track starting `offset_ms` after the timeline starts
    pub fn add(
        &mut self,
        offset_ms: u32,
        duration_ms: u32,
        from: f32,
        to: f32,
        easing: Easing,
    ) -> TrackId {
        let id = self.tracks.insert(Track {
            offset_ms: offset_ms as f64,
            duration_ms: duration_ms as f64,
            from,
            to,
            easing,
        });

        self.duration_ms = self.duration_ms.max(offset_ms as f64 + duration_ms as f64);
        id
    }

    pub fn play(&mut self) {
        self.elapsed_ms = 0.0;
        self.state = PlayState::Playing;
    }

    /// Stop without completing. Track values freeze where they are.
    pub fn kill(&mut self) {
        if self.state == PlayState::Playing {
            self.state = PlayState::Killed;
        }
    }

    /// Jump to the end and mark complete
    pub fn finish(&mut self) {
        self.elapsed_ms = self.duration_ms;
        self.state = PlayState::Completed;
    }

    pub fn is_playing(&self) -> bool {
        self.state == PlayState::Playing
    }

    pub fn is_complete(&self) -> bool {
        self.state == PlayState::Completed
    }

    pub fn is_killed(&self) -> bool {
        self.state == PlayState::Killed
    }

    pub fn duration_ms(&self) -> f64 {
        self.duration_ms
    }

    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed_ms
    }

    /// Time left until completion (zero when not playing)
    pub fn remaining_ms(&self) -> f64 {
        if self.is_playing() {
            (self.duration_ms - self.elapsed_ms).max(0.0)
        } else {
            0.0
        }
    }

    /// Overall progress in `0.0..=1.0`
    pub fn progress(&self) -> f32 {
        if self.duration_ms <= 0.0 {
            return 1.0;
        }
        (self.elapsed_ms / self.duration_ms).clamp(0.0, 1.0) as f32
    }

    /// Advance by `dt_ms`. Returns true if this tick completed the timeline.
    pub fn tick(&mut self, dt_ms: f64) -> bool {
        if !self.is_playing() {
            return false;
        }

        self.elapsed_ms += dt_ms.max(0.0);
        if self.elapsed_ms >= self.duration_ms {
            self.finish();
            return true;
        }
        false
    }

    /// Current value of a track
    pub fn value(&self, id: TrackId) -> Option<f32> {
        self.tracks.get(id).map(|t| t.value_at(self.elapsed_ms))
    }
}

impl Default for Timeline {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duration_covers_offset_tracks() {
        let mut tl = Timeline::new();
        tl.add(0, 800, 1.0, 0.0, Easing::Linear);
        tl.add(200, 800, 0.0, 1.0, Easing::Linear);
        assert_eq!(tl.duration_ms(), 1000.0);
    }

    #[test]
    fn test_values_before_during_after() {
        let mut tl = Timeline::new();
        let delayed = tl.add(100, 100, 0.0, 10.0, Easing::Linear);
        tl.play();

        assert_eq!(tl.value(delayed), Some(0.0));
        tl.tick(150.0);
        assert!((tl.value(delayed).unwrap() - 5.0).abs() < 1e-4);
        assert!(tl.tick(50.0));
        assert_eq!(tl.value(delayed), Some(10.0));
        assert!(tl.is_complete());
    }

    #[test]
    fn test_kill_freezes_values() {
        let mut tl = Timeline::new();
        let track = tl.add(0, 100, 0.0, 1.0, Easing::Linear);
        tl.play();
        tl.tick(40.0);
        tl.kill();

        assert!(!tl.tick(100.0));
        assert!(tl.is_killed());
        assert!((tl.value(track).unwrap() - 0.4).abs() < 1e-4);
        assert_eq!(tl.remaining_ms(), 0.0);
    }

    #[test]
    fn test_tick_is_noop_until_played() {
        let mut tl = Timeline::new();
        tl.add(0, 100, 0.0, 1.0, Easing::Linear);
        assert!(!tl.tick(500.0));
        assert_eq!(tl.elapsed_ms(), 0.0);
    }

    #[test]
    fn test_remaining_and_progress() {
        let mut tl = Timeline::new();
        tl.add(0, 800, 0.0, 1.0, Easing::EaseInOutQuad);
        tl.play();
        tl.tick(200.0);

        assert_eq!(tl.remaining_ms(), 600.0);
        assert!((tl.progress() - 0.25).abs() < 1e-6);
    }
}
