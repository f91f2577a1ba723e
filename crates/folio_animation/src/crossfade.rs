//! Two-slot crossfade preset
//!
//! The outgoing slot fades out while translating up; the incoming slot fades
//! in while rising from below. By default both start together and last the
//! same duration (a fully overlapped crossfade). `incoming_offset_ms` delays
//! the incoming half for a staggered variant.

use crate::easing::Easing;
use crate::timeline::{Timeline, TrackId};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CrossfadeConfig {
    pub duration_ms: u32,
    pub incoming_offset_ms: u32,
    /// Vertical travel of each slot in pixels
    pub travel_px: f32,
    pub easing: Easing,
}

impl Default for CrossfadeConfig {
    fn default() -> Self {
        Self {
            duration_ms: 800,
            incoming_offset_ms: 0,
            travel_px: 20.0,
            easing: Easing::EaseInOutQuad,
        }
    }
}

/// Track handles for one crossfade timeline
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CrossfadeTracks {
    pub outgoing_opacity: TrackId,
    pub outgoing_offset: TrackId,
    pub incoming_opacity: TrackId,
    pub incoming_offset: TrackId,
}

impl CrossfadeConfig {
    /// Build an unstarted timeline for one crossfade
    pub fn build(&self) -> (Timeline, CrossfadeTracks) {
        let mut timeline = Timeline::new();
        let d = self.duration_ms;
        let lag = self.incoming_offset_ms;

        let tracks = CrossfadeTracks {
            outgoing_opacity: timeline.add(0, d, 1.0, 0.0, self.easing),
            outgoing_offset: timeline.add(0, d, 0.0, -self.travel_px, self.easing),
            incoming_opacity: timeline.add(lag, d, 0.0, 1.0, self.easing),
            incoming_offset: timeline.add(lag, d, self.travel_px, 0.0, self.easing),
        };

        (timeline, tracks)
    }
}
