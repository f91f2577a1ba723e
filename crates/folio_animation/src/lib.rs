//! Folio Animation System
//!
//! Timeline tweening and timer orchestration on a deterministic clock.
//!
//! # Features
//!
//! - **Easing**: CSS-compatible easing curves
//! - **Timelines**: Tracks with offsets, durations and easings, killable mid-flight
//! - **Scheduler**: Timeouts, intervals and timelines driven by a virtual clock,
//!   polled one event at a time
//! - **Rotating text**: A two-slot crossfade rotator with startup delay, width
//!   auto-sizing and cancellation-safe lifecycle
//!
//! # Driving the scheduler
//!
//! ```rust
//! use folio_animation::{AnimationScheduler, RotatingText, RotatorConfig, FontSpec};
//!
//! let mut scheduler = AnimationScheduler::new();
//! let mut rotator = RotatingText::new(
//!     vec!["Engineer".into(), "Writer".into()],
//!     RotatorConfig::default(),
//! );
//! rotator.start(&mut scheduler, FontSpec::new("Inter, sans-serif", 48.0));
//!
//! scheduler.run_until(10_000.0, |scheduler, event| {
//!     rotator.handle_event(scheduler, event);
//! });
//!
//! rotator.stop(&mut scheduler);
//! assert_eq!(scheduler.pending_timers(), 0);
//! ```

pub mod crossfade;
pub mod easing;
pub mod measure;
pub mod rotator;
pub mod scheduler;
pub mod timeline;

pub use crossfade::{CrossfadeConfig, CrossfadeTracks};
pub use easing::Easing;
pub use measure::{EstimatingMeasurer, FontSpec, TextMeasurer};
pub use rotator::{
    Phase, RotatingText, RotatorConfig, RotatorView, SlotView, DEFAULT_INTERVAL_MS,
};
pub use scheduler::{AnimationScheduler, SchedulerEvent, TimelineId, TimerId};
pub use timeline::{Timeline, TrackId};
