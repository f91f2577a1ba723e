//! Rotating text animator
//!
//! Cycles an ordered list of titles through two display slots, `current` and
//! `next`, crossfading between them on a fixed interval after a one-time
//! startup delay.
//!
//! The animator is a plain state machine (`Idle` / `Transitioning`) driven by
//! [`SchedulerEvent`]s. It never renders anything itself: [`RotatingText::view`]
//! is a pure projection of its state plus the in-flight timeline, so the
//! timing logic can be tested without a document.
//!
//! Lifecycle:
//!
//! 1. [`start`](RotatingText::start) measures the widest title, fills the
//!    slots and arms the startup timeout.
//! 2. The startup timeout arms the repeating interval.
//! 3. Each interval tick loads the next title into the `next` slot and plays
//!    a crossfade; on completion `next` is promoted into `current`.
//! 4. [`stop`](RotatingText::stop) clears the timeout and the interval and
//!    kills the crossfade. Reconfiguration always stops before restarting, so
//!    one instance never runs two loops.

use crate::crossfade::{CrossfadeConfig, CrossfadeTracks};
use crate::measure::{EstimatingMeasurer, FontSpec, TextMeasurer};
use crate::scheduler::{AnimationScheduler, SchedulerEvent, TimelineId, TimerId};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Interval used when none (or zero) is configured
pub const DEFAULT_INTERVAL_MS: u32 = 3000;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RotatorConfig {
    /// Time each title is held once rotation is running. Zero means
    /// [`DEFAULT_INTERVAL_MS`].
    pub interval_ms: u32,
    /// One-time pause before the first interval is armed
    pub startup_delay_ms: u32,
    /// Added to the widest measured title
    pub padding_px: f32,
    pub crossfade: CrossfadeConfig,
}

impl Default for RotatorConfig {
    fn default() -> Self {
        Self {
            interval_ms: DEFAULT_INTERVAL_MS,
            startup_delay_ms: 1000,
            padding_px: 20.0,
            crossfade: CrossfadeConfig::default(),
        }
    }
}

impl RotatorConfig {
    /// Interval actually armed; a zero interval falls back to the default
    pub fn interval(&self) -> u32 {
        if self.interval_ms == 0 {
            DEFAULT_INTERVAL_MS
        } else {
            self.interval_ms
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Transitioning,
}

/// Render state of one slot
#[derive(Clone, Debug, PartialEq)]
pub struct SlotView {
    pub text: String,
    pub opacity: f32,
    pub offset_y: f32,
}

/// Render state of the whole animator
#[derive(Clone, Debug, PartialEq)]
pub struct RotatorView {
    pub current: SlotView,
    pub next: SlotView,
    pub phase: Phase,
    pub width_px: f32,
}

#[derive(Default)]
struct Handles {
    startup: Option<TimerId>,
    interval: Option<TimerId>,
    crossfade: Option<(TimelineId, CrossfadeTracks)>,
}

impl Handles {
    fn is_clear(&self) -> bool {
        self.startup.is_none() && self.interval.is_none() && self.crossfade.is_none()
    }
}

pub struct RotatingText {
    titles: Vec<String>,
    config: RotatorConfig,
    measurer: Arc<dyn TextMeasurer + Send + Sync>,
    font: FontSpec,
    mounted: bool,
    current_index: usize,
    /// Index that `next` will hold once the crossfade completes
    incoming_index: usize,
    current: String,
    next: String,
    phase: Phase,
    width_px: f32,
    handles: Handles,
}

impl RotatingText {
    pub fn new(titles: Vec<String>, config: RotatorConfig) -> Self {
        Self {
            titles,
            config,
            measurer: Arc::new(EstimatingMeasurer::default()),
            font: FontSpec::default(),
            mounted: false,
            current_index: 0,
            incoming_index: 0,
            current: String::new(),
            next: String::new(),
            phase: Phase::Idle,
            width_px: 0.0,
            handles: Handles::default(),
        }
    }

    /// Use a host-provided text measurer
    pub fn with_measurer(mut self, measurer: Arc<dyn TextMeasurer + Send + Sync>) -> Self {
        self.measurer = measurer;
        self
    }

    // ========== Lifecycle ==========

    /// Mount the animator and arm the startup delay.
    ///
    /// Any previous loop is torn down first. With no titles this mounts
    /// without rendering anything or arming any timer.
    pub fn start(&mut self, scheduler: &mut AnimationScheduler, font: FontSpec) {
        self.stop(scheduler);
        self.font = font;
        self.mounted = true;

        if self.titles.is_empty() {
            tracing::trace!("RotatingText::start - no titles, nothing to rotate");
            return;
        }

        self.remeasure();
        self.current_index = 0;
        self.incoming_index = 0;
        self.current = self.titles[0].clone();
        self.next = self.titles[1 % self.titles.len()].clone();
        self.phase = Phase::Idle;
        self.handles.startup = Some(scheduler.set_timeout(self.config.startup_delay_ms));

        tracing::debug!(
            "RotatingText::start - {} titles, interval {}ms, width {:.1}px",
            self.titles.len(),
            self.config.interval(),
            self.width_px
        );
    }

    /// Unmount: clear every timer and kill the crossfade. Safe to call twice.
    pub fn stop(&mut self, scheduler: &mut AnimationScheduler) {
        self.mounted = false;
        if self.handles.is_clear() {
            return;
        }

        let Handles {
            startup,
            interval,
            crossfade,
        } = std::mem::take(&mut self.handles);

        if let Some(id) = startup {
            scheduler.clear_timer(id);
        }
        if let Some(id) = interval {
            scheduler.clear_timer(id);
        }
        if let Some((id, _)) = crossfade {
            scheduler.kill_timeline(id);
        }
        self.phase = Phase::Idle;

        tracing::debug!("RotatingText::stop - timers cleared");
    }

    /// Feed a scheduler event. Returns false for events owned by someone else.
    pub fn handle_event(&mut self, scheduler: &mut AnimationScheduler, event: SchedulerEvent) -> bool {
        match event {
            SchedulerEvent::Timer(id) if self.handles.startup == Some(id) => {
                self.handles.startup = None;
                self.handles.interval = Some(scheduler.set_interval(self.config.interval()));
                true
            }
            SchedulerEvent::Timer(id) if self.handles.interval == Some(id) => {
                self.tick(scheduler);
                true
            }
            SchedulerEvent::TimelineComplete(id)
                if self.handles.crossfade.map(|(tl, _)| tl) == Some(id) =>
            {
                self.handles.crossfade = None;
                self.promote();
                true
            }
            _ => false,
        }
    }

    fn tick(&mut self, scheduler: &mut AnimationScheduler) {
        if self.titles.is_empty() {
            return;
        }

        // A tick can land mid-crossfade when the interval is shorter than the
        // crossfade; settle the old one so only one timeline is ever live.
        if self.phase == Phase::Transitioning {
            if let Some((id, _)) = self.handles.crossfade.take() {
                scheduler.kill_timeline(id);
            }
            self.promote();
        }

        let next_index = (self.current_index + 1) % self.titles.len();
        self.next = self.titles[next_index].clone();
        self.incoming_index = next_index;
        self.remeasure();

        let (timeline, tracks) = self.config.crossfade.build();
        let id = scheduler.add_timeline(timeline);
        self.handles.crossfade = Some((id, tracks));
        self.phase = Phase::Transitioning;

        tracing::trace!(
            "RotatingText::tick - {} -> {} ({:?})",
            self.current_index,
            next_index,
            self.next
        );
    }

    fn promote(&mut self) {
        self.current = std::mem::take(&mut self.next);
        self.current_index = self.incoming_index;
        self.phase = Phase::Idle;
    }

    // ========== Reconfiguration ==========

    /// Replace the titles, restarting the loop if mounted
    pub fn set_titles(&mut self, scheduler: &mut AnimationScheduler, titles: Vec<String>) {
        self.titles = titles;
        self.restart_if_mounted(scheduler);
    }

    /// Change the interval, restarting the loop if mounted
    pub fn set_interval(&mut self, scheduler: &mut AnimationScheduler, interval_ms: u32) {
        if interval_ms == 0 {
            tracing::warn!(
                "RotatingText::set_interval - zero interval, using {}ms",
                DEFAULT_INTERVAL_MS
            );
        }
        self.config.interval_ms = interval_ms;
        self.restart_if_mounted(scheduler);
    }

    /// Change the font (e.g. after a theme switch), restarting if mounted
    pub fn set_font(&mut self, scheduler: &mut AnimationScheduler, font: FontSpec) {
        if self.mounted {
            self.start(scheduler, font);
        } else {
            self.font = font;
        }
    }

    /// Viewport changed: re-measure without touching the timers
    pub fn on_resize(&mut self) {
        if !self.titles.is_empty() {
            self.remeasure();
        }
    }

    fn restart_if_mounted(&mut self, scheduler: &mut AnimationScheduler) {
        if self.mounted {
            let font = self.font.clone();
            self.start(scheduler, font);
        }
    }

    fn remeasure(&mut self) {
        self.width_px = self.measurer.max_width(&self.titles, &self.font) + self.config.padding_px;
    }

    // ========== Accessors ==========

    pub fn titles(&self) -> &[String] {
        &self.titles
    }

    pub fn config(&self) -> &RotatorConfig {
        &self.config
    }

    pub fn font(&self) -> &FontSpec {
        &self.font
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn current_text(&self) -> &str {
        &self.current
    }

    pub fn next_text(&self) -> &str {
        &self.next
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn width_px(&self) -> f32 {
        self.width_px
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// True while any timer or timeline belongs to this animator
    pub fn is_running(&self) -> bool {
        !self.handles.is_clear()
    }

    /// Project the current state for rendering. `None` means render nothing.
    pub fn view(&self, scheduler: &AnimationScheduler) -> Option<RotatorView> {
        if self.titles.is_empty() || (!self.mounted && self.current.is_empty()) {
            return None;
        }

        let travel = self.config.crossfade.travel_px;
        let in_flight = self
            .handles
            .crossfade
            .and_then(|(id, tracks)| scheduler.timeline(id).map(|tl| (tl, tracks)));

        let (current, next) = match (self.phase, in_flight) {
            (Phase::Transitioning, Some((tl, tracks))) => (
                SlotView {
                    text: self.current.clone(),
                    opacity: tl.value(tracks.outgoing_opacity).unwrap_or(0.0),
                    offset_y: tl.value(tracks.outgoing_offset).unwrap_or(-travel),
                },
                SlotView {
                    text: self.next.clone(),
                    opacity: tl.value(tracks.incoming_opacity).unwrap_or(1.0),
                    offset_y: tl.value(tracks.incoming_offset).unwrap_or(0.0),
                },
            ),
            _ => (
                SlotView {
                    text: self.current.clone(),
                    opacity: 1.0,
                    offset_y: 0.0,
                },
                SlotView {
                    text: self.next.clone(),
                    opacity: 0.0,
                    offset_y: travel,
                },
            ),
        };

        Some(RotatorView {
            current,
            next,
            phase: self.phase,
            width_px: self.width_px,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn titles(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    fn pump(scheduler: &mut AnimationScheduler, rotator: &mut RotatingText, until_ms: f64) {
        scheduler.run_until(until_ms, |s, e| {
            rotator.handle_event(s, e);
        });
    }

    fn fast_config() -> RotatorConfig {
        RotatorConfig {
            interval_ms: 100,
            crossfade: CrossfadeConfig {
                duration_ms: 50,
                ..Default::default()
            },
            ..Default::default()
        }
    }

    #[test]
    fn test_start_fills_slots_and_arms_startup_only() {
        let mut scheduler = AnimationScheduler::new();
        let mut rotator = RotatingText::new(titles(&["A", "B", "C"]), fast_config());
        rotator.start(&mut scheduler, FontSpec::default());

        assert_eq!(rotator.current_text(), "A");
        assert_eq!(rotator.next_text(), "B");
        assert_eq!(rotator.phase(), Phase::Idle);
        assert_eq!(scheduler.pending_timers(), 1);
        assert_eq!(scheduler.active_timelines(), 0);
    }

    #[test]
    fn test_startup_delay_precedes_interval() {
        let mut scheduler = AnimationScheduler::new();
        let mut rotator = RotatingText::new(titles(&["A", "B"]), fast_config());
        rotator.start(&mut scheduler, FontSpec::default());

        // Interval is armed at 1000ms; first tick at 1100ms.
        pump(&mut scheduler, &mut rotator, 1099.0);
        assert_eq!(rotator.phase(), Phase::Idle);
        assert_eq!(scheduler.pending_timers(), 1);

        pump(&mut scheduler, &mut rotator, 1100.0);
        assert_eq!(rotator.phase(), Phase::Transitioning);
        assert_eq!(rotator.next_text(), "B");
    }

    #[test]
    fn test_promotion_clears_next_slot() {
        let mut scheduler = AnimationScheduler::new();
        let mut rotator = RotatingText::new(titles(&["A", "B"]), fast_config());
        rotator.start(&mut scheduler, FontSpec::default());

        pump(&mut scheduler, &mut rotator, 1150.0);
        assert_eq!(rotator.current_text(), "B");
        assert_eq!(rotator.current_index(), 1);
        assert_eq!(rotator.next_text(), "");
        assert_eq!(rotator.phase(), Phase::Idle);
    }

    #[test]
    fn test_tick_mid_crossfade_keeps_single_timeline() {
        let mut scheduler = AnimationScheduler::new();
        let config = RotatorConfig {
            interval_ms: 100,
            ..Default::default()
        };
        let mut rotator = RotatingText::new(titles(&["A", "B", "C"]), config);
        rotator.start(&mut scheduler, FontSpec::default());

        let mut seen = vec![rotator.current_text().to_string()];
        scheduler.run_until(1400.0, |s, e| {
            rotator.handle_event(s, e);
            assert!(s.active_timelines() <= 1);
            if seen.last().map(String::as_str) != Some(rotator.current_text()) {
                seen.push(rotator.current_text().to_string());
            }
        });

        // 800ms crossfades never finish on their own; each tick settles the
        // previous one before starting the next.
        assert_eq!(seen, titles(&["A", "B", "C", "A"]));
    }

    #[test]
    fn test_stop_is_idempotent() {
        let mut scheduler = AnimationScheduler::new();
        let mut rotator = RotatingText::new(titles(&["A", "B"]), fast_config());
        rotator.start(&mut scheduler, FontSpec::default());

        rotator.stop(&mut scheduler);
        rotator.stop(&mut scheduler);

        assert!(!rotator.is_running());
        assert!(scheduler.is_idle());
    }

    #[test]
    fn test_restart_does_not_duplicate_timers() {
        let mut scheduler = AnimationScheduler::new();
        let mut rotator = RotatingText::new(titles(&["A", "B"]), fast_config());
        rotator.start(&mut scheduler, FontSpec::default());
        rotator.start(&mut scheduler, FontSpec::default());
        rotator.set_interval(&mut scheduler, 200);

        assert_eq!(scheduler.pending_timers(), 1);
    }

    #[test]
    fn test_font_change_remeasures_and_restarts() {
        let mut scheduler = AnimationScheduler::new();
        let mut rotator = RotatingText::new(titles(&["Short", "Much longer title"]), fast_config());
        rotator.start(&mut scheduler, FontSpec::new("Inter", 16.0));
        let narrow = rotator.width_px();

        pump(&mut scheduler, &mut rotator, 1150.0);
        assert_eq!(rotator.current_index(), 1);

        rotator.set_font(&mut scheduler, FontSpec::new("monospace", 32.0));
        assert!(rotator.width_px() > narrow);
        assert_eq!(rotator.current_index(), 0);
        assert_eq!(rotator.current_text(), "Short");
        assert_eq!(scheduler.pending_timers(), 1);
        assert_eq!(scheduler.active_timelines(), 0);
    }

    #[test]
    fn test_set_titles_while_unmounted_does_not_arm() {
        let mut scheduler = AnimationScheduler::new();
        let mut rotator = RotatingText::new(Vec::new(), fast_config());
        rotator.set_titles(&mut scheduler, titles(&["A"]));

        assert!(scheduler.is_idle());
        assert!(!rotator.is_mounted());
    }

    #[test]
    fn test_view_tracks_crossfade_progress() {
        let mut scheduler = AnimationScheduler::new();
        let config = RotatorConfig {
            interval_ms: 1000,
            crossfade: CrossfadeConfig {
                easing: crate::easing::Easing::Linear,
                ..Default::default()
            },
            ..Default::default()
        };
        let mut rotator = RotatingText::new(titles(&["A", "B"]), config);
        rotator.start(&mut scheduler, FontSpec::default());

        let idle = rotator.view(&scheduler).unwrap();
        assert_eq!(idle.current.opacity, 1.0);
        assert_eq!(idle.next.opacity, 0.0);

        // Tick at 2000ms, then 400ms into the 800ms crossfade.
        pump(&mut scheduler, &mut rotator, 2400.0);
        let mid = rotator.view(&scheduler).unwrap();
        assert_eq!(mid.phase, Phase::Transitioning);
        assert!((mid.current.opacity - 0.5).abs() < 1e-4);
        assert!((mid.next.opacity - 0.5).abs() < 1e-4);
        assert!((mid.current.offset_y + 10.0).abs() < 1e-3);
        assert!((mid.next.offset_y - 10.0).abs() < 1e-3);
    }

    #[test]
    fn test_zero_interval_falls_back_to_default() {
        let mut scheduler = AnimationScheduler::new();
        let config = RotatorConfig {
            interval_ms: 0,
            ..Default::default()
        };
        let mut rotator = RotatingText::new(titles(&["A", "B"]), config);
        rotator.start(&mut scheduler, FontSpec::default());

        // Startup delay 1000ms, then the default interval rather than 1ms
        pump(&mut scheduler, &mut rotator, 3_999.0);
        assert_eq!(rotator.phase(), Phase::Idle);
        assert_eq!(rotator.current_text(), "A");

        pump(&mut scheduler, &mut rotator, 4_000.0);
        assert_eq!(rotator.phase(), Phase::Transitioning);
        assert_eq!(rotator.next_text(), "B");
    }

    #[test]
    fn test_set_interval_zero_uses_default() {
        let mut scheduler = AnimationScheduler::new();
        let mut rotator = RotatingText::new(titles(&["A", "B"]), fast_config());
        rotator.start(&mut scheduler, FontSpec::default());
        rotator.set_interval(&mut scheduler, 0);

        assert_eq!(rotator.config().interval(), DEFAULT_INTERVAL_MS);
        pump(&mut scheduler, &mut rotator, 1_500.0);
        assert_eq!(rotator.phase(), Phase::Idle);
    }
}
