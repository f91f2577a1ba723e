//! Animation scheduler
//!
//! Owns every timer and timeline for a page and advances them on a virtual
//! millisecond clock. The host (a browser frame loop, a test, a headless
//! renderer) decides how fast the clock moves; the scheduler only guarantees
//! that events come out in chronological order.
//!
//! Events are polled one at a time with [`AnimationScheduler::poll_until`] so
//! that an owner can react to each one, possibly scheduling new work, before
//! the clock moves past it.

use crate::timeline::Timeline;
use slotmap::{new_key_type, SlotMap};

new_key_type! {
    pub struct TimerId;
    pub struct TimelineId;
}

/// Something that happened while the clock advanced
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SchedulerEvent {
    /// A timeout or interval became due
    Timer(TimerId),
    /// A timeline reached its end and was removed from the scheduler
    TimelineComplete(TimelineId),
}

#[derive(Clone, Debug)]
struct Timer {
    due_ms: f64,
    /// `Some` for repeating intervals
    period_ms: Option<f64>,
    /// Tie-breaker so timers due at the same instant fire in creation order
    seq: u64,
}

/// The scheduler that ticks all timers and timelines
pub struct AnimationScheduler {
    now_ms: f64,
    timers: SlotMap<TimerId, Timer>,
    timelines: SlotMap<TimelineId, Timeline>,
    next_seq: u64,
}

impl AnimationScheduler {
    pub fn new() -> Self {
        Self {
            now_ms: 0.0,
            timers: SlotMap::with_key(),
            timelines: SlotMap::with_key(),
            next_seq: 0,
        }
    }

    /// Current clock time in milliseconds
    pub fn now_ms(&self) -> f64 {
        self.now_ms
    }

    // ========== Timers ==========

    /// Fire once, `delay_ms` from now
    pub fn set_timeout(&mut self, delay_ms: u32) -> TimerId {
        self.insert_timer(delay_ms as f64, None)
    }

    /// Fire every `period_ms`, first one `period_ms` from now
    pub fn set_interval(&mut self, period_ms: u32) -> TimerId {
        let period = period_ms.max(1) as f64;
        self.insert_timer(period, Some(period))
    }

    /// Cancel a timer. Returns false if it already fired or was cleared.
    pub fn clear_timer(&mut self, id: TimerId) -> bool {
        self.timers.remove(id).is_some()
    }

    pub fn has_timer(&self, id: TimerId) -> bool {
        self.timers.contains_key(id)
    }

    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    fn insert_timer(&mut self, delay_ms: f64, period_ms: Option<f64>) -> TimerId {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.timers.insert(Timer {
            due_ms: self.now_ms + delay_ms,
            period_ms,
            seq,
        })
    }

    // ========== Timelines ==========

    /// Take ownership of a timeline and start playing it
    pub fn add_timeline(&mut self, mut timeline: Timeline) -> TimelineId {
        timeline.play();
        self.timelines.insert(timeline)
    }

    /// Kill and drop a timeline. Returns false if it already completed.
    pub fn kill_timeline(&mut self, id: TimelineId) -> bool {
        match self.timelines.remove(id) {
            Some(mut timeline) => {
                timeline.kill();
                true
            }
            None => false,
        }
    }

    pub fn timeline(&self, id: TimelineId) -> Option<&Timeline> {
        self.timelines.get(id)
    }

    pub fn active_timelines(&self) -> usize {
        self.timelines.len()
    }

    // ========== Clock ==========

    /// Whether anything is still scheduled
    pub fn is_idle(&self) -> bool {
        self.timers.is_empty() && self.timelines.is_empty()
    }

    /// Advance toward `target_ms`, stopping at the first event due on the way.
    ///
    /// Returns `None` once nothing else is due by `target_ms`; the clock then
    /// rests at `target_ms`. A target in the past leaves the clock unchanged.
    /// When a timer and a timeline are due at the same instant, the timeline
    /// completion is reported first.
    pub fn poll_until(&mut self, target_ms: f64) -> Option<SchedulerEvent> {
        let next_timeline = self
            .timelines
            .iter()
            .map(|(id, tl)| (id, self.now_ms + tl.remaining_ms()))
            .min_by(|a, b| a.1.total_cmp(&b.1));

        let next_timer = self
            .timers
            .iter()
            .map(|(id, t)| (id, t.due_ms, t.seq))
            .min_by(|a, b| a.1.total_cmp(&b.1).then(a.2.cmp(&b.2)));

        let timeline_first = match (next_timeline, next_timer) {
            (Some((_, tl_due)), Some((_, timer_due, _))) => tl_due <= timer_due,
            (Some(_), None) => true,
            _ => false,
        };

        if timeline_first {
            let (id, due) = next_timeline?;
            if due > target_ms {
                self.advance_clock(target_ms);
                return None;
            }
            self.advance_clock(due);
            // Guard against float drift leaving a sliver of time unplayed.
            if let Some(mut timeline) = self.timelines.remove(id) {
                timeline.finish();
            }
            tracing::trace!("timeline {:?} complete at {:.1}ms", id, self.now_ms);
            return Some(SchedulerEvent::TimelineComplete(id));
        }

        match next_timer {
            Some((id, due, _)) if due <= target_ms => {
                self.advance_clock(due);
                let reschedule = self.timers.get(id).and_then(|t| t.period_ms);
                match reschedule {
                    Some(period) => {
                        let seq = self.next_seq;
                        self.next_seq += 1;
                        if let Some(timer) = self.timers.get_mut(id) {
                            timer.due_ms = due + period;
                            timer.seq = seq;
                        }
                    }
                    None => {
                        self.timers.remove(id);
                    }
                }
                tracing::trace!("timer {:?} fired at {:.1}ms", id, self.now_ms);
                Some(SchedulerEvent::Timer(id))
            }
            _ => {
                self.advance_clock(target_ms);
                None
            }
        }
    }

    /// Poll every event up to `target_ms`, handing each to `handler`.
    ///
    /// The handler receives the scheduler back so it can set or clear timers
    /// in reaction; anything it schedules before `target_ms` is delivered in
    /// the same call.
    pub fn run_until<F>(&mut self, target_ms: f64, mut handler: F)
    where
        F: FnMut(&mut Self, SchedulerEvent),
    {
        while let Some(event) = self.poll_until(target_ms) {
            handler(self, event);
        }
    }

    /// [`run_until`](Self::run_until) relative to the current time
    pub fn advance<F>(&mut self, dt_ms: f64, handler: F)
    where
        F: FnMut(&mut Self, SchedulerEvent),
    {
        let target = self.now_ms + dt_ms.max(0.0);
        self.run_until(target, handler);
    }

    fn advance_clock(&mut self, to_ms: f64) {
        if to_ms <= self.now_ms {
            return;
        }
        let dt = to_ms - self.now_ms;
        for (_, timeline) in self.timelines.iter_mut() {
            timeline.tick(dt);
        }
        self.now_ms = to_ms;
    }
}

impl Default for AnimationScheduler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::easing::Easing;

    fn drain(scheduler: &mut AnimationScheduler, target_ms: f64) -> Vec<(f64, SchedulerEvent)> {
        let mut events = Vec::new();
        scheduler.run_until(target_ms, |s, e| events.push((s.now_ms(), e)));
        events
    }

    #[test]
    fn test_timeout_fires_once() {
        let mut scheduler = AnimationScheduler::new();
        let id = scheduler.set_timeout(1000);

        assert!(drain(&mut scheduler, 999.0).is_empty());
        assert_eq!(
            drain(&mut scheduler, 5000.0),
            vec![(1000.0, SchedulerEvent::Timer(id))]
        );
        assert!(!scheduler.has_timer(id));
        assert_eq!(scheduler.now_ms(), 5000.0);
    }

    #[test]
    fn test_interval_repeats() {
        let mut scheduler = AnimationScheduler::new();
        let id = scheduler.set_interval(100);

        let times: Vec<f64> = drain(&mut scheduler, 350.0).into_iter().map(|(t, _)| t).collect();
        assert_eq!(times, vec![100.0, 200.0, 300.0]);
        assert!(scheduler.has_timer(id));
    }

    #[test]
    fn test_clear_timer() {
        let mut scheduler = AnimationScheduler::new();
        let id = scheduler.set_interval(10);

        assert!(scheduler.clear_timer(id));
        assert!(!scheduler.clear_timer(id));
        assert!(drain(&mut scheduler, 100.0).is_empty());
    }

    #[test]
    fn test_timeline_completion_event() {
        let mut scheduler = AnimationScheduler::new();
        let mut timeline = Timeline::new();
        timeline.add(0, 800, 0.0, 1.0, Easing::Linear);
        let id = scheduler.add_timeline(timeline);

        scheduler.run_until(400.0, |_, _| {});
        assert!(scheduler.timeline(id).unwrap().is_playing());

        assert_eq!(
            drain(&mut scheduler, 1000.0),
            vec![(800.0, SchedulerEvent::TimelineComplete(id))]
        );
        assert_eq!(scheduler.active_timelines(), 0);
    }

    #[test]
    fn test_timeline_reported_before_timer_on_tie() {
        let mut scheduler = AnimationScheduler::new();
        let timer = scheduler.set_timeout(500);
        let mut timeline = Timeline::new();
        timeline.add(0, 500, 0.0, 1.0, Easing::Linear);
        let tl = scheduler.add_timeline(timeline);

        let events: Vec<SchedulerEvent> =
            drain(&mut scheduler, 500.0).into_iter().map(|(_, e)| e).collect();
        assert_eq!(
            events,
            vec![
                SchedulerEvent::TimelineComplete(tl),
                SchedulerEvent::Timer(timer)
            ]
        );
    }

    #[test]
    fn test_handler_can_schedule_within_same_run() {
        let mut scheduler = AnimationScheduler::new();
        let first = scheduler.set_timeout(100);
        let mut fired = Vec::new();

        scheduler.run_until(1000.0, |s, event| {
            fired.push(s.now_ms());
            if event == SchedulerEvent::Timer(first) {
                s.set_timeout(100);
            }
        });

        assert_eq!(fired, vec![100.0, 200.0]);
    }

    #[test]
    fn test_kill_timeline_suppresses_completion() {
        let mut scheduler = AnimationScheduler::new();
        let mut timeline = Timeline::new();
        timeline.add(0, 100, 0.0, 1.0, Easing::Linear);
        let id = scheduler.add_timeline(timeline);

        assert!(scheduler.kill_timeline(id));
        assert!(!scheduler.kill_timeline(id));
        assert!(drain(&mut scheduler, 1000.0).is_empty());
        assert!(scheduler.is_idle());
    }
}
