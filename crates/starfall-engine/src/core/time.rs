use std::cell::Cell;
use std::time::{Duration, Instant};

/// Source of monotonic time in milliseconds.
pub trait Clock {
    fn now_ms(&self) -> u64;
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now_ms(&self) -> u64 {
        (**self).now_ms()
    }
}

/// Wall clock measured from construction.
pub struct MonotonicClock {
    origin: Instant,
}

impl MonotonicClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MonotonicClock {
    fn now_ms(&self) -> u64 {
        u64::try_from(self.origin.elapsed().as_millis()).unwrap_or(u64::MAX)
    }
}

/// Clock that only moves when told to. Used to drive the scene from tests.
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Cell<u64>,
}

impl ManualClock {
    pub fn new(start_ms: u64) -> Self {
        Self {
            now: Cell::new(start_ms),
        }
    }

    pub fn set(&self, ms: u64) {
        self.now.set(ms);
    }

    pub fn advance(&self, ms: u64) {
        self.now.set(self.now.get().saturating_add(ms));
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> u64 {
        self.now.get()
    }
}

/// Frames completed since the first tick and the time they took.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrameStats {
    pub frames: u64,
    pub elapsed_ms: u64,
}

impl FrameStats {
    /// Average frames per second. Zero until any time has elapsed.
    pub fn fps(&self) -> f64 {
        if self.elapsed_ms == 0 {
            return 0.0;
        }
        self.frames as f64 * 1000.0 / self.elapsed_ms as f64
    }
}

/// Fixed-budget frame pacing.
///
/// Each tick is given `tick_ms`. Whatever the tick did not use is returned
/// by [`end_tick`](Self::end_tick) for the caller to sleep; an overrun is
/// simply absorbed (no catch-up ticks).
pub struct FrameScheduler {
    tick_ms: u64,
    report_interval_ms: u64,
    started_at: Option<u64>,
    tick_start: u64,
    frames: u64,
    last_report: u64,
}

impl FrameScheduler {
    pub fn new(tick_ms: u64, report_interval_ms: u64) -> Self {
        Self {
            tick_ms,
            report_interval_ms,
            started_at: None,
            tick_start: 0,
            frames: 0,
            last_report: 0,
        }
    }

    /// Timestamp the start of a tick. Returns `now`.
    pub fn begin_tick<C: Clock + ?Sized>(&mut self, clock: &C) -> u64 {
        let now = clock.now_ms();
        if self.started_at.is_none() {
            self.started_at = Some(now);
            self.last_report = now;
        }
        self.tick_start = now;
        now
    }

    /// Close the tick. Returns the unused part of the budget, or `None`
    /// when the tick took the whole budget or more.
    pub fn end_tick<C: Clock + ?Sized>(&mut self, clock: &C) -> Option<Duration> {
        self.frames += 1;
        let spent = clock.now_ms().saturating_sub(self.tick_start);
        if spent < self.tick_ms {
            Some(Duration::from_millis(self.tick_ms - spent))
        } else {
            log::trace!("tick overran its budget: {} ms of {} ms", spent, self.tick_ms);
            None
        }
    }

    pub fn stats(&self, now: u64) -> FrameStats {
        FrameStats {
            frames: self.frames,
            elapsed_ms: self.started_at.map_or(0, |start| now.saturating_sub(start)),
        }
    }

    /// A stats snapshot, at most once per report interval.
    pub fn report(&mut self, now: u64) -> Option<FrameStats> {
        self.started_at?;
        if now.saturating_sub(self.last_report) < self.report_interval_ms {
            return None;
        }
        self.last_report = now;
        Some(self.stats(now))
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn returns_remaining_budget() {
        let clock = ManualClock::new(100);
        let mut sched = FrameScheduler::new(16, 1000);
        assert_eq!(sched.begin_tick(&clock), 100);
        clock.advance(5);
        assert_eq!(sched.end_tick(&clock), Some(Duration::from_millis(11)));
    }

    #[test]
    fn overrun_has_no_idle_time() {
        let clock = ManualClock::new(0);
        let mut sched = FrameScheduler::new(16, 1000);
        sched.begin_tick(&clock);
        clock.advance(16);
        assert_eq!(sched.end_tick(&clock), None);
        sched.begin_tick(&clock);
        clock.advance(40);
        assert_eq!(sched.end_tick(&clock), None);
        assert_eq!(sched.frames(), 2);
    }

    #[test]
    fn reports_once_per_interval() {
        let clock = ManualClock::new(0);
        let mut sched = FrameScheduler::new(16, 1000);
        let mut reports = 0;
        for _ in 0..200 {
            let now = sched.begin_tick(&clock);
            if sched.report(now).is_some() {
                reports += 1;
            }
            clock.advance(16);
            sched.end_tick(&clock);
        }
        // 200 ticks * 16 ms = 3200 ms of wall time
        assert_eq!(reports, 3);
    }

    #[test]
    fn stats_average_over_run() {
        let clock = ManualClock::new(500);
        let mut sched = FrameScheduler::new(10, 1000);
        for _ in 0..100 {
            sched.begin_tick(&clock);
            clock.advance(10);
            sched.end_tick(&clock);
        }
        let stats = sched.stats(clock.now_ms());
        assert_eq!(stats, FrameStats { frames: 100, elapsed_ms: 1000 });
        assert!((stats.fps() - 100.0).abs() < 1e-9);
    }

    #[test]
    fn fps_is_zero_without_elapsed_time() {
        assert_eq!(FrameStats::default().fps(), 0.0);
        assert_eq!(FrameStats { frames: 10, elapsed_ms: 0 }.fps(), 0.0);
    }

    #[test]
    fn no_report_before_first_tick() {
        let mut sched = FrameScheduler::new(16, 0);
        assert!(sched.report(5000).is_none());
    }
}
