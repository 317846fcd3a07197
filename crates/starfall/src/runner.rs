use std::time::Duration;

use starfall_engine::{Canvas, Clock, DrawBuffer, FrameScheduler, FrameStats, SceneDirector};

/// Drives a scene one frame at a time against a clock.
///
/// Each frame is recorded into a [`DrawBuffer`] and then replayed onto the
/// output canvas, so the last frame stays available for inspection.
///
/// A frame is [`draw_frame`](Self::draw_frame), then the backend presents
/// it, then [`end_frame`](Self::end_frame). Presenting counts toward the
/// frame budget.
pub struct SceneRunner<C: Clock> {
    director: SceneDirector,
    scheduler: FrameScheduler,
    clock: C,
    frame: DrawBuffer,
}

impl<C: Clock> SceneRunner<C> {
    pub fn new(director: SceneDirector, clock: C) -> Self {
        let config = director.config();
        let scheduler = FrameScheduler::new(config.tick_ms, config.report_interval_ms);
        Self {
            director,
            scheduler,
            clock,
            frame: DrawBuffer::new(),
        }
    }

    /// Start a frame: simulate, draw onto `canvas`, and print the frame rate
    /// when a report is due.
    pub fn draw_frame(&mut self, canvas: &mut impl Canvas) {
        let now = self.scheduler.begin_tick(&self.clock);

        self.director.update(now);

        self.frame.clear();
        self.director.render(&mut self.frame);
        self.frame.replay(canvas);

        if let Some(stats) = self.scheduler.report(now) {
            println!("{}", fps_line(&stats));
            log::debug!(
                "{} frames in {} ms, {} draw commands last frame",
                stats.frames,
                stats.elapsed_ms,
                self.frame.len()
            );
        }
    }

    /// Close the frame once it has been presented. Returns how long to idle
    /// before the next one.
    pub fn end_frame(&mut self) -> Option<Duration> {
        self.scheduler.end_tick(&self.clock)
    }

    pub fn director(&self) -> &SceneDirector {
        &self.director
    }

    /// Draw stream of the most recent frame.
    pub fn frame(&self) -> &DrawBuffer {
        &self.frame
    }

    pub fn stats(&self) -> FrameStats {
        self.scheduler.stats(self.clock.now_ms())
    }
}

/// `FPS: 59.94`
pub fn fps_line(stats: &FrameStats) -> String {
    format!("FPS: {:.2}", stats.fps())
}

#[cfg(test)]
mod tests {
    use super::*;
    use starfall_engine::{ManualClock, PopulationCounts, RenderLayer, SceneConfig};

    fn runner(clock: &ManualClock, counts: PopulationCounts) -> SceneRunner<&ManualClock> {
        let director = SceneDirector::new(SceneConfig::with_counts(counts), 7).unwrap();
        SceneRunner::new(director, clock)
    }

    #[test]
    fn fps_has_two_decimals() {
        let stats = FrameStats { frames: 60, elapsed_ms: 1001 };
        assert_eq!(fps_line(&stats), "FPS: 59.94");
    }

    #[test]
    fn end_frame_returns_idle_time() {
        let clock = ManualClock::new(0);
        let mut runner = runner(&clock, PopulationCounts::new(1, 1, 1, 1));
        let mut out = DrawBuffer::new();
        runner.draw_frame(&mut out);
        assert_eq!(runner.end_frame(), Some(Duration::from_millis(16)));
        assert_eq!(runner.director().ticks(), 1);
    }

    #[test]
    fn present_time_counts_toward_frame_budget() {
        let clock = ManualClock::new(0);
        let mut runner = runner(&clock, PopulationCounts::new(10, 10, 2, 2));
        let mut out = DrawBuffer::new();
        let mut periods = Vec::new();

        // vsync-length, short, instant and overrunning presents
        for present in [16, 16, 5, 0, 30] {
            let start = clock.now_ms();
            out.clear();
            runner.draw_frame(&mut out);
            clock.advance(present);
            let idle = runner.end_frame().map_or(0, |d| d.as_millis() as u64);
            clock.advance(idle);
            periods.push(clock.now_ms() - start);
        }
        assert_eq!(periods, vec![16, 16, 16, 16, 30]);
    }

    #[test]
    fn replayed_frame_matches_recorded_frame() {
        let clock = ManualClock::new(0);
        let mut runner = runner(&clock, PopulationCounts::new(20, 10, 2, 3));
        let mut out = DrawBuffer::new();
        runner.draw_frame(&mut out);
        assert_eq!(out.commands(), runner.frame().commands());
        assert_eq!(out.count_in(RenderLayer::Nebula), 20);
    }

    #[test]
    fn frames_are_counted() {
        let clock = ManualClock::new(1000);
        let mut runner = runner(&clock, PopulationCounts::default());
        let mut out = DrawBuffer::new();
        for _ in 0..50 {
            out.clear();
            runner.draw_frame(&mut out);
            clock.advance(20);
            runner.end_frame();
        }
        let stats = runner.stats();
        assert_eq!(stats, FrameStats { frames: 50, elapsed_ms: 1000 });
        assert_eq!(stats.fps(), 50.0);
    }
}
