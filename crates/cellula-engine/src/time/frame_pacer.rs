use std::time::{Duration, Instant};

/// Outcome of one paced iteration.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct PaceReport {
    /// Time from the start of the period to `end_frame`.
    pub work: Duration,
    /// Time spent blocked after the work. Zero when the frame overran.
    pub slept: Duration,
}

/// Fixed-rate loop pacer.
///
/// Call `end_frame` once per iteration; if the iteration finished early it sleeps
/// for the rest of the period, then starts the next one. Overruns
/// are not compensated: the next frame starts right away with a fresh period.
///
/// The sleep cannot be interrupted; an exit request takes effect on the next
/// iteration.
#[derive(Debug, Clone)]
pub struct FramePacer {
    period: Option<Duration>,
    frame_start: Instant,
}

impl FramePacer {
    /// Creates a pacer targeting `target_fps` iterations per second.
    ///
    /// `0` disables pacing (never sleeps).
    pub fn new(target_fps: u32) -> Self {
        let period = (target_fps > 0)
            .then(|| Duration::from_nanos(1_000_000_000 / u64::from(target_fps)));
        Self {
            period,
            frame_start: Instant::now(),
        }
    }

    /// Target frame period, or `None` when uncapped.
    pub fn period(&self) -> Option<Duration> {
        self.period
    }

    /// Time left in the period after `elapsed` of work, if any.
    pub fn remaining(&self, elapsed: Duration) -> Option<Duration> {
        let period = self.period?;
        (elapsed < period).then(|| period - elapsed)
    }

    /// Restarts the current period now.
    ///
    /// `end_frame` already starts the next period, so a loop only needs this
    /// after a pause that should not count as work.
    pub fn begin_frame(&mut self) {
        self.frame_start = Instant::now();
    }

    /// Measures the work since the period started and sleeps the remainder.
    ///
    /// The period starts at the previous `end_frame` (or `begin_frame`), so
    /// everything done between two calls counts as work.
    pub fn end_frame(&mut self) -> PaceReport {
        let work = self.frame_start.elapsed();

        let slept = match self.remaining(work) {
            Some(rest) => {
                let before = Instant::now();
                std::thread::sleep(rest);
                before.elapsed()
            }
            None => Duration::ZERO,
        };

        self.frame_start = Instant::now();
        PaceReport { work, slept }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Sleep granularity on CI machines can be a few milliseconds.
    const TOLERANCE: Duration = Duration::from_millis(8);

    #[test]
    fn period_from_rate() {
        assert_eq!(FramePacer::new(100).period(), Some(Duration::from_millis(10)));
        assert_eq!(FramePacer::new(144).period(), Some(Duration::from_nanos(6_944_444)));
        assert_eq!(FramePacer::new(0).period(), None);
    }

    #[test]
    fn remaining_is_rest_of_period() {
        let pacer = FramePacer::new(50); // 20 ms
        assert_eq!(pacer.remaining(Duration::ZERO), Some(Duration::from_millis(20)));
        assert_eq!(pacer.remaining(Duration::from_millis(15)), Some(Duration::from_millis(5)));
    }

    #[test]
    fn no_remaining_on_overrun_or_exact_fit() {
        let pacer = FramePacer::new(50);
        assert_eq!(pacer.remaining(Duration::from_millis(20)), None);
        assert_eq!(pacer.remaining(Duration::from_millis(35)), None);
    }

    #[test]
    fn uncapped_never_has_remaining() {
        let pacer = FramePacer::new(0);
        assert_eq!(pacer.remaining(Duration::ZERO), None);
    }

    #[test]
    fn short_work_fills_the_period() {
        let mut pacer = FramePacer::new(50); // 20 ms
        let start = Instant::now();
        pacer.begin_frame();
        std::thread::sleep(Duration::from_millis(2));
        let report = pacer.end_frame();
        let total = start.elapsed();

        assert!(report.slept > Duration::ZERO);
        assert!(total >= Duration::from_millis(20), "iteration too short: {total:?}");
        assert!(total <= Duration::from_millis(20) + TOLERANCE, "iteration too long: {total:?}");
    }

    #[test]
    fn overrun_does_not_sleep() {
        let mut pacer = FramePacer::new(200); // 5 ms
        pacer.begin_frame();
        std::thread::sleep(Duration::from_millis(15));
        let report = pacer.end_frame();

        assert_eq!(report.slept, Duration::ZERO);
        assert!(report.work >= Duration::from_millis(15));
    }

    #[test]
    fn time_between_frames_counts_as_work() {
        let mut pacer = FramePacer::new(50); // 20 ms
        pacer.end_frame();

        let start = Instant::now();
        std::thread::sleep(Duration::from_millis(10)); // event handling
        std::thread::sleep(Duration::from_millis(1)); // frame work
        let report = pacer.end_frame();
        let total = start.elapsed();

        assert!(report.work >= Duration::from_millis(11));
        assert!(total >= Duration::from_millis(20), "iteration too short: {total:?}");
        assert!(total <= Duration::from_millis(20) + TOLERANCE, "iteration too long: {total:?}");
    }

    #[test]
    fn uncapped_does_not_sleep() {
        let mut pacer = FramePacer::new(0);
        pacer.begin_frame();
        assert_eq!(pacer.end_frame().slept, Duration::ZERO);
    }
}
