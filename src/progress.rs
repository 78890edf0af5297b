use crate::job_result::JobResult;

/// Period between progress recomputations while a job is running.
pub const TICK_MILLIS: u32 = 1000;

/// Percentage at which tracking stops.
pub const COMPLETE_PERCENTAGE: f64 = 100.0;

/// The part of an indicator's configuration that drives progress tracking.
#[derive(Debug, Clone, PartialEq)]
pub struct TrackingConfig {
    pub result: JobResult,
    /// Epoch millis tracking counts from. Absent or zero means "now".
    pub start_time: Option<f64>,
    /// Millis over which the percentage climbs from 0 to 100.
    pub estimated_duration: Option<f64>,
}

/// Outcome of one progress computation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Tick {
    /// Not tracking; nothing changed.
    Idle,
    Advanced(f64),
    /// Reached 100 and the interval was dropped.
    Completed(f64),
}

/// Elapsed-time progress for a running job.
///
/// `H` is the handle of the recurring timer driving [`ProgressTracker::tick`].
/// Dropping it must cancel the timer, which is how `gloo`'s `Interval`
/// behaves. The tracker holds at most one handle at a time.
pub struct ProgressTracker<H> {
    percentage: f64,
    start_time_millis: Option<f64>,
    estimated_duration: f64,
    interval: Option<H>,
}

impl<H> Default for ProgressTracker<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H> ProgressTracker<H> {
    pub fn new() -> Self {
        Self {
            percentage: 0.0,
            start_time_millis: None,
            estimated_duration: f64::NAN,
            interval: None,
        }
    }

    /// Re-derive tracking state from `config`.
    ///
    /// The previous interval is always dropped first. When the result is
    /// running, a new interval is created through `start_interval` and
    /// progress is computed once straight away. Any other result leaves the
    /// last percentage in place.
    pub fn reconfigure<F>(
        &mut self,
        config: Option<&TrackingConfig>,
        now_millis: f64,
        start_interval: F,
    ) -> Tick
    where
        F: FnOnce() -> H,
    {
        self.stop();
        self.start_time_millis = None;

        let Some(config) = config else {
            return Tick::Idle;
        };
        if !config.result.is_running() {
            return Tick::Idle;
        }

        let start = config
            .start_time
            .filter(|t| *t != 0.0 && !t.is_nan())
            .unwrap_or(now_millis);
        self.start_time_millis = Some(start);
        self.estimated_duration = config.estimated_duration.unwrap_or(f64::NAN);
        self.interval = Some(start_interval());

        self.tick(now_millis)
    }

    /// Recompute the percentage from `now_millis`. Does nothing unless an
    /// interval is live.
    pub fn tick(&mut self, now_millis: f64) -> Tick {
        if self.interval.is_none() {
            return Tick::Idle;
        }
        let Some(start) = self.start_time_millis else {
            return Tick::Idle;
        };

        let percentage = (now_millis - start) / self.estimated_duration * 100.0;
        self.percentage = percentage;

        if percentage >= COMPLETE_PERCENTAGE {
            self.stop();
            Tick::Completed(percentage)
        } else {
            Tick::Advanced(percentage)
        }
    }

    /// Drop the interval, if any.
    pub fn stop(&mut self) {
        self.interval = None;
    }

    /// Last computed percentage. Not clamped.
    pub fn percentage(&self) -> f64 {
        self.percentage
    }

    pub fn is_tracking(&self) -> bool {
        self.interval.is_some()
    }

    pub fn start_time_millis(&self) -> Option<f64> {
        self.start_time_millis
    }
}
