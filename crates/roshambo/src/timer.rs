//! Frame rate and latency logging.

use std::{
    fmt,
    time::{Duration, Instant},
};

/// Weight of the newest sample in a [`Timer`]'s moving average.
const EMA_ALPHA: f32 = 0.3;

/// Measures how long an operation takes, as an exponential moving average.
///
/// The average is reset whenever an [`FpsCounter`] reports it, so each log line covers the
/// timings since the previous one.
pub struct Timer {
    name: &'static str,
    avg: Option<f32>,
    count: usize,
}

impl Timer {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            avg: None,
            count: 0,
        }
    }

    /// Invokes a closure, measuring and recording the time it takes.
    pub fn time<T>(&mut self, timee: impl FnOnce() -> T) -> T {
        let start = Instant::now();
        let value = timee();
        self.record(start.elapsed());
        value
    }

    fn record(&mut self, duration: Duration) {
        let secs = duration.as_secs_f32();
        self.avg = Some(match self.avg {
            Some(avg) => EMA_ALPHA * secs + (1.0 - EMA_ALPHA) * avg,
            None => secs,
        });
        self.count += 1;
    }

    /// Returns the current average and clears the collected timings.
    fn take(&mut self) -> (usize, f32) {
        let avg = self.avg.take().unwrap_or(0.0);
        (std::mem::take(&mut self.count), avg)
    }
}

/// Displays a timer's average, as produced by [`FpsCounter::tick_with`].
pub struct TimerReport {
    name: &'static str,
    count: usize,
    avg: f32,
}

impl fmt::Display for TimerReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let avg_ms = self.avg * 1000.0;
        write!(f, "{}: {}x{avg_ms:.01}ms", self.name, self.count)
    }
}

/// Logs frames per second with optional timer data.
pub struct FpsCounter {
    name: String,
    frames: u32,
    start: Instant,
}

impl FpsCounter {
    pub fn new<N: Into<String>>(name: N) -> Self {
        Self {
            name: name.into(),
            frames: 0,
            start: Instant::now(),
        }
    }

    /// Advances the frame counter by 1 and, if one second has passed, logs FPS together with the
    /// averages of `timers`, resetting them.
    pub fn tick_with<'a>(&mut self, timers: impl IntoIterator<Item = &'a mut Timer>) {
        self.frames += 1;
        if self.start.elapsed() < Duration::from_secs(1) {
            return;
        }

        let reports = timers
            .into_iter()
            .map(|timer| {
                let (count, avg) = timer.take();
                TimerReport {
                    name: timer.name,
                    count,
                    avg,
                }
            })
            .collect::<Vec<_>>();
        if reports.is_empty() {
            log::debug!("{}: {} FPS", self.name, self.frames);
        } else {
            log::debug!(
                "{}: {} FPS ({})",
                self.name,
                self.frames,
                itertools::join(&reports, ", ")
            );
        }

        self.frames = 0;
        self.start = Instant::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timer_averages_and_resets() {
        let mut timer = Timer::new("work");
        timer.record(Duration::from_millis(10));
        timer.record(Duration::from_millis(20));
        let (count, avg) = timer.take();
        assert_eq!(count, 2);
        assert!((avg - 0.013).abs() < 1e-6, "{avg}");

        let (count, avg) = timer.take();
        assert_eq!(count, 0);
        assert_eq!(avg, 0.0);
    }

    #[test]
    fn time_returns_value() {
        let mut timer = Timer::new("work");
        assert_eq!(timer.time(|| 7), 7);
        assert_eq!(timer.count, 1);
    }

    #[test]
    fn report_format() {
        let report = TimerReport {
            name: "detect",
            count: 3,
            avg: 0.0125,
        };
        assert_eq!(report.to_string(), "detect: 3x12.5ms");
    }
}
