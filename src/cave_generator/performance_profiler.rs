use std::time::{Duration, Instant};

use log::debug;

/// Logs how long each generation stage takes.
pub struct PerformanceProfiler {
    start_time: Instant,
    last_time: Instant,
}

impl PerformanceProfiler {
    pub fn new(start_time: Instant) -> Self {
        Self {
            start_time,
            last_time: start_time,
        }
    }

    fn elapsed_since(&mut self, from: Instant) -> Duration {
        let current_time = Instant::now();
        let difference = current_time.duration_since(from);
        self.last_time = current_time;
        difference
    }

    pub fn log_elapsed_time(&mut self, text: &str) {
        let elapsed = self.elapsed_since(self.last_time);
        debug!("Profiler: {text} {} us", elapsed.as_micros());
    }

    pub fn log_total_elapsed_time(&mut self, text: &str) {
        let elapsed = self.elapsed_since(self.start_time);
        debug!("Profiler: {text} {} us", elapsed.as_micros());
    }
}
