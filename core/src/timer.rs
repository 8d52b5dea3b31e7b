use core::time::Duration;

use web_time::Instant;

/// Play clock of a session.
pub trait Timer {
    /// Restarts from zero.
    fn start(&mut self);

    /// Freezes the elapsed time until the next `start`.
    fn stop(&mut self);

    fn elapsed_secs(&self) -> u64;
}

#[derive(Copy, Clone, Debug, Default)]
pub struct Stopwatch {
    started: Option<Instant>,
    frozen: Option<Duration>,
}

impl Stopwatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_running(&self) -> bool {
        self.started.is_some()
    }

    pub fn elapsed(&self) -> Duration {
        match (self.started, self.frozen) {
            (Some(started), _) => started.elapsed(),
            (None, Some(frozen)) => frozen,
            (None, None) => Duration::ZERO,
        }
    }
}

impl Timer for Stopwatch {
    fn start(&mut self) {
        self.started = Some(Instant::now());
        self.frozen = None;
    }

    fn stop(&mut self) {
        if let Some(started) = self.started.take() {
            self.frozen = Some(started.elapsed());
        }
    }

    fn elapsed_secs(&self) -> u64 {
        self.elapsed().as_secs()
    }
}
