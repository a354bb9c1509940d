use std::time::{Duration, Instant};

const REPORT_INTERVAL: Duration = Duration::from_millis(500);

/// Counts generations and restarts between periodic reports
pub struct Recorder {
    gens: usize,
    restarts: usize,
    alive: usize,
    gens_in_report: usize,
    interval: Duration,
    last_report: Instant,
}

impl Recorder {
    pub fn new(alive: usize) -> Self {
        Self::with_interval(alive, REPORT_INTERVAL)
    }

    pub fn with_interval(alive: usize, interval: Duration) -> Self {
        Self {
            gens: 0,
            restarts: 0,
            alive,
            gens_in_report: 0,
            interval,
            last_report: Instant::now(),
        }
    }

    pub fn record(&mut self, alive: usize, restarted: bool) {
        self.gens += 1;
        self.gens_in_report += 1;
        self.restarts += usize::from(restarted);
        self.alive = alive;
    }

    #[inline]
    pub fn generations(&self) -> usize {
        self.gens
    }
    #[inline]
    pub fn restarts(&self) -> usize {
        self.restarts
    }

    pub fn has_report(&self) -> bool {
        self.last_report.elapsed() >= self.interval
    }

    pub fn report(&mut self) -> String {
        let gens_per_sec = self.gens_in_report as f64 / self.last_report.elapsed().as_secs_f64();
        // reset stats for next report
        self.last_report = Instant::now();
        self.gens_in_report = 0;

        format!(
            "{:.02}gen/s gens:{}, restarts:{}, alive:{}",
            gens_per_sec, self.gens, self.restarts, self.alive
        )
    }
}
