//! Gameplay counters and logging setup.

use crate::garden::TickReport;
use std::fs::{self, OpenOptions};
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

const LOG_EVERY_TICKS: u64 = 60;

/// Running totals for one session.
#[derive(Debug, Default)]
pub struct GardenMetrics {
    ticks: AtomicU64,
    purchases: AtomicU64,
    harvests: AtomicU64,
    coins_minted: AtomicU64,
    save_failures: AtomicU64,
}

impl GardenMetrics {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_tick(&self, report: &TickReport) {
        let tick = self.ticks.fetch_add(1, Ordering::Relaxed) + 1;
        self.coins_minted
            .fetch_add(report.coins_awarded(), Ordering::Relaxed);

        if tick.is_multiple_of(LOG_EVERY_TICKS) {
            tracing::info!(
                tick,
                plants = report.plants,
                coins_minted = self.coins_minted(),
                "Garden tick"
            );
        }
    }

    pub fn record_purchase(&self) {
        self.purchases.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_harvest(&self, coins: u64) {
        self.harvests.fetch_add(1, Ordering::Relaxed);
        self.coins_minted.fetch_add(coins, Ordering::Relaxed);
    }

    pub fn record_save_failure(&self) {
        self.save_failures.fetch_add(1, Ordering::Relaxed);
    }

    #[must_use]
    pub fn ticks(&self) -> u64 {
        self.ticks.load(Ordering::Relaxed)
    }

    #[must_use]
    pub fn purchases(&self) -> u64 {
        self.purchases.load(Ordering::Relaxed)
    }

    #[must_use]
    pub fn harvests(&self) -> u64 {
        self.harvests.load(Ordering::Relaxed)
    }

    #[must_use]
    pub fn coins_minted(&self) -> u64 {
        self.coins_minted.load(Ordering::Relaxed)
    }

    #[must_use]
    pub fn save_failures(&self) -> u64 {
        self.save_failures.load(Ordering::Relaxed)
    }
}

/// Installs the global tracing subscriber.
///
/// `RUST_LOG` wins over `level`. With a `log_file` the output is appended
/// there (the TUI owns the terminal); otherwise it goes to stderr.
pub fn init_logging(level: &str, log_file: Option<&Path>) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(level))?;
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    match log_file {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)?;
            }
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            builder
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
        }
        None => builder.with_writer(std::io::stderr).try_init(),
    }
    .map_err(|e| anyhow::anyhow!("failed to install tracing subscriber: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics_new() {
        let metrics = GardenMetrics::new();
        assert_eq!(metrics.ticks(), 0);
        assert_eq!(metrics.coins_minted(), 0);
    }

    #[test]
    fn test_record_tick() {
        let metrics = GardenMetrics::new();
        metrics.record_tick(&TickReport {
            plants: 2,
            income: vec![(0, 1), (2, 3)],
        });
        assert_eq!(metrics.ticks(), 1);
        assert_eq!(metrics.coins_minted(), 4);
    }

    #[test]
    fn test_record_harvest() {
        let metrics = GardenMetrics::new();
        metrics.record_harvest(5);
        metrics.record_purchase();
        assert_eq!(metrics.harvests(), 1);
        assert_eq!(metrics.purchases(), 1);
        assert_eq!(metrics.coins_minted(), 5);
    }
}
