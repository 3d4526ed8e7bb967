pub mod form;
pub mod input;
pub mod render;
pub mod state;

pub use state::App;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use garden_core::StateStore;
use garden_tui::Tui;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

impl<S: StateStore> App<S> {
    pub async fn run(&mut self, tui: &mut Tui) -> Result<()> {
        let frame_rate = Duration::from_secs_f64(1.0 / self.config.target_fps.max(1) as f64);
        let tick_rate = Duration::from_secs(self.config.garden.tick_interval_secs.max(1));
        let mut last_tick = Instant::now();

        let shutdown = Arc::new(AtomicBool::new(false));
        let shutdown_clone = shutdown.clone();
        tokio::spawn(async move {
            tokio::signal::ctrl_c().await.ok();
            tracing::info!("Ctrl+C received, initiating graceful shutdown...");
            shutdown_clone.store(true, Ordering::SeqCst);
        });

        while self.running && !shutdown.load(Ordering::SeqCst) {
            tui.terminal.draw(|f| self.draw(f))?;

            if event::poll(frame_rate)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key(key);
                    }
                }
            }

            if last_tick.elapsed() >= tick_rate {
                self.on_tick();
                last_tick = Instant::now();
            }
        }

        tracing::info!("Saving state before exit...");
        self.session.persist();
        let metrics = self.session.metrics();
        tracing::info!(
            ticks = metrics.ticks(),
            purchases = metrics.purchases(),
            harvests = metrics.harvests(),
            coins_minted = metrics.coins_minted(),
            save_failures = metrics.save_failures(),
            "Session finished"
        );
        Ok(())
    }
}
