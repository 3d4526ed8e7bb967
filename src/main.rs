use anyhow::{Context, Result};
use clap::Parser;
use garden_core::{init_logging, AppConfig};
use garden_tui::Tui;
use pixel_garden_lib::app::App;
use std::path::Path;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Mode to run the garden in
    #[arg(short, long, value_enum, default_value = "standard")]
    mode: Mode,

    /// Custom config file path
    #[arg(short, long, default_value = "config.toml")]
    config: String,

    /// Override the save file from the config
    #[arg(short, long)]
    save: Option<String>,

    /// Number of simulation ticks to run in headless mode
    #[arg(long, default_value_t = 10)]
    ticks: u64,

    /// Seed the gameplay RNG for a reproducible run
    #[arg(long)]
    seed: Option<u64>,
}

#[derive(clap::ValueEnum, Clone, Debug)]
enum Mode {
    Standard,
    Headless,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = AppConfig::load_or_default(&args.config);
    if let Some(save) = args.save {
        config.storage.save_path = save;
    }
    if args.seed.is_some() {
        config.garden.seed = args.seed;
    }

    match args.mode {
        Mode::Headless => {
            init_logging(&config.storage.log_level, None).context("initialising logging")?;
            println!("Running in HEADLESS mode for {} ticks...", args.ticks);
            let mut app = App::new(config);
            for _ in 0..args.ticks {
                app.on_tick();
            }
            let session = &app.session;
            for (i, slot) in session.garden().state().slots().iter().enumerate() {
                match slot.plant() {
                    Some(p) => println!(
                        "slot {}: {} lv{} health {} hunger {} age {}",
                        i + 1,
                        p.organism_id,
                        p.level,
                        p.health,
                        p.hunger,
                        p.age
                    ),
                    None => println!("slot {}: empty", i + 1),
                }
            }
            println!("coins: {}", session.coins());
            println!("Headless run finished.");
        }
        Mode::Standard => {
            init_logging(
                &config.storage.log_level,
                Some(Path::new(&config.storage.log_path)),
            )
            .with_context(|| format!("opening log file {}", config.storage.log_path))?;
            let mut tui = Tui::new().context("creating terminal")?;
            tui.init().context("entering raw mode")?;

            let mut app = App::new(config);
            let res = app.run(&mut tui).await;

            tui.exit()?;

            if let Err(e) = res {
                eprintln!("Application error: {e}");
            } else {
                println!("Exited clean.");
            }
        }
    }

    Ok(())
}
