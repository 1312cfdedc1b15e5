use std::path::PathBuf;

use clap::Parser;
use color_eyre::Result;
use color_eyre::eyre::eyre;
use crossterm::event::KeyEventKind;
use sysglance::app::App;
use sysglance::config::{self, load_config, load_config_from_path};
use sysglance::event::{Event, EventHandler, TICK_RATE};
use sysglance::logging;
use sysglance::system::procfs::ProcFs;
use sysglance::system::sampler::SampleLoop;
use sysglance::ui;

#[derive(Parser)]
#[command(
    name = "sysglance",
    about = "Live CPU, memory and process monitor for the terminal"
)]
struct Cli {
    /// Path to config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// procfs mount point to sample
    #[arg(long)]
    proc_root: Option<PathBuf>,

    /// Color support: auto, mono
    #[arg(long)]
    color: Option<String>,

    /// Write JSON-lines logs to this file.
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Log level: error, warn, info, debug, trace
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Print a single snapshot as JSON instead of starting the UI.
    #[arg(long, default_value_t = false)]
    once: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    if let Some(path) = &cli.log_file {
        let level = logging::parse_level(&cli.log_level)
            .ok_or_else(|| eyre!("unknown --log-level `{}`", cli.log_level))?;
        logging::init_tracing_json(path, level)?;
    }

    let config = load_config_for_cli(&cli);
    tracing::info!(proc_root = %config.general.proc_root.display(), "starting");

    if cli.once {
        return print_once(config).await;
    }

    let mut terminal = ratatui::init();

    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        ratatui::restore();
        original_hook(panic_info);
    }));

    let result = run(&mut terminal, config).await;

    ratatui::restore();

    result
}

async fn run(terminal: &mut ratatui::DefaultTerminal, config: config::Config) -> Result<()> {
    let mut app = App::new(config);
    let mut events = EventHandler::new(TICK_RATE);

    terminal.draw(|frame| ui::draw(frame, &app))?;

    while app.running {
        let Some(event) = events.next().await else {
            break;
        };
        let should_draw = match event {
            Event::Key(key) => {
                if key.kind == KeyEventKind::Press {
                    let action = app.map_key(key);
                    app.dispatch(action);
                }
                false
            }
            Event::Tick => {
                app.refresh_data();
                true
            }
            Event::Resize => true,
        };
        if should_draw && app.running {
            terminal.draw(|frame| ui::draw(frame, &app))?;
        }
    }

    tracing::info!("stopped");
    Ok(())
}

/// Samples twice, one tick apart, so the printed CPU figure is a real
/// interval measurement.
async fn print_once(config: config::Config) -> Result<()> {
    let mut sampler = SampleLoop::new(ProcFs::new(config.general.proc_root));
    sampler.tick();
    tokio::time::sleep(TICK_RATE).await;
    let snapshot = sampler.tick();

    println!("{}", serde_json::to_string_pretty(&snapshot)?);
    Ok(())
}

fn load_config_for_cli(cli: &Cli) -> config::Config {
    let mut config = match &cli.config {
        Some(path) => load_config_from_path(path),
        None => load_config(),
    };

    if let Some(root) = &cli.proc_root {
        config.general.proc_root = root.clone();
    }
    if let Some(ref support) = cli.color {
        config.general.color_support = support.clone();
    }

    config
}
