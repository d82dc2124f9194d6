mod input;
mod render;
mod runtime;
mod ui;

use anyhow::Result;
use clap::Parser;

use sefstats_core::api::StatsClient;
use sefstats_core::config::CoreConfig;

use crate::runtime::run_app;
use crate::ui::{App, InterfaceLang};

#[derive(Parser)]
#[command(name = "sefstats-tui")]
#[command(about = "Terminal dashboard for Sefaria reading statistics")]
struct Cli {
    /// Base URL of the stats API
    #[arg(long, default_value = "https://www.sefaria.org")]
    api_base: String,

    /// User id whose statistics to load
    #[arg(long, default_value_t = 1)]
    uid: u64,

    /// Enable the user-id chooser for inspecting other accounts
    #[arg(long)]
    moderator: bool,

    /// Show interface labels in Hebrew
    #[arg(long)]
    hebrew: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging();

    // Set up panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        // Restore terminal before showing panic
        let _ = crossterm::terminal::disable_raw_mode();
        let _ = crossterm::execute!(
            std::io::stdout(),
            crossterm::terminal::LeaveAlternateScreen
        );
        eprintln!("{}", panic_info);
        original_hook(panic_info);
    }));

    let config = CoreConfig::new(cli.api_base, cli.uid);
    let client = StatsClient::new(config.api_base.clone());
    let lang = if cli.hebrew {
        InterfaceLang::Hebrew
    } else {
        InterfaceLang::English
    };
    let mut app = App::new(config, cli.moderator, lang);

    let mut terminal = ui::init_terminal()?;
    let result = run_app(&mut terminal, &mut app, client).await;
    ui::restore_terminal()?;

    if let Err(err) = result {
        eprintln!("Error: {err}");
    }

    Ok(())
}

/// Logs go to a file when SEFSTATS_LOG_FILE is set; the TUI owns the
/// terminal, so nothing is ever written to stdout.
fn init_logging() {
    let Ok(path) = std::env::var("SEFSTATS_LOG_FILE") else {
        return;
    };
    match std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
    {
        Ok(file) => {
            let filter = tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::sync::Arc::new(file))
                .with_ansi(false)
                .init();
        }
        Err(err) => eprintln!("Failed to open log file {path}: {err}"),
    }
}
