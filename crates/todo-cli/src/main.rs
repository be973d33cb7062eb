mod cli;
mod settings;

use clap::{CommandFactory, Parser};
use cli::{Cli, Commands};
use settings::Settings;
use todo_tui::App;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if let Ok(log_path) = std::env::var("TODO_DEBUG_LOG") {
        let log_file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)?;

        tracing_subscriber::fmt()
            .with_writer(log_file)
            .with_max_level(tracing::Level::DEBUG)
            .with_target(true)
            .with_thread_ids(true)
            .with_file(true)
            .with_line_number(true)
            .with_ansi(false)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_max_level(tracing::Level::WARN)
            .init();
    }

    let cli = Cli::parse();

    if let Some(Commands::Completions { shell }) = cli.command {
        clap_complete::generate(shell, &mut Cli::command(), "todo", &mut std::io::stdout());
        return Ok(());
    }

    let settings = Settings::resolve(&cli)?;

    match cli.command {
        Some(Commands::Config) => {
            println!("{}", settings.describe());
        }
        Some(Commands::Completions { .. }) => {}
        None => {
            tracing::info!("Starting with view {}", settings.filter);
            let mut app = App::new(settings.filter).with_tick_rate(settings.tick_rate);
            app.run().await?;
        }
    }

    Ok(())
}
