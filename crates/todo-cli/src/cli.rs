use clap::{Parser, Subcommand};
use std::path::PathBuf;
use todo_domain::ViewFilter;

#[derive(Parser)]
#[command(name = "todo")]
#[command(about = "A terminal todo list editor", long_about = None)]
#[command(version)]
pub struct Cli {
    /// View to open with: all, important or others (overrides the config file)
    #[arg(short, long, value_name = "VIEW", env = "TODO_FILTER")]
    pub filter: Option<ViewFilter>,

    /// Path to a config file (defaults to the platform config directory)
    #[arg(short, long, value_name = "PATH", env = "TODO_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the effective settings and exit
    Config,
    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}
