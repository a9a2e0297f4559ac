mod client;
mod commands;
mod render;

use anyhow::Result;
use clap::{Parser, Subcommand};
use gameday_core::config::GamedayConfig;
use gameday_core::store::AppointmentStore;

#[derive(Parser)]
#[command(name = "gameday")]
#[command(about = "Schedule and browse gaming sessions on your servers")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Schedule a new session
    New,
    /// List scheduled sessions
    List {
        /// Only show sessions with this category id
        #[arg(short, long)]
        category: Option<String>,
    },
    /// Show one session with live server presence
    Show {
        /// Appointment id (prefix is enough)
        id: String,
    },
    /// List the available match categories
    Categories,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = GamedayConfig::load()?;
    let store = AppointmentStore::open(config.slot_path())?;

    match cli.command {
        Commands::New => commands::new::run(&store),
        Commands::List { category } => commands::list::run(&store, category.as_deref()),
        Commands::Show { id } => commands::show::run(&store, &config, &id).await,
        Commands::Categories => commands::categories::run(),
    }
}
