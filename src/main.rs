use anyhow::Result;
use clap::{Parser, Subcommand};
use resume_analyzer::admin_cli::{handle_admin_command, AdminCli};
use resume_analyzer::{start_web_server, ConfigManager};
use tracing::info;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(name = "resumind")]
#[command(about = "AI resume analyzer API server and admin tools")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Run the API server (default)
    Serve,
    /// Administrative database commands
    Admin(AdminCli),
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("resume_analyzer=info,rocket::server=off")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Command::Admin(admin)) => handle_admin_command(admin).await,
        Some(Command::Serve) | None => {
            let config = ConfigManager::load()?;

            info!(
                "Environment: {}",
                std::env::var("ENVIRONMENT").unwrap_or_else(|_| "local".to_string())
            );
            info!("Database: {}", config.environment.database_path.display());
            info!("Server: http://0.0.0.0:{}", config.environment.port);

            start_web_server(config).await
        }
    }
}
