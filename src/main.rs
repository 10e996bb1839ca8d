use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use reqdoc::cli::{self, Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "reqdoc=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Init => cli::commands::init().await,
        Commands::Login { email } => cli::commands::login(&email).await,
        Commands::Register { username, email } => cli::commands::register(&username, &email).await,
        Commands::Logout => cli::commands::logout().await,
        Commands::Whoami => cli::commands::whoami().await,
        Commands::List { format } => cli::commands::list(format).await,
        Commands::Show { id } => cli::commands::show(&id).await,
        Commands::Create { title, description } => {
            cli::commands::create(&title, description.as_deref()).await
        }
        Commands::Invite { id, emails } => cli::commands::invite(&id, &emails).await,
        Commands::Participants { id } => cli::commands::participants(&id).await,
        Commands::Generate { id } => cli::commands::generate(&id).await,
        Commands::Export { id, output } => cli::commands::export(&id, output).await,
        Commands::Versions { id } => cli::commands::versions(&id).await,
        Commands::Doc { id, version } => cli::commands::doc(&id, version).await,
    }
}
