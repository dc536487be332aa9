use clap::{Parser, Subcommand};
use uuid::Uuid;

use crate::auth::JwtVerifier;
use crate::config::AppConfig;
use crate::database::DatabaseManager;

#[derive(Parser)]
#[command(name = "photo-cli")]
#[command(about = "Photo API administration - tokens and migrations")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Mint a bearer token for a user with the configured secret")]
    Token {
        #[arg(long, help = "User id the token identifies")]
        user_id: Uuid,
        #[arg(long, help = "Lifetime in hours (defaults to SECURITY_JWT_EXPIRY_HOURS)")]
        hours: Option<u64>,
    },

    #[command(about = "Apply database migrations to DATABASE_URL")]
    Migrate,
}

pub async fn run(cli: Cli, config: &AppConfig) -> anyhow::Result<()> {
    match cli.command {
        Commands::Token { user_id, hours } => {
            let verifier = JwtVerifier::new(&config.security.access_token_secret)?;
            let hours = hours.unwrap_or(config.security.jwt_expiry_hours);
            println!("{}", verifier.issue(user_id, hours)?);
        }
        Commands::Migrate => {
            let manager = DatabaseManager::connect(&config.database).await?;
            manager.migrate().await?;
            manager.close().await;
            println!("Migrations applied");
        }
    }
    Ok(())
}
