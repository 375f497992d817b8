use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use clinic_db::{Database, DatabaseConfig};
use clinic_server::auth::{MAX_TTL_HOURS, issue_token};

#[derive(Parser)]
#[command(name = "clinic", version, about = "Dental clinic backend operator tool")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Apply pending database migrations (requires DATABASE_URL)
    Migrate,

    /// Mint a bearer JWT accepted by the API server
    Token {
        /// Token subject (user name)
        #[arg(short, long)]
        subject: String,

        /// Role claim embedded in the token
        #[arg(short, long, default_value = "ADMIN")]
        role: String,

        /// Hours until the token expires (at most one year)
        #[arg(long, default_value_t = 24, value_parser = clap::value_parser!(u64).range(1..=MAX_TTL_HOURS))]
        ttl_hours: u64,

        /// HS256 signing secret, must match the server's
        #[arg(long, env = "CLINIC_JWT_SECRET", hide_env_values = true)]
        secret: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("clinic=info".parse()?))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Migrate => cmd_migrate().await,
        Commands::Token {
            subject,
            role,
            ttl_hours,
            secret,
        } => cmd_token(&subject, &role, ttl_hours, &secret),
    }
}

async fn cmd_migrate() -> Result<()> {
    let config = DatabaseConfig::from_env().context("Failed to read database configuration")?;
    let db = Database::connect(&config)
        .await
        .context("Failed to connect to database")?;

    db.migrate().await.context("Failed to run migrations")?;
    tracing::info!("Migrations applied");
    Ok(())
}

fn cmd_token(subject: &str, role: &str, ttl_hours: u64, secret: &str) -> Result<()> {
    anyhow::ensure!(!secret.trim().is_empty(), "Signing secret must not be empty");

    let token = issue_token(subject, role, secret, ttl_hours)?;
    tracing::info!(%subject, %role, ttl_hours, "Token issued");
    println!("{token}");
    Ok(())
}
