//! Planetary API server.
//!
//! `planetary-server` (or `planetary-server serve`) runs the HTTP API.
//! `db_create`, `db_drop` and `db_seed` maintain the database and exit.

use clap::{Parser, Subcommand};
use planetary_api::{
    app, apply_migrations, connect, drop_tables, mail, seed, AppState, Config, TokenService,
};
use tokio::net::TcpListener;

#[derive(Parser)]
#[command(name = "planetary-server")]
#[command(version, about = "Planetary API server", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Serve the HTTP API (default)
    Serve,

    /// Create the users and planets tables
    #[command(name = "db_create")]
    DbCreate,

    /// Drop the users and planets tables
    #[command(name = "db_drop")]
    DbDrop,

    /// Insert the demonstration planets and user
    #[command(name = "db_seed")]
    DbSeed,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                tracing_subscriber::EnvFilter::new("planetary_api=info,planetary_server=info,tower_http=info")
            }),
        )
        .init();

    let config = Config::from_env()?;
    let pool = connect(&config.database_url).await?;

    match cli.command.unwrap_or(Command::Serve) {
        Command::DbCreate => {
            apply_migrations(&pool).await?;
            tracing::info!("Database created successfully");
        }
        Command::DbDrop => {
            drop_tables(&pool).await?;
            tracing::info!("Database destroyed successfully");
        }
        Command::DbSeed => {
            apply_migrations(&pool).await?;
            let report = seed(&pool).await?;
            tracing::info!(
                planets = report.planets_inserted,
                users = report.users_inserted,
                "Data saved successfully"
            );
        }
        Command::Serve => {
            apply_migrations(&pool).await?;
            let state = AppState {
                pool: pool.clone(),
                tokens: TokenService::from_config(&config.auth),
                mailer: mail::from_config(&config.mail)?,
                reset_ttl_secs: config.auth.reset_ttl_secs,
            };

            let listener = TcpListener::bind(config.bind_addr).await?;
            tracing::info!("Planetary API listening on http://{}", listener.local_addr()?);
            axum::serve(listener, app(state)).await?;
        }
    }
    Ok(())
}
