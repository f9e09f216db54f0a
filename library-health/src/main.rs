use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use library_health::server::run_server;
use library_health::state::{DEFAULT_DATABASE_URL, LibraryConfig};

#[derive(Parser)]
#[command(
    name = "library-health",
    version,
    about = "Book list on PostgreSQL with health and status endpoints"
)]
struct Args {
    #[arg(long, env = "HOST", default_value = "0.0.0.0", help = "Address to bind")]
    host: String,

    #[arg(long, env = "PORT", default_value_t = 3000, help = "Port to listen on")]
    port: u16,

    #[arg(
        long,
        env = "DATABASE_URL",
        default_value = DEFAULT_DATABASE_URL,
        hide_env_values = true,
        help = "PostgreSQL connection URL"
    )]
    database_url: String,

    #[arg(
        long,
        env = "DB_MAX_CONNECTIONS",
        default_value_t = 20,
        help = "Maximum pooled connections"
    )]
    max_connections: u32,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();
    let config = LibraryConfig {
        host: args.host,
        port: args.port,
        database_url: args.database_url,
        max_connections: args.max_connections,
        ..LibraryConfig::default()
    };

    run_server(config).await?;
    Ok(())
}
