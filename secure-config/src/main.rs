use clap::Parser;
use std::path::PathBuf;

use secure_config::server::run_server;
use secure_config::state::ServerConfig;
use secure_config::telemetry::init_tracing;

#[derive(Parser)]
#[command(
    name = "secure-config",
    version,
    about = "Serve a read-only configuration document and masked environment values"
)]
struct Args {
    #[arg(long, env = "HOST", default_value = "0.0.0.0", help = "Address to bind")]
    host: String,

    #[arg(long, env = "PORT", default_value_t = 4000, help = "Port to listen on")]
    port: u16,

    #[arg(
        long = "config",
        env = "APP_CONFIG_PATH",
        default_value = config::DEFAULT_CONFIG_PATH,
        help = "Configuration document (.yml, .yaml, .toml or .json)"
    )]
    config_path: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let args = Args::parse();
    run_server(ServerConfig {
        host: args.host,
        port: args.port,
        config_path: args.config_path,
    })
    .await?;
    Ok(())
}
