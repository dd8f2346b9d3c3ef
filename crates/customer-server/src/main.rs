mod config;

use clap::Parser;
use config::AppConfig;
use customer_api::CustomerServer;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "customer-server", version, about = "Customer profile HTTP server")]
struct Cli {
    /// Path to a TOML config file
    #[arg(long, env = "CUSTOMER_SERVER_CONFIG")]
    config: Option<PathBuf>,

    /// IP address to bind, overrides the config file
    #[arg(long)]
    host: Option<String>,

    /// Port to listen on, overrides the config file
    #[arg(long)]
    port: Option<u16>,

    /// Log at debug level
    #[arg(long, default_value_t = false)]
    debug: bool,
}

impl Cli {
    fn apply(&self, cfg: &mut AppConfig) {
        if let Some(host) = &self.host {
            cfg.server.host = host.clone();
        }
        if let Some(port) = self.port {
            cfg.server.port = port;
        }
        if self.debug {
            cfg.debug = true;
        }
    }
}

fn env_filter(debug: bool) -> EnvFilter {
    let default = if debug { "debug" } else { "info" };
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut cfg = config::load_config(cli.config.as_deref())?;
    cli.apply(&mut cfg);

    tracing_subscriber::fmt()
        .with_env_filter(env_filter(cfg.debug))
        .init();

    tracing::debug!(?cfg, "Loaded configuration");

    CustomerServer::new(cfg.server).run().await?;

    Ok(())
}
