use customer_api::ServerConfig;
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};

/// Config file read from the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "customer-server.toml";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,

    /// Log at `debug` instead of `info` unless `RUST_LOG` is set.
    #[serde(default)]
    pub debug: bool,
}

/// Load configuration.
///
/// An explicit path must exist. Without one, `customer-server.toml` is used if
/// present and built-in defaults otherwise.
pub fn load_config(explicit: Option<&Path>) -> anyhow::Result<AppConfig> {
    match explicit {
        Some(path) => read_config(path),
        None => {
            let path = Path::new(DEFAULT_CONFIG_FILE);
            if path.exists() {
                read_config(path)
            } else {
                Ok(AppConfig::default())
            }
        }
    }
}

fn read_config(path: &Path) -> anyhow::Result<AppConfig> {
    let raw = fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("failed to read config {}: {}", path.display(), e))?;
    let cfg: AppConfig = toml::from_str(&raw)
        .map_err(|e| anyhow::anyhow!("failed to parse config {}: {}", path.display(), e))?;
    Ok(cfg)
}
