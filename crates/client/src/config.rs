//! Demo client configuration.
use std::env;
use std::path::PathBuf;

use tbr_runtime::DriverConfig;

#[derive(Clone, Debug, Default)]
pub struct ClientConfig {
    pub driver: DriverConfig,
    pub log_dir: Option<PathBuf>,
}

impl ClientConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `TBR_LOG_DIR` - Also write logs to `client.log` in this directory
    /// - see [`DriverConfig::from_env`] for the driver limits
    pub fn from_env() -> Self {
        Self {
            driver: DriverConfig::from_env(),
            log_dir: env::var("TBR_LOG_DIR").ok().map(PathBuf::from),
        }
    }
}
