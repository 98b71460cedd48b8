//! Server settings read from the environment.

use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

use crate::error::{EngineError, EngineResult};

use super::loader::ConfigLoader;

/// Default address the HTTP server binds to.
pub const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:8080";

/// Settings for the calculator HTTP server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerSettings {
    /// Address to bind the HTTP listener to.
    pub listen_addr: SocketAddr,
    /// Directory of YAML configuration; the built-in reference tables when unset.
    pub config_dir: Option<PathBuf>,
}

impl ServerSettings {
    /// Reads `BEAN_CALC_LISTEN_ADDR` and `BEAN_CALC_CONFIG_DIR`.
    pub fn from_env() -> EngineResult<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds settings from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> EngineResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let optional = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let raw_addr =
            optional("BEAN_CALC_LISTEN_ADDR").unwrap_or_else(|| DEFAULT_LISTEN_ADDR.to_string());
        let listen_addr = raw_addr
            .trim()
            .parse()
            .map_err(|e| EngineError::ConfigParseError {
                path: "BEAN_CALC_LISTEN_ADDR".to_string(),
                message: format!("invalid listen address '{}': {}", raw_addr, e),
            })?;

        Ok(Self {
            listen_addr,
            config_dir: optional("BEAN_CALC_CONFIG_DIR").map(PathBuf::from),
        })
    }

    /// Loads the calculator configuration these settings point at.
    pub fn load_config(&self) -> EngineResult<ConfigLoader> {
        match &self.config_dir {
            Some(dir) => ConfigLoader::load(dir),
            None => Ok(ConfigLoader::reference()),
        }
    }
}
