use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    pub listen_addr: String,
    pub resource_base: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: "127.0.0.1:8080".to_string(),
            resource_base: PathBuf::from("resources"),
        }
    }
}

impl Config {
    pub fn load() -> Self {
        let mut cfg = match std::env::var("FEATHERFRAME_CONFIG") {
            Ok(path) => Self::from_file(&path),
            Err(_) => Self::default(),
        };

        if let Ok(addr) = std::env::var("LISTEN") {
            cfg.listen_addr = addr;
        }

        cfg
    }

    fn from_file(path: &str) -> Self {
        match std::fs::read_to_string(path) {
            Ok(contents) => match serde_yaml::from_str(&contents) {
                Ok(cfg) => cfg,
                Err(e) => {
                    tracing::warn!("Invalid config file {}: {}", path, e);
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("Could not read config file {}: {}", path, e);
                Self::default()
            }
        }
    }
}
