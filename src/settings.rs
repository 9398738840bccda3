use std::env;
use std::path::PathBuf;
use std::time::Duration;

use serde::Deserialize;
use tracing::info;

use crate::core::chrome::ChromeConfig;

#[derive(Clone, Deserialize, Debug)]
pub struct Config {
    #[serde(default = "default_env")]
    pub env: String, // file / server
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub prefix: Option<String>,
    #[serde(default = "default_log_dir")]
    pub log_dir: PathBuf,
    #[serde(default = "default_log_level")]
    pub log_level: String,
    pub chrome_path: Option<PathBuf>,
    #[serde(default = "default_element_timeout_secs")]
    pub element_timeout_secs: u64,
}

fn default_env() -> String {
    "file".to_string()
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_log_dir() -> PathBuf {
    PathBuf::from("./logs")
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_element_timeout_secs() -> u64 {
    10
}

impl Default for Config {
    fn default() -> Self {
        Self {
            env: default_env(),
            host: default_host(),
            port: default_port(),
            prefix: None,
            log_dir: default_log_dir(),
            log_level: default_log_level(),
            chrome_path: None,
            element_timeout_secs: default_element_timeout_secs(),
        }
    }
}

impl Config {
    pub fn chrome(&self) -> ChromeConfig {
        ChromeConfig {
            path: self.chrome_path.clone(),
            element_timeout: Duration::from_secs(self.element_timeout_secs),
            ..ChromeConfig::default()
        }
    }
}

pub fn get_config() -> Result<Config, envy::Error> {
    let env_var = env::var("ENV").unwrap_or("file".to_string());
    if env_var == "file" {
        info!("using .env file as environment variable");
        let _ = dotenvy::dotenv();
    } else {
        info!("using server environment as environment variable");
    }
    envy::from_env::<Config>()
}
