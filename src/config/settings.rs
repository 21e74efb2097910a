use std::env;

use thiserror::Error;

const DEFAULT_DATABASE: &str = "taskly";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing environment variable {0}")]
    MissingVar(&'static str),
}

#[derive(Debug, Clone)]
pub struct Settings {
    pub mongodb_uri: String,
    pub database: String,
}

impl Settings {
    pub fn from_env() -> Result<Self, ConfigError> {
        let mongodb_uri =
            env::var("MONGODB_URI").map_err(|_| ConfigError::MissingVar("MONGODB_URI"))?;
        let database =
            env::var("MONGODB_DATABASE").unwrap_or_else(|_| DEFAULT_DATABASE.to_string());

        Ok(Self {
            mongodb_uri,
            database,
        })
    }
}
