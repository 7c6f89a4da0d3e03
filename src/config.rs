use std::env::VarError;
use std::path::{Path, PathBuf};

use anyhow::anyhow;

pub const VARIABLES: &[&str] = &["DATABASE_URL", "PORT"];

pub const DEFAULT_PORT: u16 = 5000;

pub struct Config {
    pub database_url: Option<String>,
    pub listen_port: u16,
}

/// Loads `.env` from the working directory or a parent into the process
/// environment. Variables already set win; a missing file yields `None`.
pub fn load_dotenv() -> anyhow::Result<Option<PathBuf>> {
    dotenv_result(dotenvy::dotenv())
}

pub fn load_dotenv_from(path: &Path) -> anyhow::Result<Option<PathBuf>> {
    dotenv_result(dotenvy::from_path(path).map(|()| path.to_path_buf()))
}

fn dotenv_result(result: dotenvy::Result<PathBuf>) -> anyhow::Result<Option<PathBuf>> {
    match result {
        Ok(path) => Ok(Some(path)),
        Err(e) if e.not_found() => Ok(None),
        Err(e) => Err(anyhow!(".env: {e}")),
    }
}

impl Config {
    pub fn env() -> anyhow::Result<Self> {
        Self::from_lookup(|name| std::env::var(name))
    }

    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Result<String, VarError>,
    {
        let database_url = optional(&lookup, "DATABASE_URL")?;

        let listen_port = match optional(&lookup, "PORT")? {
            Some(port) => port
                .parse()
                .map_err(|e| anyhow!("PORT value {port:?} is not a valid port: {e}"))?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            database_url,
            listen_port,
        })
    }

    pub fn log(&self) {
        match &self.database_url {
            Some(url) => log::info!("config: DATABASE_URL = {url}"),
            None => log::warn!("config: DATABASE_URL not set, database connection disabled"),
        }
        log::info!("config: PORT = {}", self.listen_port);
    }
}

fn optional<F>(lookup: &F, name: &str) -> anyhow::Result<Option<String>>
where
    F: Fn(&str) -> Result<String, VarError>,
{
    match lookup(name) {
        Ok(value) if value.is_empty() => Ok(None),
        Ok(value) => Ok(Some(value)),
        Err(VarError::NotPresent) => Ok(None),
        Err(VarError::NotUnicode(_)) => Err(anyhow!("{name} value is not valid unicode")),
    }
}
