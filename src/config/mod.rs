mod types;

pub use types::*;

use crate::{Error, Result};
use std::{env, io::ErrorKind, path::Path, str::FromStr};
use tracing::debug;

const DEFAULT_CONFIG_PATH: &str = "config.yaml";

/// Loads the process configuration.
///
/// Precedence, lowest first: built-in defaults, the YAML file at
/// `CONFIG_PATH` (or `config.yaml` when present), then environment
/// variables. A `.env` file in the working directory is merged into the
/// environment beforehand without overriding variables that are already set.
pub async fn load() -> Result<Config> {
    if let Ok(path) = dotenvy::dotenv() {
        debug!("Loaded environment from: {}", path.display());
    }

    let explicit_path = env::var("CONFIG_PATH").ok();
    load_from(explicit_path.as_deref(), |key| env::var(key).ok()).await
}

/// Same as [`load`] with the config path and environment supplied by the caller.
///
/// An explicit `config_path` must exist; without one, `config.yaml` is read
/// only if present.
pub async fn load_from<F>(config_path: Option<&str>, env: F) -> Result<Config>
where
    F: Fn(&str) -> Option<String>,
{
    let yaml = match config_path {
        Some(path) => read_config_file(path, true).await?,
        None => read_config_file(DEFAULT_CONFIG_PATH, false).await?,
    };

    from_sources(yaml.as_deref(), env)
}

/// Reads a YAML config file; a missing optional file yields `None`.
pub async fn read_config_file(path: impl AsRef<Path>, required: bool) -> Result<Option<String>> {
    let path = path.as_ref();
    debug!("Loading configuration from: {}", path.display());

    match tokio::fs::read_to_string(path).await {
        Ok(contents) => Ok(Some(contents)),
        Err(e) if e.kind() == ErrorKind::NotFound && !required => {
            debug!("No configuration file found, using defaults and environment");
            Ok(None)
        }
        Err(e) => Err(e.into()),
    }
}

/// Builds a [`Config`] from optional YAML text and an environment lookup.
///
/// Fails when no API key is supplied by either source.
pub fn from_sources<F>(yaml: Option<&str>, env: F) -> Result<Config>
where
    F: Fn(&str) -> Option<String>,
{
    let mut config: Config = match yaml {
        Some(text) if !text.trim().is_empty() => serde_yaml::from_str(text)?,
        _ => Config::default(),
    };

    let lookup = |key: &str| env(key).filter(|value| !value.trim().is_empty());

    if let Some(app_name) = lookup("APP_NAME") {
        config.app_name = app_name;
    }
    if let Some(api_key) = lookup("OPENAI_API_KEY") {
        config.llm.api_key = api_key;
    }
    if let Some(base_url) = lookup("OPENAI_BASE_URL") {
        config.llm.base_url = base_url;
    }
    if let Some(model) = lookup("OPENAI_MODEL") {
        config.llm.model = model;
    }
    if let Some(timeout) = lookup("OPENAI_TIMEOUT_SECS") {
        config.llm.timeout_secs = parse_var("OPENAI_TIMEOUT_SECS", &timeout)?;
    }
    if let Some(host) = lookup("HOST") {
        config.server.host = host;
    }
    if let Some(port) = lookup("PORT") {
        config.server.port = parse_var("PORT", &port)?;
    }

    if config.llm.api_key.trim().is_empty() {
        return Err(Error::config(
            "OPENAI_API_KEY is not set (environment, .env file or llm.api_key)",
        ));
    }
    if config.llm.timeout_secs == 0 {
        return Err(Error::config("llm.timeout_secs must be greater than zero"));
    }

    Ok(config)
}

fn parse_var<T: FromStr>(key: &str, value: &str) -> Result<T> {
    value
        .trim()
        .parse()
        .map_err(|_| Error::config(format!("Invalid value for {}: '{}'", key, value)))
}
