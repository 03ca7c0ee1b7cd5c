use std::path::{Path, PathBuf};

use anyhow::Context;
use config::{File, FileFormat};
use intake_models::handoff::HandoffRecipient;
use serde::Deserialize;
use url::Url;

pub const DEFAULT_CONFIG_PATH: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../config.toml");

/// Colon separated list of config files, later files override earlier ones.
pub const CONFIG_PATHS_ENV: &str = "INTAKE_CONFIG";

/// Loads the config from the files listed in `INTAKE_CONFIG`, or from the
/// bundled default config if the variable is not set.
pub fn load() -> anyhow::Result<Config> {
    let paths = match std::env::var_os(CONFIG_PATHS_ENV) {
        Some(paths) => std::env::split_paths(&paths).collect::<Vec<_>>(),
        None => vec![PathBuf::from(DEFAULT_CONFIG_PATH)],
    };

    load_paths(&paths)
}

pub fn load_paths(paths: &[impl AsRef<Path>]) -> anyhow::Result<Config> {
    let sources = paths
        .iter()
        .map(|path| {
            let path = path.as_ref();
            std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file at {}", path.display()))
        })
        .collect::<anyhow::Result<Vec<_>>>()?;

    load_str(&sources)
}

fn load_str(sources: &[impl AsRef<str>]) -> anyhow::Result<Config> {
    sources
        .iter()
        .fold(config::Config::builder(), |builder, content| {
            builder.add_source(File::from_str(content.as_ref(), FileFormat::Toml))
        })
        .build()?
        .try_deserialize()
        .context("Failed to load config")
}

#[derive(Debug, Deserialize)]
pub struct Config {
    pub contact: ContactConfig,
    pub handoff: HandoffConfig,
    pub notice: NoticeConfig,
}

#[derive(Debug, Deserialize)]
pub struct ContactConfig {
    pub recipient: HandoffRecipient,
}

#[derive(Debug, Deserialize)]
pub struct HandoffConfig {
    pub base_url: Url,
    pub open_command: Option<Vec<String>>,
}

#[derive(Debug, Deserialize)]
pub struct NoticeConfig {
    pub title: String,
    pub description: String,
}
