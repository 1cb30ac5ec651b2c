use std::path::PathBuf;

use anyhow::{Context, Result};

const APP_DIR: &str = "lander-showcase";

pub fn config_file_path() -> Result<PathBuf> {
    let base = dirs::config_dir().context("unable to resolve config directory")?;
    Ok(base.join(APP_DIR).join("config.toml"))
}

pub fn log_file_path() -> Result<PathBuf> {
    let base = dirs::data_local_dir().context("unable to resolve local data directory")?;
    Ok(base.join(APP_DIR).join("showcase.log"))
}
