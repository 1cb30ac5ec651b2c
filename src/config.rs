use std::env;
use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result, bail};
use serde::Deserialize;
use tracing::debug;

use crate::content::TOTAL_EPISODES;

const MAX_EPISODES: usize = 999;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AutoplayPolicy {
    Allowed,
    MutedOnly,
    Blocked,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub asset_root: PathBuf,
    pub video_format: String,
    pub total_episodes: usize,
    pub autoplay_delay_ms: u64,
    pub autoplay_policy: AutoplayPolicy,
    pub episode_seconds: f64,
    pub auto_advance: bool,
    pub start_muted: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            asset_root: PathBuf::from("public"),
            video_format: "mp4".to_string(),
            total_episodes: TOTAL_EPISODES,
            autoplay_delay_ms: 300,
            autoplay_policy: AutoplayPolicy::MutedOnly,
            episode_seconds: 10.0,
            auto_advance: false,
            start_muted: false,
        }
    }
}

impl Config {
    /// Reads the config file. An explicit path must exist; the default one may not.
    pub fn load(explicit: Option<&Path>, default_path: &Path) -> Result<Self> {
        let path = explicit.unwrap_or(default_path);
        let raw = match fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == io::ErrorKind::NotFound && explicit.is_none() => {
                debug!(path = %path.display(), "no config file, using defaults");
                return Ok(Self::default());
            }
            Err(err) => {
                return Err(err)
                    .with_context(|| format!("failed to read config at {}", path.display()));
            }
        };
        Self::from_toml_str(&raw)
            .with_context(|| format!("invalid config at {}", path.display()))
    }

    pub fn from_toml_str(raw: &str) -> Result<Self> {
        let config: Self = toml::from_str(raw).context("failed to parse TOML")?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if !(1..=MAX_EPISODES).contains(&self.total_episodes) {
            bail!(
                "total_episodes must be between 1 and {MAX_EPISODES}, got {}",
                self.total_episodes
            );
        }
        if !self.episode_seconds.is_finite() || self.episode_seconds <= 0.0 {
            bail!(
                "episode_seconds must be a positive number, got {}",
                self.episode_seconds
            );
        }
        let format = self.video_format.trim();
        if format.is_empty() || format.contains(['/', '\\', '.']) {
            bail!("video_format must be a bare extension like \"mp4\"");
        }
        Ok(())
    }

    pub fn apply_asset_override(&mut self, cli_value: Option<PathBuf>) {
        self.asset_root = resolve_asset_root_from_env(
            std::mem::take(&mut self.asset_root),
            env::var_os("LANDER_SHOWCASE_ASSETS"),
            cli_value,
        );
    }

    pub fn autoplay_delay(&self) -> Duration {
        Duration::from_millis(self.autoplay_delay_ms)
    }
}

pub(crate) fn resolve_asset_root_from_env(
    configured: PathBuf,
    env_value: Option<OsString>,
    cli_value: Option<PathBuf>,
) -> PathBuf {
    if let Some(path) = cli_value {
        return path;
    }
    match env_value {
        Some(value) if !value.is_empty() => PathBuf::from(value),
        _ => configured,
    }
}
