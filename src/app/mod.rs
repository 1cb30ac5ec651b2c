mod episode;
mod player;
mod showcase;
mod tui;


use anyhow::{Context, Result, anyhow};
use serde::Serialize;
use tracing::info;

use crate::cli::{Cli, Command};
use crate::config::Config;
use crate::content::{
    ALGORITHM_DETAILS, PERFORMANCE, PerformanceStats, Section, TRAINING_CHART_PATH,
};
use crate::logging::{self, LogTarget};
use crate::paths::{config_file_path, log_file_path};

use self::episode::{EpisodeSelector, truncate};

pub fn run(cli: Cli) -> Result<()> {
    let section = match &cli.command {
        Some(Command::Tui { section }) => Some(parse_section(section)?),
        None => Some(Section::Videos),
        Some(Command::Episodes { .. } | Command::Stats { .. }) => None,
    };
    let log_target = match section {
        Some(_) => LogTarget::File(log_file_path()?),
        None => LogTarget::Stderr,
    };
    logging::init(log_target)?;

    let config = load_config(&cli)?;
    info!(asset_root = %config.asset_root.display(), "configuration loaded");

    match cli.command {
        Some(Command::Episodes { json }) => run_episodes(&config, json)?,
        Some(Command::Stats { json }) => run_stats(&config, json)?,
        Some(Command::Tui { .. }) | None => {
            tui::run_tui(&config, section.unwrap_or(Section::Videos))?
        }
    }

    Ok(())
}

fn parse_section(raw: &str) -> Result<Section> {
    Section::from_anchor(raw).ok_or_else(|| {
        anyhow!("unknown section '{raw}' (expected videos, about or performance)")
    })
}

fn load_config(cli: &Cli) -> Result<Config> {
    let default_path = config_file_path()?;
    let mut config = Config::load(cli.config.as_deref(), &default_path)?;
    config.apply_asset_override(cli.assets.clone());
    Ok(config)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub(crate) struct EpisodeRow {
    pub(crate) index: usize,
    pub(crate) asset: String,
    pub(crate) path: String,
    pub(crate) available: bool,
}

pub(crate) fn episode_rows(config: &Config) -> Vec<EpisodeRow> {
    let selector = EpisodeSelector::new(config.total_episodes, &config.video_format);
    (0..selector.total())
        .map(|index| {
            let asset = selector.asset_for(index);
            let path = asset.resolve(&config.asset_root);
            EpisodeRow {
                index,
                asset: asset.to_string(),
                available: path.is_file(),
                path: path.display().to_string(),
            }
        })
        .collect()
}

fn run_episodes(config: &Config, json: bool) -> Result<()> {
    let rows = episode_rows(config);
    if json {
        let out = serde_json::to_string_pretty(&rows).context("failed to encode episodes")?;
        println!("{out}");
        return Ok(());
    }

    println!("{:<8} {:<48} {:<10}", "EPISODE", "ASSET", "STATUS");
    for row in &rows {
        println!(
            "{:<8} {:<48} {:<10}",
            row.index + 1,
            truncate(&row.path, 48),
            if row.available { "ok" } else { "missing" }
        );
    }
    let missing = rows.iter().filter(|row| !row.available).count();
    if missing > 0 {
        println!(
            "\n{missing} of {} episode videos missing under {}",
            rows.len(),
            config.asset_root.display()
        );
    }
    Ok(())
}

#[derive(Debug, Serialize)]
pub(crate) struct StatsReport {
    pub(crate) stats: PerformanceStats,
    pub(crate) chart: String,
    pub(crate) chart_available: bool,
    pub(crate) algorithm: Vec<AlgorithmDetail>,
}

#[derive(Debug, Serialize)]
pub(crate) struct AlgorithmDetail {
    pub(crate) label: &'static str,
    pub(crate) value: &'static str,
}

pub(crate) fn stats_report(config: &Config) -> StatsReport {
    let chart = config.asset_root.join(TRAINING_CHART_PATH);
    StatsReport {
        stats: PERFORMANCE,
        chart_available: chart.is_file(),
        chart: chart.display().to_string(),
        algorithm: ALGORITHM_DETAILS
            .iter()
            .map(|&(label, value)| AlgorithmDetail { label, value })
            .collect(),
    }
}

fn run_stats(config: &Config, json: bool) -> Result<()> {
    let report = stats_report(config);
    if json {
        let out = serde_json::to_string_pretty(&report).context("failed to encode stats")?;
        println!("{out}");
        return Ok(());
    }

    println!("Key performance metrics:");
    for card in report.stats.cards() {
        println!("  {:<20} {:>8}  {}", card.label, card.value, card.note);
    }
    println!("\nAlgorithm details:");
    for detail in &report.algorithm {
        println!("  {:<22} {}", format!("{}:", detail.label), detail.value);
    }
    println!(
        "\nTraining chart: {} ({})",
        report.chart,
        if report.chart_available {
            "available"
        } else {
            "missing"
        }
    );
    Ok(())
}
