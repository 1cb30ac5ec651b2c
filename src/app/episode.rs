use std::fmt;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::content::{VIDEO_DIR, VIDEO_STEM};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub(crate) enum SelectError {
    #[error("episode {index} is out of range (0..{total})")]
    OutOfRange { index: usize, total: usize },
}

/// Relative path of one episode's video, e.g. `videos/rl-video-episode-3.mp4`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub(crate) struct AssetRef(String);

impl AssetRef {
    pub(crate) fn for_episode(index: usize, format: &str) -> Self {
        Self(format!("{VIDEO_DIR}/{VIDEO_STEM}-{index}.{format}"))
    }

    pub(crate) fn as_str(&self) -> &str {
        &self.0
    }

    pub(crate) fn resolve(&self, root: &Path) -> PathBuf {
        root.join(&self.0)
    }
}

impl fmt::Display for AssetRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone)]
pub(crate) struct EpisodeSelector {
    index: usize,
    total: usize,
    format: String,
}

impl EpisodeSelector {
    pub(crate) fn new(total: usize, format: &str) -> Self {
        Self {
            index: 0,
            total: total.max(1),
            format: format.trim().to_string(),
        }
    }

    pub(crate) fn index(&self) -> usize {
        self.index
    }

    pub(crate) fn total(&self) -> usize {
        self.total
    }

    pub(crate) fn has_next(&self) -> bool {
        self.index + 1 < self.total
    }

    pub(crate) fn has_previous(&self) -> bool {
        self.index > 0
    }

    /// Returns whether the index moved.
    pub(crate) fn next(&mut self) -> bool {
        if !self.has_next() {
            return false;
        }
        self.index += 1;
        true
    }

    pub(crate) fn previous(&mut self) -> bool {
        if !self.has_previous() {
            return false;
        }
        self.index -= 1;
        true
    }

    pub(crate) fn select_episode(&mut self, index: usize) -> Result<(), SelectError> {
        if index >= self.total {
            return Err(SelectError::OutOfRange {
                index,
                total: self.total,
            });
        }
        self.index = index;
        Ok(())
    }

    pub(crate) fn asset_for(&self, index: usize) -> AssetRef {
        AssetRef::for_episode(index, &self.format)
    }

    pub(crate) fn current_asset(&self) -> AssetRef {
        self.asset_for(self.index)
    }

    pub(crate) fn label(&self) -> String {
        format!("Episode {} of {}", self.index + 1, self.total)
    }
}

/// `M:SS`, fractional seconds dropped. Negative or non-finite input shows as `0:00`.
pub(crate) fn format_time(seconds: f64) -> String {
    let whole = if seconds.is_finite() && seconds > 0.0 {
        seconds.floor() as u64
    } else {
        0
    };
    format!("{}:{:02}", whole / 60, whole % 60)
}

pub(crate) fn effective_duration(duration: f64) -> f64 {
    if duration.is_finite() && duration > 0.0 {
        duration
    } else {
        1.0
    }
}

pub(crate) fn progress_ratio(position: f64, duration: f64) -> f64 {
    let ratio = position / effective_duration(duration);
    if ratio.is_finite() {
        ratio.clamp(0.0, 1.0)
    } else {
        0.0
    }
}

pub(crate) fn truncate(s: &str, max: usize) -> String {
    let mut out = s.to_string();
    if out.chars().count() > max {
        out = out.chars().take(max.saturating_sub(3)).collect::<String>() + "...";
    }
    out
}
