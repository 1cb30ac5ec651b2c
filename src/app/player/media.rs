use std::mem;
use std::path::PathBuf;
use std::time::Instant;

use thiserror::Error;
use tracing::{debug, warn};

use super::super::episode::AssetRef;
use crate::config::AutoplayPolicy;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub(crate) enum MediaError {
    #[error("play request was not allowed by the host")]
    NotAllowed,
    #[error("media not supported: {0}")]
    NotSupported(String),
    #[error("no media source is loaded")]
    NoSource,
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum MediaEvent {
    MetadataLoaded { duration: f64 },
    TimeUpdate { position: f64 },
    Ended,
    Error { detail: String },
}

/// Playback capability the player drives. Play requests resolve before the
/// call returns.
pub(crate) trait MediaElement {
    fn load(&mut self, source: &AssetRef);
    fn play(&mut self) -> Result<(), MediaError>;
    fn pause(&mut self);
    fn seek(&mut self, position: f64);
    fn current_position(&self) -> f64;
    fn duration(&self) -> f64;
    /// Hosts may refuse to unmute, so callers read the result back with `is_muted`.
    fn set_muted(&mut self, muted: bool);
    fn is_muted(&self) -> bool;
    fn poll_events(&mut self, now: Instant) -> Vec<MediaEvent>;

    /// Records direct user input, which some hosts require before playing.
    fn user_gesture(&mut self) {}
}

/// Clock-driven media element. The asset only has to exist under the asset
/// root; its duration is the configured nominal length.
#[derive(Debug)]
pub(crate) struct VirtualMedia {
    root: PathBuf,
    policy: AutoplayPolicy,
    nominal_duration: f64,
    source: Option<PathBuf>,
    load_failure: Option<String>,
    duration: f64,
    position: f64,
    playing: bool,
    muted: bool,
    activated: bool,
    last_tick: Option<Instant>,
    queue: Vec<MediaEvent>,
}

impl VirtualMedia {
    pub(crate) fn new(root: PathBuf, policy: AutoplayPolicy, nominal_duration: f64) -> Self {
        Self {
            root,
            policy,
            nominal_duration,
            source: None,
            load_failure: None,
            duration: 0.0,
            position: 0.0,
            playing: false,
            muted: false,
            activated: false,
            last_tick: None,
            queue: Vec::new(),
        }
    }

    #[cfg(test)]
    pub(crate) fn is_playing(&self) -> bool {
        self.playing
    }

    fn host_allows_sound(&self) -> bool {
        self.activated || self.policy != AutoplayPolicy::MutedOnly
    }

    fn host_allows_play(&self) -> bool {
        if self.activated {
            return true;
        }
        match self.policy {
            AutoplayPolicy::Allowed => true,
            AutoplayPolicy::MutedOnly => self.muted,
            AutoplayPolicy::Blocked => false,
        }
    }
}

impl MediaElement for VirtualMedia {
    fn load(&mut self, source: &AssetRef) {
        let path = source.resolve(&self.root);
        self.playing = false;
        self.position = 0.0;
        self.duration = 0.0;
        self.last_tick = None;
        self.queue.clear();

        if path.is_file() {
            debug!(path = %path.display(), "media loaded");
            self.load_failure = None;
            self.duration = self.nominal_duration;
            self.queue.push(MediaEvent::MetadataLoaded {
                duration: self.duration,
            });
        } else {
            warn!(path = %path.display(), "media asset missing");
            let detail = format!("{} not found", path.display());
            self.load_failure = Some(detail.clone());
            self.queue.push(MediaEvent::Error { detail });
        }
        self.source = Some(path);
    }

    fn play(&mut self) -> Result<(), MediaError> {
        if self.source.is_none() {
            return Err(MediaError::NoSource);
        }
        if let Some(detail) = &self.load_failure {
            return Err(MediaError::NotSupported(detail.clone()));
        }
        if !self.host_allows_play() {
            return Err(MediaError::NotAllowed);
        }
        if self.position >= self.duration {
            self.position = 0.0;
        }
        self.playing = true;
        self.last_tick = None;
        Ok(())
    }

    fn pause(&mut self) {
        self.playing = false;
        self.last_tick = None;
    }

    fn seek(&mut self, position: f64) {
        if self.duration <= 0.0 {
            return;
        }
        let upper = self.duration;
        self.position = if position.is_finite() {
            position.clamp(0.0, upper)
        } else {
            0.0
        };
        self.queue.push(MediaEvent::TimeUpdate {
            position: self.position,
        });
    }

    fn current_position(&self) -> f64 {
        self.position
    }

    fn duration(&self) -> f64 {
        self.duration
    }

    fn set_muted(&mut self, muted: bool) {
        if !muted && !self.host_allows_sound() {
            debug!("unmute refused before user activation");
            return;
        }
        self.muted = muted;
    }

    fn is_muted(&self) -> bool {
        self.muted
    }

    fn poll_events(&mut self, now: Instant) -> Vec<MediaEvent> {
        if self.playing {
            if let Some(last) = self.last_tick {
                let elapsed = now.saturating_duration_since(last).as_secs_f64();
                self.position = (self.position + elapsed).min(self.duration);
                self.queue.push(MediaEvent::TimeUpdate {
                    position: self.position,
                });
                if self.position >= self.duration {
                    self.playing = false;
                    self.queue.push(MediaEvent::Ended);
                }
            }
            self.last_tick = self.playing.then_some(now);
        }
        mem::take(&mut self.queue)
    }

    fn user_gesture(&mut self) {
        self.activated = true;
    }
}
