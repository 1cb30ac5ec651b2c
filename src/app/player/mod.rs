mod autoplay;
mod media;
mod widget;

use thiserror::Error;

pub(crate) use autoplay::AutoplayTimer;
pub(crate) use media::{MediaElement, MediaError, MediaEvent, VirtualMedia};
pub(crate) use widget::PlaybackWidget;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum PlaybackPhase {
    Idle,
    AutoplayAttempting,
    Playing,
    Paused,
    Errored,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub(crate) enum PlayerError {
    #[error("autoplay denied: {0}")]
    AutoplayDenied(MediaError),
    #[error("playback request failed: {0}")]
    PlaybackRequestFailed(MediaError),
    #[error("media failed to load: {0}")]
    MediaLoadError(String),
}

impl PlayerError {
    pub(crate) fn message(&self) -> &'static str {
        match self {
            Self::AutoplayDenied(_) => "Unable to autoplay video. Press Space to start.",
            Self::PlaybackRequestFailed(_) => "Unable to play video. Please check the video source.",
            Self::MediaLoadError(_) => "Error loading video. Please check the video source.",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct PlaybackState {
    pub(crate) is_playing: bool,
    pub(crate) position_seconds: f64,
    pub(crate) duration_seconds: f64,
    pub(crate) is_muted: bool,
    pub(crate) error: Option<PlayerError>,
}

impl PlaybackState {
    pub(crate) fn new(is_muted: bool) -> Self {
        Self {
            is_playing: false,
            position_seconds: 0.0,
            duration_seconds: 0.0,
            is_muted,
            error: None,
        }
    }

    pub(crate) fn error_message(&self) -> Option<&'static str> {
        self.error.as_ref().map(PlayerError::message)
    }
}
