use std::time::{Duration, Instant};

use tracing::{debug, info, warn};

use super::super::episode::{AssetRef, effective_duration};
use super::{AutoplayTimer, MediaElement, MediaEvent, PlaybackPhase, PlaybackState, PlayerError};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct TickReport {
    pub(crate) autoplay_fired: bool,
    pub(crate) ended: bool,
}

/// State reducer for one media element. Source changes reset it and arm a
/// muted-first autoplay attempt after `autoplay_delay`.
#[derive(Debug)]
pub(crate) struct PlaybackWidget {
    state: PlaybackState,
    phase: PlaybackPhase,
    prefers_muted: bool,
    source: Option<AssetRef>,
    autoplay_delay: Duration,
    autoplay: AutoplayTimer<AssetRef>,
}

impl PlaybackWidget {
    pub(crate) fn new(autoplay_delay: Duration, start_muted: bool) -> Self {
        Self {
            state: PlaybackState::new(start_muted),
            phase: PlaybackPhase::Idle,
            prefers_muted: start_muted,
            source: None,
            autoplay_delay,
            autoplay: AutoplayTimer::default(),
        }
    }

    pub(crate) fn state(&self) -> &PlaybackState {
        &self.state
    }

    pub(crate) fn phase(&self) -> PlaybackPhase {
        self.phase
    }

    pub(crate) fn source(&self) -> Option<&AssetRef> {
        self.source.as_ref()
    }

    pub(crate) fn autoplay_deadline(&self) -> Option<Instant> {
        self.autoplay.deadline()
    }

    pub(crate) fn bind_source<M: MediaElement + ?Sized>(
        &mut self,
        media: &mut M,
        source: AssetRef,
        now: Instant,
    ) -> bool {
        if self.source.as_ref() == Some(&source) {
            return false;
        }

        self.state = PlaybackState::new(self.state.is_muted);
        self.phase = PlaybackPhase::Idle;
        media.load(&source);
        debug!(source = %source, "source bound");

        self.autoplay.schedule(source.clone(), now, self.autoplay_delay);
        self.phase = PlaybackPhase::AutoplayAttempting;
        self.source = Some(source);
        true
    }

    pub(crate) fn tick<M: MediaElement + ?Sized>(
        &mut self,
        media: &mut M,
        now: Instant,
    ) -> TickReport {
        let mut report = TickReport::default();
        if let Some(source) = self.source.as_ref()
            && self.autoplay.take_due(source, now)
        {
            self.run_autoplay(media);
            report.autoplay_fired = true;
        }

        for event in media.poll_events(now) {
            if matches!(event, MediaEvent::Ended) {
                report.ended = true;
            }
            self.handle_media_event(event);
        }
        report
    }

    fn run_autoplay<M: MediaElement + ?Sized>(&mut self, media: &mut M) {
        let keep_muted = self.prefers_muted;
        media.set_muted(true);
        self.state.is_muted = true;

        match media.play() {
            Ok(()) => {
                self.state.is_playing = true;
                self.state.error = None;
                self.phase = PlaybackPhase::Playing;
                if !keep_muted {
                    media.set_muted(false);
                    self.state.is_muted = media.is_muted();
                    if self.state.is_muted {
                        debug!("host kept autoplay muted");
                    }
                }
                info!(muted = self.state.is_muted, "autoplay started");
            }
            Err(err) => {
                warn!(error = %err, "autoplay failed");
                self.fail(PlayerError::AutoplayDenied(err));
            }
        }
    }

    pub(crate) fn toggle_play<M: MediaElement + ?Sized>(&mut self, media: &mut M) {
        if self.state.is_playing {
            media.pause();
            self.state.is_playing = false;
            self.state.error = None;
            self.phase = PlaybackPhase::Paused;
            return;
        }

        if self.autoplay.cancel() {
            debug!("pending autoplay superseded by play request");
        }
        match media.play() {
            Ok(()) => {
                self.state.is_playing = true;
                self.state.error = None;
                self.phase = PlaybackPhase::Playing;
            }
            Err(err) => {
                warn!(error = %err, "play request failed");
                self.fail(PlayerError::PlaybackRequestFailed(err));
            }
        }
    }

    pub(crate) fn toggle_mute<M: MediaElement + ?Sized>(&mut self, media: &mut M) {
        let muted = !self.state.is_muted;
        media.set_muted(muted);
        self.state.is_muted = media.is_muted();
        self.prefers_muted = muted;
    }

    /// Seeks to `percent` of the known duration. Unknown duration counts as one
    /// second, and the element keeps that position until it reports otherwise.
    pub(crate) fn seek_percent<M: MediaElement + ?Sized>(&mut self, media: &mut M, percent: f64) {
        let percent = if percent.is_finite() {
            percent.clamp(0.0, 100.0)
        } else {
            0.0
        };
        let position = percent / 100.0 * effective_duration(self.state.duration_seconds);
        media.seek(position);
        self.state.position_seconds = position;
    }

    pub(crate) fn seek_by<M: MediaElement + ?Sized>(&mut self, media: &mut M, delta: f64) {
        let upper = media.duration().max(0.0);
        let target = (media.current_position() + delta).clamp(0.0, upper);
        media.seek(target);
        self.state.position_seconds = target;
    }

    pub(crate) fn handle_media_event(&mut self, event: MediaEvent) {
        match event {
            MediaEvent::MetadataLoaded { duration } => self.state.duration_seconds = duration,
            MediaEvent::TimeUpdate { position } => self.state.position_seconds = position,
            MediaEvent::Ended => {
                self.state.is_playing = false;
                self.phase = PlaybackPhase::Paused;
            }
            MediaEvent::Error { detail } => {
                warn!(detail = %detail, "media error");
                self.autoplay.cancel();
                self.fail(PlayerError::MediaLoadError(detail));
            }
        }
    }

    fn fail(&mut self, error: PlayerError) {
        self.state.is_playing = false;
        self.state.error = Some(error);
        self.phase = PlaybackPhase::Errored;
    }
}
