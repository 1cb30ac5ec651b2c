use std::path::PathBuf;
use std::time::Instant;

use tracing::info;

use crate::config::Config;
use crate::content::{Section, TRAINING_CHART_PATH};

use super::episode::EpisodeSelector;
use super::player::{MediaElement, PlaybackWidget};

pub(crate) const GRID_COLUMNS: usize = 5;
pub(crate) const SEEK_STEP_SECONDS: f64 = 5.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum ShowcaseAction {
    NextEpisode,
    PreviousEpisode,
    SelectEpisode(usize),
    TogglePlay,
    ToggleMute,
    SeekPercent(f64),
    SeekBy(f64),
    ShowSection(Section),
    CycleSection,
    MoveCursor(isize),
    SelectCursor,
    Quit,
}

/// The single owned UI state. Input becomes actions dispatched here; the
/// player only ever sees the source derived from the selector.
pub(crate) struct Showcase<M: MediaElement> {
    selector: EpisodeSelector,
    widget: PlaybackWidget,
    media: M,
    asset_root: PathBuf,
    section: Section,
    cursor: usize,
    auto_advance: bool,
    status: String,
}

impl<M: MediaElement> Showcase<M> {
    pub(crate) fn new(config: &Config, media: M, now: Instant) -> Self {
        let mut showcase = Self {
            selector: EpisodeSelector::new(config.total_episodes, &config.video_format),
            widget: PlaybackWidget::new(config.autoplay_delay(), config.start_muted),
            media,
            asset_root: config.asset_root.clone(),
            section: Section::Videos,
            cursor: 0,
            auto_advance: config.auto_advance,
            status: status_info("Ready."),
        };
        showcase.sync_source(now);
        showcase
    }

    pub(crate) fn selector(&self) -> &EpisodeSelector {
        &self.selector
    }

    pub(crate) fn widget(&self) -> &PlaybackWidget {
        &self.widget
    }

    #[cfg(test)]
    pub(crate) fn media(&self) -> &M {
        &self.media
    }

    pub(crate) fn section(&self) -> Section {
        self.section
    }

    pub(crate) fn cursor(&self) -> usize {
        self.cursor
    }

    pub(crate) fn status(&self) -> &str {
        &self.status
    }

    pub(crate) fn chart_path(&self) -> PathBuf {
        self.asset_root.join(TRAINING_CHART_PATH)
    }

    pub(crate) fn show_section(&mut self, section: Section) {
        self.section = section;
    }

    pub(crate) fn next_deadline(&self) -> Option<Instant> {
        self.widget.autoplay_deadline()
    }

    pub(crate) fn tick(&mut self, now: Instant) {
        let report = self.widget.tick(&mut self.media, now);
        if report.ended && self.auto_advance && self.selector.next() {
            info!(episode = self.selector.index(), "auto-advancing");
            self.sync_source(now);
        }
    }

    /// Applies one action. Returns false once the user asked to quit.
    pub(crate) fn dispatch(&mut self, action: ShowcaseAction, now: Instant) -> bool {
        self.media.user_gesture();

        match action {
            ShowcaseAction::Quit => return false,
            ShowcaseAction::NextEpisode => {
                if self.selector.next() {
                    self.sync_source(now);
                } else {
                    self.status = status_info("No next episode available.");
                }
            }
            ShowcaseAction::PreviousEpisode => {
                if self.selector.previous() {
                    self.sync_source(now);
                } else {
                    self.status = status_info("No previous episode available.");
                }
            }
            ShowcaseAction::SelectEpisode(index) => self.select(index, now),
            ShowcaseAction::TogglePlay => self.widget.toggle_play(&mut self.media),
            ShowcaseAction::ToggleMute => self.widget.toggle_mute(&mut self.media),
            ShowcaseAction::SeekPercent(percent) => {
                self.widget.seek_percent(&mut self.media, percent)
            }
            ShowcaseAction::SeekBy(delta) => self.widget.seek_by(&mut self.media, delta),
            ShowcaseAction::ShowSection(section) => self.show_section(section),
            ShowcaseAction::CycleSection => self.section = self.section.cycle(),
            ShowcaseAction::MoveCursor(delta) => {
                let last = self.selector.total() - 1;
                self.cursor = self.cursor.saturating_add_signed(delta).min(last);
            }
            ShowcaseAction::SelectCursor => self.select(self.cursor, now),
        }
        true
    }

    fn select(&mut self, index: usize, now: Instant) {
        match self.selector.select_episode(index) {
            Ok(()) => self.sync_source(now),
            Err(err) => self.status = status_error(&format!("Select failed: {err}")),
        }
    }

    fn sync_source(&mut self, now: Instant) {
        let asset = self.selector.current_asset();
        self.cursor = self.selector.index();
        if self.widget.bind_source(&mut self.media, asset, now) {
            info!(episode = self.selector.index(), "episode selected");
            self.status = status_info(&self.selector.label());
        }
    }
}

pub(crate) fn status_info(msg: &str) -> String {
    format!("INFO: {msg}")
}

pub(crate) fn status_error(msg: &str) -> String {
    format!("ERROR: {msg}")
}
