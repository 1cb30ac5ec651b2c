mod keys;
mod render;
mod session;

use std::io;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tracing::info;

use crate::config::Config;
use crate::content::Section;

use super::player::VirtualMedia;
use super::showcase::Showcase;

pub(crate) use self::keys::action_for_key;
use self::render::draw_tui;
use self::session::TuiSession;

const FRAME_INTERVAL: Duration = Duration::from_millis(100);

pub(crate) fn run_tui(config: &Config, section: Section) -> Result<()> {
    let mut session = TuiSession::enter()?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))
        .context("failed to initialize terminal backend")?;
    terminal.clear()?;

    let media = VirtualMedia::new(
        config.asset_root.clone(),
        config.autoplay_policy,
        config.episode_seconds,
    );
    let mut showcase = Showcase::new(config, media, Instant::now());
    showcase.show_section(section);
    info!(section = section.anchor(), "showcase started");

    loop {
        showcase.tick(Instant::now());
        terminal.draw(|frame| draw_tui(frame, &showcase))?;

        let timeout = poll_timeout(showcase.next_deadline(), Instant::now());
        if !event::poll(timeout)? {
            continue;
        }

        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }
        let Some(action) = action_for_key(key.code) else {
            continue;
        };
        if !showcase.dispatch(action, Instant::now()) {
            break;
        }
    }

    terminal.show_cursor()?;
    session.leave()?;
    info!("showcase closed");
    Ok(())
}

pub(crate) fn poll_timeout(deadline: Option<Instant>, now: Instant) -> Duration {
    match deadline {
        Some(due) => due.saturating_duration_since(now).min(FRAME_INTERVAL),
        None => FRAME_INTERVAL,
    }
}
