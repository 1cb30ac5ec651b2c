use crossterm::event::KeyCode;

use crate::content::Section;

use super::super::showcase::{GRID_COLUMNS, SEEK_STEP_SECONDS, ShowcaseAction};

pub(crate) fn action_for_key(code: KeyCode) -> Option<ShowcaseAction> {
    let action = match code {
        KeyCode::Char('q') | KeyCode::Esc => ShowcaseAction::Quit,
        KeyCode::Left | KeyCode::Char('p') => ShowcaseAction::PreviousEpisode,
        KeyCode::Right | KeyCode::Char('n') => ShowcaseAction::NextEpisode,
        KeyCode::Char(' ') => ShowcaseAction::TogglePlay,
        KeyCode::Char('m') => ShowcaseAction::ToggleMute,
        KeyCode::Char('[') => ShowcaseAction::SeekBy(-SEEK_STEP_SECONDS),
        KeyCode::Char(']') => ShowcaseAction::SeekBy(SEEK_STEP_SECONDS),
        KeyCode::Char(digit @ '0'..='9') => {
            let tenths = digit.to_digit(10).unwrap_or(0);
            ShowcaseAction::SeekPercent(f64::from(tenths) * 10.0)
        }
        KeyCode::Up => ShowcaseAction::MoveCursor(-(GRID_COLUMNS as isize)),
        KeyCode::Down => ShowcaseAction::MoveCursor(GRID_COLUMNS as isize),
        KeyCode::Char(',') => ShowcaseAction::MoveCursor(-1),
        KeyCode::Char('.') => ShowcaseAction::MoveCursor(1),
        KeyCode::Enter => ShowcaseAction::SelectCursor,
        KeyCode::Home => ShowcaseAction::SelectEpisode(0),
        KeyCode::Tab => ShowcaseAction::CycleSection,
        KeyCode::F(n @ 1..=3) => ShowcaseAction::ShowSection(Section::ALL[usize::from(n) - 1]),
        _ => return None,
    };
    Some(action)
}
