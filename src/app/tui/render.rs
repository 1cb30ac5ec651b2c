use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{
    Block, BorderType, Borders, Cell, Gauge, Paragraph, Row, Table, Tabs, Wrap,
};

use crate::content::{
    ABOUT_HEADING, ABOUT_HIGHLIGHTS, ABOUT_PARAGRAPHS, ALGORITHM_DETAILS, FOOTER_NOTE,
    GALLERY_TITLE, HERO, HOW_IT_WORKS_INTRO, HOW_IT_WORKS_OUTRO, HOW_IT_WORKS_STEPS,
    PERFORMANCE, SITE_TITLE, Section, TRAINING_CHART_CAPTION, TRAINING_SUMMARY, episode_blurb,
};

use super::super::episode::{format_time, progress_ratio, truncate};
use super::super::player::{MediaElement, PlaybackPhase};
use super::super::showcase::{GRID_COLUMNS, Showcase};

const ACCENT: Color = Color::Rgb(110, 170, 255);
const MUTED_TEXT: Color = Color::Rgb(185, 195, 210);
const BODY_TEXT: Color = Color::Rgb(230, 230, 230);

pub(super) fn draw_tui<M: MediaElement>(frame: &mut Frame, showcase: &Showcase<M>) {
    let bg = Block::default().style(Style::default().bg(Color::Black));
    frame.render_widget(bg, frame.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(10),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(1),
        ])
        .split(frame.area());

    draw_header(frame, chunks[0], showcase.section());
    match showcase.section() {
        Section::Videos => draw_videos(frame, chunks[1], showcase),
        Section::About => draw_about(frame, chunks[1]),
        Section::Performance => draw_performance(frame, chunks[1], showcase),
    }

    let command_bar = Paragraph::new(controls_line(showcase))
        .alignment(Alignment::Center)
        .block(panel_block("Controls"));
    frame.render_widget(command_bar, chunks[2]);

    let status_widget = Paragraph::new(showcase.status().to_string())
        .style(status_style(showcase.status()))
        .block(panel_block("Status"));
    frame.render_widget(status_widget, chunks[3]);

    let anchors = Section::ALL
        .iter()
        .map(|section| format!("#{}", section.anchor()))
        .collect::<Vec<_>>()
        .join("  ");
    let footer = Paragraph::new(format!("{FOOTER_NOTE}   {anchors}"))
        .style(Style::default().fg(MUTED_TEXT))
        .alignment(Alignment::Center);
    frame.render_widget(footer, chunks[4]);
}

fn draw_header(frame: &mut Frame, area: Rect, current: Section) {
    let parts = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(24), Constraint::Min(20)])
        .split(area);

    let title = Paragraph::new(Line::from(Span::styled(
        SITE_TITLE.to_uppercase(),
        Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center)
    .block(panel_block("Showcase"));
    frame.render_widget(title, parts[0]);

    let tabs = Tabs::new(
        Section::ALL
            .iter()
            .map(|section| Line::from(section.title()))
            .collect::<Vec<_>>(),
    )
    .select(current.index())
    .style(Style::default().fg(MUTED_TEXT))
    .highlight_style(pill_active())
    .block(panel_block("Sections"));
    frame.render_widget(tabs, parts[1]);
}

fn draw_videos<M: MediaElement>(frame: &mut Frame, area: Rect, showcase: &Showcase<M>) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(5), Constraint::Min(8)])
        .split(area);

    let hero = Paragraph::new(vec![
        Line::from(Span::styled(
            HERO.headline,
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(HERO.tagline, Style::default().fg(MUTED_TEXT))),
        Line::from(Span::styled(
            format!("{} ▾ #{}", HERO.call_to_action, HERO.target.anchor()),
            Style::default().fg(ACCENT),
        )),
    ])
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true })
    .block(Block::default().borders(Borders::NONE));
    frame.render_widget(hero, rows[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(rows[1]);
    draw_player(frame, body[0], showcase);

    let grid_rows = u16::try_from(showcase.selector().total().div_ceil(GRID_COLUMNS))
        .unwrap_or(u16::MAX);
    let side = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(grid_rows.saturating_add(2)), Constraint::Min(4)])
        .split(body[1]);
    draw_episode_grid(frame, side[0], showcase);

    let blurb = Paragraph::new(episode_blurb(showcase.selector().index()))
        .style(Style::default().fg(BODY_TEXT))
        .wrap(Wrap { trim: true })
        .block(panel_block("About This Episode"));
    frame.render_widget(blurb, side[1]);
}

fn draw_player<M: MediaElement>(frame: &mut Frame, area: Rect, showcase: &Showcase<M>) {
    let parts = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(5), Constraint::Length(3)])
        .split(area);

    let widget = showcase.widget();
    let state = widget.state();
    let source = widget
        .source()
        .map(|asset| asset.to_string())
        .unwrap_or_else(|| "-".to_string());

    let mut lines = vec![
        Line::from(Span::styled(
            showcase.selector().label(),
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            truncate(&source, usize::from(parts[0].width.saturating_sub(4))),
            Style::default().fg(MUTED_TEXT),
        )),
        Line::default(),
    ];
    match state.error_message() {
        Some(message) => lines.push(Line::from(Span::styled(
            message,
            Style::default()
                .fg(Color::Rgb(255, 145, 120))
                .add_modifier(Modifier::BOLD),
        ))),
        None => lines.push(Line::from(Span::styled(
            screen_caption(widget.phase()),
            Style::default().fg(BODY_TEXT),
        ))),
    }
    lines.push(Line::from(Span::styled(
        if state.is_muted { "Sound: muted" } else { "Sound: on" },
        Style::default().fg(MUTED_TEXT),
    )));

    let screen = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(panel_block(GALLERY_TITLE));
    frame.render_widget(screen, parts[0]);

    let progress = Gauge::default()
        .block(panel_block("Progress"))
        .gauge_style(
            Style::default()
                .fg(Color::Rgb(130, 190, 255))
                .bg(Color::Black)
                .add_modifier(Modifier::BOLD),
        )
        .label(format!(
            "{} / {}",
            format_time(state.position_seconds),
            format_time(state.duration_seconds)
        ))
        .ratio(progress_ratio(state.position_seconds, state.duration_seconds));
    frame.render_widget(progress, parts[1]);
}

fn screen_caption(phase: PlaybackPhase) -> &'static str {
    match phase {
        PlaybackPhase::Idle => "No episode loaded.",
        PlaybackPhase::AutoplayAttempting => "Starting playback...",
        PlaybackPhase::Playing => "Playing",
        PlaybackPhase::Paused => "Paused",
        PlaybackPhase::Errored => "Playback stopped.",
    }
}

fn draw_episode_grid<M: MediaElement>(frame: &mut Frame, area: Rect, showcase: &Showcase<M>) {
    let total = showcase.selector().total();
    let current = showcase.selector().index();
    let cursor = showcase.cursor();

    let rows: Vec<Row> = (0..total)
        .collect::<Vec<_>>()
        .chunks(GRID_COLUMNS)
        .map(|chunk| {
            Row::new(chunk.iter().map(|&index| {
                let marker = if index == cursor { "▸" } else { " " };
                let style = if index == current {
                    pill_active()
                } else {
                    Style::default().fg(BODY_TEXT)
                };
                Cell::from(format!("{marker}Ep {:>2}", index + 1)).style(style)
            }))
        })
        .collect();

    let grid = Table::new(rows, [Constraint::Length(7); GRID_COLUMNS])
        .column_spacing(1)
        .block(panel_block("All Episodes"));
    frame.render_widget(grid, area);
}

fn draw_about(frame: &mut Frame, area: Rect) {
    let heading = Style::default().fg(ACCENT).add_modifier(Modifier::BOLD);
    let strong = Style::default().fg(Color::White).add_modifier(Modifier::BOLD);
    let body = Style::default().fg(BODY_TEXT);

    let mut lines = vec![Line::from(Span::styled(ABOUT_HEADING, heading))];
    for paragraph in ABOUT_PARAGRAPHS {
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(paragraph, body)));
    }
    for highlight in &ABOUT_HIGHLIGHTS {
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(highlight.title, strong)));
        lines.push(Line::from(Span::styled(
            highlight.body,
            Style::default().fg(MUTED_TEXT),
        )));
    }
    lines.push(Line::default());
    lines.push(Line::from(Span::styled("How It Works", heading)));
    lines.push(Line::from(Span::styled(HOW_IT_WORKS_INTRO, body)));
    for step in HOW_IT_WORKS_STEPS {
        lines.push(Line::from(Span::styled(format!("  • {step}"), body)));
    }
    lines.push(Line::from(Span::styled(HOW_IT_WORKS_OUTRO, body)));

    let about = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(panel_block("About This Project"));
    frame.render_widget(about, area);
}

fn draw_performance<M: MediaElement>(frame: &mut Frame, area: Rect, showcase: &Showcase<M>) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let chart_path = showcase.chart_path();
    let chart_state = if chart_path.is_file() {
        Span::styled("available", Style::default().fg(Color::Green))
    } else {
        Span::styled("missing", Style::default().fg(Color::Rgb(255, 145, 120)))
    };
    let progress = Paragraph::new(vec![
        Line::from(vec![
            Span::styled("Chart: ", Style::default().fg(ACCENT)),
            Span::styled(
                chart_path.display().to_string(),
                Style::default().fg(MUTED_TEXT),
            ),
            Span::raw(" "),
            chart_state,
        ]),
        Line::from(Span::styled(
            TRAINING_CHART_CAPTION,
            Style::default().fg(MUTED_TEXT),
        )),
        Line::default(),
        Line::from(Span::styled(TRAINING_SUMMARY, Style::default().fg(BODY_TEXT))),
    ])
    .wrap(Wrap { trim: true })
    .block(panel_block("Training Progress"));
    frame.render_widget(progress, columns[0]);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(7), Constraint::Min(8)])
        .split(columns[1]);

    let metric_rows: Vec<Row> = PERFORMANCE
        .cards()
        .into_iter()
        .map(|card| {
            Row::new(vec![
                Cell::from(card.label).style(Style::default().fg(ACCENT)),
                Cell::from(card.value).style(
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
                Cell::from(card.note).style(Style::default().fg(MUTED_TEXT)),
            ])
        })
        .collect();
    let metrics = Table::new(
        metric_rows,
        [
            Constraint::Length(20),
            Constraint::Length(8),
            Constraint::Min(10),
        ],
    )
    .block(panel_block("Key Performance Metrics"));
    frame.render_widget(metrics, right[0]);

    let details: Vec<Line> = ALGORITHM_DETAILS
        .iter()
        .map(|(label, value)| {
            Line::from(vec![
                Span::styled(format!("{label}: "), Style::default().fg(ACCENT)),
                Span::styled(*value, Style::default().fg(BODY_TEXT)),
            ])
        })
        .collect();
    let algorithm = Paragraph::new(details)
        .wrap(Wrap { trim: true })
        .block(panel_block("Algorithm Details"));
    frame.render_widget(algorithm, right[1]);
}

fn controls_line<M: MediaElement>(showcase: &Showcase<M>) -> Line<'static> {
    let selector = showcase.selector();
    let state = showcase.widget().state();
    let play_label = if state.is_playing { " PAUSE " } else { " PLAY " };
    let mute_label = if state.is_muted { " UNMUTE " } else { " MUTE " };

    Line::from(vec![
        Span::styled(" ◀ PREV ", nav_pill_style(selector.has_previous())),
        Span::styled(" ", Style::default()),
        Span::styled(play_label, pill_active()),
        Span::styled(" ", Style::default()),
        Span::styled(" NEXT ▶ ", nav_pill_style(selector.has_next())),
        Span::styled(" ", Style::default()),
        Span::styled(mute_label, pill_inactive()),
        Span::styled(
            "   ←/→ episode  space play  m mute  [/] seek  0-9 jump  ↑/↓ ,/. grid  Enter pick  Tab section  q quit",
            Style::default().fg(MUTED_TEXT),
        ),
    ])
}

fn panel_block(title: &'static str) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Rgb(125, 135, 150)))
        .title(title)
}

fn pill_active() -> Style {
    Style::default()
        .bg(ACCENT)
        .fg(Color::Black)
        .add_modifier(Modifier::BOLD)
}

fn pill_inactive() -> Style {
    Style::default()
        .bg(Color::Rgb(72, 82, 96))
        .fg(Color::Rgb(230, 235, 242))
}

fn pill_disabled() -> Style {
    Style::default()
        .bg(Color::Rgb(40, 44, 52))
        .fg(Color::Rgb(95, 100, 110))
        .add_modifier(Modifier::DIM)
}

fn nav_pill_style(enabled: bool) -> Style {
    if enabled {
        pill_inactive()
    } else {
        pill_disabled()
    }
}

fn status_style(status: &str) -> Style {
    if status.starts_with("ERROR:") {
        Style::default()
            .fg(Color::Rgb(255, 145, 120))
            .add_modifier(Modifier::BOLD)
    } else if status.starts_with("INFO:") {
        Style::default().fg(Color::Rgb(205, 165, 255))
    } else {
        Style::default().fg(Color::Rgb(230, 235, 242))
    }
}
