//! Lyrics screen widget
//!
//! Viewing mode highlights the active line and keeps it gliding toward the
//! vertical center of the viewport. Editing mode shows the manual-entry
//! buffer in the `time|text` form.

use crate::app::state::{AppState, LyricsMode};
use crate::tui::theme::get_theme;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

pub fn render(frame: &mut Frame, state: &mut AppState, area: Rect) {
    // Add horizontal padding
    let mut body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(area)[1];

    // The .lrc path prompt takes the top rows while open.
    if state.prompt.is_some() {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(1)])
            .split(body);
        super::song_list::render_prompt_box(frame, state, rows[0]);
        body = rows[1];
    }

    match state.lyrics.mode {
        LyricsMode::Editing => render_editor(frame, state, body),
        LyricsMode::Empty => render_empty(frame, state, body),
        LyricsMode::Viewing => render_viewing(frame, state, body),
    }
}

fn render_empty(frame: &mut Frame, state: &AppState, area: Rect) {
    let theme = get_theme();

    let message = if state.library.current_song().is_none() {
        "Nothing playing. Pick a song in the Library first"
    } else {
        "No lyrics for this song. Press e to type them, o to load an .lrc file"
    };

    let content = Paragraph::new(Line::from(Span::styled(
        message,
        Style::default().fg(theme.palette.fg_secondary),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(content, vertically_centered(area, 1));
}

fn render_viewing(frame: &mut Frame, state: &mut AppState, area: Rect) {
    let theme = get_theme();

    let visible_height = area.height as usize;
    let total = state.current_lyrics().map_or(0, |l| l.len());

    if total == 0 {
        // An empty sequence is still "lyrics present": render the frame,
        // highlight nothing.
        let content = Paragraph::new(Line::from(Span::styled(
            "Lyrics are empty. Press e to edit",
            Style::default().fg(theme.palette.fg_secondary),
        )))
        .alignment(Alignment::Center);
        frame.render_widget(content, vertically_centered(area, 1));
        return;
    }

    // Glide the viewport toward centering the active line.
    state.lyrics.update_scroll(total, visible_height);
    let scroll = state.lyrics.scroll;
    let active = state.lyrics.active;

    let Some(lines) = state.current_lyrics() else {
        return;
    };

    let max_width = area.width.saturating_sub(4) as usize;
    let display: Vec<Line> = lines
        .iter()
        .enumerate()
        .skip(scroll)
        .take(visible_height)
        .map(|(i, l)| {
            let is_active = active == Some(i);
            let style = if is_active {
                Style::default()
                    .fg(theme.palette.accent)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme.palette.fg_secondary)
            };
            let prefix = if is_active { "♪ " } else { "  " };
            Line::from(vec![
                Span::styled(prefix, style),
                Span::styled(truncate_str(&l.text, max_width), style),
            ])
        })
        .collect();

    frame.render_widget(Paragraph::new(display), area);
}

fn render_editor(frame: &mut Frame, state: &AppState, area: Rect) {
    let theme = get_theme();

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(1)])
        .split(area);

    let hint = Line::from(vec![
        Span::styled(
            "time|text per line  ",
            Style::default().fg(theme.palette.fg_secondary),
        ),
        Span::styled("Ctrl+S", Style::default().fg(theme.palette.accent)),
        Span::styled(" save  ", Style::default().fg(theme.palette.fg_secondary)),
        Span::styled("Esc", Style::default().fg(theme.palette.accent)),
        Span::styled(" cancel", Style::default().fg(theme.palette.fg_secondary)),
    ]);
    frame.render_widget(Paragraph::new(hint), rows[0]);

    let mut lines: Vec<Line> = state
        .lyrics
        .buffer
        .split('\n')
        .map(|l| Line::from(l.to_string()))
        .collect();
    // Cursor sits at the end of the buffer.
    if let Some(last) = lines.last_mut() {
        last.push_span(Span::styled("▏", Style::default().fg(theme.palette.accent)));
    }

    // Keep the cursor line visible in a tall buffer.
    let visible = rows[1].height as usize;
    let skip = lines.len().saturating_sub(visible);

    let editor = Paragraph::new(lines.split_off(skip))
        .style(Style::default().fg(theme.palette.fg_primary));
    frame.render_widget(editor, rows[1]);
}

fn vertically_centered(area: Rect, content_height: u16) -> Rect {
    let pad = area.height.saturating_sub(content_height) / 2;
    Rect::new(
        area.x,
        area.y + pad,
        area.width,
        content_height.min(area.height),
    )
}

fn truncate_str(s: &str, max_len: usize) -> String {
    if max_len == 0 {
        return String::new();
    }
    let char_count: usize = s.chars().count();
    if char_count <= max_len {
        s.to_string()
    } else if max_len > 3 {
        let truncated: String = s.chars().take(max_len - 3).collect();
        format!("{}...", truncated)
    } else {
        s.chars().take(max_len).collect()
    }
}
