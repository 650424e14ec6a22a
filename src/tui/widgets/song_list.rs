//! Song list widget - renders the library with windowed scrolling

use crate::app::state::AppState;
use crate::config::Config;
use crate::tui::theme::get_theme;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

/// Render the path prompt box (add song / load lyrics)
pub fn render_prompt_box(frame: &mut Frame, state: &AppState, area: Rect) {
    let theme = get_theme();
    let Some(prompt) = &state.prompt else {
        return;
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_set(theme.border_set())
        .border_style(Style::default().fg(theme.palette.accent))
        .title(prompt.title())
        .title_style(Style::default().fg(theme.palette.accent));

    let text = format!("{}▏", prompt.input);
    let p = Paragraph::new(Line::from(text))
        .style(Style::default().fg(theme.palette.fg_primary))
        .block(block);
    frame.render_widget(p, area);
}

/// Render the song list (called within an existing block area)
pub fn render(frame: &mut Frame, _cfg: &Config, state: &AppState, mut area: Rect) {
    let theme = get_theme();
    let icons = &theme.icons;

    // The add-file prompt takes the top rows while open.
    if state.prompt.is_some() {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(1)])
            .split(area);
        render_prompt_box(frame, state, rows[0]);
        area = rows[1];
    }

    let songs = state.library.songs();

    if songs.is_empty() {
        let empty = Paragraph::new(Line::from(
            "Library is empty. Press a to add an audio file",
        ))
        .style(Style::default().fg(theme.palette.fg_secondary));
        frame.render_widget(empty, area);
        return;
    }

    let visible_height = area.height as usize;
    let scroll_offset = state.song_list.scroll_offset;
    let playing_index = state.library.current_index();

    let items: Vec<ListItem> = songs
        .iter()
        .enumerate()
        .skip(scroll_offset)
        .take(visible_height)
        .map(|(i, song)| {
            let is_selected = i == state.song_list.selected;
            let is_playing = playing_index == Some(i);

            let style = if is_selected {
                Style::default()
                    .fg(theme.palette.accent)
                    .add_modifier(Modifier::BOLD)
            } else if is_playing {
                Style::default().fg(theme.palette.playing)
            } else {
                Style::default().fg(theme.palette.fg_primary)
            };

            let marker = if is_playing { icons.play } else { icons.music };
            let display = format!("{} {} - {}", marker, song.title, song.artist);

            ListItem::new(Line::from(Span::styled(display, style)))
        })
        .collect();

    let adjusted_selected = state.song_list.selected.saturating_sub(scroll_offset);
    let mut list_state = ListState::default();
    list_state.select(Some(adjusted_selected));

    let list = List::new(items)
        .highlight_style(
            Style::default()
                .fg(theme.palette.bg_primary)
                .bg(theme.palette.accent)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("\u{f054} "); // nf-fa-chevron_right

    frame.render_stateful_widget(list, area, &mut list_state);

    // Scroll position indicator in the top-right corner
    if songs.len() > visible_height {
        let pos_text = format!("{}/{}", state.song_list.selected + 1, songs.len());
        let pos_len = pos_text.len() as u16;
        let pos_x = area.x + area.width.saturating_sub(pos_len);
        if pos_x > area.x {
            frame.render_widget(
                Paragraph::new(pos_text).style(Style::default().fg(theme.palette.fg_secondary)),
                Rect::new(pos_x, area.y, pos_len, 1),
            );
        }
    }
}
