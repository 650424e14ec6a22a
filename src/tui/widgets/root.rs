//! Root layout widget - orchestrates main layout structure

use crate::app::state::{AppState, Screen};
use crate::config::Config;
use crate::tui::theme::get_theme;
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::Style,
    widgets::{Block, Borders},
    Frame,
};

use super::{help, lyrics, now_playing, sidebar, song_list};

/// Main layout structure:
/// ┌──────────┬─────────────────────────────────────────┐
/// │  Menu    │           Main Content                  │
/// │          │       (Library/Lyrics/Help)             │
/// │  Library │                                         │
/// │  Lyrics  │                                         │
/// │  Help    │                                         │
/// ├──────────┴─────────────────────────────────────────┤
/// │                     Player                         │
/// └────────────────────────────────────────────────────┘
pub fn render(frame: &mut Frame, cfg: &Config, state: &mut AppState) {
    let root = frame.area();

    // Main vertical layout: top area | player bar
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(8),    // Top area (sidebar + content)
            Constraint::Length(7), // Player bar
        ])
        .split(root);

    // Top area: sidebar | main content
    let top_cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(18), // Sidebar menu
            Constraint::Min(40),    // Main content area
        ])
        .split(rows[0]);

    sidebar::render(frame, state, top_cols[0]);
    render_main_content(frame, cfg, state, top_cols[1]);
    now_playing::render(frame, state, rows[1]);
}

/// Render the main content area based on current screen
fn render_main_content(
    frame: &mut Frame,
    cfg: &Config,
    state: &mut AppState,
    area: ratatui::layout::Rect,
) {
    let theme = get_theme();
    let icons = &theme.icons;

    let title = match state.screen {
        Screen::Library => format!(" {} Library ", icons.library),
        Screen::Lyrics => format!(" {} Lyrics ", icons.lyrics),
        Screen::Help => format!(" {} Keybinds ", icons.help),
    };

    let main = Block::default()
        .borders(Borders::ALL)
        .border_set(theme.border_set())
        .border_style(Style::default().fg(theme.palette.border))
        .title(title)
        .title_style(Style::default().fg(theme.palette.accent));
    let inner = main.inner(area);
    frame.render_widget(main, area);

    match state.screen {
        Screen::Library => song_list::render(frame, cfg, state, inner),
        Screen::Lyrics => lyrics::render(frame, state, inner),
        Screen::Help => help::render(frame, state, inner),
    }
}
