//! Now Playing widget - compact text-only player for the bottom bar

use crate::app::state::{AppState, ToastKind};
use crate::tui::theme::get_theme;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render(frame: &mut Frame, state: &AppState, area: Rect) {
    let theme = get_theme();
    let icons = &theme.icons;

    let block = Block::default()
        .borders(Borders::ALL)
        .border_set(theme.border_set())
        .border_style(Style::default().fg(theme.palette.border))
        .title(format!(" {} Player ", icons.music))
        .title_style(Style::default().fg(theme.palette.accent));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    // Add horizontal padding
    let padded = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(inner)[1];

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Song title
            Constraint::Length(1), // Artist
            Constraint::Length(1), // Progress bar
            Constraint::Length(1), // Time + controls + volume
            Constraint::Min(0),    // Toast / status
        ])
        .split(padded);

    let content_width = padded.width.saturating_sub(1) as usize;
    let song = state.library.current_song();

    // Song title
    let title = song.map(|s| s.title.as_str()).unwrap_or("Not playing");
    let title_line = Line::from(Span::styled(
        truncate_str(title, content_width),
        Style::default()
            .fg(theme.palette.fg_primary)
            .add_modifier(Modifier::BOLD),
    ));
    frame.render_widget(Paragraph::new(title_line), rows[0]);

    // Artist
    let artist = song.map(|s| s.artist.as_str()).unwrap_or_default();
    let artist_line = Line::from(Span::styled(
        truncate_str(artist, content_width),
        Style::default().fg(theme.palette.fg_secondary),
    ));
    frame.render_widget(Paragraph::new(artist_line), rows[1]);

    // Progress bar
    let ratio = if song.is_some() && state.duration_secs > 0.0 {
        (state.position_secs / state.duration_secs).clamp(0.0, 1.0)
    } else {
        0.0
    };

    let bar_width = rows[2].width as usize;
    let progress_line = Line::from(Span::styled(
        render_progress_bar(bar_width, ratio, icons),
        Style::default().fg(theme.palette.accent),
    ));
    frame.render_widget(Paragraph::new(progress_line), rows[2]);

    // Time display + controls + volume (all on one line)
    let pos_min = (state.position_secs / 60.0).floor() as u32;
    let pos_sec = (state.position_secs % 60.0).floor() as u32;
    let dur_min = (state.duration_secs / 60.0).floor() as u32;
    let dur_sec = (state.duration_secs % 60.0).floor() as u32;

    let play_icon = if state.paused { icons.play } else { icons.pause };

    let vol_icon = if state.muted || state.volume == 0 {
        icons.volume_mute
    } else if state.volume < 50 {
        icons.volume_low
    } else {
        icons.volume_high
    };

    let vol_text = if state.muted {
        "muted".to_string()
    } else {
        format!("{}%", state.volume)
    };

    let controls = vec![
        Span::styled(
            format!("{:02}:{:02}/{:02}:{:02}", pos_min, pos_sec, dur_min, dur_sec),
            Style::default().fg(theme.palette.fg_secondary),
        ),
        Span::raw(" "),
        Span::styled(icons.prev, Style::default().fg(theme.palette.fg_secondary)),
        Span::raw(" "),
        Span::styled(play_icon, Style::default().fg(theme.palette.playing)),
        Span::raw(" "),
        Span::styled(icons.next, Style::default().fg(theme.palette.fg_secondary)),
        Span::raw("  "),
        Span::styled(vol_icon, Style::default().fg(theme.palette.fg_secondary)),
        Span::raw(" "),
        Span::styled(vol_text, Style::default().fg(theme.palette.fg_secondary)),
    ];
    frame.render_widget(Paragraph::new(Line::from(controls)), rows[3]);

    // Toast if present, status otherwise
    if let Some(toast) = &state.toast
        && !toast.is_expired()
    {
        let (prefix, color) = match toast.kind {
            ToastKind::Success => (icons.success, theme.palette.playing),
            ToastKind::Error => (icons.error, theme.palette.error),
        };
        let toast_line = Line::from(vec![
            Span::styled(format!("{} ", prefix), Style::default().fg(color)),
            Span::styled(
                truncate_str(&toast.message, content_width.saturating_sub(3)),
                Style::default().fg(color),
            ),
        ]);
        frame.render_widget(Paragraph::new(toast_line), rows[4]);
    } else if !state.status.is_empty() {
        let status_line = Line::from(Span::styled(
            truncate_str(&state.status, content_width),
            Style::default().fg(theme.palette.fg_secondary),
        ));
        frame.render_widget(Paragraph::new(status_line), rows[4]);
    }
}

/// Renders the progress bar line
fn render_progress_bar(width: usize, ratio: f64, icons: &crate::tui::theme::Icons) -> String {
    if width < 3 {
        return String::new();
    }

    let filled = ((width - 1) as f64 * ratio).round() as usize;
    let empty = width.saturating_sub(filled + 1);

    let mut bar = String::with_capacity(width * 3);
    for _ in 0..filled {
        bar.push_str(icons.progress_full);
    }
    bar.push_str(icons.progress_head);
    for _ in 0..empty {
        bar.push_str(icons.progress_empty);
    }
    bar
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
