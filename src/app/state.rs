use crate::library::Library;
use crate::lyrics::{parser, LyricLine};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Library,
    Lyrics,
    Help,
}

impl Screen {
    pub fn next(self) -> Self {
        match self {
            Screen::Library => Screen::Lyrics,
            Screen::Lyrics => Screen::Help,
            Screen::Help => Screen::Library,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Screen::Library => Screen::Help,
            Screen::Lyrics => Screen::Library,
            Screen::Help => Screen::Lyrics,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    pub kind: ToastKind,
    pub created_at: std::time::Instant,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

impl Toast {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: ToastKind::Success,
            created_at: std::time::Instant::now(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: ToastKind::Error,
            created_at: std::time::Instant::now(),
        }
    }

    pub fn is_expired(&self) -> bool {
        self.created_at.elapsed() > std::time::Duration::from_secs(3)
    }
}

/// Selection and scroll window for the library list
#[derive(Debug, Clone, Default)]
pub struct SongListState {
    pub selected: usize,
    pub scroll_offset: usize,
}

impl SongListState {
    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn select_next(&mut self, len: usize) {
        if len != 0 {
            self.selected = (self.selected + 1).min(len - 1);
        }
    }

    pub fn update_scroll(&mut self, visible_height: usize) {
        if visible_height == 0 {
            return;
        }
        if self.selected < self.scroll_offset {
            self.scroll_offset = self.selected;
        } else if self.selected >= self.scroll_offset + visible_height {
            self.scroll_offset = self.selected - visible_height + 1;
        }
    }
}

/// What the path prompt is collecting a path for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptKind {
    AddSong,
    LoadLyrics,
}

#[derive(Debug, Clone)]
pub struct Prompt {
    pub kind: PromptKind,
    pub input: String,
}

impl Prompt {
    pub fn new(kind: PromptKind) -> Self {
        Self {
            kind,
            input: String::new(),
        }
    }

    pub fn title(&self) -> &'static str {
        match self.kind {
            PromptKind::AddSong => " Add audio file ",
            PromptKind::LoadLyrics => " Load .lrc file ",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LyricsMode {
    /// No lyrics on the current song, not editing
    Empty,
    /// Lyrics present, read-only, active line highlighted
    Viewing,
    /// Manual-entry buffer open
    Editing,
}

/// View state for the lyrics pane.
///
/// The mode machine follows the song's lyrics except while editing; the
/// active index is derived from playback position and never trusted across
/// input changes.
#[derive(Debug, Clone)]
pub struct LyricsPane {
    pub mode: LyricsMode,
    pub buffer: String,
    pub active: Option<usize>,
    pub scroll: usize,
    return_mode: LyricsMode,
}

/// How many rows the viewport may move per update while gliding toward the
/// centered target.
const SCROLL_STEP: usize = 3;

impl LyricsPane {
    pub fn new() -> Self {
        Self {
            mode: LyricsMode::Empty,
            buffer: String::new(),
            active: None,
            scroll: 0,
            return_mode: LyricsMode::Empty,
        }
    }

    /// Align the mode with the current song's lyrics. No-op while editing.
    pub fn sync_mode(&mut self, has_lyrics: bool) {
        if self.mode != LyricsMode::Editing {
            self.mode = if has_lyrics {
                LyricsMode::Viewing
            } else {
                LyricsMode::Empty
            };
        }
    }

    /// Reset derived view state when the song changes
    pub fn reset_view(&mut self) {
        self.active = None;
        self.scroll = 0;
    }

    /// Enter the editor, pre-populating the buffer from existing lyrics
    pub fn start_edit(&mut self, lyrics: Option<&[LyricLine]>) {
        self.return_mode = self.mode;
        self.buffer = lyrics.map(parser::to_manual).unwrap_or_default();
        self.mode = LyricsMode::Editing;
    }

    /// Leave the editor without touching the song
    pub fn cancel_edit(&mut self) {
        if self.mode == LyricsMode::Editing {
            self.buffer.clear();
            self.mode = self.return_mode;
        }
    }

    /// Leave the editor after the parsed buffer replaced the song's lyrics
    pub fn finish_edit(&mut self, saved_empty: bool) {
        self.buffer.clear();
        self.mode = if saved_empty {
            LyricsMode::Empty
        } else {
            LyricsMode::Viewing
        };
    }

    /// Record the newly resolved active line, reporting whether it moved
    pub fn set_active(&mut self, active: Option<usize>) -> bool {
        let changed = self.active != active;
        self.active = active;
        changed
    }

    /// Step the viewport toward centering the active line. Nothing moves
    /// when no line is active.
    pub fn update_scroll(&mut self, total_lines: usize, visible_height: usize) {
        let Some(active) = self.active else {
            return;
        };
        if visible_height == 0 || total_lines == 0 {
            return;
        }
        let max_scroll = total_lines.saturating_sub(visible_height);
        let target = active.saturating_sub(visible_height / 2).min(max_scroll);
        if self.scroll < target {
            self.scroll = (self.scroll + SCROLL_STEP).min(target);
        } else if self.scroll > target {
            self.scroll = self.scroll.saturating_sub(SCROLL_STEP).max(target);
        }
    }
}

impl Default for LyricsPane {
    fn default() -> Self {
        Self::new()
    }
}

pub struct AppState {
    pub should_quit: bool,

    pub screen: Screen,
    pub sidebar_selected: usize,

    // Song collection + playback cursor
    pub library: Library,
    pub song_list: SongListState,
    pub prompt: Option<Prompt>,

    // Playback
    pub paused: bool,
    pub position_secs: f64,
    pub duration_secs: f64,
    pub volume: u8,
    pub muted: bool,

    pub lyrics: LyricsPane,

    pub toast: Option<Toast>,
    pub status: String,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self {
            should_quit: false,
            screen: Screen::Library,
            sidebar_selected: 0,
            library: Library::new(),
            song_list: SongListState::default(),
            prompt: None,
            paused: false,
            position_secs: 0.0,
            duration_secs: 0.0,
            volume: 80,
            muted: false,
            lyrics: LyricsPane::new(),
            toast: None,
            status: String::new(),
        }
    }

    /// Lyrics of the currently selected song, if any
    pub fn current_lyrics(&self) -> Option<&[LyricLine]> {
        self.library
            .current_song()
            .and_then(|s| s.lyrics.as_deref())
    }
}

pub fn screen_to_sidebar(screen: Screen) -> usize {
    match screen {
        Screen::Library => 0,
        Screen::Lyrics => 1,
        Screen::Help => 2,
    }
}

pub fn sidebar_to_screen(idx: usize) -> Screen {
    match idx {
        0 => Screen::Library,
        1 => Screen::Lyrics,
        _ => Screen::Help,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edit_from_empty() {
        let mut pane = LyricsPane::new();
        pane.start_edit(None);
        assert_eq!(pane.mode, LyricsMode::Editing);
        assert!(pane.buffer.is_empty());

        pane.cancel_edit();
        assert_eq!(pane.mode, LyricsMode::Empty);
    }

    #[test]
    fn test_edit_prepopulates_and_cancel_restores() {
        let lines = vec![LyricLine::new(83.0, "hello")];
        let mut pane = LyricsPane::new();
        pane.sync_mode(true);
        pane.start_edit(Some(&lines));
        assert_eq!(pane.buffer, "1:23.00|hello");

        pane.cancel_edit();
        assert_eq!(pane.mode, LyricsMode::Viewing);
    }

    #[test]
    fn test_finish_edit_modes() {
        let mut pane = LyricsPane::new();
        pane.start_edit(None);
        pane.finish_edit(false);
        assert_eq!(pane.mode, LyricsMode::Viewing);

        pane.start_edit(None);
        pane.finish_edit(true);
        assert_eq!(pane.mode, LyricsMode::Empty);
    }

    #[test]
    fn test_scroll_glides_toward_center() {
        let mut pane = LyricsPane::new();
        pane.set_active(Some(30));
        // Target for a 10-row viewport over 100 lines is 30 - 5 = 25.
        pane.update_scroll(100, 10);
        assert_eq!(pane.scroll, 3);
        for _ in 0..20 {
            pane.update_scroll(100, 10);
        }
        assert_eq!(pane.scroll, 25);
    }

    #[test]
    fn test_no_scroll_without_active_line() {
        let mut pane = LyricsPane::new();
        pane.scroll = 7;
        pane.set_active(None);
        pane.update_scroll(100, 10);
        assert_eq!(pane.scroll, 7);
    }

    #[test]
    fn test_scroll_clamped_at_end() {
        let mut pane = LyricsPane::new();
        pane.set_active(Some(99));
        for _ in 0..50 {
            pane.update_scroll(100, 10);
        }
        assert_eq!(pane.scroll, 90);
    }
}
