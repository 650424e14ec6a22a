#[derive(Debug, Clone)]
pub enum Event {
    Input(InputEvent),
    Player(PlayerEvent),
    File(FileEvent),
}

#[derive(Debug, Clone)]
pub enum InputEvent {
    Key(crossterm::event::KeyEvent),
    Mouse(crossterm::event::MouseEvent),
    Resize,
}

#[derive(Debug, Clone)]
pub enum PlayerEvent {
    Started,
    Paused,
    Position { seconds: f64 },
    Duration { seconds: f64 },
    Ended,
    Error(String),
}

#[derive(Debug, Clone)]
pub enum FileEvent {
    Error(String),
    SongAdded {
        song: crate::library::Song,
    },
    /// Tagged with the song the read was issued for, so a completion that
    /// outlives the selection gets dropped instead of applied.
    LyricsLoaded {
        song_id: String,
        lines: Vec<crate::lyrics::LyricLine>,
    },
}
