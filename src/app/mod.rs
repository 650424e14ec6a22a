pub mod actions;
pub mod events;
pub mod state;

use crate::config::Config;
use crate::input;
use crate::library::{self, Song};
use crate::lyrics::{parser, sync, LyricLine};
use crate::player::mpv::MpvHandle;
use crate::tui::{self, TuiTerminal};
use actions::Action;
use events::{Event, FileEvent, PlayerEvent};
use state::{screen_to_sidebar, sidebar_to_screen, AppState, Prompt, PromptKind, Screen, Toast};
use std::path::PathBuf;
use tokio::sync::mpsc;

pub struct App {
    cfg: Config,
    config_path: PathBuf,
    state: AppState,
    mpv: Option<MpvHandle>,
}

impl App {
    pub fn new(cfg: Config, config_path: PathBuf, seed: Vec<PathBuf>) -> anyhow::Result<Self> {
        let mut state = AppState::new();
        state.volume = cfg.player.volume;

        // Restore last screen if available
        if let Some(screen_name) = &cfg.ui.last_screen {
            state.screen = match screen_name.as_str() {
                "library" => Screen::Library,
                "lyrics" => Screen::Lyrics,
                "help" => Screen::Help,
                _ => Screen::Library,
            };
            state.sidebar_selected = screen_to_sidebar(state.screen);
        }

        let mut skipped = 0usize;
        for path in seed {
            if library::is_audio_path(&path) {
                state.library.add(Song::from_path(path));
            } else {
                tracing::warn!("skipping non-audio file {}", path.display());
                skipped += 1;
            }
        }
        if skipped > 0 {
            state.toast = Some(Toast::error(format!("Skipped {skipped} non-audio file(s)")));
        }
        if !state.library.is_empty() {
            state.status = format!("Library: {} songs", state.library.len());
        }

        Ok(Self {
            cfg,
            config_path,
            state,
            mpv: None,
        })
    }

    pub async fn run(&mut self, terminal: &mut TuiTerminal) -> anyhow::Result<()> {
        let (tx, mut rx) = mpsc::channel::<Event>(256);

        input::spawn_input_task(tx.clone(), self.cfg.input.mouse);
        // No constant ticker: we re-render on input, player and file events.

        let _ = std::fs::create_dir_all(&self.cfg.paths.data_dir);
        let mpv_log = self.cfg.paths.data_dir.join("mpv.log");
        match MpvHandle::spawn(
            tx.clone(),
            self.cfg.player.audio_device.as_deref(),
            Some(&mpv_log),
        )
        .await
        {
            Ok(h) => {
                self.mpv = Some(h);
            }
            Err(e) => {
                self.state.toast = Some(Toast::error(format!("mpv disabled: {e:#}")));
                self.mpv = None;
            }
        }

        // First draw
        tui::draw(terminal, &self.cfg, &mut self.state)?;

        while let Some(ev) = rx.recv().await {
            match ev {
                Event::Input(input_ev) => {
                    if let Some(action) = input::map_input_to_action(&self.state, input_ev) {
                        self.handle_action(action, &tx).await;
                    }
                }
                Event::Player(pe) => {
                    self.handle_player(pe).await;
                }
                Event::File(fe) => {
                    self.handle_file(fe);
                }
            }

            if self.state.should_quit {
                break;
            }

            tui::draw(terminal, &self.cfg, &mut self.state)?;
        }

        self.save_state_on_quit();

        Ok(())
    }

    fn save_state_on_quit(&mut self) {
        self.cfg.player.volume = self.state.volume;

        let screen_name = match self.state.screen {
            Screen::Library => "library",
            Screen::Lyrics => "lyrics",
            Screen::Help => "help",
        };
        self.cfg.ui.last_screen = Some(screen_name.to_string());

        let _ = crate::config::save(&self.cfg, Some(&self.config_path));
    }

    async fn handle_action(&mut self, action: Action, tx: &mpsc::Sender<Event>) {
        match action {
            Action::Activate => {
                let index = self.state.song_list.selected;
                if self.state.library.select(index).is_some() {
                    self.start_playback().await;
                }
            }
            Action::PlayNext => {
                if self.state.library.advance().is_some() {
                    self.start_playback().await;
                }
            }
            Action::PlayPrev => {
                if self.state.library.go_back().is_some() {
                    self.start_playback().await;
                }
            }
            Action::TogglePause => {
                if let Some(mpv) = &self.mpv
                    && let Err(e) = mpv.toggle_pause().await {
                        self.state.status = format!("mpv error: {e:#}");
                    }
            }
            Action::ToggleMute => {
                self.state.muted = !self.state.muted;
                if let Some(mpv) = &self.mpv {
                    let _ = mpv.toggle_mute().await;
                }
            }
            Action::VolumeUp => {
                let v = self.state.volume.saturating_add(5).min(100);
                self.state.volume = v;
                if let Some(mpv) = &self.mpv {
                    let _ = mpv.set_volume(v).await;
                }
            }
            Action::VolumeDown => {
                let v = self.state.volume.saturating_sub(5);
                self.state.volume = v;
                if let Some(mpv) = &self.mpv {
                    let _ = mpv.set_volume(v).await;
                }
            }
            Action::SeekForward => {
                if let Some(mpv) = &self.mpv {
                    let _ = mpv.seek_relative(10.0).await;
                }
            }
            Action::SeekBack => {
                if let Some(mpv) = &self.mpv {
                    let _ = mpv.seek_relative(-10.0).await;
                }
            }
            Action::OpenSongPrompt => {
                self.state.prompt = Some(Prompt::new(PromptKind::AddSong));
            }
            Action::OpenLyricsPrompt => {
                if self.state.library.current_song().is_some() {
                    self.state.prompt = Some(Prompt::new(PromptKind::LoadLyrics));
                } else {
                    self.state.toast = Some(Toast::error("Select a song first"));
                }
            }
            Action::PromptSubmit => self.submit_prompt(tx),
            Action::EditLyrics => {
                if self.state.library.current_song().is_none() {
                    self.state.toast = Some(Toast::error("Select a song first"));
                } else {
                    let lyrics: Option<Vec<LyricLine>> =
                        self.state.current_lyrics().map(<[LyricLine]>::to_vec);
                    self.state.lyrics.start_edit(lyrics.as_deref());
                }
            }
            Action::EditorSave => {
                let parsed = parser::parse_manual(&self.state.lyrics.buffer);
                let saved_empty = parsed.is_empty();
                if self.state.library.replace_lyrics(parsed) {
                    self.state.lyrics.finish_edit(saved_empty);
                    self.state.lyrics.reset_view();
                    self.resolve_active_line();
                    self.state.toast = Some(Toast::success("Lyrics saved"));
                } else {
                    self.state.toast = Some(Toast::error("No song selected"));
                    self.state.lyrics.cancel_edit();
                }
            }
            _ => self.reduce(action),
        }
    }

    /// Load the currently selected song into mpv and reset per-song state.
    async fn start_playback(&mut self) {
        let Some(song) = self.state.library.current_song() else {
            return;
        };
        let title = song.title.clone();
        let path = song.path.clone();
        let has_lyrics = song.lyrics.is_some();

        // Song change resets the clock before the first time-pos arrives.
        self.state.position_secs = 0.0;
        self.state.duration_secs = 0.0;
        self.state.lyrics.reset_view();
        self.state.lyrics.cancel_edit();
        self.state.lyrics.sync_mode(has_lyrics);
        self.state.status = format!("Playing: {title}");

        if let Some(mpv) = &self.mpv {
            let _ = mpv.set_volume(self.state.volume).await;
            if let Err(e) = mpv.load_file(&path).await {
                self.state.toast = Some(Toast::error(format!("mpv load failed: {e:#}")));
            }
        } else {
            self.state.status = "mpv not available".into();
        }

        self.resolve_active_line();
    }

    fn submit_prompt(&mut self, tx: &mpsc::Sender<Event>) {
        let Some(prompt) = self.state.prompt.take() else {
            return;
        };
        let trimmed = prompt.input.trim();
        if trimmed.is_empty() {
            return;
        }
        let path = PathBuf::from(trimmed);
        match prompt.kind {
            PromptKind::AddSong => self.spawn_add_song(path, tx),
            PromptKind::LoadLyrics => self.spawn_load_lyrics(path, tx),
        }
    }

    fn spawn_add_song(&mut self, path: PathBuf, tx: &mpsc::Sender<Event>) {
        if !library::is_audio_path(&path) {
            self.state.toast =
                Some(Toast::error(format!("Not an audio file: {}", path.display())));
            return;
        }

        let tx = tx.clone();
        tokio::spawn(async move {
            let ev = match tokio::fs::metadata(&path).await {
                Ok(m) if m.is_file() => FileEvent::SongAdded {
                    song: Song::from_path(path),
                },
                Ok(_) => FileEvent::Error(format!("Not a file: {}", path.display())),
                Err(e) => FileEvent::Error(format!("{}: {e}", path.display())),
            };
            let _ = tx.send(Event::File(ev)).await;
        });
    }

    fn spawn_load_lyrics(&mut self, path: PathBuf, tx: &mpsc::Sender<Event>) {
        if !library::is_lyrics_path(&path) {
            self.state.toast = Some(Toast::error("Lyrics must be an .lrc file"));
            return;
        }
        let Some(song_id) = self.state.library.current_song().map(|s| s.id.clone()) else {
            self.state.toast = Some(Toast::error("Select a song first"));
            return;
        };

        let tx = tx.clone();
        tokio::spawn(async move {
            let ev = match tokio::fs::read_to_string(&path).await {
                Ok(content) => FileEvent::LyricsLoaded {
                    song_id,
                    lines: parser::parse_lrc(&content),
                },
                Err(e) => FileEvent::Error(format!("{}: {e}", path.display())),
            };
            let _ = tx.send(Event::File(ev)).await;
        });
    }

    fn reduce(&mut self, action: Action) {
        match action {
            Action::Quit => self.state.should_quit = true,
            Action::NextScreen => {
                self.state.screen = self.state.screen.next();
                self.state.sidebar_selected = screen_to_sidebar(self.state.screen);
            }
            Action::PrevScreen => {
                self.state.screen = self.state.screen.prev();
                self.state.sidebar_selected = screen_to_sidebar(self.state.screen);
            }
            Action::SetScreen(screen) => {
                self.state.screen = screen;
                self.state.sidebar_selected = screen_to_sidebar(screen);
            }
            Action::SidebarUp => {
                self.state.sidebar_selected = self.state.sidebar_selected.saturating_sub(1);
                self.state.screen = sidebar_to_screen(self.state.sidebar_selected);
            }
            Action::SidebarDown => {
                self.state.sidebar_selected = (self.state.sidebar_selected + 1).min(2);
                self.state.screen = sidebar_to_screen(self.state.sidebar_selected);
            }
            Action::ListUp => {
                self.state.song_list.select_prev();
                self.state.song_list.update_scroll(20);
            }
            Action::ListDown => {
                let len = self.state.library.len();
                self.state.song_list.select_next(len);
                self.state.song_list.update_scroll(20);
            }
            Action::GoTop => {
                self.state.song_list.selected = 0;
                self.state.song_list.scroll_offset = 0;
            }
            Action::GoBottom => {
                self.state.song_list.selected = self.state.library.len().saturating_sub(1);
                self.state.song_list.update_scroll(20);
            }
            Action::PageUp => {
                self.state.song_list.selected = self.state.song_list.selected.saturating_sub(10);
                self.state.song_list.update_scroll(20);
            }
            Action::PageDown => {
                self.state.song_list.selected = (self.state.song_list.selected + 10)
                    .min(self.state.library.len().saturating_sub(1));
                self.state.song_list.update_scroll(20);
            }
            Action::PromptChar(c) => {
                if let Some(p) = &mut self.state.prompt {
                    p.input.push(c);
                }
            }
            Action::PromptBackspace => {
                if let Some(p) = &mut self.state.prompt {
                    p.input.pop();
                }
            }
            Action::PromptClear => {
                if let Some(p) = &mut self.state.prompt {
                    p.input.clear();
                }
            }
            Action::PromptCancel => self.state.prompt = None,
            Action::EditorChar(c) => self.state.lyrics.buffer.push(c),
            Action::EditorNewline => self.state.lyrics.buffer.push('\n'),
            Action::EditorBackspace => {
                self.state.lyrics.buffer.pop();
            }
            Action::EditorCancel => self.state.lyrics.cancel_edit(),
            Action::Resize => {
                // Resize is handled by terminal
            }
            // Handled in handle_action
            _ => {}
        }
    }

    async fn handle_player(&mut self, pe: PlayerEvent) {
        match pe {
            PlayerEvent::Started => self.state.paused = false,
            PlayerEvent::Paused => self.state.paused = true,
            PlayerEvent::Position { seconds } => {
                self.state.position_secs = seconds;
                self.resolve_active_line();
            }
            PlayerEvent::Duration { seconds } => self.state.duration_secs = seconds,
            PlayerEvent::Ended => {
                self.state.position_secs = 0.0;
                self.state.duration_secs = 0.0;
                if self.state.library.advance().is_some() {
                    self.start_playback().await;
                } else {
                    self.state.status = "Playback ended".into();
                    self.resolve_active_line();
                }
            }
            PlayerEvent::Error(e) => self.state.status = format!("Player error: {e}"),
        }
    }

    fn handle_file(&mut self, fe: FileEvent) {
        match fe {
            FileEvent::Error(e) => {
                self.state.toast = Some(Toast::error(e.clone()));
                self.state.status = format!("Error: {e}");
            }
            FileEvent::SongAdded { song } => {
                let title = song.title.clone();
                self.state.library.add(song);
                self.state.toast = Some(Toast::success(format!("Added: {title}")));
                self.state.status = format!("Library: {} songs", self.state.library.len());
            }
            FileEvent::LyricsLoaded { song_id, lines } => {
                // Selection may have moved while the read was in flight.
                if self.state.library.current_song().map(|s| s.id.as_str())
                    != Some(song_id.as_str())
                {
                    tracing::debug!("dropping lyrics for {song_id}: selection changed");
                    return;
                }
                let count = lines.len();
                self.state.library.replace_lyrics(lines);
                // A file load replaces lyrics regardless of view state.
                self.state.lyrics.cancel_edit();
                self.state.lyrics.reset_view();
                self.state.lyrics.sync_mode(true);
                self.resolve_active_line();
                self.state.toast = Some(if count == 0 {
                    Toast::error("No timed lines found in file")
                } else {
                    Toast::success(format!("Loaded {count} lyric lines"))
                });
            }
        }
    }

    /// Recompute the derived active line from the current (lyrics, position)
    /// pair. Both live on the same state, so the pair is always consistent.
    fn resolve_active_line(&mut self) {
        let active = self
            .state
            .current_lyrics()
            .and_then(|lines| sync::active_line(lines, self.state.position_secs));
        self.state.lyrics.set_active(active);
    }
}
