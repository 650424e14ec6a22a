use crate::lyrics::LyricLine;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

/// A song in the library. The audio file path is the playable reference.
#[derive(Debug, Clone)]
pub struct Song {
    pub id: String,
    pub title: String,
    pub artist: String,
    pub path: PathBuf,
    pub lyrics: Option<Vec<LyricLine>>,
}

impl Song {
    /// Build a song record for an audio file: title from the file stem,
    /// placeholder artist, no lyrics yet.
    pub fn from_path(path: PathBuf) -> Self {
        let title = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("Untitled")
            .to_string();
        Self {
            id: next_song_id(),
            title,
            artist: "Unknown Artist".to_string(),
            path,
            lyrics: None,
        }
    }
}

/// Ids derive from the add timestamp; the counter keeps same-millisecond
/// adds distinct.
fn next_song_id() -> String {
    static COUNTER: AtomicU64 = AtomicU64::new(0);
    let ms = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis();
    format!("{}-{}", ms, COUNTER.fetch_add(1, Ordering::Relaxed))
}

/// The song collection plus the playback cursor.
#[derive(Debug, Clone, Default)]
pub struct Library {
    songs: Vec<Song>,
    current: Option<usize>,
}

impl Library {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a song, returning its index
    pub fn add(&mut self, song: Song) -> usize {
        self.songs.push(song);
        self.songs.len() - 1
    }

    pub fn songs(&self) -> &[Song] {
        &self.songs
    }

    pub fn get(&self, index: usize) -> Option<&Song> {
        self.songs.get(index)
    }

    pub fn len(&self) -> usize {
        self.songs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.songs.is_empty()
    }

    pub fn current_index(&self) -> Option<usize> {
        self.current
    }

    pub fn current_song(&self) -> Option<&Song> {
        self.current.and_then(|i| self.songs.get(i))
    }

    /// Set the playback cursor, returns the newly selected song
    pub fn select(&mut self, index: usize) -> Option<&Song> {
        if index < self.songs.len() {
            self.current = Some(index);
            self.songs.get(index)
        } else {
            None
        }
    }

    /// Advance to the next song, returns the new current song
    pub fn advance(&mut self) -> Option<&Song> {
        let current = self.current?;
        if current + 1 < self.songs.len() {
            self.current = Some(current + 1);
            self.songs.get(current + 1)
        } else {
            None
        }
    }

    /// Go to the previous song, returns the new current song
    pub fn go_back(&mut self) -> Option<&Song> {
        let current = self.current?;
        if current > 0 {
            self.current = Some(current - 1);
            self.songs.get(current - 1)
        } else {
            None
        }
    }

    /// Replace the lyrics of whichever song is selected right now.
    /// The whole sequence is swapped in one assignment. Returns false when
    /// nothing is selected.
    pub fn replace_lyrics(&mut self, lyrics: Vec<LyricLine>) -> bool {
        match self.current.and_then(|i| self.songs.get_mut(i)) {
            Some(song) => {
                song.lyrics = Some(lyrics);
                true
            }
            None => false,
        }
    }
}

const AUDIO_EXTENSIONS: [&str; 10] = [
    "mp3", "flac", "ogg", "oga", "wav", "m4a", "aac", "opus", "wma", "aiff",
];

/// Whether a path names a playable audio file, by extension
pub fn is_audio_path(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| AUDIO_EXTENSIONS.iter().any(|a| ext.eq_ignore_ascii_case(a)))
}

/// Whether a path names a tagged lyrics file
pub fn is_lyrics_path(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("lrc"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_song(name: &str) -> Song {
        Song::from_path(PathBuf::from(format!("/music/{name}.mp3")))
    }

    #[test]
    fn test_from_path_defaults() {
        let song = Song::from_path(PathBuf::from("/music/Some Song.flac"));
        assert_eq!(song.title, "Some Song");
        assert_eq!(song.artist, "Unknown Artist");
        assert!(song.lyrics.is_none());
        assert!(!song.id.is_empty());
    }

    #[test]
    fn test_ids_are_distinct() {
        let a = make_song("a");
        let b = make_song("b");
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_add_and_select() {
        let mut library = Library::new();
        assert!(library.is_empty());
        assert!(library.current_song().is_none());

        library.add(make_song("1"));
        library.add(make_song("2"));
        assert_eq!(library.len(), 2);

        assert!(library.select(0).is_some());
        assert_eq!(library.current_song().unwrap().title, "1");
        assert!(library.select(5).is_none());
        assert_eq!(library.current_index(), Some(0));
    }

    #[test]
    fn test_advance_and_go_back() {
        let mut library = Library::new();
        library.add(make_song("1"));
        library.add(make_song("2"));
        library.select(0);

        assert_eq!(library.advance().unwrap().title, "2");
        assert!(library.advance().is_none()); // end of library
        assert_eq!(library.go_back().unwrap().title, "1");
        assert!(library.go_back().is_none()); // start of library
    }

    #[test]
    fn test_replace_lyrics_targets_selection() {
        let mut library = Library::new();
        library.add(make_song("1"));
        library.add(make_song("2"));

        assert!(!library.replace_lyrics(vec![])); // nothing selected

        library.select(1);
        assert!(library.replace_lyrics(vec![LyricLine::new(0.0, "hi")]));
        assert!(library.get(0).unwrap().lyrics.is_none());
        assert_eq!(library.get(1).unwrap().lyrics.as_ref().unwrap().len(), 1);

        // Replacement swaps the whole sequence.
        library.replace_lyrics(vec![]);
        assert_eq!(library.get(1).unwrap().lyrics.as_ref().unwrap().len(), 0);
    }

    #[test]
    fn test_path_filters() {
        assert!(is_audio_path(Path::new("a.mp3")));
        assert!(is_audio_path(Path::new("b.FLAC")));
        assert!(!is_audio_path(Path::new("c.txt")));
        assert!(!is_audio_path(Path::new("noext")));

        assert!(is_lyrics_path(Path::new("a.lrc")));
        assert!(is_lyrics_path(Path::new("a.LRC")));
        assert!(!is_lyrics_path(Path::new("a.mp3")));
    }
}
