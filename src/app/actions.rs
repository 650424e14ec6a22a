use super::state::Screen;

#[derive(Debug, Clone)]
pub enum Action {
    Quit,
    NextScreen,
    PrevScreen,
    SetScreen(Screen),

    SidebarUp,
    SidebarDown,
    ListUp,
    ListDown,
    GoTop,
    GoBottom,
    PageUp,
    PageDown,
    Activate,

    PlayNext,
    PlayPrev,
    TogglePause,
    VolumeUp,
    VolumeDown,
    ToggleMute,
    SeekForward,
    SeekBack,

    // Path prompt (add a song / load a lyrics file)
    OpenSongPrompt,
    OpenLyricsPrompt,
    PromptChar(char),
    PromptBackspace,
    PromptClear,
    PromptSubmit,
    PromptCancel,

    // Lyrics editor
    EditLyrics,
    EditorChar(char),
    EditorNewline,
    EditorBackspace,
    EditorSave,
    EditorCancel,

    Resize,
}
