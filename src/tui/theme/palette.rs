//! Color palette - muted dusk theme

use ratatui::style::Color;

#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub bg_primary: Color,
    pub fg_primary: Color,
    pub fg_secondary: Color,
    pub accent: Color,
    pub accent_alt: Color,
    pub border: Color,
    pub playing: Color,
    pub error: Color,
}

impl Palette {
    /// Dusk palette - dark slate with an amber accent
    pub const DUSK: Self = Self {
        bg_primary: Color::Rgb(18, 18, 24),       // #121218 near black
        fg_primary: Color::Rgb(224, 222, 214),    // #e0ded6 warm white
        fg_secondary: Color::Rgb(128, 130, 140),  // #80828c slate gray
        accent: Color::Rgb(224, 164, 88),         // #e0a458 amber
        accent_alt: Color::Rgb(150, 140, 190),    // #968cbe faded violet
        border: Color::Rgb(62, 64, 76),           // #3e404c gunmetal
        playing: Color::Rgb(148, 180, 128),       // #94b480 sage
        error: Color::Rgb(204, 108, 108),         // #cc6c6c soft red
    };
}

impl Default for Palette {
    fn default() -> Self {
        Self::DUSK
    }
}
