use crate::theme::Theme;

pub const RESET: &str = "\x1b[0m";

/// Maps colour keys to terminal colours. Unknown keys use the fallback.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    theme: Theme
}

impl Palette {
    pub fn new(theme: Theme) -> Self {
        Palette { theme }
    }

    pub fn ansi(&self, color: &str) -> &'static str {
        match (color, self.theme) {
            ("orange", Theme::Light) => "\x1b[33m",
            ("orange", Theme::Dark) => "\x1b[93m",
            ("pink", Theme::Light) => "\x1b[35m",
            ("pink", Theme::Dark) => "\x1b[95m",
            ("purple", Theme::Light) => "\x1b[34;1m",
            ("purple", Theme::Dark) => "\x1b[94;1m",
            ("green", Theme::Light) => "\x1b[32m",
            ("green", Theme::Dark) => "\x1b[92m",
            (_, Theme::Light) => "\x1b[34m",
            (_, Theme::Dark) => "\x1b[94m"
        }
    }

    pub fn paint(&self, color: &str, text: &str) -> String {
        format!("{}{}{}", self.ansi(color), text, RESET)
    }
}
