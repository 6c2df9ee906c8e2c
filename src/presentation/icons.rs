use std::collections::HashMap;

/// Icons offered by the platform and category pickers, in display order.
pub const AVAILABLE_ICONS: [&str; 20] = [
    "Globe", "Code", "FileText", "BookOpen", "Play", "Music", "Github", "Figma",
    "Camera", "Palette", "Monitor", "Smartphone", "Headphones", "Calendar",
    "MessageCircle", "Mail", "Users", "Settings", "Star", "Heart"
];

pub const PLATFORM_FALLBACK: &str = "Globe";
pub const CATEGORY_FALLBACK: &str = "Folder";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyph {
    pub name: &'static str,
    symbol: &'static str
}

impl Glyph {
    const fn new(name: &'static str, symbol: &'static str) -> Self {
        Glyph { name, symbol }
    }

    pub fn render(&self) -> &'static str {
        self.symbol
    }
}

const GLYPHS: [Glyph; 22] = [
    Glyph::new("Globe", "🌐"),
    Glyph::new("Code", "⌨"),
    Glyph::new("FileText", "📄"),
    Glyph::new("BookOpen", "📖"),
    Glyph::new("Play", "▶"),
    Glyph::new("Music", "♪"),
    Glyph::new("Github", "🐙"),
    Glyph::new("Figma", "◈"),
    Glyph::new("Camera", "📷"),
    Glyph::new("Palette", "🎨"),
    Glyph::new("Monitor", "🖥"),
    Glyph::new("Smartphone", "📱"),
    Glyph::new("Headphones", "🎧"),
    Glyph::new("Calendar", "📅"),
    Glyph::new("MessageCircle", "💬"),
    Glyph::new("Mail", "✉"),
    Glyph::new("Users", "👥"),
    Glyph::new("Settings", "⚙"),
    Glyph::new("Star", "★"),
    Glyph::new("Heart", "♥"),
    Glyph::new("Kanban", "▤"),
    Glyph::new("Folder", "📁"),
];

/// Resolves icon keys to glyphs, falling back to a fixed glyph for unknown keys.
#[derive(Debug)]
pub struct IconRegistry {
    glyphs: HashMap<&'static str, Glyph>
}

impl Default for IconRegistry {
    fn default() -> Self {
        IconRegistry {
            glyphs: GLYPHS.iter().map(|g| (g.name, *g)).collect()
        }
    }
}

impl IconRegistry {
    pub fn lookup(&self, key: &str) -> Option<Glyph> {
        self.glyphs.get(key).copied()
    }

    pub fn resolve_or(&self, key: &str, fallback: &str) -> Glyph {
        self.lookup(key)
            .or_else(|| self.lookup(fallback))
            .unwrap_or(GLYPHS[0])
    }

    pub fn platform_icon(&self, key: &str) -> Glyph {
        self.resolve_or(key, PLATFORM_FALLBACK)
    }

    pub fn category_icon(&self, key: &str) -> Glyph {
        self.resolve_or(key, CATEGORY_FALLBACK)
    }
}

/// Picker entries whose name contains `search`, ignoring case.
pub fn search_icons(search: &str) -> Vec<&'static str> {
    let needle = search.to_lowercase();
    AVAILABLE_ICONS.iter()
        .copied()
        .filter(|icon| icon.to_lowercase().contains(&needle))
        .collect()
}
