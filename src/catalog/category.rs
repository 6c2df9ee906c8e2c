use serde::{Deserialize, Serialize};

/// A main category and its ordered sub-categories. `main` doubles as the key.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub main: String,
    #[serde(default)]
    pub subs: Vec<String>,
    #[serde(default)]
    pub color: String,
    // Older stored collections predate category icons.
    #[serde(default)]
    pub icon: String
}

impl Category {
    pub fn new(main: &str, subs: &[&str], color: &str, icon: &str) -> Self {
        Category {
            main: main.to_string(),
            subs: subs.iter().map(|s| s.to_string()).collect(),
            color: color.to_string(),
            icon: icon.to_string()
        }
    }

    pub fn has_sub(&self, sub: &str) -> bool {
        self.subs.iter().any(|s| s == sub)
    }
}
