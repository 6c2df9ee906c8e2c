use std::path::Path;
use crate::catalog::{Category, Platform, PlatformDraft, PlatformId};
use crate::error::DashboardError;

pub fn default_categories() -> Vec<Category> {
    vec![
        Category::new("Productivity", &["Task Management", "Note Taking", "Time Tracking", "Communication", "File Storage"], "orange", "Calendar"),
        Category::new("Entertainment", &["Streaming", "Gaming", "Social Media", "Music", "Reading"], "pink", "Play"),
        Category::new("Learning", &["Coding", "Languages", "Courses", "Documentation", "Tutorials"], "blue", "BookOpen"),
        Category::new("Design", &["Graphics", "UI/UX", "Photography", "Icons", "Inspiration"], "purple", "Palette"),
        Category::new("Development", &["Code Editors", "Version Control", "Hosting", "APIs", "Tools"], "green", "Code"),
    ]
}

fn seed(id: &str, name: &str, url: &str, description: &str, main: &str, sub: &str, icon: &str, color: &str) -> Platform {
    PlatformDraft {
        name: name.to_string(),
        url: url.to_string(),
        description: description.to_string(),
        main_category: main.to_string(),
        sub_category: sub.to_string(),
        icon: icon.to_string(),
        color: color.to_string()
    }.into_platform(PlatformId::from(id))
}

pub fn default_platforms() -> Vec<Platform> {
    vec![
        seed("1", "GitHub", "https://github.com", "Version control and collaboration platform for developers", "Development", "Version Control", "Github", "green"),
        seed("2", "Notion", "https://notion.so", "All-in-one workspace for notes, tasks, and collaboration", "Productivity", "Note Taking", "FileText", "orange"),
        seed("3", "Figma", "https://figma.com", "Collaborative interface design tool", "Design", "UI/UX", "Figma", "purple"),
        seed("4", "YouTube", "https://youtube.com", "Video sharing and streaming platform", "Entertainment", "Streaming", "Play", "pink"),
        seed("5", "Duolingo", "https://duolingo.com", "Language learning platform with gamified lessons", "Learning", "Languages", "BookOpen", "blue"),
        seed("6", "VS Code", "https://code.visualstudio.com", "Free source-code editor with debugging support", "Development", "Code Editors", "Code", "green"),
        seed("7", "Trello", "https://trello.com", "Visual project management tool with kanban boards", "Productivity", "Task Management", "Kanban", "orange"),
        seed("8", "Spotify", "https://spotify.com", "Music streaming service with millions of songs", "Entertainment", "Music", "Music", "pink"),
    ]
}

/// Reads a replacement platform seed from a json5 file.
pub async fn load_seed_file(path: &Path) -> Result<Vec<Platform>, DashboardError> {
    let content = tokio::fs::read_to_string(path).await
        .map_err(|err| DashboardError::config(format!("Failed to read seed file {}: {}", path.display(), err)))?;

    Ok(json5::from_str(content.as_str())?)
}
