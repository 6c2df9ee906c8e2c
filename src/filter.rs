use serde::{Deserialize, Serialize};
use crate::catalog::Platform;

/// Number of entries offered under the search box.
pub const SUGGESTION_LIMIT: usize = 5;

#[derive(Deserialize, Serialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum SearchScope {
    Name,
    #[default]
    NameAndDescription
}

/// Current sidebar / search selection. Empty strings mean "no constraint".
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    pub main_category: String,
    pub sub_category: String,
    pub search_text: String
}

impl FilterState {
    pub fn new(main_category: &str, sub_category: &str, search_text: &str) -> Self {
        FilterState {
            main_category: main_category.to_string(),
            sub_category: sub_category.to_string(),
            search_text: search_text.to_string()
        }
    }

    /// Switching the main category always drops the sub-category selection.
    pub fn select_main(&mut self, main_category: &str) {
        self.main_category = main_category.to_string();
        self.sub_category.clear();
    }

    pub fn select_sub(&mut self, sub_category: &str) {
        self.sub_category = sub_category.to_string();
    }

    pub fn set_search(&mut self, search_text: &str) {
        self.search_text = search_text.to_string();
    }

    pub fn clear(&mut self) {
        *self = FilterState::default();
    }

    pub fn is_active(&self) -> bool {
        !self.main_category.is_empty() || !self.sub_category.is_empty() || !self.search_text.is_empty()
    }

    pub fn matches(&self, platform: &Platform, scope: SearchScope) -> bool {
        let matches_main = self.main_category.is_empty() || platform.main_category == self.main_category;
        let matches_sub = self.sub_category.is_empty() || platform.sub_category == self.sub_category;

        matches_main && matches_sub && matches_search(platform, &self.search_text, scope)
    }
}

fn matches_search(platform: &Platform, text: &str, scope: SearchScope) -> bool {
    if text.is_empty() {
        return true;
    }

    let needle = text.to_lowercase();
    platform.name.to_lowercase().contains(&needle)
        || (scope == SearchScope::NameAndDescription && platform.description.to_lowercase().contains(&needle))
}

/// Ordered subsequence of `platforms` matching every constraint of `state`.
pub fn filter_platforms<'a>(platforms: &'a [Platform], state: &FilterState, scope: SearchScope) -> Vec<&'a Platform> {
    platforms.iter()
        .filter(|p| state.matches(p, scope))
        .collect()
}

/// Name matches offered while typing. Blank input yields nothing.
pub fn suggestions<'a>(platforms: &'a [Platform], text: &str) -> Vec<&'a Platform> {
    if text.trim().is_empty() {
        return Vec::new();
    }

    let needle = text.to_lowercase();
    platforms.iter()
        .filter(|p| p.name.to_lowercase().contains(&needle))
        .take(SUGGESTION_LIMIT)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::seed::default_platforms;
    use crate::catalog::{PlatformDraft, PlatformId};

    fn names(platforms: &[&Platform]) -> Vec<String> {
        platforms.iter().map(|p| p.name.clone()).collect()
    }

    #[test]
    fn empty_filter_is_identity() {
        let platforms = default_platforms();
        let filtered = filter_platforms(&platforms, &FilterState::default(), SearchScope::NameAndDescription);
        assert_eq!(filtered.len(), platforms.len());
        assert!(filtered.iter().zip(platforms.iter()).all(|(a, b)| *a == b));
    }

    #[test]
    fn main_category_filter_keeps_order() {
        let platforms = default_platforms();
        let filtered = filter_platforms(&platforms, &FilterState::new("Entertainment", "", ""), SearchScope::Name);
        assert_eq!(names(&filtered), vec!["YouTube", "Spotify"]);
    }

    #[test]
    fn main_category_match_is_case_sensitive() {
        let platforms = default_platforms();
        let filtered = filter_platforms(&platforms, &FilterState::new("entertainment", "", ""), SearchScope::Name);
        assert!(filtered.is_empty());
    }

    #[test]
    fn sub_category_narrows_further() {
        let platforms = default_platforms();
        let filtered = filter_platforms(&platforms, &FilterState::new("Development", "Code Editors", ""), SearchScope::Name);
        assert_eq!(names(&filtered), vec!["VS Code"]);
    }

    #[test]
    fn search_is_case_insensitive() {
        let platforms = default_platforms();
        let filtered = filter_platforms(&platforms, &FilterState::new("", "", "GIT"), SearchScope::Name);
        assert_eq!(names(&filtered), vec!["GitHub"]);
    }

    #[test]
    fn description_search_depends_on_scope() {
        let platforms = default_platforms();
        let state = FilterState::new("", "", "kanban");

        assert!(filter_platforms(&platforms, &state, SearchScope::Name).is_empty());
        assert_eq!(names(&filter_platforms(&platforms, &state, SearchScope::NameAndDescription)), vec!["Trello"]);
        assert!(state.matches(&platforms[6], SearchScope::NameAndDescription));
    }

    #[test]
    fn result_is_always_a_subsequence() {
        let platforms = default_platforms();
        let states = [
            FilterState::new("Productivity", "", ""),
            FilterState::new("", "Music", ""),
            FilterState::new("", "", "o"),
            FilterState::new("Development", "", "co"),
            FilterState::new("Nope", "Nothing", "zzz"),
        ];

        for state in &states {
            let filtered = filter_platforms(&platforms, state, SearchScope::NameAndDescription);
            let mut rest = platforms.iter();
            for item in filtered {
                assert!(rest.any(|p| p == item), "{:?} broke ordering", state);
            }
        }
    }

    #[test]
    fn selecting_main_resets_sub() {
        let mut state = FilterState::new("Design", "Icons", "x");
        state.select_main("Learning");
        assert_eq!(state, FilterState::new("Learning", "", "x"));
        assert!(state.is_active());

        state.clear();
        assert!(!state.is_active());
    }

    #[test]
    fn suggestions_are_capped_and_ignore_blank_input() {
        let platforms: Vec<Platform> = (0..8)
            .map(|i| PlatformDraft { name: format!("Tool {}", i), ..Default::default() }.into_platform(PlatformId(i.to_string())))
            .collect();

        assert_eq!(suggestions(&platforms, "tool").len(), SUGGESTION_LIMIT);
        assert!(suggestions(&platforms, "   ").is_empty());
        assert_eq!(suggestions(&platforms, "7")[0].name, "Tool 7");
    }
}
