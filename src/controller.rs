//! Lookup misses are not errors: they return an unchanged copy with
//! `applied == false`.

use serde::Deserialize;
use tracing::{debug, warn};
use crate::catalog::{Category, IdSource, Platform, PlatformDraft, PlatformId};
use crate::error::DashboardError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mutation<T> {
    pub items: Vec<T>,
    pub applied: bool
}

impl<T: Clone> Mutation<T> {
    fn applied(items: Vec<T>) -> Self {
        Mutation { items, applied: true }
    }

    fn unchanged(items: &[T]) -> Self {
        Mutation { items: items.to_vec(), applied: false }
    }
}

/// Required-field policy for platform submissions.
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(default)]
pub struct PlatformRules {
    pub add_requires_sub_category: bool,
    pub update_requires_sub_category: bool
}

impl Default for PlatformRules {
    fn default() -> Self {
        PlatformRules {
            add_requires_sub_category: true,
            update_requires_sub_category: false
        }
    }
}

/// Required-field check shared by the controller and the platform form.
pub(crate) fn check_platform_fields(draft: &PlatformDraft, require_sub: bool) -> Result<(), DashboardError> {
    if draft.name.is_empty() {
        return Err(DashboardError::missing("name"));
    }
    if draft.url.is_empty() {
        return Err(DashboardError::missing("url"));
    }
    if draft.main_category.is_empty() {
        return Err(DashboardError::missing("main category"));
    }
    if require_sub && draft.sub_category.is_empty() {
        return Err(DashboardError::missing("sub category"));
    }

    Ok(())
}

/// Appends a new platform with a freshly generated id.
pub fn add_platform(
    platforms: &[Platform],
    draft: PlatformDraft,
    ids: &mut IdSource,
    rules: &PlatformRules
) -> Result<Mutation<Platform>, DashboardError> {
    check_platform_fields(&draft, rules.add_requires_sub_category)?;

    let id = ids.next(platforms);
    let mut items = platforms.to_vec();
    items.push(draft.into_platform(id));

    Ok(Mutation::applied(items))
}

/// Replaces the platform with the same id, keeping its position.
pub fn update_platform(
    platforms: &[Platform],
    updated: Platform,
    rules: &PlatformRules
) -> Result<Mutation<Platform>, DashboardError> {
    check_platform_fields(&PlatformDraft::from(&updated), rules.update_requires_sub_category)?;

    match platforms.iter().position(|p| p.id == updated.id) {
        Some(position) => {
            let mut items = platforms.to_vec();
            items[position] = updated;
            Ok(Mutation::applied(items))
        }
        None => {
            debug!("No platform with id {} to update", updated.id);
            Ok(Mutation::unchanged(platforms))
        }
    }
}

pub fn delete_platform(platforms: &[Platform], id: &PlatformId) -> Mutation<Platform> {
    let items: Vec<Platform> = platforms.iter()
        .filter(|p| &p.id != id)
        .cloned()
        .collect();

    let applied = items.len() != platforms.len();
    if !applied {
        debug!("No platform with id {} to delete", id);
    }

    Mutation { items, applied }
}

/// Appends a category. Duplicate main names are accepted but logged.
pub fn add_category(categories: &[Category], category: Category) -> Result<Mutation<Category>, DashboardError> {
    if category.main.trim().is_empty() {
        return Err(DashboardError::missing("category name"));
    }

    if categories.iter().any(|c| c.main == category.main) {
        warn!("Adding category {} which already exists", category.main);
    }

    let mut items = categories.to_vec();
    items.push(category);

    Ok(Mutation::applied(items))
}

/// Replaces every category whose main name equals `updated.main`.
pub fn update_category(categories: &[Category], updated: Category) -> Result<Mutation<Category>, DashboardError> {
    if updated.main.trim().is_empty() {
        return Err(DashboardError::missing("category name"));
    }

    if !categories.iter().any(|c| c.main == updated.main) {
        debug!("No category {} to update", updated.main);
        return Ok(Mutation::unchanged(categories));
    }

    let items = categories.iter()
        .map(|c| if c.main == updated.main { updated.clone() } else { c.clone() })
        .collect();

    Ok(Mutation::applied(items))
}

/// Appends `sub` to the category named `main` unless it is already listed.
pub fn add_sub_category(categories: &[Category], main: &str, sub: &str) -> Result<Mutation<Category>, DashboardError> {
    if main.is_empty() {
        return Err(DashboardError::missing("category"));
    }
    if sub.is_empty() {
        return Err(DashboardError::missing("sub category name"));
    }

    let mut applied = false;
    let items = categories.iter()
        .map(|c| {
            if c.main == main && !c.has_sub(sub) {
                applied = true;
                let mut category = c.clone();
                category.subs.push(sub.to_string());
                category
            } else {
                c.clone()
            }
        })
        .collect();

    if !applied {
        debug!("Sub category {}/{} not added (unknown category or already present)", main, sub);
    }

    Ok(Mutation { items, applied })
}

/// Removes categories named `main`. Platforms referencing it are left alone.
pub fn delete_category(categories: &[Category], main: &str) -> Mutation<Category> {
    let items: Vec<Category> = categories.iter()
        .filter(|c| c.main != main)
        .cloned()
        .collect();

    let applied = items.len() != categories.len();
    if !applied {
        debug!("No category {} to delete", main);
    }

    Mutation { items, applied }
}

pub fn delete_sub_category(categories: &[Category], main: &str, sub: &str) -> Mutation<Category> {
    let mut applied = false;
    let items = categories.iter()
        .map(|c| {
            if c.main == main && c.has_sub(sub) {
                applied = true;
                let mut category = c.clone();
                category.subs.retain(|s| s != sub);
                category
            } else {
                c.clone()
            }
        })
        .collect();

    if !applied {
        debug!("No sub category {}/{} to delete", main, sub);
    }

    Mutation { items, applied }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::seed::{default_categories, default_platforms};

    fn linear() -> PlatformDraft {
        PlatformDraft {
            name: "Linear".to_string(),
            url: "https://linear.app".to_string(),
            description: String::new(),
            main_category: "Development".to_string(),
            sub_category: "Tools".to_string(),
            icon: "Globe".to_string(),
            color: "primary".to_string()
        }
    }

    #[test]
    fn add_platform_appends_with_fresh_id() {
        let platforms = default_platforms();
        let mut ids = IdSource::new();

        let result = add_platform(&platforms, linear(), &mut ids, &PlatformRules::default()).unwrap();
        assert!(result.applied);
        assert_eq!(result.items.len(), 9);
        assert_eq!(platforms.len(), 8);

        let added = &result.items[8];
        assert_eq!(added.name, "Linear");
        assert_eq!(added.url, "https://linear.app");
        assert_eq!(added.main_category, "Development");
        assert_eq!(added.sub_category, "Tools");
        assert_eq!(added.icon, "Globe");
        assert_eq!(added.color, "primary");
        assert!(!added.id.0.is_empty());
        assert!(platforms.iter().all(|p| p.id != added.id));
    }

    #[test]
    fn adding_the_same_draft_twice_gives_distinct_ids() {
        let mut ids = IdSource::new();
        let rules = PlatformRules::default();

        let once = add_platform(&default_platforms(), linear(), &mut ids, &rules).unwrap();
        let twice = add_platform(&once.items, linear(), &mut ids, &rules).unwrap();

        assert_eq!(twice.items.len(), 10);
        assert_ne!(twice.items[8].id, twice.items[9].id);
    }

    #[test]
    fn add_platform_enforces_required_fields() {
        let mut ids = IdSource::new();
        let rules = PlatformRules::default();

        let mut draft = linear();
        draft.url.clear();
        let err = add_platform(&[], draft, &mut ids, &rules).unwrap_err();
        assert!(err.is_validation());

        let mut draft = linear();
        draft.sub_category.clear();
        assert!(add_platform(&[], draft.clone(), &mut ids, &rules).is_err());

        let relaxed = PlatformRules { add_requires_sub_category: false, ..rules };
        assert!(add_platform(&[], draft, &mut ids, &relaxed).unwrap().applied);
    }

    #[test]
    fn update_replaces_in_place() {
        let platforms = default_platforms();
        let mut updated = platforms[2].clone();
        updated.name = "Figma Pro".to_string();
        updated.sub_category.clear();

        let result = update_platform(&platforms, updated, &PlatformRules::default()).unwrap();
        assert!(result.applied);
        assert_eq!(result.items[2].name, "Figma Pro");
        assert_eq!(result.items.len(), platforms.len());
        assert_eq!(platforms[2].name, "Figma");
    }

    #[test]
    fn update_with_unknown_id_is_a_noop() {
        let platforms = default_platforms();
        let mut ghost = platforms[0].clone();
        ghost.id = PlatformId::from("missing");

        let result = update_platform(&platforms, ghost, &PlatformRules::default()).unwrap();
        assert!(!result.applied);
        assert_eq!(result.items, platforms);
    }

    #[test]
    fn delete_platform_is_idempotent() {
        let platforms = default_platforms();
        let id = PlatformId::from("4");

        let once = delete_platform(&platforms, &id);
        let twice = delete_platform(&once.items, &id);

        assert!(once.applied);
        assert!(!twice.applied);
        assert_eq!(once.items, twice.items);
        assert_eq!(twice.items.len(), 7);
    }

    #[test]
    fn add_sub_category_appends_once() {
        let categories = default_categories();

        let once = add_sub_category(&categories, "Productivity", "Journaling").unwrap();
        let twice = add_sub_category(&once.items, "Productivity", "Journaling").unwrap();

        assert!(once.applied);
        assert!(!twice.applied);

        let productivity = &twice.items[0];
        assert_eq!(productivity.subs, vec![
            "Task Management", "Note Taking", "Time Tracking", "Communication", "File Storage", "Journaling"
        ]);
    }

    #[test]
    fn add_sub_category_to_unknown_main_is_a_noop() {
        let categories = default_categories();
        let result = add_sub_category(&categories, "Cooking", "Recipes").unwrap();
        assert!(!result.applied);
        assert_eq!(result.items, categories);
    }

    #[test]
    fn add_category_accepts_duplicates_but_not_blank_names() {
        let categories = default_categories();
        let design = Category::new("Design", &[], "primary", "Star");

        let result = add_category(&categories, design).unwrap();
        assert_eq!(result.items.iter().filter(|c| c.main == "Design").count(), 2);

        assert!(add_category(&categories, Category::new("  ", &[], "primary", "Star")).is_err());
    }

    #[test]
    fn update_category_replaces_by_main() {
        let categories = default_categories();
        let recolored = Category::new("Learning", &["Coding"], "orange", "BookOpen");

        let result = update_category(&categories, recolored.clone()).unwrap();
        assert!(result.applied);
        assert_eq!(result.items[2], recolored);

        let missing = update_category(&categories, Category::new("Nope", &[], "", "")).unwrap();
        assert!(!missing.applied);
    }

    #[test]
    fn delete_category_and_sub_category() {
        let categories = default_categories();

        let without_design = delete_category(&categories, "Design");
        assert!(without_design.applied);
        assert!(without_design.items.iter().all(|c| c.main != "Design"));
        assert!(!delete_category(&without_design.items, "Design").applied);

        let without_icons = delete_sub_category(&categories, "Design", "Icons");
        assert!(without_icons.applied);
        assert_eq!(without_icons.items[3].subs, vec!["Graphics", "UI/UX", "Photography", "Inspiration"]);
        assert!(!delete_sub_category(&without_icons.items, "Design", "Icons").applied);
    }
}
