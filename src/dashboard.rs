use std::sync::Arc;
use tracing::{debug, info};
use crate::catalog::seed::default_categories;
use crate::catalog::{Category, IdSource, Platform, PlatformDraft, PlatformId};
use crate::config::Config;
use crate::controller::{self, Mutation, PlatformRules};
use crate::error::DashboardError;
use crate::filter::{self, FilterState, SearchScope};
use crate::forms::{ColorPolicy, PlatformForm};
use crate::index::CategoryIndex;
use crate::presentation::{Notifications, Toast, ToastKind};
use crate::storage::persist;
use crate::storage::KeyValueStore;
use crate::theme::Theme;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Settings {
    pub rules: PlatformRules,
    pub search_scope: SearchScope,
    pub color_policy: ColorPolicy,
    pub persist_platforms: bool
}

impl From<&Config> for Settings {
    fn from(config: &Config) -> Self {
        Settings {
            rules: config.validation,
            search_scope: config.search_scope,
            color_policy: config.forms.color_policy(),
            persist_platforms: config.persist_platforms
        }
    }
}

pub struct Dashboard<S: KeyValueStore> {
    store: S,
    settings: Settings,
    platforms: Arc<[Platform]>,
    categories: Arc<[Category]>,
    filter: FilterState,
    theme: Theme,
    ids: IdSource,
    notifications: Notifications
}

impl<S: KeyValueStore> Dashboard<S> {
    /// Restores categories and theme from `store`; platforms start from `seed`
    /// unless platform persistence is switched on.
    pub async fn load(store: S, settings: Settings, seed: Vec<Platform>) -> Self {
        let categories = persist::load_categories(&store, default_categories()).await;
        let platforms = if settings.persist_platforms {
            persist::load_platforms(&store, seed).await
        } else {
            seed
        };
        let theme = persist::load_theme(&store).await;

        info!("Loaded {} platforms and {} categories ({} theme)", platforms.len(), categories.len(), theme);

        Dashboard {
            store,
            settings,
            platforms: platforms.into(),
            categories: categories.into(),
            filter: FilterState::default(),
            theme,
            ids: IdSource::new(),
            notifications: Notifications::default()
        }
    }

    pub fn platforms(&self) -> &[Platform] {
        &self.platforms
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Cheap handles to the current snapshots.
    pub fn snapshot(&self) -> (Arc<[Platform]>, Arc<[Category]>) {
        (Arc::clone(&self.platforms), Arc::clone(&self.categories))
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    pub fn category_index(&self) -> CategoryIndex<'_> {
        CategoryIndex::build(&self.categories)
    }

    pub fn find_platform(&self, id: &PlatformId) -> Option<&Platform> {
        self.platforms.iter().find(|p| &p.id == id)
    }

    pub fn visible(&self) -> Vec<&Platform> {
        filter::filter_platforms(&self.platforms, &self.filter, self.settings.search_scope)
    }

    pub fn suggestions(&self) -> Vec<&Platform> {
        filter::suggestions(&self.platforms, &self.filter.search_text)
    }

    pub fn orphans(&self) -> Vec<&Platform> {
        self.category_index().orphans(&self.platforms)
    }

    pub fn select_main_category(&mut self, main: &str) {
        self.filter.select_main(main);
    }

    pub fn select_sub_category(&mut self, sub: &str) {
        self.filter.select_sub(sub);
    }

    pub fn set_search(&mut self, text: &str) {
        self.filter.set_search(text);
    }

    pub fn clear_filters(&mut self) {
        self.filter.clear();
    }

    pub fn add_form(&self) -> PlatformForm {
        PlatformForm::for_add(self.settings.color_policy.clone())
    }

    pub fn edit_form(&self, id: &PlatformId) -> Option<PlatformForm> {
        let index = self.category_index();
        self.find_platform(id)
            .map(|platform| PlatformForm::for_edit(platform, &index, self.settings.color_policy.clone()))
    }

    pub fn notifications(&self) -> &[Toast] {
        self.notifications.pending()
    }

    pub fn drain_notifications(&mut self) -> Vec<Toast> {
        self.notifications.drain()
    }

    /// The snapshot is replaced before the write; the toast only follows a successful write.
    async fn commit_platforms(&mut self, mutation: Mutation<Platform>, message: &str) -> Result<bool, DashboardError> {
        if !mutation.applied {
            return Ok(false);
        }

        self.platforms = mutation.items.into();
        if self.settings.persist_platforms {
            persist::save_platforms(&mut self.store, &self.platforms).await?;
        }
        self.notifications.success(message);

        Ok(true)
    }

    async fn commit_categories(&mut self, mutation: Mutation<Category>, message: &str) -> Result<bool, DashboardError> {
        if !mutation.applied {
            return Ok(false);
        }

        self.categories = mutation.items.into();
        persist::save_categories(&mut self.store, &self.categories).await?;
        self.notifications.success(message);

        Ok(true)
    }

    /// Adds a platform and returns its generated id.
    pub async fn add_platform(&mut self, draft: PlatformDraft) -> Result<PlatformId, DashboardError> {
        let mutation = controller::add_platform(&self.platforms, draft, &mut self.ids, &self.settings.rules)?;
        let id = mutation.items.last()
            .map(|p| p.id.clone())
            .ok_or_else(|| DashboardError::new("Added platform is missing from the collection".to_string()))?;

        self.commit_platforms(mutation, "Platform added").await?;
        debug!("Added platform {}", id);

        Ok(id)
    }

    pub async fn update_platform(&mut self, updated: Platform) -> Result<bool, DashboardError> {
        let mutation = controller::update_platform(&self.platforms, updated, &self.settings.rules)?;
        self.commit_platforms(mutation, "Platform updated").await
    }

    pub async fn delete_platform(&mut self, id: &PlatformId) -> Result<bool, DashboardError> {
        let mutation = controller::delete_platform(&self.platforms, id);
        self.commit_platforms(mutation, "Platform deleted").await
    }

    pub async fn add_category(&mut self, category: Category) -> Result<bool, DashboardError> {
        let mutation = controller::add_category(&self.categories, category)?;
        self.commit_categories(mutation, "Category added").await
    }

    pub async fn update_category(&mut self, category: Category) -> Result<bool, DashboardError> {
        let mutation = controller::update_category(&self.categories, category)?;
        self.commit_categories(mutation, "Category updated").await
    }

    pub async fn add_sub_category(&mut self, main: &str, sub: &str) -> Result<bool, DashboardError> {
        let mutation = controller::add_sub_category(&self.categories, main, sub)?;
        self.commit_categories(mutation, "Sub category added").await
    }

    pub async fn delete_category(&mut self, main: &str) -> Result<bool, DashboardError> {
        let mutation = controller::delete_category(&self.categories, main);
        self.commit_categories(mutation, "Category deleted").await
    }

    pub async fn delete_sub_category(&mut self, main: &str, sub: &str) -> Result<bool, DashboardError> {
        let mutation = controller::delete_sub_category(&self.categories, main, sub);
        self.commit_categories(mutation, "Sub category deleted").await
    }

    pub async fn set_theme(&mut self, theme: Theme) -> Result<Theme, DashboardError> {
        self.theme = theme;
        persist::save_theme(&mut self.store, theme).await?;
        self.notifications.push(ToastKind::Info, &format!("Theme set to {}", theme));

        Ok(theme)
    }

    pub async fn toggle_theme(&mut self) -> Result<Theme, DashboardError> {
        self.set_theme(self.theme.toggled()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::seed::default_platforms;
    use crate::storage::persist::{CATEGORIES_KEY, PLATFORMS_KEY};
    use crate::error::ErrorKind;
    use crate::storage::{FileStore, MemoryStore};

    async fn dashboard() -> Dashboard<MemoryStore> {
        Dashboard::load(MemoryStore::new(), Settings::default(), default_platforms()).await
    }

    fn draft(name: &str) -> PlatformDraft {
        PlatformDraft {
            name: name.to_string(),
            url: format!("https://{}.example", name.to_lowercase()),
            main_category: "Development".to_string(),
            sub_category: "Tools".to_string(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn fresh_store_loads_defaults() {
        let dashboard = dashboard().await;
        assert_eq!(dashboard.platforms().len(), 8);
        assert_eq!(dashboard.categories().len(), 5);
        assert_eq!(dashboard.theme(), Theme::Light);
        assert_eq!(dashboard.visible().len(), 8);
    }

    #[tokio::test]
    async fn category_changes_are_persisted() {
        let mut dashboard = dashboard().await;
        assert!(dashboard.add_sub_category("Productivity", "Journaling").await.unwrap());

        let stored = dashboard.store().get(CATEGORIES_KEY).await.unwrap().unwrap();
        assert!(stored.contains("Journaling"));
        assert_eq!(dashboard.drain_notifications()[0].message, "Sub category added");
    }

    #[tokio::test]
    async fn lookup_misses_do_not_notify_or_persist() {
        let mut dashboard = dashboard().await;
        assert!(!dashboard.delete_category("Cooking").await.unwrap());
        assert!(!dashboard.delete_platform(&PlatformId::from("missing")).await.unwrap());

        assert!(dashboard.notifications().is_empty());
        assert_eq!(dashboard.store().get(CATEGORIES_KEY).await.unwrap(), None);
    }

    #[tokio::test]
    async fn platforms_are_not_persisted_by_default() {
        let mut dashboard = dashboard().await;
        dashboard.add_platform(draft("Linear")).await.unwrap();

        assert_eq!(dashboard.platforms().len(), 9);
        assert_eq!(dashboard.store().get(PLATFORMS_KEY).await.unwrap(), None);
    }

    #[tokio::test]
    async fn platform_persistence_can_be_enabled() {
        let settings = Settings { persist_platforms: true, ..Settings::default() };
        let mut dashboard = Dashboard::load(MemoryStore::new(), settings.clone(), default_platforms()).await;
        let id = dashboard.add_platform(draft("Linear")).await.unwrap();

        let store = dashboard.store().clone();
        let reloaded = Dashboard::load(store, settings, Vec::new()).await;
        assert_eq!(reloaded.platforms().len(), 9);
        assert!(reloaded.find_platform(&id).is_some());
    }

    #[tokio::test]
    async fn validation_failure_leaves_state_untouched() {
        let mut dashboard = dashboard().await;
        let before = dashboard.snapshot();

        let err = dashboard.add_platform(PlatformDraft::default()).await.unwrap_err();
        assert!(err.is_validation());

        let after = dashboard.snapshot();
        assert!(Arc::ptr_eq(&before.0, &after.0));
        assert!(dashboard.notifications().is_empty());
    }

    #[tokio::test]
    async fn filters_drive_visible_platforms() {
        let mut dashboard = dashboard().await;

        dashboard.select_main_category("Development");
        dashboard.select_sub_category("Code Editors");
        assert_eq!(dashboard.visible().len(), 1);

        dashboard.select_main_category("Productivity");
        assert_eq!(dashboard.filter().sub_category, "");
        assert_eq!(dashboard.visible().len(), 2);

        dashboard.clear_filters();
        dashboard.set_search("spot");
        assert_eq!(dashboard.suggestions()[0].name, "Spotify");
    }

    #[tokio::test]
    async fn failed_write_keeps_the_change_without_a_toast() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("data");
        tokio::fs::write(&blocker, "not a directory").await.unwrap();

        let mut dashboard = Dashboard::load(FileStore::new(&blocker), Settings::default(), default_platforms()).await;
        let err = dashboard.add_sub_category("Productivity", "Journaling").await.unwrap_err();

        assert_eq!(err.kind, ErrorKind::Storage);
        assert!(dashboard.categories()[0].has_sub("Journaling"));
        assert!(dashboard.notifications().is_empty());
    }

    #[tokio::test]
    async fn theme_toggle_is_persisted() {
        let mut dashboard = dashboard().await;
        assert_eq!(dashboard.toggle_theme().await.unwrap(), Theme::Dark);

        let reloaded = Dashboard::load(dashboard.store().clone(), Settings::default(), default_platforms()).await;
        assert_eq!(reloaded.theme(), Theme::Dark);
    }

    #[tokio::test]
    async fn edit_form_round_trip_updates_in_place() {
        let mut dashboard = dashboard().await;
        let id = PlatformId::from("3");

        let mut form = dashboard.edit_form(&id).unwrap();
        form.fields.name = "Figma Desktop".to_string();
        let updated = form.submit_edit(&dashboard.settings().rules).unwrap();

        assert!(dashboard.update_platform(updated).await.unwrap());
        assert_eq!(dashboard.platforms()[2].name, "Figma Desktop");
        assert!(dashboard.edit_form(&PlatformId::from("missing")).is_none());
    }
}
