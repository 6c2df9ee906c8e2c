use crate::catalog::{Platform, PlatformDraft, PlatformId};
use crate::controller::{check_platform_fields, PlatformRules};
use crate::error::DashboardError;
use crate::index::CategoryIndex;

pub const DEFAULT_ICON: &str = "Globe";
pub const DEFAULT_COLOR: &str = "blue";

/// What happens to the form colour when a main category is picked.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ColorPolicy {
    /// Copy the chosen category's colour, or `blue` when it has none.
    #[default]
    InheritCategory,
    Fixed(String)
}

impl ColorPolicy {
    pub fn from_fixed(fixed: Option<&str>) -> Self {
        match fixed {
            Some(color) => ColorPolicy::Fixed(color.to_string()),
            None => ColorPolicy::InheritCategory
        }
    }
}

/// Add or edit dialog state for a single platform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlatformForm {
    editing: Option<PlatformId>,
    pub fields: PlatformDraft,
    available_subs: Vec<String>,
    policy: ColorPolicy
}

fn blank_draft() -> PlatformDraft {
    PlatformDraft {
        icon: DEFAULT_ICON.to_string(),
        color: DEFAULT_COLOR.to_string(),
        ..Default::default()
    }
}

impl PlatformForm {
    pub fn for_add(policy: ColorPolicy) -> Self {
        PlatformForm {
            editing: None,
            fields: blank_draft(),
            available_subs: Vec::new(),
            policy
        }
    }

    /// Prefills the form from `platform`, offering the sub-categories of its current main category.
    pub fn for_edit(platform: &Platform, index: &CategoryIndex<'_>, policy: ColorPolicy) -> Self {
        PlatformForm {
            editing: Some(platform.id.clone()),
            fields: PlatformDraft::from(platform),
            available_subs: index.subs_of(&platform.main_category).to_vec(),
            policy
        }
    }

    pub fn is_edit(&self) -> bool {
        self.editing.is_some()
    }

    pub fn available_subs(&self) -> &[String] {
        &self.available_subs
    }

    /// Sub-category choice is only offered once a main category is set.
    pub fn sub_category_enabled(&self) -> bool {
        !self.fields.main_category.is_empty()
    }

    pub fn select_main_category(&mut self, main: &str, index: &CategoryIndex<'_>) {
        self.available_subs = index.subs_of(main).to_vec();
        self.fields.main_category = main.to_string();
        self.fields.sub_category.clear();
        self.fields.color = match &self.policy {
            ColorPolicy::InheritCategory => index.color_of(main)
                .filter(|c| !c.is_empty())
                .unwrap_or(DEFAULT_COLOR)
                .to_string(),
            ColorPolicy::Fixed(color) => color.clone()
        };
    }

    pub fn select_sub_category(&mut self, sub: &str) {
        self.fields.sub_category = sub.to_string();
    }

    pub fn set_icon(&mut self, icon: &str) {
        self.fields.icon = icon.to_string();
    }

    pub fn reset(&mut self) {
        self.fields = blank_draft();
        self.available_subs.clear();
    }

    /// Validates an add form and returns the draft, leaving the form reset.
    pub fn submit_add(&mut self, rules: &PlatformRules) -> Result<PlatformDraft, DashboardError> {
        check_platform_fields(&self.fields, rules.add_requires_sub_category)?;

        let draft = self.fields.clone();
        self.reset();
        Ok(draft)
    }

    /// Validates an edit form and returns the replacement platform.
    pub fn submit_edit(&self, rules: &PlatformRules) -> Result<Platform, DashboardError> {
        let id = self.editing.clone()
            .ok_or_else(|| DashboardError::validation("form is not editing a platform".to_string()))?;
        check_platform_fields(&self.fields, rules.update_requires_sub_category)?;

        Ok(self.fields.clone().into_platform(id))
    }
}
