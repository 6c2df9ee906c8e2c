use crate::catalog::Category;
use crate::error::DashboardError;
use crate::presentation::icons::search_icons;

pub const DEFAULT_CATEGORY_ICON: &str = "Star";
/// Colour given to every category created through the form.
pub const NEW_CATEGORY_COLOR: &str = "primary";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryForm {
    pub main: String,
    /// Comma separated sub-category names as typed.
    pub subs: String,
    pub icon: String,
    pub icon_search: String
}

impl Default for CategoryForm {
    fn default() -> Self {
        CategoryForm {
            main: String::new(),
            subs: String::new(),
            icon: DEFAULT_CATEGORY_ICON.to_string(),
            icon_search: String::new()
        }
    }
}

impl CategoryForm {
    pub fn icon_choices(&self) -> Vec<&'static str> {
        search_icons(&self.icon_search)
    }

    pub fn submit(&mut self) -> Result<Category, DashboardError> {
        let main = self.main.trim();
        if main.is_empty() {
            return Err(DashboardError::missing("category name"));
        }

        let category = Category {
            main: main.to_string(),
            subs: self.subs.split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect(),
            color: NEW_CATEGORY_COLOR.to_string(),
            icon: self.icon.clone()
        };

        *self = CategoryForm::default();
        Ok(category)
    }
}
