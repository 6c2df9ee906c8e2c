use crate::error::DashboardError;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubCategoryForm {
    pub main: String,
    pub sub: String
}

impl SubCategoryForm {
    /// Returns the `(main, sub)` pair to add, with the sub name trimmed.
    pub fn submit(&mut self) -> Result<(String, String), DashboardError> {
        if self.main.is_empty() {
            return Err(DashboardError::missing("category"));
        }
        let sub = self.sub.trim();
        if sub.is_empty() {
            return Err(DashboardError::missing("sub category name"));
        }

        let submitted = (self.main.clone(), sub.to_string());
        *self = SubCategoryForm::default();
        Ok(submitted)
    }
}
