pub mod platform_form;
pub mod category_form;
pub mod sub_category_form;

pub use category_form::CategoryForm;
pub use platform_form::{ColorPolicy, PlatformForm};
pub use sub_category_form::SubCategoryForm;
