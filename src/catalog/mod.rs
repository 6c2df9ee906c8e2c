pub mod platform;
pub mod category;
pub mod seed;

pub use category::Category;
pub use platform::{IdSource, Platform, PlatformDraft, PlatformId};
