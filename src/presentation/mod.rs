pub mod icons;
pub mod palette;
pub mod notifications;
pub mod render;

pub use icons::{Glyph, IconRegistry};
pub use notifications::{Notifications, Toast, ToastKind};
pub use palette::Palette;
