//! UI helpers built on the rendering surface
//!
//! - `titles`: document and in-page title
//! - `notification`: snackbar messages
//! - `theme`: shade and color theme switching

pub mod notification;
pub mod theme;
pub mod titles;

pub use notification::{AutoClose, Notification, NotificationAction, NotificationKind, Placement};
pub use theme::{change_color_theme, change_shade_theme, ColorTheme, ShadeTheme};
pub use titles::TitleBar;
