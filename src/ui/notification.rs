//! Lightweight snackbar notifications
//!
//! A [`Notification`] is built up front and handed to the rendering surface.
//! Its action button, when present, dispatches a named command on click.

use crate::config::DEFAULT_NOTIFICATION_DURATION_MS;
use crate::surface::RenderSurface;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Visual style of a notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    #[default]
    None,
    Info,
    Success,
    Warning,
    Error,
}

/// Where the notification appears
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Placement {
    #[default]
    Auto,
    Top,
    Bottom,
}

/// When the notification closes by itself
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AutoClose {
    /// Close after the given delay
    After(#[serde(with = "millis")] Duration),
    /// Stay until dismissed
    Never,
}

impl AutoClose {
    /// Non-positive delays keep the notification open
    pub fn from_millis(ms: i64) -> Self {
        match u64::try_from(ms) {
            Ok(ms) if ms > 0 => AutoClose::After(Duration::from_millis(ms)),
            _ => AutoClose::Never,
        }
    }
}

impl Default for AutoClose {
    fn default() -> Self {
        AutoClose::After(Duration::from_millis(DEFAULT_NOTIFICATION_DURATION_MS))
    }
}

/// Confirmation button of a notification
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationAction {
    /// Button label
    pub text: String,
    /// Command dispatched when the button is clicked
    pub command: Option<String>,
}

/// A snackbar message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub text: String,
    pub kind: NotificationKind,
    pub action: Option<NotificationAction>,
    pub auto_close: AutoClose,
    pub placement: Placement,
    pub icon: Option<String>,
}

impl Notification {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: NotificationKind::default(),
            action: None,
            auto_close: AutoClose::default(),
            placement: Placement::default(),
            icon: None,
        }
    }

    /// Shorthand for an error notification
    pub fn error(text: impl Into<String>) -> Self {
        Self::new(text).kind(NotificationKind::Error)
    }

    pub fn kind(mut self, kind: NotificationKind) -> Self {
        self.kind = kind;
        self
    }

    /// Add a button without a command
    pub fn button(mut self, text: impl Into<String>) -> Self {
        self.action = Some(NotificationAction {
            text: text.into(),
            command: None,
        });
        self
    }

    /// Add a button that dispatches `command` when clicked
    pub fn action(mut self, text: impl Into<String>, command: impl Into<String>) -> Self {
        self.action = Some(NotificationAction {
            text: text.into(),
            command: Some(command.into()),
        });
        self
    }

    pub fn auto_close(mut self, auto_close: AutoClose) -> Self {
        self.auto_close = auto_close;
        self
    }

    pub fn placement(mut self, placement: Placement) -> Self {
        self.placement = placement;
        self
    }

    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Hand the notification to the surface, returning it for inspection
    pub fn show(self, surface: &mut dyn RenderSurface) -> Self {
        surface.show_notification(&self);
        self
    }
}

mod millis {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        let ms = u64::try_from(duration.as_millis()).unwrap_or(u64::MAX);
        serializer.serialize_u64(ms)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        u64::deserialize(deserializer).map(Duration::from_millis)
    }
}
