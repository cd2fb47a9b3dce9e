//! Joyous Menu Editor - front-end core
//!
//! Translation resolution and the small UI layer around it:
//! - `i18n`: dictionaries, loading, resolution with fallback and the refresh pass
//! - `surface`: the rendering surface the front-end draws through
//! - `ui`: titles, notifications and themes
//! - `commands`: command registry and click dispatch
//! - `app`: startup sequence tying everything together

pub mod app;
pub mod commands;
pub mod config;
pub mod error;
pub mod i18n;
pub mod surface;
pub mod ui;

pub use app::App;
pub use config::Config;
pub use error::{AppError, AppResult, ConfigError, I18nError};
pub use i18n::{Dictionary, Loader, Params, Translator};
pub use surface::{ElementRef, MemoryElement, MemorySurface, RenderSurface};
