//! Internationalization (i18n) module for the Joyous Menu Editor
//!
//! Resolves translation keys for the UI:
//! - `dictionary`: JSON translation trees and dotted-key lookup
//! - `placeholder`: `%name%` substitution and HTML escaping
//! - `translator`: active/default resolution with fallback
//! - `source`: filesystem and HTTP resource fetching
//! - `loader`: installing fetched resources, degrading on failure
//! - `refresh`: filling marked elements of a rendering surface

pub mod dictionary;
pub mod loader;
pub mod placeholder;
pub mod refresh;
pub mod source;
pub mod translator;

pub use dictionary::Dictionary;
pub use loader::{LoadOutcome, Loader};
pub use placeholder::{escape_html, Params};
pub use refresh::{refresh, refresh_with, RefreshTarget};
pub use source::{FsSource, HttpSource, TranslationSource};
pub use translator::{LoadTicket, Translator};
