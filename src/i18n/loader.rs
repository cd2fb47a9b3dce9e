//! Translation loading
//!
//! Fetches locale resources through a [`TranslationSource`] and installs them as the
//! translator's active dictionary. A failed load never surfaces to the caller: the
//! active dictionary is reset to empty so every lookup falls back to the default.

use super::dictionary::Dictionary;
use super::source::TranslationSource;
use super::translator::Translator;
use crate::error::{I18nError, I18nResult};
use std::sync::Arc;

/// Outcome of a call to [`Loader::load`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The resource was installed as the active dictionary
    Loaded,
    /// The load failed and the active dictionary was reset to empty
    Reset,
    /// A newer load started meanwhile; this result was discarded
    Superseded,
}

/// Loads locale resources into a shared translator
#[derive(Clone)]
pub struct Loader {
    translator: Arc<Translator>,
    source: Arc<dyn TranslationSource>,
}

impl Loader {
    pub fn new(translator: Arc<Translator>, source: Arc<dyn TranslationSource>) -> Self {
        Self { translator, source }
    }

    /// The translator this loader feeds
    pub fn translator(&self) -> &Arc<Translator> {
        &self.translator
    }

    /// Fetch and parse a dictionary without installing it
    pub async fn fetch(&self, locale: &str) -> I18nResult<Dictionary> {
        fetch_dictionary(self.source.as_ref(), locale).await
    }

    /// Load a locale as the active dictionary
    ///
    /// Supersedes any load still in flight. On failure the active dictionary is
    /// reset to empty and the error is logged.
    pub async fn load(&self, locale: &str) -> LoadOutcome {
        let ticket = self.translator.begin_load();

        let (installed, outcome) = match self.fetch(locale).await {
            Ok(dictionary) => (
                self.translator.commit(ticket, Some(locale), dictionary),
                LoadOutcome::Loaded,
            ),
            Err(err) => {
                let installed = self.translator.commit(ticket, None, Dictionary::new());
                if installed {
                    log::error!(
                        "Failed to load translations '{}', falling back to '{}': {}",
                        locale,
                        self.translator.default_locale(),
                        err
                    );
                }
                (installed, LoadOutcome::Reset)
            }
        };

        if !installed {
            log::debug!("Discarding superseded translation load for '{}'", locale);
            return LoadOutcome::Superseded;
        }
        if outcome == LoadOutcome::Loaded {
            log::debug!("Loaded translations for '{}'", locale);
        }
        outcome
    }

    /// Load the immutable fallback dictionary
    ///
    /// Unlike [`Loader::load`] a failure is returned, since without a default
    /// dictionary there is nothing left to fall back to.
    pub async fn load_default(
        source: &dyn TranslationSource,
        locale: &str,
    ) -> I18nResult<Dictionary> {
        fetch_dictionary(source, locale)
            .await
            .map_err(|source| I18nError::MissingDefault {
                locale: locale.to_string(),
                source: Box::new(source),
            })
    }
}

async fn fetch_dictionary(source: &dyn TranslationSource, locale: &str) -> I18nResult<Dictionary> {
    let bytes = source.fetch(locale).await?;
    Dictionary::from_slice(locale, &bytes)
}
