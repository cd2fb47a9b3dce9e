//! Translation resolver
//!
//! Owns the active and default dictionaries and turns keys into display text.
//! The active dictionary is only ever replaced in full, through a load ticket so
//! that a newer load always supersedes an older one still in flight.

use super::dictionary::{template_text, Dictionary};
use super::placeholder::{escape_html, substitute, Params};
use serde_json::Value;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, PoisonError, RwLock};

/// Ticket identifying one load of the active dictionary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket(u64);

/// Active dictionary together with the locale it came from
#[derive(Debug, Default)]
struct ActiveState {
    dictionary: Arc<Dictionary>,
    locale: Option<String>,
}

/// Resolves translation keys against an active and a default dictionary
#[derive(Debug)]
pub struct Translator {
    /// Fallback dictionary, fixed for the translator's lifetime
    default: Arc<Dictionary>,
    default_locale: String,
    active: RwLock<ActiveState>,
    /// Last ticket handed out by `begin_load`
    generation: AtomicU64,
}

impl Translator {
    /// Create a translator around its fallback dictionary with an empty active one
    pub fn new(default_locale: impl Into<String>, default: Dictionary) -> Self {
        Self {
            default: Arc::new(default),
            default_locale: default_locale.into(),
            active: RwLock::new(ActiveState::default()),
            generation: AtomicU64::new(0),
        }
    }

    /// Locale of the fallback dictionary
    pub fn default_locale(&self) -> &str {
        &self.default_locale
    }

    /// Locale of the current active dictionary, if one is loaded
    pub fn active_locale(&self) -> Option<String> {
        self.read_active().locale.clone()
    }

    /// Snapshot of the current active dictionary
    pub fn active(&self) -> Arc<Dictionary> {
        Arc::clone(&self.read_active().dictionary)
    }

    /// The fallback dictionary
    pub fn default_dictionary(&self) -> &Dictionary {
        &self.default
    }

    /// Whether the key resolves in either dictionary
    pub fn contains(&self, key: &str) -> bool {
        self.template(key).is_some()
    }

    /// Resolve a key, substituting parameters verbatim
    ///
    /// The returned text may contain markup from the template and from the
    /// parameters; use [`Translator::resolve_safe`] when parameters are untrusted.
    pub fn resolve(&self, key: &str, params: &Params) -> String {
        self.template(key)
            .map(|template| substitute(&template, params, str::to_string))
            .unwrap_or_default()
    }

    /// Resolve a key, HTML-escaping every parameter value
    pub fn resolve_safe(&self, key: &str, params: &Params) -> String {
        self.template(key)
            .map(|template| substitute(&template, params, escape_html))
            .unwrap_or_default()
    }

    /// Resolve with loosely typed parameters
    ///
    /// Parameters that are not a JSON object leave the template unsubstituted.
    pub fn resolve_json(&self, key: &str, params: &Value) -> String {
        match Params::from_json(params) {
            Some(params) => self.resolve(key, &params),
            None => self.template(key).unwrap_or_default(),
        }
    }

    /// Escaping counterpart of [`Translator::resolve_json`]
    pub fn resolve_safe_json(&self, key: &str, params: &Value) -> String {
        match Params::from_json(params) {
            Some(params) => self.resolve_safe(key, &params),
            None => self.template(key).unwrap_or_default(),
        }
    }

    /// Start a load, superseding any load still in flight
    pub fn begin_load(&self) -> LoadTicket {
        LoadTicket(self.generation.fetch_add(1, Ordering::SeqCst) + 1)
    }

    /// Install the result of a load if its ticket is still current
    ///
    /// `locale` is `None` when the load failed and the active dictionary is being
    /// reset. Returns `false` when the ticket was superseded and nothing changed.
    pub fn commit(&self, ticket: LoadTicket, locale: Option<&str>, dictionary: Dictionary) -> bool {
        let mut active = self.active.write().unwrap_or_else(PoisonError::into_inner);
        if self.generation.load(Ordering::SeqCst) != ticket.0 {
            return false;
        }
        *active = ActiveState {
            dictionary: Arc::new(dictionary),
            locale: locale.map(str::to_string),
        };
        true
    }

    /// Replace the active dictionary outside of a load
    pub fn set_active(&self, locale: &str, dictionary: Dictionary) {
        let ticket = self.begin_load();
        self.commit(ticket, Some(locale), dictionary);
    }

    fn read_active(&self) -> std::sync::RwLockReadGuard<'_, ActiveState> {
        self.active.read().unwrap_or_else(PoisonError::into_inner)
    }

    /// Template text for a key, active dictionary first
    fn template(&self, key: &str) -> Option<String> {
        let active = self.active();
        active
            .lookup(key)
            .or_else(|| self.default.lookup(key))
            .and_then(template_text)
            .filter(|text| !text.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn dictionary(value: Value) -> Dictionary {
        Dictionary::from_value("test", value).unwrap()
    }

    fn translator() -> Translator {
        let translator = Translator::new(
            "zh_cn",
            dictionary(json!({
                "product": { "name": "Joyous Menu Editor" },
                "ui": { "title": "Default title", "count": 7 },
                "only_default": "fallback"
            })),
        );
        translator.set_active(
            "en_us",
            dictionary(json!({
                "ui": {
                    "title": "Hello %param1%",
                    "greet": "Hi %n%",
                    "styled": "<i>%n%</i>",
                    "missing": "%param1% and %param2%"
                },
                "only_active": "active"
            })),
        );
        translator
    }

    #[test]
    fn test_resolve_active_first() {
        let t = translator();
        let params = Params::new().with("param1", "X");
        assert_eq!(t.resolve("ui.title", &params), "Hello X");
        assert_eq!(t.active_locale().as_deref(), Some("en_us"));
    }

    #[test]
    fn test_resolve_missing_param_left_verbatim() {
        let t = translator();
        let params = Params::new().with("param1", "X");
        assert_eq!(t.resolve("ui.missing", &params), "X and %param2%");
    }

    #[test]
    fn test_resolve_falls_back_to_default() {
        let t = translator();
        assert_eq!(t.resolve("only_default", &Params::new()), "fallback");
        assert_eq!(t.resolve("ui.count", &Params::new()), "7");
        assert_eq!(t.resolve("product.name", &Params::new()), "Joyous Menu Editor");
    }

    #[test]
    fn test_missing_everywhere_is_empty() {
        let t = translator();
        assert_eq!(t.resolve("no.such.key", &Params::new()), "");
        assert_eq!(t.resolve_safe("no.such.key", &Params::new()), "");
        assert!(!t.contains("no.such.key"));
    }

    #[test]
    fn test_nested_node_is_not_a_template() {
        let t = translator();
        assert_eq!(t.resolve("ui", &Params::new()), "");
    }

    #[test]
    fn test_resolve_safe_escapes_params_only() {
        let t = translator();
        let params = Params::new().with("n", "<b>");
        assert_eq!(t.resolve_safe("ui.greet", &params), "Hi &lt;b&gt;");
        assert_eq!(t.resolve_safe("ui.styled", &params), "<i>&lt;b&gt;</i>");
        assert_eq!(t.resolve("ui.styled", &params), "<i><b></i>");
    }

    #[test]
    fn test_non_object_params_leave_template() {
        let t = translator();
        assert_eq!(t.resolve_json("ui.greet", &json!("oops")), "Hi %n%");
        assert_eq!(t.resolve_safe_json("ui.greet", &json!(42)), "Hi %n%");
        assert_eq!(t.resolve_safe_json("ui.greet", &json!({ "n": "&" })), "Hi &amp;");
    }

    #[test]
    fn test_null_active_leaf_falls_back() {
        let t = Translator::new("zh_cn", dictionary(json!({ "k": "d" })));
        t.set_active("en_us", dictionary(json!({ "k": null })));
        assert_eq!(t.resolve("k", &Params::new()), "d");
        assert_eq!(t.resolve_safe("k", &Params::new()), "d");
    }

    #[test]
    fn test_numeric_leaves_and_params_render_naturally() {
        let t = Translator::new(
            "zh_cn",
            dictionary(json!({ "t": "v=%n%", "ratio": 1.0, "big": 1e2, "neg_zero": -0.0 })),
        );
        assert_eq!(t.resolve_json("t", &json!({ "n": 2.0 })), "v=2");
        assert_eq!(t.resolve("ratio", &Params::new()), "1");
        assert_eq!(t.resolve("big", &Params::new()), "100");
        assert_eq!(t.resolve("neg_zero", &Params::new()), "0");
    }

    #[test]
    fn test_stale_ticket_is_discarded() {
        let t = translator();
        let first = t.begin_load();
        let second = t.begin_load();

        assert!(t.commit(second, Some("ja_jp"), dictionary(json!({ "k": "second" }))));
        assert!(!t.commit(first, Some("fr_fr"), dictionary(json!({ "k": "first" }))));

        assert_eq!(t.resolve("k", &Params::new()), "second");
        assert_eq!(t.active_locale().as_deref(), Some("ja_jp"));
    }

    #[test]
    fn test_reset_keeps_default() {
        let t = translator();
        let ticket = t.begin_load();
        assert!(t.commit(ticket, None, Dictionary::new()));

        assert!(t.active().is_empty());
        assert_eq!(t.active_locale(), None);
        assert_eq!(t.resolve("only_active", &Params::new()), "");
        assert_eq!(t.resolve("only_default", &Params::new()), "fallback");
        assert_eq!(t.resolve("ui.title", &Params::new()), "Default title");
    }
}
