//! Translation dictionaries
//!
//! A dictionary is a JSON object tree whose leaves are translation templates.
//! Leaves may be strings, numbers or booleans; anything else is not a template.

use crate::error::{I18nError, I18nResult};
use serde_json::{Map, Number, Value};

/// Tree of translation templates addressed by dotted keys
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dictionary {
    root: Map<String, Value>,
}

impl Dictionary {
    /// Create an empty dictionary
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap an already-parsed JSON value, which must be an object
    pub fn from_value(locale: &str, value: Value) -> I18nResult<Self> {
        match value {
            Value::Object(root) => Ok(Self { root }),
            _ => Err(I18nError::NotAnObject {
                locale: locale.to_string(),
            }),
        }
    }

    /// Parse a UTF-8 JSON payload
    pub fn from_slice(locale: &str, bytes: &[u8]) -> I18nResult<Self> {
        let value: Value =
            serde_json::from_slice(bytes).map_err(|source| I18nError::MalformedResource {
                locale: locale.to_string(),
                source,
            })?;
        Self::from_value(locale, value)
    }

    /// Parse a JSON string
    pub fn from_json(locale: &str, json: &str) -> I18nResult<Self> {
        Self::from_slice(locale, json.as_bytes())
    }

    /// Whether the dictionary has no entries at all
    pub fn is_empty(&self) -> bool {
        self.root.is_empty()
    }

    /// Walk a dotted path, returning the node it addresses
    ///
    /// A missing segment at any depth, or a `null` node, is "not found".
    pub fn lookup(&self, key: &str) -> Option<&Value> {
        let mut segments = key.split('.');
        let first = segments.next()?;
        let mut node = self.root.get(first)?;
        for segment in segments {
            node = node.as_object()?.get(segment)?;
        }
        if node.is_null() {
            None
        } else {
            Some(node)
        }
    }

    /// Whether the key addresses a node in this dictionary
    pub fn contains(&self, key: &str) -> bool {
        self.lookup(key).is_some()
    }
}

/// String form of a leaf; nested objects and arrays are not templates
pub(crate) fn template_text(node: &Value) -> Option<String> {
    match node {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(number_text(n)),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Natural display form of a JSON number
///
/// Integral floats print without a fractional part and `-0` prints as `0`.
pub(crate) fn number_text(n: &Number) -> String {
    if n.is_i64() || n.is_u64() {
        return n.to_string();
    }
    match n.as_f64() {
        Some(f) if f == 0.0 => "0".to_string(),
        Some(f) if f.is_finite() && f.fract() == 0.0 && f.abs() < 1e21 => format!("{:.0}", f),
        Some(f) => f.to_string(),
        None => n.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> Dictionary {
        Dictionary::from_value(
            "zh_cn",
            json!({
                "ui": { "title": "Hello %param1%", "nested": { "deep": "x" } },
                "count": 3,
                "flag": true,
                "nothing": null
            }),
        )
        .unwrap()
    }

    #[test]
    fn test_lookup_dotted_path() {
        let dict = sample();
        assert_eq!(dict.lookup("ui.title"), Some(&json!("Hello %param1%")));
        assert_eq!(dict.lookup("ui.nested.deep"), Some(&json!("x")));
    }

    #[test]
    fn test_lookup_missing_segment() {
        let dict = sample();
        assert!(dict.lookup("ui.missing").is_none());
        assert!(dict.lookup("ui.title.more").is_none());
        assert!(dict.lookup("absent").is_none());
        assert!(dict.lookup("").is_none());
    }

    #[test]
    fn test_null_is_not_found() {
        assert!(!sample().contains("nothing"));
    }

    #[test]
    fn test_template_text_coercion() {
        let dict = sample();
        assert_eq!(template_text(dict.lookup("count").unwrap()).as_deref(), Some("3"));
        assert_eq!(template_text(dict.lookup("flag").unwrap()).as_deref(), Some("true"));
        assert!(template_text(dict.lookup("ui").unwrap()).is_none());
    }

    #[test]
    fn test_number_text_natural_form() {
        let dict = Dictionary::from_json(
            "en_us",
            r#"{"a": 1.0, "b": 1e2, "c": -0.0, "d": 2.5, "e": -7, "f": 18446744073709551615}"#,
        )
        .unwrap();
        let text = |key: &str| template_text(dict.lookup(key).unwrap()).unwrap();
        assert_eq!(text("a"), "1");
        assert_eq!(text("b"), "100");
        assert_eq!(text("c"), "0");
        assert_eq!(text("d"), "2.5");
        assert_eq!(text("e"), "-7");
        assert_eq!(text("f"), "18446744073709551615");
    }

    #[test]
    fn test_parse_errors() {
        let err = Dictionary::from_json("en_us", "{ not json").unwrap_err();
        assert!(matches!(err, I18nError::MalformedResource { .. }));

        let err = Dictionary::from_json("en_us", "[1, 2]").unwrap_err();
        assert!(matches!(err, I18nError::NotAnObject { .. }));
    }
}
