//! Placeholder substitution and HTML escaping
//!
//! Templates carry `%name%` placeholders. Substitution replaces each one with the
//! matching parameter value, leaving unknown names untouched.

use super::dictionary::number_text;
use regex::{Captures, Regex};
use serde_json::Value;
use std::collections::BTreeMap;
use std::sync::LazyLock;

/// Shortest `%...%` run that does not cross a line terminator
static PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"%([^\r\n\x{2028}\x{2029}]*?)%").expect("placeholder pattern is valid")
});

/// Parameter values keyed by placeholder name
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params {
    values: BTreeMap<String, String>,
}

impl Params {
    /// Create an empty parameter map
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a parameter, stringifying its value
    pub fn with(mut self, name: impl Into<String>, value: impl ToString) -> Self {
        self.insert(name, value);
        self
    }

    /// Insert or replace a parameter
    pub fn insert(&mut self, name: impl Into<String>, value: impl ToString) {
        self.values.insert(name.into(), value.to_string());
    }

    /// Value bound to a placeholder name
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Build parameters from a JSON value
    ///
    /// Returns `None` unless the value is an object. Scalars keep their natural
    /// string form; `null` becomes `"null"` and nested values their JSON text.
    pub fn from_json(value: &Value) -> Option<Self> {
        let object = value.as_object()?;
        let values = object
            .iter()
            .map(|(name, value)| {
                let text = match value {
                    Value::String(s) => s.clone(),
                    Value::Number(n) => number_text(n),
                    other => other.to_string(),
                };
                (name.clone(), text)
            })
            .collect();
        Some(Self { values })
    }
}

impl<K: Into<String>, V: ToString> FromIterator<(K, V)> for Params {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Self::new();
        for (name, value) in iter {
            params.insert(name, value);
        }
        params
    }
}

/// Replace every known placeholder, passing values through `transform`
pub fn substitute<F>(template: &str, params: &Params, transform: F) -> String
where
    F: Fn(&str) -> String,
{
    if template.is_empty() {
        return String::new();
    }
    PLACEHOLDER
        .replace_all(template, |caps: &Captures| match params.get(&caps[1]) {
            Some(value) => transform(value),
            None => caps[0].to_string(),
        })
        .into_owned()
}

/// Escape the characters significant in HTML text and attribute values
pub fn escape_html(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn plain(value: &str) -> String {
        value.to_string()
    }

    #[test]
    fn test_substitute_known_and_unknown() {
        let params = Params::new().with("param1", "X");
        assert_eq!(
            substitute("Hello %param1% %param2%", &params, plain),
            "Hello X %param2%"
        );
    }

    #[test]
    fn test_substitute_repeated_placeholder() {
        let params = Params::new().with("n", 2);
        assert_eq!(substitute("%n% + %n%", &params, plain), "2 + 2");
    }

    #[test]
    fn test_substitute_shortest_match() {
        // "% of %" is consumed as an unknown placeholder, so "n%" stays literal.
        let params = Params::new().with("n", "5");
        assert_eq!(substitute("100% of %n%", &params, plain), "100% of %n%");
    }

    #[test]
    fn test_substitute_does_not_cross_lines() {
        let params = Params::new().with("a", "1");
        assert_eq!(substitute("50%\n%a%", &params, plain), "50%\n1");
    }

    #[test]
    fn test_substitute_stops_at_other_line_terminators() {
        let params = Params::new().with("a", "1");
        assert_eq!(substitute("50%\r%a%", &params, plain), "50%\r1");
        assert_eq!(substitute("50%\u{2028}%a%", &params, plain), "50%\u{2028}1");
    }

    #[test]
    fn test_empty_template() {
        assert_eq!(substitute("", &Params::new().with("a", 1), plain), "");
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<a href="x">Tom & 'Jerry'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#39;Jerry&#39;&lt;/a&gt;"
        );
    }

    #[test]
    fn test_params_from_json() {
        let params = Params::from_json(
            &json!({ "s": "a", "n": 1.5, "i": 2.0, "m": -0.0, "b": false, "z": null }),
        )
        .unwrap();
        assert_eq!(params.get("s"), Some("a"));
        assert_eq!(params.get("n"), Some("1.5"));
        assert_eq!(params.get("i"), Some("2"));
        assert_eq!(params.get("m"), Some("0"));
        assert_eq!(params.get("b"), Some("false"));
        assert_eq!(params.get("z"), Some("null"));

        assert!(Params::from_json(&json!("not an object")).is_none());
        assert!(Params::from_json(&json!([1, 2])).is_none());
    }
}
