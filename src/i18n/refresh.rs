//! Document refresh pass
//!
//! Replaces the marker inside every element tagged for translation with the
//! resolved text of the element's key.

use super::placeholder::Params;
use super::translator::Translator;
use crate::surface::RenderSurface;

/// Attribute and marker a refresh pass works with
#[derive(Debug, Clone, Copy)]
pub struct RefreshTarget<'a> {
    pub attribute: &'a str,
    pub marker: &'a str,
}

impl Default for RefreshTarget<'static> {
    fn default() -> Self {
        Self {
            attribute: crate::config::DEFAULT_I18N_ATTRIBUTE,
            marker: crate::config::DEFAULT_MARKER,
        }
    }
}

/// Run a refresh pass with the default attribute and marker
pub fn refresh(translator: &Translator, surface: &mut dyn RenderSurface) -> usize {
    refresh_with(translator, surface, RefreshTarget::default())
}

/// Run a refresh pass, returning how many elements changed
///
/// The marker is consumed: once replaced, a second pass over the same content
/// finds nothing to do until the marker is inserted again.
pub fn refresh_with(
    translator: &Translator,
    surface: &mut dyn RenderSurface,
    target: RefreshTarget<'_>,
) -> usize {
    let params = Params::new();
    let mut changed = 0;

    for element in surface.query_by_attribute(target.attribute) {
        let key = match surface.attribute(element, target.attribute) {
            Some(key) if !key.is_empty() => key,
            _ => continue,
        };
        let Some(html) = surface.inner_html(element) else {
            continue;
        };
        if !html.contains(target.marker) {
            continue;
        }

        let text = translator.resolve(&key, &params);
        surface.set_inner_html(element, &html.replace(target.marker, &text));
        changed += 1;
    }

    log::debug!("Refreshed {} translated element(s)", changed);
    changed
}
