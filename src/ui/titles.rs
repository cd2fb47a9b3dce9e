//! Window and in-page title handling
//!
//! The document title reads `"{title} - {product}"` and the in-page title element
//! shows just the title; both fall back to the product name when no title is set.

use crate::i18n::{Params, Translator};
use crate::surface::RenderSurface;

/// Updates the document title and the in-page title element
#[derive(Debug, Clone)]
pub struct TitleBar {
    /// Translation key of the product name
    app_name_key: String,
    /// Id of the in-page title element
    page_title_id: String,
}

impl TitleBar {
    pub fn new(app_name_key: impl Into<String>, page_title_id: impl Into<String>) -> Self {
        Self {
            app_name_key: app_name_key.into(),
            page_title_id: page_title_id.into(),
        }
    }

    /// Product name in the current locale, escaped for markup
    pub fn app_name(&self, translator: &Translator) -> String {
        translator.resolve_safe(&self.app_name_key, &Params::new())
    }

    /// Set both titles
    pub fn set_title(
        &self,
        translator: &Translator,
        surface: &mut dyn RenderSurface,
        title: Option<&str>,
    ) {
        self.set_ui_title(translator, surface, title);
        self.set_page_title(translator, surface, title);
    }

    /// Set the document title only
    pub fn set_ui_title(
        &self,
        translator: &Translator,
        surface: &mut dyn RenderSurface,
        title: Option<&str>,
    ) {
        let app = self.app_name(translator);
        let text = match non_empty(title) {
            Some(title) => format!("{} - {}", title, app),
            None => app,
        };
        surface.set_document_title(&text);
    }

    /// Set the in-page title element only
    pub fn set_page_title(
        &self,
        translator: &Translator,
        surface: &mut dyn RenderSurface,
        title: Option<&str>,
    ) {
        let Some(element) = surface.element_by_id(&self.page_title_id) else {
            log::warn!("Title element #{} not found", self.page_title_id);
            return;
        };
        let text = match non_empty(title) {
            Some(title) => title.to_string(),
            None => self.app_name(translator),
        };
        surface.set_inner_html(element, &text);
    }
}

impl Default for TitleBar {
    fn default() -> Self {
        Self::new("product.name", "ui-title")
    }
}

fn non_empty(title: Option<&str>) -> Option<&str> {
    title.filter(|t| !t.is_empty())
}
