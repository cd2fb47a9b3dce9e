//! Rendering surface abstraction
//!
//! The front-end never touches a document directly. Everything it renders goes
//! through a [`RenderSurface`], which a browser host implements over the DOM and
//! which [`MemorySurface`] implements in memory for headless use and tests.

use crate::ui::notification::Notification;
use crate::ui::theme::{ColorTheme, ShadeTheme};
use std::collections::BTreeMap;

/// Handle to an element owned by a surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementRef(pub usize);

/// Document operations the front-end relies on
pub trait RenderSurface {
    /// All elements carrying the attribute, in document order
    fn query_by_attribute(&self, attribute: &str) -> Vec<ElementRef>;

    /// Element with the given id
    fn element_by_id(&self, id: &str) -> Option<ElementRef>;

    /// Attribute value of an element
    fn attribute(&self, element: ElementRef, name: &str) -> Option<String>;

    /// Markup content of an element
    fn inner_html(&self, element: ElementRef) -> Option<String>;

    /// Replace the markup content of an element
    fn set_inner_html(&mut self, element: ElementRef, html: &str);

    /// Set the document (window/tab) title
    fn set_document_title(&mut self, title: &str);

    /// Display a transient notification
    fn show_notification(&mut self, notification: &Notification);

    /// Switch light/dark shade, animating from `origin`; returns whether it changed
    fn toggle_shade(&mut self, target: ShadeTheme, origin: Option<ElementRef>) -> bool;

    /// Switch the color theme
    fn set_color_theme(&mut self, theme: &ColorTheme);

    /// Put the page into its "loading failed" state
    fn show_loading_error(&mut self, message: &str);
}

/// An element of a [`MemorySurface`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryElement {
    pub id: Option<String>,
    pub attributes: BTreeMap<String, String>,
    pub inner_html: String,
}

impl MemoryElement {
    pub fn new(inner_html: impl Into<String>) -> Self {
        Self {
            inner_html: inner_html.into(),
            ..Self::default()
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }
}

/// In-memory document
#[derive(Debug, Clone, Default)]
pub struct MemorySurface {
    elements: Vec<MemoryElement>,
    pub title: String,
    pub notifications: Vec<Notification>,
    pub shade: ShadeTheme,
    /// Origin of the last shade transition
    pub shade_origin: Option<ElementRef>,
    pub color_theme: ColorTheme,
    pub loading_error: Option<String>,
}

impl MemorySurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an element, returning its handle
    pub fn push(&mut self, element: MemoryElement) -> ElementRef {
        self.elements.push(element);
        ElementRef(self.elements.len() - 1)
    }

    pub fn element(&self, element: ElementRef) -> Option<&MemoryElement> {
        self.elements.get(element.0)
    }

    pub fn element_mut(&mut self, element: ElementRef) -> Option<&mut MemoryElement> {
        self.elements.get_mut(element.0)
    }
}

impl RenderSurface for MemorySurface {
    fn query_by_attribute(&self, attribute: &str) -> Vec<ElementRef> {
        self.elements
            .iter()
            .enumerate()
            .filter(|(_, e)| e.attributes.contains_key(attribute))
            .map(|(i, _)| ElementRef(i))
            .collect()
    }

    fn element_by_id(&self, id: &str) -> Option<ElementRef> {
        self.elements
            .iter()
            .position(|e| e.id.as_deref() == Some(id))
            .map(ElementRef)
    }

    fn attribute(&self, element: ElementRef, name: &str) -> Option<String> {
        self.element(element)?.attributes.get(name).cloned()
    }

    fn inner_html(&self, element: ElementRef) -> Option<String> {
        self.element(element).map(|e| e.inner_html.clone())
    }

    fn set_inner_html(&mut self, element: ElementRef, html: &str) {
        if let Some(e) = self.element_mut(element) {
            e.inner_html = html.to_string();
        }
    }

    fn set_document_title(&mut self, title: &str) {
        self.title = title.to_string();
    }

    fn show_notification(&mut self, notification: &Notification) {
        self.notifications.push(notification.clone());
    }

    fn toggle_shade(&mut self, target: ShadeTheme, origin: Option<ElementRef>) -> bool {
        self.shade_origin = origin;
        if self.shade == target {
            return false;
        }
        self.shade = target;
        true
    }

    fn set_color_theme(&mut self, theme: &ColorTheme) {
        self.color_theme = theme.clone();
    }

    fn show_loading_error(&mut self, message: &str) {
        self.loading_error = Some(message.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_by_attribute_in_order() {
        let mut surface = MemorySurface::new();
        let a = surface.push(MemoryElement::new("a").with_attribute("data-i18n", "x"));
        surface.push(MemoryElement::new("b"));
        let c = surface.push(MemoryElement::new("c").with_attribute("data-i18n", ""));

        assert_eq!(surface.query_by_attribute("data-i18n"), vec![a, c]);
        assert_eq!(surface.attribute(c, "data-i18n").as_deref(), Some(""));
    }

    #[test]
    fn test_element_by_id() {
        let mut surface = MemorySurface::new();
        surface.push(MemoryElement::new(""));
        let title = surface.push(MemoryElement::new("").with_id("ui-title"));

        assert_eq!(surface.element_by_id("ui-title"), Some(title));
        assert_eq!(surface.element_by_id("missing"), None);
    }

    #[test]
    fn test_toggle_shade_reports_change() {
        let mut surface = MemorySurface::new();
        assert!(surface.toggle_shade(ShadeTheme::Dark, None));
        assert!(!surface.toggle_shade(ShadeTheme::Dark, None));
    }
}
