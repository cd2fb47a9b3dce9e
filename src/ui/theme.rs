//! Shade (light/dark) and color theme switching

use crate::surface::{ElementRef, RenderSurface};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Light/dark preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ShadeTheme {
    /// Follow the system preference
    #[default]
    Auto,
    /// Always light
    Light,
    /// Always dark
    Dark,
}

impl ShadeTheme {
    pub fn as_str(self) -> &'static str {
        match self {
            ShadeTheme::Auto => "auto",
            ShadeTheme::Light => "light",
            ShadeTheme::Dark => "dark",
        }
    }
}

impl fmt::Display for ShadeTheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error parsing a [`ShadeTheme`]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown shade theme: {0:?} (expected auto, light or dark)")]
pub struct ParseShadeError(String);

impl FromStr for ShadeTheme {
    type Err = ParseShadeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "auto" => Ok(ShadeTheme::Auto),
            "light" => Ok(ShadeTheme::Light),
            "dark" => Ok(ShadeTheme::Dark),
            _ => Err(ParseShadeError(s.to_string())),
        }
    }
}

/// Named color palette of the page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColorTheme(String);

impl ColorTheme {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

impl Default for ColorTheme {
    fn default() -> Self {
        Self("green".to_string())
    }
}

/// Switch the page shade
///
/// The transition animates from `center`, or from the element with id
/// `fallback_center_id` when no center is given or it no longer exists.
pub fn change_shade_theme(
    surface: &mut dyn RenderSurface,
    target: ShadeTheme,
    center: Option<ElementRef>,
    fallback_center_id: &str,
) -> bool {
    let center = center
        .filter(|element| surface.inner_html(*element).is_some())
        .or_else(|| surface.element_by_id(fallback_center_id));
    surface.toggle_shade(target, center)
}

/// Switch the page color theme, defaulting to green
pub fn change_color_theme(surface: &mut dyn RenderSurface, target: Option<ColorTheme>) {
    let theme = target.unwrap_or_default();
    log::debug!("Switching color theme to {}", theme.name());
    surface.set_color_theme(&theme);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::{MemoryElement, MemorySurface};

    #[test]
    fn test_parse_shade() {
        assert_eq!("dark".parse::<ShadeTheme>(), Ok(ShadeTheme::Dark));
        assert_eq!(" Light ".parse::<ShadeTheme>(), Ok(ShadeTheme::Light));
        assert!("sepia".parse::<ShadeTheme>().is_err());
    }

    #[test]
    fn test_shade_falls_back_to_default_center() {
        let mut surface = MemorySurface::new();
        let switcher = surface.push(MemoryElement::new("").with_id("explorerSwitcher"));

        assert!(change_shade_theme(&mut surface, ShadeTheme::Dark, None, "explorerSwitcher"));
        assert_eq!(surface.shade, ShadeTheme::Dark);
        assert_eq!(surface.shade_origin, Some(switcher));

        // A stale handle is treated like no center at all.
        change_shade_theme(&mut surface, ShadeTheme::Light, Some(ElementRef(99)), "explorerSwitcher");
        assert_eq!(surface.shade_origin, Some(switcher));
    }

    #[test]
    fn test_shade_uses_given_center() {
        let mut surface = MemorySurface::new();
        surface.push(MemoryElement::new("").with_id("explorerSwitcher"));
        let button = surface.push(MemoryElement::new("btn"));

        change_shade_theme(&mut surface, ShadeTheme::Dark, Some(button), "explorerSwitcher");
        assert_eq!(surface.shade_origin, Some(button));
    }

    #[test]
    fn test_color_theme_default() {
        let mut surface = MemorySurface::new();
        surface.color_theme = ColorTheme::new("red");
        change_color_theme(&mut surface, None);
        assert_eq!(surface.color_theme.name(), "green");

        change_color_theme(&mut surface, Some(ColorTheme::new("blue")));
        assert_eq!(surface.color_theme.name(), "blue");
    }

    #[test]
    fn test_shade_serde_lowercase() {
        assert_eq!(serde_json::to_string(&ShadeTheme::Dark).unwrap(), "\"dark\"");
        assert_eq!(serde_json::to_string(&ColorTheme::default()).unwrap(), "\"green\"");
    }
}
