//! Front-end bootstrap and top-level state
//!
//! Startup order:
//! 1. Load the default dictionary; failure puts the page into its loading-error state
//! 2. Load the configured locale, if any, as the active dictionary
//! 3. Fill translated elements and set the initial title
//! 4. Apply the configured theme and wire click elements to commands

use crate::commands::{ClickBindings, CommandRegistry};
use crate::config::Config;
use crate::error::AppResult;
use crate::i18n::{self, LoadOutcome, Loader, RefreshTarget, TranslationSource, Translator};
use crate::surface::{ElementRef, RenderSurface};
use crate::ui::{self, AutoClose, Notification, NotificationKind, ShadeTheme, TitleBar};
use serde_json::Value;
use std::sync::Arc;

/// Running front-end
pub struct App {
    config: Config,
    loader: Loader,
    titles: TitleBar,
    commands: CommandRegistry,
    clicks: ClickBindings,
}

impl App {
    /// Start with the resource source named by the configuration
    pub async fn start(config: Config, surface: &mut dyn RenderSurface) -> AppResult<Self> {
        let source: Arc<dyn TranslationSource> =
            Arc::from(i18n::source::from_location(&config.i18n.resources));
        Self::bootstrap(config, source, surface).await
    }

    /// Start with an explicit resource source
    pub async fn bootstrap(
        config: Config,
        source: Arc<dyn TranslationSource>,
        surface: &mut dyn RenderSurface,
    ) -> AppResult<Self> {
        config.validate()?;
        log::info!("Starting Joyous Menu Editor front-end");

        let default_locale = config.i18n.default_locale.clone();
        let default = match Loader::load_default(source.as_ref(), &default_locale).await {
            Ok(default) => default,
            Err(err) => {
                log::error!("{}", err);
                surface.show_loading_error(&err.user_message());
                return Err(err.into());
            }
        };

        let translator = Arc::new(Translator::new(default_locale, default));
        let loader = Loader::new(translator, source);
        // Without a configured locale the active dictionary stays empty.
        if let Some(locale) = config.i18n.locale.clone() {
            loader.load(&locale).await;
        }

        let titles = TitleBar::new(&config.ui.app_name_key, &config.ui.page_title_id);
        let clicks = ClickBindings::bind(surface, &config.ui.click_attribute);
        let app = Self {
            config,
            loader,
            titles,
            commands: CommandRegistry::new(),
            clicks,
        };

        app.refresh(surface);
        app.set_title(surface, None);
        app.change_shade(surface, app.config.ui.shade, None);
        ui::change_color_theme(surface, Some(app.config.ui.color_theme.clone()));

        log::debug!("Bound {} click element(s)", app.clicks.len());
        Ok(app)
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn translator(&self) -> &Arc<Translator> {
        self.loader.translator()
    }

    pub fn loader(&self) -> &Loader {
        &self.loader
    }

    pub fn commands(&self) -> &CommandRegistry {
        &self.commands
    }

    pub fn commands_mut(&mut self) -> &mut CommandRegistry {
        &mut self.commands
    }

    /// Load another locale as the active dictionary and refill the page
    ///
    /// Only markers still present in the document are refilled.
    pub async fn load_locale(&self, surface: &mut dyn RenderSurface, locale: &str) -> LoadOutcome {
        let outcome = self.loader.load(locale).await;
        if outcome != LoadOutcome::Superseded {
            self.refresh(surface);
        }
        outcome
    }

    /// Run the refresh pass with the configured attribute and marker
    pub fn refresh(&self, surface: &mut dyn RenderSurface) -> usize {
        let target = RefreshTarget {
            attribute: &self.config.i18n.attribute,
            marker: &self.config.i18n.marker,
        };
        i18n::refresh_with(self.translator(), surface, target)
    }

    pub fn set_title(&self, surface: &mut dyn RenderSurface, title: Option<&str>) {
        self.titles.set_title(self.translator(), surface, title);
    }

    /// Re-scan the surface for click elements
    pub fn rebind_clicks(&mut self, surface: &dyn RenderSurface) {
        self.clicks = ClickBindings::bind(surface, &self.config.ui.click_attribute);
    }

    /// Route a click on an element to its command
    pub fn click(&self, element: ElementRef) -> Option<Value> {
        self.clicks.dispatch_click(&self.commands, element)
    }

    /// Show a notification with the configured lifetime
    pub fn notify(
        &self,
        surface: &mut dyn RenderSurface,
        text: impl Into<String>,
        kind: NotificationKind,
    ) -> Notification {
        let ms = i64::try_from(self.config.ui.notification_duration_ms).unwrap_or(i64::MAX);
        Notification::new(text)
            .kind(kind)
            .auto_close(AutoClose::from_millis(ms))
            .show(surface)
    }

    pub fn change_shade(
        &self,
        surface: &mut dyn RenderSurface,
        target: ShadeTheme,
        center: Option<ElementRef>,
    ) -> bool {
        ui::change_shade_theme(surface, target, center, &self.config.ui.animation_center_id)
    }
}

impl std::fmt::Debug for App {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("App")
            .field("config", &self.config)
            .field("translator", self.translator())
            .field("commands", &self.commands)
            .field("clicks", &self.clicks)
            .finish()
    }
}
