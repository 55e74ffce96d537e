//! Application state definitions

use iced::time::Instant;

use crate::features::Settings;
use crate::i18n::Locale;
use crate::ui::widgets::Carousel;

/// Main application state
pub struct App {
    /// Core infrastructure (settings, locale)
    pub core: CoreState,
    /// UI state (carousel, animations)
    pub ui: UiState,
}

/// Core infrastructure and services
pub struct CoreState {
    pub settings: Settings,
    pub locale: Locale,
}

impl CoreState {
    pub fn new(settings: Settings, locale: Locale) -> Self {
        Self { settings, locale }
    }
}

/// UI state
pub struct UiState {
    pub hero: Carousel,
    /// Cross-fade progress for the current slide
    pub hero_fade: iced::animation::Animation<bool>,
}

impl UiState {
    pub fn new(settings: &Settings) -> Self {
        // Power saving suppresses autoplay entirely; the carousel treats it
        // as autoplay being disabled
        let autoplay = crate::app::subscription_logic::effective_autoplay(
            settings.hero.autoplay,
            settings.display.power_saving_mode,
        );

        Self {
            hero: Carousel::new(
                settings.hero.images.clone(),
                autoplay,
                settings.hero.interval_ms,
            ),
            // Settled at fully visible so the first slide shows immediately
            hero_fade: iced::animation::Animation::new(true),
        }
    }

    pub fn has_active_animations(&self, now: Instant) -> bool {
        self.hero_fade.is_animating(now)
    }

    /// Restart the cross-fade after a slide transition
    pub fn start_hero_fade(&mut self, now: Instant) {
        self.hero_fade = iced::animation::Animation::new(false).slow();
        self.hero_fade.go_mut(true, now);
    }
}
