//! Main application module

mod message;
mod state;
mod update;
mod view;

use iced::time::{Duration, Instant};
use iced::{Subscription, Task, Theme};

use crate::i18n::{Language, Locale};
pub use message::Message;
pub use state::{App, CoreState, UiState};

impl App {
    /// Create new application instance
    pub fn new() -> (Self, Task<Message>) {
        // Load settings first so the locale and carousel come up configured
        let settings = crate::features::Settings::load();
        let locale = Locale::new(Language::from_code(&settings.display.language));

        let ui = UiState::new(&settings);
        tracing::info!(
            language = locale.language.code(),
            slides = ui.hero.len(),
            autoplay = ui.hero.autoplay_timer().is_some(),
            "Starting Arquantix showcase"
        );

        let core = CoreState::new(settings, locale);

        (Self { core, ui }, Task::none())
    }

    pub fn theme(&self) -> Theme {
        // The brand is dark-only
        Theme::Dark
    }

    pub fn title(&self) -> String {
        let name = self.core.locale.get(crate::i18n::Key::AppName);
        format!("{} - Coming Soon", name)
    }

    /// Subscriptions for the autoplay timer, cross-fade frames, and keyboard
    pub fn subscription(&self) -> Subscription<Message> {
        use iced::keyboard;

        let now = Instant::now();

        let reduce_motion = self.core.settings.display.reduce_motion
            || self.core.settings.display.power_saving_mode;

        // 1. Cross-fade animation frames, only while a fade is running
        let animation_sub = if subscription_logic::needs_animation_frames(
            reduce_motion,
            self.ui.has_active_animations(now),
        ) {
            iced::window::frames().map(|_| Message::AnimationTick)
        } else {
            Subscription::none()
        };

        // 2. Autoplay timer. The timer identity includes the carousel epoch,
        //    so manual navigation or a hover resume drops the old interval
        //    stream and arms a fresh one counting from now. iced reconciles
        //    identities on every update, which keeps at most one stream
        //    alive and releases it on teardown.
        let autoplay_sub = match self.ui.hero.autoplay_timer() {
            Some(timer) => Subscription::run_with(
                ("hero-autoplay", timer.epoch, timer.interval),
                |(_, _, interval)| autoplay_ticks(*interval),
            )
            .map(|_| Message::HeroTick),
            None => Subscription::none(),
        };

        // 3. Keyboard events (arrow-key navigation)
        let keyboard_sub = keyboard::listen().filter_map(|event| match event {
            keyboard::Event::KeyPressed { key, modifiers, .. } => {
                Some(Message::KeyPressed(key, modifiers))
            }
            _ => None,
        });

        Subscription::batch([animation_sub, autoplay_sub, keyboard_sub])
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new().0
    }
}

/// Repeating tick stream backing the autoplay subscription
fn autoplay_ticks(interval: Duration) -> impl futures_util::Stream<Item = ()> {
    futures_util::stream::unfold(None::<tokio::time::Interval>, move |ticker| async move {
        let mut ticker = match ticker {
            Some(ticker) => ticker,
            None => {
                let mut ticker = tokio::time::interval(interval);
                ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);
                // A tokio interval completes its first tick immediately;
                // swallow it so the first advance comes one full interval
                // after arming
                ticker.tick().await;
                ticker
            }
        };
        ticker.tick().await;
        Some(((), Some(ticker)))
    })
}

/// Subscription decision logic for testability
pub mod subscription_logic {
    /// Animation frames run only while a fade is in flight and motion is
    /// not disabled
    pub fn needs_animation_frames(reduce_motion: bool, fade_running: bool) -> bool {
        !reduce_motion && fade_running
    }

    /// Autoplay as the carousel sees it: the configured flag gated by
    /// power saving
    pub fn effective_autoplay(configured: bool, power_saving: bool) -> bool {
        configured && !power_saving
    }
}

#[cfg(test)]
mod tests {
    use super::subscription_logic::*;

    mod property_animation_frames {
        use super::*;

        #[test]
        fn frames_only_while_fading() {
            assert!(needs_animation_frames(false, true));
            assert!(!needs_animation_frames(false, false));
        }

        #[test]
        fn reduce_motion_suppresses_frames() {
            assert!(!needs_animation_frames(true, true));
            assert!(!needs_animation_frames(true, false));
        }
    }

    mod property_autoplay_gating {
        use super::*;

        #[test]
        fn power_saving_overrides_configuration() {
            assert!(effective_autoplay(true, false));
            assert!(!effective_autoplay(true, true));
            assert!(!effective_autoplay(false, false));
            assert!(!effective_autoplay(false, true));
        }
    }

    mod property_subscription_independence {
        use super::*;

        #[test]
        fn autoplay_independent_of_animation_state() {
            // The timer decision must not change with fade state
            for fade_running in [false, true] {
                let frames = needs_animation_frames(false, fade_running);
                let autoplay = effective_autoplay(true, false);
                assert!(autoplay, "autoplay unaffected by frames={frames}");
            }
        }
    }
}
