//! Settings update handlers

use iced::Task;

use crate::app::message::Message;
use crate::app::state::App;
use crate::i18n::Locale;

impl App {
    /// Handle settings-related messages
    pub fn handle_settings(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::ToggleLanguage => {
                let language = self.core.locale.language.toggled();
                self.core.locale = Locale::new(language);
                self.core.settings.display.language = language.code().to_string();
                tracing::info!("Language changed to: {}", language.code());
                Some(Task::perform(async { Message::SaveSettings }, |m| m))
            }

            Message::SaveSettings => {
                if let Err(e) = self.core.settings.save() {
                    tracing::error!("Failed to save settings: {}", e);
                } else {
                    tracing::info!("Settings saved successfully");
                }
                Some(Task::none())
            }

            _ => None,
        }
    }
}
