//! Keyboard message handlers

use iced::Task;
use iced::keyboard::key::Named;

use crate::app::message::Message;
use crate::app::state::App;

impl App {
    /// Handle keyboard-related messages
    pub fn handle_keyboard(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::KeyPressed(key, modifiers) => {
                if !modifiers.is_empty() {
                    return Some(Task::none());
                }
                match key.as_ref() {
                    iced::keyboard::Key::Named(Named::ArrowLeft) => {
                        Some(self.update(Message::HeroNavigate(-1)))
                    }
                    iced::keyboard::Key::Named(Named::ArrowRight) => {
                        Some(self.update(Message::HeroNavigate(1)))
                    }
                    _ => Some(Task::none()),
                }
            }

            _ => None,
        }
    }
}
