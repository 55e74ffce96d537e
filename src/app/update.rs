//! Message update handlers - thin dispatcher delegating to submodules

mod hero;
mod keyboard;
mod settings;

use iced::Task;

use super::{App, Message};

impl App {
    /// Handle messages by delegating to appropriate submodule handlers
    pub fn update(&mut self, message: Message) -> Task<Message> {
        // Try each handler in order until one handles the message
        if let Some(task) = self.handle_hero(&message) {
            return task;
        }
        if let Some(task) = self.handle_keyboard(&message) {
            return task;
        }
        if let Some(task) = self.handle_settings(&message) {
            return task;
        }

        match message {
            // Animation frames only trigger a redraw; the view samples the
            // fade progress itself
            Message::AnimationTick => Task::none(),
            other => {
                tracing::debug!("Unhandled message: {:?}", other);
                Task::none()
            }
        }
    }
}
