//! Hero carousel update handlers

use iced::Task;

use crate::app::message::Message;
use crate::app::state::App;

impl App {
    /// Handle carousel-related messages
    pub fn handle_hero(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::HeroTick => {
                let now = iced::time::Instant::now();
                self.ui.hero.advance();
                self.ui.start_hero_fade(now);
                Some(Task::none())
            }

            Message::HeroNavigate(delta) => {
                let now = iced::time::Instant::now();
                if *delta < 0 {
                    self.ui.hero.previous();
                } else {
                    self.ui.hero.next();
                }
                self.ui.start_hero_fade(now);
                Some(Task::none())
            }

            Message::HeroJump(index) => {
                let now = iced::time::Instant::now();
                let changed = *index != self.ui.hero.current();
                // Jump always restarts the autoplay timer, even on the
                // active dot; the fade only replays on an actual change
                self.ui.hero.jump(*index);
                if changed {
                    self.ui.start_hero_fade(now);
                }
                Some(Task::none())
            }

            Message::HeroHovered(hovered) => {
                self.ui.hero.set_hovered(*hovered);
                Some(Task::none())
            }

            _ => None,
        }
    }
}
