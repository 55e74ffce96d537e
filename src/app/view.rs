//! Application view rendering

use iced::widget::{column, container, scrollable, stack};
use iced::{Element, Fill};

use super::App;
use super::message::Message;
use crate::ui::{components, theme};

impl App {
    pub fn view(&self) -> Element<'_, Message> {
        let locale = self.core.locale;

        let content = scrollable(column![
            components::hero::view(
                &self.ui.hero,
                &self.ui.hero_fade,
                locale,
                self.core.settings.display.reduce_motion
                    || self.core.settings.display.power_saving_mode,
            ),
            components::footer::view(locale),
        ])
        .width(Fill)
        .height(Fill);

        // Navbar floats above the scrolling page, like the fixed header on
        // the original site
        let page = stack![content, components::navbar::view(locale)]
            .width(Fill)
            .height(Fill);

        container(page)
            .width(Fill)
            .height(Fill)
            .style(theme::page)
            .into()
    }
}
