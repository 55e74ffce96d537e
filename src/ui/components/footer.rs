//! Footer: centered wordmark over the copyright line

use iced::widget::{Space, column, container, svg, text};
use iced::{Alignment, Color, Element, Fill, Padding};

use crate::app::Message;
use crate::i18n::{Key, Locale};
use crate::ui::icons;
use crate::ui::theme::{self, LIGHT_WEIGHT};

pub fn view<'a>(locale: Locale) -> Element<'a, Message> {
    let wordmark = svg(svg::Handle::from_memory(icons::WORDMARK.as_bytes()))
        .width(203)
        .height(44)
        .style(|_theme, _status| svg::Style {
            color: Some(Color::WHITE),
        });

    let copyright = text(locale.get(Key::FooterRights))
        .size(14)
        .font(iced::Font {
            weight: LIGHT_WEIGHT,
            ..Default::default()
        })
        .color(theme::TEXT_SECONDARY);

    container(
        column![wordmark, Space::new().height(96), copyright].align_x(Alignment::Center),
    )
    .width(Fill)
    .align_x(Alignment::Center)
    .padding(Padding::new(120.0).left(64.0).right(64.0))
    .style(theme::footer)
    .into()
}
