//! Fixed top navigation bar
//!
//! Wordmark on the left; language toggle and the disabled "Coming soon"
//! pill on the right.

use iced::widget::{Space, button, container, row, svg, text};
use iced::{Alignment, Color, Element, Fill, Padding};

use crate::app::Message;
use crate::i18n::{Key, Locale};
use crate::ui::icons;
use crate::ui::theme::{self, MEDIUM_WEIGHT};

pub const NAVBAR_HEIGHT: f32 = 80.0;

pub fn view<'a>(locale: Locale) -> Element<'a, Message> {
    let wordmark = svg(svg::Handle::from_memory(icons::WORDMARK.as_bytes()))
        .width(160)
        .height(36)
        .style(|_theme, _status| svg::Style {
            color: Some(Color::WHITE),
        });

    // Toggle shows the language you would switch to
    let language_toggle = button(
        text(locale.language.toggled().code().to_uppercase())
            .size(12)
            .font(iced::Font {
                weight: MEDIUM_WEIGHT,
                ..Default::default()
            }),
    )
    .padding(Padding::new(6.0).left(14).right(14))
    .style(theme::language_button)
    .on_press(Message::ToggleLanguage);

    let coming_soon = button(
        text(locale.get(Key::ComingSoon))
            .size(12)
            .font(iced::Font {
                weight: MEDIUM_WEIGHT,
                ..Default::default()
            }),
    )
    .padding(Padding::new(12.0).left(32).right(32))
    .style(theme::coming_soon_button);

    let bar = row![
        wordmark,
        Space::new().width(Fill),
        language_toggle,
        Space::new().width(16),
        coming_soon,
    ]
    .align_y(Alignment::Center)
    .padding(Padding::new(0.0).left(32.0).right(32.0));

    container(bar)
        .width(Fill)
        .height(NAVBAR_HEIGHT)
        .align_y(Alignment::Center)
        .style(theme::navbar)
        .into()
}
