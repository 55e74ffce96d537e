//! Hero carousel component
//!
//! Full-width rotating hero: cross-fading slides under a dark wash, the
//! brand headline, and (with more than one slide) arrow navigation,
//! indicator dots, and a numeric counter. Hover anywhere over the hero
//! pauses autoplay.

use iced::widget::{Space, button, column, container, image, mouse_area, row, stack, svg, text};
use iced::{Alignment, Color, ContentFit, Element, Fill, Padding};

use crate::app::Message;
use crate::i18n::{Key, Locale};
use crate::ui::theme::{self, LIGHT_WEIGHT, MEDIUM_WEIGHT};
use crate::ui::icons;
use crate::ui::widgets::Carousel;

pub const HERO_HEIGHT: f32 = 660.0;

const INDICATOR_SIZE: f32 = 8.0;
const INDICATOR_ACTIVE_WIDTH: f32 = 32.0;
const INDICATOR_SPACING: f32 = 8.0;

/// Build the hero carousel component
pub fn view<'a>(
    carousel: &'a Carousel,
    fade: &'a iced::animation::Animation<bool>,
    locale: Locale,
    reduce_motion: bool,
) -> Element<'a, Message> {
    let now = iced::time::Instant::now();
    let progress = if reduce_motion {
        1.0
    } else {
        fade.interpolate(0.0_f32, 1.0_f32, now)
    };

    // Slide layers. Every slide stays in the layout: inactive ones fully
    // transparent at the bottom, the previous slide under the fading-in
    // current one so the cross-fade has something to blend over.
    let mut layers: Vec<Element<'a, Message>> = vec![
        container(Space::new().width(Fill).height(HERO_HEIGHT))
            .width(Fill)
            .height(HERO_HEIGHT)
            .style(theme::hero_surface)
            .into(),
    ];

    let (current, last) = (carousel.current(), carousel.last());
    for (index, path) in carousel.images().iter().enumerate() {
        if index != current && index != last {
            layers.push(slide(path, 0.0));
        }
    }
    if last != current {
        layers.push(slide(&carousel.images()[last], 1.0));
    }
    layers.push(slide(&carousel.images()[current], progress));

    // Dark wash so the headline stays readable over any slide
    layers.push(
        container(Space::new().width(Fill).height(HERO_HEIGHT))
            .width(Fill)
            .height(HERO_HEIGHT)
            .style(theme::hero_overlay)
            .into(),
    );

    // Centered headline and the disabled call-to-action pill
    let headline = column![
        text(locale.get(Key::HeroTitle))
            .size(44)
            .font(iced::Font {
                weight: LIGHT_WEIGHT,
                ..Default::default()
            })
            .color(Color::WHITE)
            .align_x(Alignment::Center),
        Space::new().height(32),
        button(
            text(locale.get(Key::ComingSoon))
                .size(11)
                .font(iced::Font {
                    weight: MEDIUM_WEIGHT,
                    ..Default::default()
                })
        )
        .padding(Padding::new(10.0).left(20).right(20))
        .style(theme::coming_soon_button),
    ]
    .align_x(Alignment::Center);

    layers.push(
        container(headline)
            .width(Fill)
            .height(HERO_HEIGHT)
            .align_x(Alignment::Center)
            .align_y(Alignment::Center)
            .into(),
    );

    // Navigation chrome only exists with more than one slide
    if carousel.has_multiple() {
        layers.push(bottom_chrome(carousel));
        layers.push(nav_arrows());
    }

    let stacked = stack(layers).width(Fill).height(HERO_HEIGHT);

    mouse_area(stacked)
        .on_enter(Message::HeroHovered(true))
        .on_exit(Message::HeroHovered(false))
        .into()
}

/// A single slide image layer
fn slide<'a>(path: &str, opacity: f32) -> Element<'a, Message> {
    image(image::Handle::from_path(path))
        .width(Fill)
        .height(HERO_HEIGHT)
        .content_fit(ContentFit::Cover)
        .opacity(opacity)
        .into()
}

/// Indicator dots (center) and the slide counter (right) over a scrim
fn bottom_chrome<'a>(carousel: &'a Carousel) -> Element<'a, Message> {
    let dots: Element<'a, Message> = row(carousel
        .images()
        .iter()
        .enumerate()
        .map(|(i, _)| {
            let is_active = i == carousel.current();
            let width = if is_active {
                INDICATOR_ACTIVE_WIDTH
            } else {
                INDICATOR_SIZE
            };
            button(Space::new().width(width).height(INDICATOR_SIZE))
                .padding(0)
                .style(theme::indicator_button(is_active))
                .on_press(Message::HeroJump(i))
                .into()
        })
        .collect::<Vec<_>>())
    .spacing(INDICATOR_SPACING)
    .align_y(Alignment::Center)
    .into();

    let counter = text(format!(
        "{}/{}",
        carousel.current() + 1,
        carousel.len()
    ))
    .size(12)
    .color(Color::from_rgba(1.0, 1.0, 1.0, 0.6));

    let bottom_row = row![
        Space::new().width(Fill),
        dots,
        Space::new().width(Fill),
        counter,
    ]
    .align_y(Alignment::Center)
    .padding(Padding::new(0.0).left(32.0).right(32.0));

    container(
        column![Space::new().height(Fill), bottom_row].padding(Padding::new(24.0).bottom(32.0)),
    )
    .width(Fill)
    .height(HERO_HEIGHT)
    .style(theme::hero_scrim)
    .into()
}

/// Previous/next arrow overlay
fn nav_arrows<'a>() -> Element<'a, Message> {
    let arrow = |icon: &'static str, delta: i32| {
        button(
            svg(svg::Handle::from_memory(icon.as_bytes()))
                .width(20)
                .height(20)
                .style(|_theme, _status| svg::Style {
                    color: Some(Color::WHITE),
                }),
        )
        .padding(14)
        .style(theme::carousel_nav_button)
        .on_press(Message::HeroNavigate(delta))
    };

    row![
        container(arrow(icons::CHEVRON_LEFT, -1))
            .height(HERO_HEIGHT)
            .align_y(Alignment::Center)
            .padding(Padding::new(0.0).left(32.0)),
        Space::new().width(Fill),
        container(arrow(icons::CHEVRON_RIGHT, 1))
            .height(HERO_HEIGHT)
            .align_y(Alignment::Center)
            .padding(Padding::new(0.0).right(32.0)),
    ]
    .width(Fill)
    .height(HERO_HEIGHT)
    .into()
}
