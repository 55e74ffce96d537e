//! Theme system for the Arquantix showcase
//!
//! Brand palette: near-black neutrals with a bronze accent, white primary
//! text. The site is dark by design, so style functions ignore the iced
//! theme variant and key everything off the palette constants.

use iced::font::Weight;
use iced::widget::{button, container};
use iced::{Background, Border, Color, Gradient, Shadow, Theme, Vector, color, gradient};

// ============================================================================
// Color Palette
// ============================================================================

/// Page background (brand "neutral black")
pub const BACKGROUND: Color = color!(0x0a0c10);

/// Slightly lifted surface used behind the hero while slides load
pub const SURFACE: Color = color!(0x1a1d24);

/// Brand accent
pub const BRONZE: Color = color!(0xc6a47c);

pub const TEXT_PRIMARY: Color = Color::WHITE;
pub const TEXT_SECONDARY: Color = color!(0xe6e6e6);
pub const TEXT_MUTED: Color = color!(0x888888);

// ============================================================================
// Font weights
// ============================================================================

/// Bold weight (Semibold renders better with SF Pro on macOS)
#[cfg(target_os = "macos")]
pub const BOLD_WEIGHT: Weight = Weight::Semibold;
#[cfg(not(target_os = "macos"))]
pub const BOLD_WEIGHT: Weight = Weight::Bold;

#[cfg(target_os = "macos")]
pub const MEDIUM_WEIGHT: Weight = Weight::Medium;
#[cfg(not(target_os = "macos"))]
pub const MEDIUM_WEIGHT: Weight = Weight::Normal;

pub const LIGHT_WEIGHT: Weight = Weight::Light;

// ============================================================================
// Containers
// ============================================================================

/// Root page background
pub fn page(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(BACKGROUND)),
        text_color: Some(TEXT_PRIMARY),
        ..Default::default()
    }
}

/// Fixed top navigation bar (translucent black, hairline bottom border)
pub fn navbar(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: 0.8,
            ..BACKGROUND
        })),
        text_color: Some(TEXT_PRIMARY),
        border: Border {
            color: Color::from_rgba(1.0, 1.0, 1.0, 0.05),
            width: 1.0,
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Hero surface shown under the slides (covers image-load gaps)
pub fn hero_surface(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(SURFACE)),
        text_color: Some(TEXT_PRIMARY),
        ..Default::default()
    }
}

/// Dark wash over the slides so the headline stays legible
pub fn hero_overlay(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color::from_rgba(0.0, 0.0, 0.0, 0.6))),
        ..Default::default()
    }
}

/// Bottom scrim behind the indicator row
pub fn hero_scrim(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Gradient(Gradient::Linear(
            gradient::Linear::new(iced::Radians(std::f32::consts::PI))
                .add_stop(0.0, Color::TRANSPARENT)
                .add_stop(0.5, Color::TRANSPARENT)
                .add_stop(1.0, Color::from_rgba(0.0, 0.0, 0.0, 0.8)),
        ))),
        ..Default::default()
    }
}

pub fn footer(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(BACKGROUND)),
        text_color: Some(TEXT_SECONDARY),
        ..Default::default()
    }
}

// ============================================================================
// Buttons
// ============================================================================

/// Carousel navigation arrow (circular, semi-transparent dark)
pub fn carousel_nav_button(_theme: &Theme, status: button::Status) -> button::Style {
    let base = button::Style {
        background: Some(Background::Color(Color::from_rgba(0.0, 0.0, 0.0, 0.4))),
        text_color: Color::WHITE,
        border: Border {
            color: Color::from_rgba(1.0, 1.0, 1.0, 0.2),
            width: 1.0,
            radius: 24.0.into(),
        },
        ..Default::default()
    };

    match status {
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(Color::from_rgba(0.0, 0.0, 0.0, 0.6))),
            ..base
        },
        button::Status::Pressed => button::Style {
            background: Some(Background::Color(Color::from_rgba(0.0, 0.0, 0.0, 0.7))),
            ..base
        },
        _ => base,
    }
}

/// Bronze "Coming soon" pill. Disabled by design, so no hover variant.
pub fn coming_soon_button(_theme: &Theme, _status: button::Status) -> button::Style {
    button::Style {
        background: Some(Background::Color(BRONZE)),
        text_color: Color::WHITE,
        border: Border {
            radius: 20.0.into(),
            ..Default::default()
        },
        shadow: Shadow {
            color: Color::from_rgba(0.0, 0.0, 0.0, 0.3),
            offset: Vector::new(0.0, 2.0),
            blur_radius: 6.0,
        },
        ..Default::default()
    }
}

/// Indicator dot; the active dot is bronze, inactive ones faint white
pub fn indicator_button(active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme, status| {
        let color = if active {
            BRONZE
        } else if matches!(status, button::Status::Hovered) {
            Color::from_rgba(1.0, 1.0, 1.0, 0.5)
        } else {
            Color::from_rgba(1.0, 1.0, 1.0, 0.3)
        };
        button::Style {
            background: Some(Background::Color(color)),
            border: Border {
                radius: 4.0.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    }
}

/// Plain outline button for the navbar language toggle
pub fn language_button(_theme: &Theme, status: button::Status) -> button::Style {
    let base = button::Style {
        background: None,
        text_color: TEXT_SECONDARY,
        border: Border {
            color: Color::from_rgba(1.0, 1.0, 1.0, 0.2),
            width: 1.0,
            radius: 16.0.into(),
        },
        ..Default::default()
    };

    match status {
        button::Status::Hovered => button::Style {
            text_color: TEXT_PRIMARY,
            background: Some(Background::Color(Color::from_rgba(1.0, 1.0, 1.0, 0.08))),
            ..base
        },
        _ => base,
    }
}
