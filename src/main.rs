//! Arquantix - coming-soon showcase for a fractional real-estate brand
//! Built with iced for a dark, bronze-accented UI

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod features;
mod i18n;
mod ui;

fn main() -> anyhow::Result<()> {
    // Initialize tracing for logging
    tracing_subscriber::fmt::init();

    iced::application(app::App::new, app::App::update, app::App::view)
        .title(app::App::title)
        .theme(app::App::theme)
        .subscription(app::App::subscription)
        .window_size(iced::Size::new(1280.0, 860.0))
        .antialiasing(true)
        .run()?;

    Ok(())
}
