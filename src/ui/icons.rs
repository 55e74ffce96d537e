//! SVG icon constants
//!
//! Inline SVG sources rendered through `iced::widget::svg` with
//! `Handle::from_memory`, tinted at the call site.

pub const CHEVRON_LEFT: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="24" height="24" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"><path d="M15 18l-6-6 6-6"/></svg>"#;

pub const CHEVRON_RIGHT: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="24" height="24" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"><path d="M9 18l6-6-6-6"/></svg>"#;

/// Arquantix wordmark, used in the navbar and footer
pub const WORDMARK: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="203" height="44" viewBox="0 0 203 44" fill="none"><text x="0" y="32" font-family="Avenir, sans-serif" font-size="30" letter-spacing="4" fill="currentColor">ARQUANTIX</text></svg>"#;
