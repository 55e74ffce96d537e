//! Application messages

use iced::keyboard;

#[derive(Debug, Clone)]
pub enum Message {
    /// Autoplay timer fired
    HeroTick,
    /// Arrow navigation, delta is -1 or +1
    HeroNavigate(i32),
    /// Indicator dot clicked
    HeroJump(usize),
    /// Pointer entered or left the hero
    HeroHovered(bool),
    /// Redraw frame while the cross-fade is running
    AnimationTick,
    /// Raw key press, resolved by the keyboard handler
    KeyPressed(keyboard::Key, keyboard::Modifiers),
    /// Navbar language toggle
    ToggleLanguage,
    /// Persist settings to disk
    SaveSettings,
}
