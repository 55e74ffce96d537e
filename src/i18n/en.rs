//! English translations

use super::Key;
use once_cell::sync::Lazy;
use std::collections::HashMap;

static TRANSLATIONS: Lazy<HashMap<Key, &'static str>> = Lazy::new(|| {
    let mut m = HashMap::new();

    // App
    m.insert(Key::AppName, "Arquantix");

    // Navbar
    m.insert(Key::ComingSoon, "COMING SOON");

    // Hero
    m.insert(Key::HeroTitle, "FRACTIONAL REAL ESTATE,\nINSTITUTIONAL RIGOR.");
    m.insert(Key::HeroPrevious, "Previous image");
    m.insert(Key::HeroNext, "Next image");

    // Footer
    m.insert(Key::FooterRights, "© Arquantix — All rights reserved");

    m
});

pub fn translations() -> &'static HashMap<Key, &'static str> {
    &TRANSLATIONS
}
