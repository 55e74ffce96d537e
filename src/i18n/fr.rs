//! French translations

use super::Key;
use once_cell::sync::Lazy;
use std::collections::HashMap;

static TRANSLATIONS: Lazy<HashMap<Key, &'static str>> = Lazy::new(|| {
    let mut m = HashMap::new();

    // App
    m.insert(Key::AppName, "Arquantix");

    // Navbar
    m.insert(Key::ComingSoon, "BIENTÔT DISPONIBLE");

    // Hero
    m.insert(
        Key::HeroTitle,
        "IMMOBILIER FRACTIONNÉ,\nRIGUEUR INSTITUTIONNELLE.",
    );
    m.insert(Key::HeroPrevious, "Image précédente");
    m.insert(Key::HeroNext, "Image suivante");

    // Footer
    m.insert(Key::FooterRights, "© Arquantix — Tous droits réservés");

    m
});

pub fn translations() -> &'static HashMap<Key, &'static str> {
    &TRANSLATIONS
}
