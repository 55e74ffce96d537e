//! Feature modules that sit outside the UI tree

pub mod settings;

pub use settings::{Settings, SettingsError};
