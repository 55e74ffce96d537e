//! UI module for the Arquantix showcase
//! Dark brand aesthetic with bronze accents
//!
//! # Architecture
//!
//! The UI is organized into three layers:
//!
//! - **Widgets** (`widgets`): Composable state and patterns without business logic
//! - **Components** (`components`): Business-specific UI with Message handling
//! - **Theme/icons** (`theme`, `icons`): Shared styling and assets

pub mod components;
pub mod icons;
pub mod theme;
pub mod widgets;
