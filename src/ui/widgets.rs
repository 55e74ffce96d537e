//! Reusable UI widgets - composable components without business logic
//!
//! Widgets must not import from `crate::app`; they expose state and generic
//! building blocks that components wire up with messages.

pub mod carousel;

pub use carousel::{AutoplayTimer, Carousel};
