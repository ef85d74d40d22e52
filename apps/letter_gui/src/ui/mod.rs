//! UI layer: eframe app shell and theme handling.

pub mod app;
pub mod theme;

pub use app::{LetterAssignerApp, StartupConfig};
