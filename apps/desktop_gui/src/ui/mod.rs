//! UI layer for the desktop GUI: app shell, result panel, and theme colors.

pub mod app;
pub mod panels;
pub mod theme;

pub use app::SentimentApp;
