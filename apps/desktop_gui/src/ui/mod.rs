//! UI layer for the desktop client: app shell and transcript rendering.

pub mod app;

pub use app::TaskChatApp;
