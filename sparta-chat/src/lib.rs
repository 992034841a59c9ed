// Application state
pub mod app;

// Chat session and transcript state
pub mod chat;

// UI rendering
pub mod ui;
