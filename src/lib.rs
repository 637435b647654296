// In-memory file tree editor - exposes all core modules for testing

rust_i18n::i18n!("locales", fallback = "en");

pub mod app;
pub mod config;
pub mod model;
pub mod services;
pub mod store;
pub mod view;
