// Presentation layer - HTTP handlers, view models and templates
pub mod app_state;
pub mod handlers;
pub mod templates;
pub mod view_model;
