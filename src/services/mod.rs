// URLibrary services
// Stateless helpers: settings, validation, filtering, formatting, logging.

pub mod date_format;
pub mod library_filter;
pub mod logger;
pub mod settings_engine;
pub mod validation;
