pub mod config;
pub mod logging;
pub mod notify;
pub mod profile;
pub mod submit;
pub mod ui;
