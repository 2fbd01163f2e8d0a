pub mod config;
pub mod logging;

pub mod extension;
pub mod guard;
pub mod request;
