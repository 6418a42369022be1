pub mod cli;
pub mod config;
pub mod contacts;
pub mod logging;
pub mod ui;
