pub mod cli;
pub mod config;
pub mod content;
pub mod logging;
pub mod lore;
pub mod models;
pub mod nav;
pub mod search;
pub mod session;
pub mod settings;
pub mod ui;
