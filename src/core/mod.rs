pub mod catalog;
pub mod config_store;
pub mod ini;
pub mod language;
pub mod process_launcher;
pub mod startup;
