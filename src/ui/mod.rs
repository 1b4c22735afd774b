pub mod error_window;
pub mod fonts;
pub mod launcher;
pub mod opener;
