#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use multi_opener::app;

fn main() {
    app::init_logging();
    app::run_launcher();
}
