#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

fn main() {
    if let Err(err) = chd_ui::run() {
        eprintln!("CHDMan Frontend failed: {err}");
        std::process::exit(1);
    }
}
