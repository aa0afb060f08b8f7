// Looper UI - Tauri shell
// The web UI is served by the looper core on localhost. This binary only
// opens a native window onto it: `looper-ui [port]`, port defaults to 2811.

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

fn main() {
    looper_ui_lib::run()
}
