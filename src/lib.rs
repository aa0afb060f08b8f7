//! Looper UI - desktop shell.
//!
//! Opens one native window onto the looper core's web UI at
//! `http://localhost:<port>/`, and reacts to three lifecycle events:
//! - ready: open the session window
//! - all windows closed: quit
//! - activate (macOS): reopen the window if none is open

pub mod config;
pub mod error;
pub mod lifecycle;
pub mod logging;
pub mod platform;
pub mod window;

use tauri::Manager;

use config::ShellConfig;

pub fn run() {
    logging::init();

    let config = ShellConfig::from_args(std::env::args_os());
    tracing::info!(
        port = %config.port,
        url = %config.target_url(),
        icon = ?config.icon,
        "starting looper shell"
    );

    let app = tauri::Builder::default()
        .setup(move |app| {
            let config = match app.path().resource_dir() {
                Ok(dir) => config.with_icon_base(&dir),
                Err(err) => {
                    tracing::warn!("resource dir unavailable, icon path left relative: {}", err);
                    config
                }
            };

            lifecycle::on_ready(app.handle(), &config)?;
            app.manage(config);
            Ok(())
        })
        .build(tauri::generate_context!())
        .expect("error while running tauri application");

    app.run(|app_handle, event| match event {
        tauri::RunEvent::ExitRequested { code: None, .. } => {
            lifecycle::on_all_windows_closed(app_handle);
        }
        #[cfg(target_os = "macos")]
        tauri::RunEvent::Reopen { .. } => {
            let config = app_handle.state::<ShellConfig>();
            lifecycle::on_activate(app_handle, config.inner());
        }
        _ => {}
    });
}
