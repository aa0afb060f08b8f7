//! Lifecycle reactions: ready, all windows closed, activate.
//!
//! The reactions never keep their own view of which windows exist. They ask
//! the host runtime through [`WindowHost`], which Tauri's `AppHandle`
//! implements against its webview registry.

use tauri::{AppHandle, Manager, Runtime};

use crate::config::ShellConfig;
use crate::error::ShellError;
use crate::window::SessionWindow;

pub trait WindowHost {
    fn open_window_count(&self) -> usize;
    fn open_window(&self, window: &SessionWindow) -> Result<(), ShellError>;
    fn quit(&self);
}

impl<R: Runtime> WindowHost for AppHandle<R> {
    fn open_window_count(&self) -> usize {
        self.webview_windows().len()
    }

    fn open_window(&self, window: &SessionWindow) -> Result<(), ShellError> {
        window.build(self).map(|_| ())
    }

    fn quit(&self) {
        self.exit(0);
    }
}

/// The application is ready: open the session window.
pub fn on_ready<H: WindowHost>(host: &H, config: &ShellConfig) -> Result<(), ShellError> {
    host.open_window(&SessionWindow::new(config))
}

/// The last window is gone: quit the whole application.
pub fn on_all_windows_closed<H: WindowHost>(host: &H) {
    tracing::info!("last window closed, quitting");
    host.quit();
}

/// The app was re-invoked while running. Reopens the session window only when
/// none is open; returns whether a window was created.
pub fn on_activate<H: WindowHost>(host: &H, config: &ShellConfig) -> bool {
    let open = host.open_window_count();
    if open > 0 {
        tracing::debug!(open, "activate ignored, windows already open");
        return false;
    }

    match host.open_window(&SessionWindow::new(config)) {
        Ok(()) => true,
        Err(err) => {
            tracing::error!("failed to reopen session window: {}", err);
            false
        }
    }
}
