//! The session window: one webview pointed at the looper core's UI server.

use std::path::{Path, PathBuf};

use tauri::image::Image;
use tauri::{Manager, Runtime, Url, WebviewUrl, WebviewWindow, WebviewWindowBuilder};

use crate::config::ShellConfig;
use crate::error::ShellError;

pub const MAIN_WINDOW_LABEL: &str = "main";
pub const WINDOW_TITLE: &str = "Looper";
pub const WINDOW_WIDTH: f64 = 800.0;
pub const WINDOW_HEIGHT: f64 = 600.0;

const BLANK_PAGE: &str = "about:blank";

#[derive(Debug, Clone, PartialEq)]
pub struct SessionWindow {
    pub label: String,
    pub title: String,
    pub width: f64,
    pub height: f64,
    pub url: String,
    pub icon: Option<PathBuf>,
}

impl SessionWindow {
    pub fn new(config: &ShellConfig) -> Self {
        Self {
            label: MAIN_WINDOW_LABEL.to_string(),
            title: WINDOW_TITLE.to_string(),
            width: WINDOW_WIDTH,
            height: WINDOW_HEIGHT,
            url: config.target_url(),
            icon: config.icon.clone(),
        }
    }

    /// Creates the native window and starts loading the URL.
    ///
    /// The load itself is not awaited: an unreachable server ends up as the
    /// webview's own error page. A malformed URL or an unusable icon is
    /// logged and skipped; only the window build itself can fail.
    pub fn build<R: Runtime, M: Manager<R>>(
        &self,
        manager: &M,
    ) -> Result<WebviewWindow<R>, ShellError> {
        let mut builder =
            WebviewWindowBuilder::new(manager, self.label.clone(), webview_url(&self.url))
                .title(self.title.clone())
                .inner_size(self.width, self.height);

        if let Some(icon) = self.icon.as_deref().and_then(load_icon) {
            builder = builder.icon(icon)?;
        }

        let window = builder.build()?;
        tracing::info!(label = %self.label, url = %self.url, "session window opened");
        Ok(window)
    }
}

fn parse_target(url: &str) -> Option<Url> {
    match Url::parse(url) {
        Ok(url) => Some(url),
        Err(err) => {
            tracing::warn!(url, error = %err, "target URL does not parse, opening a blank page");
            None
        }
    }
}

fn webview_url(url: &str) -> WebviewUrl {
    parse_target(url)
        .or_else(|| Url::parse(BLANK_PAGE).ok())
        .map(WebviewUrl::External)
        .unwrap_or_else(|| WebviewUrl::App(PathBuf::new()))
}

fn load_icon(path: &Path) -> Option<Image<'static>> {
    // Window icons can't be decoded from .icns; the app bundle supplies it.
    if path.extension().is_some_and(|ext| ext == "icns") {
        tracing::debug!(path = %path.display(), "icns icon left to the app bundle");
        return None;
    }

    match Image::from_path(path) {
        Ok(icon) => Some(icon),
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "window icon unavailable");
            None
        }
    }
}
