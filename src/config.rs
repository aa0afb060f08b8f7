//! Launch configuration, read once from the command line.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Port the looper core serves its UI on when none is given.
pub const DEFAULT_PORT: &str = "2811";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellConfig {
    /// Taken verbatim from the first argument; never validated.
    pub port: String,
    pub icon: Option<PathBuf>,
}

impl ShellConfig {
    /// Builds the configuration from process arguments, program name first.
    pub fn from_args<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        Self::from_args_on(args, std::env::consts::OS)
    }

    pub(crate) fn from_args_on<I, S>(args: I, os: &str) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        let port = args
            .into_iter()
            .nth(1)
            .map(|arg| arg.into().to_string_lossy().into_owned())
            .unwrap_or_else(|| DEFAULT_PORT.to_string());

        Self {
            port,
            icon: resolve_icon(os),
        }
    }

    pub fn target_url(&self) -> String {
        format!("http://localhost:{}/", self.port)
    }

    /// Anchors a relative icon path under `base`.
    pub fn with_icon_base(mut self, base: &Path) -> Self {
        if let Some(icon) = self.icon.take() {
            self.icon = Some(if icon.is_relative() {
                base.join(icon)
            } else {
                icon
            });
        }
        self
    }
}

#[cfg(feature = "window-icon")]
fn resolve_icon(os: &str) -> Option<PathBuf> {
    let icon = crate::platform::icon_for_os(os);
    if icon.is_none() {
        tracing::debug!(os, "no window icon for this platform");
    }
    icon
}

#[cfg(not(feature = "window-icon"))]
fn resolve_icon(_os: &str) -> Option<PathBuf> {
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_port_uses_default() {
        let config = ShellConfig::from_args(["looper-ui"]);
        assert_eq!(config.port, "2811");
        assert_eq!(config.target_url(), "http://localhost:2811/");
    }

    #[test]
    fn empty_args_use_default() {
        let config = ShellConfig::from_args(Vec::<String>::new());
        assert_eq!(config.target_url(), "http://localhost:2811/");
    }

    #[test]
    fn port_is_used_verbatim() {
        for port in ["4000", "0", "99999", "abc", " 80 ", "8080/admin", "", "-1"] {
            let config = ShellConfig::from_args(["looper-ui", port]);
            assert_eq!(config.port, port);
            assert_eq!(config.target_url(), format!("http://localhost:{port}/"));
        }
    }

    #[test]
    fn extra_args_are_ignored() {
        let config = ShellConfig::from_args(["looper-ui", "4000", "5000", "--flag"]);
        assert_eq!(config.target_url(), "http://localhost:4000/");
    }

    #[cfg(feature = "window-icon")]
    #[test]
    fn icon_follows_platform() {
        let linux = ShellConfig::from_args_on(["looper-ui"], "linux");
        assert_eq!(linux.icon, Some(PathBuf::from("icons/icon.png")));

        let windows = ShellConfig::from_args_on(["looper-ui"], "windows");
        assert_eq!(windows.icon, Some(PathBuf::from("icons/icon.ico")));

        let macos = ShellConfig::from_args_on(["looper-ui"], "macos");
        assert_eq!(macos.icon, Some(PathBuf::from("icons/icon.icns")));

        let other = ShellConfig::from_args_on(["looper-ui"], "freebsd");
        assert_eq!(other.icon, None);
    }

    #[cfg(not(feature = "window-icon"))]
    #[test]
    fn icon_disabled_without_feature() {
        for os in ["linux", "windows", "macos"] {
            assert_eq!(ShellConfig::from_args_on(["looper-ui"], os).icon, None);
        }
    }

    #[test]
    fn icon_base_anchors_relative_paths_only() {
        let base = Path::new("/opt/looper");
        let relative = ShellConfig {
            port: DEFAULT_PORT.to_string(),
            icon: Some(PathBuf::from("icons/icon.png")),
        };
        assert_eq!(
            relative.with_icon_base(base).icon,
            Some(base.join("icons/icon.png"))
        );

        let none = ShellConfig {
            port: DEFAULT_PORT.to_string(),
            icon: None,
        };
        assert_eq!(none.with_icon_base(base).icon, None);
    }
}
