use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShellError {
    #[error("Tauri error: {0}")]
    Tauri(#[from] tauri::Error),
}
