// src/clipboard.rs
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("Clipboard unavailable: {0}")]
    Unavailable(String),

    #[error("Failed to write to clipboard: {0}")]
    WriteFailed(String),
}

/// Something that can place text on a clipboard.
pub trait Clipboard {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// The desktop clipboard. Opened lazily on each copy.
#[derive(Debug, Default)]
pub struct SystemClipboard;

impl Clipboard for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        let mut clipboard = arboard::Clipboard::new()
            .map_err(|e| ClipboardError::Unavailable(e.to_string()))?;
        clipboard
            .set_text(text.to_owned())
            .map_err(|e| ClipboardError::WriteFailed(e.to_string()))
    }
}

/// Toast-style message shown after a copy attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub title: String,
    pub description: String,
    /// Rendered as an error
    pub destructive: bool,
}

/// Copy a secret and describe the outcome for the user.
///
/// An empty secret means there is nothing to copy: the action is disabled
/// and no notification is produced. Failures are reported, never raised.
pub fn copy_secret(clipboard: &mut dyn Clipboard, secret: &str) -> Option<Notification> {
    if secret.is_empty() {
        return None;
    }

    match clipboard.set_text(secret) {
        Ok(()) => {
            log::debug!("Copied {} characters to clipboard", secret.chars().count());
            Some(Notification {
                title: "Copied!".to_string(),
                description: "Password copied to clipboard".to_string(),
                destructive: false,
            })
        }
        Err(e) => {
            log::warn!("Clipboard copy failed: {}", e);
            Some(Notification {
                title: "Error".to_string(),
                description: "Failed to copy password".to_string(),
                destructive: true,
            })
        }
    }
}
