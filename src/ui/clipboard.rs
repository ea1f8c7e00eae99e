//! Copy-to-clipboard for the contact email

/// Errors from writing to the system clipboard
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClipboardError {
    #[error("no browser window available")]
    NoWindow,
    #[error("clipboard write rejected: {0}")]
    Rejected(String),
    #[error("clipboard is not available on the server")]
    Unsupported,
}

/// Write `text` to the clipboard.
#[cfg(not(feature = "ssr"))]
pub async fn copy_text(text: &str) -> Result<(), ClipboardError> {
    use wasm_bindgen_futures::JsFuture;

    let window = web_sys::window().ok_or(ClipboardError::NoWindow)?;
    let promise = window.navigator().clipboard().write_text(text);
    JsFuture::from(promise)
        .await
        .map(|_| ())
        .map_err(|err| ClipboardError::Rejected(format!("{err:?}")))
}

#[cfg(feature = "ssr")]
pub async fn copy_text(_text: &str) -> Result<(), ClipboardError> {
    Err(ClipboardError::Unsupported)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ClipboardError::Rejected("denied".into()).to_string(),
            "clipboard write rejected: denied"
        );
        assert_eq!(
            ClipboardError::NoWindow.to_string(),
            "no browser window available"
        );
    }
}
