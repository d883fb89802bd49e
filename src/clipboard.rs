use std::time::Duration;

use arboard::Clipboard;
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ClipboardError {
    #[error("Clipboard access failed: {0} (rerun with --no-copy to skip the clipboard)")]
    AccessFailed(String),
}

/// X11/Wayland selections are served by the owning process, so they vanish on exit
/// unless a clipboard manager takes them over first.
const SELECTION_OWNED_BY_PROCESS: bool = cfg!(all(
    unix,
    not(any(target_os = "macos", target_os = "android", target_os = "emscripten"))
));

/// Place `text` on the system clipboard. On X11/Wayland this blocks for up to
/// `hold`, returning early once a clipboard manager takes ownership.
pub fn copy_text(text: &str, hold: Duration) -> Result<(), ClipboardError> {
    let mut clipboard =
        Clipboard::new().map_err(|e| ClipboardError::AccessFailed(e.to_string()))?;
    set_text(&mut clipboard, text, hold).map_err(|e| ClipboardError::AccessFailed(e.to_string()))
}

#[cfg(all(
    unix,
    not(any(target_os = "macos", target_os = "android", target_os = "emscripten"))
))]
fn set_text(clipboard: &mut Clipboard, text: &str, hold: Duration) -> Result<(), arboard::Error> {
    use arboard::SetExtLinux;

    let deadline = std::time::Instant::now() + hold;
    clipboard.set().wait_until(deadline).text(text)
}

#[cfg(not(all(
    unix,
    not(any(target_os = "macos", target_os = "android", target_os = "emscripten"))
)))]
fn set_text(clipboard: &mut Clipboard, text: &str, _hold: Duration) -> Result<(), arboard::Error> {
    clipboard.set_text(text)
}

fn copied_message(bytes: usize, hold: Duration) -> String {
    if SELECTION_OWNED_BY_PROCESS {
        format!(
            "Copied {} bytes to clipboard; served up to {:.1}s, kept after exit only if a clipboard manager took it",
            bytes,
            hold.as_secs_f64()
        )
    } else {
        format!("Copied {} bytes to clipboard", bytes)
    }
}

/// Print the block to stdout, then copy it unless `copy` is false.
pub fn publish(block: &str, copy: bool, hold: Duration) -> Result<(), ClipboardError> {
    print!("{}", block);
    if copy {
        copy_text(block, hold)?;
        info!("{}", copied_message(block.len(), hold));
    }
    Ok(())
}
