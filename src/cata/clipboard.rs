use crate::error::{CataError, Result};
use std::io::Write;
use std::process::{Command, Stdio};

/// Copies text to the system clipboard in an OS-specific way.
/// - macOS: pbcopy
/// - Linux: xclip, falling back to xsel
/// - Windows: clip.exe
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    #[cfg(target_os = "macos")]
    return pipe_to("pbcopy", &[], text);

    #[cfg(target_os = "linux")]
    {
        match pipe_to("xclip", &["-selection", "clipboard"], text) {
            Ok(()) => Ok(()),
            Err(_) => pipe_to("xsel", &["--clipboard", "--input"], text)
                .map_err(|_| CataError::Api("Install xclip or xsel to copy.".to_string())),
        }
    }

    #[cfg(target_os = "windows")]
    return pipe_to("clip", &[], text);

    #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
    Err(CataError::Api(
        "Clipboard not supported on this platform".to_string(),
    ))
}

#[allow(dead_code)]
fn pipe_to(program: &str, args: &[&str], text: &str) -> Result<()> {
    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::piped())
        .spawn()
        .map_err(|e| CataError::Api(format!("Failed to spawn {}: {}", program, e)))?;

    if let Some(mut stdin) = child.stdin.take() {
        stdin
            .write_all(text.as_bytes())
            .map_err(|e| CataError::Api(format!("Failed to write to {}: {}", program, e)))?;
    }

    let status = child
        .wait()
        .map_err(|e| CataError::Api(format!("Failed to wait for {}: {}", program, e)))?;

    if status.success() {
        Ok(())
    } else {
        Err(CataError::Api(format!("{} exited with error", program)))
    }
}
