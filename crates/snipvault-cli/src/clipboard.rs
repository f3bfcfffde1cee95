//! Clipboard writes through the platform's clipboard tool.

use std::process::Stdio;

use tokio::io::AsyncWriteExt;
use tokio::process::Command;

/// Clipboard programs tried in order: (program, args).
const CANDIDATES: &[(&str, &[&str])] = &[
    ("pbcopy", &[]),
    ("wl-copy", &[]),
    ("xclip", &["-selection", "clipboard"]),
    ("xsel", &["--clipboard", "--input"]),
    ("clip", &[]),
];

/// Write `text` to the clipboard using the first tool that can be started.
/// Returns the name of the tool used.
pub async fn copy_to_clipboard(text: &str) -> eyre::Result<&'static str> {
    for &(program, args) in CANDIDATES {
        let spawned = Command::new(program)
            .args(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .spawn();

        let mut child = match spawned {
            Ok(child) => child,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(program, "clipboard tool not installed");
                continue;
            }
            Err(e) => return Err(eyre::eyre!("failed to start {program}: {e}")),
        };

        if let Some(mut stdin) = child.stdin.take() {
            stdin.write_all(text.as_bytes()).await?;
            // Dropping stdin closes the pipe so the tool sees EOF.
        }

        let output = child.wait_with_output().await?;
        if output.status.success() {
            tracing::info!(program, bytes = text.len(), "copied to clipboard");
            return Ok(program);
        }
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(eyre::eyre!("{program} failed: {}", stderr.trim()));
    }

    Err(eyre::eyre!(
        "no clipboard tool found (tried pbcopy, wl-copy, xclip, xsel, clip)"
    ))
}
