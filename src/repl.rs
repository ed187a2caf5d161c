//! Interactive session loop.
//!
//! Reads one line at a time, hands it to the [`Assistant`] and writes the
//! reply. The loop ends on `close`/`exit` or at end of input.

use crate::commands::Assistant;
use anyhow::Result;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};
use tracing::info;

/// Printed once when the session starts.
pub const WELCOME: &str = "Welcome to the assistant bot!";

/// Run a session over any line reader and writer.
///
/// # Arguments
/// * `assistant` - Holds the address book for the session
/// * `prompt` - Written before every line is read
///
/// # Returns
/// An error only if reading or writing fails
pub async fn run_session<R, W>(
    assistant: &mut Assistant,
    prompt: &str,
    mut reader: R,
    mut writer: W,
) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    writer.write_all(format!("{}\n", WELCOME).as_bytes()).await?;
    let mut buf = Vec::new();

    loop {
        writer.write_all(prompt.as_bytes()).await?;
        writer.flush().await?;

        buf.clear();
        if reader.read_until(b'\n', &mut buf).await? == 0 {
            info!("end of input, closing session");
            break;
        }

        // Undecodable bytes become U+FFFD instead of ending the session
        let line = String::from_utf8_lossy(&buf);

        let Some(reply) = assistant.handle_line(&line) else {
            continue;
        };

        writer.write_all(reply.text.as_bytes()).await?;
        writer.write_all(b"\n").await?;

        if reply.exit {
            info!("session closed by user");
            break;
        }
    }

    writer.flush().await?;
    Ok(())
}

/// Run a session on the process's stdin and stdout.
pub async fn run_stdio(assistant: &mut Assistant, prompt: &str) -> Result<()> {
    let stdin = BufReader::new(tokio::io::stdin());
    let stdout = tokio::io::stdout();
    run_session(assistant, prompt, stdin, stdout).await
}
