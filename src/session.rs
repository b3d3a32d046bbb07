//! Interactive read/print loop.
//!
//! Reads one command per line from any async reader and writes replies to
//! any async writer, so the same loop drives stdin/stdout and in-memory
//! buffers in tests.

use crate::commands::{Assistant, Reply};
use chrono::NaiveDate;
use std::io;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{info, warn};

pub const GREETING: &str = "Welcome to the assistant bot!";
pub const PROMPT: &str = "Enter a command: ";
pub const FAREWELL: &str = "Good bye!";

/// Reply to a line that is not valid UTF-8.
pub const UNREADABLE_INPUT: &str = "Invalid command.";

/// Run the assistant until `exit`/`close` or end of input.
///
/// `today` is asked for the current date before every command. A line that
/// is not valid UTF-8 gets a reply and does not end the session.
pub async fn run_session<R, W, F>(
    assistant: &mut Assistant,
    mut input: R,
    mut output: W,
    today: F,
) -> io::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
    F: Fn() -> NaiveDate,
{
    output.write_all(format!("{}\n", GREETING).as_bytes()).await?;
    let mut buf = Vec::new();

    loop {
        output.write_all(PROMPT.as_bytes()).await?;
        output.flush().await?;

        buf.clear();
        if input.read_until(b'\n', &mut buf).await? == 0 {
            info!("input closed");
            output.write_all(format!("\n{}\n", FAREWELL).as_bytes()).await?;
            break;
        }

        let Ok(line) = std::str::from_utf8(&buf) else {
            warn!(bytes = buf.len(), "input line is not valid UTF-8");
            output
                .write_all(format!("{}\n", UNREADABLE_INPUT).as_bytes())
                .await?;
            continue;
        };
        let line = line.trim_end_matches(['\n', '\r']);

        match assistant.handle_line(line, today()) {
            None => continue,
            Some(Reply::Message(text)) => {
                output.write_all(format!("{}\n", text).as_bytes()).await?;
            }
            Some(Reply::Exit(text)) => {
                output.write_all(format!("{}\n", text).as_bytes()).await?;
                break;
            }
        }
    }

    output.flush().await
}
