//! REPL Module
//!
//! The interactive command loop: reads lines, dispatches commands to a
//! [`Session`], and prints results or errors.

mod commands;
mod session;

use std::io::{self, Write};

use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::{debug, info};

use crate::error::CommandError;

pub use commands::{Command, COMMANDS};
pub use session::{write_help, Outcome, Session};

/// Prompt printed before each command
pub const PROMPT: &str = "pokedex > ";

/// Runs the command loop until `exit` or end of input.
///
/// Command errors are printed as `Error: <message>` and the loop continues.
/// Only failures to read input or write output end the loop with an error.
pub async fn run<R, I, W>(session: &mut Session<R>, input: I, out: &mut W) -> io::Result<()>
where
    R: rand::Rng,
    I: AsyncBufRead + Unpin,
    W: Write,
{
    let mut lines = input.lines();

    writeln!(out, "Welcome to the Pokedex!")?;
    write_help(out)?;

    loop {
        write!(out, "{PROMPT}")?;
        out.flush()?;

        let Some(line) = lines.next_line().await? else {
            debug!("Input closed");
            writeln!(out)?;
            break;
        };

        let result = match Command::parse(&line) {
            Ok(command) => session.execute(command, out).await,
            Err(err) => Err(err),
        };

        match result {
            Ok(Outcome::Continue) => {}
            Ok(Outcome::Exit) => break,
            Err(CommandError::Io(err)) => return Err(err),
            Err(err) => writeln!(out, "Error: {err}")?,
        }
    }

    info!(caught = session.pokedex().len(), "Session ended");
    Ok(())
}
