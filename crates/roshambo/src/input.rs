//! Player commands read from a text stream.

use std::{
    io::{self, BufRead},
    thread::{self, JoinHandle},
};

use crossbeam::channel::Sender;

use crate::event::{Command, Event};

/// Parses one line of player input.
///
/// An empty line, `s` or `start` starts a round; `q` or `quit` quits. Matching ignores case and
/// surrounding whitespace. Returns [`None`] for anything else.
pub fn parse_command(line: &str) -> Option<Command> {
    match line.trim().to_ascii_lowercase().as_str() {
        "" | "s" | "start" => Some(Command::StartRound),
        "q" | "quit" | "exit" => Some(Command::Quit),
        _ => None,
    }
}

/// Forwards commands read from `reader` to `events` until the reader is exhausted.
///
/// End of input is reported as [`Command::Quit`]. Returns early if the receiving end of `events`
/// is gone.
pub fn forward_commands<R: BufRead>(reader: R, events: &Sender<Event>) -> io::Result<()> {
    for line in reader.lines() {
        let line = line?;
        match parse_command(&line) {
            Some(cmd) => {
                log::trace!("command: {cmd:?}");
                if events.send(cmd.into()).is_err() {
                    return Ok(());
                }
            }
            None => log::warn!(
                "unknown command '{}' (use 's' to start, 'q' to quit)",
                line.trim()
            ),
        }
    }

    events.send(Command::Quit.into()).ok();
    Ok(())
}

/// Spawns a thread that turns lines typed on stdin into [`Command`]s.
///
/// The thread is detached in practice: stdin reads cannot be interrupted, so it exits on its own
/// once the game loop is gone and the next line arrives.
pub fn spawn_stdin_reader(events: Sender<Event>) -> io::Result<JoinHandle<()>> {
    thread::Builder::new()
        .name("stdin".into())
        .spawn(move || {
            if let Err(e) = forward_commands(io::stdin().lock(), &events) {
                log::error!("failed to read from stdin: {e}");
                events.send(Command::Quit.into()).ok();
            }
        })
}
