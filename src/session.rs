use std::io::{BufRead, Write};

use tracing::{debug, info};

use crate::error::AppError;
use crate::random::UniformIndex;
use crate::reporting::TerminalSurface;
use crate::surface::{Host, Surface};

/// One line of terminal input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Put the text in the input field, then submit it.
    Add(String),
    /// Submit whatever is in the input field.
    Resubmit,
    Draw,
    List,
    Help,
    Quit,
    Blank,
    Unknown(String),
}

impl Command {
    pub fn parse(line : &str) -> Command {
        let line = line.trim_end_matches(['\n', '\r']);
        let (word, rest) = match line.trim_start().split_once(char::is_whitespace) {
            Some((word, rest)) => (word, Some(rest)),
            None => (line.trim_start(), None),
        };

        match (word, rest) {
            ("", _) => Command::Blank,
            ("add", Some(rest)) => Command::Add(rest.to_string()),
            ("add", None) => Command::Resubmit,
            ("draw", None) => Command::Draw,
            ("list", None) => Command::List,
            ("help", None) => Command::Help,
            ("quit", None) | ("exit", None) => Command::Quit,
            _ => Command::Unknown(word.to_string()),
        }
    }
}

/// Writes the warnings for skipped names file cells and, when the roster was seeded, the initial
/// list. Write failures are returned here rather than after the first command.
pub fn open<W, R>(host : &mut Host<TerminalSurface<W>, R>, skipped : &[(u64, usize)]) -> Result<(), AppError>
where
    W : Write,
    R : UniformIndex,
{
    for &(line, field) in skipped {
        host.surface.skipped_cell(line, field);
    }
    if !host.widget.roster().is_empty() {
        host.render();
    }

    match host.surface.take_error() {
        Some(error) => Err(AppError::Io(error)),
        None => Ok(()),
    }
}

/// Runs commands from `input` until it ends or a quit command is read.
pub fn run<I, W, R>(input : I, host : &mut Host<TerminalSurface<W>, R>) -> Result<(), AppError>
where
    I : BufRead,
    W : Write,
    R : UniformIndex,
{
    info!("session started");

    for line in input.lines() {
        let command = Command::parse(&line?);
        debug!(?command, "command");

        match command {
            Command::Add(text) => {
                host.surface.set_input_value(&text);
                // Rejections are shown through the error indicator.
                let _ = host.on_add();
            },
            Command::Resubmit => {
                let _ = host.on_add();
            },
            Command::Draw => {
                let _ = host.on_draw();
            },
            Command::List => host.render(),
            Command::Help => host.surface.help(),
            Command::Quit => break,
            Command::Blank => (),
            Command::Unknown(word) => host.surface.unknown_command(&word),
        }

        if let Some(error) = host.surface.take_error() {
            return Err(AppError::Io(error));
        }
    }

    info!(names = host.widget.roster().len(), "session ended");
    Ok(())
}
