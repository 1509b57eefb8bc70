//! Line-oriented command shell driving a [`Championship`]

use championship_core::{Championship, GameResult, StandingsError};
use std::io::{self, BufRead, Write};
use thiserror::Error;

use crate::config::ShellConfig;
use crate::render::{render_simulation, render_simulations, render_standings};

pub const INTRO: &str = "Command line processor for interacting with championship state";

const HELP: &str = "\
Commands:
  print                   show the current standings
  push <x> <y> <result>   simulate a game; x/y are numbers or names,
                          result is 1, 0, 1/2 (or w, d, l) for x.
                          A number means the roster number; an all-digit
                          name is matched only when no such number exists
  pop                     undo the last simulation
  sims                    list active simulations
  clear                   undo every simulation
  help                    show this message
  quit                    leave (or ^D)
";

#[derive(Debug, Error)]
pub enum ShellError {
    #[error("malformed command: {0}")]
    MalformedCommand(String),

    #[error("unknown player: {0}")]
    UnknownPlayer(String),

    #[error(transparent)]
    Engine(#[from] StandingsError),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// A player as typed by the operator
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayerRef {
    Number(usize),
    Name(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Print,
    Push {
        x: PlayerRef,
        y: PlayerRef,
        result: GameResult,
    },
    Pop,
    List,
    Clear,
    Help,
    Quit,
}

/// Whether the loop keeps reading after a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

impl PlayerRef {
    fn parse(token: &str) -> Self {
        match token.parse::<usize>() {
            Ok(n) => PlayerRef::Number(n),
            Err(_) => PlayerRef::Name(token.to_string()),
        }
    }
}

/// Parse one input line. Returns `Ok(None)` for blank lines.
pub fn parse_command(line: &str) -> Result<Option<Command>, ShellError> {
    let parts: Vec<&str> = line.split_whitespace().collect();
    let Some(&head) = parts.first() else {
        return Ok(None);
    };

    let command = match head.to_lowercase().as_str() {
        "print" | "p" | "show" => Command::Print,
        "pop" | "undo" => Command::Pop,
        "sims" | "list" | "ls" => Command::List,
        "clear" | "reset" => Command::Clear,
        "help" | "?" => Command::Help,
        "quit" | "exit" | "q" | "eof" => Command::Quit,
        "push" | "sim" => {
            if parts.len() != 4 {
                return Err(ShellError::MalformedCommand(
                    "usage: push <x> <y> <result>".to_string(),
                ));
            }
            let result = GameResult::parse(parts[3]).ok_or_else(|| {
                ShellError::MalformedCommand(format!(
                    "result must be 1, 0 or 1/2, got {:?}",
                    parts[3]
                ))
            })?;
            Command::Push {
                x: PlayerRef::parse(parts[1]),
                y: PlayerRef::parse(parts[2]),
                result,
            }
        }
        other => {
            return Err(ShellError::MalformedCommand(format!(
                "unknown command {other:?} (try 'help')"
            )))
        }
    };
    Ok(Some(command))
}

pub struct Shell<O: Write, E: Write> {
    championship: Championship,
    config: ShellConfig,
    out: O,
    err: E,
}

impl<O: Write, E: Write> Shell<O, E> {
    pub fn new(championship: Championship, config: ShellConfig, out: O, err: E) -> Self {
        Self {
            championship,
            config,
            out,
            err,
        }
    }

    /// Read commands until `quit` or end of input.
    ///
    /// Command errors are reported and the loop continues; only I/O errors
    /// on the output streams end it early.
    pub fn run<R: BufRead>(&mut self, mut input: R, interactive: bool) -> Result<(), ShellError> {
        if interactive {
            writeln!(self.out, "{INTRO}")?;
        }

        let mut line = String::new();
        loop {
            if interactive {
                write!(self.out, "{}", self.config.prompt)?;
                self.out.flush()?;
            }

            line.clear();
            if input.read_line(&mut line)? == 0 {
                if interactive {
                    writeln!(self.out)?;
                }
                break;
            }

            match self.execute(&line) {
                Ok(Flow::Continue) => {}
                Ok(Flow::Exit) => break,
                Err(ShellError::Io(e)) => return Err(ShellError::Io(e)),
                Err(e) => {
                    log::debug!("Command {:?} failed: {}", line.trim(), e);
                    writeln!(self.err, "Error: {e}")?;
                }
            }
        }
        self.out.flush()?;
        Ok(())
    }

    /// Execute a single command line
    pub fn execute(&mut self, line: &str) -> Result<Flow, ShellError> {
        let Some(command) = parse_command(line)? else {
            return Ok(Flow::Continue);
        };

        match command {
            Command::Print => self.print()?,
            Command::Push { x, y, result } => {
                let x = self.resolve(&x)?;
                let y = self.resolve(&y)?;
                let simulation = self.championship.push(x, y, result)?;
                writeln!(
                    self.out,
                    "{}",
                    render_simulation(&self.championship, "Simulated", &simulation)
                )?;
                self.auto_print()?;
            }
            Command::Pop => {
                let simulation = self.championship.pop()?;
                writeln!(
                    self.out,
                    "{}",
                    render_simulation(&self.championship, "Removed", &simulation)
                )?;
                self.auto_print()?;
            }
            Command::List => {
                write!(self.out, "{}", render_simulations(&self.championship))?;
            }
            Command::Clear => {
                let removed = self.championship.clear();
                writeln!(self.out, "Removed {} simulation(s)", removed.len())?;
                if !removed.is_empty() {
                    self.auto_print()?;
                }
            }
            Command::Help => write!(self.out, "{HELP}")?,
            Command::Quit => return Ok(Flow::Exit),
        }
        Ok(Flow::Continue)
    }

    fn resolve(&self, player: &PlayerRef) -> Result<usize, ShellError> {
        match player {
            PlayerRef::Number(n) => {
                let roster = self.championship.roster();
                if (1..=roster.len()).contains(n) {
                    return Ok(*n);
                }
                // Out of range: maybe a player is literally named "1999"
                Ok(roster
                    .iter()
                    .find(|p| p.name().parse::<usize>() == Ok(*n))
                    .map_or(*n, |p| p.id().number()))
            }
            PlayerRef::Name(name) => self
                .championship
                .roster()
                .find_by_name(name)
                .map(|id| id.number())
                .ok_or_else(|| ShellError::UnknownPlayer(name.clone())),
        }
    }

    fn print(&mut self) -> Result<(), ShellError> {
        let text = render_standings(
            &self.championship.state(),
            self.championship.name(),
            &self.config,
        );
        writeln!(self.out, "{text}")?;
        Ok(())
    }

    fn auto_print(&mut self) -> Result<(), ShellError> {
        if self.config.auto_print {
            self.print()?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "shell_tests.rs"]
mod shell_tests;
