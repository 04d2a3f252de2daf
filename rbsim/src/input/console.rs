//! Line-oriented console for driving a scenario without a window.
//!
//! One command per line:
//!
//! ```text
//! spawn circle    <x> <y> <radius>          [<fx> <fy>]
//! spawn rectangle <x> <y> <width> <height>  [<fx> <fy>]
//! spawn square    <x> <y> <side>            [<fx> <fy>]
//! spawn point     <x> <y>                   [<fx> <fy>]
//! step [n]
//! remove <index>
//! clear
//! list
//! help
//! quit
//! ```
//!
//! Bad input and rejected spawns are reported on the output and the loop
//! moves on to the next line.

use std::fmt;
use std::io::{self, BufRead, Write};

use crate::simulation::scenario::Scenario;
use crate::simulation::states::{NVec2, Shape};

const HELP: &str = "commands: spawn <circle|rectangle|square|point> <x> <y> [dims..] [fx fy], step [n], remove <i>, clear, list, help, quit";

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Spawn { position: NVec2, shape: Shape, force: NVec2 },
    Step(usize),
    Remove(usize),
    Clear,
    List,
    Help,
    Quit,
}

/// Console input that could not be understood
#[derive(Debug, Clone, PartialEq)]
pub enum InputParseError {
    Empty,
    UnknownCommand(String),
    UnknownShape(String),
    MissingArgument(&'static str),
    InvalidNumber { field: &'static str, value: String },
    UnexpectedArgument(String),
}

impl fmt::Display for InputParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputParseError::Empty => write!(f, "empty command"),
            InputParseError::UnknownCommand(c) => write!(f, "unknown command '{}'", c),
            InputParseError::UnknownShape(s) => {
                write!(f, "unknown shape '{}' (expected circle, rectangle, square or point)", s)
            }
            InputParseError::MissingArgument(field) => write!(f, "missing {}", field),
            InputParseError::InvalidNumber { field, value } => {
                write!(f, "{} must be a finite number, got '{}'", field, value)
            }
            InputParseError::UnexpectedArgument(arg) => write!(f, "unexpected argument '{}'", arg),
        }
    }
}

impl std::error::Error for InputParseError {}

/// Cursor over the whitespace-separated words of one line
struct Args<'a> {
    words: std::str::SplitWhitespace<'a>,
}

impl<'a> Args<'a> {
    fn next_word(&mut self, field: &'static str) -> Result<&'a str, InputParseError> {
        self.words.next().ok_or(InputParseError::MissingArgument(field))
    }

    fn number(&mut self, field: &'static str) -> Result<f64, InputParseError> {
        let word = self.next_word(field)?;
        finite(field, word)
    }

    fn index(&mut self, field: &'static str) -> Result<usize, InputParseError> {
        let word = self.next_word(field)?;
        word.parse::<usize>().map_err(|_| InputParseError::InvalidNumber {
            field,
            value: word.to_string(),
        })
    }

    /// Optional trailing `fx fy`; one without the other is an error
    fn optional_force(&mut self) -> Result<NVec2, InputParseError> {
        match self.words.next() {
            None => Ok(NVec2::zeros()),
            Some(word) => {
                let fx = finite("fx", word)?;
                let fy = self.number("fy")?;
                Ok(NVec2::new(fx, fy))
            }
        }
    }

    fn finish(mut self) -> Result<(), InputParseError> {
        match self.words.next() {
            Some(extra) => Err(InputParseError::UnexpectedArgument(extra.to_string())),
            None => Ok(()),
        }
    }
}

/// `nan` and `inf` parse as `f64` but are not accepted
fn finite(field: &'static str, word: &str) -> Result<f64, InputParseError> {
    match word.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(InputParseError::InvalidNumber {
            field,
            value: word.to_string(),
        }),
    }
}

/// Parse one console line
pub fn parse_command(line: &str) -> Result<Command, InputParseError> {
    let mut args = Args { words: line.split_whitespace() };
    let verb = args.words.next().ok_or(InputParseError::Empty)?;

    let command = match verb.to_ascii_lowercase().as_str() {
        "spawn" => {
            let kind = args.next_word("shape")?.to_ascii_lowercase();
            if !matches!(kind.as_str(), "circle" | "rectangle" | "square" | "point" | "pixel") {
                return Err(InputParseError::UnknownShape(kind));
            }
            let x = args.number("x")?;
            let y = args.number("y")?;
            let shape = match kind.as_str() {
                "circle" => Shape::Circle { radius: args.number("radius")? },
                "rectangle" => Shape::Rectangle {
                    width: args.number("width")?,
                    height: args.number("height")?,
                },
                "square" => Shape::Square { side: args.number("side")? },
                "point" | "pixel" => Shape::Point,
                _ => return Err(InputParseError::UnknownShape(kind)),
            };
            let force = args.optional_force()?;
            Command::Spawn { position: NVec2::new(x, y), shape, force }
        }
        "step" => match args.words.next() {
            None => Command::Step(1),
            Some(word) => Command::Step(word.parse::<usize>().map_err(|_| InputParseError::InvalidNumber {
                field: "ticks",
                value: word.to_string(),
            })?),
        },
        "remove" => Command::Remove(args.index("index")?),
        "clear" => Command::Clear,
        "list" => Command::List,
        "help" => Command::Help,
        "quit" | "exit" => Command::Quit,
        other => return Err(InputParseError::UnknownCommand(other.to_string())),
    };

    args.finish()?;
    Ok(command)
}

/// Read commands from `input` until `quit` or end of input, applying them to
/// `scenario` and writing replies to `out`
pub fn run_console<R: BufRead, W: Write>(scenario: &mut Scenario, input: R, out: &mut W) -> io::Result<()> {
    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let command = match parse_command(&line) {
            Ok(command) => command,
            Err(e) => {
                tracing::warn!("rejected console input: {}", e);
                writeln!(out, "Invalid input: {}", e)?;
                continue;
            }
        };

        match command {
            Command::Spawn { position, shape, force } => {
                let request = scenario.request(position, shape).with_force(force, scenario.engine.force_kind);
                match scenario.world.spawn(&request) {
                    Ok(index) => writeln!(out, "spawned {} #{}", shape.name(), index)?,
                    Err(e) => {
                        tracing::warn!("rejected spawn: {}", e);
                        writeln!(out, "Invalid input: {}", e)?;
                    }
                }
            }
            Command::Step(n) => {
                let collisions = scenario.run(n);
                writeln!(out, "t = {:.4} s, {} collisions", scenario.world.t, collisions)?;
            }
            Command::Remove(index) => match scenario.world.despawn(index) {
                Some(body) => writeln!(out, "removed {} #{}", body.shape().name(), index)?,
                None => writeln!(out, "no body #{}", index)?,
            },
            Command::Clear => {
                let removed = scenario.world.clear();
                writeln!(out, "removed {} bodies", removed)?;
            }
            Command::List => {
                for (i, b) in scenario.world.bodies.iter().enumerate() {
                    writeln!(
                        out,
                        "{}: {} pos=({:.2}, {:.2}) vel=({:.2}, {:.2})",
                        i,
                        b.shape().name(),
                        b.position.x,
                        b.position.y,
                        b.velocity.x,
                        b.velocity.y
                    )?;
                }
            }
            Command::Help => writeln!(out, "{}", HELP)?,
            Command::Quit => break,
        }
    }

    Ok(())
}
