pub mod arithmetic;
pub mod help;
pub mod info;
pub mod neighbors;
pub mod stars;

use crate::error::{Error, Result};
use crate::output::NeighborReport;
use crate::session::Session;

pub enum CommandOutput {
    Text(String),
    Neighbors(NeighborReport),
    /// The session should end.
    Quit,
    None,
}

pub trait Command {
    fn name(&self) -> &str;
    fn description(&self) -> &str;
    fn execute(&self, session: &mut Session, args: &[&str]) -> Result<CommandOutput>;
}

/// Names completed by the REPL and listed by `help`.
pub const COMMAND_NAMES: &[&str] = &[
    "stars",
    "naive_neighbors",
    "add",
    "subtract",
    "info",
    "help",
    "quit",
];

pub fn dispatch(session: &mut Session, input: &str) -> Result<CommandOutput> {
    let tokens = tokenize(input)?;
    let parts: Vec<&str> = tokens.iter().map(String::as_str).collect();
    if parts.is_empty() {
        return Ok(CommandOutput::None);
    }
    let cmd_name = parts[0].to_lowercase();
    let args = &parts[1..];
    match cmd_name.as_str() {
        "add" => arithmetic::Add.execute(session, args),
        "help" => help::Help.execute(session, args),
        "info" => info::Info.execute(session, args),
        "naive_neighbors" => neighbors::NaiveNeighbors.execute(session, args),
        "quit" => Ok(CommandOutput::Quit),
        "stars" => stars::Stars.execute(session, args),
        "subtract" => arithmetic::Subtract.execute(session, args),
        _ => Err(Error::UnknownCommand(parts[0].to_string())),
    }
}

/// Splits a command line on whitespace, keeping double-quoted text together.
///
/// Quotes are removed. `""` yields an empty argument.
pub fn tokenize(input: &str) -> Result<Vec<String>> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut quoted = false;

    for c in input.chars() {
        match c {
            '"' => {
                in_quotes = !in_quotes;
                quoted = true;
            }
            c if c.is_whitespace() && !in_quotes => {
                if quoted || !current.is_empty() {
                    tokens.push(std::mem::take(&mut current));
                    quoted = false;
                }
            }
            c => current.push(c),
        }
    }

    if in_quotes {
        return Err(Error::Parse("unterminated quote".into()));
    }
    if quoted || !current.is_empty() {
        tokens.push(current);
    }
    Ok(tokens)
}

pub(crate) fn parse_number(s: &str) -> Result<f64> {
    match s.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(Error::Parse(format!("unable to convert '{}' to a number", s))),
    }
}
