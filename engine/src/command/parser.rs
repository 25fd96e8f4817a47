use std::path::PathBuf;

use crate::command::Command;
use crate::error::{Error, Result};

/// Parses one line of menu input. Menu numbers and words are both accepted:
/// `1`/`load [path]`, `2`/`list`, `3 [key]`/`describe <key>`, `stats`,
/// `audit`, `help`, `9`/`exit`.
pub fn parse_command(input: &str) -> Result<Command> {
    let input = input.trim();
    let (word, rest) = match input.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (input, ""),
    };
    let argument = (!rest.is_empty()).then(|| rest.to_string());

    let command = match word.to_lowercase().as_str() {
        "1" | "load" => Command::Load {
            path: argument.map(PathBuf::from),
        },
        "2" | "list" if argument.is_none() => Command::List,
        "3" | "describe" | "show" => Command::Describe { key: argument },
        "stats" if argument.is_none() => Command::Stats,
        "audit" if argument.is_none() => Command::Audit,
        "help" | "menu" if argument.is_none() => Command::Help,
        "9" | "exit" | "quit" if argument.is_none() => Command::Exit,
        _ => return Err(Error::InvalidCommand(input.to_string())),
    };

    Ok(command)
}
