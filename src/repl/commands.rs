//! Command Parsing
//!
//! Turns a line of user input into a [`Command`].

use crate::error::CommandError;

/// A parsed REPL command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    Exit,
    /// Next page of location areas
    Map,
    /// Previous page of location areas
    MapBack,
    Explore(String),
    Catch(String),
    Pokedex,
}

/// Name and description for every command, in help order.
pub const COMMANDS: &[(&str, &str)] = &[
    ("map", "Display the next page of location areas"),
    ("mapb", "Display the previous page of location areas"),
    ("explore <area_name>", "List the Pokemon found in an area"),
    ("catch <pokemon_name>", "Attempt to catch a Pokemon"),
    ("pokedex", "View caught Pokemon"),
    ("help", "Display this help message"),
    ("exit", "Exit the program"),
];

impl Command {
    /// Parses one line of input.
    ///
    /// The first word selects the command. Remaining words are lowercased and
    /// joined with `-`, so `explore canalave city area` targets
    /// `canalave-city-area`.
    pub fn parse(line: &str) -> Result<Self, CommandError> {
        let mut words = line.split_whitespace();
        let name = words.next().ok_or(CommandError::Empty)?;
        let argument = words
            .map(str::to_lowercase)
            .collect::<Vec<_>>()
            .join("-");

        match name.to_lowercase().as_str() {
            "help" => Ok(Command::Help),
            "exit" => Ok(Command::Exit),
            "map" => Ok(Command::Map),
            "mapb" => Ok(Command::MapBack),
            "pokedex" => Ok(Command::Pokedex),
            "explore" => required(argument, "area name").map(Command::Explore),
            "catch" => required(argument, "pokemon name").map(Command::Catch),
            _ => Err(CommandError::Unknown(name.to_string())),
        }
    }
}

fn required(argument: String, what: &'static str) -> Result<String, CommandError> {
    if argument.is_empty() {
        Err(CommandError::MissingArgument(what))
    } else {
        Ok(argument)
    }
}
