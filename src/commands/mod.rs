//! Command interpreter for the assistant.
//!
//! A line of input is split on whitespace into a command word and its
//! arguments. The command word is case-insensitive; extra arguments are
//! ignored.

pub mod assistant;

pub use assistant::{Assistant, Reply};

use crate::error::BookError;
use std::str::FromStr;
use thiserror::Error;

/// Errors produced while parsing or executing a command.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// Blank input line
    #[error("Enter a command.")]
    Empty,

    /// Unrecognised command word
    #[error("Invalid command.")]
    Unknown(String),

    /// Not enough arguments for the command
    #[error("Usage: {usage}")]
    MissingArguments { usage: &'static str },

    /// Record or address book operation failed
    #[error(transparent)]
    Book(#[from] BookError),
}

/// A parsed assistant command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Hello,
    Add { name: String, phone: String },
    Change { name: String, old: String, new: String },
    RemovePhone { name: String, phone: String },
    Phone { name: String },
    Delete { name: String },
    All,
    AddBirthday { name: String, birthday: String },
    ShowBirthday { name: String },
    Birthdays,
    Export,
    Exit,
}

impl Command {
    /// Usage line for a command word.
    fn usage(word: &str) -> &'static str {
        match word {
            "add" => "add <name> <phone>",
            "change" => "change <name> <old phone> <new phone>",
            "remove-phone" => "remove-phone <name> <phone>",
            "phone" => "phone <name>",
            "delete" => "delete <name>",
            "add-birthday" => "add-birthday <name> <DD.MM.YYYY>",
            "show-birthday" => "show-birthday <name>",
            _ => "",
        }
    }
}

/// Take exactly `N` leading arguments or fail with the command's usage.
fn take_args<const N: usize>(word: &str, args: &[&str]) -> Result<[String; N], CommandError> {
    if args.len() < N {
        return Err(CommandError::MissingArguments {
            usage: Command::usage(word),
        });
    }
    Ok(std::array::from_fn(|i| args[i].to_string()))
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut tokens = line.split_whitespace();
        let word = tokens.next().ok_or(CommandError::Empty)?.to_lowercase();
        let args: Vec<&str> = tokens.collect();

        let command = match word.as_str() {
            "hello" => Command::Hello,
            "add" => {
                let [name, phone] = take_args(&word, &args)?;
                Command::Add { name, phone }
            }
            "change" => {
                let [name, old, new] = take_args(&word, &args)?;
                Command::Change { name, old, new }
            }
            "remove-phone" => {
                let [name, phone] = take_args(&word, &args)?;
                Command::RemovePhone { name, phone }
            }
            "phone" => {
                let [name] = take_args(&word, &args)?;
                Command::Phone { name }
            }
            "delete" => {
                let [name] = take_args(&word, &args)?;
                Command::Delete { name }
            }
            "all" => Command::All,
            "add-birthday" => {
                let [name, birthday] = take_args(&word, &args)?;
                Command::AddBirthday { name, birthday }
            }
            "show-birthday" => {
                let [name] = take_args(&word, &args)?;
                Command::ShowBirthday { name }
            }
            "birthdays" => Command::Birthdays,
            "export" => Command::Export,
            "close" | "exit" => Command::Exit,
            _ => return Err(CommandError::Unknown(word)),
        };

        Ok(command)
    }
}
