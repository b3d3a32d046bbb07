//! Command dispatcher.
//!
//! Executes parsed commands against an [`AddressBook`] and turns every
//! outcome, success or failure, into the reply text shown to the user.

use super::{Command, CommandError};
use crate::book::{AddressBook, Upsert};
use crate::config::Config;
use crate::error::{BookError, NotFoundError};
use crate::matching::NameMatcher;
use crate::models::Record;
use chrono::NaiveDate;
use tracing::{debug, info, warn};

/// Reply to one line of input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Print the message and keep going
    Message(String),
    /// Print the message and end the session
    Exit(String),
}

impl Reply {
    pub fn text(&self) -> &str {
        match self {
            Reply::Message(text) | Reply::Exit(text) => text,
        }
    }
}

/// The assistant: an address book plus the settings that shape its replies.
pub struct Assistant {
    book: AddressBook,
    config: Config,
    matcher: NameMatcher,
}

impl Assistant {
    /// Create an assistant with an empty address book.
    pub fn new(config: Config) -> Self {
        Self::with_book(AddressBook::new(), config)
    }

    /// Create an assistant around an existing address book.
    pub fn with_book(book: AddressBook, config: Config) -> Self {
        Self {
            book,
            config,
            matcher: NameMatcher::new(),
        }
    }

    pub fn book(&self) -> &AddressBook {
        &self.book
    }

    /// Parse and execute one input line. Blank lines yield no reply.
    pub fn handle_line(&mut self, line: &str, today: NaiveDate) -> Option<Reply> {
        let result = line
            .parse::<Command>()
            .and_then(|command| self.execute(command, today));

        match result {
            Ok(reply) => Some(reply),
            Err(CommandError::Empty) => None,
            Err(err) => {
                debug!(error = %err, "command failed");
                Some(Reply::Message(self.describe_error(&err)))
            }
        }
    }

    /// Execute a parsed command.
    pub fn execute(&mut self, command: Command, today: NaiveDate) -> Result<Reply, CommandError> {
        let message = match command {
            Command::Hello => "How can I help you?".to_string(),
            Command::Add { name, phone } => match self.book.upsert_contact(&name, &phone)? {
                Upsert::Created => {
                    info!(name = %name, "contact added");
                    "Contact added.".to_string()
                }
                Upsert::Updated => "Contact updated.".to_string(),
            },
            Command::Change { name, old, new } => {
                self.record_mut(&name)?.edit_phone(&old, &new)?;
                info!(name = %name, "phone changed");
                "Contact updated.".to_string()
            }
            Command::RemovePhone { name, phone } => {
                self.record_mut(&name)?
                    .remove_phone(&phone)
                    .map_err(BookError::from)?;
                "Phone removed.".to_string()
            }
            Command::Phone { name } => self
                .record(&name)?
                .joined_phones()
                .unwrap_or_else(|| "No phones.".to_string()),
            Command::Delete { name } => {
                self.book.delete(&name);
                "Contact deleted.".to_string()
            }
            Command::All => self.book.to_string(),
            Command::AddBirthday { name, birthday } => {
                self.record_mut(&name)?
                    .add_birthday(&birthday)
                    .map_err(BookError::from)?;
                info!(name = %name, "birthday set");
                "Birthday added.".to_string()
            }
            Command::ShowBirthday { name } => self
                .record(&name)?
                .birthday()
                .map_or_else(|| "Birthday not set.".to_string(), ToString::to_string),
            Command::Birthdays => {
                let upcoming = self
                    .book
                    .upcoming_birthdays(today, self.config.birthday_window_days);
                if upcoming.is_empty() {
                    "No upcoming birthdays.".to_string()
                } else {
                    upcoming
                        .iter()
                        .map(ToString::to_string)
                        .collect::<Vec<_>>()
                        .join("\n")
                }
            }
            Command::Export => match self.book.to_json() {
                Ok(json) => json,
                Err(err) => {
                    warn!(error = %err, "export failed");
                    format!("Export failed: {}", err)
                }
            },
            Command::Exit => return Ok(Reply::Exit("Good bye!".to_string())),
        };

        Ok(Reply::Message(message))
    }

    fn record(&self, name: &str) -> Result<&Record, CommandError> {
        self.book
            .find(name)
            .ok_or_else(|| BookError::from(NotFoundError::Contact(name.to_string())).into())
    }

    fn record_mut(&mut self, name: &str) -> Result<&mut Record, CommandError> {
        self.book
            .find_mut(name)
            .ok_or_else(|| BookError::from(NotFoundError::Contact(name.to_string())).into())
    }

    /// User-facing text for a failed command.
    fn describe_error(&self, err: &CommandError) -> String {
        match err {
            CommandError::Book(BookError::NotFound(NotFoundError::Contact(name))) => {
                let suggestions = self.matcher.suggest(
                    name,
                    self.book.names(),
                    self.config.max_suggestions,
                    self.config.suggestion_threshold,
                );
                if suggestions.is_empty() {
                    err.to_string()
                } else {
                    let names: Vec<&str> = suggestions.iter().map(|s| s.name.as_str()).collect();
                    format!("{}. Did you mean: {}?", err, names.join(", "))
                }
            }
            other => other.to_string(),
        }
    }
}
