//! Command definitions
//!
//! Parses one line of input into a command.

use crate::error::{FlatKvError, Result};

/// A parsed command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// List keys matching a wildcard pattern
    Keys { pattern: String },

    /// Insert or overwrite a key-value pair
    Set { key: String, value: String },

    /// Get a value by key
    Get { key: String },

    /// Delete a key
    Del { key: String },

    /// Remove every pair in the table
    FlushAll,

    /// Write the table to the data file now
    Save,

    /// End the session
    Exit,
}

impl Command {
    /// Parse one input line
    ///
    /// Returns `Ok(None)` only for a completely empty line, which is owed
    /// no reply. Any other line that does not form a complete command is a
    /// `Query` error; a line of nothing but whitespace counts as malformed,
    /// not as empty.
    pub fn parse(line: &str) -> Result<Option<Command>> {
        if line.is_empty() {
            return Ok(None);
        }

        let mut tokens = line.split_ascii_whitespace();
        let verb = match tokens.next() {
            Some(verb) => verb.to_ascii_lowercase(),
            None => return Err(FlatKvError::Query(line.to_string())),
        };
        let arg1 = tokens.next();
        let arg2 = tokens.next();

        let command = match (verb.as_str(), arg1, arg2) {
            ("keys", Some(pattern), _) => Command::Keys {
                pattern: pattern.to_string(),
            },
            ("set", Some(key), Some(value)) => Command::Set {
                key: key.to_string(),
                value: value.to_string(),
            },
            ("get", Some(key), _) => Command::Get {
                key: key.to_string(),
            },
            ("del", Some(key), _) => Command::Del {
                key: key.to_string(),
            },
            ("flushall", _, _) => Command::FlushAll,
            ("save", _, _) => Command::Save,
            ("exit", _, _) => Command::Exit,
            _ => return Err(FlatKvError::Query(line.trim().to_string())),
        };

        Ok(Some(command))
    }
}
