//! Reply definitions
//!
//! Represents replies sent back over the output stream. `Display` renders
//! the exact protocol text, without a trailing newline.

use std::fmt;

/// A reply to one query line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Plain `OK` acknowledgement
    Ok,

    /// A stored value
    Value(String),

    /// `null`: no value, or no matching keys
    Null,

    /// DEL outcome: `1` when a pair was removed, `0` otherwise
    Removed(bool),

    /// KEYS listing: matching keys with their 1-based table positions
    Listing(Vec<(usize, String)>),

    /// `Incorrect query`
    Incorrect,
}

impl Reply {
    /// Reply for a lookup: the value when present, `null` otherwise
    pub fn value_or_null(value: Option<&str>) -> Reply {
        match value {
            Some(value) => Reply::Value(value.to_string()),
            None => Reply::Null,
        }
    }
}

impl fmt::Display for Reply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reply::Ok => f.write_str("OK"),
            Reply::Value(value) => f.write_str(value),
            Reply::Null => f.write_str("null"),
            Reply::Removed(true) => f.write_str("1"),
            Reply::Removed(false) => f.write_str("0"),
            // An empty listing renders as a lone `null` line.
            Reply::Listing(items) if items.is_empty() => f.write_str("null"),
            Reply::Listing(items) => {
                for (i, (position, key)) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str("\n")?;
                    }
                    write!(f, "{}) {}", position, key)?;
                }
                Ok(())
            }
            Reply::Incorrect => f.write_str("Incorrect query"),
        }
    }
}
