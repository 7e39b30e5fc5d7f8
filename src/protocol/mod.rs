//! Protocol Module
//!
//! Defines the line-oriented text protocol.
//!
//! ## Query Format
//!
//! One query per input line, split on ASCII whitespace into a verb and up
//! to two arguments. The verb is case-insensitive; arguments keep their
//! case. Tokens beyond those consumed by the verb are ignored.
//!
//! ```text
//! KEYS <pattern>      list matching keys with their table positions
//! SET <key> <value>   insert or overwrite a pair
//! GET <key>           look up a value
//! DEL <key>           delete a pair
//! FLUSHALL            remove every pair
//! SAVE                write the table to the data file now
//! EXIT                end the session
//! ```
//!
//! ## Replies
//!
//! - `OK`: SET / FLUSHALL / SAVE acknowledged
//! - value text: GET hit
//! - `null`: GET miss, or a KEYS listing with no matches
//! - `1` / `0`: DEL removed a pair / found nothing
//! - `N) key` lines: KEYS listing, numbered by table position
//! - `Incorrect query`: any other non-empty line, whitespace-only ones
//!   included
//!
//! A completely empty line receives no reply at all.

mod command;
mod reply;

pub use command::Command;
pub use reply::Reply;
