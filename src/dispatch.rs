//! Dispatch Module
//!
//! The core loop that coordinates all components.
//!
//! ## Responsibilities
//! - Parse each input line into a command
//! - Execute commands against the table
//! - Render one reply per non-empty line
//! - Tick the auto-save policy and persist when due

use std::io::{BufRead, Write};

use tracing::{debug, warn};

use crate::config::Config;
use crate::error::Result;
use crate::pattern::Pattern;
use crate::protocol::{Command, Reply};
use crate::storage::DataFile;
use crate::table::Table;

/// Counter-driven save policy
///
/// `tick` reports a save as due when the count of previously processed
/// lines is a multiple of the interval, so the very first processed line
/// already triggers one. Every processed line counts, empty and malformed
/// ones included, whether or not anything was mutated. An interval of 0
/// disables the policy.
#[derive(Debug, Clone)]
pub struct AutosavePolicy {
    interval: u64,
    ticks: u64,
}

impl AutosavePolicy {
    /// Create a policy that saves every `interval` processed lines
    pub fn new(interval: u64) -> Self {
        Self { interval, ticks: 0 }
    }

    /// Advance by one processed line; reports whether a save is due
    pub fn tick(&mut self) -> bool {
        let due = self.interval != 0 && self.ticks % self.interval == 0;
        self.ticks += 1;
        due
    }

    /// Number of lines processed so far
    pub fn ticks(&self) -> u64 {
        self.ticks
    }
}

/// What the read loop should do after one dispatched line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dispatch {
    /// Write this reply, then keep reading
    Reply(Reply),

    /// No reply owed (empty line); keep reading
    Silent,

    /// End the session
    Exit,
}

/// Routes parsed commands to the table and the data file
pub struct Dispatcher {
    /// Store configuration
    config: Config,

    /// The in-memory table, the single source of truth between saves
    table: Table,

    /// Handle to the flat data file
    data_file: DataFile,

    /// Counts processed lines and schedules saves
    autosave: AutosavePolicy,
}

impl Dispatcher {
    /// Create a dispatcher for `config`, loading the table from the data file
    ///
    /// An unreadable data file is not fatal: the failure is logged and the
    /// store starts from an empty table.
    pub fn new(config: Config) -> Self {
        let data_file = DataFile::new(&config.data_path);
        let table = match data_file.load() {
            Ok(table) => {
                debug!(
                    "loaded {} entries from {}",
                    table.len(),
                    data_file.path().display()
                );
                table
            }
            Err(e) => {
                warn!("{}; starting from an empty table", e);
                Table::new()
            }
        };
        let autosave = AutosavePolicy::new(config.autosave_interval);

        Self {
            config,
            table,
            data_file,
            autosave,
        }
    }

    // =========================================================================
    // Read Loop
    // =========================================================================

    /// Drive the dispatcher from a line source to a reply sink
    ///
    /// Reads until EXIT or until the source reaches end-of-stream, so a
    /// closed stdin ends the session instead of spinning. Replies are
    /// written one per line and flushed immediately. An I/O error on either
    /// stream aborts the loop.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> Result<()> {
        for line in input.lines() {
            let line = line?;
            match self.dispatch_line(&line) {
                Dispatch::Reply(reply) => {
                    writeln!(output, "{}", reply)?;
                    output.flush()?;
                }
                Dispatch::Silent => {}
                Dispatch::Exit => break,
            }
        }

        Ok(())
    }

    /// Dispatch one input line: parse, execute, then tick the save policy
    ///
    /// EXIT returns before the tick, so the exiting line itself never
    /// triggers a save.
    pub fn dispatch_line(&mut self, line: &str) -> Dispatch {
        let dispatch = match Command::parse(line) {
            Ok(Some(command)) => self.execute(command),
            Ok(None) => Dispatch::Silent,
            Err(e) => {
                debug!("rejected: {}", e);
                Dispatch::Reply(Reply::Incorrect)
            }
        };

        if dispatch == Dispatch::Exit {
            return dispatch;
        }

        if self.autosave.tick() {
            // A failed auto-save is logged and the session carries on; the
            // table stays intact for the next attempt.
            if let Err(e) = self.data_file.save(&self.table) {
                warn!("auto-save failed: {}", e);
            }
        }

        dispatch
    }

    // =========================================================================
    // Command Execution
    // =========================================================================

    /// Execute a parsed command
    fn execute(&mut self, command: Command) -> Dispatch {
        match command {
            Command::Keys { pattern } => Dispatch::Reply(self.keys(&pattern)),
            Command::Set { key, value } => {
                self.table.upsert(key, value);
                Dispatch::Reply(Reply::Ok)
            }
            Command::Get { key } => Dispatch::Reply(Reply::value_or_null(self.table.get(&key))),
            Command::Del { key } => Dispatch::Reply(Reply::Removed(self.table.remove(&key))),
            Command::FlushAll => {
                self.table.clear();
                Dispatch::Reply(Reply::Ok)
            }
            Command::Save => {
                // SAVE acknowledges even when the write fails: the reply
                // reports that the request was handled, the log carries the
                // failure.
                if let Err(e) = self.data_file.save(&self.table) {
                    warn!("{}", e);
                }
                Dispatch::Reply(Reply::Ok)
            }
            Command::Exit => Dispatch::Exit,
        }
    }

    /// List keys matching a raw pattern string
    fn keys(&self, raw: &str) -> Reply {
        match Pattern::compile(raw, self.config.literal_exact_match) {
            Ok(pattern) => Reply::Listing(
                self.table
                    .keys_matching(&pattern)
                    .into_iter()
                    .map(|(position, key)| (position, key.to_string()))
                    .collect(),
            ),
            Err(e) => {
                debug!("rejected pattern: {}", e);
                Reply::Incorrect
            }
        }
    }

    // =========================================================================
    // Accessors (for testing and debugging)
    // =========================================================================

    /// The in-memory table
    pub fn table(&self) -> &Table {
        &self.table
    }

    /// The data file handle
    pub fn data_file(&self) -> &DataFile {
        &self.data_file
    }

    /// The configuration
    pub fn config(&self) -> &Config {
        &self.config
    }
}
