//! Log entry structure

use super::flags::Flags;
use super::format::{format_header, push_message, UNKNOWN_FILE};
use super::log_level::Level;
use chrono::{DateTime, FixedOffset, Local};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::panic::Location;

/// A single log record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub msg: String,
    /// When the entry was created, in the zone it was observed in.
    pub time: DateTime<FixedOffset>,
    /// A logger may skip an entry based on its level.
    pub level: Level,
    /// Source file of the call site. Empty when unknown.
    pub file: String,
    /// Line in `file`. Meaningless when `file` is empty.
    pub line: u32,
}

impl Entry {
    /// Create an entry stamped with the current local time and the caller's
    /// source location.
    #[track_caller]
    pub fn new(level: Level, msg: impl Into<String>) -> Self {
        let location = Location::caller();
        Self {
            msg: msg.into(),
            time: Local::now().fixed_offset(),
            level,
            file: location.file().to_string(),
            line: location.line(),
        }
    }

    #[must_use]
    pub fn with_time(mut self, time: DateTime<FixedOffset>) -> Self {
        self.time = time;
        self
    }

    #[must_use]
    pub fn with_location(mut self, file: impl Into<String>, line: u32) -> Self {
        self.file = file.into();
        self.line = line;
        self
    }

    #[must_use]
    pub fn with_message(mut self, msg: impl Into<String>) -> Self {
        self.msg = msg.into();
        self
    }

    /// Location as rendered: `("???", 0)` when the file is unknown.
    pub fn location(&self) -> (&str, u32) {
        if self.file.is_empty() {
            (UNKNOWN_FILE, 0)
        } else {
            (&self.file, self.line)
        }
    }

    /// Append the header selected by `flags` and the message to `buf`.
    ///
    /// Even if `msg` ends in a newline, nothing appended ends in one: a single
    /// trailing newline is dropped and no terminator is added.
    pub fn append_to(&self, buf: &mut String, flags: Flags) {
        let (file, line) = self.location();
        format_header(buf, flags, &self.time, self.level, file, line);
        push_message(buf, &self.msg);
    }

    /// Render the entry on its own.
    #[must_use]
    pub fn format(&self, flags: Flags) -> String {
        let mut buf = String::with_capacity(self.msg.len() + 48);
        self.append_to(&mut buf, flags);
        buf
    }
}

impl fmt::Display for Entry {
    /// Renders with [`Flags::STD`].
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format(Flags::STD))
    }
}
