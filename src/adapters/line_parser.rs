//! Turn formatted lines back into entries
//!
//! Lines written with [`Flags::PARSEABLE`] and no prefix,
//!
//! ```text
//! 2009/01/23 01:23:23.123123 /a/b/c/d.rs:23: message
//! ```
//!
//! can be parsed back into an [`Entry`] with [`parse_line`]. [`LineParser`]
//! does that for every write it receives and forwards the result to a
//! [`Logger`], which lets text-only producers feed any logger.

use crate::appenders::WriterAppender;
use crate::core::{Entry, Flags, Level, LogContext, Logger, LoggerError, Result};
use crate::core::format::UNKNOWN_FILE;
use chrono::{Local, NaiveDateTime, TimeZone, Utc};
use std::fmt;
use std::io;

/// `YYYY/MM/DD HH:MM:SS.ffffff ` including the trailing space.
const TIMESTAMP_LEN: usize = 27;
const TIMESTAMP_LAYOUT: &str = "%Y/%m/%d %H:%M:%S%.f";
const MSG_SEPARATOR: &str = ": ";

/// Parse one line written with [`Flags::PARSEABLE`].
///
/// The time is read as UTC and converted to local time. A location of `???`
/// becomes an empty file with line 0. One trailing newline is dropped from the
/// message.
///
/// # Examples
///
/// ```
/// use linelog::adapters::line_parser::parse_line;
/// use linelog::Level;
///
/// let entry = parse_line("2017/02/17 01:02:03.456789 foo/bar.rs:278: hi\n", Level::WARN).unwrap();
/// assert_eq!(entry.file, "foo/bar.rs");
/// assert_eq!(entry.line, 278);
/// assert_eq!(entry.msg, "hi");
/// assert_eq!(entry.level, Level::WARN);
/// ```
pub fn parse_line(line: &str, level: Level) -> Result<Entry> {
    let stamp = line
        .get(..TIMESTAMP_LEN)
        .ok_or_else(|| LoggerError::invalid_timestamp(line, "line too short for timestamp"))?;
    let stamp = stamp
        .strip_suffix(' ')
        .ok_or_else(|| LoggerError::invalid_timestamp(line, "no space after timestamp"))?;
    let naive = NaiveDateTime::parse_from_str(stamp, TIMESTAMP_LAYOUT)
        .map_err(|e| LoggerError::invalid_timestamp(line, e.to_string()))?;
    let time = Utc
        .from_utc_datetime(&naive)
        .with_timezone(&Local)
        .fixed_offset();

    let rest = &line[TIMESTAMP_LEN..];
    let location_end = rest
        .find(MSG_SEPARATOR)
        .ok_or_else(|| LoggerError::missing_separator(line))?;
    let location = &rest[..location_end];
    let (file, line_no) = match location.rfind(':') {
        None => (location, 0),
        Some(colon) => {
            let line_no = location[colon + 1..]
                .parse::<u32>()
                .map_err(|e| LoggerError::invalid_line_number(line, e.to_string()))?;
            (&location[..colon], line_no)
        }
    };
    let (file, line_no) = if file == UNKNOWN_FILE {
        ("", 0)
    } else {
        (file, line_no)
    };

    let msg = &rest[location_end + MSG_SEPARATOR.len()..];
    let msg = msg.strip_suffix('\n').unwrap_or(msg);

    Ok(Entry {
        msg: msg.to_string(),
        time,
        level,
        file: file.to_string(),
        line: line_no,
    })
}

/// An `io::Write` that parses each write as one line and logs it.
///
/// Every entry gets the parser's level and is logged with its context. Writes
/// that do not parse fail with [`io::ErrorKind::InvalidData`] and nothing is
/// logged.
pub struct LineParser<L> {
    dst: L,
    ctx: LogContext,
    level: Level,
}

impl<L: Logger> LineParser<L> {
    /// Parse into `dst` at [`Level::INFO`] with an empty context.
    pub fn new(dst: L) -> Self {
        Self {
            dst,
            ctx: LogContext::background(),
            level: Level::INFO,
        }
    }

    #[must_use]
    pub fn with_level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    #[must_use]
    pub fn with_context(mut self, ctx: LogContext) -> Self {
        self.ctx = ctx;
        self
    }

    pub fn level(&self) -> Level {
        self.level
    }

    pub fn into_inner(self) -> L {
        self.dst
    }

    /// A text sink whose output this parser understands, so entries logged to
    /// it reach `dst` with their time and location intact.
    pub fn into_appender(self) -> WriterAppender<Self> {
        WriterAppender::new(self, "", Flags::PARSEABLE)
    }
}

impl<L: Logger> io::Write for LineParser<L> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let line =
            std::str::from_utf8(buf).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        let entry =
            parse_line(line, self.level).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        self.dst.log(&self.ctx, &entry);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<L> fmt::Debug for LineParser<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LineParser")
            .field("level", &self.level)
            .field("ctx", &self.ctx)
            .finish()
    }
}
