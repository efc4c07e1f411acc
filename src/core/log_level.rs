//! Log level definitions

use super::error::LoggerError;
use super::format::push_level_number;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// Severity of an entry. Lower values are more verbose.
///
/// The predefined levels are spaced ten apart so that custom severities can
/// sit between them:
///
/// ```
/// use linelog::Level;
///
/// let notice = Level::new(5);
/// assert!(Level::INFO < notice && notice < Level::WARN);
/// assert_eq!(notice.to_string(), "Level(5)");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize)]
#[serde(transparent)]
pub struct Level(i32);

impl Level {
    /// Messages for developers.
    pub const DEBUG: Level = Level(-10);
    /// Messages for users.
    pub const INFO: Level = Level(0);
    /// Warnings for users.
    pub const WARN: Level = Level(10);
    /// Failures.
    pub const ERROR: Level = Level(20);

    pub const fn new(value: i32) -> Self {
        Level(value)
    }

    pub const fn value(self) -> i32 {
        self.0
    }

    /// Upper-case name used in line headers, `None` for custom levels.
    pub const fn name(self) -> Option<&'static str> {
        match self {
            Level::DEBUG => Some("DEBUG"),
            Level::INFO => Some("INFO"),
            Level::WARN => Some("WARN"),
            Level::ERROR => Some("ERROR"),
            _ => None,
        }
    }

    #[cfg(feature = "console")]
    pub fn color_code(self) -> colored::Color {
        use colored::Color::*;
        if self < Level::INFO {
            Blue
        } else if self < Level::WARN {
            Green
        } else if self < Level::ERROR {
            Yellow
        } else {
            Red
        }
    }
}

impl From<i32> for Level {
    fn from(value: i32) -> Self {
        Level(value)
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match *self {
            Level::DEBUG => "Debug",
            Level::INFO => "Info",
            Level::WARN => "Warn",
            Level::ERROR => "Error",
            _ => {
                let mut buf = String::with_capacity(16);
                push_level_number(&mut buf, *self);
                return f.write_str(&buf);
            }
        };
        f.write_str(name)
    }
}

impl FromStr for Level {
    type Err = LoggerError;

    /// Accepts level names in any case (`WARNING` is an alias for `WARN`),
    /// `Level(n)`, or a bare signed integer.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        match trimmed.to_uppercase().as_str() {
            "DEBUG" => return Ok(Level::DEBUG),
            "INFO" => return Ok(Level::INFO),
            "WARN" | "WARNING" => return Ok(Level::WARN),
            "ERROR" => return Ok(Level::ERROR),
            _ => {}
        }
        let number = trimmed
            .strip_prefix("Level(")
            .and_then(|rest| rest.strip_suffix(')'))
            .unwrap_or(trimmed);
        number
            .parse::<i32>()
            .map(Level)
            .map_err(|_| LoggerError::InvalidLevel(s.to_string()))
    }
}

impl<'de> Deserialize<'de> for Level {
    /// Accepts the serialized integer or any string `FromStr` accepts.
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Number(i32),
            Name(String),
        }

        match Repr::deserialize(deserializer)? {
            Repr::Number(value) => Ok(Level(value)),
            Repr::Name(name) => name.parse().map_err(serde::de::Error::custom),
        }
    }
}
