//! Header flags for text sinks
//!
//! Flags are or'ed together to pick which fields precede the message. The
//! fields always appear in a fixed order regardless of how the flags were
//! combined. For example `SHOW_DATE | SHOW_TIME` produces
//!
//! ```text
//! 2009/01/23 01:23:23 message
//! ```
//!
//! while `SHOW_DATE | SHOW_TIME | MICROSECONDS | SHOW_FILE` produces
//!
//! ```text
//! 2009/01/23 01:23:23.123123 /a/b/c/d.rs:23: message
//! ```

use super::error::LoggerError;
use super::format::itoa;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::ops::{BitAnd, BitOr, BitOrAssign};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Flags(u32);

impl Flags {
    /// The date in the entry's time zone: `2009/01/23`
    pub const SHOW_DATE: Flags = Flags(1 << 0);
    /// The time in the entry's time zone: `01:23:23`
    pub const SHOW_TIME: Flags = Flags(1 << 1);
    /// Microsecond resolution: `01:23:23.123123`. Inert without `SHOW_TIME`.
    pub const MICROSECONDS: Flags = Flags(1 << 2);
    /// Full file name and line number: `/a/b/c/d.rs:23`
    pub const SHOW_FILE: Flags = Flags(1 << 3);
    /// Final file name element and line number: `d.rs:23`. Overrides `SHOW_FILE`.
    pub const SHORT_FILE: Flags = Flags(1 << 4);
    /// Convert to UTC before rendering date and time
    pub const UTC: Flags = Flags(1 << 5);
    /// Level name in capitals: `INFO`
    pub const SHOW_LEVEL: Flags = Flags(1 << 6);

    /// Initial values for the fallback logger
    pub const STD: Flags = Flags(Self::SHOW_DATE.0 | Self::SHOW_TIME.0 | Self::SHOW_LEVEL.0);

    /// Layout understood by [`crate::adapters::line_parser`]
    pub const PARSEABLE: Flags = Flags(
        Self::SHOW_DATE.0 | Self::SHOW_TIME.0 | Self::MICROSECONDS.0 | Self::UTC.0 | Self::SHOW_FILE.0,
    );

    const ALL: Flags = Flags(
        Self::SHOW_DATE.0
            | Self::SHOW_TIME.0
            | Self::MICROSECONDS.0
            | Self::SHOW_FILE.0
            | Self::SHORT_FILE.0
            | Self::UTC.0
            | Self::SHOW_LEVEL.0,
    );

    /// Declaration order, which is also rendering order.
    const NAMED: [(Flags, &'static str); 7] = [
        (Self::SHOW_DATE, "ShowDate"),
        (Self::SHOW_TIME, "ShowTime"),
        (Self::MICROSECONDS, "ShowMicroseconds"),
        (Self::SHOW_FILE, "ShowFile"),
        (Self::SHORT_FILE, "ShortFile"),
        (Self::UTC, "UTC"),
        (Self::SHOW_LEVEL, "ShowLevel"),
    ];

    pub const fn empty() -> Self {
        Flags(0)
    }

    /// Keep every bit, including ones without a name.
    pub const fn from_bits_retain(bits: u32) -> Self {
        Flags(bits)
    }

    pub const fn bits(self) -> u32 {
        self.0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// True if every bit of `other` is set.
    pub const fn contains(self, other: Flags) -> bool {
        self.0 & other.0 == other.0
    }

    /// True if any bit of `other` is set.
    pub const fn intersects(self, other: Flags) -> bool {
        self.0 & other.0 != 0
    }
}

impl BitOr for Flags {
    type Output = Flags;

    fn bitor(self, rhs: Flags) -> Flags {
        Flags(self.0 | rhs.0)
    }
}

impl BitOrAssign for Flags {
    fn bitor_assign(&mut self, rhs: Flags) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for Flags {
    type Output = Flags;

    fn bitand(self, rhs: Flags) -> Flags {
        Flags(self.0 & rhs.0)
    }
}

impl fmt::Display for Flags {
    /// `|`-separated constant names like `ShowDate|ShowFile|ShowLevel`.
    /// Bits without a name trail as one decimal number.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("0");
        }
        let mut buf = String::with_capacity(64);
        for (flag, name) in Self::NAMED {
            if self.contains(flag) {
                if !buf.is_empty() {
                    buf.push('|');
                }
                buf.push_str(name);
            }
        }
        let others = self.0 & !Self::ALL.0;
        if others != 0 {
            if !buf.is_empty() {
                buf.push('|');
            }
            itoa(&mut buf, u64::from(others), 0);
        }
        f.write_str(&buf)
    }
}

impl FromStr for Flags {
    type Err = LoggerError;

    /// Inverse of `Display`. Also accepts `Std`, `Microseconds` for
    /// `ShowMicroseconds`, and decimal numbers in any position.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut flags = Flags::empty();
        for part in s.split('|').map(str::trim) {
            match part {
                "Std" => {
                    flags |= Flags::STD;
                    continue;
                }
                "Microseconds" => {
                    flags |= Flags::MICROSECONDS;
                    continue;
                }
                _ => {}
            }
            if let Some((flag, _)) = Self::NAMED.iter().find(|(_, name)| *name == part) {
                flags |= *flag;
                continue;
            }
            let bits = part
                .parse::<u32>()
                .map_err(|_| LoggerError::InvalidFlag(part.to_string()))?;
            flags |= Flags(bits);
        }
        Ok(flags)
    }
}

impl Serialize for Flags {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Flags {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Bits(u32),
            Names(String),
        }

        match Repr::deserialize(deserializer)? {
            Repr::Bits(bits) => Ok(Flags(bits)),
            Repr::Names(names) => names.parse().map_err(serde::de::Error::custom),
        }
    }
}
