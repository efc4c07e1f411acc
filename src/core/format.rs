//! Header layout and decimal helpers shared by every text sink.
//!
//! Everything here appends into a caller-owned `String` so a sink can reuse
//! one buffer across calls.

use super::flags::Flags;
use super::log_level::Level;
use chrono::{DateTime, Datelike, FixedOffset, Timelike, Utc};

/// Scratch size for [`itoa`]. `u64::MAX` has 20 decimal digits.
const SCRATCH_LEN: usize = 20;

/// Placeholder location for entries without a source file.
pub const UNKNOWN_FILE: &str = "???";

/// Append `i` in decimal, zero-padded to `width` digits.
///
/// A `width` of 0 or 1 writes the number without padding. Widths beyond the
/// scratch space are clamped to 20 digits.
pub fn itoa(buf: &mut String, mut i: u64, width: usize) {
    let mut scratch = [0u8; SCRATCH_LEN];
    let mut bp = SCRATCH_LEN - 1;
    let mut wid = width.min(SCRATCH_LEN);
    // Assemble in reverse.
    while i >= 10 || wid > 1 {
        wid = wid.saturating_sub(1);
        let q = i / 10;
        scratch[bp] = b'0' + (i - q * 10) as u8;
        bp -= 1;
        i = q;
    }
    scratch[bp] = b'0' + i as u8;
    buf.extend(scratch[bp..].iter().map(|&d| d as char));
}

/// Append a signed integer without padding.
pub fn itoa_signed(buf: &mut String, i: i64) {
    if i < 0 {
        buf.push('-');
    }
    itoa(buf, i.unsigned_abs(), 0);
}

/// Append the upper-case header name of `level`, or `Level(n)` for levels
/// without a name.
pub fn push_level_name(buf: &mut String, level: Level) {
    match level.name() {
        Some(name) => buf.push_str(name),
        None => push_level_number(buf, level),
    }
}

pub(crate) fn push_level_number(buf: &mut String, level: Level) {
    buf.push_str("Level(");
    itoa_signed(buf, i64::from(level.value()));
    buf.push(')');
}

/// Strip everything up to and including the last path separator.
pub fn short_file(file: &str) -> &str {
    match file.rfind(['/', '\\']) {
        Some(idx) => &file[idx + 1..],
        None => file,
    }
}

/// Append the header selected by `flags`.
///
/// `file` must already have the [`UNKNOWN_FILE`] substitution applied.
pub fn format_header(
    buf: &mut String,
    flags: Flags,
    time: &DateTime<FixedOffset>,
    level: Level,
    file: &str,
    line: u32,
) {
    let time = if flags.contains(Flags::UTC) {
        time.with_timezone(&Utc).fixed_offset()
    } else {
        *time
    };

    if flags.contains(Flags::SHOW_DATE) {
        let year = time.year();
        if year < 0 {
            buf.push('-');
        }
        itoa(buf, u64::from(year.unsigned_abs()), 4);
        buf.push('/');
        itoa(buf, u64::from(time.month()), 2);
        buf.push('/');
        itoa(buf, u64::from(time.day()), 2);
        buf.push(' ');
    }

    if flags.contains(Flags::SHOW_TIME) {
        itoa(buf, u64::from(time.hour()), 2);
        buf.push(':');
        itoa(buf, u64::from(time.minute()), 2);
        buf.push(':');
        itoa(buf, u64::from(time.second()), 2);
        if flags.contains(Flags::MICROSECONDS) {
            buf.push('.');
            // Leap seconds report nanoseconds past 1e9.
            let micros = (time.nanosecond() % 1_000_000_000) / 1_000;
            itoa(buf, u64::from(micros), 6);
        }
        buf.push(' ');
    }

    let show_level = flags.contains(Flags::SHOW_LEVEL);
    let show_file = flags.intersects(Flags::SHOW_FILE | Flags::SHORT_FILE);
    if !show_level && !show_file {
        return;
    }

    let file = if flags.contains(Flags::SHORT_FILE) {
        short_file(file)
    } else {
        file
    };

    if show_level {
        push_level_name(buf, level);
        if show_file {
            buf.push(' ');
        }
    }
    if show_file {
        buf.push_str(file);
        buf.push(':');
        itoa(buf, u64::from(line), 0);
    }
    buf.push_str(": ");
}

/// Append `msg` with at most one trailing newline removed.
pub fn push_message(buf: &mut String, msg: &str) {
    buf.push_str(msg.strip_suffix('\n').unwrap_or(msg));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn itoa_str(i: u64, width: usize) -> String {
        let mut buf = String::new();
        itoa(&mut buf, i, width);
        buf
    }

    #[test]
    fn test_itoa_unpadded() {
        assert_eq!(itoa_str(0, 0), "0");
        assert_eq!(itoa_str(7, 1), "7");
        assert_eq!(itoa_str(278, 0), "278");
    }

    #[test]
    fn test_itoa_zero_padded() {
        assert_eq!(itoa_str(2, 2), "02");
        assert_eq!(itoa_str(456789, 6), "456789");
        assert_eq!(itoa_str(42, 6), "000042");
        assert_eq!(itoa_str(2017, 4), "2017");
        assert_eq!(itoa_str(12345, 2), "12345");
    }

    #[test]
    fn test_itoa_extremes() {
        assert_eq!(itoa_str(u64::MAX, 0), "18446744073709551615");
        assert_eq!(itoa_str(u64::MAX, 20), "18446744073709551615");
        assert_eq!(itoa_str(1, 64), "00000000000000000001");
    }

    #[test]
    fn test_itoa_signed() {
        let mut buf = String::new();
        itoa_signed(&mut buf, -10);
        buf.push(' ');
        itoa_signed(&mut buf, i64::MIN);
        assert_eq!(buf, "-10 -9223372036854775808");
    }

    #[test]
    fn test_short_file() {
        assert_eq!(short_file("foo/bar.rs"), "bar.rs");
        assert_eq!(short_file("/abs/path/main.rs"), "main.rs");
        assert_eq!(short_file("src\\lib.rs"), "lib.rs");
        assert_eq!(short_file("plain.rs"), "plain.rs");
        assert_eq!(short_file("dir/"), "");
    }

    #[test]
    fn test_push_message_strips_one_newline() {
        let mut buf = String::new();
        push_message(&mut buf, "a\n\n");
        assert_eq!(buf, "a\n");

        buf.clear();
        push_message(&mut buf, "");
        assert_eq!(buf, "");

        buf.clear();
        push_message(&mut buf, "\n");
        assert_eq!(buf, "");
    }
}
