//! Bounded line echo.
//!
//! Lines are collected in full before anything is written back, so a limit
//! violation leaves the output untouched.

use std::io::{self, BufRead, Read, Write};

use crate::error::EchoError;

/// Reads exactly `count` lines of at most `max_len` characters each.
///
/// The line terminator (`\n` or `\r\n`) is not part of the returned text. At most
/// `4 * max_len + 2` bytes are buffered per line, so input without newlines is
/// rejected as too long instead of being held in memory.
pub fn read_lines<R: BufRead>(
    mut reader: R,
    count: usize,
    max_len: usize,
) -> Result<Vec<String>, EchoError> {
    // Worst case of `max_len` four-byte characters plus `\r\n`.
    let limit = u64::try_from(max_len.saturating_mul(4).saturating_add(2)).unwrap_or(u64::MAX);

    let mut lines = Vec::with_capacity(count);
    let mut buf = Vec::new();

    while lines.len() < count {
        let line = lines.len() + 1;

        buf.clear();
        let read = (&mut reader).take(limit).read_until(b'\n', &mut buf)?;
        if read == 0 {
            return Err(EchoError::MissingLines {
                expected: count,
                found: lines.len(),
            });
        }
        if !buf.ends_with(b"\n") && read as u64 == limit {
            return Err(EchoError::LineTooLong { line, max: max_len });
        }

        let text = std::str::from_utf8(&buf)
            .map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err))?;
        let text = strip_line_ending(text);
        let len = text.chars().count();
        if len > max_len {
            return Err(EchoError::LineTooLong { line, max: max_len });
        }

        tracing::trace!(line, len, "read line");
        lines.push(text.to_owned());
    }

    Ok(lines)
}

/// Formats a 1-based line number and its text as `Line #NN: text`.
pub fn format_line(index: usize, text: &str) -> String {
    format!("Line #{index:02}: {text}")
}

pub fn write_lines<W: Write>(mut writer: W, lines: &[String]) -> Result<(), EchoError> {
    for (i, line) in lines.iter().enumerate() {
        writeln!(writer, "{}", format_line(i + 1, line))?;
    }
    writer.flush()?;
    Ok(())
}

fn strip_line_ending(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}
