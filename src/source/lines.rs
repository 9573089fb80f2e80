//! Splitting raw input into lines.

use crate::model::error::InputError;
use std::io::BufRead;

/// Read `reader` to EOF and split it into lines.
///
/// Lines end at `\n`; a trailing `\r` is dropped, and a final line without a
/// newline is kept. Invalid UTF-8 is replaced lossily rather than rejected,
/// since lines are opaque text to the picker.
///
/// # Errors
///
/// Returns `InputError::Io` if reading fails.
pub fn read_lines<R: BufRead>(reader: R) -> Result<Vec<String>, InputError> {
    let mut lines = Vec::new();

    for chunk in reader.split(b'\n') {
        let mut bytes = chunk?;
        if bytes.last() == Some(&b'\r') {
            bytes.pop();
        }
        let line = match String::from_utf8(bytes) {
            Ok(line) => line,
            Err(err) => String::from_utf8_lossy(err.as_bytes()).into_owned(),
        };
        lines.push(line);
    }

    Ok(lines)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_newline() {
        let lines = read_lines(&b"one\ntwo\nthree\n"[..]).unwrap();
        assert_eq!(lines, vec!["one", "two", "three"]);
    }

    #[test]
    fn keeps_final_line_without_newline() {
        let lines = read_lines(&b"one\ntwo"[..]).unwrap();
        assert_eq!(lines, vec!["one", "two"]);
    }

    #[test]
    fn strips_carriage_return() {
        let lines = read_lines(&b"one\r\ntwo\r\n"[..]).unwrap();
        assert_eq!(lines, vec!["one", "two"]);
    }

    #[test]
    fn keeps_blank_lines() {
        let lines = read_lines(&b"a\n\nb\n"[..]).unwrap();
        assert_eq!(lines, vec!["a", "", "b"]);
    }

    #[test]
    fn empty_input_has_no_lines() {
        assert!(read_lines(&b""[..]).unwrap().is_empty());
    }

    #[test]
    fn invalid_utf8_is_replaced() {
        let lines = read_lines(&b"ok\n\xff\xfebad\n"[..]).unwrap();
        assert_eq!(lines[0], "ok");
        assert_eq!(lines[1], "\u{FFFD}\u{FFFD}bad");
    }

    #[test]
    fn control_characters_pass_through() {
        let lines = read_lines(&b"tab\there\x1b[0m\n"[..]).unwrap();
        assert_eq!(lines, vec!["tab\there\x1b[0m"]);
    }
}
