//! Input decoding module
//!
//! Turns the raw bytes of an input file into text under an explicit policy.
//! A byte order mark always decides the encoding; without one, the policy
//! decides what happens to bytes that are not valid UTF-8.
//!
//! Decoded text is split into lines on `\n`, `\r\n` and lone `\r`.

use chardetng::EncodingDetector;
use clap::ValueEnum;
use encoding_rs::Encoding;

/// How to handle input that is not valid UTF-8
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum EncodingPolicy {
    /// Reject invalid UTF-8
    #[default]
    Strict,
    /// Replace invalid UTF-8 sequences with U+FFFD
    Lossy,
    /// Guess the encoding from the content and transcode to UTF-8
    Detect,
}

/// Decoded input text
#[derive(Debug, Clone)]
pub struct Decoded {
    pub text: String,
    /// Name of the encoding the bytes were read as
    pub encoding: &'static str,
    /// True if any sequence had to be replaced
    pub had_errors: bool,
}

impl Decoded {
    /// Iterate over the lines of the decoded text
    pub fn lines(&self) -> Lines<'_> {
        split_lines(&self.text)
    }
}

/// Line iterator accepting `\n`, `\r\n` and `\r` as terminators
///
/// A terminator at the very end does not start an extra empty line.
pub struct Lines<'a> {
    rest: &'a str,
}

pub fn split_lines(text: &str) -> Lines<'_> {
    Lines { rest: text }
}

impl<'a> Iterator for Lines<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        if self.rest.is_empty() {
            return None;
        }

        let bytes = self.rest.as_bytes();
        let Some(end) = memchr::memchr2(b'\n', b'\r', bytes) else {
            let line = self.rest;
            self.rest = "";
            return Some(line);
        };

        let line = &self.rest[..end];
        let terminator = if bytes[end] == b'\r' && bytes.get(end + 1) == Some(&b'\n') {
            2
        } else {
            1
        };
        self.rest = &self.rest[end + terminator..];
        Some(line)
    }
}

/// Input bytes were not valid UTF-8 under the strict policy
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid UTF-8 at byte offset {offset} (use --encoding lossy or --encoding detect)")]
pub struct InvalidUtf8 {
    pub offset: usize,
}

/// Decode file content according to `policy`
pub fn decode(bytes: &[u8], policy: EncodingPolicy) -> Result<Decoded, InvalidUtf8> {
    if let Some((encoding, bom_len)) = Encoding::for_bom(bytes) {
        log::debug!("BOM found: decoding input as {}", encoding.name());
        return Ok(decode_with(encoding, &bytes[bom_len..]));
    }

    match policy {
        EncodingPolicy::Strict => match std::str::from_utf8(bytes) {
            Ok(text) => Ok(Decoded {
                text: text.to_string(),
                encoding: encoding_rs::UTF_8.name(),
                had_errors: false,
            }),
            Err(e) => Err(InvalidUtf8 {
                offset: e.valid_up_to(),
            }),
        },
        EncodingPolicy::Lossy => Ok(decode_with(encoding_rs::UTF_8, bytes)),
        EncodingPolicy::Detect => {
            let encoding = detect_encoding(bytes);
            log::debug!("Detected input encoding: {}", encoding.name());
            Ok(decode_with(encoding, bytes))
        }
    }
}

/// Guess the encoding of BOM-less content
pub fn detect_encoding(bytes: &[u8]) -> &'static Encoding {
    if bytes.is_empty() || std::str::from_utf8(bytes).is_ok() {
        return encoding_rs::UTF_8;
    }

    let mut detector = EncodingDetector::new();
    detector.feed(bytes, true);
    detector.guess(None, true)
}

fn decode_with(encoding: &'static Encoding, bytes: &[u8]) -> Decoded {
    let (text, had_errors) = encoding.decode_without_bom_handling(bytes);
    if had_errors {
        log::warn!(
            "Input contains byte sequences that are not valid {}; they were replaced",
            encoding.name()
        );
    }

    Decoded {
        text: text.into_owned(),
        encoding: encoding.name(),
        had_errors,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_lines() {
        let lines: Vec<_> = split_lines("a.com\nb.com\r\nc.com\rd.com").collect();
        assert_eq!(lines, vec!["a.com", "b.com", "c.com", "d.com"]);

        let lines: Vec<_> = split_lines("b.com\ra.com\r").collect();
        assert_eq!(lines, vec!["b.com", "a.com"]);

        let lines: Vec<_> = split_lines("a.com\n\n\r\n").collect();
        assert_eq!(lines, vec!["a.com", "", ""]);

        assert_eq!(split_lines("").count(), 0);
    }

    #[test]
    fn test_strict_accepts_utf8() {
        let decoded = decode("a.com\nпример.рф\n".as_bytes(), EncodingPolicy::Strict).unwrap();

        assert_eq!(decoded.text, "a.com\nпример.рф\n");
        assert_eq!(decoded.encoding, "UTF-8");
        assert!(!decoded.had_errors);
    }

    #[test]
    fn test_strict_rejects_invalid_utf8() {
        let err = decode(b"a.com\n\xff\xfeb.com\n", EncodingPolicy::Strict);
        // 0xFF 0xFE here is mid-file, not a BOM
        assert_eq!(err.unwrap_err(), InvalidUtf8 { offset: 6 });
    }

    #[test]
    fn test_lossy_replaces_invalid_bytes() {
        let decoded = decode(b"a.com\nb\xffc.com\n", EncodingPolicy::Lossy).unwrap();

        assert_eq!(decoded.text, "a.com\nb\u{FFFD}c.com\n");
        assert!(decoded.had_errors);
    }

    #[test]
    fn test_utf8_bom_is_stripped() {
        let decoded = decode(b"\xEF\xBB\xBFwww.a.com\n", EncodingPolicy::Strict).unwrap();

        assert_eq!(decoded.text, "www.a.com\n");
        assert_eq!(decoded.encoding, "UTF-8");
    }

    #[test]
    fn test_utf16le_bom() {
        let mut bytes = vec![0xFF, 0xFE];
        for unit in "a.com\n".encode_utf16() {
            bytes.extend_from_slice(&unit.to_le_bytes());
        }

        let decoded = decode(&bytes, EncodingPolicy::Strict).unwrap();
        assert_eq!(decoded.text, "a.com\n");
        assert_eq!(decoded.encoding, "UTF-16LE");
    }

    #[test]
    fn test_detect_keeps_valid_utf8() {
        assert_eq!(detect_encoding(b""), encoding_rs::UTF_8);
        assert_eq!(detect_encoding("müller.de".as_bytes()), encoding_rs::UTF_8);
    }

    #[test]
    fn test_detect_transcodes_legacy_bytes() {
        // "müller.de" in windows-1252
        let decoded = decode(b"m\xfcller.de\n", EncodingPolicy::Detect).unwrap();

        assert_ne!(decoded.encoding, "UTF-8");
        assert!(decoded.text.ends_with("ller.de\n"));
        assert!(!decoded.text.contains('\u{FFFD}'));
    }
}
