//! Captured analyzer output.

use std::borrow::Cow;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Verbatim stdout of one pylint run, kept as bytes so it can be written
/// back unchanged even when pylint echoes non-UTF-8 source text.
pub struct RawReport(Vec<u8>);

impl RawReport {
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        RawReport(bytes.into())
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Text view for scanning; invalid UTF-8 becomes U+FFFD.
    pub fn as_text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.0)
    }

    /// True when the output holds nothing but whitespace.
    pub fn is_blank(&self) -> bool {
        self.0.iter().all(u8::is_ascii_whitespace)
    }

    /// Bytes preceding the `Report` heading, i.e. the messages without the
    /// trailing `--reports=y` tables. The whole output when no heading exists.
    pub fn without_reports(&self) -> &[u8] {
        let mut offset = 0;
        for line in self.0.split_inclusive(|b| *b == b'\n') {
            if String::from_utf8_lossy(line).trim() == "Report" {
                return &self.0[..offset];
            }
            offset += line.len();
        }
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_without_reports_cuts_at_heading() {
        let r = RawReport::new(
            "************* Module a\na.py:1:0: C0114: Missing module docstring\n\n\nReport\n======\n9 statements analysed.\n",
        );
        assert_eq!(
            r.without_reports(),
            "************* Module a\na.py:1:0: C0114: Missing module docstring\n\n\n".as_bytes()
        );
    }

    #[test]
    fn test_without_reports_keeps_text_without_heading() {
        let r = RawReport::new("a.py:1:0: C0114\nYour code has been rated at 5.00/10\n");
        assert_eq!(r.without_reports(), r.as_bytes());
        // a message mentioning the word does not count as the heading
        let r = RawReport::new("a.py:3:0: W0611: Unused import Report\n");
        assert_eq!(r.without_reports(), r.as_bytes());
    }

    #[test]
    fn test_non_utf8_bytes_survive() {
        let bytes = b"a.py:2:0: C0103: name \"caf\xe9\"\n\nReport\n======\n".to_vec();
        let r = RawReport::new(bytes.clone());
        assert_eq!(r.as_bytes(), bytes.as_slice());
        assert_eq!(r.without_reports(), b"a.py:2:0: C0103: name \"caf\xe9\"\n\n".as_slice());
        assert!(r.as_text().contains("caf\u{fffd}"));
    }

    #[test]
    fn test_is_blank() {
        assert!(RawReport::new("").is_blank());
        assert!(RawReport::new(" \n\t\n").is_blank());
        assert!(!RawReport::new("\nx\n").is_blank());
    }
}
