//! Strict quoting check for manifest input.
//!
//! The `csv` tokenizer recovers silently from broken quoting: an unterminated
//! quoted field swallows the rest of the input, and stray quotes are kept as
//! literal text. A manifest with broken quoting cannot be trusted record by
//! record, so the raw bytes are scanned first and any violation is reported
//! as a fatal error.
//!
//! The scan follows the same record rules the tokenizer is configured with:
//! `\n`, `\r\n` or a lone `\r` end a record, empty lines produce no record,
//! and a record starting with the comment byte is skipped up to the next
//! `\n`.

use thiserror::Error;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// A quoting violation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum SyntaxErrorKind {
    /// A quoted field runs to the end of the input.
    #[error("quoted field is never closed")]
    UnterminatedQuote,

    /// A closing quote is followed by something other than a delimiter or
    /// the end of the record.
    #[error("extraneous or missing \" in quoted field")]
    ExtraneousQuote,

    /// A quote appears inside a field that did not start with one.
    #[error("bare \" in non-quoted field")]
    BareQuote,
}

/// Location and kind of a quoting violation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SyntaxError {
    /// 1-based line the violation was found on.
    pub line: u64,
    pub kind: SyntaxErrorKind,
}

/// Scans `input` and returns the 1-based starting line of every record.
///
/// The returned lines line up one-to-one with the records the tokenizer
/// produces for the same input.
pub fn scan_records(
    input: &[u8],
    delimiter: u8,
    comment: u8,
) -> Result<Vec<u64>, SyntaxError> {
    let mut scanner = Scanner {
        input,
        pos: if input.starts_with(UTF8_BOM) {
            UTF8_BOM.len()
        } else {
            0
        },
        line: 1,
        delimiter,
    };
    let mut starts = Vec::new();

    while let Some(b) = scanner.peek() {
        if b == comment {
            scanner.skip_comment();
        } else if b == b'\n' || b == b'\r' {
            scanner.eat_terminator();
        } else {
            starts.push(scanner.line);
            scanner.record()?;
        }
    }

    Ok(starts)
}

struct Scanner<'a> {
    input: &'a [u8],
    pos: usize,
    line: u64,
    delimiter: u8,
}

impl Scanner<'_> {
    fn peek(&self) -> Option<u8> {
        self.input.get(self.pos).copied()
    }

    fn bump(&mut self) -> Option<u8> {
        let b = self.peek()?;
        self.pos += 1;
        if b == b'\n' {
            self.line += 1;
        }
        Some(b)
    }

    /// Consumes `\n`, `\r\n` or a lone `\r`.
    fn eat_terminator(&mut self) {
        match self.bump() {
            Some(b'\r') => {
                if self.peek() == Some(b'\n') {
                    self.bump();
                } else {
                    self.line += 1;
                }
            }
            Some(_) | None => {}
        }
    }

    fn skip_comment(&mut self) {
        while let Some(b) = self.bump() {
            if b == b'\n' {
                break;
            }
        }
    }

    fn at_record_end(&self) -> bool {
        matches!(self.peek(), None | Some(b'\n') | Some(b'\r'))
    }

    /// Consumes one record including its terminator.
    fn record(&mut self) -> Result<(), SyntaxError> {
        loop {
            if self.peek() == Some(b'"') {
                self.quoted_field()?;
            } else {
                self.unquoted_field()?;
            }

            if self.peek() == Some(self.delimiter) {
                self.bump();
                continue;
            }
            if self.at_record_end() {
                self.eat_terminator();
                return Ok(());
            }
            return Err(self.error(SyntaxErrorKind::ExtraneousQuote));
        }
    }

    fn unquoted_field(&mut self) -> Result<(), SyntaxError> {
        while let Some(b) = self.peek() {
            if b == self.delimiter || b == b'\n' || b == b'\r' {
                break;
            }
            if b == b'"' {
                return Err(self.error(SyntaxErrorKind::BareQuote));
            }
            self.bump();
        }
        Ok(())
    }

    fn quoted_field(&mut self) -> Result<(), SyntaxError> {
        let start_line = self.line;
        self.bump();
        loop {
            match self.bump() {
                None => {
                    return Err(SyntaxError {
                        line: start_line,
                        kind: SyntaxErrorKind::UnterminatedQuote,
                    })
                }
                Some(b'"') => {
                    if self.peek() == Some(b'"') {
                        self.bump();
                    } else {
                        return Ok(());
                    }
                }
                Some(b'\r') if self.peek() != Some(b'\n') => self.line += 1,
                Some(_) => {}
            }
        }
    }

    fn error(&self, kind: SyntaxErrorKind) -> SyntaxError {
        SyntaxError {
            line: self.line,
            kind,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scan(input: &str) -> Result<Vec<u64>, SyntaxError> {
        scan_records(input.as_bytes(), b',', b';')
    }

    #[test]
    fn test_plain_records() {
        assert_eq!(scan("a,b\nc,d\n"), Ok(vec![1, 2]));
        assert_eq!(scan("a,b\nc,d"), Ok(vec![1, 2]));
        assert_eq!(scan(""), Ok(vec![]));
    }

    #[test]
    fn test_comments_and_blank_lines_skipped() {
        assert_eq!(scan(";note\n\na,b\n\r\n;x,\"y\nc,d\n"), Ok(vec![3, 6]));
    }

    #[test]
    fn test_leading_bom_skipped() {
        assert_eq!(scan("\u{feff};c\nbad\n"), Ok(vec![2]));
        assert_eq!(scan("\u{feff}a,b\n"), Ok(vec![1]));
        assert_eq!(scan("a,b\n\u{feff};c\n"), Ok(vec![1, 2]));
    }

    #[test]
    fn test_crlf_and_lone_cr() {
        assert_eq!(scan("a,b\r\nc,d\re,f"), Ok(vec![1, 2, 3]));
    }

    #[test]
    fn test_quoted_fields_span_lines() {
        assert_eq!(scan("\"a\nb\",c\nd,e\n"), Ok(vec![1, 3]));
        assert_eq!(scan("\"say \"\"hi\"\"\",x\n"), Ok(vec![1]));
        assert_eq!(scan("\"\",\"\"\n"), Ok(vec![1]));
    }

    #[test]
    fn test_unterminated_quote() {
        let err = scan("ok,ok\n\"unterminated,\n").unwrap_err();
        assert_eq!(err.kind, SyntaxErrorKind::UnterminatedQuote);
        assert_eq!(err.line, 2);
    }

    #[test]
    fn test_text_after_closing_quote() {
        let err = scan("\"unterminated,\"quote\n").unwrap_err();
        assert_eq!(err.kind, SyntaxErrorKind::ExtraneousQuote);
        assert_eq!(err.line, 1);
    }

    #[test]
    fn test_bare_quote() {
        let err = scan("a,b\nun\"quoted,x\n").unwrap_err();
        assert_eq!(err.kind, SyntaxErrorKind::BareQuote);
        assert_eq!(err.line, 2);
    }

    #[test]
    fn test_quote_after_leading_space_is_bare() {
        let err = scan("a, \"b\"\n").unwrap_err();
        assert_eq!(err.kind, SyntaxErrorKind::BareQuote);
    }
}
