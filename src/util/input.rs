use std::{collections::VecDeque, io::BufRead};

use crate::error::{CalcError, CalcResult};

/// Reads whitespace-delimited tokens from a buffered source.
///
/// Lines are pulled lazily, one at a time, so a prompt written before a call
/// to [`TokenReader::next_token`] is visible before the read blocks. Several
/// tokens on one line are handed out across successive calls.
///
/// # Example
/// ```
/// use std::io::Cursor;
///
/// use foundations::util::input::TokenReader;
///
/// let mut reader = TokenReader::new(Cursor::new("3 +\n  4\n"));
/// assert_eq!(reader.next_token("a").unwrap(), "3");
/// assert_eq!(reader.next_token("b").unwrap(), "+");
/// assert_eq!(reader.next_f64("c").unwrap(), 4.0);
/// assert!(reader.next_token("d").is_err());
/// ```
pub struct TokenReader<R> {
    source:  R,
    pending: VecDeque<String>,
}

impl<R: BufRead> TokenReader<R> {
    /// Wraps a buffered source.
    pub const fn new(source: R) -> Self {
        Self { source,
               pending: VecDeque::new() }
    }

    /// Returns the next token, reading more lines as needed.
    ///
    /// `expected` names what the caller is waiting for and ends up in the
    /// error when the source is exhausted.
    pub fn next_token(&mut self, expected: &'static str) -> CalcResult<String> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(token);
            }

            let mut line = String::new();
            if self.source.read_line(&mut line)? == 0 {
                return Err(CalcError::UnexpectedEndOfInput { expected });
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_owned));
        }
    }

    /// Returns the next token parsed as an `f64`.
    pub fn next_f64(&mut self, expected: &'static str) -> CalcResult<f64> {
        let token = self.next_token(expected)?;
        token.parse()
             .map_err(|_| CalcError::InvalidNumber { token })
    }
}
