use std::io::{BufRead, Write};

use tracing::{debug, info};

use crate::{
    calculator::operator::Operator,
    error::{CalcError, CalcResult},
    format::round_half_up,
    util::input::TokenReader,
};

/// Prompt shown before the first operand.
pub const FIRST_PROMPT: &str = "Enter First Number: ";
/// Prompt shown before the second operand.
pub const SECOND_PROMPT: &str = "Enter Second Number: ";
/// Operator prompt used by [`Layout::OperandsFirst`].
pub const OPERATOR_PROMPT: &str = "Enter Operator: ";
/// Operator prompt used by [`Layout::Infix`].
pub const OPERATION_PROMPT: &str = "Enter Operation: ";
/// Operator menu printed by [`Layout::OperandsFirst`] before asking for the
/// operator.
pub const OPERATOR_MENU: &str =
    "* for Multiplication\t / for Division\n+ for Addition and \t- for Subtraction";

/// The order in which a session asks for its inputs, together with the way it
/// reads the operator and prints the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    /// First number, second number, operator menu, then the operator.
    ///
    /// The whole operator token must be a symbol. The result line uses two
    /// decimals, rounded half-up, and a leading space: ` 1.00 + 2.00 = 3.00`.
    OperandsFirst,
    /// First number, operator, second number.
    ///
    /// Only the first character of the operator token counts. The result line
    /// uses four decimals, rounded half-up: `1.0000 + 2.0000 = 3.0000`.
    Infix,
}

/// How a session ended.
#[derive(Debug)]
pub enum Outcome {
    /// A result was computed and printed.
    Computed(f64),
    /// A division by zero or an unknown operator was reported instead of a
    /// result.
    Rejected(CalcError),
}

/// One prompted calculator run over arbitrary input and output streams.
///
/// # Example
/// ```
/// use std::io::Cursor;
///
/// use foundations::calculator::session::{Layout, Outcome, Session};
///
/// let mut out = Vec::new();
/// let mut session = Session::new(Cursor::new("1.5 * 4"), &mut out, Layout::Infix);
/// let outcome = session.run().unwrap();
/// drop(session);
///
/// assert!(matches!(outcome, Outcome::Computed(r) if r == 6.0));
/// assert!(String::from_utf8(out).unwrap().ends_with("1.5000 * 4.0000 = 6.0000\n"));
/// ```
pub struct Session<R, W> {
    reader: TokenReader<R>,
    out:    W,
    layout: Layout,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Creates a session reading tokens from `input` and writing prompts and
    /// results to `out`.
    pub const fn new(input: R, out: W, layout: Layout) -> Self {
        Self { reader: TokenReader::new(input),
               out,
               layout }
    }

    /// Runs the session to completion.
    ///
    /// User errors (division by zero, unknown operator) are written to the
    /// output and returned as [`Outcome::Rejected`]. Malformed numbers, early
    /// end of input and I/O failures are returned as errors and nothing more
    /// is written.
    pub fn run(&mut self) -> CalcResult<Outcome> {
        info!(layout = ?self.layout, "calculator session started");

        let (left, token, right) = match self.layout {
            Layout::OperandsFirst => {
                let left = self.prompt_number(FIRST_PROMPT, "first number")?;
                let right = self.prompt_number(SECOND_PROMPT, "second number")?;
                writeln!(self.out, "{OPERATOR_MENU}")?;
                let token = self.prompt_token(OPERATOR_PROMPT, "operator")?;
                (left, token, right)
            },
            Layout::Infix => {
                let left = self.prompt_number(FIRST_PROMPT, "first number")?;
                let token = self.prompt_token(OPERATION_PROMPT, "operation")?;
                let right = self.prompt_number(SECOND_PROMPT, "second number")?;
                (left, token, right)
            },
        };

        let computed = self.parse_operator(&token)
                           .and_then(|op| op.apply(left, right).map(|r| (op, r)));

        match computed {
            Ok((op, result)) => {
                self.write_result(left, op, &token, right, result)?;
                info!(result, "calculator session finished");
                Ok(Outcome::Computed(result))
            },
            Err(e) if e.is_user_error() => {
                debug!(error = %e, "calculation rejected");
                writeln!(self.out, "{e}")?;
                self.out.flush()?;
                Ok(Outcome::Rejected(e))
            },
            Err(e) => Err(e),
        }
    }

    fn parse_operator(&self, token: &str) -> CalcResult<Operator> {
        match self.layout {
            Layout::OperandsFirst => token.parse(),
            Layout::Infix => Operator::from_leading_char(token),
        }
    }

    fn prompt_token(&mut self, prompt: &str, expected: &'static str) -> CalcResult<String> {
        write!(self.out, "{prompt}")?;
        self.out.flush()?;
        self.reader.next_token(expected)
    }

    fn prompt_number(&mut self, prompt: &str, expected: &'static str) -> CalcResult<f64> {
        write!(self.out, "{prompt}")?;
        self.out.flush()?;
        self.reader.next_f64(expected)
    }

    fn write_result(&mut self,
                    left: f64,
                    op: Operator,
                    token: &str,
                    right: f64,
                    result: f64)
                    -> CalcResult<()> {
        match self.layout {
            Layout::OperandsFirst => {
                writeln!(self.out,
                         " {} {token} {} = {}",
                         round_half_up(left, 2),
                         round_half_up(right, 2),
                         round_half_up(result, 2))?;
            },
            Layout::Infix => {
                writeln!(self.out,
                         "{} {op} {} = {}",
                         round_half_up(left, 4),
                         round_half_up(right, 4),
                         round_half_up(result, 4))?;
            },
        }
        self.out.flush()?;
        Ok(())
    }
}

/// Runs one session of the given layout and returns its outcome.
///
/// Convenience wrapper over [`Session::new`] and [`Session::run`].
pub fn run_session<R: BufRead, W: Write>(input: R, out: W, layout: Layout) -> CalcResult<Outcome> {
    Session::new(input, out, layout).run()
}
