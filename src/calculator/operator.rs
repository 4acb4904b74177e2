use std::{fmt, str::FromStr};

use tracing::debug;

use crate::error::{CalcError, CalcResult};

/// The closed set of arithmetic operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
}

/// Signature shared by the four arithmetic functions.
pub type BinaryFn = fn(f64, f64) -> f64;

/// Returns `a + b`.
#[must_use]
pub fn add(a: f64, b: f64) -> f64 {
    a + b
}

/// Returns `a - b`.
#[must_use]
pub fn sub(a: f64, b: f64) -> f64 {
    a - b
}

/// Returns `a * b`.
#[must_use]
pub fn mul(a: f64, b: f64) -> f64 {
    a * b
}

/// Returns `a / b` without any zero check. See [`Operator::apply`] for the
/// checked form.
#[must_use]
pub fn div(a: f64, b: f64) -> f64 {
    a / b
}

impl Operator {
    /// Every operator, in menu order.
    pub const ALL: [Self; 4] = [Self::Add, Self::Sub, Self::Mul, Self::Div];

    /// The operator's symbol.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '*',
            Self::Div => '/',
        }
    }

    /// Maps a single symbol to its operator.
    #[must_use]
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '+' => Some(Self::Add),
            '-' => Some(Self::Sub),
            '*' => Some(Self::Mul),
            '/' => Some(Self::Div),
            _ => None,
        }
    }

    /// Selects an operator by the first character of `token`, ignoring the
    /// rest. An empty token is unknown.
    ///
    /// # Example
    /// ```
    /// use foundations::calculator::operator::Operator;
    ///
    /// assert_eq!(Operator::from_leading_char("*x").unwrap(), Operator::Mul);
    /// assert!(Operator::from_leading_char("%").is_err());
    /// ```
    pub fn from_leading_char(token: &str) -> CalcResult<Self> {
        token.chars()
             .next()
             .and_then(Self::from_symbol)
             .ok_or_else(|| CalcError::UnknownOperator { token: token.to_owned() })
    }

    /// The pure arithmetic function this operator stands for.
    #[must_use]
    pub const fn function(self) -> BinaryFn {
        match self {
            Self::Add => add,
            Self::Sub => sub,
            Self::Mul => mul,
            Self::Div => div,
        }
    }

    /// Applies the operator to `left` and `right`.
    ///
    /// Division fails when `right == 0.0`. The comparison is exact, so `-0.0`
    /// is rejected as well while tiny non-zero divisors are not.
    ///
    /// # Example
    /// ```
    /// use foundations::{calculator::operator::Operator, error::CalcError};
    ///
    /// assert_eq!(Operator::Sub.apply(7.5, 2.0).unwrap(), 5.5);
    /// assert!(matches!(Operator::Div.apply(1.0, 0.0), Err(CalcError::DivisionByZero)));
    /// ```
    pub fn apply(self, left: f64, right: f64) -> CalcResult<f64> {
        if self == Self::Div && right == 0.0 {
            debug!(left, "rejected division by zero");
            return Err(CalcError::DivisionByZero);
        }

        let result = self.function()(left, right);
        debug!(left, op = %self, right, result, "applied operator");
        Ok(result)
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl FromStr for Operator {
    type Err = CalcError;

    /// Parses a whole token. Surrounding whitespace is ignored, anything else
    /// must match a symbol exactly.
    fn from_str(token: &str) -> CalcResult<Self> {
        let token = token.trim();
        let mut chars = token.chars();
        let operator = match (chars.next(), chars.next()) {
            (Some(symbol), None) => Self::from_symbol(symbol),
            _ => None,
        };
        operator.ok_or_else(|| CalcError::UnknownOperator { token: token.to_owned() })
    }
}

/// Parses `token` as a whole-token operator and applies it.
///
/// # Example
/// ```
/// use foundations::{calculator::operator::calculate, error::CalcError};
///
/// assert_eq!(calculate(6.0, "*", 7.0).unwrap(), 42.0);
/// assert!(matches!(calculate(6.0, "^", 7.0),
///                  Err(CalcError::UnknownOperator { token }) if token == "^"));
/// ```
pub fn calculate(left: f64, token: &str, right: f64) -> CalcResult<f64> {
    token.parse::<Operator>()?.apply(left, right)
}
