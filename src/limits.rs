use std::io::{self, Write};

use tracing::debug;

/// Smallest positive `f32`, a subnormal.
pub const MIN_POSITIVE_F32: f32 = f32::from_bits(1);
/// Smallest positive `f64`, a subnormal.
pub const MIN_POSITIVE_F64: f64 = f64::from_bits(1);

/// The minimum and maximum of one primitive type, already rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Boundary {
    /// The Rust name of the type.
    pub type_name: &'static str,
    /// Rendered smallest value.
    pub min:       String,
    /// Rendered largest value.
    pub max:       String,
}

impl Boundary {
    fn new(type_name: &'static str, min: impl ToString, max: impl ToString) -> Self {
        Self { type_name,
               min: min.to_string(),
               max: max.to_string() }
    }

    /// The two report lines for this type, maximum first.
    #[must_use]
    pub fn lines(&self) -> [String; 2] {
        [format!("Maximum Value of {}: {}", self.type_name, self.max),
         format!("Minimum Value of {}: {}", self.type_name, self.min)]
    }
}

/// Returns the boundary table.
///
/// Integers are shown in full. Floats use scientific notation and report the
/// smallest *positive* value as their minimum. `char` is shown as Unicode
/// scalar values.
///
/// # Example
/// ```
/// use foundations::limits::boundaries;
///
/// let table = boundaries();
/// let i8_row = table.iter().find(|b| b.type_name == "i8").unwrap();
/// assert_eq!(i8_row.min, "-128");
/// assert_eq!(i8_row.max, "127");
/// ```
#[must_use]
pub fn boundaries() -> Vec<Boundary> {
    vec![Boundary::new("i8", i8::MIN, i8::MAX),
         Boundary::new("i16", i16::MIN, i16::MAX),
         Boundary::new("i32", i32::MIN, i32::MAX),
         Boundary::new("i64", i64::MIN, i64::MAX),
         Boundary::new("u8", u8::MIN, u8::MAX),
         Boundary::new("u16", u16::MIN, u16::MAX),
         Boundary::new("u32", u32::MIN, u32::MAX),
         Boundary::new("u64", u64::MIN, u64::MAX),
         Boundary::new("f32", format!("{MIN_POSITIVE_F32:e}"), format!("{:e}", f32::MAX)),
         Boundary::new("f64", format!("{MIN_POSITIVE_F64:e}"), format!("{:e}", f64::MAX)),
         Boundary::new("char", scalar(char::from(0)), scalar(char::MAX))]
}

fn scalar(c: char) -> String {
    format!("U+{:04X}", u32::from(c))
}

/// `i32::MAX + 1` under two's-complement wraparound.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Overflow {
    /// The value that was incremented.
    pub operand: i32,
    /// What the increment wrapped to.
    pub wrapped: i32,
}

/// Adds one to `i32::MAX` with wrapping semantics.
///
/// # Example
/// ```
/// use foundations::limits::overflow;
///
/// assert_eq!(overflow().wrapped, i32::MIN);
/// ```
#[must_use]
pub const fn overflow() -> Overflow {
    Overflow { operand: i32::MAX,
               wrapped: i32::MAX.wrapping_add(1) }
}

/// The smallest positive `f64` minus one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Underflow {
    /// The smallest positive `f64`.
    pub operand: f64,
    /// `operand - 1.0`; the operand is lost entirely.
    pub result:  f64,
}

/// Subtracts one from the smallest positive `f64`.
#[must_use]
pub fn underflow() -> Underflow {
    Underflow { operand: MIN_POSITIVE_F64,
                result:  MIN_POSITIVE_F64 - 1.0, }
}

/// Outcome of comparing `0.1 + 0.2` with `0.3`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PrecisionLoss {
    /// The computed sum.
    pub sum:   f64,
    /// Whether the sum compared exactly equal to `0.3`.
    pub equal: bool,
}

/// Evaluates `0.1 + 0.2 == 0.3` with exact comparison.
///
/// # Example
/// ```
/// use foundations::limits::precision_loss;
///
/// let loss = precision_loss();
/// assert!(!loss.equal);
/// assert_eq!(loss.sum.to_string(), "0.30000000000000004");
/// ```
#[must_use]
#[allow(clippy::float_cmp)]
pub fn precision_loss() -> PrecisionLoss {
    let sum = 0.1_f64 + 0.2_f64;
    PrecisionLoss { sum,
                    equal: sum == 0.3 }
}

/// Every line of the limits report, in print order.
#[must_use]
pub fn report() -> Vec<String> {
    let mut lines: Vec<String> = boundaries().iter().flat_map(Boundary::lines).collect();

    let over = overflow();
    lines.push(format!("Overflow: {} + 1 = {}", over.operand, over.wrapped));

    let under = underflow();
    lines.push(format!("Underflow: {:e} - 1 = {}", under.operand, under.result));

    let loss = precision_loss();
    lines.push(format!("Precision Loss: 0.1 + 0.2 = 0.3 Evaluates to {}", loss.equal));
    lines.push(format!("Original Answer = {}", loss.sum));

    debug!(lines = lines.len(), "built limits report");
    lines
}

/// Writes [`report`] to `out`, one line each.
pub fn write_report<W: Write>(mut out: W) -> io::Result<()> {
    for line in report() {
        writeln!(out, "{line}")?;
    }
    out.flush()
}
