/// Console token input.
///
/// Splits standard input (or any buffered reader) into whitespace-delimited
/// tokens, reading one line at a time, and parses operand tokens into `f64`.
pub mod input;
