/// Calculator errors.
///
/// Defines every failure a calculator run can hit: the two user-facing
/// arithmetic conditions (division by zero and an unrecognised operator) and
/// the input failures that happen before any arithmetic is attempted.
pub mod calc_error;

pub use calc_error::{CalcError, CalcResult};
