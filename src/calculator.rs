/// Operator dispatch.
///
/// Declares the closed [`operator::Operator`] set, the four pure arithmetic
/// functions it maps to, and the checked evaluation that rejects a zero
/// divisor.
pub mod operator;
/// Prompted console runs.
///
/// Drives a calculator over any reader and writer: prompts for the operands
/// and the operator in the order a [`session::Layout`] prescribes, reports
/// user errors in-band and prints the result line.
pub mod session;

pub use operator::{Operator, calculate};
pub use session::{Layout, Outcome, Session, run_session};
