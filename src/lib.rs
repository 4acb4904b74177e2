//! # foundations
//!
//! foundations is a small collection of numeric exercises written in Rust:
//! a report of primitive type limits, two console calculators and a value
//! formatter with per-type precision rules.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

/// Operator dispatch and prompted calculator sessions.
///
/// This module holds the closed operator set, the checked arithmetic it
/// dispatches to, and the two console front-ends that read operands and an
/// operator from a stream.
///
/// # Responsibilities
/// - Maps operator tokens to pure binary functions.
/// - Rejects division by an exact zero and unknown operator tokens.
/// - Prompts for input in a fixed order and prints the result line.
pub mod calculator;
/// Provides the error type shared by the calculators.
///
/// # Responsibilities
/// - Separates user errors, reported in-band, from input failures that end
///   the program.
/// - Carries the exact user-facing messages.
pub mod error;
/// Per-type value formatting.
///
/// Integers get a currency sigil, doubles are truncated to two fractional
/// digits, text is padded with spaces.
pub mod format;
/// Primitive type limits and the overflow, underflow and precision-loss
/// demonstrations.
pub mod limits;
/// Console input helpers.
pub mod util;
