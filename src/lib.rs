//! # lisma
//!
//! lisma is an evaluator for a minimal Lisp-flavored arithmetic dialect,
//! written in Rust. It reads textual expressions, recognizes list and
//! arithmetic forms, and reduces them to numeric results while keeping track
//! of whether each result is an integer or a real value (numeric-type
//! promotion).

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

use crate::{error::Error, interpreter::value::Value};

/// Provides unified error types for recognition and reduction failures.
///
/// This module defines all errors that can be raised while evaluating a
/// program. It standardizes error reporting and carries detailed information
/// about failures, including error kinds, descriptions, and the byte offset
/// at which each failure was detected.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (recognition, reduction).
/// - Attaches byte offsets and detailed messages for context.
/// - Supports integration with standard error handling traits and reporting
///   utilities.
pub mod error;
/// Orchestrates the entire process of expression evaluation.
///
/// This module ties together the scanner primitives, the form dispatcher,
/// the arithmetic reducer, the value representation, and error handling to
/// provide a complete runtime for the dialect. It exposes the machinery
/// behind the crate-level [`evaluate`] entry point.
///
/// # Responsibilities
/// - Coordinates all core components: scanner, parser, evaluator, and value
///   types.
/// - Provides entry points for evaluating whole programs.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;

/// Evaluates every top-level form in the source and returns the results.
///
/// This is the main entry point of the crate. The source is scanned left to
/// right; each top-level form is recognized, reduced to a value, and
/// appended to the output in source order. Forms need no separator beyond
/// whitespace. Rendering a value is its `Display` implementation.
///
/// # Errors
/// Returns the first fatal error encountered. There is no recovery: any
/// failure aborts the evaluation of the whole input. The error carries its
/// kind and the byte offset at which it was detected.
///
/// # Examples
/// ```
/// use lisma::{evaluate, interpreter::value::Value};
///
/// let results = evaluate("(+ 1 2)").unwrap();
/// assert_eq!(results, vec![Value::Integer(3)]);
///
/// // A `/` with a remainder promotes the result to a real.
/// let results = evaluate("(/ 10 3)").unwrap();
/// assert!(matches!(results[0], Value::Real(_)));
///
/// // A lone `-` is not a numeral.
/// let error = evaluate("-").unwrap_err();
/// assert_eq!(error.offset(), 0);
/// ```
pub fn evaluate(source: &str) -> Result<Vec<Value>, Error> {
    interpreter::evaluator::evaluate(source)
}
