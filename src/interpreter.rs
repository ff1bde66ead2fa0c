/// The evaluator module reduces arithmetic forms and drives the top pass.
///
/// The evaluator folds argument sequences under their operator with
/// integer/real promotion, and runs the top-level loop that walks the whole
/// source and collects one result per form. It is the core execution engine
/// of the interpreter.
///
/// # Responsibilities
/// - Folds argument sequences under `+`, `-`, `*` and `/`.
/// - Keeps results in integer arithmetic exactly as long as every operand is
///   an integer, widening to double precision otherwise.
/// - Reports reduction errors such as wrong argument counts or the
///   zero-product consistency check.
pub mod evaluator;
/// The parser module recognizes grammar forms directly from source text.
///
/// The parser dispatches the grammar rule that applies at the current byte
/// offset and reduces what it recognizes on the spot: there is no token
/// stream and no retained syntax tree. List elements and argument lists are
/// gathered by a shared element parser that runs until a closing `)`.
///
/// # Responsibilities
/// - Dispatches list literals, arithmetic forms, parenthesized forms and
///   numerals in priority order.
/// - Gathers list elements and operator arguments, separated by whitespace
///   alone.
/// - Reports recognition errors with the byte offset where they occurred.
pub mod parser;
/// The scanner module provides the lexical primitives of the dialect.
///
/// Every primitive takes the source text and a byte offset, never mutates
/// anything, and reports how much input it consumed. The parser composes
/// these primitives directly instead of working on a token stream.
///
/// # Responsibilities
/// - Matches literal bytes and keywords at a given offset.
/// - Skips runs of whitespace (space, tab, newline only).
/// - Scans signed integer and decimal numerals digit by digit.
pub mod scanner;
/// The value module defines the runtime value type and its rendering.
///
/// This module declares the tagged scalar (integer or real) and list values
/// produced by evaluation, the promotion helper that widens integers for
/// mixed arithmetic, and the `Display` rendering used for program output.
///
/// # Responsibilities
/// - Defines the `Value` enum and its variants.
/// - Provides widening from integer to real for mixed-type folds.
/// - Renders values as text: decimal integers, reals with a fixed six
///   fractional digits, and parenthesized comma-separated lists.
pub mod value;
