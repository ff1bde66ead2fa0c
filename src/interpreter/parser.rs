use crate::{
    error::{Error, ParseError},
    interpreter::{
        evaluator::{Op, arity_error, reduce},
        scanner,
        value::Value,
    },
};

/// Result type used by the parser.
///
/// Argument lists are reduced while they are parsed, so recognition can
/// surface reduction failures too; the error side is therefore the unified
/// [`Error`].
pub type ParseResult<T> = Result<T, Error>;

/// The outcome of dispatching one grammar form.
///
/// Operator applications reduce to a single naked number. Every other rule
/// produces a sequence of values that the surrounding context splices into
/// its own output: a numeral is a one-element sequence, a `list` form is the
/// sequence of its elements, and a parenthesized form is a one-element
/// sequence holding its collapsed interior. The splicing is what keeps
/// `(+ 1 2)` a bare `3` at the top level while `(list 1 2 3)` stays a list.
#[derive(Debug, Clone, PartialEq)]
pub enum Parsed {
    /// A single numeric result, produced by `+`, `-`, `*` and `/` forms.
    Number(Value),
    /// Values to be spliced into the surrounding sequence.
    Items(Vec<Value>),
}

impl Parsed {
    /// Collapses the outcome into one value, as the `(` rule requires.
    ///
    /// A naked number stays itself; a sequence becomes a list value.
    #[must_use]
    pub fn into_element(self) -> Value {
        match self {
            Self::Number(value) => value,
            Self::Items(items) => Value::List(items),
        }
    }

    /// Splices the outcome into a surrounding sequence of values.
    pub(crate) fn splice_into(self, out: &mut Vec<Value>) {
        match self {
            Self::Number(value) => out.push(value),
            Self::Items(items) => out.extend(items),
        }
    }
}

/// Dispatches the grammar rule that applies at `offset`.
///
/// Entry assumes `offset` points at a non-whitespace byte. The rules are
/// tried in priority order, first match wins:
///
/// 1. the keyword `list`, which introduces a list literal;
/// 2. `+` and `*`, variadic arithmetic forms taking at least one argument;
/// 3. `-` and `/`, arithmetic forms taking exactly two arguments — a `-`
///    that begins a numeral reads as a signed literal instead, and a `-` at
///    the very end of the input is no form at all;
/// 4. `(`, which dispatches the single form inside it and wraps the result;
///    the rule leaves the matching `)` to the enclosing list context;
/// 5. numerals, classified as integer or real by the dot flag.
///
/// Anything else fails as an unrecognized form. Arithmetic arguments are
/// reduced as soon as their closing `)` is seen; evaluation is eager and no
/// syntax tree is retained.
///
/// # Parameters
/// - `src`: Source text.
/// - `offset`: Byte offset of the first byte of the form.
///
/// # Returns
/// The dispatched outcome and the offset past the form (numeral rules also
/// skip trailing whitespace before returning).
///
/// # Errors
/// - `ParseError::UnrecognizedForm` when no rule matches.
/// - Any error from parsing or reducing a subform.
pub fn parse_form(src: &str, offset: usize) -> ParseResult<(Parsed, usize)> {
    if let Some(next) = scanner::match_keyword(src, offset, "list") {
        let start = scanner::skip_whitespace(src, next);
        let (elements, next) = parse_elements(src, start)?;

        return Ok((Parsed::Items(elements), next));
    }

    if let Some(next) = scanner::match_char(src, offset, b'+') {
        return parse_call(src, offset, next, Op::Plus);
    }

    if let Some(next) = scanner::match_char(src, offset, b'*') {
        return parse_call(src, offset, next, Op::Multiply);
    }

    let numeral = scanner::match_float(src, offset);

    // A `-` doubles as the sign of a numeral. The subtraction form applies
    // only when no numeral starts here and more input follows the dash.
    if numeral.is_none()
       && offset + 1 < src.len()
       && let Some(next) = scanner::match_char(src, offset, b'-')
    {
        return parse_call(src, offset, next, Op::Minus);
    }

    if let Some(next) = scanner::match_char(src, offset, b'/') {
        return parse_call(src, offset, next, Op::Divide);
    }

    if let Some(next) = scanner::match_char(src, offset, b'(') {
        let start = scanner::skip_whitespace(src, next);
        let (inner, next) = parse_form(src, start)?;

        return Ok((Parsed::Items(vec![inner.into_element()]), next));
    }

    if let Some(m) = numeral {
        let (value, next) = if m.dot {
            (Value::Real(m.value), m.next)
        } else {
            // A dotless numeral re-scans with the integer matcher so the
            // value accumulates in integer arithmetic.
            match scanner::match_integer(src, offset) {
                Some(m) => (Value::Integer(m.value), m.next),
                None => return Err(ParseError::UnrecognizedForm { offset }.into()),
            }
        };

        let next = scanner::skip_whitespace(src, next);
        return Ok((Parsed::Items(vec![value]), next));
    }

    Err(ParseError::UnrecognizedForm { offset }.into())
}

/// Parses list elements up to and including a closing `)`.
///
/// Entry assumes leading whitespace has already been skipped. The loop
/// alternates between checking for the closing delimiter and dispatching one
/// form; whitespace alone separates elements, no comma is required.
///
/// Grammar: `elements := form* ")"`
///
/// # Parameters
/// - `src`: Source text.
/// - `offset`: Byte offset of the first element or of the closing `)`.
///
/// # Returns
/// The spliced element values and the offset just past the `)`.
///
/// # Errors
/// - `ParseError::ExpectedClosingParen` if the input ends before the list is
///   closed. An unterminated list is fatal, never a silent empty result.
/// - Any error from dispatching an element form.
pub fn parse_elements(src: &str, offset: usize) -> ParseResult<(Vec<Value>, usize)> {
    let mut elements = Vec::new();
    let mut offset = offset;

    loop {
        if offset >= src.len() {
            return Err(ParseError::ExpectedClosingParen { offset }.into());
        }

        if let Some(next) = scanner::match_char(src, offset, b')') {
            return Ok((elements, next));
        }

        let (parsed, next) = parse_form(src, offset)?;
        parsed.splice_into(&mut elements);
        offset = scanner::skip_whitespace(src, next);
    }
}

/// Parses and reduces one arithmetic form after its operator byte.
///
/// The operator was consumed at `op_offset`; the arguments are parsed as a
/// list (consuming the closing `)`), checked against the operator's arity,
/// and folded immediately.
fn parse_call(src: &str, op_offset: usize, next: usize, op: Op) -> ParseResult<(Parsed, usize)> {
    let start = scanner::skip_whitespace(src, next);
    let (args, next) = parse_elements(src, start)?;

    let arity_ok = match op {
        Op::Plus | Op::Multiply => !args.is_empty(),
        Op::Minus | Op::Divide => args.len() == 2,
    };

    if !arity_ok {
        return Err(arity_error(op, args.len(), op_offset).into());
    }

    let value = reduce(op, &args, op_offset)?;

    Ok((Parsed::Number(value), next))
}
