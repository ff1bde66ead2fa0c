use crate::{
    error::RuntimeError,
    interpreter::{
        parser::{self, ParseResult},
        scanner,
        value::Value,
    },
};

/// Result type used by the arithmetic reducer.
///
/// Reduction either produces a value of type `T` or a [`RuntimeError`]
/// describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// The operator of an arithmetic form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    /// Variadic addition; takes at least one argument.
    Plus,
    /// Two-argument subtraction.
    Minus,
    /// Variadic multiplication; takes at least one argument.
    Multiply,
    /// Two-argument division.
    Divide,
}

impl Op {
    /// The single-character spelling of the operator in source text.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Plus => '+',
            Self::Minus => '-',
            Self::Multiply => '*',
            Self::Divide => '/',
        }
    }
}

impl std::fmt::Display for Op {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Builds the arity error appropriate for `op`.
///
/// Variadic operators report an empty argument list; two-argument operators
/// report the expected and found counts.
pub(crate) const fn arity_error(op: Op, found: usize, offset: usize) -> RuntimeError {
    match op {
        Op::Plus | Op::Multiply => RuntimeError::TooFewArguments { op, offset },
        Op::Minus | Op::Divide => RuntimeError::ArgumentCountMismatch { op,
                                                                        expected: 2,
                                                                        found,
                                                                        offset },
    }
}

/// Folds a sequence of numeric values under an operator.
///
/// The result stays an `Integer` if and only if every argument is an
/// `Integer` — for division additionally only when the quotient is exact.
/// Once any argument is a `Real`, every operand is widened and the whole
/// fold runs in double precision, left to right, so rounding follows the
/// order the arguments appear in. `Minus` and `Divide` apply directly as
/// `first - second` and `first / second`.
///
/// An integer division by zero never has an exact quotient and falls
/// through to real division, yielding an IEEE infinity or NaN.
///
/// The dispatcher enforces arity before calling, so `args` is non-empty and
/// `Minus`/`Divide` see exactly two arguments; violated preconditions still
/// come back as arity errors rather than panicking.
///
/// # Parameters
/// - `op`: Operator to fold under.
/// - `args`: Argument values.
/// - `offset`: Byte offset of the operator, used for error reporting.
///
/// # Returns
/// The reduced value.
///
/// # Errors
/// - `RuntimeError::ExpectedNumber` when an argument is a list.
/// - `RuntimeError::ZeroProduct` when a real multiplication's accumulated
///   product is exactly zero at any step.
///
/// # Example
/// ```
/// use lisma::interpreter::{
///     evaluator::{Op, reduce},
///     value::Value,
/// };
///
/// let args = [Value::Integer(2), Value::Real(0.5)];
/// let product = reduce(Op::Multiply, &args, 0).unwrap();
/// assert_eq!(product, Value::Real(1.0));
/// ```
pub fn reduce(op: Op, args: &[Value], offset: usize) -> EvalResult<Value> {
    if let Some(ints) = integer_args(args) {
        return reduce_integers(op, &ints, offset);
    }

    reduce_reals(op, args, offset)
}

/// Extracts the raw integers when every argument is an `Integer`.
fn integer_args(args: &[Value]) -> Option<Vec<i64>> {
    args.iter()
        .map(|value| match value {
                 Value::Integer(n) => Some(*n),
                 _ => None,
             })
        .collect()
}

/// The all-integer side of the fold; results keep the `Integer` tag.
#[allow(clippy::cast_precision_loss)]
fn reduce_integers(op: Op, values: &[i64], offset: usize) -> EvalResult<Value> {
    match (op, values) {
        (Op::Plus, [first, rest @ ..]) => {
            let mut sum = *first;
            for n in rest {
                sum += n;
            }

            Ok(Value::Integer(sum))
        },

        (Op::Multiply, [first, rest @ ..]) => {
            let mut product = *first;
            for n in rest {
                product *= n;
            }

            Ok(Value::Integer(product))
        },

        (Op::Minus, [minuend, subtrahend]) => Ok(Value::Integer(minuend - subtrahend)),

        (Op::Divide, [dividend, divisor]) => {
            // Only an exact quotient keeps integer arithmetic; any
            // remainder, and a zero divisor with it, falls through to real
            // division.
            if dividend.checked_rem(*divisor) == Some(0) {
                Ok(Value::Integer(dividend / divisor))
            } else {
                Ok(Value::Real(*dividend as f64 / *divisor as f64))
            }
        },

        _ => Err(arity_error(op, values.len(), offset)),
    }
}

/// The widened side of the fold; every operand becomes an `f64` and the
/// whole computation runs in double precision.
fn reduce_reals(op: Op, args: &[Value], offset: usize) -> EvalResult<Value> {
    match (op, args) {
        (Op::Plus, [first, rest @ ..]) => {
            let mut sum = first.as_real(offset)?;
            for value in rest {
                sum += value.as_real(offset)?;
            }

            Ok(Value::Real(sum))
        },

        (Op::Multiply, [first, rest @ ..]) => {
            let mut product = first.as_real(offset)?;
            for value in rest {
                if product == 0.0 {
                    return Err(RuntimeError::ZeroProduct { offset });
                }

                product *= value.as_real(offset)?;
            }

            if product == 0.0 {
                return Err(RuntimeError::ZeroProduct { offset });
            }

            Ok(Value::Real(product))
        },

        (Op::Minus, [minuend, subtrahend]) => {
            Ok(Value::Real(minuend.as_real(offset)? - subtrahend.as_real(offset)?))
        },

        (Op::Divide, [dividend, divisor]) => {
            Ok(Value::Real(dividend.as_real(offset)? / divisor.as_real(offset)?))
        },

        _ => Err(arity_error(op, args.len(), offset)),
    }
}

/// Evaluates every top-level form in the source, left to right.
///
/// The loop skips whitespace, stops at the end of input, and otherwise
/// dispatches one form and splices its outcome into the output sequence.
/// Consecutive forms are simply adjacent, separated only by whitespace.
///
/// # Parameters
/// - `src`: The program text.
///
/// # Returns
/// One value per top-level form, in source order.
///
/// # Errors
/// Propagates the first fatal error; there is no recovery or
/// resynchronization.
pub fn evaluate(src: &str) -> ParseResult<Vec<Value>> {
    let mut results = Vec::new();
    let mut offset = 0;

    loop {
        offset = scanner::skip_whitespace(src, offset);
        if offset >= src.len() {
            return Ok(results);
        }

        let (parsed, next) = parser::parse_form(src, offset)?;
        parsed.splice_into(&mut results);
        offset = next;
    }
}
