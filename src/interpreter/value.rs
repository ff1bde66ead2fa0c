use crate::{error::RuntimeError, interpreter::evaluator::EvalResult};

/// Represents an evaluated value in the interpreter.
///
/// This enum models every result a form can reduce to. Once a value is
/// constructed its tag is fixed: an `Integer` is only ever widened to a real
/// when it is *combined* with a real operand, never in place.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A signed integer value (64 bit).
    Integer(i64),
    /// A real value (double precision floating-point).
    Real(f64),
    /// An ordered list of `Value` elements. A list result is never collapsed
    /// to a single number.
    List(Vec<Self>),
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Real(v)
    }
}

impl From<Vec<Self>> for Value {
    fn from(v: Vec<Self>) -> Self {
        Self::List(v)
    }
}

impl Value {
    /// Converts the value to an `f64`, or returns an error if not numeric.
    ///
    /// Accepts `Value::Integer` and `Value::Real`. Integers are widened with
    /// the ordinary `f64` conversion; magnitudes beyond 2^53 lose precision,
    /// which is exactly the widening the dialect performs when an integer
    /// meets a real operand.
    ///
    /// # Parameters
    /// - `offset`: Byte offset used for error reporting.
    ///
    /// # Returns
    /// - `Ok(f64)`: If the value is numeric.
    /// - `Err(RuntimeError::ExpectedNumber)`: If the value is a list.
    ///
    /// # Example
    /// ```
    /// use lisma::interpreter::value::Value;
    ///
    /// let x = Value::Integer(10);
    /// assert_eq!(x.as_real(0).unwrap(), 10.0);
    ///
    /// let l = Value::from(vec![Value::Integer(1)]);
    /// assert!(l.as_real(0).is_err());
    /// ```
    #[allow(clippy::cast_precision_loss)]
    pub fn as_real(&self, offset: usize) -> EvalResult<f64> {
        match self {
            Self::Integer(n) => Ok(*n as f64),
            Self::Real(r) => Ok(*r),
            Self::List(_) => Err(RuntimeError::ExpectedNumber { offset }),
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            // Reals render with a fixed six fractional digits.
            Self::Real(r) => write!(f, "{r:.6}"),
            Self::List(elements) => {
                write!(f, "(")?;

                for (index, value) in elements.iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }

                    write!(f, "{value}")?;
                }

                write!(f, ")")
            },
        }
    }
}
