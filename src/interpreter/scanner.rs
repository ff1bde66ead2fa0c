/// A successful integer scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntegerMatch {
    /// The signed value of the numeral.
    pub value: i64,
    /// Offset just past the last consumed byte.
    pub next:  usize,
}

/// A successful decimal scan.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FloatMatch {
    /// The accumulated value of the numeral.
    pub value: f64,
    /// Whether a decimal point was consumed. Numerals that scan without a
    /// dot are classified as integers by the dispatcher.
    pub dot:   bool,
    /// Offset just past the last consumed byte.
    pub next:  usize,
}

/// Matches a single literal byte at `offset`.
///
/// # Parameters
/// - `src`: Source text.
/// - `offset`: Byte offset to look at.
/// - `expected`: The byte to match.
///
/// # Returns
/// - `Some(next)`: Offset past the byte when it matches.
/// - `None`: When the byte differs or the offset is at the end of input.
///
/// # Example
/// ```
/// use lisma::interpreter::scanner::match_char;
///
/// assert_eq!(match_char("(+ 1 2)", 0, b'('), Some(1));
/// assert_eq!(match_char("(+ 1 2)", 0, b')'), None);
/// ```
#[must_use]
pub fn match_char(src: &str, offset: usize, expected: u8) -> Option<usize> {
    (src.as_bytes().get(offset) == Some(&expected)).then_some(offset + 1)
}

/// Matches a literal keyword as a prefix of the text at `offset`.
///
/// The match is prefix-only; no delimiter is required after the keyword, so
/// `list` also matches the front of `listing`.
///
/// # Parameters
/// - `src`: Source text.
/// - `offset`: Byte offset to look at.
/// - `keyword`: The keyword to match.
///
/// # Returns
/// - `Some(next)`: Offset past the keyword on a match.
/// - `None`: When the remaining text does not start with the keyword.
///
/// # Example
/// ```
/// use lisma::interpreter::scanner::match_keyword;
///
/// assert_eq!(match_keyword("list 1 2)", 0, "list"), Some(4));
/// assert_eq!(match_keyword("listing", 0, "list"), Some(4));
/// assert_eq!(match_keyword("lis", 0, "list"), None);
/// ```
#[must_use]
pub fn match_keyword(src: &str, offset: usize, keyword: &str) -> Option<usize> {
    let rest = src.as_bytes().get(offset..)?;

    rest.starts_with(keyword.as_bytes())
        .then(|| offset + keyword.len())
}

/// Skips a maximal run of spaces, tabs and newlines.
///
/// Always succeeds; a zero-length run is valid. No other whitespace classes
/// are recognized. The number of bytes removed is the difference between the
/// returned offset and `offset`.
///
/// # Example
/// ```
/// use lisma::interpreter::scanner::skip_whitespace;
///
/// assert_eq!(skip_whitespace(" \t\n1", 0), 3);
/// assert_eq!(skip_whitespace("1", 0), 0);
/// ```
#[must_use]
pub fn skip_whitespace(src: &str, offset: usize) -> usize {
    let bytes = src.as_bytes();
    let mut next = offset;

    while let Some(&b) = bytes.get(next)
          && (b == b' ' || b == b'\t' || b == b'\n')
    {
        next += 1;
    }

    next
}

/// Scans a signed integer numeral.
///
/// Accepts an optional leading `-` followed by one or more ASCII digits.
/// The value accumulates digit by digit as `value * 10 + digit`; a leading
/// `-` negates the accumulated total. A bare `-` with no digit after it is
/// not a numeral and fails.
///
/// # Parameters
/// - `src`: Source text.
/// - `offset`: Byte offset of the first byte of the numeral.
///
/// # Returns
/// - `Some(IntegerMatch)`: The signed value and the offset just past the
///   last digit.
/// - `None`: When no digit was consumed.
///
/// # Example
/// ```
/// use lisma::interpreter::scanner::match_integer;
///
/// let m = match_integer("-83)", 0).unwrap();
/// assert_eq!((m.value, m.next), (-83, 3));
///
/// assert!(match_integer("-", 0).is_none());
/// ```
#[must_use]
pub fn match_integer(src: &str, offset: usize) -> Option<IntegerMatch> {
    let bytes = src.as_bytes();
    let negative = bytes.get(offset) == Some(&b'-');
    let mut next = if negative { offset + 1 } else { offset };

    let mut value: i64 = 0;
    let mut digits = 0_usize;

    while let Some(&d) = bytes.get(next)
          && d.is_ascii_digit()
    {
        value = value * 10 + i64::from(d - b'0');
        digits += 1;
        next += 1;
    }

    if digits == 0 {
        return None;
    }

    Some(IntegerMatch { value: if negative { -value } else { value },
                        next })
}

/// Scans a signed decimal numeral, reporting whether a dot was consumed.
///
/// Accepts an optional leading `-`, then digits, then optionally a single
/// `.` and more digits. At least one digit must be consumed overall, so a
/// bare `-` or a lone `.` fails. Only one `.` is permitted; a second `.`
/// terminates the scan before it rather than failing. A leading `.` with
/// digits is accepted, so `.5` scans as `0.5` with the dot flag set.
///
/// The integer part accumulates `value * 10 + digit` in `f64`; the
/// fractional part accumulates digit by digit in source order against a
/// growing power-of-ten divisor. The streaming accumulation can round
/// differently from a parse that divides by `10^n` once at the end.
///
/// # Parameters
/// - `src`: Source text.
/// - `offset`: Byte offset of the first byte of the numeral.
///
/// # Returns
/// - `Some(FloatMatch)`: The value, the dot flag, and the offset just past
///   the last consumed byte.
/// - `None`: When no digit was consumed.
///
/// # Example
/// ```
/// use lisma::interpreter::scanner::match_float;
///
/// let m = match_float("3.5)", 0).unwrap();
/// assert_eq!((m.value, m.dot, m.next), (3.5, true, 3));
///
/// let m = match_float("42 ", 0).unwrap();
/// assert!(!m.dot);
///
/// // A second dot stops the scan instead of failing it.
/// let m = match_float("1.2.3", 0).unwrap();
/// assert_eq!((m.value, m.next), (1.2, 3));
/// ```
#[must_use]
pub fn match_float(src: &str, offset: usize) -> Option<FloatMatch> {
    let bytes = src.as_bytes();
    let negative = bytes.get(offset) == Some(&b'-');
    let mut next = if negative { offset + 1 } else { offset };

    let mut value = 0.0_f64;
    let mut digits = 0_usize;

    while let Some(&d) = bytes.get(next)
          && d.is_ascii_digit()
    {
        value = value * 10.0 + f64::from(d - b'0');
        digits += 1;
        next += 1;
    }

    let dot = bytes.get(next) == Some(&b'.');
    if dot {
        next += 1;

        let mut divisor = 1.0_f64;
        while let Some(&d) = bytes.get(next)
              && d.is_ascii_digit()
        {
            divisor *= 10.0;
            value += f64::from(d - b'0') / divisor;
            digits += 1;
            next += 1;
        }
    }

    if digits == 0 {
        return None;
    }

    Some(FloatMatch { value: if negative { -value } else { value },
                      dot,
                      next })
}
