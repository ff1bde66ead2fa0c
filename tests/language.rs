use lisma::{
    error::{Error, ParseError, RuntimeError},
    evaluate,
    interpreter::value::Value,
};
use pretty_assertions::assert_eq;

fn results(src: &str) -> Vec<Value> {
    evaluate(src).unwrap_or_else(|e| panic!("Script failed: {e}"))
}

fn rendered(src: &str) -> Vec<String> {
    results(src).iter().map(ToString::to_string).collect()
}

fn assert_renders(src: &str, expected: &[&str]) {
    assert_eq!(rendered(src), expected);
}

fn assert_failure(src: &str) -> Error {
    match evaluate(src) {
        Ok(values) => panic!("Script succeeded but was expected to fail: {values:?}"),
        Err(e) => e,
    }
}

#[test]
fn single_integer_literals() {
    assert_eq!(results("0"), vec![Value::Integer(0)]);
    assert_eq!(results("42"), vec![Value::Integer(42)]);
    assert_eq!(results("-7"), vec![Value::Integer(-7)]);
    assert_renders("1048576", &["1048576"]);
}

#[test]
fn addition_and_multiplication() {
    assert_renders("(+ 1 2)", &["3"]);
    assert_renders("(+ 1 2 3 4)", &["10"]);
    assert_renders("(* 2 3 4 5 6 -7 8 9 10)", &["-3628800"]);
    assert_renders("(* 7)", &["7"]);
    assert_renders("(* 0 5)", &["0"]);
}

#[test]
fn integer_results_stay_integers() {
    assert_eq!(results("(+ 1 2)"), vec![Value::Integer(3)]);
    assert_eq!(results("(* 2 3)"), vec![Value::Integer(6)]);
    assert_eq!(results("(- 10 93)"), vec![Value::Integer(-83)]);
    assert_eq!(results("(/ 10 2)"), vec![Value::Integer(5)]);
}

#[test]
fn one_real_argument_widens_the_whole_fold() {
    assert_renders("(+ 1.0 2)", &["3.000000"]);
    assert_renders("(+ 1 2.5)", &["3.500000"]);
    assert_renders("(* 2 2.5)", &["5.000000"]);
    assert_renders("(- 3.5 1)", &["2.500000"]);
    assert_eq!(results("(+ 1 2.5)"), vec![Value::Real(3.5)]);
}

#[test]
fn subtraction() {
    assert_renders("(- 10 93)", &["-83"]);
    assert_renders("(- 3.5 1.5)", &["2.000000"]);
    assert_renders("(- -7 -3)", &["-4"]);
}

#[test]
fn division_is_exact_or_real() {
    assert_renders("(/ 10 2)", &["5"]);
    assert_renders("(/ 7 -7)", &["-1"]);
    assert_renders("(/ 10 3)", &["3.333333"]);
    assert_renders("(/ 1.0 2)", &["0.500000"]);
}

#[test]
fn division_by_zero_falls_through_to_real() {
    // A zero divisor never has an exact quotient, so the division widens to
    // real arithmetic and follows IEEE semantics instead of erroring.
    let values = results("(/ 1 0)");
    assert!(matches!(values[0], Value::Real(r) if r.is_infinite() && r > 0.0));

    let values = results("(/ 0 0)");
    assert!(matches!(values[0], Value::Real(r) if r.is_nan()));
}

#[test]
fn list_forms_are_never_reduced() {
    assert_renders("(list 1 2 3)", &["(1, 2, 3)"]);
    assert_renders("(list)", &["()"]);
    assert_renders("(list 1 2 3)\n(list 4 5 6 7 8 9)", &["(1, 2, 3)", "(4, 5, 6, 7, 8, 9)"]);
}

#[test]
fn mixed_nested_list() {
    assert_renders("(list 1.05 2.77 (list 3.14 2.71) (+ 1 2) (- 3.5 (* 3 1.5)))",
                   &["(1.050000, 2.770000, (3.140000, 2.710000), 3, -1.000000)"]);
}

#[test]
fn calls_nest_inside_calls() {
    assert_renders("(+ 1 (* 2 3))", &["7"]);
    assert_renders("(- (+ 1 2) (* 2 2))", &["-1"]);
    assert_renders("(/ (* 2 5) (- 7 2))", &["2"]);
}

#[test]
fn top_level_forms_need_only_whitespace() {
    assert_renders("5 6", &["5", "6"]);
    assert_renders("  \t(+ 1\n   2)\n", &["3"]);
    assert_renders("1 (+ 1 1) 3.0", &["1", "2", "3.000000"]);
}

#[test]
fn bare_list_splices_into_the_top_level() {
    // Without the wrapping `(`, a list form contributes its elements to the
    // surrounding sequence one by one.
    assert_renders("list 1 2)", &["1", "2"]);
    assert_renders("(list 1 2)", &["(1, 2)"]);
}

#[test]
fn parenthesized_forms_rely_on_the_enclosing_list() {
    // The `(` rule wraps the single form inside it but leaves the matching
    // `)` to the surrounding list context. An operator form consumes the
    // delimiter through its own argument list, so `(+ 1 2)` is closed; a
    // numeral consumes nothing, so the `)` of `(5)` is left dangling.
    assert_renders("(+ 1 2)", &["3"]);
    assert_renders("(5", &["(5)"]);

    let error = assert_failure("(5)");
    assert!(matches!(error, Error::Parse(ParseError::UnrecognizedForm { offset: 2 })));
}

#[test]
fn negative_numerals_inside_argument_lists() {
    assert_renders("(* 2 -7)", &["-14"]);
    assert_renders("(+ -1 -2 -3)", &["-6"]);
    assert_renders("(- -1.5 2)", &["-3.500000"]);
}

#[test]
fn lone_minus_is_not_a_numeral() {
    let error = assert_failure("-");
    assert!(matches!(error, Error::Parse(ParseError::UnrecognizedForm { offset: 0 })));
}

#[test]
fn arity_errors() {
    let error = assert_failure("(+)");
    assert!(matches!(error, Error::Runtime(RuntimeError::TooFewArguments { offset: 1, .. })));

    let error = assert_failure("(*)");
    assert!(matches!(error, Error::Runtime(RuntimeError::TooFewArguments { .. })));

    let error = assert_failure("(- 5)");
    assert!(matches!(error,
                     Error::Runtime(RuntimeError::ArgumentCountMismatch { found: 1, .. })));

    let error = assert_failure("(- 1 2 3)");
    assert!(matches!(error,
                     Error::Runtime(RuntimeError::ArgumentCountMismatch { found: 3, .. })));

    let error = assert_failure("(/ 1 2 3)");
    assert!(matches!(error,
                     Error::Runtime(RuntimeError::ArgumentCountMismatch { found: 3, .. })));
}

#[test]
fn unterminated_lists_are_fatal() {
    let error = assert_failure("(list 1 2");
    assert!(matches!(error,
                     Error::Parse(ParseError::ExpectedClosingParen { offset }) if offset == 9));

    let error = assert_failure("(+ 1 2");
    assert!(matches!(error, Error::Parse(ParseError::ExpectedClosingParen { .. })));
}

#[test]
fn unrecognized_forms_report_their_offset() {
    let error = assert_failure("abc");
    assert_eq!(error.offset(), 0);

    let error = assert_failure("(+ 1 x)");
    assert!(matches!(error, Error::Parse(ParseError::UnrecognizedForm { offset: 5 })));
}

#[test]
fn list_arguments_to_arithmetic_are_rejected() {
    let error = assert_failure("(+ 1 (list 2 3))");
    assert!(matches!(error, Error::Runtime(RuntimeError::ExpectedNumber { offset: 1 })));
}

#[test]
fn keyword_matching_is_prefix_only() {
    // TODO: require a delimiter after keywords so `listing` stops matching
    // `list`.
    assert_renders("list4 5)", &["4", "5"]);

    let error = assert_failure("(listing 1 2)");
    assert!(matches!(error, Error::Parse(ParseError::UnrecognizedForm { offset: 5 })));
}

#[test]
fn real_zero_products_are_rejected() {
    // A real multiplication whose accumulated product hits exactly zero is
    // treated as a failed consistency check. This reads like a leftover
    // debugging assertion rather than intended arithmetic; worth revisiting
    // before anything depends on it.
    let error = assert_failure("(* 0.0 5)");
    assert!(matches!(error, Error::Runtime(RuntimeError::ZeroProduct { offset: 1 })));

    let error = assert_failure("(* 5 0.0)");
    assert!(matches!(error, Error::Runtime(RuntimeError::ZeroProduct { .. })));

    let error = assert_failure("(* 0.0)");
    assert!(matches!(error, Error::Runtime(RuntimeError::ZeroProduct { .. })));

    // The integer side is untouched: an integer zero product is a value.
    assert_renders("(* 0 5)", &["0"]);
}

#[test]
fn decimal_scanning_edges() {
    assert_renders(".5", &["0.500000"]);
    assert_renders("3.", &["3.000000"]);
    // A second dot terminates the numeral; the remainder scans as its own
    // form.
    assert_renders("1.2.3", &["1.200000", "0.300000"]);
}

#[test]
fn error_messages_carry_the_offset() {
    let error = assert_failure("-");
    assert_eq!(error.to_string(), "Error at offset 0: Unrecognized form.");

    let error = assert_failure("(- 5)");
    assert_eq!(error.to_string(),
               "Error at offset 1: Expected 2 arguments to '-', found 1.");
}
