use crate::expression::{Expression, ExpressionError};
use crate::parser::{DEFAULT_MAX_DEPTH, ParseError, parse_str};
use crate::session::{Session, SessionError, SessionOptions, Value, format_general};

#[test]
fn test_default_options() {
    let options = SessionOptions::default();
    assert_eq!(options.variable, "x");
    assert_eq!(options.max_depth, DEFAULT_MAX_DEPTH);
    assert_eq!(Session::new().variable(), "x");
}

#[test]
fn test_numerical_line() {
    let session = Session::new();
    let result = session.process("2+3*4");
    assert!(result.is_ok());
    if let Ok(report) = result {
        assert_eq!(report.tokens.len(), 5);
        assert_eq!(report.value, Value::Number(14.0));
        assert_eq!(report.simplified, report.expression);
        assert_eq!(report.derivative, Expression::Number(0));
    }
}

#[test]
fn test_symbolic_line() {
    let session = Session::new();
    let result = session.process("x * x + 0");
    assert!(result.is_ok());
    if let Ok(report) = result {
        assert_eq!(report.value, Value::NotNumerical);
        assert_eq!(Ok(report.simplified), parse_str("x * x"));
        assert_eq!(Ok(report.derivative), parse_str("x + x"));
    }
}

#[test]
fn test_report_rendering() {
    let session = Session::new();
    let result = session.process("(y*1)*x");
    assert!(result.is_ok());
    if let Ok(report) = result {
        let expected = "tokens: ( y * 1 ) * x\n\
                        in infix notation: ((y * 1) * x)\n\
                        this is not a numerical expression\n\
                        simplified: (y * x)\n\
                        derivative to x: y";
        assert_eq!(report.to_string(), expected);
    }
}

#[test]
fn test_report_rendering_with_value() {
    let session = Session::new();
    let result = session.process("7/2");
    assert!(result.is_ok());
    if let Ok(report) = result {
        assert!(report.to_string().contains("the value is 3.5\n"));
    }
}

#[test]
fn test_custom_variable() {
    let options = SessionOptions {
        variable: "t".to_string(),
        ..SessionOptions::default()
    };
    let session = Session::with_options(options);
    assert!(session.is_ok());
    if let Ok(session) = session {
        let result = session.process("x * t");
        assert!(result.is_ok());
        if let Ok(report) = result {
            assert_eq!(report.derivative, Expression::identifier("x"));
            assert!(report.to_string().ends_with("derivative to t: x"));
        }
    }
}

#[test]
fn test_invalid_variable() {
    let options = SessionOptions {
        variable: "2x".to_string(),
        ..SessionOptions::default()
    };
    assert!(matches!(
        Session::with_options(options),
        Err(SessionError::InvalidVariable(name)) if name == "2x"
    ));
}

#[test]
fn test_depth_limit_from_options() {
    let options = SessionOptions {
        max_depth: 1,
        ..SessionOptions::default()
    };
    let session = Session::with_options(options);
    assert!(session.is_ok());
    if let Ok(session) = session {
        assert!(session.process("(x)").is_ok());
        assert_eq!(
            session.process("((x))"),
            Err(SessionError::Parse(ParseError::NestingTooDeep { limit: 1 }))
        );
    }
}

#[test]
fn test_huge_flat_chain_fails_without_crashing() {
    let session = Session::new();
    let line = vec!["x"; 20_000].join("+");
    assert_eq!(
        session.process(&line),
        Err(SessionError::Parse(ParseError::NestingTooDeep {
            limit: DEFAULT_MAX_DEPTH
        }))
    );

    let line = vec!["x"; 200_000].join("*");
    assert!(matches!(
        session.process(&line),
        Err(SessionError::Parse(ParseError::NestingTooDeep { .. }))
    ));
}

#[test]
fn test_deepest_accepted_tree_goes_through_every_stage() {
    let session = Session::new();
    let line = vec!["x"; DEFAULT_MAX_DEPTH + 1].join("/");
    let result = session.process(&line);
    assert!(result.is_ok());
    if let Ok(report) = result {
        assert_eq!(report.value, Value::NotNumerical);
        assert!(!report.derivative.to_string().is_empty());
    }
}

#[test]
fn test_parse_failures_are_reported() {
    let session = Session::new();
    assert!(matches!(
        session.process("1+*2"),
        Err(SessionError::Parse(_))
    ));
    assert!(matches!(session.process("1 2"), Err(SessionError::Parse(_))));
    assert!(matches!(session.process(""), Err(SessionError::Parse(_))));
}

#[test]
fn test_division_by_zero_is_reported() {
    let session = Session::new();
    assert_eq!(
        session.process("1/0"),
        Err(SessionError::Evaluation(ExpressionError::DivisionByZero))
    );
}

#[test]
fn test_failure_does_not_affect_next_line() {
    let session = Session::new();
    assert!(session.process("(1+").is_err());
    let result = session.process("1+1");
    assert!(result.is_ok());
    if let Ok(report) = result {
        assert_eq!(report.value, Value::Number(2.0));
    }
}

#[test]
fn test_terminator() {
    assert!(Session::is_terminator("!"));
    assert!(Session::is_terminator("!quit"));
    assert!(!Session::is_terminator(" !"));
    assert!(!Session::is_terminator("x"));
}

#[test]
fn test_format_general_fixed_notation() {
    assert_eq!(format_general(14.0), "14");
    assert_eq!(format_general(-4.0), "-4");
    assert_eq!(format_general(3.5), "3.5");
    assert_eq!(format_general(0.0), "0");
    assert_eq!(format_general(1.0 / 3.0), "0.333333");
    assert_eq!(format_general(123456.0), "123456");
    assert_eq!(format_general(0.0001), "0.0001");
}

#[test]
fn test_format_general_scientific_notation() {
    assert_eq!(format_general(1e20), "1e+20");
    assert_eq!(format_general(1234567.0), "1.23457e+06");
    assert_eq!(format_general(999999.5), "1e+06");
    assert_eq!(format_general(0.00001), "1e-05");
    assert_eq!(format_general(-2.5e-7), "-2.5e-07");
    assert_eq!(format_general(f64::INFINITY), "inf");
}

#[test]
fn test_report_prints_large_values_compactly() {
    let session = Session::new();
    let result = session.process("100000 * 100000 * 10000000000");
    assert!(result.is_ok());
    if let Ok(report) = result {
        assert!(report.to_string().contains("the value is 1e+20\n"));
    }
}
