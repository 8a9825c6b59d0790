use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_if_with_literal_branches() {
    let program = parse("if\ntrue\nthen\nprint 1\nelse\nprint 2\nendif").unwrap();
    assert_eq!(
        program,
        vec![Statement::If(
            1,
            Expression::Bool(true),
            vec![Statement::Print(4, num(1))],
            vec![Statement::Print(6, num(2))],
        )]
    );
}

#[test]
fn test_missing_endif_reported_after_last_line() {
    let error = parse_err("if\ntrue\nthen\nprint 1\nelse\nprint 2");
    assert!(error.is(ErrorCode::ExpectedEndif));
    assert_eq!(error.line_number(), Some(7));
    assert_eq!(error.to_string(), "EXPECTED ENDIF IN 7");
    assert_eq!(error.message_str(), "");
}

#[test]
fn test_missing_keywords() {
    let error = parse_err("if\n(x < 1)\nprint x\nelse\nendif");
    assert!(error.is(ErrorCode::ExpectedThen));
    assert_eq!(error.line_number(), Some(3));
    assert!(parse_err("if\ntrue\nthen\nprint 1").is(ErrorCode::ExpectedElse));
    let error = parse_err("if\ntrue");
    assert!(error.is(ErrorCode::ExpectedEndif));
    assert_eq!(error.line_number(), Some(3));
    assert!(parse_err("if").is(ErrorCode::ExpectedEndif));
    let error = parse_err("while\ntrue\nprint 1");
    assert!(error.is(ErrorCode::ExpectedEndwhile));
    assert_eq!(error.line_number(), Some(4));
    assert!(parse_err("while").is(ErrorCode::ExpectedEndwhile));
    assert!(parse_err("recdef\nF[n]\nreturn n").is(ErrorCode::ExpectedEndrecdef));
    assert!(parse_err("recdef").is(ErrorCode::ExpectedEndrecdef));
}

#[test]
fn test_left_associative() {
    let program = parse("x = 10 - 4 - 3").unwrap();
    let answer = Statement::Let(
        1,
        "x".into(),
        Expression::Subtract(
            bx(Expression::Subtract(bx(num(10)), bx(num(4)))),
            bx(num(3)),
        ),
    );
    assert_eq!(program, vec![answer]);
}

#[test]
fn test_precedence_and_parens() {
    let program = parse("print 1 + 2 * 3\nprint (1 + 2) * 3").unwrap();
    assert_eq!(
        program,
        vec![
            Statement::Print(
                1,
                Expression::Add(bx(num(1)), bx(Expression::Multiply(bx(num(2)), bx(num(3))))),
            ),
            Statement::Print(
                2,
                Expression::Multiply(bx(Expression::Add(bx(num(1)), bx(num(2)))), bx(num(3))),
            ),
        ]
    );
}

#[test]
fn test_call_and_definitions() {
    let program = parse("SQUARE[x] = x * x\nprint SQUARE[n - 1]").unwrap();
    assert_eq!(
        program,
        vec![
            Statement::Def(
                1,
                "SQUARE".into(),
                "x".into(),
                Expression::Multiply(bx(var("x")), bx(var("x"))),
            ),
            Statement::Print(
                2,
                Expression::Call(
                    "SQUARE".into(),
                    bx(Expression::Subtract(bx(var("n")), bx(num(1)))),
                ),
            ),
        ]
    );
}

#[test]
fn test_recdef() {
    let program = parse("recdef\nID [ n ]\nreturn n\nendrecdef").unwrap();
    assert_eq!(
        program,
        vec![Statement::Recdef(
            1,
            "ID".into(),
            "n".into(),
            vec![Statement::Return(3, var("n"))],
        )]
    );
}

#[test]
fn test_conditions() {
    let program = parse("while\n((a < 1) && !(((b == 2) || false)))\nendwhile").unwrap();
    let cond = Expression::And(
        bx(Expression::Less(bx(var("a")), bx(num(1)))),
        bx(Expression::Not(bx(Expression::Or(
            bx(Expression::Equal(bx(var("b")), bx(num(2)))),
            bx(Expression::Bool(false)),
        )))),
    );
    assert_eq!(program, vec![Statement::While(1, cond, vec![])]);
}

#[test]
fn test_return_outside_recdef() {
    let error = parse_err("print 1\nreturn 1");
    assert!(error.is(ErrorCode::InvalidReturn));
    assert_eq!(error.line_number(), Some(2));
    assert!(parse_err("if\ntrue\nthen\nreturn 1\nelse\nendif").is(ErrorCode::InvalidReturn));
}

#[test]
fn test_return_allowed_in_nested_blocks_of_recdef() {
    let source = "recdef\nF[n]\nwhile\ntrue\nif\ntrue\nthen\nreturn n\nelse\nendif\nendwhile\nendrecdef";
    assert!(parse(source).is_ok());
}

#[test]
fn test_invalid_lines() {
    for source in [
        "Foo = 1",
        "print fOO",
        "x = FACT",
        "print (1 + 2",
        "print F[1",
        "print",
        "hello",
        "read X",
        "x = 1 +",
        "x = -1",
        "F[N] = 1",
        "if\n(x)\nthen\nelse\nendif",
        "if\nx < 1\nthen\nelse\nendif",
        "if\n(x & y)\nthen\nelse\nendif",
        "endif",
    ] {
        let error = parse_err(source);
        assert!(error.is(ErrorCode::InvalidLine), "{:?} gave {}", source, error);
        assert!(error.is_syntax());
    }
}

#[test]
fn test_blank_lines_are_skipped() {
    let program = parse("\n\n  print 1  \n\n").unwrap();
    assert_eq!(program, vec![Statement::Print(3, num(1))]);
}

#[test]
fn test_listing_parses_back() {
    let source = "recdef\nFACT[n]\nif\n(n == 0)\nthen\nreturn 1\nelse\nreturn n * FACT[n - 1]\nendif\nendrecdef\nprint FACT[5]";
    let program = parse(source).unwrap();
    let listing: String = program.iter().map(|s| format!("{}\n", s)).collect();
    assert_eq!(
        listing,
        "recdef\nFACT[n]\nif\n(n == 0)\nthen\nreturn 1\nelse\nreturn (n * FACT[(n - 1)])\nendif\nendrecdef\nprint FACT[5]\n"
    );
    assert_eq!(parse(&listing).unwrap(), program);
}
