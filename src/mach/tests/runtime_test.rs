use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_second_run_is_refused() {
    let mut runtime = Runtime::default();
    let mut input = Tokens::new("".as_bytes());
    let mut output: Vec<u8> = vec![];
    assert!(!runtime.is_finished());
    runtime.run("print 1", &mut input, &mut output).unwrap();
    assert!(runtime.is_finished());
    let error = runtime.run("print 2", &mut input, &mut output).unwrap_err();
    assert!(error.is(ErrorCode::AlreadyRun));
    assert_eq!(
        String::from_utf8(output).unwrap(),
        "1\nPROGRAM ENDED SUCCESSFULLY.\n?ALREADY RUN\n"
    );
}

#[test]
fn test_second_run_after_failure_does_not_read() {
    let mut runtime = Runtime::default();
    let mut input = Tokens::new("7\n".as_bytes());
    let mut output: Vec<u8> = vec![];
    assert!(runtime.execute("print 1 / 0", &mut input, &mut output).is_err());
    let error = runtime.execute("read x", &mut input, &mut output).unwrap_err();
    assert!(error.is(ErrorCode::AlreadyRun));
    assert_eq!(output, b"");
    assert_eq!(input.token("", &mut output).unwrap(), Some("7".to_string()));
}

#[test]
fn test_parse_failure_finishes_runtime() {
    let mut runtime = Runtime::default();
    let mut input = Tokens::new("".as_bytes());
    let mut output: Vec<u8> = vec![];
    let error = runtime.execute("print x\nwhile", &mut input, &mut output).unwrap_err();
    assert!(error.is(ErrorCode::ExpectedEndwhile));
    assert!(runtime.is_finished());
    assert_eq!(output, b"");
}

#[test]
fn test_execute_writes_only_program_output() {
    let mut runtime = Runtime::new();
    let mut input = Tokens::new("4 5".as_bytes());
    let mut output: Vec<u8> = vec![];
    runtime
        .execute("read a\nread b\nprint a * b", &mut input, &mut output)
        .unwrap();
    assert_eq!(String::from_utf8(output).unwrap(), "> > 20\n");
}

#[test]
fn test_runtime_error_line_is_innermost_statement() {
    let source = "recdef\nF[n]\nprint n\nreturn 10 / n\nendrecdef\nprint F[0]";
    assert_eq!(run(source, ""), "0\n?DIVISION BY ZERO IN 4\n");
}

#[test]
fn test_missing_return_names_function() {
    let source = "recdef\nNOP[n]\nprint n\nendrecdef\nx = NOP[3]";
    assert_eq!(run(source, ""), "3\n?MISSING RETURN IN 5; NOP\n");
}

#[test]
fn test_undefined_names() {
    assert_eq!(run("print x", ""), "?UNDEFINED VARIABLE IN 1; x\n");
    assert_eq!(run("print F[1]", ""), "?UNDEFINED FUNCTION IN 1; F\n");
}

#[test]
fn test_bad_input() {
    assert_eq!(run("read x", "abc"), "> ?INVALID INPUT IN 1; abc\n");
    assert_eq!(run("read x", ""), "> ?INVALID INPUT IN 1; END OF INPUT\n");
}

#[test]
fn test_styled_status_line() {
    let style = ansi_term::Style::new().bold();
    let mut input = Tokens::new("".as_bytes());
    let mut output: Vec<u8> = vec![];
    let mut runtime = Runtime::default();
    runtime.run_styled("print 1", &mut input, &mut output, style).unwrap();
    assert_eq!(output, b"1\nPROGRAM ENDED SUCCESSFULLY.\n");
    let mut output: Vec<u8> = vec![];
    let mut runtime = Runtime::default();
    let error = runtime
        .run_styled("print 2\nprint 1 / 0", &mut input, &mut output, style)
        .unwrap_err();
    assert!(error.is(ErrorCode::DivisionByZero));
    assert_eq!(
        String::from_utf8(output).unwrap(),
        "2\n\u{1b}[1m?DIVISION BY ZERO IN 2\u{1b}[0m\n"
    );
}
