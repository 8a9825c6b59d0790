mod common;
use common::*;
use pretty_assertions::assert_eq;
use recdef::lang::{parse, ErrorCode};

#[test]
fn test_syntax_errors_stop_before_running() {
    assert_eq!(exec("print 1\nprint 2 +", ""), "?INVALID LINE IN 2\n");
    assert_eq!(exec("read x\nX = 1", "5"), "?INVALID LINE IN 2\n");
}

#[test]
fn test_missing_terminators() {
    let source = "if\ntrue\nthen\nprint 1\nelse\nprint 2";
    assert_eq!(exec(source, ""), "?EXPECTED ENDIF IN 7\n");
    assert_eq!(exec("if\ntrue\nprint 1", ""), "?EXPECTED THEN IN 3\n");
    assert_eq!(exec("if\n(1 < 2)", ""), "?EXPECTED ENDIF IN 3\n");
    assert_eq!(exec("if\ntrue\nthen\nprint 1", ""), "?EXPECTED ELSE IN 5\n");
    assert_eq!(exec("while\ntrue", ""), "?EXPECTED ENDWHILE IN 3\n");
    assert_eq!(exec("recdef\nF[x]\nreturn x", ""), "?EXPECTED ENDRECDEF IN 4\n");
}

#[test]
fn test_return_outside_recdef() {
    assert_eq!(exec("return 1", ""), "?RETURN OUTSIDE RECDEF IN 1\n");
    let source = "recdef\nF[x]\nreturn x\nendrecdef\nreturn 2";
    assert_eq!(exec(source, ""), "?RETURN OUTSIDE RECDEF IN 5\n");
}

#[test]
fn test_nested_blocks() {
    let source = "recdef
F[n]
while
(n > 0)
if
(n == 3)
then
return n
else
n = n - 1
endif
endwhile
return 0
endrecdef
print F[10]
print F[2]";
    let program = parse(source).unwrap();
    assert_eq!(program.len(), 3);
    assert_eq!(exec_ok(source, ""), "3\n0\n");
}

#[test]
fn test_classification() {
    let error = parse("print 1\nwhile").unwrap_err();
    assert!(error.is(ErrorCode::ExpectedEndwhile));
    assert!(error.is_syntax());
    assert!(!error.is_runtime());
    assert_eq!(error.code(), 25);
}

#[test]
fn test_deep_nesting() {
    let depth = 2000;
    let mut source = String::new();
    for _ in 0..depth {
        source.push_str("if\ntrue\nthen\n");
    }
    source.push_str("print 1\n");
    for _ in 0..depth {
        source.push_str("else\nendif\n");
    }
    assert_eq!(exec_ok(&source, ""), "1\n");
    let expr = format!("print {}1{}", "(".repeat(depth), ")".repeat(depth));
    assert_eq!(exec_ok(&expr, ""), "1\n");
}
