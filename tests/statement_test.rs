mod common;
use common::*;
use pretty_assertions::assert_eq;
use recdef::mach::{Runtime, SUCCESS};

#[test]
fn test_empty_program() {
    assert_eq!(exec("", ""), format!("{}\n", SUCCESS));
    assert_eq!(exec("\n\n", ""), "PROGRAM ENDED SUCCESSFULLY.\n");
}

#[test]
fn test_assignment() {
    assert_eq!(exec_ok("a = 10\nprint a\na = a * a\nprint a", ""), "10\n100\n");
}

#[test]
fn test_spacing_is_free() {
    assert_eq!(exec_ok("\ta=1+2   \n  print   a*a", ""), "9\n");
    assert_eq!(exec_ok("F [ x ] = x\nprint F[ 3 ]", ""), "3\n");
}

#[test]
fn test_output_before_error_is_kept() {
    assert_eq!(exec("print 1\nprint 2\nprint z", ""), "1\n2\n?UNDEFINED VARIABLE IN 3; z\n");
}

#[test]
fn test_already_run() {
    let mut runtime = Runtime::default();
    assert_eq!(exec_on(&mut runtime, "print 1", ""), "1\nPROGRAM ENDED SUCCESSFULLY.\n");
    assert_eq!(exec_on(&mut runtime, "print 1", ""), "?ALREADY RUN\n");
    let mut runtime = Runtime::default();
    assert_eq!(exec_on(&mut runtime, "print 1 / 0", ""), "?DIVISION BY ZERO IN 1\n");
    assert_eq!(exec_on(&mut runtime, "read x", "5"), "?ALREADY RUN\n");
    let mut runtime = Runtime::default();
    assert_eq!(exec_on(&mut runtime, "if", ""), "?EXPECTED ENDIF IN 2\n");
    assert_eq!(exec_on(&mut runtime, "print 1", ""), "?ALREADY RUN\n");
}
