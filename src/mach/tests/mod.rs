use crate::lang::ast::*;
use crate::lang::{parse, ErrorCode};
use crate::mach::*;
use std::rc::Rc;

mod runtime_test;

fn num(n: u64) -> Number {
    Number::from(n)
}

fn big(s: &str) -> Number {
    s.parse().unwrap()
}

fn run(source: &str, input: &str) -> String {
    let mut input = Tokens::new(input.as_bytes());
    let mut output: Vec<u8> = vec![];
    let _ = Runtime::default().run(source, &mut input, &mut output);
    String::from_utf8(output).unwrap()
}
