use super::ast::*;
use super::*;
use crate::mach::Number;

mod parse_test;

fn num(n: u32) -> Expression {
    Expression::Number(Number::from(n))
}

fn var(name: &str) -> Expression {
    Expression::Var(name.into())
}

fn bx(expr: Expression) -> Box<Expression> {
    Box::new(expr)
}

fn parse_err(s: &str) -> Error {
    match parse(s) {
        Ok(program) => panic!("parsed {:?}", program),
        Err(error) => error,
    }
}
