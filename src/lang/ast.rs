use crate::mach::{Cell, Number};
use std::rc::Rc;

/// Every statement carries the source line it started on.
#[derive(Debug, PartialEq, Clone)]
pub enum Statement {
    If(usize, Expression, Vec<Statement>, Vec<Statement>),
    While(usize, Expression, Vec<Statement>),
    Read(usize, Rc<str>),
    Print(usize, Expression),
    Return(usize, Expression),
    Let(usize, Rc<str>, Expression),
    Def(usize, Rc<str>, Rc<str>, Expression),
    Recdef(usize, Rc<str>, Rc<str>, Vec<Statement>),
}

#[derive(Debug, PartialEq, Clone)]
pub enum Expression {
    Bool(bool),
    Number(Number),
    Var(Rc<str>),
    Call(Rc<str>, Box<Expression>),
    Not(Box<Expression>),
    And(Box<Expression>, Box<Expression>),
    Or(Box<Expression>, Box<Expression>),
    Less(Box<Expression>, Box<Expression>),
    Greater(Box<Expression>, Box<Expression>),
    Equal(Box<Expression>, Box<Expression>),
    Add(Box<Expression>, Box<Expression>),
    Subtract(Box<Expression>, Box<Expression>),
    Multiply(Box<Expression>, Box<Expression>),
    Divide(Box<Expression>, Box<Expression>),
    Modulus(Box<Expression>, Box<Expression>),
    /// A free variable linked to its cell when the enclosing function was defined.
    Captured(Cell),
    /// A call made through a function cell linked at definition time.
    CapturedCall(Cell, Box<Expression>),
}

/// What a function evaluates when called.
#[derive(Debug, PartialEq, Clone)]
pub enum Body {
    Expression(Expression),
    Block(Vec<Statement>),
}

impl Statement {
    pub fn line_number(&self) -> usize {
        use Statement::*;
        match self {
            If(line, ..)
            | While(line, ..)
            | Read(line, ..)
            | Print(line, ..)
            | Return(line, ..)
            | Let(line, ..)
            | Def(line, ..)
            | Recdef(line, ..) => *line,
        }
    }
}

impl Expression {
    pub fn binary(op: &str, lhs: Expression, rhs: Expression) -> Option<Expression> {
        let (lhs, rhs) = (Box::new(lhs), Box::new(rhs));
        use Expression::*;
        Some(match op {
            "&&" => And(lhs, rhs),
            "||" => Or(lhs, rhs),
            "<" => Less(lhs, rhs),
            ">" => Greater(lhs, rhs),
            "==" => Equal(lhs, rhs),
            "+" => Add(lhs, rhs),
            "-" => Subtract(lhs, rhs),
            "*" => Multiply(lhs, rhs),
            "/" => Divide(lhs, rhs),
            "%" => Modulus(lhs, rhs),
            _ => return None,
        })
    }

    fn op_str(&self) -> &'static str {
        use Expression::*;
        match self {
            And(..) => "&&",
            Or(..) => "||",
            Less(..) => "<",
            Greater(..) => ">",
            Equal(..) => "==",
            Add(..) => "+",
            Subtract(..) => "-",
            Multiply(..) => "*",
            Divide(..) => "/",
            Modulus(..) => "%",
            _ => "",
        }
    }
}

fn fmt_block(f: &mut std::fmt::Formatter, block: &[Statement]) -> std::fmt::Result {
    for statement in block {
        writeln!(f, "{}", statement)?;
    }
    Ok(())
}

impl std::fmt::Display for Statement {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Statement::*;
        match self {
            If(_, cond, then_block, else_block) => {
                writeln!(f, "if\n{}\nthen", cond)?;
                fmt_block(f, then_block)?;
                writeln!(f, "else")?;
                fmt_block(f, else_block)?;
                write!(f, "endif")
            }
            While(_, cond, block) => {
                writeln!(f, "while\n{}", cond)?;
                fmt_block(f, block)?;
                write!(f, "endwhile")
            }
            Read(_, var) => write!(f, "read {}", var),
            Print(_, expr) => write!(f, "print {}", expr),
            Return(_, expr) => write!(f, "return {}", expr),
            Let(_, var, expr) => write!(f, "{} = {}", var, expr),
            Def(_, func, param, expr) => write!(f, "{}[{}] = {}", func, param, expr),
            Recdef(_, func, param, block) => {
                writeln!(f, "recdef\n{}[{}]", func, param)?;
                fmt_block(f, block)?;
                write!(f, "endrecdef")
            }
        }
    }
}

impl std::fmt::Display for Expression {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Expression::*;
        match self {
            Bool(true) => write!(f, "true"),
            Bool(false) => write!(f, "false"),
            Number(n) => write!(f, "{}", n),
            Var(name) => write!(f, "{}", name),
            Captured(cell) => write!(f, "{}", cell.name()),
            Call(name, arg) => write!(f, "{}[{}]", name, arg),
            CapturedCall(cell, arg) => write!(f, "{}[{}]", cell.name(), arg),
            Not(expr) => write!(f, "!({})", expr),
            And(lhs, rhs)
            | Or(lhs, rhs)
            | Less(lhs, rhs)
            | Greater(lhs, rhs)
            | Equal(lhs, rhs)
            | Add(lhs, rhs)
            | Subtract(lhs, rhs)
            | Multiply(lhs, rhs)
            | Divide(lhs, rhs)
            | Modulus(lhs, rhs) => write!(f, "({} {} {})", lhs, self.op_str(), rhs),
        }
    }
}

impl std::fmt::Display for Body {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Body::Expression(expr) => write!(f, "{}", expr),
            Body::Block(block) => fmt_block(f, block),
        }
    }
}
