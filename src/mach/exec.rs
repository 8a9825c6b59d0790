use super::{ensure_sufficient_stack, Cell, Definition, Function, Input, Link, Number, Operation, Var};
use crate::error;
use crate::lang::ast::{Body, Expression, Statement};
use crate::lang::Error;
use std::io::Write;
use std::rc::Rc;

type Result<T> = std::result::Result<T, Error>;

pub const PROMPT: &str = "> ";

/// How a statement finished.
#[derive(Debug)]
enum Flow {
    Next,
    Return(Number),
}

/// ## Tree-walking evaluator
///
/// Owns the binding memory for one program run and borrows the streams
/// `read` and `print` talk to.
pub struct Exec<'a> {
    var: Var,
    input: &'a mut dyn Input,
    output: &'a mut dyn Write,
}

impl<'a> Exec<'a> {
    pub fn new(input: &'a mut dyn Input, output: &'a mut dyn Write) -> Exec<'a> {
        Exec {
            var: Var::new(),
            input,
            output,
        }
    }

    pub fn run(&mut self, program: &[Statement]) -> Result<()> {
        match self.block(program)? {
            Flow::Next => Ok(()),
            Flow::Return(_) => Err(error!(InternalError; "RETURN AT TOP LEVEL")),
        }
    }

    fn block(&mut self, block: &[Statement]) -> Result<Flow> {
        for statement in block {
            if let Flow::Return(val) = self.statement(statement)? {
                return Ok(Flow::Return(val));
            }
        }
        Ok(Flow::Next)
    }

    fn statement(&mut self, statement: &Statement) -> Result<Flow> {
        ensure_sufficient_stack(|| self.r#do(statement))
            .map_err(|e| e.or_line_number(statement.line_number()))
    }

    fn r#do(&mut self, statement: &Statement) -> Result<Flow> {
        match statement {
            Statement::If(_, cond, then_block, else_block) => {
                if Operation::is_true(&self.expression(cond)?) {
                    self.block(then_block)
                } else {
                    self.block(else_block)
                }
            }
            Statement::While(_, cond, block) => {
                while Operation::is_true(&self.expression(cond)?) {
                    if let Flow::Return(val) = self.block(block)? {
                        return Ok(Flow::Return(val));
                    }
                }
                Ok(Flow::Next)
            }
            Statement::Read(_, var) => {
                let token = match self.input.token(PROMPT, &mut *self.output)? {
                    Some(token) => token,
                    None => return Err(error!(InvalidInput; "END OF INPUT")),
                };
                let val: Number = token.parse()?;
                self.var.store(var, Definition::Number(val))?;
                Ok(Flow::Next)
            }
            Statement::Print(_, expr) => {
                let val = self.expression(expr)?;
                writeln!(self.output, "{}", val)?;
                Ok(Flow::Next)
            }
            Statement::Return(_, expr) => Ok(Flow::Return(self.expression(expr)?)),
            Statement::Let(_, var, expr) => {
                let val = self.expression(expr)?;
                self.var.store(var, Definition::Number(val))?;
                Ok(Flow::Next)
            }
            Statement::Def(_, func, param, expr) => {
                let mut link = Link::new(&mut self.var, param);
                let body = Body::Expression(link.expression(expr)?);
                tracing::debug!(function = %func, param = %param, captured = ?link.captured(), "define");
                self.define(func, param, body)
            }
            Statement::Recdef(_, func, param, block) => {
                self.var.declare(func, Definition::UndefinedFunction)?;
                let mut link = Link::new(&mut self.var, param);
                let body = Body::Block(link.body(block)?);
                tracing::debug!(function = %func, param = %param, captured = ?link.captured(), "define");
                self.define(func, param, body)
            }
        }
    }

    fn define(&mut self, func: &Rc<str>, param: &Rc<str>, body: Body) -> Result<Flow> {
        let function = Function {
            param: param.clone(),
            body,
        };
        self.var
            .store(func, Definition::Function(Rc::new(function)))?;
        Ok(Flow::Next)
    }

    fn expression(&mut self, expr: &Expression) -> Result<Number> {
        ensure_sufficient_stack(|| self.eval(expr))
    }

    fn eval(&mut self, expr: &Expression) -> Result<Number> {
        use Expression::*;
        match expr {
            Bool(b) => Ok(Operation::truth(*b)),
            Number(n) => Ok(n.clone()),
            Var(name) => match self.var.fetch(name) {
                Some(cell) => Self::value(cell),
                None => Err(error!(UndefinedVariable; name)),
            },
            Captured(cell) => Self::value(cell),
            Call(name, arg) => {
                let function = match self.var.fetch(name) {
                    Some(cell) => Self::function(cell)?,
                    None => return Err(error!(UndefinedFunction; name)),
                };
                self.call(name, &function, arg)
            }
            CapturedCall(cell, arg) => {
                let function = Self::function(cell)?;
                self.call(cell.name(), &function, arg)
            }
            Not(expr) => Ok(Operation::not(&self.expression(expr)?)),
            And(lhs, rhs) => {
                if !Operation::is_true(&self.expression(lhs)?) {
                    return Ok(Operation::truth(false));
                }
                let rhs = self.expression(rhs)?;
                Ok(Operation::truth(Operation::is_true(&rhs)))
            }
            Or(lhs, rhs) => {
                if Operation::is_true(&self.expression(lhs)?) {
                    return Ok(Operation::truth(true));
                }
                let rhs = self.expression(rhs)?;
                Ok(Operation::truth(Operation::is_true(&rhs)))
            }
            Less(lhs, rhs) => self.binary(lhs, rhs, Operation::less),
            Greater(lhs, rhs) => self.binary(lhs, rhs, Operation::greater),
            Equal(lhs, rhs) => self.binary(lhs, rhs, Operation::equal),
            Add(lhs, rhs) => self.binary(lhs, rhs, Operation::sum),
            Subtract(lhs, rhs) => self.binary(lhs, rhs, Operation::subtract),
            Multiply(lhs, rhs) => self.binary(lhs, rhs, Operation::multiply),
            Divide(lhs, rhs) => self.binary(lhs, rhs, Operation::divide),
            Modulus(lhs, rhs) => self.binary(lhs, rhs, Operation::modulus),
        }
    }

    fn binary(
        &mut self,
        lhs: &Expression,
        rhs: &Expression,
        op: fn(Number, Number) -> Result<Number>,
    ) -> Result<Number> {
        let lhs = self.expression(lhs)?;
        let rhs = self.expression(rhs)?;
        op(lhs, rhs)
    }

    fn value(cell: &Cell) -> Result<Number> {
        match &*cell.borrow() {
            Definition::Number(val) => Ok(val.clone()),
            _ => Err(error!(UndefinedVariable; cell.name())),
        }
    }

    fn function(cell: &Cell) -> Result<Rc<Function>> {
        match &*cell.borrow() {
            Definition::Function(function) => Ok(function.clone()),
            _ => Err(error!(UndefinedFunction; cell.name())),
        }
    }

    fn call(&mut self, name: &Rc<str>, function: &Function, arg: &Expression) -> Result<Number> {
        let arg = self.expression(arg)?;
        self.frame(|this| {
            tracing::trace!(function = %name, depth = this.var.depth(), "call");
            this.var.bind(&function.param, Definition::Number(arg))?;
            match &function.body {
                Body::Expression(expr) => this.expression(expr),
                Body::Block(block) => match this.block(block)? {
                    Flow::Return(val) => Ok(val),
                    Flow::Next => Err(error!(MissingReturn; name)),
                },
            }
        })
    }

    /// Runs `f` inside a call frame. Every binding made while it runs is
    /// undone when it returns, whether it succeeded or not. Assignments
    /// and definitions in the frame shadow outer names instead of
    /// overwriting them.
    fn frame<T>(&mut self, f: impl FnOnce(&mut Self) -> Result<T>) -> Result<T> {
        let mark = self.var.enter();
        let result = f(self);
        self.var.leave(mark);
        tracing::trace!(depth = self.var.depth(), "restore");
        result
    }
}
