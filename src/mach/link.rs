use super::{ensure_sufficient_stack, Cell, Definition, Var};
use crate::lang::ast::{Expression, Statement};
use crate::lang::Error;
use std::rc::Rc;

type Result<T> = std::result::Result<T, Error>;

/// ## Closure conversion
///
/// Rewrites a function body when its definition executes. Every free name
/// becomes a link to the cell bound to it right now, creating a placeholder
/// cell for names nobody has defined yet.
///
/// The parameter and every name the body assigns with `=`, `read` or a
/// nested definition belong to the call frame. They stay plain names and
/// are looked up per call. Nested definitions are copied untouched and get
/// converted when they themselves execute.

pub struct Link<'a> {
    var: &'a mut Var,
    param: &'a str,
    locals: Vec<Rc<str>>,
    captured: Vec<Rc<str>>,
}

impl<'a> Link<'a> {
    pub fn new(var: &'a mut Var, param: &'a str) -> Link<'a> {
        Link {
            var,
            param,
            locals: vec![],
            captured: vec![],
        }
    }

    /// Names linked so far, in order of first appearance.
    pub fn captured(&self) -> &[Rc<str>] {
        &self.captured
    }

    /// Converts a `recdef` body.
    pub fn body(&mut self, block: &[Statement]) -> Result<Vec<Statement>> {
        assigned(block, &mut self.locals);
        tracing::trace!(locals = ?self.locals, "frame locals");
        self.block(block)
    }

    fn block(&mut self, block: &[Statement]) -> Result<Vec<Statement>> {
        block.iter().map(|s| self.statement(s)).collect()
    }

    fn statement(&mut self, statement: &Statement) -> Result<Statement> {
        use Statement::*;
        ensure_sufficient_stack(|| {
            Ok(match statement {
                If(line, cond, then_block, else_block) => If(
                    *line,
                    self.expression(cond)?,
                    self.block(then_block)?,
                    self.block(else_block)?,
                ),
                While(line, cond, block) => While(*line, self.expression(cond)?, self.block(block)?),
                Print(line, expr) => Print(*line, self.expression(expr)?),
                Return(line, expr) => Return(*line, self.expression(expr)?),
                Let(line, var, expr) => Let(*line, var.clone(), self.expression(expr)?),
                Read(..) | Def(..) | Recdef(..) => statement.clone(),
            })
        })
    }

    pub fn expression(&mut self, expr: &Expression) -> Result<Expression> {
        use Expression::*;
        let (lhs, rhs) = match expr {
            Bool(_) | Number(_) | Captured(_) => return Ok(expr.clone()),
            Var(name) if self.is_local(name) => return Ok(expr.clone()),
            Var(name) => {
                let cell = self.capture(name, Definition::UndefinedVariable)?;
                return Ok(Captured(cell));
            }
            Call(name, arg) if self.is_local(name) => {
                let arg = ensure_sufficient_stack(|| self.expression(arg))?;
                return Ok(Call(name.clone(), Box::new(arg)));
            }
            Call(name, arg) => {
                let cell = self.capture(name, Definition::UndefinedFunction)?;
                let arg = ensure_sufficient_stack(|| self.expression(arg))?;
                return Ok(CapturedCall(cell, Box::new(arg)));
            }
            CapturedCall(cell, arg) => {
                let arg = ensure_sufficient_stack(|| self.expression(arg))?;
                return Ok(CapturedCall(cell.clone(), Box::new(arg)));
            }
            Not(inner) => {
                let inner = ensure_sufficient_stack(|| self.expression(inner))?;
                return Ok(Not(Box::new(inner)));
            }
            And(lhs, rhs)
            | Or(lhs, rhs)
            | Less(lhs, rhs)
            | Greater(lhs, rhs)
            | Equal(lhs, rhs)
            | Add(lhs, rhs)
            | Subtract(lhs, rhs)
            | Multiply(lhs, rhs)
            | Divide(lhs, rhs)
            | Modulus(lhs, rhs) => (lhs, rhs),
        };
        let lhs = Box::new(ensure_sufficient_stack(|| self.expression(lhs))?);
        let rhs = Box::new(ensure_sufficient_stack(|| self.expression(rhs))?);
        Ok(match expr {
            And(..) => And(lhs, rhs),
            Or(..) => Or(lhs, rhs),
            Less(..) => Less(lhs, rhs),
            Greater(..) => Greater(lhs, rhs),
            Equal(..) => Equal(lhs, rhs),
            Add(..) => Add(lhs, rhs),
            Subtract(..) => Subtract(lhs, rhs),
            Multiply(..) => Multiply(lhs, rhs),
            Divide(..) => Divide(lhs, rhs),
            _ => Modulus(lhs, rhs),
        })
    }

    fn is_local(&self, name: &str) -> bool {
        name == self.param || self.locals.iter().any(|local| &**local == name)
    }

    fn capture(&mut self, name: &Rc<str>, placeholder: Definition) -> Result<Cell> {
        if !self.captured.contains(name) {
            self.captured.push(name.clone());
        }
        self.var.capture(name, placeholder)
    }
}

/// Names bound by statements of `block`, not looking inside nested
/// definitions.
fn assigned(block: &[Statement], names: &mut Vec<Rc<str>>) {
    use Statement::*;
    for statement in block {
        match statement {
            If(_, _, then_block, else_block) => ensure_sufficient_stack(|| {
                assigned(then_block, names);
                assigned(else_block, names);
            }),
            While(_, _, block) => ensure_sufficient_stack(|| assigned(block, names)),
            Read(_, name) | Let(_, name, _) | Def(_, name, ..) | Recdef(_, name, ..) => {
                if !names.contains(name) {
                    names.push(name.clone());
                }
            }
            Print(..) | Return(..) => {}
        }
    }
}
