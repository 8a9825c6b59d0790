use super::{ast::*, source::trim, Error, Ident, Source};
use crate::mach::{ensure_sufficient_stack, Number};
use std::rc::Rc;

type Result<T> = std::result::Result<T, Error>;

/// Parses a whole program. The first problem found is returned with the
/// line it was found on; nothing after it is examined.
#[tracing::instrument(level = "debug", skip_all)]
pub fn parse(s: &str) -> Result<Vec<Statement>> {
    let mut parser = Parser {
        source: Source::new(s),
    };
    match parser.sequence(false, None) {
        Err(e) => Err(e.in_line_number(Some(parser.source.number()))),
        Ok(r) => {
            tracing::debug!(statements = r.len(), "parsed program");
            Ok(r)
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum End {
    Else,
    Endif,
    Endwhile,
    Endrecdef,
}

impl End {
    fn keyword(self) -> &'static str {
        match self {
            End::Else => "else",
            End::Endif => "endif",
            End::Endwhile => "endwhile",
            End::Endrecdef => "endrecdef",
        }
    }

    fn missing(self) -> Error {
        match self {
            End::Else => error!(ExpectedElse),
            End::Endif => error!(ExpectedEndif),
            End::Endwhile => error!(ExpectedEndwhile),
            End::Endrecdef => error!(ExpectedEndrecdef),
        }
    }
}

struct Parser<'a> {
    source: Source<'a>,
}

impl<'a> Parser<'a> {
    /// Reads statements until `end` (consumed) or end of input.
    /// `returns` is true inside a `recdef` body.
    fn sequence(&mut self, returns: bool, end: Option<End>) -> Result<Vec<Statement>> {
        let mut r: Vec<Statement> = vec![];
        loop {
            let line = match self.source.next_line() {
                Some(line) => line,
                None => {
                    return match end {
                        Some(end) => Err(end.missing()),
                        None => Ok(r),
                    }
                }
            };
            let line_number = self.source.number();
            let statement = match line {
                "if" => ensure_sufficient_stack(|| self.r#if(line_number, returns))?,
                "while" => ensure_sufficient_stack(|| self.r#while(line_number, returns))?,
                "recdef" => ensure_sufficient_stack(|| self.recdef(line_number))?,
                _ if end.map_or(false, |end| end.keyword() == line) => return Ok(r),
                _ => match Statement::for_line(line_number, line, returns)? {
                    Some(statement) => statement,
                    None => continue,
                },
            };
            r.push(statement);
        }
    }

    fn r#if(&mut self, line_number: usize, returns: bool) -> Result<Statement> {
        let predicate = match self.source.next_line() {
            Some(line) => condition(line)?,
            None => return Err(error!(ExpectedEndif)),
        };
        match self.source.next_line() {
            Some("then") => {}
            Some(_) => return Err(error!(ExpectedThen)),
            None => return Err(error!(ExpectedEndif)),
        }
        let then_block = self.sequence(returns, Some(End::Else))?;
        let else_block = self.sequence(returns, Some(End::Endif))?;
        Ok(Statement::If(line_number, predicate, then_block, else_block))
    }

    fn r#while(&mut self, line_number: usize, returns: bool) -> Result<Statement> {
        let predicate = match self.source.next_line() {
            Some(line) => condition(line)?,
            None => return Err(error!(ExpectedEndwhile)),
        };
        let block = self.sequence(returns, Some(End::Endwhile))?;
        Ok(Statement::While(line_number, predicate, block))
    }

    fn recdef(&mut self, line_number: usize) -> Result<Statement> {
        let (func, param) = match self.source.next_line() {
            Some(line) => header(line)?,
            None => return Err(error!(ExpectedEndrecdef)),
        };
        let block = self.sequence(true, Some(End::Endrecdef))?;
        Ok(Statement::Recdef(line_number, func, param, block))
    }
}

impl Statement {
    fn for_line(line_number: usize, line: &str, returns: bool) -> Result<Option<Statement>> {
        if line.is_empty() {
            return Ok(None);
        }
        if let Some(rest) = line.strip_prefix("print ") {
            let expr = expression(trim(rest))?;
            return Ok(Some(Statement::Print(line_number, expr)));
        }
        if let Some(rest) = line.strip_prefix("read ") {
            let var = variable(trim(rest))?;
            return Ok(Some(Statement::Read(line_number, var)));
        }
        if let Some(rest) = line.strip_prefix("return ") {
            if !returns {
                return Err(error!(InvalidReturn));
            }
            let expr = expression(trim(rest))?;
            return Ok(Some(Statement::Return(line_number, expr)));
        }
        let equals = match line.find('=') {
            Some(index) => index,
            None => return Err(error!(InvalidLine)),
        };
        let lhs = trim(&line[..equals]);
        let expr = trim(&line[equals + 1..]);
        if let Some(Ident::Variable(var)) = Ident::classify(lhs) {
            return Ok(Some(Statement::Let(line_number, var, expression(expr)?)));
        }
        let (func, param) = header(lhs)?;
        Ok(Some(Statement::Def(line_number, func, param, expression(expr)?)))
    }
}

/// `NAME[param]`
fn header(s: &str) -> Result<(Rc<str>, Rc<str>)> {
    let left = match s.find('[') {
        Some(left) if s.ends_with(']') => left,
        _ => return Err(error!(InvalidLine)),
    };
    let func = function(trim(&s[..left]))?;
    let param = variable(trim(&s[left + 1..s.len() - 1]))?;
    Ok((func, param))
}

fn variable(s: &str) -> Result<Rc<str>> {
    if Ident::is_variable(s) {
        Ok(s.into())
    } else {
        Err(error!(InvalidLine))
    }
}

fn function(s: &str) -> Result<Rc<str>> {
    if Ident::is_function(s) {
        Ok(s.into())
    } else {
        Err(error!(InvalidLine))
    }
}

/// Finds the rightmost operator byte outside of any brackets. Taking the
/// rightmost one makes every binary operator left-associative.
fn split(s: &str, ops: &[u8]) -> Option<usize> {
    let mut balance = 0;
    for (index, c) in s.bytes().enumerate().rev() {
        match c {
            b')' | b']' => balance += 1,
            b'(' | b'[' => balance -= 1,
            _ if balance == 0 && ops.contains(&c) => return Some(index),
            _ => {}
        }
    }
    None
}

fn binary(op: &str, lhs: Expression, rhs: Expression) -> Result<Expression> {
    match Expression::binary(op, lhs, rhs) {
        Some(expr) => Ok(expr),
        None => Err(error!(InternalError; "UNKNOWN OPERATOR")),
    }
}

fn condition(s: &str) -> Result<Expression> {
    ensure_sufficient_stack(|| match s {
        "" => Err(error!(InvalidLine)),
        "true" => Ok(Expression::Bool(true)),
        "false" => Ok(Expression::Bool(false)),
        _ if s.len() >= 3 && s.starts_with("!(") && s.ends_with(')') => {
            let inner = condition(trim(&s[2..s.len() - 1]))?;
            Ok(Expression::Not(Box::new(inner)))
        }
        _ if s.len() >= 2 && s.starts_with('(') && s.ends_with(')') => {
            let inner = &s[1..s.len() - 1];
            let index = match split(inner, b"&|<>=") {
                Some(index) => index,
                None => return Err(error!(InvalidLine)),
            };
            let bytes = inner.as_bytes();
            let rhs = trim(&inner[index + 1..]);
            match bytes[index] {
                b'<' | b'>' => {
                    let lhs = trim(&inner[..index]);
                    binary(&inner[index..=index], expression(lhs)?, expression(rhs)?)
                }
                b'=' if index > 0 && bytes[index - 1] == b'=' => {
                    let lhs = trim(&inner[..index - 1]);
                    binary("==", expression(lhs)?, expression(rhs)?)
                }
                c @ (b'&' | b'|') if index > 0 && bytes[index - 1] == c => {
                    let lhs = trim(&inner[..index - 1]);
                    binary(&inner[index - 1..=index], condition(lhs)?, condition(rhs)?)
                }
                _ => Err(error!(InvalidLine)),
            }
        }
        _ => Err(error!(InvalidLine)),
    })
}

fn expression(s: &str) -> Result<Expression> {
    if s.is_empty() {
        return Err(error!(InvalidLine));
    }
    ensure_sufficient_stack(|| match split(s, b"+-") {
        Some(index) => binary(
            &s[index..=index],
            expression(trim(&s[..index]))?,
            term(trim(&s[index + 1..]))?,
        ),
        None => term(s),
    })
}

fn term(s: &str) -> Result<Expression> {
    if s.is_empty() {
        return Err(error!(InvalidLine));
    }
    ensure_sufficient_stack(|| match split(s, b"*/%") {
        Some(index) => binary(
            &s[index..=index],
            term(trim(&s[..index]))?,
            factor(trim(&s[index + 1..]))?,
        ),
        None => factor(s),
    })
}

fn factor(s: &str) -> Result<Expression> {
    if s.is_empty() {
        return Err(error!(InvalidLine));
    }
    if s.len() >= 2 && s.starts_with('(') && s.ends_with(')') {
        return expression(trim(&s[1..s.len() - 1]));
    }
    if s.ends_with(']') {
        let left = match s.find('[') {
            Some(left) => left,
            None => return Err(error!(InvalidLine)),
        };
        let func = function(trim(&s[..left]))?;
        let arg = expression(trim(&s[left + 1..s.len() - 1]))?;
        return Ok(Expression::Call(func, Box::new(arg)));
    }
    if let Some(Ident::Variable(var)) = Ident::classify(s) {
        return Ok(Expression::Var(var));
    }
    if s.bytes().all(|c| c.is_ascii_digit()) {
        return Ok(Expression::Number(Number::from_digits(s)));
    }
    Err(error!(InvalidLine))
}
