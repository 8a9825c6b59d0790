/*!
## Rust Machine Module

This Rust module evaluates parsed programs. Numbers are arbitrary
precision, names live in shared cells, and function bodies are linked to
the cells they reference when the function is defined.

*/

mod cell;
mod exec;
mod input;
mod link;
mod number;
mod operation;
mod runtime;
mod stack;
mod var;

pub use cell::{Cell, Definition, Function};
pub use exec::{Exec, PROMPT};
pub use input::{Input, Tokens};
pub use link::Link;
pub use number::Number;
pub use operation::Operation;
pub use runtime::{Runtime, SUCCESS};
pub use stack::{ensure_sufficient_stack, Stack};
pub use var::Var;

#[cfg(test)]
mod tests;
