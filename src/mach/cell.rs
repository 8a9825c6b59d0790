use super::Number;
use crate::lang::ast::Body;
use std::cell::{Ref, RefCell};
use std::rc::Rc;

/// ## Shared binding cell
///
/// A named, mutable slot that closures hold on to. Two cells are equal only
/// when they are the same slot, so a function capturing itself never makes
/// comparison or debug output recurse.
#[derive(Clone)]
pub struct Cell {
    name: Rc<str>,
    slot: Rc<RefCell<Definition>>,
}

/// What a name currently means.
#[derive(Debug, PartialEq, Clone)]
pub enum Definition {
    Number(Number),
    Function(Rc<Function>),
    /// Captured before any assignment.
    UndefinedVariable,
    /// Called before any definition.
    UndefinedFunction,
}

#[derive(Debug, PartialEq)]
pub struct Function {
    pub param: Rc<str>,
    pub body: Body,
}

impl Cell {
    pub fn new(name: Rc<str>, definition: Definition) -> Cell {
        Cell {
            name,
            slot: Rc::new(RefCell::new(definition)),
        }
    }

    pub fn name(&self) -> &Rc<str> {
        &self.name
    }

    pub fn borrow(&self) -> Ref<'_, Definition> {
        self.slot.borrow()
    }

    pub fn set(&self, definition: Definition) {
        *self.slot.borrow_mut() = definition;
    }

    pub fn is_defined(&self) -> bool {
        !matches!(
            *self.borrow(),
            Definition::UndefinedVariable | Definition::UndefinedFunction
        )
    }
}

impl PartialEq for Cell {
    fn eq(&self, other: &Cell) -> bool {
        Rc::ptr_eq(&self.slot, &other.slot)
    }
}

impl std::fmt::Debug for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "Cell({})", self.name)
    }
}
