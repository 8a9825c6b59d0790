use super::{Cell, Definition, Stack};
use crate::lang::Error;
use std::collections::{HashMap, HashSet};
use std::rc::Rc;

type Result<T> = std::result::Result<T, Error>;

/// ## Binding memory
///
/// One map from names to cells plus an undo log. Every entry added to the
/// map is logged with whatever it replaced, so a call frame can put the map
/// back exactly as it found it with `restore(mark)`.
///
/// Each open call frame also keeps the set of names it bound itself. Inside
/// a frame only those are updated in place; any other name gets a fresh
/// cell that shadows the outer one until the frame is left.

#[derive(Debug)]
pub struct Var {
    cells: HashMap<Rc<str>, Cell>,
    undo: Stack<(Rc<str>, Option<Cell>)>,
    frames: Vec<HashSet<Rc<str>>>,
}

impl Default for Var {
    fn default() -> Var {
        Var {
            cells: HashMap::default(),
            undo: Stack::new("TOO MANY NESTED CALLS"),
            frames: vec![],
        }
    }
}

impl Var {
    pub fn new() -> Var {
        Var::default()
    }

    pub fn fetch(&self, name: &str) -> Option<&Cell> {
        self.cells.get(name)
    }

    /// Assignment and definition. A live binding owned by the current
    /// frame is updated in place so closures holding its cell see the
    /// change. At top level every live binding is.
    pub fn store(&mut self, name: &Rc<str>, definition: Definition) -> Result<()> {
        match self.cells.get(name) {
            Some(cell) if self.is_local(name) => {
                tracing::trace!(name = %name, "update binding");
                cell.set(definition);
                Ok(())
            }
            _ => self.insert(name, Cell::new(name.clone(), definition)),
        }
    }

    /// Makes sure the current frame owns a cell for `name` before a
    /// `recdef` body is linked, so the body calls the function being
    /// defined and not an outer one of the same name.
    pub fn declare(&mut self, name: &Rc<str>, placeholder: Definition) -> Result<()> {
        if self.cells.contains_key(name) && self.is_local(name) {
            return Ok(());
        }
        self.insert(name, Cell::new(name.clone(), placeholder))
    }

    /// Parameter binding. Always a fresh cell, shadowing any outer one
    /// until the frame is restored.
    pub fn bind(&mut self, name: &Rc<str>, definition: Definition) -> Result<()> {
        self.insert(name, Cell::new(name.clone(), definition))
    }

    /// The cell currently bound to `name`, creating it holding
    /// `placeholder` when there is none yet.
    pub fn capture(&mut self, name: &Rc<str>, placeholder: Definition) -> Result<Cell> {
        if let Some(cell) = self.cells.get(name) {
            return Ok(cell.clone());
        }
        tracing::trace!(name = %name, "forward reference");
        let cell = Cell::new(name.clone(), placeholder);
        self.insert(name, cell.clone())?;
        Ok(cell)
    }

    pub fn mark(&self) -> usize {
        self.undo.len()
    }

    /// Opens a call frame. Returns the mark to hand back to `leave`.
    pub fn enter(&mut self) -> usize {
        self.frames.push(HashSet::new());
        self.mark()
    }

    /// Closes the innermost frame and undoes everything it bound.
    pub fn leave(&mut self, mark: usize) {
        self.frames.pop();
        self.restore(mark);
    }

    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    /// Undoes every binding added since `mark`, newest first.
    pub fn restore(&mut self, mark: usize) {
        for (name, previous) in self.undo.drain(mark..).rev() {
            match previous {
                Some(cell) => {
                    self.cells.insert(name, cell);
                }
                None => {
                    self.cells.remove(&name);
                }
            }
        }
    }

    fn is_local(&self, name: &str) -> bool {
        match self.frames.last() {
            Some(frame) => frame.contains(name),
            None => true,
        }
    }

    fn insert(&mut self, name: &Rc<str>, cell: Cell) -> Result<()> {
        let previous = self.cells.insert(name.clone(), cell);
        self.undo.push((name.clone(), previous))?;
        if let Some(frame) = self.frames.last_mut() {
            frame.insert(name.clone());
        }
        Ok(())
    }
}
