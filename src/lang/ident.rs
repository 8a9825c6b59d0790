use std::rc::Rc;

/// Names are split into roles by their letter case.
#[derive(Debug, PartialEq, Eq, Hash, Clone)]
pub enum Ident {
    Variable(Rc<str>),
    Function(Rc<str>),
}

impl Ident {
    pub fn classify(s: &str) -> Option<Ident> {
        if Ident::is_variable(s) {
            Some(Ident::Variable(s.into()))
        } else if Ident::is_function(s) {
            Some(Ident::Function(s.into()))
        } else {
            None
        }
    }

    pub fn is_variable(s: &str) -> bool {
        !s.is_empty() && s.bytes().all(|c| c.is_ascii_lowercase())
    }

    pub fn is_function(s: &str) -> bool {
        !s.is_empty() && s.bytes().all(|c| c.is_ascii_uppercase())
    }

    pub fn name(&self) -> &Rc<str> {
        match self {
            Ident::Variable(s) | Ident::Function(s) => s,
        }
    }
}

impl std::fmt::Display for Ident {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
