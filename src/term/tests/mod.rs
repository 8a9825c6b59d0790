use super::*;
use crate::mach::Input;
use linefeed::memory::MemoryTerminal;
use pretty_assertions::assert_eq;


fn console(typed: &str) -> Console<MemoryTerminal> {
    std::env::set_var("INPUTRC", "");
    let term = MemoryTerminal::new();
    term.push_input(typed);
    Console::with_term(term).unwrap()
}
