//! # recdef
//!
//! Runs a program file: `recdef <program-file>`.
//! Prints the parsed listing instead with `recdef --list <program-file>`.

fn main() {
    recdef::term::main()
}
