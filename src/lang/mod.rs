/*!
# Rust Language Module

This Rust module provides line handling and parsing of the language.
Program text is read one line at a time and split on brackets and
operators directly; there is no separate token stream.

*/

#[macro_use]
mod error;
mod ident;
mod parse;
mod source;

pub use error::Error;
pub use error::ErrorCode;
pub use ident::Ident;
pub use parse::parse;
pub use source::Source;

pub mod ast;

/// Source line numbers start at 1. `None` means the error is not tied to a line.
pub type LineNumber = Option<usize>;

#[cfg(test)]
mod tests;
