//! # recdef
//!
//! A small line oriented language with unbounded integers, closures and
//! recursive functions.
//!
//! Install with `cargo install recdef-lang`, then run a program file.
//! ```text
//! $ cat fact.rd
//! recdef
//! FACT[n]
//! if
//! (n == 0)
//! then
//! return 1
//! else
//! return n * FACT[n - 1]
//! endif
//! endrecdef
//! print FACT[30]
//! $ recdef fact.rd
//! 265252859812191058636308480000000
//! PROGRAM ENDED SUCCESSFULLY.
//! ```
//!
//! The library runs programs on any reader and writer.
//! ```
//! use recdef::mach::{Runtime, Tokens};
//!
//! let mut input = Tokens::new("5\n".as_bytes());
//! let mut output: Vec<u8> = vec![];
//! let source = "read n\nprint n * n";
//! Runtime::default().run(source, &mut input, &mut output).unwrap();
//! assert_eq!(
//!     String::from_utf8(output).unwrap(),
//!     "> 25\nPROGRAM ENDED SUCCESSFULLY.\n"
//! );
//! ```

#[path = "doc/introduction.rs"]
#[allow(non_snake_case)]
pub mod _Introduction;

#[path = "doc/chapter_1.rs"]
#[allow(non_snake_case)]
pub mod __Chapter_1;

#[path = "doc/chapter_2.rs"]
#[allow(non_snake_case)]
pub mod __Chapter_2;

#[path = "doc/chapter_3.rs"]
#[allow(non_snake_case)]
pub mod __Chapter_3;

#[path = "doc/appendix_a.rs"]
#[allow(non_snake_case)]
pub mod ___Appendix_A;

pub mod lang;
pub mod mach;
pub mod term;
