//! Core stream traits for lispio.
//!
//! A reader and a printer talk to the outside world only through these
//! traits, so the same parsing and printing code runs against a console, a
//! file, or an in-memory buffer.
//!
//! # Trait Hierarchy
//!
//! ```text
//! LispInput (character source)
//!     ├── chars() iterator
//!     └── Seekable (rewindable sources)
//!
//! LispOutput (character sink)
//!     ├── write_str() derived from put_char()
//!     └── write_fmt() for write!()
//! ```
//!
//! # Usage Patterns
//!
//! ## Reading
//!
//! ```ignore
//! use lispio::{InputStatus, LispInput, TrackedInput};
//!
//! fn count_atoms<I: LispInput>(input: I, status: &mut InputStatus) -> Result<usize, I::Error> {
//!     let mut input = TrackedInput::new(input, status);
//!     let mut atoms = 0;
//!     while let Some(c) = input.next_char()? {
//!         if c.is_alphanumeric() {
//!             atoms += 1;
//!         }
//!     }
//!     Ok(atoms)
//! }
//! ```
//!
//! ## Printing
//!
//! ```ignore
//! use lispio::LispOutput;
//!
//! fn print_list<O: LispOutput>(out: &mut O, items: &[&str]) -> Result<(), O::Error> {
//!     out.put_char('(')?;
//!     for (idx, item) in items.iter().enumerate() {
//!         if idx > 0 {
//!             out.put_char(' ')?;
//!         }
//!         out.write_str(item)?;
//!     }
//!     out.put_char(')')
//! }
//! ```

mod input;
mod output;

pub use input::{Chars, LispInput, Seekable};
pub use output::LispOutput;
