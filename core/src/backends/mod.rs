//! Reference backends for [`LispInput`](crate::LispInput) and
//! [`LispOutput`](crate::LispOutput).
//!
//! | Backend | Direction | Error |
//! |---------|-----------|-------|
//! | [`StringInput`] | input | `Infallible` |
//! | [`IoInput`] | input | [`InputError`](crate::InputError) |
//! | [`StringOutput`] | output | `Infallible` |
//! | [`IoOutput`] | output | [`OutputError`](crate::OutputError) |
//! | [`LimitedOutput`] | output | [`OutputError`](crate::OutputError) |
//!
//! Consoles and files go through the `Io*` pair:
//!
//! ```ignore
//! use std::io::{self, BufReader};
//! use lispio::backends::{IoInput, IoOutput};
//!
//! let input = IoInput::new(BufReader::new(io::stdin()));
//! let output = IoOutput::new(io::stdout().lock());
//! ```

mod io;
mod limited;
mod string;

pub use io::{IoInput, IoOutput};
pub use limited::LimitedOutput;
pub use string::{StringInput, StringOutput};
