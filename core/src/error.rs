//! Error types for lispio.
//!
//! End of input is never an error: [`LispInput::next_char`] reports it as
//! `Ok(None)`. The types here cover I/O failures of the reference backends and
//! misuse of [`InputContexts`].
//!
//! Custom backends pick their own error type through the associated `Error`
//! of [`LispInput`] / [`LispOutput`]. They are free to reuse [`InputError`] and
//! [`OutputError`] or to convert them into a domain-specific type:
//!
//! ```ignore
//! #[derive(thiserror::Error, Debug)]
//! pub enum ReadError {
//!     #[error(transparent)]
//!     Input(#[from] lispio::InputError),
//!
//!     #[error("unbalanced `)` at {0}")]
//!     Unbalanced(lispio::Location),
//! }
//! ```
//!
//! [`LispInput`]: crate::LispInput
//! [`LispInput::next_char`]: crate::LispInput::next_char
//! [`LispOutput`]: crate::LispOutput
//! [`InputContexts`]: crate::InputContexts

use std::io;

use thiserror::Error as ThisError;

/// Failure while reading characters from a backend.
#[derive(ThisError, Debug)]
pub enum InputError {
    /// The underlying reader failed.
    #[error("read failed: {0}")]
    Io(#[from] io::Error),

    /// The byte sequence starting at `offset` is not valid UTF-8.
    #[error("invalid UTF-8 sequence at byte {offset}")]
    InvalidUtf8 {
        /// Byte offset of the first byte of the sequence.
        offset: usize,
    },

    /// The input ended in the middle of a multi-byte UTF-8 sequence.
    #[error("input ended inside a UTF-8 sequence starting at byte {offset}")]
    TruncatedUtf8 {
        /// Byte offset of the first byte of the sequence.
        offset: usize,
    },

    /// A seek target lies past the end of the input.
    #[error("position {position} is out of bounds for input of length {len}")]
    OutOfBounds {
        /// Requested character offset.
        position: usize,
        /// Length of the input in characters.
        len: usize,
    },
}

/// Failure while writing characters to a backend.
#[derive(ThisError, Debug)]
pub enum OutputError {
    /// The underlying writer failed.
    #[error("write failed: {0}")]
    Io(#[from] io::Error),

    /// The sink was closed and accepts no more characters.
    #[error("output stream is closed")]
    Closed,

    /// A bounded sink reached its capacity.
    #[error("output buffer full: capacity is {capacity} characters")]
    Full {
        /// Maximum number of characters the sink holds.
        capacity: usize,
    },
}

/// Top-level lispio error.
#[derive(ThisError, Debug)]
pub enum Error {
    /// Entering another input context would exceed the configured nesting limit.
    ///
    /// Returned by [`InputContexts::enter`](crate::InputContexts::enter) and
    /// [`InputContexts::push`](crate::InputContexts::push). The context stack
    /// is left unchanged.
    #[error("input context depth exceeded: depth {depth} > limit {limit}")]
    ContextDepthExceeded {
        /// Depth the stack would have reached.
        depth: usize,
        /// Maximum allowed depth.
        limit: usize,
    },

    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    Output(#[from] OutputError),
}

impl From<core::convert::Infallible> for Error {
    fn from(never: core::convert::Infallible) -> Self {
        match never {}
    }
}
