#![cfg_attr(
    not(test),
    deny(
        unsafe_code,
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::todo,
        clippy::unimplemented,
        clippy::dbg_macro
    )
)]

mod adapters;
pub mod backends;
pub mod config;
mod context;
mod error;
mod status;
pub mod traits;

pub use adapters::{PeekableInput, TrackedInput};
pub use config::StreamConfig;
pub use context::{ContextGuard, InputContexts};
pub use error::{Error, InputError, OutputError};
pub use status::{InputStatus, Location};
pub use traits::{Chars, LispInput, LispOutput, Seekable};
