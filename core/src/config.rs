//! Stream configuration for resource limits.
//!
//! This module provides [`StreamConfig`] for controlling how deeply input
//! contexts may nest.
//!
//! # Nesting Limits
//!
//! Every included file or string evaluated as source pushes a saved
//! [`InputStatus`](crate::InputStatus) onto the reader's context stack. A
//! self-including file would otherwise grow that stack until memory runs out,
//! so [`InputContexts`](crate::InputContexts) refuses to nest deeper than
//! [`StreamConfig::max_context_depth`].
//!
//! # Example
//!
//! ```ignore
//! use lispio::{InputContexts, StreamConfig};
//!
//! // Default limit (64 nested contexts)
//! let contexts = InputContexts::new();
//!
//! // Tighter limit for untrusted sources
//! let config = StreamConfig::new().with_max_context_depth(8);
//! let contexts = InputContexts::with_config(config);
//! ```

/// Configuration for input context handling.
///
/// # Default Values
///
/// | Setting | Default |
/// |---------|---------|
/// | `max_context_depth` | 64 |
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StreamConfig {
    /// Maximum number of saved input contexts.
    ///
    /// The outermost context does not count; entering the first nested
    /// context makes the depth 1. Exceeding the limit fails with
    /// [`Error::ContextDepthExceeded`](crate::Error::ContextDepthExceeded).
    pub max_context_depth: usize,
}

impl Default for StreamConfig {
    #[inline]
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl StreamConfig {
    /// Default configuration, usable in const contexts.
    pub const DEFAULT: Self = Self {
        max_context_depth: 64,
    };

    /// Creates a new configuration with default values.
    #[inline]
    pub const fn new() -> Self {
        Self::DEFAULT
    }

    /// Sets the maximum context depth.
    ///
    /// # Arguments
    ///
    /// * `depth` - Maximum nesting level. Use `usize::MAX` to disable the limit.
    #[inline]
    pub const fn with_max_context_depth(mut self, depth: usize) -> Self {
        self.max_context_depth = depth;
        self
    }

    /// Disables the nesting limit.
    ///
    /// Only use this when every source is trusted not to include itself.
    #[inline]
    pub const fn disable_context_limit(self) -> Self {
        self.with_max_context_depth(usize::MAX)
    }
}
