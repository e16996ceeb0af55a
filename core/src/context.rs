use core::ops::{Deref, DerefMut};

use crate::{Error, InputStatus, StreamConfig};

/// The position of a reader plus the positions it will return to.
///
/// Every nested input context (an included file, a string evaluated as
/// source) saves the current [`InputStatus`] on entry and restores it on
/// exit. `InputContexts` keeps those snapshots on an explicit stack and
/// enforces [`StreamConfig::max_context_depth`].
///
/// Prefer [`enter`](Self::enter), which returns a guard that restores the
/// outer position when dropped, on every exit path including `?`:
///
/// ```ignore
/// let mut contexts = InputContexts::new();
/// contexts.status_mut().set_to("main.ys");
///
/// fn load(contexts: &mut InputContexts, path: &str) -> Result<(), Error> {
///     let mut nested = contexts.enter(path)?;
///     read_file(&mut nested)?; // position restored even if this fails
///     Ok(())
/// }
/// ```
///
/// [`push`](Self::push) and [`pop`](Self::pop) are the manual pair for
/// callers that cannot keep a guard alive.
#[derive(Debug, Clone, Default)]
pub struct InputContexts {
    status: InputStatus,
    saved: Vec<InputStatus>,
    config: StreamConfig,
}

impl InputContexts {
    /// Creates an unset outermost context with the default configuration.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: StreamConfig) -> Self {
        Self {
            status: InputStatus::new(),
            saved: Vec::new(),
            config,
        }
    }

    /// Position in the innermost context.
    #[inline]
    pub fn status(&self) -> &InputStatus {
        &self.status
    }

    #[inline]
    pub fn status_mut(&mut self) -> &mut InputStatus {
        &mut self.status
    }

    /// Number of saved outer contexts.
    #[inline]
    pub fn depth(&self) -> usize {
        self.saved.len()
    }

    #[inline]
    pub fn config(&self) -> &StreamConfig {
        &self.config
    }

    /// Saved positions, outermost first.
    #[inline]
    pub fn saved(&self) -> &[InputStatus] {
        &self.saved
    }

    /// Saves the current position and starts line 1 of `file_name`.
    ///
    /// Fails with [`Error::ContextDepthExceeded`] without changing anything
    /// when the new depth would pass the configured limit.
    pub fn push(&mut self, file_name: impl Into<String>) -> Result<(), Error> {
        let depth = self.saved.len().saturating_add(1);
        let limit = self.config.max_context_depth;
        if depth > limit {
            tracing::debug!(depth, limit, at = %self.status, "input context limit reached");
            return Err(Error::ContextDepthExceeded { depth, limit });
        }

        let file_name = file_name.into();
        tracing::trace!(from = %self.status, to = %file_name, depth, "entering input context");
        self.saved.push(self.status.clone());
        self.status.set_to(file_name);
        Ok(())
    }

    /// Restores the most recently saved position.
    ///
    /// Returns `false`, changing nothing, when no context is saved.
    pub fn pop(&mut self) -> bool {
        let Some(previous) = self.saved.pop() else {
            return false;
        };
        tracing::trace!(from = %self.status, to = %previous, depth = self.saved.len(), "leaving input context");
        self.status.restore_from(&previous);
        true
    }

    /// Enters a nested context for `file_name`.
    ///
    /// The returned guard dereferences to `self`, so the nested reader can
    /// update the position and enter further contexts through it. Dropping
    /// the guard restores the position that was current before this call.
    pub fn enter(&mut self, file_name: impl Into<String>) -> Result<ContextGuard<'_>, Error> {
        self.push(file_name)?;
        let depth = self.saved.len();
        Ok(ContextGuard {
            contexts: self,
            depth,
        })
    }

    /// Runs `f` inside a nested context for `file_name`.
    ///
    /// The outer position is restored whether `f` succeeds or fails.
    pub fn within<T, E>(
        &mut self,
        file_name: impl Into<String>,
        f: impl FnOnce(&mut InputContexts) -> Result<T, E>,
    ) -> Result<T, E>
    where
        E: From<Error>,
    {
        let mut guard = self.enter(file_name)?;
        f(&mut *guard)
    }

    /// Drops all saved contexts, returning to the outermost position.
    pub fn unwind(&mut self) {
        self.unwind_to(0);
    }

    fn unwind_to(&mut self, depth: usize) {
        while self.saved.len() > depth {
            self.pop();
        }
    }
}

/// Restores the enclosing input context when dropped.
///
/// Returned by [`InputContexts::enter`].
#[derive(Debug)]
pub struct ContextGuard<'a> {
    contexts: &'a mut InputContexts,
    depth: usize,
}

impl Deref for ContextGuard<'_> {
    type Target = InputContexts;

    #[inline]
    fn deref(&self) -> &Self::Target {
        self.contexts
    }
}

impl DerefMut for ContextGuard<'_> {
    #[inline]
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.contexts
    }
}

impl Drop for ContextGuard<'_> {
    fn drop(&mut self) {
        // Contexts pushed manually through the guard are unwound too.
        self.contexts.unwind_to(self.depth - 1);
    }
}
