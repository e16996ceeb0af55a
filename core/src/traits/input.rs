use crate::InputError;

/// A source of characters for a reader.
///
/// Backends implement a single primitive, [`next_char`](Self::next_char),
/// which hands out one character at a time. Everything else a reader needs
/// (lookahead, line tracking) is layered on top by adapters such as
/// [`PeekableInput`](crate::PeekableInput) and
/// [`TrackedInput`](crate::TrackedInput).
///
/// # Results
///
/// | Result | Meaning |
/// |--------|---------|
/// | `Ok(Some(c))` | The next character |
/// | `Ok(None)` | Clean end of input |
/// | `Err(e)` | The backend failed |
///
/// End of input is never reported as an error, so a reader can always tell a
/// finished source from a broken one.
///
/// # Example
///
/// ```ignore
/// use lispio::LispInput;
///
/// struct Bytes<'a> {
///     rest: &'a [u8],
/// }
///
/// impl LispInput for Bytes<'_> {
///     type Error = core::convert::Infallible;
///
///     fn next_char(&mut self) -> Result<Option<char>, Self::Error> {
///         let Some((&first, rest)) = self.rest.split_first() else {
///             return Ok(None);
///         };
///         self.rest = rest;
///         Ok(Some(char::from(first)))
///     }
/// }
/// ```
///
/// # Blanket Implementations
///
/// - `&mut I`: Delegates to `I`
/// - `Box<I>`: Delegates to `I`, including `Box<dyn LispInput<Error = E>>`
pub trait LispInput {
    /// The failure type of this backend.
    type Error;

    /// Reads the next character.
    fn next_char(&mut self) -> Result<Option<char>, Self::Error>;

    /// Iterates over the remaining characters.
    ///
    /// The iterator ends at end of input and yields `Err` for backend
    /// failures.
    #[inline]
    fn chars(&mut self) -> Chars<'_, Self>
    where
        Self: Sized,
    {
        Chars { input: self }
    }
}

impl<I: LispInput + ?Sized> LispInput for &mut I {
    type Error = I::Error;

    #[inline]
    fn next_char(&mut self) -> Result<Option<char>, Self::Error> {
        (**self).next_char()
    }
}

impl<I: LispInput + ?Sized> LispInput for Box<I> {
    type Error = I::Error;

    #[inline]
    fn next_char(&mut self) -> Result<Option<char>, Self::Error> {
        (**self).next_char()
    }
}

/// Iterator returned by [`LispInput::chars`].
pub struct Chars<'a, I: ?Sized> {
    input: &'a mut I,
}

impl<I: LispInput + ?Sized> Iterator for Chars<'_, I> {
    type Item = Result<char, I::Error>;

    fn next(&mut self) -> Option<Self::Item> {
        self.input.next_char().transpose()
    }
}

/// An input that can move its read position.
///
/// Positions count characters from the start of the input. Only backends
/// holding the whole text (like [`StringInput`](crate::backends::StringInput))
/// can offer this.
pub trait Seekable: LispInput {
    /// Number of characters consumed so far.
    fn position(&self) -> usize;

    /// Moves the read position to `position`.
    ///
    /// Seeking to the end of the input is allowed; seeking past it fails with
    /// [`InputError::OutOfBounds`] and leaves the position unchanged.
    fn set_position(&mut self, position: usize) -> Result<(), InputError>;
}
