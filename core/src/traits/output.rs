use core::fmt;

/// A sink for characters produced by a printer.
///
/// Backends implement one primitive, [`put_char`](Self::put_char). String
/// and formatted output are derived from it, so a backend gets both for free.
///
/// # Required Methods
///
/// - `put_char(c)`: Write one character
///
/// # Provided Methods
///
/// - `write_str(s)`: Write every character of `s`, in order
/// - `write_fmt(args)`: Backs the `write!` macro
///
/// # Partial Writes
///
/// Output is streamed, not transactional. When `put_char` fails part way
/// through a string, the characters before the failing one remain written,
/// the error is returned, and nothing after it is attempted.
///
/// # Example
///
/// ```ignore
/// use lispio::LispOutput;
///
/// #[derive(Default)]
/// struct Upper(String);
///
/// impl LispOutput for Upper {
///     type Error = core::convert::Infallible;
///
///     fn put_char(&mut self, c: char) -> Result<(), Self::Error> {
///         self.0.extend(c.to_uppercase());
///         Ok(())
///     }
/// }
///
/// let mut out = Upper::default();
/// write!(out, "(quote {})", "x")?;
/// assert_eq!(out.0, "(QUOTE X)");
/// ```
///
/// # Blanket Implementations
///
/// - `&mut O`: Delegates to `O`
/// - `Box<O>`: Delegates to `O`, including `Box<dyn LispOutput<Error = E>>`
pub trait LispOutput {
    /// The failure type of this backend.
    type Error;

    /// Writes a single character.
    fn put_char(&mut self, c: char) -> Result<(), Self::Error>;

    /// Writes every character of `s` in order.
    ///
    /// An empty string makes no calls to [`put_char`](Self::put_char). On the
    /// first failure the error is returned and the rest of `s` is skipped.
    fn write_str(&mut self, s: &str) -> Result<(), Self::Error> {
        for c in s.chars() {
            self.put_char(c)?;
        }
        Ok(())
    }

    /// Writes formatted text; this is what `write!(output, ...)` calls.
    ///
    /// Backend failures come back as `Self::Error`, not [`fmt::Error`].
    ///
    /// # Panics
    ///
    /// Panics if a `Display`/`Debug` implementation reports an error while the
    /// backend itself did not fail, matching `std::io::Write::write_fmt`.
    #[allow(clippy::panic)]
    fn write_fmt(&mut self, args: fmt::Arguments<'_>) -> Result<(), Self::Error> {
        if let Some(s) = args.as_str() {
            return self.write_str(s);
        }

        let mut adapter = FmtAdapter {
            output: self,
            error: None,
        };
        match fmt::write(&mut adapter, args) {
            Ok(()) => Ok(()),
            Err(fmt::Error) => match adapter.error {
                Some(err) => Err(err),
                None => panic!(
                    "a formatting trait implementation returned an error when the underlying stream did not"
                ),
            },
        }
    }
}

impl<O: LispOutput + ?Sized> LispOutput for &mut O {
    type Error = O::Error;

    #[inline]
    fn put_char(&mut self, c: char) -> Result<(), Self::Error> {
        (**self).put_char(c)
    }

    #[inline]
    fn write_str(&mut self, s: &str) -> Result<(), Self::Error> {
        (**self).write_str(s)
    }
}

impl<O: LispOutput + ?Sized> LispOutput for Box<O> {
    type Error = O::Error;

    #[inline]
    fn put_char(&mut self, c: char) -> Result<(), Self::Error> {
        (**self).put_char(c)
    }

    #[inline]
    fn write_str(&mut self, s: &str) -> Result<(), Self::Error> {
        (**self).write_str(s)
    }
}

/// Bridges `fmt::Write` onto a [`LispOutput`], keeping the backend error.
struct FmtAdapter<'a, O: LispOutput + ?Sized> {
    output: &'a mut O,
    error: Option<O::Error>,
}

impl<O: LispOutput + ?Sized> fmt::Write for FmtAdapter<'_, O> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.output.write_str(s).map_err(|err| {
            self.error = Some(err);
            fmt::Error
        })
    }
}
