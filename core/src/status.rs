use core::fmt;
use core::num::NonZeroUsize;

/// The current source position of a reader: a file name and a 1-based line.
///
/// `InputStatus` is a passive record. It never looks at a stream; the reader
/// that owns it calls [`next_line`](Self::next_line) whenever it consumes a
/// newline (or wraps its input in [`TrackedInput`](crate::TrackedInput),
/// which does that automatically).
///
/// Cloning an `InputStatus` takes a snapshot. Before switching to a nested
/// input context, save a clone; when the nested context ends, put it back
/// with [`restore_from`](Self::restore_from). [`InputContexts`] automates this
/// pairing with a scope guard.
///
/// # Invariants
///
/// - The line number is always at least 1.
/// - The file name is never absent. A tracker that has not been pointed at a
///   source yet holds [`InputStatus::UNSET`] and reports `is_set() == false`.
///
/// # Example
///
/// ```ignore
/// let mut status = InputStatus::new();
/// status.set_to("prelude.ys");
/// status.next_line();
///
/// let saved = status.clone();
/// status.set_to("included.ys");
/// // ... read the included file ...
/// status.restore_from(&saved);
///
/// assert_eq!(status.to_string(), "prelude.ys:2");
/// ```
///
/// [`InputContexts`]: crate::InputContexts
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "fuzz", derive(arbitrary::Arbitrary))]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct InputStatus {
    file_name: String,
    line_number: NonZeroUsize,
}

impl Default for InputStatus {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl InputStatus {
    /// File name held by a tracker that has not been set yet.
    pub const UNSET: &'static str = "";

    /// Creates an unset tracker at line 1.
    #[inline]
    pub const fn new() -> Self {
        Self {
            file_name: String::new(),
            line_number: NonZeroUsize::MIN,
        }
    }

    /// Creates a tracker positioned at line 1 of `file_name`.
    pub fn from_file(file_name: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            line_number: NonZeroUsize::MIN,
        }
    }

    /// Points the tracker at a new source and resets the line number to 1.
    ///
    /// The name is copied; the caller keeps ownership of whatever it passed.
    pub fn set_to(&mut self, file_name: impl Into<String>) {
        self.file_name = file_name.into();
        self.line_number = NonZeroUsize::MIN;
    }

    /// Copies the file name and line number of `previous` into `self`.
    ///
    /// `previous` is left untouched.
    pub fn restore_from(&mut self, previous: &InputStatus) {
        self.file_name.clone_from(&previous.file_name);
        self.line_number = previous.line_number;
    }

    /// Advances to the next line.
    ///
    /// Saturates at `usize::MAX`.
    #[inline]
    pub fn next_line(&mut self) {
        self.line_number = self.line_number.saturating_add(1);
    }

    /// Current file name, [`UNSET`](Self::UNSET) until the first `set_to`.
    #[inline]
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// Current 1-based line number.
    #[inline]
    pub fn line_number(&self) -> usize {
        self.line_number.get()
    }

    /// Returns `false` until the tracker is given a file name.
    #[inline]
    pub fn is_set(&self) -> bool {
        self.file_name != Self::UNSET
    }

    /// Captures the current position for a diagnostic.
    pub fn location(&self) -> Location {
        Location {
            file_name: self.file_name.clone(),
            line_number: self.line_number,
        }
    }
}

impl fmt::Display for InputStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_location(f, &self.file_name, self.line_number)
    }
}

/// An immutable source position attached to a diagnostic.
///
/// Rendered as `file:line`, or as `line N` when the position came from an
/// unset tracker.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Location {
    file_name: String,
    line_number: NonZeroUsize,
}

impl Location {
    /// File the position refers to.
    #[inline]
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// 1-based line number.
    #[inline]
    pub fn line_number(&self) -> usize {
        self.line_number.get()
    }
}

impl From<&InputStatus> for Location {
    fn from(status: &InputStatus) -> Self {
        status.location()
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_location(f, &self.file_name, self.line_number)
    }
}

fn write_location(f: &mut fmt::Formatter<'_>, file_name: &str, line: NonZeroUsize) -> fmt::Result {
    if file_name == InputStatus::UNSET {
        write!(f, "line {}", line)
    } else {
        write!(f, "{}:{}", file_name, line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test]
    fn test_new_is_unset_at_line_one() {
        let status = InputStatus::new();
        assert!(!status.is_set());
        assert_eq!(status.file_name(), InputStatus::UNSET);
        assert_eq!(status.line_number(), 1);
        assert_eq!(status, InputStatus::default());
    }

    #[test_case("boot.ys"; "plain file")]
    #[test_case("/usr/share/scripts/init.ys"; "absolute path")]
    #[test_case("<interactive>"; "console")]
    #[test_case(""; "empty name")]
    fn test_set_to_resets_line(name: &str) {
        let mut status = InputStatus::from_file("old.ys");
        status.next_line();
        status.next_line();

        status.set_to(name);
        assert_eq!(status.file_name(), name);
        assert_eq!(status.line_number(), 1);
    }

    #[test]
    fn test_restore_from_copies_both_fields() {
        let mut saved = InputStatus::from_file("outer.ys");
        for _ in 0..6 {
            saved.next_line();
        }
        let before = saved.clone();

        let mut status = InputStatus::from_file("inner.ys");
        status.restore_from(&saved);

        assert_eq!(status.file_name(), "outer.ys");
        assert_eq!(status.line_number(), 7);
        assert_eq!(saved, before);
    }

    #[test]
    fn test_snapshot_round_trip() {
        let mut status = InputStatus::from_file("a.ys");
        status.next_line();
        let snapshot = status.clone();

        status.set_to("b.ys");
        for _ in 0..10 {
            status.next_line();
        }
        status.restore_from(&snapshot);

        assert_eq!(status.file_name(), "a.ys");
        assert_eq!(status.line_number(), 2);
    }

    #[test]
    fn test_next_line_saturates() {
        let mut status = InputStatus::new();
        status.line_number = NonZeroUsize::MAX;
        status.next_line();
        assert_eq!(status.line_number(), usize::MAX);
    }

    #[test]
    fn test_display() {
        let mut status = InputStatus::from_file("lib/list.ys");
        status.next_line();
        assert_eq!(status.to_string(), "lib/list.ys:2");
        assert_eq!(InputStatus::new().to_string(), "line 1");
    }

    #[test]
    fn test_location_is_detached() {
        let mut status = InputStatus::from_file("main.ys");
        let location = status.location();
        status.next_line();

        assert_eq!(location.file_name(), "main.ys");
        assert_eq!(location.line_number(), 1);
        assert_eq!(Location::from(&status).line_number(), 2);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_rejects_line_zero() {
        let ok: InputStatus =
            serde_json::from_str(r#"{"file_name":"a.ys","line_number":4}"#).unwrap();
        assert_eq!(ok.line_number(), 4);

        let err = serde_json::from_str::<InputStatus>(r#"{"file_name":"a.ys","line_number":0}"#);
        assert!(err.is_err());
    }
}
