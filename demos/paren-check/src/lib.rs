//! Balanced-parenthesis checker built on lispio.
//!
//! Reads a Lisp-like source, reports the position of every complete top-level
//! form to a [`LispOutput`], and fails with a located error on the first
//! unbalanced `)`, unclosed form, or unterminated string.
//!
//! A top-level `@name` pulls in another source from a [`Sources`] table, the
//! way a `load` would. The included source gets its own file name and line
//! numbers; positions in the including source pick up where they left off.
//!
//! ```ignore
//! let mut sources = Sources::new();
//! sources.insert("lib.ys", "(define id (lambda (x) x))\n");
//!
//! let mut contexts = InputContexts::new();
//! contexts.status_mut().set_to("main.ys");
//!
//! let mut out = StringOutput::new();
//! Checker::new(&sources).check(&mut contexts, "@lib.ys\n(id 1)\n", &mut out)?;
//! // lib.ys:1: form 1
//! // main.ys:2: form 1
//! ```

use std::collections::HashMap;
use std::convert::Infallible;

use lispio::backends::StringInput;
use lispio::{InputContexts, InputStatus, LispInput, LispOutput, Location, OutputError, TrackedInput};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CheckError {
    #[error("{0}: unexpected `)`")]
    Unbalanced(Location),

    #[error("{0}: form is never closed")]
    Unclosed(Location),

    #[error("{0}: string is never terminated")]
    UnterminatedString(Location),

    #[error("{at}: no source named {name:?}")]
    MissingSource { name: String, at: Location },

    #[error(transparent)]
    Context(#[from] lispio::Error),

    #[error(transparent)]
    Output(#[from] OutputError),
}

impl From<Infallible> for CheckError {
    fn from(never: Infallible) -> Self {
        match never {}
    }
}

/// Named sources available to `@name` includes.
#[derive(Debug, Clone, Default)]
pub struct Sources {
    files: HashMap<String, String>,
}

impl Sources {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, text: impl Into<String>) {
        self.files.insert(name.into(), text.into());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.files.get(name).map(String::as_str)
    }
}

enum Scan {
    Done,
    Include { name: String, at: Location },
}

pub struct Checker<'s> {
    sources: &'s Sources,
}

impl<'s> Checker<'s> {
    pub fn new(sources: &'s Sources) -> Self {
        Self { sources }
    }

    /// Checks `text` as the contents of the innermost context.
    ///
    /// Returns the number of top-level forms found in `text` itself, not
    /// counting included sources.
    pub fn check<O>(
        &self,
        contexts: &mut InputContexts,
        text: &str,
        out: &mut O,
    ) -> Result<usize, CheckError>
    where
        O: LispOutput,
        CheckError: From<O::Error>,
    {
        let mut input = StringInput::new(text);
        let mut forms = 0;
        loop {
            match scan(&mut input, contexts.status_mut(), out, &mut forms)? {
                Scan::Done => return Ok(forms),
                Scan::Include { name, at } => {
                    let body = self
                        .sources
                        .get(&name)
                        .ok_or_else(|| CheckError::MissingSource {
                            name: name.clone(),
                            at,
                        })?;
                    tracing::debug!(%name, depth = contexts.depth() + 1, "including source");
                    contexts.within(name, |nested| self.check(nested, body, out))?;
                }
            }
        }
    }
}

fn next(input: &mut impl LispInput<Error = Infallible>) -> Option<char> {
    match input.next_char() {
        Ok(c) => c,
        Err(never) => match never {},
    }
}

/// Scans until end of input or a top-level include.
fn scan<O>(
    input: &mut StringInput,
    status: &mut InputStatus,
    out: &mut O,
    forms: &mut usize,
) -> Result<Scan, CheckError>
where
    O: LispOutput,
    CheckError: From<O::Error>,
{
    let mut input = TrackedInput::new(input, status);
    let mut depth = 0usize;
    let mut form_start = None;

    while let Some(c) = next(&mut input) {
        match c {
            ';' => while next(&mut input).is_some_and(|c| c != '\n') {},
            '"' => {
                let at = input.status().location();
                skip_string(&mut input).ok_or(CheckError::UnterminatedString(at))?;
            }
            '(' => {
                if depth == 0 {
                    form_start = Some(input.status().location());
                }
                depth += 1;
            }
            ')' => {
                depth = match depth.checked_sub(1) {
                    Some(depth) => depth,
                    None => return Err(CheckError::Unbalanced(input.status().location())),
                };
                if depth == 0 {
                    *forms += 1;
                    if let Some(start) = form_start.take() {
                        writeln!(out, "{}: form {}", start, forms)?;
                    }
                }
            }
            '@' if depth == 0 => {
                let at = input.status().location();
                let mut name = String::new();
                while let Some(c) = next(&mut input).filter(|c| !c.is_whitespace()) {
                    name.push(c);
                }
                return Ok(Scan::Include { name, at });
            }
            _ => {}
        }
    }

    match form_start {
        Some(start) => Err(CheckError::Unclosed(start)),
        None => Ok(Scan::Done),
    }
}

/// Skips past the closing quote, honouring backslash escapes.
fn skip_string(input: &mut impl LispInput<Error = Infallible>) -> Option<()> {
    loop {
        match next(input)? {
            '"' => return Some(()),
            '\\' => {
                next(input)?;
            }
            _ => {}
        }
    }
}
