//! Input readers - parse declaration text into IR.
//!
//! Both notations are read line by line. A [`ScanState`] tracks where the
//! cursor is relative to the declaration body, so a block that never
//! closes is reported instead of silently running to the end of input.

pub mod go;
pub mod typescript;

pub use go::{GO_READER, GoReader, read_go};
pub use typescript::{TYPESCRIPT_READER, TypeScriptReader, read_typescript};

/// A recognized declaration header line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header<'a> {
    /// Struct or interface identifier.
    pub name: &'a str,
    /// The body opened and closed on the header line (`struct {}`).
    pub closed: bool,
}

/// Position of the line cursor relative to a declaration body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScanState {
    /// Looking for a header.
    #[default]
    Scanning,
    /// Between the header and its closing brace.
    InBody,
    /// The closing brace was seen.
    Done,
}

/// What a line was, given the state before it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step<'a> {
    Header(Header<'a>),
    Body(&'a str),
    Close,
    Outside(&'a str),
}

impl ScanState {
    /// Classify `line` and advance the state.
    ///
    /// A header seen after `Done` opens a new body; callers that only want
    /// the first declaration stop once `Done` is reached.
    pub fn step<'a>(
        &mut self,
        line: &'a str,
        opens: impl Fn(&'a str) -> Option<Header<'a>>,
    ) -> Step<'a> {
        match self {
            ScanState::InBody => {
                if line.trim_start().starts_with('}') {
                    *self = ScanState::Done;
                    Step::Close
                } else {
                    Step::Body(line)
                }
            }
            ScanState::Scanning | ScanState::Done => match opens(line) {
                Some(header) => {
                    *self = if header.closed {
                        ScanState::Done
                    } else {
                        ScanState::InBody
                    };
                    Step::Header(header)
                }
                None => Step::Outside(line),
            },
        }
    }
}

/// Length of the identifier at the start of `s`, or 0 if there is none.
pub(crate) fn ident_len(s: &str) -> usize {
    match s.chars().next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return 0,
    }
    s.find(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
        .unwrap_or(s.len())
}

/// Strip leading whitespace, requiring at least one character of it.
pub(crate) fn strip_space(s: &str) -> Option<&str> {
    let trimmed = s.trim_start();
    (trimmed.len() < s.len()).then_some(trimmed)
}

/// Whether the text after a header's `{` closes the body on the same line.
pub(crate) fn closes_inline(after_header: &str) -> bool {
    after_header
        .find('{')
        .is_some_and(|open| after_header[open + 1..].trim_start().starts_with('}'))
}

/// Split a raw trailing comment off `tail`, keeping the whitespace before `//`.
///
/// `tail` is whatever follows the last recognized token on the line.
pub(crate) fn trailing_comment(tail: &str) -> Option<&str> {
    let slashes = tail.find("//")?;
    let start = tail[..slashes].trim_end().len();
    Some(tail[start..].trim_end())
}
