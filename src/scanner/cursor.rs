use std::str::Chars;

use crate::error::ScanError;

/// Placeholder held as the current character when nothing is pending, so the
/// next skip pass reads fresh input.
pub const NEUTRAL: char = ' ';

/// Forward-only character view over a source buffer.
///
/// Holds one "current" character (already consumed from the input but not
/// yet classified) and can look one character past it without moving.
/// Tracks the 1-based line: the count goes up whenever a newline becomes the
/// current character.
#[derive(Debug, Clone)]
pub struct Cursor<'s> {
    chars: Chars<'s>,
    source: &'s str,
    current: char,
    offset: usize,
    line: u32,
}

impl<'s> Cursor<'s> {
    pub fn new(source: &'s str) -> Self {
        Self {
            chars: source.chars(),
            source,
            current: NEUTRAL,
            offset: 0,
            line: 1,
        }
    }

    pub fn has_more(&self) -> bool {
        !self.chars.as_str().is_empty()
    }

    /// Consume the next character and make it current.
    ///
    /// Fails with [`ScanError::Exhausted`] when the input has run out; callers
    /// that want to stop quietly check [`Cursor::has_more`] first.
    pub fn advance(&mut self) -> Result<char, ScanError> {
        let offset = self.source.len() - self.chars.as_str().len();
        let c = self
            .chars
            .next()
            .ok_or(ScanError::Exhausted { line: self.line })?;
        if c == '\n' {
            self.line += 1;
        }
        self.current = c;
        self.offset = offset;
        Ok(c)
    }

    /// Advance if input remains, otherwise drop the current character.
    pub fn bump(&mut self) {
        if self.advance().is_err() {
            self.reset();
        }
    }

    /// The character after the current one, without consuming it.
    pub fn peek_next(&self) -> Option<char> {
        self.chars.clone().next()
    }

    pub fn current(&self) -> char {
        self.current
    }

    /// Whether the current character and the one after it spell `first second`.
    pub fn at_pair(&self, first: char, second: char) -> bool {
        self.current == first && self.peek_next() == Some(second)
    }

    pub fn reset(&mut self) {
        self.current = NEUTRAL;
    }

    pub fn line(&self) -> u32 {
        self.line
    }

    /// Byte offset of the current character.
    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn source(&self) -> &'s str {
        self.source
    }
}
