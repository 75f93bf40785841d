use tracing::{debug, trace};

use crate::error::ScanError;
use crate::scanner::cursor::Cursor;
use crate::scanner::keywords::KeywordTable;
use crate::scanner::token::Token;

/// On-demand scanner: each call to [`Lexer::scan_next`] skips whitespace and
/// comments and then produces exactly one token.
pub struct Lexer<'s> {
    cursor: Cursor<'s>,
    keywords: KeywordTable,
    token_line: u32,
    finished: bool,
}

impl<'s> Lexer<'s> {
    pub fn new(source: &'s str) -> Self {
        Self {
            cursor: Cursor::new(source),
            keywords: KeywordTable::new(),
            token_line: 1,
            finished: false,
        }
    }

    /// Scan the next token.
    ///
    /// Returns [`ScanError::Exhausted`] once only whitespace and comments
    /// remain, including on empty input. An unterminated block comment runs
    /// to the end of input and ends the same way.
    pub fn scan_next(&mut self) -> Result<Token, ScanError> {
        self.skip_insignificant()?;
        self.token_line = self.cursor.line();

        let c = self.cursor.current();
        let token = if c.is_ascii_digit() {
            self.integer()?
        } else if c.is_alphabetic() {
            self.word()
        } else {
            self.cursor.reset();
            Token::Symbol(c)
        };
        trace!(line = self.token_line, %token, "scanned");
        Ok(token)
    }

    /// Current line of the cursor.
    pub fn line(&self) -> u32 {
        self.cursor.line()
    }

    /// Line on which the most recently scanned token started.
    pub fn token_line(&self) -> u32 {
        self.token_line
    }

    pub fn keywords(&self) -> &KeywordTable {
        &self.keywords
    }

    fn skip_insignificant(&mut self) -> Result<(), ScanError> {
        loop {
            self.skip_whitespace()?;
            if self.skip_line_comment()? || self.skip_block_comment()? {
                continue;
            }
            return Ok(());
        }
    }

    // Every skip routine inspects the current character before advancing, so
    // the first significant character after a skipped run is never lost.
    fn skip_whitespace(&mut self) -> Result<(), ScanError> {
        while matches!(self.cursor.current(), ' ' | '\t' | '\n') {
            self.cursor.advance()?;
        }
        Ok(())
    }

    fn skip_line_comment(&mut self) -> Result<bool, ScanError> {
        if !self.cursor.at_pair('/', '/') {
            return Ok(false);
        }
        debug!(line = self.cursor.line(), "skipping line comment");
        // The newline stays current; skip_whitespace discards it.
        while self.cursor.current() != '\n' {
            self.cursor.advance()?;
        }
        Ok(true)
    }

    fn skip_block_comment(&mut self) -> Result<bool, ScanError> {
        if !self.cursor.at_pair('/', '*') {
            return Ok(false);
        }
        let line = self.cursor.line();
        debug!(line, "skipping block comment");
        // Step onto the opening '*'; it may also close the comment, as in "/*/".
        self.cursor.advance()?;
        while !self.cursor.at_pair('*', '/') {
            self.cursor
                .advance()
                .inspect_err(|_| debug!(line, "block comment runs to end of input"))?;
        }
        self.cursor.advance()?;
        self.cursor.reset();
        Ok(true)
    }

    /// Base-10 literal, accumulated left to right into an `i32`.
    fn integer(&mut self) -> Result<Token, ScanError> {
        let offset = self.cursor.offset();
        let mut literal = String::new();
        let mut value = Some(0i32);
        while let Some(digit) = self.cursor.current().to_digit(10) {
            literal.push(self.cursor.current());
            value = value
                .and_then(|v| v.checked_mul(10))
                .and_then(|v| v.checked_add(digit as i32));
            self.cursor.bump();
        }
        match value {
            Some(value) => Ok(Token::Integer(value)),
            None => Err(ScanError::overflow(literal, self.token_line, offset)),
        }
    }

    /// Letter followed by letters or digits, interned through the keyword table.
    fn word(&mut self) -> Token {
        let mut lexeme = String::new();
        loop {
            lexeme.push(self.cursor.current());
            self.cursor.bump();
            let c = self.cursor.current();
            if !(c.is_alphabetic() || c.is_ascii_digit()) {
                break;
            }
        }
        Token::Word(self.keywords.intern(&lexeme))
    }
}

impl Iterator for Lexer<'_> {
    type Item = Result<Token, ScanError>;

    /// Yields tokens until the input is exhausted. Any other error is yielded
    /// once and ends the iteration.
    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        match self.scan_next() {
            Ok(token) => Some(Ok(token)),
            Err(err) => {
                self.finished = true;
                if err.is_exhausted() {
                    None
                } else {
                    Some(Err(err))
                }
            }
        }
    }
}
