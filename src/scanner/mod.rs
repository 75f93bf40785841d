pub mod cursor;
pub mod keywords;
pub mod lexer;
pub mod token;

use crate::error::ScanError;
pub use lexer::Lexer;
use token::Token;

/// Scan source code into a list of tokens.
pub fn scan_all(source: &str) -> Result<Vec<Token>, ScanError> {
    Lexer::new(source).collect()
}

/// Scan source code, pairing each token with the line it starts on.
pub fn scan_lines(source: &str) -> Result<Vec<(u32, Token)>, ScanError> {
    let mut lexer = Lexer::new(source);
    let mut tokens = Vec::new();
    loop {
        match lexer.scan_next() {
            Ok(token) => tokens.push((lexer.token_line(), token)),
            Err(err) if err.is_exhausted() => return Ok(tokens),
            Err(err) => return Err(err),
        }
    }
}
