pub mod error;
pub mod printer;
pub mod scanner;

pub use error::ScanError;
pub use scanner::Lexer;
pub use scanner::token::{Tag, Token, Word, WordKind};
