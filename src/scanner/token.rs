use std::fmt;
use std::rc::Rc;

/// Syntactic category of a token.
///
/// Symbol tags carry the character itself, so the tag of a one-character
/// token is its code point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
pub enum Tag {
    #[strum(serialize = "SYMBOL")]
    Symbol(char),
    #[strum(serialize = "INTEGER")]
    Integer,
    #[strum(serialize = "TRUE")]
    True,
    #[strum(serialize = "FALSE")]
    False,
    #[strum(serialize = "IDENTIFIER")]
    Identifier,
}

impl Tag {
    pub fn code_point(self) -> Option<u32> {
        match self {
            Self::Symbol(c) => Some(u32::from(c)),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
pub enum WordKind {
    #[strum(serialize = "TRUE")]
    True,
    #[strum(serialize = "FALSE")]
    False,
    #[strum(serialize = "IDENTIFIER")]
    Identifier,
}

impl From<WordKind> for Tag {
    fn from(kind: WordKind) -> Self {
        match kind {
            WordKind::True => Tag::True,
            WordKind::False => Tag::False,
            WordKind::Identifier => Tag::Identifier,
        }
    }
}

/// A reserved word or identifier, exactly as spelled in the source.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    pub kind: WordKind,
    pub lexeme: String,
}

impl Word {
    pub fn new(kind: WordKind, lexeme: impl Into<String>) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
        }
    }

    pub fn is_reserved(&self) -> bool {
        self.kind != WordKind::Identifier
    }
}

/// One lexical unit.
///
/// Word tokens share their `Word` with the lexer's keyword table, so two
/// tokens for the same lexeme point at the same allocation. `==` compares by
/// value; [`Token::same_word`] compares by identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    Symbol(char),
    Integer(i32),
    Word(Rc<Word>),
}

impl Token {
    pub fn tag(&self) -> Tag {
        match self {
            Self::Symbol(c) => Tag::Symbol(*c),
            Self::Integer(_) => Tag::Integer,
            Self::Word(word) => word.kind.into(),
        }
    }

    pub fn as_integer(&self) -> Option<i32> {
        match self {
            Self::Integer(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_word(&self) -> Option<&Word> {
        match self {
            Self::Word(word) => Some(word),
            _ => None,
        }
    }

    pub fn lexeme(&self) -> Option<&str> {
        self.as_word().map(|word| word.lexeme.as_str())
    }

    /// True when both tokens are the same interned word instance.
    pub fn same_word(&self, other: &Token) -> bool {
        match (self, other) {
            (Self::Word(a), Self::Word(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Symbol(c) => write!(f, "{} '{}'", self.tag(), c.escape_debug()),
            Self::Integer(value) => write!(f, "{} {}", self.tag(), value),
            Self::Word(word) => write!(f, "{} {}", word.kind, word.lexeme),
        }
    }
}
