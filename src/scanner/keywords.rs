use std::collections::HashMap;
use std::rc::Rc;

use tracing::debug;

use crate::scanner::token::{Word, WordKind};

/// Interning table from lexeme to its canonical word.
///
/// Starts out holding the reserved words and grows by one entry per distinct
/// identifier. Each lexer owns its own table.
#[derive(Debug)]
pub struct KeywordTable {
    words: HashMap<String, Rc<Word>>,
}

impl KeywordTable {
    pub fn new() -> Self {
        let mut table = Self {
            words: HashMap::new(),
        };
        table.reserve(Word::new(WordKind::True, "true"));
        table.reserve(Word::new(WordKind::False, "false"));
        table
    }

    fn reserve(&mut self, word: Word) {
        self.words.insert(word.lexeme.clone(), Rc::new(word));
    }

    /// Return the word recorded for `lexeme`, recording a new identifier on
    /// first sight.
    pub fn intern(&mut self, lexeme: &str) -> Rc<Word> {
        if let Some(word) = self.words.get(lexeme) {
            return Rc::clone(word);
        }
        debug!(lexeme, "interning identifier");
        let word = Rc::new(Word::new(WordKind::Identifier, lexeme));
        self.words.insert(lexeme.to_string(), Rc::clone(&word));
        word
    }

    pub fn get(&self, lexeme: &str) -> Option<&Rc<Word>> {
        self.words.get(lexeme)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Default for KeywordTable {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reserved_words_preloaded() {
        let table = KeywordTable::new();
        assert_eq!(table.len(), 2);
        assert_eq!(table.get("true").map(|w| w.kind), Some(WordKind::True));
        assert_eq!(table.get("false").map(|w| w.kind), Some(WordKind::False));
        assert!(table.get("maybe").is_none());
    }

    #[test]
    fn reserved_words_are_never_identifiers() {
        let mut table = KeywordTable::new();
        let first = table.intern("true");
        let second = table.intern("true");
        assert_eq!(first.kind, WordKind::True);
        assert!(Rc::ptr_eq(&first, &second));
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn identifiers_interned_once() {
        let mut table = KeywordTable::default();
        let a = table.intern("count");
        let b = table.intern("count");
        let c = table.intern("other");
        assert!(Rc::ptr_eq(&a, &b));
        assert!(!Rc::ptr_eq(&a, &c));
        assert_eq!(a.kind, WordKind::Identifier);
        assert_eq!(a.lexeme, "count");
        assert_eq!(table.len(), 4);
        assert!(!table.is_empty());
    }

    #[test]
    fn lookup_is_case_sensitive() {
        let mut table = KeywordTable::new();
        let word = table.intern("True");
        assert_eq!(word.kind, WordKind::Identifier);
    }
}
