use serde::Serialize;

use crate::scanner::token::{Token, WordKind};

#[derive(Debug, Serialize)]
struct Record<'a> {
    line: u32,
    #[serde(flatten)]
    body: Body<'a>,
}

#[derive(Debug, Serialize)]
#[serde(tag = "kind", rename_all = "SCREAMING_SNAKE_CASE")]
enum Body<'a> {
    Symbol { symbol: char },
    Integer { value: i32 },
    True { lexeme: &'a str },
    False { lexeme: &'a str },
    Identifier { lexeme: &'a str },
}

impl<'a> From<&'a Token> for Body<'a> {
    fn from(token: &'a Token) -> Self {
        match token {
            Token::Symbol(c) => Body::Symbol { symbol: *c },
            Token::Integer(value) => Body::Integer { value: *value },
            Token::Word(word) => {
                let lexeme = word.lexeme.as_str();
                match word.kind {
                    WordKind::True => Body::True { lexeme },
                    WordKind::False => Body::False { lexeme },
                    WordKind::Identifier => Body::Identifier { lexeme },
                }
            }
        }
    }
}

/// One `LINE<TAB>TOKEN` row per token.
pub fn to_text(tokens: &[(u32, Token)]) -> String {
    let mut buf = String::new();
    for (line, token) in tokens {
        buf.push_str(&line.to_string());
        buf.push('\t');
        buf.push_str(&token.to_string());
        buf.push('\n');
    }
    buf
}

pub fn to_json(tokens: &[(u32, Token)]) -> String {
    let records: Vec<Record<'_>> = tokens
        .iter()
        .map(|(line, token)| Record {
            line: *line,
            body: token.into(),
        })
        .collect();
    serde_json::to_string_pretty(&records).expect("token records should be serializable")
}
