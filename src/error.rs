use miette::{Diagnostic, SourceSpan};
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum ScanError {
    /// Raised when a character is requested after the input ran out. The
    /// lexer also uses it to report that only whitespace and comments remain.
    #[error("unexpected end of input at line {line}")]
    #[diagnostic(code(lexis::exhausted))]
    Exhausted { line: u32 },

    #[error("integer literal '{literal}' does not fit in 32 bits")]
    #[diagnostic(code(lexis::overflow), help("integer literals must not exceed 2147483647"))]
    IntegerOverflow {
        literal: String,
        line: u32,
        #[label("here")]
        span: SourceSpan,
        #[source_code]
        src: miette::NamedSource<String>,
    },
}

impl ScanError {
    pub fn overflow(literal: impl Into<String>, line: u32, offset: usize) -> Self {
        let literal = literal.into();
        let len = literal.len();
        Self::IntegerOverflow {
            literal,
            line,
            span: SourceSpan::new(offset.into(), len),
            src: miette::NamedSource::new("input", String::new()),
        }
    }

    /// Attach source code for fancy miette diagnostics
    pub fn with_source_code(self, name: impl Into<String>, source: impl Into<String>) -> Self {
        match self {
            Self::IntegerOverflow {
                literal,
                line,
                span,
                ..
            } => Self::IntegerOverflow {
                literal,
                line,
                span,
                src: miette::NamedSource::new(name.into(), source.into()),
            },
            exhausted @ Self::Exhausted { .. } => exhausted,
        }
    }

    pub fn is_exhausted(&self) -> bool {
        matches!(self, Self::Exhausted { .. })
    }

    /// Line the error was raised on.
    pub fn line(&self) -> u32 {
        match self {
            Self::Exhausted { line } | Self::IntegerOverflow { line, .. } => *line,
        }
    }
}
