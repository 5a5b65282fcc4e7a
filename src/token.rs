use std::fmt;

/// A single input token: a kind compared against the grammar's terminals,
/// and the original lexeme it was read from.
///
/// The engine never interprets lexemes; they ride along so the derivation
/// tree can show what was actually matched.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Token {
    kind: String,
    lexeme: String,
}

impl Token {
    pub fn new(kind: impl Into<String>, lexeme: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            lexeme: lexeme.into(),
        }
    }

    /// The token kind, matched against [`Term::Terminal`](crate::Term) symbols.
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// The input fragment this token was read from.
    pub fn lexeme(&self) -> &str {
        &self.lexeme
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, \"{}\")", self.kind, self.lexeme)
    }
}
