use std::fmt;

/// A grammar symbol, classified during [`Grammar`](crate::Grammar)
/// construction.
///
/// A symbol is a [`Term::Nonterminal`] iff it appears as the left-hand side
/// of at least one production; every other symbol is a [`Term::Terminal`]
/// and names a token kind to be matched against input.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Term {
    /// A token kind matched against input by the scanner
    Terminal(String),
    /// A reference to the productions of another left-hand side
    Nonterminal(String),
}

impl Term {
    /// The bare symbol name, without classification.
    pub fn name(&self) -> &str {
        match self {
            Term::Terminal(name) | Term::Nonterminal(name) => name,
        }
    }
}

/// The grammar line format does not mark terminals, so both variants
/// display as the bare name and grammars round-trip through [`fmt::Display`].
impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
