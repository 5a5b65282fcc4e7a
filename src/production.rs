use crate::term::Term;
use std::fmt;

/// A single production: one left-hand nonterminal and one ordered
/// right-hand side of classified symbols, always of length ≥ 1.
///
/// Alternatives are separate `Production` values in grammar order; the line
/// format has no `|`. Productions are only built by
/// [`Grammar`](crate::Grammar) construction, which is what guarantees the
/// classification of the right-hand side is consistent with the whole
/// grammar.
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Production {
    lhs: String,
    rhs: Vec<Term>,
}

impl Production {
    pub(crate) fn new(lhs: String, rhs: Vec<Term>) -> Self {
        Self { lhs, rhs }
    }

    /// The left-hand nonterminal name.
    pub fn lhs(&self) -> &str {
        &self.lhs
    }

    /// The right-hand side, in derivation order.
    pub fn rhs(&self) -> &[Term] {
        &self.rhs
    }

    /// Iterate the right-hand side symbols.
    pub fn rhs_iter(&self) -> std::slice::Iter<'_, Term> {
        self.rhs.iter()
    }
}

impl fmt::Display for Production {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} →", self.lhs)?;
        for term in &self.rhs {
            write!(f, " {term}")?;
        }
        Ok(())
    }
}
