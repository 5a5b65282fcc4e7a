use crate::earley;
use crate::error::Error;
use crate::parsers;
use crate::production::Production;
use crate::term::Term;
use crate::token::Token;
use crate::tree::ParseTree;
use std::collections::HashSet;
use std::fmt;
use std::str;

/// An immutable context-free grammar: an ordered list of productions and a
/// start symbol.
///
/// A symbol is a nonterminal iff it appears as the left-hand side of some
/// production; every other symbol is a terminal naming a token kind.
/// Classification happens once, in [`Grammar::build`], and the grammar
/// never changes afterwards, so it is safe to share across threads while
/// parses run in parallel, each owning its chart.
///
/// Grammars are usually loaded from the line format (one production per
/// line, `→` or `->` as separator, `#` comments):
///
/// ```
/// use charter::Grammar;
///
/// let grammar: Grammar = "E → E op_suma T\nE → T\nT → num".parse().unwrap();
///
/// assert_eq!(grammar.starting_symbol(), "E");
/// assert!(grammar.is_nonterminal("T"));
/// assert!(!grammar.is_nonterminal("num"));
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Grammar {
    productions: Vec<Production>,
    start: String,
}

impl Grammar {
    /// Build a grammar from `(lhs, rhs)` rules, preserving rule order, with
    /// `start` as the start symbol.
    ///
    /// Fails with [`Error::ValidationError`] if there are no rules, if any
    /// right-hand side is empty, or if `start` is not the left-hand side of
    /// any rule.
    ///
    /// ```
    /// let rules = vec![
    ///     ("S".to_string(), vec!["a".to_string(), "S".to_string()]),
    ///     ("S".to_string(), vec!["a".to_string()]),
    /// ];
    ///
    /// let grammar = charter::Grammar::build(rules, "S").unwrap();
    /// assert_eq!(grammar.productions_iter().count(), 2);
    /// ```
    pub fn build(rules: Vec<(String, Vec<String>)>, start: &str) -> Result<Self, Error> {
        if rules.is_empty() {
            return Err(Error::ValidationError(
                "grammar must have at least one production".to_string(),
            ));
        }

        let lhs_names: HashSet<String> = rules.iter().map(|(lhs, _)| lhs.clone()).collect();
        if !lhs_names.contains(start) {
            return Err(Error::ValidationError(format!(
                "start symbol `{start}` has no production"
            )));
        }

        let mut productions = Vec::with_capacity(rules.len());
        for (lhs, rhs) in rules {
            if rhs.is_empty() {
                return Err(Error::ValidationError(format!(
                    "production for `{lhs}` has an empty right-hand side"
                )));
            }
            let rhs = rhs
                .into_iter()
                .map(|symbol| {
                    if lhs_names.contains(&symbol) {
                        Term::Nonterminal(symbol)
                    } else {
                        Term::Terminal(symbol)
                    }
                })
                .collect();
            productions.push(Production::new(lhs, rhs));
        }

        Ok(Self {
            productions,
            start: start.to_string(),
        })
    }

    /// The start symbol: by convention, the left-hand side of the first
    /// production in source order.
    pub fn starting_symbol(&self) -> &str {
        &self.start
    }

    /// True iff `symbol` is the left-hand side of some production.
    pub fn is_nonterminal(&self, symbol: &str) -> bool {
        self.productions.iter().any(|prod| prod.lhs() == symbol)
    }

    /// The productions of `lhs`, in grammar order.
    pub fn productions_of<'gram>(
        &'gram self,
        lhs: &'gram str,
    ) -> impl Iterator<Item = &'gram Production> {
        self.productions
            .iter()
            .filter(move |prod| prod.lhs() == lhs)
    }

    /// All productions, in grammar order.
    pub fn productions_iter(&self) -> std::slice::Iter<'_, Production> {
        self.productions.iter()
    }

    /// Nonterminal names, in first-appearance order.
    pub fn nonterminals(&self) -> Vec<&str> {
        let mut seen = Vec::new();
        for prod in &self.productions {
            if !seen.contains(&prod.lhs()) {
                seen.push(prod.lhs());
            }
        }
        seen
    }

    /// Terminal names, in first-appearance order.
    pub fn terminals(&self) -> Vec<&str> {
        let mut seen = Vec::new();
        for prod in &self.productions {
            for term in prod.rhs_iter() {
                if let Term::Terminal(name) = term {
                    if !seen.contains(&name.as_str()) {
                        seen.push(name.as_str());
                    }
                }
            }
        }
        seen
    }

    /// Run Earley recognition over `tokens`. The result carries the full
    /// chart; use [`Recognition::build_tree`](crate::Recognition::build_tree)
    /// to materialize the derivation.
    pub fn recognize<'gram>(&'gram self, tokens: &'gram [Token]) -> earley::Recognition<'gram> {
        earley::recognize(self, tokens)
    }

    /// Recognize and, on acceptance, build the derivation tree.
    pub fn parse_tokens<'gram>(&'gram self, tokens: &'gram [Token]) -> Option<ParseTree> {
        earley::parse(self, tokens)
    }
}

impl fmt::Display for Grammar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for prod in &self.productions {
            writeln!(f, "{prod}")?;
        }
        Ok(())
    }
}

impl str::FromStr for Grammar {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parsers::grammar_complete(s)
    }
}
