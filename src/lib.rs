//! charter is an Earley chart parser for context-free grammars over token
//! streams.
//!
//! Given a grammar in a simple line format (one production per line, `→` or
//! `->` as separator, `#` comments) and a sequence of `(kind, lexeme)`
//! tokens, the engine decides membership and, on acceptance, reconstructs a
//! concrete derivation tree from the chart's back-pointers. Arbitrary
//! context-free grammars are handled (left recursion, right recursion and
//! ambiguity included) in worst-case cubic time; for an ambiguous input
//! one derivation is returned, chosen deterministically by chart insertion
//! order. Epsilon productions are not supported: every right-hand side has
//! at least one symbol.
//!
//! ```
//! use charter::{tokenize, Grammar};
//!
//! let grammar: Grammar =
//!     "E → E op_suma T\nE → T\nT → T op_mul F\nT → F\nF → id\nF → num\nF → pari E pard"
//!         .parse()
//!         .unwrap();
//!
//! let tokens = tokenize("1+2*3");
//! let tree = charter::parse(&grammar, &tokens).expect("accepted");
//!
//! assert_eq!(tree.leaves(), ["1", "+", "2", "*", "3"]);
//!
//! let rejected = tokenize("1+");
//! assert!(charter::parse(&grammar, &rejected).is_none());
//! ```
//!
//! The grammar is immutable after construction and safe to share across
//! threads; each parse owns its chart and result tree.

mod append_vec;
mod earley;
mod error;
mod grammar;
pub mod lexer;
mod parsers;
mod production;
mod term;
mod token;
mod tracing;
mod tree;

pub use earley::{parse, recognize, Chart, ChartItem, Recognition};
pub use error::Error;
pub use grammar::Grammar;
pub use lexer::tokenize;
pub use production::Production;
pub use term::Term;
pub use token::Token;
pub use tree::{NodeId, ParseTree, ParseTreeNode, PreOrder};
