use super::grammar::ParseGrammar;
use super::item::{Item, ItemId, ItemKey};
use crate::append_vec::AppendOnlyVec;
use crate::term::Term;
use crate::token::Token;
use std::collections::HashSet;
use std::fmt;

/// One item-set of the chart. Items are only ever appended; `seen` makes
/// insertion idempotent under item identity.
#[derive(Debug, Default)]
struct StateSet {
    items: Vec<ItemId>,
    seen: HashSet<ItemKey>,
}

/// The Earley chart: item-sets `C[0..=n]` for an input of `n` tokens, all
/// items owned by a single arena. Sets grow monotonically during
/// recognition and never shrink.
///
/// The chart is mostly an internal structure, but it is returned alongside
/// the acceptance verdict so callers can inspect or dump it; the [`fmt::Debug`]
/// impl lists every set as dotted items.
pub struct Chart<'gram> {
    pub(crate) grammar: ParseGrammar<'gram>,
    pub(crate) tokens: &'gram [Token],
    arena: AppendOnlyVec<Item, ItemId>,
    sets: Vec<StateSet>,
}

impl<'gram> Chart<'gram> {
    pub(crate) fn new(grammar: ParseGrammar<'gram>, tokens: &'gram [Token]) -> Self {
        let sets = (0..=tokens.len()).map(|_| StateSet::default()).collect();
        Self {
            grammar,
            tokens,
            arena: AppendOnlyVec::new(),
            sets,
        }
    }

    /// Append `item` to `C[position]` unless an identity-equal item is
    /// already there. Returns the new id, or `None` for a duplicate;
    /// duplicates are dropped whole, their back-pointers with them.
    pub(crate) fn add(&mut self, position: usize, item: Item) -> Option<ItemId> {
        let set = &mut self.sets[position];
        if !set.seen.insert(item.key()) {
            return None;
        }
        let id = self.arena.push(item);
        set.items.push(id);
        Some(id)
    }

    pub(crate) fn get(&self, id: ItemId) -> &Item {
        self.arena.get(id).expect("valid item ID")
    }

    pub(crate) fn id_at(&self, position: usize, index: usize) -> ItemId {
        self.sets[position].items[index]
    }

    /// Current size of `C[position]`; grows while the worklist runs.
    pub(crate) fn len_at(&self, position: usize) -> usize {
        self.sets[position].items.len()
    }

    /// Number of item-sets: input length plus one.
    pub fn num_sets(&self) -> usize {
        self.sets.len()
    }

    /// The items of `C[position]` in insertion order, as read-only views.
    pub fn iter_set(&self, position: usize) -> impl Iterator<Item = ChartItem<'_>> {
        self.sets[position]
            .items
            .iter()
            .map(move |id| self.view(*id))
    }

    pub(crate) fn view(&self, id: ItemId) -> ChartItem<'_> {
        let item = self.get(id);
        let prod = self.grammar.get_production(item.prod);
        ChartItem {
            lhs: prod.lhs,
            rhs: prod.rhs,
            dot: item.dot,
            origin: item.origin,
        }
    }
}

/// A read-only view of one chart item, for diagnostics and tests.
#[derive(Clone, Copy, Debug)]
pub struct ChartItem<'chart> {
    /// left-hand side of the item's production
    pub lhs: &'chart str,
    /// right-hand side of the item's production
    pub rhs: &'chart [Term],
    /// how many right-hand-side symbols have been matched
    pub dot: usize,
    /// input position where recognition of this production began
    pub origin: usize,
}

impl ChartItem<'_> {
    pub fn is_complete(&self) -> bool {
        self.dot == self.rhs.len()
    }

    /// The symbol after the dot, if any.
    pub fn next_term(&self) -> Option<&Term> {
        self.rhs.get(self.dot)
    }
}

/// Dotted-item rendering: `E → E • op_suma T (origin 0)`.
impl fmt::Display for ChartItem<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} →", self.lhs)?;
        for (index, term) in self.rhs.iter().enumerate() {
            if index == self.dot {
                write!(f, " •")?;
            }
            write!(f, " {term}")?;
        }
        if self.is_complete() {
            write!(f, " •")?;
        }
        write!(f, " (origin {})", self.origin)
    }
}

/// Linear dump of every item-set, one dotted item per line.
impl fmt::Debug for Chart<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for position in 0..self.num_sets() {
            writeln!(f, "C[{position}]:")?;
            for item in self.iter_set(position) {
                writeln!(f, "  {item}")?;
            }
        }
        Ok(())
    }
}
