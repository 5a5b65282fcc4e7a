//! Earley recognition over token streams, and derivation-tree
//! reconstruction from the chart.
//!
//! Recognition drives the classic three transitions (predict, scan,
//! complete) over item-sets that grow while they are being swept, until
//! nothing new can be added. Determinism comes from two ordering rules:
//! predictions are added in grammar order, and completions advance waiting
//! items in chart insertion order. Rejection is a value, never an error.

mod chart;
mod grammar;
mod item;

pub use chart::{Chart, ChartItem};

use crate::grammar::Grammar;
use crate::term::Term;
use crate::token::Token;
use crate::tracing;
use crate::tree::{NodeId, ParseTree, ParseTreeNode, TreeBuilder};
use grammar::ParseGrammar;
use item::{BackPointer, Item, ItemId};

/// The outcome of recognition: the verdict plus the full chart.
///
/// The chart lives as long as this value; once the tree (or the rejection)
/// has been extracted, the whole thing can be dropped.
pub struct Recognition<'gram> {
    chart: Chart<'gram>,
    root: Option<ItemId>,
}

impl<'gram> Recognition<'gram> {
    /// True iff the final item-set holds a complete item for the start
    /// symbol with origin 0.
    pub fn accepted(&self) -> bool {
        self.root.is_some()
    }

    /// The chart, for inspection or dumping.
    pub fn chart(&self) -> &Chart<'gram> {
        &self.chart
    }

    /// Materialize the derivation tree witnessing acceptance. Returns
    /// `None` iff recognition did not accept. The tree owns all of its
    /// data, so the chart can be released afterwards.
    pub fn build_tree(&self) -> Option<ParseTree> {
        let _span = tracing::span!(tracing::Level::TRACE, "build_tree").entered();

        let root = self.root?;
        let mut builder = TreeBuilder::new();
        let root_node = materialize(&self.chart, &mut builder, root);
        Some(builder.finish(root_node))
    }
}

/// Run Earley recognition of `tokens` against `grammar`.
pub fn recognize<'gram>(grammar: &'gram Grammar, tokens: &'gram [Token]) -> Recognition<'gram> {
    let _span = tracing::span!(tracing::Level::TRACE, "recognize").entered();

    let mut chart = Chart::new(ParseGrammar::new(grammar), tokens);
    let start = grammar.starting_symbol();

    // seed C[0] with every start production, in grammar order
    let start_prods: Vec<_> = chart
        .grammar
        .productions_by_lhs(start)
        .map(|prod| prod.id)
        .collect();
    for prod in start_prods {
        chart.add(0, Item::predicted(prod, 0));
    }

    // Worklist sweep: each C[position] is iterated by index because the
    // set grows under its own iteration. Termination holds because item
    // count per set is bounded and insertion is idempotent.
    for position in 0..=tokens.len() {
        let mut index = 0;
        while index < chart.len_at(position) {
            let id = chart.id_at(position, index);
            step(&mut chart, position, id);
            index += 1;
        }
    }

    let root = find_root(&chart, start);
    Recognition { chart, root }
}

/// Recognize and, on acceptance, build one derivation tree: the one
/// determined by chart insertion order, so repeated parses of the same
/// input yield the same tree.
pub fn parse<'gram>(grammar: &'gram Grammar, tokens: &'gram [Token]) -> Option<ParseTree> {
    let _span = tracing::span!(tracing::Level::TRACE, "parse").entered();

    recognize(grammar, tokens).build_tree()
}

/// Apply the one transition `id`'s item calls for. The three cases are
/// mutually exclusive by structure: an item is either complete, or its next
/// symbol is a nonterminal, or it is a terminal.
fn step<'gram>(chart: &mut Chart<'gram>, position: usize, id: ItemId) {
    let (prod_id, dot, origin) = {
        let item = chart.get(id);
        (item.prod, item.dot, item.origin)
    };
    let (lhs, rhs) = {
        let prod = chart.grammar.get_production(prod_id);
        (prod.lhs, prod.rhs)
    };

    match rhs.get(dot) {
        None => complete(chart, position, id, lhs, origin),
        Some(Term::Nonterminal(name)) => predict(chart, position, name),
        Some(Term::Terminal(kind)) => scan(chart, position, id, kind),
    }
}

/// Predict: for each production `B → γ`, add `(B → • γ)` with origin
/// `position` to `C[position]`, in grammar order.
fn predict(chart: &mut Chart<'_>, position: usize, nonterminal: &str) {
    let _span = tracing::span!(tracing::Level::TRACE, "predict").entered();

    let predictions: Vec<_> = chart
        .grammar
        .productions_by_lhs(nonterminal)
        .map(|prod| prod.id)
        .collect();
    for prod in predictions {
        chart.add(position, Item::predicted(prod, position));
    }
}

/// Scan: if the next input token's kind equals the expected terminal,
/// advance the item into `C[position + 1]` with a token back-pointer.
/// At end of input, or on a kind mismatch, nothing happens.
fn scan(chart: &mut Chart<'_>, position: usize, id: ItemId, kind: &str) {
    let _span = tracing::span!(tracing::Level::TRACE, "scan").entered();

    let matched = chart
        .tokens
        .get(position)
        .map(|token| token.kind() == kind)
        .unwrap_or(false);
    if !matched {
        return;
    }

    let advanced = chart.get(id).advanced(BackPointer::Token(position));
    chart.add(position + 1, advanced);
}

/// Complete: the item's production fully matched between `origin` and
/// `position`. Advance every item of `C[origin]` whose next symbol is this
/// left-hand side, recording an item back-pointer to the completed child.
fn complete(chart: &mut Chart<'_>, position: usize, id: ItemId, lhs: &str, origin: usize) {
    let _span = tracing::span!(tracing::Level::TRACE, "complete").entered();

    // Right-hand sides have length ≥ 1, so a complete item spans at least
    // one token and C[origin] is already final when this runs.
    debug_assert!(origin < position, "complete item must span at least one token");

    let mut advanced = Vec::new();
    for index in 0..chart.len_at(origin) {
        let waiting_id = chart.id_at(origin, index);
        let waiting = chart.get(waiting_id);
        let next = chart
            .grammar
            .get_production(waiting.prod)
            .rhs
            .get(waiting.dot);
        if let Some(Term::Nonterminal(name)) = next {
            if name.as_str() == lhs {
                advanced.push(waiting.advanced(BackPointer::Item(id)));
            }
        }
    }
    for item in advanced {
        chart.add(position, item);
    }
}

/// The accepting item: the first complete start item with origin 0 in the
/// final set, by insertion order. With an ambiguous grammar this choice is
/// what pins down the single returned derivation.
fn find_root(chart: &Chart<'_>, start: &str) -> Option<ItemId> {
    let final_position = chart.num_sets() - 1;
    (0..chart.len_at(final_position))
        .map(|index| chart.id_at(final_position, index))
        .find(|&id| {
            let item = chart.view(id);
            item.is_complete() && item.lhs == start && item.origin == 0
        })
}

/// Build the tree node for a completed item from its back-pointers, in
/// right-hand-side order. Node ids are assigned parent-before-children.
fn materialize(chart: &Chart<'_>, builder: &mut TreeBuilder, id: ItemId) -> NodeId {
    let item = chart.get(id);
    debug_assert_eq!(
        item.backptrs.len(),
        item.dot,
        "back-pointer list length must equal the dot"
    );

    let label = chart.grammar.get_production(item.prod).lhs;
    let node = builder.push(ParseTreeNode::Nonterminal {
        label: label.to_string(),
        children: Vec::new(),
    });

    let mut children = Vec::with_capacity(item.backptrs.len());
    for back in &item.backptrs {
        let child = match *back {
            BackPointer::Token(index) => {
                let token = &chart.tokens[index];
                builder.push(ParseTreeNode::Terminal {
                    kind: token.kind().to_string(),
                    lexeme: token.lexeme().to_string(),
                })
            }
            BackPointer::Item(child_id) => materialize(chart, builder, child_id),
        };
        children.push(child);
    }
    builder.set_children(node, children);
    node
}
