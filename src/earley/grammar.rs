use crate::append_vec::{append_only_vec_id, AppendOnlyVec};
use crate::term::Term;
use crate::tracing;
use std::collections::HashMap;

append_only_vec_id!(pub(crate) ProductionId);

/// A [`crate::Production`] flattened for recognition: borrowed parts plus
/// an arena id that chart items can carry instead of references.
#[derive(Debug)]
pub(crate) struct ParseProduction<'gram> {
    pub id: ProductionId,
    pub lhs: &'gram str,
    pub rhs: &'gram [Term],
}

type ProdArena<'gram> = AppendOnlyVec<ParseProduction<'gram>, ProductionId>;
type ProdNameMap<'gram> = HashMap<&'gram str, Vec<ProductionId>>;

/// [`crate::Grammar`] reindexed for parsing: productions in an arena,
/// grouped by left-hand side so prediction is a map lookup. Ids within a
/// group keep grammar order, which is what makes prediction deterministic.
#[derive(Debug)]
pub(crate) struct ParseGrammar<'gram> {
    productions: ProdArena<'gram>,
    prods_by_lhs: ProdNameMap<'gram>,
}

impl<'gram> ParseGrammar<'gram> {
    pub fn new(grammar: &'gram crate::Grammar) -> Self {
        let _span = tracing::span!(tracing::Level::TRACE, "ParseGrammar_new").entered();

        let mut productions = ProdArena::new();
        let mut prods_by_lhs = ProdNameMap::new();

        for prod in grammar.productions_iter() {
            let entry = productions.push_with_id(|id| ParseProduction {
                id,
                lhs: prod.lhs(),
                rhs: prod.rhs(),
            });
            prods_by_lhs.entry(prod.lhs()).or_default().push(entry.id);
        }

        Self {
            productions,
            prods_by_lhs,
        }
    }

    pub fn get_production(&self, id: ProductionId) -> &ParseProduction<'gram> {
        self.productions.get(id).expect("valid production ID")
    }

    pub fn productions_by_lhs(
        &self,
        lhs: &str,
    ) -> impl Iterator<Item = &ParseProduction<'gram>> {
        self.prods_by_lhs
            .get(lhs)
            .into_iter()
            .flatten()
            .map(|id| self.get_production(*id))
    }
}
