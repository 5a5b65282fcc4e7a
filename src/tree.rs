use crate::append_vec::{append_only_vec_id, AppendOnlyVec};
use std::fmt;

append_only_vec_id!(pub NodeId);

/// A node of a [`ParseTree`]: a terminal leaf holding the scanned token, or
/// a nonterminal holding its label and child ids in right-hand-side order.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ParseTreeNode {
    /// A scanned token
    Terminal {
        /// the token kind that matched the grammar terminal
        kind: String,
        /// the original input fragment
        lexeme: String,
    },
    /// A completed production
    Nonterminal {
        /// the production's left-hand side
        label: String,
        /// children in right-hand-side order
        children: Vec<NodeId>,
    },
}

impl ParseTreeNode {
    pub fn is_terminal(&self) -> bool {
        matches!(self, ParseTreeNode::Terminal { .. })
    }

    /// The grammar symbol this node stands for: a terminal's token kind or
    /// a nonterminal's name.
    pub fn symbol(&self) -> &str {
        match self {
            ParseTreeNode::Terminal { kind, .. } => kind,
            ParseTreeNode::Nonterminal { label, .. } => label,
        }
    }
}

/// A concrete derivation tree witnessing that a token sequence belongs to a
/// grammar's language.
///
/// Nodes live in an arena and refer to each other by [`NodeId`]; ids are
/// assigned parent-before-children during reconstruction. The tree is
/// immutable and owns all of its data; nothing borrows from the chart it
/// was built from.
#[derive(Clone, Debug)]
pub struct ParseTree {
    nodes: AppendOnlyVec<ParseTreeNode, NodeId>,
    root: NodeId,
}

/// Incremental construction used by tree reconstruction: push nodes, wire
/// children, then seal with the root.
pub(crate) struct TreeBuilder {
    nodes: AppendOnlyVec<ParseTreeNode, NodeId>,
}

impl TreeBuilder {
    pub fn new() -> Self {
        Self {
            nodes: AppendOnlyVec::new(),
        }
    }
    pub fn push(&mut self, node: ParseTreeNode) -> NodeId {
        self.nodes.push(node)
    }
    pub fn set_children(&mut self, id: NodeId, new_children: Vec<NodeId>) {
        match self.nodes.get_mut(id) {
            Some(ParseTreeNode::Nonterminal { children, .. }) => *children = new_children,
            _ => unreachable!("children can only be attached to nonterminal nodes"),
        }
    }
    pub fn finish(self, root: NodeId) -> ParseTree {
        ParseTree {
            nodes: self.nodes,
            root,
        }
    }
}

impl ParseTree {
    /// The root node id.
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Look up a node by id.
    pub fn node(&self, id: NodeId) -> &ParseTreeNode {
        self.nodes.get(id).expect("valid node ID")
    }

    /// Total number of nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Walk the tree in pre-order (each node before its children, children
    /// left to right).
    pub fn pre_order(&self) -> PreOrder<'_> {
        PreOrder {
            tree: self,
            stack: vec![self.root],
        }
    }

    /// The yield: lexemes of the terminal leaves, left to right. For a tree
    /// built from an accepted parse this equals the input lexemes in order.
    pub fn leaves(&self) -> Vec<&str> {
        self.pre_order()
            .filter_map(|(_, node)| match node {
                ParseTreeNode::Terminal { lexeme, .. } => Some(lexeme.as_str()),
                ParseTreeNode::Nonterminal { .. } => None,
            })
            .collect()
    }

    /// Render the tree as a Mermaid `flowchart TD` diagram, one node
    /// declaration per id and one edge per parent/child pair.
    pub fn mermaid_to_string(&self) -> String {
        let mut output = String::from("flowchart TD\n");
        for (id, node) in self.pre_order() {
            let id = usize::from(id);
            match node {
                ParseTreeNode::Terminal { lexeme, .. } => {
                    output.push_str(&format!("    {id}[\"'{lexeme}'\"]\n"));
                }
                ParseTreeNode::Nonterminal { label, children } => {
                    output.push_str(&format!("    {id}[\"{label}\"]\n"));
                    for child in children {
                        output.push_str(&format!("    {id} --> {}\n", usize::from(*child)));
                    }
                }
            }
        }
        output
    }

    fn node_line(&self, id: NodeId) -> String {
        match self.node(id) {
            ParseTreeNode::Terminal { lexeme, .. } => format!("\"{lexeme}\""),
            ParseTreeNode::Nonterminal { label, children } => {
                let mut line = format!("{label} →");
                for child in children {
                    line.push(' ');
                    line.push_str(self.node(*child).symbol());
                }
                line
            }
        }
    }

    fn fmt_subtree(&self, f: &mut fmt::Formatter<'_>, id: NodeId, prefix: &str) -> fmt::Result {
        let ParseTreeNode::Nonterminal { children, .. } = self.node(id) else {
            return Ok(());
        };
        let mut children = children.iter().peekable();
        while let Some(&child) = children.next() {
            let (branch, extension) = if children.peek().is_some() {
                ("├── ", "│   ")
            } else {
                ("└── ", "    ")
            };
            writeln!(f, "{prefix}{branch}{}", self.node_line(child))?;
            self.fmt_subtree(f, child, &format!("{prefix}{extension}"))?;
        }
        Ok(())
    }
}

/// Pretty-print with box-drawing branches; each internal node shows the
/// production it instantiates and each leaf shows its lexeme.
impl fmt::Display for ParseTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.node_line(self.root))?;
        self.fmt_subtree(f, self.root, "")
    }
}

/// Iterator returned by [`ParseTree::pre_order`].
pub struct PreOrder<'tree> {
    tree: &'tree ParseTree,
    stack: Vec<NodeId>,
}

impl<'tree> Iterator for PreOrder<'tree> {
    type Item = (NodeId, &'tree ParseTreeNode);

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.stack.pop()?;
        let node = self.tree.node(id);
        if let ParseTreeNode::Nonterminal { children, .. } = node {
            self.stack.extend(children.iter().rev().copied());
        }
        Some((id, node))
    }
}
