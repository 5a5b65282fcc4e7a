use charter::{tokenize, Grammar, NodeId, ParseTree, ParseTreeNode, Term, Token};
use quickcheck::{Arbitrary, Gen, QuickCheck, TestResult};

const ARITHMETIC: &str = "\
E → E op_suma T
E → T
T → T op_mul F
T → F
F → id
F → num
F → pari E pard
";

fn arithmetic() -> Grammar {
    ARITHMETIC.parse().unwrap()
}

fn child_symbols(tree: &ParseTree, id: NodeId) -> Vec<String> {
    match tree.node(id) {
        ParseTreeNode::Nonterminal { children, .. } => children
            .iter()
            .map(|child| tree.node(*child).symbol().to_string())
            .collect(),
        ParseTreeNode::Terminal { .. } => Vec::new(),
    }
}

#[test]
fn single_number() {
    let grammar = arithmetic();
    let tokens = tokenize("3");

    let tree = grammar.parse_tokens(&tokens).expect("3 is accepted");

    assert_eq!(tree.leaves(), ["3"]);
    let symbols: Vec<&str> = tree.pre_order().map(|(_, node)| node.symbol()).collect();
    assert_eq!(symbols, ["E", "T", "F", "num"]);
}

#[test]
fn addition() {
    let grammar = arithmetic();
    let tokens = tokenize("1+2");

    let tree = grammar.parse_tokens(&tokens).expect("1+2 is accepted");

    assert_eq!(child_symbols(&tree, tree.root()), ["E", "op_suma", "T"]);
    assert_eq!(tree.leaves(), ["1", "+", "2"]);
}

#[test]
fn addition_tree_rendering() {
    let grammar = arithmetic();
    let tokens = tokenize("1+2");

    let tree = grammar.parse_tokens(&tokens).unwrap();
    let expected = "\
E → E op_suma T
├── E → T
│   └── T → F
│       └── F → num
│           └── \"1\"
├── \"+\"
└── T → F
    └── F → num
        └── \"2\"
";

    assert_eq!(tree.to_string(), expected);
}

#[test]
fn precedence_by_grammar_shape() {
    let grammar = arithmetic();
    let tokens = tokenize("2*3+4");

    let tree = grammar.parse_tokens(&tokens).expect("2*3+4 is accepted");

    // root: E → E op_suma T, with 2*3 under the left E
    let root_children = child_symbols(&tree, tree.root());
    assert_eq!(root_children, ["E", "op_suma", "T"]);

    let left = match tree.node(tree.root()) {
        ParseTreeNode::Nonterminal { children, .. } => children[0],
        ParseTreeNode::Terminal { .. } => unreachable!(),
    };
    let left_leaves: Vec<&str> = {
        // E → T → T op_mul F chain under the left child
        let mut stack = vec![left];
        let mut leaves = Vec::new();
        while let Some(id) = stack.pop() {
            match tree.node(id) {
                ParseTreeNode::Terminal { lexeme, .. } => leaves.push(lexeme.as_str()),
                ParseTreeNode::Nonterminal { children, .. } => {
                    stack.extend(children.iter().rev())
                }
            }
        }
        leaves
    };
    assert_eq!(left_leaves, ["2", "*", "3"]);
}

#[test]
fn parenthesized_expression() {
    let grammar = arithmetic();
    let tokens = tokenize("(1+2)*3");

    let tree = grammar.parse_tokens(&tokens).expect("(1+2)*3 is accepted");

    assert_eq!(tree.leaves(), ["(", "1", "+", "2", ")", "*", "3"]);

    // some F expands to pari E pard
    let has_paren_factor = tree.pre_order().any(|(id, node)| {
        node.symbol() == "F" && child_symbols(&tree, id) == ["pari", "E", "pard"]
    });
    assert!(has_paren_factor);
}

#[test]
fn dangling_operator_rejects() {
    let grammar = arithmetic();
    let tokens = tokenize("1+");

    assert!(grammar.parse_tokens(&tokens).is_none());
}

#[test]
fn leading_operator_rejects() {
    let grammar = arithmetic();
    let tokens = tokenize("*5");

    assert!(grammar.parse_tokens(&tokens).is_none());
}

#[test]
fn empty_input_rejects() {
    let grammar = arithmetic();
    let tokens = tokenize("");

    assert!(tokens.is_empty());
    assert!(grammar.parse_tokens(&tokens).is_none());
}

#[test]
fn minus_and_division_fold_into_sum_and_mul() {
    let grammar = arithmetic();
    let tokens = tokenize("8/2-3");

    let tree = grammar.parse_tokens(&tokens).expect("8/2-3 is accepted");
    assert_eq!(tree.leaves(), ["8", "/", "2", "-", "3"]);
}

#[test]
fn long_left_recursive_chain() {
    let grammar = arithmetic();
    let tokens = tokenize("1+2+3+4+5+6+7+8");

    let tree = grammar.parse_tokens(&tokens).expect("chain is accepted");

    // left associativity: the root's first child carries everything but
    // the last operand
    let left = match tree.node(tree.root()) {
        ParseTreeNode::Nonterminal { children, .. } => children[0],
        ParseTreeNode::Terminal { .. } => unreachable!(),
    };
    assert_eq!(tree.node(left).symbol(), "E");
    assert_eq!(tree.leaves().len(), 15);
}

#[test]
fn recognition_is_deterministic() {
    let grammar = arithmetic();
    let tokens = tokenize("2*3+4");

    let first = grammar.parse_tokens(&tokens).unwrap().to_string();
    let second = grammar.parse_tokens(&tokens).unwrap().to_string();

    assert_eq!(first, second);
}

#[test]
fn ambiguous_grammar_returns_one_stable_tree() {
    let grammar: Grammar = "S → S S\nS → x".parse().unwrap();
    let tokens: Vec<Token> = (0..4).map(|i| Token::new("x", format!("x{i}"))).collect();

    let first = grammar.parse_tokens(&tokens).expect("ambiguous accepts");
    let second = grammar.parse_tokens(&tokens).expect("ambiguous accepts");

    assert_eq!(first.leaves(), ["x0", "x1", "x2", "x3"]);
    assert_eq!(first.to_string(), second.to_string());
}

#[test]
fn internal_nodes_instantiate_grammar_productions() {
    let grammar = arithmetic();
    let tokens = tokenize("(1+2)*x");

    let tree = grammar.parse_tokens(&tokens).unwrap();

    for (id, node) in tree.pre_order() {
        let ParseTreeNode::Nonterminal { label, .. } = node else {
            continue;
        };
        assert!(grammar.is_nonterminal(label), "unknown label {label}");
        let children = child_symbols(&tree, id);
        let matches_some_production = grammar.productions_of(label).any(|production| {
            let rhs: Vec<&str> = production.rhs_iter().map(Term::name).collect();
            rhs == children
        });
        assert!(
            matches_some_production,
            "node {label} → {children:?} matches no production"
        );
    }
}

#[test]
fn prediction_closure_holds_after_recognition() {
    let grammar = arithmetic();
    let tokens = tokenize("1+2");

    let recognition = grammar.recognize(&tokens);
    let chart = recognition.chart();

    for position in 0..chart.num_sets() {
        let set: Vec<_> = chart.iter_set(position).collect();
        for item in &set {
            let Some(Term::Nonterminal(next)) = item.next_term() else {
                continue;
            };
            for production in grammar.productions_of(next) {
                let predicted = set.iter().any(|candidate| {
                    candidate.lhs == next.as_str()
                        && candidate.dot == 0
                        && candidate.origin == position
                        && candidate.rhs == production.rhs()
                });
                assert!(
                    predicted,
                    "missing prediction for {next} at position {position}"
                );
            }
        }
    }
}

#[test]
fn chart_dump_marks_complete_items() {
    let grammar = arithmetic();
    let tokens = tokenize("3");

    let recognition = grammar.recognize(&tokens);
    let dump = format!("{:?}", recognition.chart());

    assert!(dump.contains("C[0]:"));
    assert!(dump.contains("C[1]:"));
    assert!(dump.contains("F → num • (origin 0)"), "dump:\n{dump}");
}

#[test]
fn recognize_and_parse_agree() {
    let grammar = arithmetic();
    for input in ["3", "1+2", "2*3+4", "(1+2)*3", "1+", "*5", "((7))", ")("] {
        let tokens = tokenize(input);
        let recognition = grammar.recognize(&tokens);
        assert_eq!(
            recognition.accepted(),
            grammar.parse_tokens(&tokens).is_some(),
            "disagreement on {input}"
        );
    }
}

// Random well-formed expressions must be accepted, and the tree yield must
// reproduce the token lexemes in order.
#[derive(Clone, Debug)]
enum Expr {
    Num(u32),
    Ident(&'static str),
    Add(Box<Expr>, Box<Expr>),
    Mul(Box<Expr>, Box<Expr>),
    Paren(Box<Expr>),
}

impl Expr {
    fn arbitrary_depth(g: &mut Gen, depth: usize) -> Self {
        let choices: &[u8] = if depth == 0 { &[0, 1] } else { &[0, 1, 2, 3, 4] };
        match *g.choose(choices).unwrap() {
            0 => Expr::Num(u32::arbitrary(g) % 1000),
            1 => Expr::Ident(*g.choose(&["x", "y", "total", "n1"]).unwrap()),
            2 => Expr::Add(
                Box::new(Expr::arbitrary_depth(g, depth - 1)),
                Box::new(Expr::arbitrary_depth(g, depth - 1)),
            ),
            3 => Expr::Mul(
                Box::new(Expr::arbitrary_depth(g, depth - 1)),
                Box::new(Expr::arbitrary_depth(g, depth - 1)),
            ),
            _ => Expr::Paren(Box::new(Expr::arbitrary_depth(g, depth - 1))),
        }
    }

    fn render(&self, out: &mut String) {
        match self {
            Expr::Num(n) => out.push_str(&n.to_string()),
            Expr::Ident(name) => out.push_str(name),
            Expr::Add(left, right) => {
                left.render(out);
                out.push('+');
                right.render(out);
            }
            Expr::Mul(left, right) => {
                left.render(out);
                out.push('*');
                right.render(out);
            }
            Expr::Paren(inner) => {
                out.push('(');
                inner.render(out);
                out.push(')');
            }
        }
    }
}

impl Arbitrary for Expr {
    fn arbitrary(g: &mut Gen) -> Self {
        Expr::arbitrary_depth(g, 4)
    }
}

fn prop_well_formed_expressions_parse(expr: Expr) -> TestResult {
    let mut input = String::new();
    expr.render(&mut input);

    let grammar = arithmetic();
    let tokens = tokenize(&input);
    let lexemes: Vec<&str> = tokens.iter().map(Token::lexeme).collect();

    let Some(tree) = grammar.parse_tokens(&tokens) else {
        return TestResult::error(format!("rejected well-formed input {input}"));
    };
    TestResult::from_bool(tree.leaves() == lexemes)
}

#[test]
fn well_formed_expressions_parse() {
    QuickCheck::new()
        .tests(200)
        .quickcheck(prop_well_formed_expressions_parse as fn(Expr) -> TestResult);
}
