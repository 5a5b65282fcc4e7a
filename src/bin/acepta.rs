//! Interactive accept/reject driver.
//!
//! Loads a grammar file (default `gra.txt`, materialized with the bundled
//! arithmetic grammar on first run), then reads input lines from stdin and
//! prints `ACEPTA` with the derivation tree, or `NO ACEPTA`.

use anyhow::{Context, Result};
use charter::{lexer, Grammar};
use clap::Parser;
use std::fs;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

const DEFAULT_GRAMMAR_PATH: &str = "gra.txt";

const DEFAULT_GRAMMAR: &str = "\
# Arithmetic expressions. The lexer folds - into op_suma and / into op_mul.
E → E op_suma T
E → T
T → T op_mul F
T → F
F → id
F → num
F → pari E pard
";

/// Earley-parse expression lines against a grammar file.
#[derive(Parser)]
#[command(name = "acepta", version, about)]
struct Args {
    /// Grammar file; the default is created with the bundled arithmetic
    /// grammar if absent
    #[arg(default_value = DEFAULT_GRAMMAR_PATH)]
    grammar: PathBuf,

    /// Dump the chart after each recognition
    #[arg(long)]
    chart: bool,

    /// Do not print the derivation tree for accepted inputs
    #[arg(long)]
    no_tree: bool,
}

fn main() -> Result<()> {
    #[cfg(feature = "tracing")]
    tracing_subscriber::fmt::init();

    let args = Args::parse();

    if !args.grammar.exists() && args.grammar.as_os_str() == DEFAULT_GRAMMAR_PATH {
        println!(
            "creating {} with the bundled arithmetic grammar",
            args.grammar.display()
        );
        fs::write(&args.grammar, DEFAULT_GRAMMAR)
            .with_context(|| format!("writing {}", args.grammar.display()))?;
    }

    let text = fs::read_to_string(&args.grammar)
        .with_context(|| format!("reading grammar file {}", args.grammar.display()))?;
    let grammar: Grammar = text
        .parse()
        .with_context(|| format!("loading grammar from {}", args.grammar.display()))?;

    println!("Loaded grammar:");
    print!("{grammar}");
    println!("Start symbol: {}", grammar.starting_symbol());
    println!("Nonterminals: {}", grammar.nonterminals().join(", "));
    println!("Terminals: {}", grammar.terminals().join(", "));
    println!("Enter expressions, one per line (quit to exit).");

    let stdin = io::stdin();
    let mut line = String::new();
    loop {
        print!("> ");
        io::stdout().flush()?;

        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let input = line.trim();
        if input.is_empty() {
            continue;
        }
        if input.eq_ignore_ascii_case("quit") {
            break;
        }

        let tokens = lexer::tokenize(input);
        let shown: Vec<String> = tokens.iter().map(ToString::to_string).collect();
        println!("Tokens: [{}]", shown.join(", "));

        let recognition = grammar.recognize(&tokens);
        if args.chart {
            print!("{:?}", recognition.chart());
        }
        match recognition.build_tree() {
            Some(tree) => {
                println!("ACEPTA");
                if !args.no_tree {
                    print!("{tree}");
                    println!("Nodes: {}", tree.node_count());
                }
            }
            None => println!("NO ACEPTA"),
        }
    }

    Ok(())
}
