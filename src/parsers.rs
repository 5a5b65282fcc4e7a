//! Parsers for the line-oriented grammar format.
//!
//! One production per line: `LHS → RHS` (or `->`), with the right-hand side
//! whitespace-separated. Blank lines and lines whose first non-whitespace
//! character is `#` are ignored. The start symbol is the left-hand side of
//! the first production; production order is preserved. When a line
//! contains both separators, `→` wins.

use crate::error::Error;
use crate::grammar::Grammar;
use nom::branch::alt;
use nom::bytes::complete::{tag, take_till1, take_until};
use nom::character::complete::{space0, space1};
use nom::combinator::eof;
use nom::multi::separated_list1;
use nom::sequence::preceded;
use nom::IResult;

fn separator(input: &str) -> IResult<&str, &str> {
    alt((tag("→"), tag("->")))(input)
}

fn symbol(input: &str) -> IResult<&str, &str> {
    take_till1(char::is_whitespace)(input)
}

/// Parse one production line into a raw `(lhs, rhs)` rule. The left-hand
/// side must be a single symbol; the right-hand side must be non-empty.
pub(crate) fn production(line: &str) -> IResult<&str, (String, Vec<String>)> {
    let (rest, raw_lhs) = alt((take_until("→"), take_until("->")))(line)?;
    let (rest, _) = separator(rest)?;

    let lhs = raw_lhs.trim();
    if lhs.is_empty() || lhs.contains(char::is_whitespace) {
        return Err(nom::Err::Failure(nom::error::Error::new(
            line,
            nom::error::ErrorKind::Verify,
        )));
    }

    let (rest, rhs) = preceded(space0, separated_list1(space1, symbol))(rest)?;
    let (rest, _) = space0(rest)?;
    let (rest, _) = eof(rest)?;

    Ok((
        rest,
        (lhs.to_string(), rhs.iter().map(|s| s.to_string()).collect()),
    ))
}

/// Parse a whole grammar text and build the [`Grammar`], reporting the
/// first malformed line with its 1-based line number.
pub(crate) fn grammar_complete(input: &str) -> Result<Grammar, Error> {
    let mut rules = Vec::new();
    for (index, line) in input.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let (_, rule) = production(line).map_err(|_| {
            Error::ParseError(format!("line {}: malformed production `{line}`", index + 1))
        })?;
        rules.push(rule);
    }

    let start = match rules.first() {
        Some((lhs, _)) => lhs.clone(),
        None => {
            return Err(Error::ValidationError(
                "grammar has no productions".to_string(),
            ))
        }
    };

    Grammar::build(rules, &start)
}
