//! The bundled expression lexer.
//!
//! Tokenization is a pluggable collaborator of the engine: the recognizer
//! accepts any `&[Token]`. This module provides the lexer used by the
//! `acepta` binary and the examples. Its kind map folds `-` into the
//! additive kind and `/` into the multiplicative kind, so unary minus and
//! division are indistinguishable from addition and multiplication at the
//! grammar level. Characters that fit no class are silently dropped.

use crate::token::Token;

/// Token kind for digit runs.
pub const NUM: &str = "num";
/// Token kind for identifiers (a letter, then letters, digits or `_`).
pub const ID: &str = "id";
/// Token kind for `+` and `-`.
pub const OP_SUMA: &str = "op_suma";
/// Token kind for `*` and `/`.
pub const OP_MUL: &str = "op_mul";
/// Token kind for `(`.
pub const PARI: &str = "pari";
/// Token kind for `)`.
pub const PARD: &str = "pard";

/// Split an input line into tokens. Whitespace separates tokens and is
/// otherwise ignored; unclassifiable characters are skipped.
pub fn tokenize(input: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut chars = input.chars().peekable();

    while let Some(&c) = chars.peek() {
        if c.is_whitespace() {
            chars.next();
        } else if c.is_ascii_digit() {
            let mut lexeme = String::new();
            while let Some(&digit) = chars.peek() {
                if !digit.is_ascii_digit() {
                    break;
                }
                lexeme.push(digit);
                chars.next();
            }
            tokens.push(Token::new(NUM, lexeme));
        } else if c.is_alphabetic() {
            let mut lexeme = String::new();
            while let Some(&part) = chars.peek() {
                if !part.is_alphanumeric() && part != '_' {
                    break;
                }
                lexeme.push(part);
                chars.next();
            }
            tokens.push(Token::new(ID, lexeme));
        } else {
            chars.next();
            let kind = match c {
                '+' | '-' => OP_SUMA,
                '*' | '/' => OP_MUL,
                '(' => PARI,
                ')' => PARD,
                _ => continue,
            };
            tokens.push(Token::new(kind, c.to_string()));
        }
    }

    tokens
}
