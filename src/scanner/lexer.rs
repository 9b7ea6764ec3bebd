use std::iter::Peekable;
use std::str::CharIndices;

use log::{debug, trace};

use crate::scanner::token::Token;

/// Split `input` into tokens.
///
/// Whitespace separates tokens. A number is a maximal run of ASCII digits, an
/// identifier is an ASCII letter followed by letters or digits, and every
/// other character becomes a single-character symbol. Rejecting symbols the
/// grammar does not know is left to the parser, so this never fails.
pub fn tokenize(input: &str) -> Vec<Token> {
    debug!("Tokenizing input: '{}'", input);

    let mut tokens = Vec::new();
    let mut chars = input.char_indices().peekable();

    while let Some(&(start, c)) = chars.peek() {
        if c.is_whitespace() {
            chars.next();
            continue;
        }

        let token = if c.is_ascii_digit() {
            let end = consume_while(&mut chars, start, |c| c.is_ascii_digit());
            Token::Number(digits_value(&input[start..end]))
        } else if c.is_ascii_alphabetic() {
            let end = consume_while(&mut chars, start, |c| c.is_ascii_alphanumeric());
            Token::Identifier(input[start..end].to_string())
        } else {
            chars.next();
            Token::Symbol(c)
        };

        trace!("Token at byte {}: {:?}", start, token);
        tokens.push(token);
    }

    debug!("Produced {} tokens", tokens.len());
    tokens
}

/// Whether `name` would be scanned as a single identifier token
pub fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() => chars.all(|c| c.is_ascii_alphanumeric()),
        _ => false,
    }
}

fn consume_while(
    chars: &mut Peekable<CharIndices>,
    start: usize,
    accept: impl Fn(char) -> bool,
) -> usize {
    let mut end = start;
    while let Some(&(i, c)) = chars.peek() {
        if !accept(c) {
            break;
        }
        end = i + c.len_utf8();
        chars.next();
    }
    end
}

// Digit runs too long for f64 saturate to infinity; the parser rejects them.
fn digits_value(digits: &str) -> f64 {
    digits
        .bytes()
        .fold(0.0, |acc, b| acc * 10.0 + f64::from(b - b'0'))
}
