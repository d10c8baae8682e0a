//! Reading formulas from text.
//!
//! The grammar is:
//!
//! ```text
//! formula := VARIABLE
//!          | ~ formula
//!          | ( formula CONNECTIVE formula )
//!          | ( formula )
//! ```
//!
//! So, binary formulas are always parenthesized, and a negation may be given with or without parentheses, e.g. `~p` or `(~p)`.
//! The tokens are detailed in [lexer].
//!
//! Each node read is unsigned, and negation is represented with [Negation](crate::structures::formula::Kind::Negation) wrappers.
//!
//! ```rust
//! # use tableau_lib::parser::parse;
//! let formula = parse("(~(p and q) <=> (~p or ~q))").unwrap();
//! assert_eq!(formula.to_string(), "(~(p and q) <=> (~p or ~q))");
//! assert_eq!(formula.negation_count(), 3);
//! ```
//!
//! Parsing uses an explicit stack of partial formulas, so deeply nested input does not exhaust the call stack.

pub mod lexer;

use lexer::{tokenize, Positioned, Token};

use crate::{
    misc::log::targets::{self},
    structures::formula::{Connective, Formula},
    types::err::{self},
};

/// A formula in the process of being read.
enum Partial {
    /// A `~` awaiting its formula.
    Not,

    /// A `(` awaiting its first formula.
    Open,

    /// A `(` and first formula, awaiting the second formula.
    Left(Formula, Connective),
}

struct Tokens {
    tokens: std::iter::Peekable<std::vec::IntoIter<Positioned>>,
}

impl Tokens {
    fn next(&mut self, expected: &'static str) -> Result<Positioned, err::ParseError> {
        self.tokens
            .next()
            .ok_or(err::ParseError::UnexpectedEnd { expected })
    }

    fn peek(&mut self) -> Option<&Positioned> {
        self.tokens.peek()
    }
}

fn unexpected(position: usize, found: &Token, expected: &'static str) -> err::ParseError {
    err::ParseError::UnexpectedToken {
        position,
        found: found.to_string(),
        expected,
    }
}

/// Reads a formula from `text`.
pub fn parse(text: &str) -> Result<Formula, err::ParseError> {
    let tokens = tokenize(text)?;
    if tokens.is_empty() {
        return Err(err::ParseError::Empty);
    }

    let mut tokens = Tokens {
        tokens: tokens.into_iter().peekable(),
    };

    let mut stack: Vec<Partial> = Vec::new();

    'formula: loop {
        // Read up to the next complete (atomic) formula.
        let (at, token) = tokens.next("a formula")?;
        let mut formula = match token {
            Token::Variable(name) => Formula::literal(name),

            Token::Not => {
                stack.push(Partial::Not);
                continue 'formula;
            }

            Token::LParen => {
                stack.push(Partial::Open);
                continue 'formula;
            }

            other => return Err(unexpected(at, &other, "a formula")),
        };

        // Complete as many partial formulas as possible with the formula.
        loop {
            match stack.pop() {
                None => match tokens.peek() {
                    None => {
                        log::trace!(target: targets::PARSE, "Read: {formula}");
                        return Ok(formula);
                    }
                    Some((at, _)) => return Err(err::ParseError::TrailingInput { position: *at }),
                },

                Some(Partial::Not) => formula = Formula::negation(formula),

                Some(Partial::Open) => {
                    let (at, token) = tokens.next("a connective or ')'")?;
                    match token {
                        Token::RParen => {}

                        Token::Connective(connective) => {
                            stack.push(Partial::Left(formula, connective));
                            continue 'formula;
                        }

                        other => return Err(unexpected(at, &other, "a connective or ')'")),
                    }
                }

                Some(Partial::Left(left, connective)) => {
                    let (at, token) = tokens.next("')'")?;
                    match token {
                        Token::RParen => formula = Formula::binary(connective, left, formula),
                        other => return Err(unexpected(at, &other, "')'")),
                    }
                }
            }
        }
    }
}

/// Reads one formula from each line of `text`.
///
/// Blank lines, and lines beginning with `#`, are skipped.
/// The line number (from one) of each formula is returned with the formula.
pub fn parse_lines(text: &str) -> Vec<(usize, Result<Formula, err::ParseError>)> {
    text.lines()
        .enumerate()
        .map(|(index, line)| (index + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'))
        .map(|(number, line)| (number, parse(line)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structures::formula::Kind;

    #[test]
    fn binary_formulas() {
        let formula = parse("(p and (q => r))").unwrap();
        assert_eq!(
            formula,
            Formula::conjunction(
                Formula::literal("p"),
                Formula::implication(Formula::literal("q"), Formula::literal("r"))
            )
        );
    }

    #[test]
    fn negations_are_wrapped() {
        let formula = parse("~~p").unwrap();
        assert!(!formula.sign());
        assert!(matches!(formula.kind(), Kind::Negation(_)));
        assert_eq!(formula.negation_count(), 2);
        assert_eq!(formula.to_string(), "~~p");
    }

    #[test]
    fn redundant_parentheses() {
        assert_eq!(parse("((p))"), Ok(Formula::literal("p")));
        assert_eq!(parse("(~p)"), Ok(Formula::negation(Formula::literal("p"))));
        assert_eq!(parse("((p or q))"), parse("(p or q)"));
    }

    #[test]
    fn rendering_is_read_back() {
        for text in ["p", "~(p <=> ~q)", "((p => q) => ((q => r) => (p => r)))", "~(~p and ~~q12)"] {
            assert_eq!(parse(text).unwrap().to_string(), text);
        }
    }

    #[test]
    fn errors() {
        assert_eq!(parse(""), Err(err::ParseError::Empty));
        assert_eq!(parse("   "), Err(err::ParseError::Empty));
        assert_eq!(
            parse("(p and q"),
            Err(err::ParseError::UnexpectedEnd { expected: "')'" })
        );
        assert_eq!(
            parse("p and q"),
            Err(err::ParseError::TrailingInput { position: 2 })
        );
        assert_eq!(
            parse("(p q)"),
            Err(err::ParseError::UnexpectedToken {
                position: 3,
                found: "q".to_string(),
                expected: "a connective or ')'"
            })
        );
        assert_eq!(
            parse("(p and q or r)"),
            Err(err::ParseError::UnexpectedToken {
                position: 9,
                found: "or".to_string(),
                expected: "')'"
            })
        );
        assert_eq!(
            parse("(and p)"),
            Err(err::ParseError::UnexpectedToken {
                position: 1,
                found: "and".to_string(),
                expected: "a formula"
            })
        );
        assert_eq!(parse("~"), Err(err::ParseError::UnexpectedEnd { expected: "a formula" }));
    }

    #[test]
    fn lines() {
        let text = "# a comment\n\n(p or ~p)\n  \n(p and\n";
        let read = parse_lines(text);
        assert_eq!(read.len(), 2);
        assert_eq!(read[0].0, 3);
        assert!(read[0].1.is_ok());
        assert_eq!(read[1].0, 5);
        assert!(read[1].1.is_err());
    }

    #[test]
    fn deep_nesting() {
        let depth = 200_000;
        let mut text = "~".repeat(depth);
        text.push('p');
        let formula = parse(&text).unwrap();
        assert_eq!(formula.negation_count(), depth);
        drop(formula);

        let depth = 50_000;
        let mut text = "(".repeat(depth);
        text.push('p');
        text.push_str(&" and q)".repeat(depth));
        let formula = parse(&text).unwrap();
        assert_eq!(formula.connective_count(), depth);
        drop(formula);
    }
}
