//! Tokens of the formula grammar.
//!
//! - Parentheses `(` and `)`.
//! - Negation `~`.
//! - The connectives `and`, `or`, `=>`, and `<=>`.
//! - Variables: a letter from `p` to `z`, optionally followed by a number without a leading zero, e.g. `q` or `r12`.
//!
//! Whitespace separates tokens, and is otherwise ignored.

use crate::{structures::formula::Connective, types::err::{self}};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Token {
    LParen,
    RParen,
    Not,
    Connective(Connective),
    Variable(String),
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::LParen => write!(f, "("),
            Self::RParen => write!(f, ")"),
            Self::Not => write!(f, "~"),
            Self::Connective(connective) => write!(f, "{}", connective.token()),
            Self::Variable(name) => write!(f, "{name}"),
        }
    }
}

/// A token, paired with the (character) position at which it begins.
pub type Positioned = (usize, Token);

/// The tokens of `text`, in order.
pub fn tokenize(text: &str) -> Result<Vec<Positioned>, err::ParseError> {
    let chars = text.chars().collect::<Vec<_>>();
    let mut tokens = Vec::new();
    let mut at = 0;

    let matches_at = |at: usize, word: &str| {
        word.chars()
            .enumerate()
            .all(|(offset, c)| chars.get(at + offset) == Some(&c))
    };

    while let Some(&c) = chars.get(at) {
        if c.is_whitespace() {
            at += 1;
            continue;
        }

        let start = at;
        let token = match c {
            '(' => {
                at += 1;
                Token::LParen
            }

            ')' => {
                at += 1;
                Token::RParen
            }

            '~' => {
                at += 1;
                Token::Not
            }

            'p'..='z' => {
                at += 1;
                if let Some('1'..='9') = chars.get(at) {
                    while let Some('0'..='9') = chars.get(at) {
                        at += 1;
                    }
                }
                Token::Variable(chars[start..at].iter().collect())
            }

            _ => {
                let mut found = None;
                for connective in [
                    Connective::Equivalence,
                    Connective::Implication,
                    Connective::Conjunction,
                    Connective::Disjunction,
                ] {
                    if matches_at(at, connective.token()) {
                        at += connective.token().chars().count();
                        found = Some(Token::Connective(connective));
                        break;
                    }
                }
                match found {
                    Some(token) => token,
                    None => {
                        return Err(err::ParseError::UnknownSymbol {
                            position: start,
                            symbol: c,
                        })
                    }
                }
            }
        };

        tokens.push((start, token));
    }

    Ok(tokens)
}
