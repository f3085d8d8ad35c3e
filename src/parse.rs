//! Parser from regex patterns to the AST
//!
//! Grammar:
//!   disjunction := term ('|' term)*
//!   term        := factor*            (an empty term is the empty word)
//!   factor      := atom '*'*
//!   atom        := '(' disjunction ')' | '&' | 'ε' | '\' char | '{' token '}' | char
//!   token       := (char except '}' or '\' | '\' char)+
//!
//! Whitespace between atoms is ignored.

use crate::api::Error;
use crate::ast::{Regex, SPECIAL_CHARS};
use crate::symbol::{is_epsilon_spelling, Symbol};
use std::iter::Peekable;

fn error<S, T>(text: S) -> Result<T, Error>
where
    S: ToString,
{
    Err(Error::Syntax(text.to_string()))
}

/// Left-fold a catenation, the grouping `abc` has when read left to right.
fn make_cat(nodes: Vec<Regex>) -> Regex {
    nodes
        .into_iter()
        .reduce(Regex::concat)
        .unwrap_or_else(Regex::empty)
}

fn make_alt(nodes: Vec<Regex>) -> Regex {
    let mut mright = None;
    for node in nodes.into_iter().rev() {
        match mright {
            None => mright = Some(node),
            Some(right) => mright = Some(Regex::alt(node, right)),
        }
    }
    mright.unwrap_or_else(Regex::empty)
}

/// Represents the state used to parse a regex.
struct Parser<'a> {
    /// The remaining input.
    input: Peekable<std::str::Chars<'a>>,

    /// Depth of open parentheses.
    depth: usize,
}

impl Parser<'_> {
    /// If our contents begin with the char c, consume it from our contents
    /// and return true. Otherwise return false.
    fn try_consume(&mut self, c: char) -> bool {
        self.skip_whitespace();
        if self.input.peek() == Some(&c) {
            self.input.next();
            true
        } else {
            false
        }
    }

    fn skip_whitespace(&mut self) {
        while self.input.peek().is_some_and(|c| c.is_whitespace()) {
            self.input.next();
        }
    }

    /// Peek at the next significant character.
    fn peek(&mut self) -> Option<char> {
        self.skip_whitespace();
        self.input.peek().copied()
    }

    fn try_parse(&mut self) -> Result<Regex, Error> {
        // Parse a disjunction. If we consume everything, it's success. If there's
        // something left, it's an error (for example, an excess closing paren).
        let body = self.consume_disjunction()?;
        match self.peek() {
            Some(')') => error("Unbalanced parenthesis"),
            Some(c) => error(format!("Unexpected char: {}", c)),
            None => Ok(body),
        }
    }

    fn consume_disjunction(&mut self) -> Result<Regex, Error> {
        let mut terms = vec![self.consume_term()?];
        while self.try_consume('|') {
            terms.push(self.consume_term()?)
        }
        Ok(make_alt(terms))
    }

    fn consume_term(&mut self) -> Result<Regex, Error> {
        let mut factors = Vec::new();
        loop {
            match self.peek() {
                None | Some('|') => break,
                Some(')') if self.depth > 0 => break,
                Some(')') => return error("Unbalanced parenthesis"),
                Some(_) => {}
            }
            let mut atom = self.consume_atom()?;
            while self.try_consume('*') {
                atom = Regex::star(atom);
            }
            factors.push(atom);
        }
        Ok(make_cat(factors))
    }

    fn consume_atom(&mut self) -> Result<Regex, Error> {
        let c = match self.input.next() {
            Some(c) => c,
            None => return error("Unexpected end of pattern"),
        };
        match c {
            '(' => {
                self.depth += 1;
                let contents = self.consume_disjunction()?;
                self.depth -= 1;
                if !self.try_consume(')') {
                    return error("Unbalanced parenthesis");
                }
                Ok(contents)
            }
            '\\' => match self.input.next() {
                Some(escaped) => Ok(Regex::symbol(escaped)),
                None => error("Incomplete escape"),
            },
            '{' => {
                let mut token = String::new();
                loop {
                    match self.input.next() {
                        Some('}') => break,
                        Some('\\') => match self.input.next() {
                            Some(escaped) => token.push(escaped),
                            None => return error("Incomplete escape"),
                        },
                        Some(c) => token.push(c),
                        None => return error("Unbalanced brace"),
                    }
                }
                if token.is_empty() {
                    return error("Empty symbol");
                }
                Ok(Regex::Symbol(Symbol::new(token)))
            }
            '*' | '}' => error(format!("Invalid atom character: {}", c)),
            c if is_epsilon_spelling(c.encode_utf8(&mut [0u8; 4])) => Ok(Regex::empty()),
            c => {
                debug_assert!(!SPECIAL_CHARS.contains(&c), "special char reached atom fallback");
                Ok(Regex::symbol(c))
            }
        }
    }
}

/// Try parsing a given pattern.
/// Return the resulting AST, or a syntax error.
pub fn try_parse(pattern: &str) -> Result<Regex, Error> {
    let mut p = Parser {
        input: pattern.chars().peekable(),
        depth: 0,
    };
    p.try_parse()
}
