//! Lexer for raw word text
//!
//! Splits a raw word into a flat token stream in which escaped characters,
//! quoted spans and substitution atoms are already distinguished from the
//! plain characters the brace parser gives meaning to (`{`, `}`, `,`).

use crate::ast::types::{QuotedPart, SubstitutionPart};
use crate::parser::parser_substitution::scan_substitution;

/// Escape marker that protects the following character.
pub const ESCAPE_MARKER: char = '\\';

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// An unescaped character outside quotes and substitutions
    Char(char),
    /// A character preceded by the escape marker (marker stripped)
    Escaped(char),
    Quoted(QuotedPart),
    Substitution(SubstitutionPart),
}

impl Token {
    pub fn is_char(&self, c: char) -> bool {
        matches!(self, Token::Char(x) if *x == c)
    }
}

pub struct Lexer {
    chars: Vec<char>,
    pos: usize,
}

impl Lexer {
    pub fn new(input: &str) -> Self {
        Self {
            chars: input.chars().collect(),
            pos: 0,
        }
    }

    pub fn tokenize(mut self) -> Vec<Token> {
        let mut tokens = Vec::with_capacity(self.chars.len());
        while self.pos < self.chars.len() {
            let token = self.next_token();
            tokens.push(token);
        }
        tokens
    }

    fn next_token(&mut self) -> Token {
        let c = self.chars[self.pos];

        if c == ESCAPE_MARKER {
            if let Some(&next) = self.chars.get(self.pos + 1) {
                self.pos += 2;
                return Token::Escaped(next);
            }
            // A trailing lone marker has nothing to protect.
            self.pos += 1;
            return Token::Char(c);
        }

        if c == '\'' {
            if let Some(end) = self.find_single_quote_end() {
                return self.take_quoted(end, false);
            }
        }

        if c == '"' {
            if let Some(end) = self.find_double_quote_end() {
                return self.take_quoted(end, true);
            }
        }

        if c == '$' || c == '`' {
            if let Some((kind, end)) = scan_substitution(&self.chars, self.pos) {
                let text: String = self.chars[self.pos..end].iter().collect();
                self.pos = end;
                return Token::Substitution(SubstitutionPart { kind, text });
            }
        }

        self.pos += 1;
        Token::Char(c)
    }

    fn take_quoted(&mut self, end: usize, double: bool) -> Token {
        let text: String = self.chars[self.pos..=end].iter().collect();
        self.pos = end + 1;
        Token::Quoted(QuotedPart { text, double })
    }

    fn find_single_quote_end(&self) -> Option<usize> {
        self.chars[self.pos + 1..]
            .iter()
            .position(|&c| c == '\'')
            .map(|offset| self.pos + 1 + offset)
    }

    fn find_double_quote_end(&self) -> Option<usize> {
        let mut i = self.pos + 1;
        while i < self.chars.len() {
            match self.chars[i] {
                ESCAPE_MARKER => i += 2,
                '"' => return Some(i),
                '$' | '`' => match scan_substitution(&self.chars, i) {
                    Some((_, end)) => i = end,
                    None => i += 1,
                },
                _ => i += 1,
            }
        }
        None
    }
}

/// Tokenize a raw word.
pub fn tokenize(input: &str) -> Vec<Token> {
    Lexer::new(input).tokenize()
}
