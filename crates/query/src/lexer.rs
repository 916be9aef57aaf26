//! Tokenizer for the query language.
//!
//! Produces a flat token list with byte spans into the source, so the parser
//! can recover the original text of a clause. Keywords are not distinguished
//! at this level: they are `Word` tokens compared case-insensitively by the
//! parser, which means a keyword inside a quoted literal is never a keyword.

use alloc::string::String;
use alloc::vec::Vec;

/// Kinds of tokens.
#[derive(Clone, Debug, PartialEq)]
pub enum TokenKind {
    /// Identifier or keyword, as written. May contain `.` and `$` after the
    /// first character.
    Word(String),
    /// Unsigned number literal, as written (`42`, `2.5`).
    Number(String),
    /// Quoted literal with quotes removed and doubled quotes collapsed.
    Str(String),
    /// Quoted literal missing its closing quote. Never matches a clause form.
    Unterminated(String),
    /// `*`
    Star,
    /// `,`
    Comma,
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `=`
    Eq,
    /// `;`
    Semicolon,
    /// Any other character.
    Symbol(char),
}

/// A token and its byte span in the source.
#[derive(Clone, Debug, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub start: usize,
    pub end: usize,
}

impl Token {
    /// Returns true if this is a word equal to `keyword` ignoring ASCII case.
    #[inline]
    pub fn is_keyword(&self, keyword: &str) -> bool {
        matches!(&self.kind, TokenKind::Word(w) if w.eq_ignore_ascii_case(keyword))
    }

    /// Returns the word text if this is a `Word`.
    #[inline]
    pub fn as_word(&self) -> Option<&str> {
        match &self.kind {
            TokenKind::Word(w) => Some(w),
            _ => None,
        }
    }
}

/// Lexer state.
pub struct Lexer<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Lexer<'a> {
    /// Creates a lexer over `input`.
    pub fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    /// Tokenizes the whole input.
    pub fn tokenize(mut self) -> Vec<Token> {
        let mut tokens = Vec::new();
        while let Some(token) = self.next_token() {
            tokens.push(token);
        }
        tokens
    }

    fn peek(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    fn peek_second(&self) -> Option<char> {
        let mut chars = self.input[self.pos..].chars();
        chars.next();
        chars.next()
    }

    fn advance(&mut self) {
        if let Some(c) = self.peek() {
            self.pos += c.len_utf8();
        }
    }

    fn skip_whitespace(&mut self) {
        while let Some(c) = self.peek() {
            if c.is_whitespace() {
                self.advance();
            } else {
                break;
            }
        }
    }

    fn next_token(&mut self) -> Option<Token> {
        self.skip_whitespace();
        let start = self.pos;
        let c = self.peek()?;

        let kind = match c {
            '\'' | '"' => self.read_quoted(c),
            c if c.is_ascii_digit() => self.read_number(),
            c if c.is_alphabetic() || c == '_' => self.read_word(),
            _ => {
                self.advance();
                match c {
                    '*' => TokenKind::Star,
                    ',' => TokenKind::Comma,
                    '(' => TokenKind::LParen,
                    ')' => TokenKind::RParen,
                    '=' => TokenKind::Eq,
                    ';' => TokenKind::Semicolon,
                    other => TokenKind::Symbol(other),
                }
            }
        };

        Some(Token {
            kind,
            start,
            end: self.pos,
        })
    }

    fn read_word(&mut self) -> TokenKind {
        let start = self.pos;
        while let Some(c) = self.peek() {
            if c.is_alphanumeric() || matches!(c, '_' | '.' | '$') {
                self.advance();
            } else {
                break;
            }
        }
        TokenKind::Word(String::from(&self.input[start..self.pos]))
    }

    fn read_number(&mut self) -> TokenKind {
        let start = self.pos;
        while matches!(self.peek(), Some(c) if c.is_ascii_digit()) {
            self.advance();
        }
        if self.peek() == Some('.') && matches!(self.peek_second(), Some(c) if c.is_ascii_digit()) {
            self.advance();
            while matches!(self.peek(), Some(c) if c.is_ascii_digit()) {
                self.advance();
            }
        }
        TokenKind::Number(String::from(&self.input[start..self.pos]))
    }

    fn read_quoted(&mut self, quote: char) -> TokenKind {
        self.advance();
        let mut value = String::new();
        while let Some(c) = self.peek() {
            self.advance();
            if c == quote {
                if self.peek() == Some(quote) {
                    // doubled quote
                    value.push(quote);
                    self.advance();
                } else {
                    return TokenKind::Str(value);
                }
            } else {
                value.push(c);
            }
        }
        TokenKind::Unterminated(value)
    }
}

/// Tokenizes `input`.
pub fn tokenize(input: &str) -> Vec<Token> {
    Lexer::new(input).tokenize()
}
