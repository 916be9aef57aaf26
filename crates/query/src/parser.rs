//! Query parser.
//!
//! The statement is tokenized, checked for the two fatal grammar violations
//! (not starting with `SELECT`, containing `JOIN`), and then split into
//! clauses at top-level clause keywords. Each clause is parsed on its own;
//! a `WHERE` body that is not one of the supported shapes becomes
//! `Predicate::Unsupported` instead of an error.

use crate::ast::{OrderBy, Predicate, Projection, Query, SortOrder};
use crate::error::{QueryError, QueryResult};
use crate::lexer::{Lexer, Token, TokenKind};
use alloc::string::String;
use alloc::vec::Vec;
use core::ops::Range;
use core::str::FromStr;
use querymate_core::pattern_match::fold;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Clause {
    From,
    Where,
    OrderBy,
    GroupBy,
    Limit,
}

impl Clause {
    /// Number of keyword tokens introducing the clause.
    fn keyword_len(self) -> usize {
        match self {
            Clause::OrderBy | Clause::GroupBy => 2,
            _ => 1,
        }
    }
}

/// A clause keyword position and the token range of its body.
#[derive(Clone, Debug)]
struct ClauseSpan {
    clause: Clause,
    keyword: usize,
    body: Range<usize>,
}

/// Parser over a single statement.
pub struct Parser<'a> {
    source: &'a str,
    tokens: Vec<Token>,
}

impl<'a> Parser<'a> {
    /// Creates a parser for `source`.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            tokens: Lexer::new(source).tokenize(),
        }
    }

    /// Parses the statement.
    pub fn parse(&self) -> QueryResult<Query> {
        let tokens = &self.tokens;
        if !tokens.first().map_or(false, |t| t.is_keyword("SELECT")) {
            return Err(QueryError::not_select());
        }
        if tokens.iter().any(mentions_join) {
            return Err(QueryError::join_unsupported());
        }

        let mut end = tokens.len();
        while end > 1 && tokens[end - 1].kind == TokenKind::Semicolon {
            end -= 1;
        }

        let clauses = self.split_clauses(end);
        let body_of = |clause: Clause| {
            clauses
                .iter()
                .find(|span| span.clause == clause)
                .map(|span| span.body.clone())
        };

        let select_end = clauses.first().map_or(end, |span| span.keyword);
        let from = body_of(Clause::From);
        let projection = if from.is_some() {
            self.parse_projection(1..select_end)
        } else {
            Projection::Unresolved
        };

        Ok(Query {
            projection,
            table: from.and_then(|body| self.parse_table(body)),
            predicate: body_of(Clause::Where).map(|body| self.parse_predicate(body)),
            order_by: body_of(Clause::OrderBy).and_then(|body| self.parse_order_by(body)),
            limit: body_of(Clause::Limit).and_then(|body| self.parse_limit(body)),
            group_by: body_of(Clause::GroupBy).is_some(),
        })
    }

    /// Finds the first occurrence of each clause keyword outside parentheses
    /// and assigns every clause the tokens up to the next one.
    fn split_clauses(&self, end: usize) -> Vec<ClauseSpan> {
        let mut found: Vec<(Clause, usize)> = Vec::new();
        let mut depth = 0usize;
        let mut i = 1;
        while i < end {
            match self.tokens[i].kind {
                TokenKind::LParen => depth += 1,
                TokenKind::RParen => depth = depth.saturating_sub(1),
                _ if depth == 0 => {
                    if let Some(clause) = self.clause_at(i, end) {
                        if !found.iter().any(|(c, _)| *c == clause) {
                            found.push((clause, i));
                        }
                        i += clause.keyword_len();
                        continue;
                    }
                }
                _ => {}
            }
            i += 1;
        }

        found
            .iter()
            .enumerate()
            .map(|(n, &(clause, keyword))| {
                let body_end = found.get(n + 1).map_or(end, |&(_, next)| next);
                ClauseSpan {
                    clause,
                    keyword,
                    body: keyword + clause.keyword_len()..body_end,
                }
            })
            .collect()
    }

    fn clause_at(&self, i: usize, end: usize) -> Option<Clause> {
        let token = &self.tokens[i];
        let next_is_by = i + 1 < end && self.tokens[i + 1].is_keyword("BY");
        if token.is_keyword("FROM") {
            Some(Clause::From)
        } else if token.is_keyword("WHERE") {
            Some(Clause::Where)
        } else if token.is_keyword("LIMIT") {
            Some(Clause::Limit)
        } else if token.is_keyword("ORDER") && next_is_by {
            Some(Clause::OrderBy)
        } else if token.is_keyword("GROUP") && next_is_by {
            Some(Clause::GroupBy)
        } else {
            None
        }
    }

    /// Returns the source text covered by a token range.
    fn text(&self, range: Range<usize>) -> &'a str {
        if range.is_empty() {
            return "";
        }
        let start = self.tokens[range.start].start;
        let end = self.tokens[range.end - 1].end;
        &self.source[start..end]
    }

    fn parse_projection(&self, range: Range<usize>) -> Projection {
        let mut items = Vec::new();
        let mut item_start = range.start;
        let mut depth = 0usize;
        for i in range.clone() {
            match self.tokens[i].kind {
                TokenKind::LParen => depth += 1,
                TokenKind::RParen => depth = depth.saturating_sub(1),
                TokenKind::Comma if depth == 0 => {
                    items.push(item_start..i);
                    item_start = i + 1;
                }
                _ => {}
            }
        }
        items.push(item_start..range.end);

        let mut saw_item = false;
        let mut names = Vec::new();
        for item in items.into_iter().filter(|item| !item.is_empty()) {
            saw_item = true;
            if item.len() == 1 && self.tokens[item.start].kind == TokenKind::Star {
                continue;
            }
            names.push(fold(self.text(item)));
        }

        if !saw_item {
            Projection::Unresolved
        } else if names.is_empty() {
            Projection::All
        } else {
            Projection::Columns(names)
        }
    }

    fn parse_table(&self, range: Range<usize>) -> Option<String> {
        self.tokens[range]
            .first()
            .and_then(Token::as_word)
            .map(String::from)
    }

    fn parse_predicate(&self, range: Range<usize>) -> Predicate {
        let unsupported = || Predicate::unsupported(self.text(range.clone()));

        match &self.tokens[range.clone()] {
            [Token {
                kind: TokenKind::Word(column),
                ..
            }, Token {
                kind: TokenKind::Eq, ..
            }, Token {
                kind: TokenKind::Str(value),
                ..
            }] if !value.is_empty() => Predicate::equals(column.as_str(), value.as_str()),
            [Token {
                kind: TokenKind::Word(column),
                ..
            }, like, Token {
                kind: TokenKind::Str(pattern),
                ..
            }] if like.is_keyword("LIKE") => match contains_text(pattern) {
                Some(text) => Predicate::like(column.as_str(), text),
                None => unsupported(),
            },
            [Token {
                kind: TokenKind::Word(column),
                ..
            }, keyword, open, inner @ .., close]
                if keyword.is_keyword("IN")
                    && open.kind == TokenKind::LParen
                    && close.kind == TokenKind::RParen
                    && !inner.is_empty()
                    && !inner
                        .iter()
                        .any(|t| matches!(t.kind, TokenKind::LParen | TokenKind::RParen)) =>
            {
                let values = inner.iter().filter_map(|t| match &t.kind {
                    TokenKind::Str(v) => Some(v.as_str()),
                    _ => None,
                });
                Predicate::in_list(column.as_str(), values)
            }
            _ => unsupported(),
        }
    }

    fn parse_order_by(&self, range: Range<usize>) -> Option<OrderBy> {
        let body = &self.tokens[range];
        let column = body.first()?.as_word()?;
        let order = match body.get(1) {
            Some(t) if t.is_keyword("DESC") => SortOrder::Desc,
            _ => SortOrder::Asc,
        };
        Some(OrderBy::new(column, order))
    }

    fn parse_limit(&self, range: Range<usize>) -> Option<usize> {
        match &self.tokens[range].first()?.kind {
            TokenKind::Number(n) => {
                let whole = n.split('.').next().unwrap_or(n);
                // digits only, so the parse fails only on overflow
                Some(whole.parse().unwrap_or(usize::MAX))
            }
            _ => None,
        }
    }
}

/// Returns true for a `JOIN` keyword, or a literal containing the word `join`.
fn mentions_join(token: &Token) -> bool {
    match &token.kind {
        TokenKind::Str(text) | TokenKind::Unterminated(text) => text
            .split(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
            .any(|word| word.eq_ignore_ascii_case("join")),
        _ => token.is_keyword("JOIN"),
    }
}

/// Returns the inner text of a `%text%` pattern.
fn contains_text(pattern: &str) -> Option<&str> {
    pattern
        .strip_prefix('%')?
        .strip_suffix('%')
        .filter(|inner| !inner.is_empty())
}

/// Parses a query string.
pub fn parse(source: &str) -> QueryResult<Query> {
    Parser::new(source).parse()
}

impl FromStr for Query {
    type Err = QueryError;

    fn from_str(s: &str) -> QueryResult<Self> {
        parse(s)
    }
}
