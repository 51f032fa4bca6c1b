//! Parser Helper Functions
//!
//! 游标、前瞻和 "期望某个 token" 的辅助方法

use super::{ParseResult, Parser, MAX_NESTING_DEPTH};
use crate::error::SyntaxError;
use crate::token::{Keyword, Operator, Token, TokenKind};

impl<'t> Parser<'t> {
    pub(crate) fn peek(&self) -> Option<&'t Token> {
        self.tokens.get(self.position)
    }

    /// 向前看 n 个 token (n = 0 即当前 token)
    pub(crate) fn peek_ahead(&self, n: usize) -> Option<&'t Token> {
        self.tokens.get(self.position + n)
    }

    pub(crate) fn is_at_end(&self) -> bool {
        self.position >= self.tokens.len()
    }

    /// 消耗当前 token 并返回它
    pub(crate) fn advance(&mut self) -> Option<&'t Token> {
        let token = self.peek()?;
        self.position += 1;
        Some(token)
    }

    pub(crate) fn check(&self, kind: &TokenKind) -> bool {
        self.peek().is_some_and(|token| &token.kind == kind)
    }

    /// 当前 token 匹配时消耗它
    pub(crate) fn match_token(&mut self, kind: &TokenKind) -> bool {
        if self.check(kind) {
            self.position += 1;
            true
        } else {
            false
        }
    }

    pub(crate) fn expect(&mut self, kind: &TokenKind, expected: &str) -> ParseResult<&'t Token> {
        if self.check(kind) {
            if let Some(token) = self.advance() {
                return Ok(token);
            }
        }
        Err(self.unexpected(expected))
    }

    pub(crate) fn expect_keyword(&mut self, keyword: Keyword) -> ParseResult<&'t Token> {
        let expected = format!("'{}'", keyword.as_str());
        self.expect(&TokenKind::Keyword(keyword), &expected)
    }

    pub(crate) fn expect_operator(&mut self, op: Operator) -> ParseResult<&'t Token> {
        let expected = format!("'{}'", op.symbol());
        self.expect(&TokenKind::Operator(op), &expected)
    }

    pub(crate) fn expect_identifier(&mut self) -> ParseResult<String> {
        match self.peek().map(|token| &token.kind) {
            Some(TokenKind::Identifier(name)) => {
                self.position += 1;
                Ok(name.clone())
            }
            _ => Err(self.unexpected("identifier")),
        }
    }

    /// 进入一层括号或函数调用，超过上限时报错
    pub(crate) fn enter_nested(&mut self) -> ParseResult<()> {
        if self.depth >= MAX_NESTING_DEPTH {
            return Err(self.error_here("Expression nested too deeply"));
        }
        self.depth += 1;
        Ok(())
    }

    pub(crate) fn leave_nested(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    /// "Expected X, but found Y"
    pub(crate) fn unexpected(&self, expected: &str) -> SyntaxError {
        let found = match self.peek() {
            Some(token) => token.to_string(),
            None => "end of input".to_string(),
        };
        self.error_here(format!("Expected {}, but found {}", expected, found))
    }

    /// 以当前 token 定位的错误；输入耗尽时定位到最后一个 token 之后
    pub(crate) fn error_here(&self, message: impl Into<String>) -> SyntaxError {
        match self.peek() {
            Some(token) => SyntaxError::new(token.line, token.column, token.span.clone(), message),
            None => {
                let (line, column, offset) = self.end_position();
                SyntaxError::new(line, column, offset..offset, message)
            }
        }
    }

    fn end_position(&self) -> (usize, usize, usize) {
        match self.tokens.last() {
            Some(last) => (last.line, last.end_column(), last.span.end),
            None => (1, 1, 0),
        }
    }
}
