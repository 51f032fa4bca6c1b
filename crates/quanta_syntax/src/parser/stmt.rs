//! Statement Parser
//!
//! 语句解析：let 声明、convert、print、表达式语句

use super::{ParseResult, Parser};
use crate::ast::Stmt;
use crate::token::{Keyword, Operator, TokenKind};

impl<'t> Parser<'t> {
    /// 按首个 token 分派语句
    pub(crate) fn parse_stmt(&mut self) -> ParseResult<Stmt> {
        match self.peek().map(|token| &token.kind) {
            Some(TokenKind::Keyword(Keyword::Let)) => self.parse_var_decl(),
            Some(TokenKind::Keyword(Keyword::Convert)) => self.parse_convert(),
            Some(TokenKind::Keyword(Keyword::Print)) => self.parse_print(),
            // 兜底：表达式语句
            _ => Ok(Stmt::Expression(self.parse_expr()?)),
        }
    }

    // let x = expr
    fn parse_var_decl(&mut self) -> ParseResult<Stmt> {
        self.expect_keyword(Keyword::Let)?;
        let name = self.expect_identifier()?;
        self.expect_operator(Operator::Assign)?;
        let value = self.parse_expr()?;
        Ok(Stmt::VarDecl { name, value })
    }

    // convert ( expr ) to unit
    fn parse_convert(&mut self) -> ParseResult<Stmt> {
        self.expect_keyword(Keyword::Convert)?;
        self.expect(&TokenKind::LParen, "'('")?;
        let expr = self.parse_expr()?;
        self.expect(&TokenKind::RParen, "')'")?;
        self.expect_keyword(Keyword::To)?;
        let target_unit = self.expect_identifier()?;
        Ok(Stmt::Convert { expr, target_unit })
    }

    // print expr
    fn parse_print(&mut self) -> ParseResult<Stmt> {
        self.expect_keyword(Keyword::Print)?;
        let expr = self.parse_expr()?;
        Ok(Stmt::Print(expr))
    }
}
