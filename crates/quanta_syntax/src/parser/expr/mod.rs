//! Expression Parser
//!
//! 表达式解析：括号、数字、带单位数值、变量和函数调用；
//! 二元运算的优先级在 `binary` 中处理。

mod binary;

use super::{ParseResult, Parser};
use crate::ast::Expr;
use crate::token::TokenKind;

impl<'t> Parser<'t> {
    /// 解析表达式 (公共入口)
    pub(crate) fn parse_expr(&mut self) -> ParseResult<Expr> {
        self.parse_additive()
    }

    fn parse_factor(&mut self) -> ParseResult<Expr> {
        let Some(token) = self.peek() else {
            return Err(self.unexpected("an expression"));
        };

        match &token.kind {
            TokenKind::LParen => {
                self.enter_nested()?;
                self.advance();
                let expr = self.parse_expr()?;
                self.expect(&TokenKind::RParen, "')'")?;
                self.leave_nested();
                Ok(expr)
            }
            TokenKind::Number(number) => {
                self.advance();
                Ok(Expr::Literal(*number))
            }
            TokenKind::UnitValue { value, unit } => {
                self.advance();
                Ok(Expr::UnitValue {
                    value: *value,
                    unit: unit.clone(),
                })
            }
            TokenKind::Identifier(name) => {
                // 只有紧跟 '(' 时才是函数调用
                let is_call = self
                    .peek_ahead(1)
                    .is_some_and(|next| next.kind == TokenKind::LParen);
                if is_call {
                    self.parse_call(name.clone())
                } else {
                    self.advance();
                    Ok(Expr::Variable(name.clone()))
                }
            }
            TokenKind::Function(name) => self.parse_call(name.clone()),
            _ => Err(self.unexpected("an expression")),
        }
    }

    // name ( arg, ... )，参数列表可以为空
    fn parse_call(&mut self, name: String) -> ParseResult<Expr> {
        self.enter_nested()?;
        self.advance();
        self.expect(&TokenKind::LParen, "'('")?;

        let mut args = Vec::new();
        if !self.check(&TokenKind::RParen) {
            loop {
                args.push(self.parse_expr()?);
                if !self.match_token(&TokenKind::Comma) {
                    break;
                }
            }
        }

        self.expect(&TokenKind::RParen, "')'")?;
        self.leave_nested();
        Ok(Expr::Call { name, args })
    }
}
