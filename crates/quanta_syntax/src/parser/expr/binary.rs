use crate::ast::{BinaryOp, Expr};
use crate::parser::{ParseResult, Parser};
use crate::token::{Operator, TokenKind};

impl<'t> Parser<'t> {
    // Sum: +, -
    pub(super) fn parse_additive(&mut self) -> ParseResult<Expr> {
        let mut lhs = self.parse_multiplicative()?;
        while let Some(op) = self.match_binary_op(&[Operator::Plus, Operator::Minus]) {
            let rhs = self.parse_multiplicative()?;
            lhs = Expr::binary(lhs, op, rhs);
        }
        Ok(lhs)
    }

    // Product: *, /
    fn parse_multiplicative(&mut self) -> ParseResult<Expr> {
        let mut lhs = self.parse_factor()?;
        while let Some(op) = self.match_binary_op(&[Operator::Star, Operator::Slash]) {
            let rhs = self.parse_factor()?;
            lhs = Expr::binary(lhs, op, rhs);
        }
        Ok(lhs)
    }

    fn match_binary_op(&mut self, accepted: &[Operator]) -> Option<BinaryOp> {
        let op = match self.peek()?.kind {
            TokenKind::Operator(op) if accepted.contains(&op) => op,
            _ => return None,
        };
        let binary = match op {
            Operator::Plus => BinaryOp::Add,
            Operator::Minus => BinaryOp::Sub,
            Operator::Star => BinaryOp::Mul,
            Operator::Slash => BinaryOp::Div,
            Operator::Assign => return None,
        };
        self.advance();
        Some(binary)
    }
}
