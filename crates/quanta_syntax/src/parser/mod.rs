//! Parser Module
//!
//! 手写递归下降解析器，按文件拆分 `impl Parser`：
//! - `helpers`: 游标移动、前瞻、期望 token
//! - `stmt`: let / convert / print / 表达式语句
//! - `expr`: 因子、函数调用和二元运算优先级
//!
//! 语法错误在语句边界恢复：记录错误，丢弃 token 直到下一个 ';'
//! (连同 ';' 一起)，然后继续解析下一条语句。

mod expr;
mod helpers;
mod stmt;

use crate::ast::{Program, Stmt};
use crate::error::SyntaxError;
use crate::token::{Token, TokenKind};

pub type ParseResult<T> = Result<T, SyntaxError>;

/// 括号和函数调用的最大嵌套层数
pub const MAX_NESTING_DEPTH: usize = 256;

/// 解析选项
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParserOptions {
    /// 为 true 时静默跳过空语句 (`;;`)，否则每个多余的 ';' 报一个错误
    pub allow_empty_statements: bool,
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self {
            allow_empty_statements: true,
        }
    }
}

/// 解析结果：成功解析的语句 + 收集到的语法错误
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ParseOutput {
    pub program: Program,
    pub errors: Vec<SyntaxError>,
}

impl ParseOutput {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// 有任何语法错误时丢弃部分程序
    pub fn into_result(self) -> Result<Program, Vec<SyntaxError>> {
        if self.errors.is_empty() {
            Ok(self.program)
        } else {
            Err(self.errors)
        }
    }
}

/// 主入口：解析整个 token 序列 (末尾的 EndOfInput 可有可无)
pub fn parse(tokens: &[Token]) -> ParseOutput {
    Parser::new(tokens).parse()
}

pub fn parse_with_options(tokens: &[Token], options: ParserOptions) -> ParseOutput {
    Parser::new(tokens).with_options(options).parse()
}

pub struct Parser<'t> {
    tokens: &'t [Token],
    position: usize,
    options: ParserOptions,
    /// 当前表达式的嵌套层数
    depth: usize,
}

impl<'t> Parser<'t> {
    pub fn new(tokens: &'t [Token]) -> Self {
        let tokens = match tokens.split_last() {
            Some((last, rest)) if last.is_eof() => rest,
            _ => tokens,
        };

        Self {
            tokens,
            position: 0,
            options: ParserOptions::default(),
            depth: 0,
        }
    }

    pub fn with_options(mut self, options: ParserOptions) -> Self {
        self.options = options;
        self
    }

    pub fn parse(mut self) -> ParseOutput {
        let mut statements = Vec::new();
        let mut errors = Vec::new();

        while !self.is_at_end() {
            if self.check(&TokenKind::Semicolon) {
                if !self.options.allow_empty_statements {
                    errors.push(self.error_here("Empty statement"));
                }
                self.advance();
                continue;
            }

            match self.parse_terminated_stmt() {
                Ok(stmt) => statements.push(stmt),
                Err(err) => {
                    errors.push(err);
                    self.synchronize();
                }
            }
        }

        ParseOutput {
            program: Program::new(statements),
            errors,
        }
    }

    /// 语句 + 结尾的 ';'
    fn parse_terminated_stmt(&mut self) -> ParseResult<Stmt> {
        // 上一条语句出错时可能没有退出嵌套
        self.depth = 0;
        let stmt = self.parse_stmt()?;
        self.expect(&TokenKind::Semicolon, "';'")?;
        Ok(stmt)
    }

    /// 错误恢复：跳到下一个 ';' 之后
    fn synchronize(&mut self) {
        while let Some(token) = self.advance() {
            if token.kind == TokenKind::Semicolon {
                break;
            }
        }
    }
}
