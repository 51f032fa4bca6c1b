//! 前端错误类型
//!
//! 词法错误终止整个扫描；语法错误按语句收集，可以有多个。

use crate::token::Span;
use thiserror::Error;

/// 词法错误，扫描立即终止
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Lexical error at line {line}, column {column}: {message}")]
pub struct LexicalError {
    pub line: usize,
    pub column: usize,
    pub span: Span,
    pub message: String,
}

impl LexicalError {
    pub fn new(line: usize, column: usize, span: Span, message: impl Into<String>) -> Self {
        Self {
            line,
            column,
            span,
            message: message.into(),
        }
    }
}

/// 语法错误，在语句边界恢复
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Parsing error at line {line}, column {column}: {message}")]
pub struct SyntaxError {
    pub line: usize,
    pub column: usize,
    pub span: Span,
    pub message: String,
}

impl SyntaxError {
    pub fn new(line: usize, column: usize, span: Span, message: impl Into<String>) -> Self {
        Self {
            line,
            column,
            span,
            message: message.into(),
        }
    }
}
