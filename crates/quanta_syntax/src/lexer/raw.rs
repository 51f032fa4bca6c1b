//! 原始扫描层
//!
//! 由 logos 生成的状态机负责字符分类、跳过空白和追踪行号；
//! 关键字/函数/单位的归类留给上层按 Vocabulary 处理。

use crate::token::Number;
use logos::{Lexer, Logos, Skip};

/// 扫描层错误种类
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RawError {
    /// 不属于任何字符类
    #[default]
    InvalidCharacter,
    /// 以 '.' 结尾、含多个 '.' 或整数溢出
    InvalidNumber,
}

/// 行号追踪 (logos extras)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineTracker {
    pub line: usize,
    /// 当前行首的字节偏移
    pub line_start: usize,
}

impl Default for LineTracker {
    fn default() -> Self {
        Self {
            line: 1,
            line_start: 0,
        }
    }
}

#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(skip r"[ \t\r\f]+")]
#[logos(extras = LineTracker)]
#[logos(error = RawError)]
pub enum RawToken {
    #[token("\n", newline)]
    Newline,

    #[regex(r"[0-9.]+", number)]
    Number(Number),

    // 关键字、函数名、标识符和单位后缀共用同一个字符类
    #[regex(r"[A-Za-z_][A-Za-z0-9_]*")]
    Word,

    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
    #[token("=")]
    Assign,

    #[token(";")]
    Semicolon,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token(",")]
    Comma,
}

fn newline(lex: &mut Lexer<RawToken>) -> Skip {
    lex.extras.line += 1;
    lex.extras.line_start = lex.span().end;
    Skip
}

fn number(lex: &mut Lexer<RawToken>) -> Result<Number, RawError> {
    let text = lex.slice();
    if text.ends_with('.') || text.matches('.').count() > 1 {
        return Err(RawError::InvalidNumber);
    }

    if text.contains('.') {
        text.parse::<f64>()
            .map(Number::Float)
            .map_err(|_| RawError::InvalidNumber)
    } else {
        text.parse::<i64>()
            .map(Number::Int)
            .map_err(|_| RawError::InvalidNumber)
    }
}
