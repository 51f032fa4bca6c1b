//! 诊断用的文本输出：token dump、AST dump 和源码重建

use crate::ast::{AstPrinter, Program};
use crate::token::{format_float, Token, TokenKind};
use std::fmt::Write;

/// 每个 token 一行：`<KIND, VALUE, [Ln: L, Col: C]>`
pub fn token_dump(tokens: &[Token]) -> String {
    let mut out = String::new();
    for token in tokens {
        // 写入 String 不会失败
        let _ = writeln!(
            out,
            "<{}, {}, [Ln: {}, Col: {}]>",
            token.kind.name(),
            dump_value(&token.kind),
            token.line,
            token.column
        );
    }
    out
}

fn dump_value(kind: &TokenKind) -> String {
    match kind {
        TokenKind::UnitValue { value, unit } => format!("({}, {})", format_float(*value), unit),
        TokenKind::EndOfInput => "None".to_string(),
        other => other.lexeme(),
    }
}

pub fn ast_dump(program: &Program) -> String {
    AstPrinter::print(program)
}

/// 用 token 的拼写重新拼出源码 (空格分隔)
///
/// 重新扫描并解析结果，得到的 AST 与原来的形状一致。
pub fn render_source(tokens: &[Token]) -> String {
    tokens
        .iter()
        .filter(|token| !token.is_eof())
        .map(|token| token.kind.lexeme())
        .collect::<Vec<_>>()
        .join(" ")
}
