//! Frontend Errors
//!
//! 驱动层的错误类型，集成统一诊断系统

use quanta_diagnostics::{Diagnostic, DiagnosticSink, Emitter};
use quanta_syntax::{LexicalError, SyntaxError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FrontendError {
    /// 词法错误 (扫描立即终止)
    #[error("{0}")]
    Lexical(#[from] LexicalError),

    /// 语法错误（可能有多个）
    #[error("Syntax errors:\n{}", format_syntax_errors(.0))]
    Syntax(Vec<SyntaxError>),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl FrontendError {
    /// 转换为诊断列表
    pub fn to_diagnostics(&self) -> Vec<Diagnostic> {
        match self {
            FrontendError::Lexical(err) => vec![lexical_diagnostic(err)],
            FrontendError::Syntax(errors) => errors.iter().map(syntax_diagnostic).collect(),
            FrontendError::Io(err) => vec![Diagnostic::error(format!("IO error: {}", err))],
        }
    }

    /// 收集到 DiagnosticSink，可选地附上文件名
    pub fn collect_to_sink(&self, sink: &mut DiagnosticSink, file_path: Option<&str>) {
        for diag in self.to_diagnostics() {
            match file_path {
                Some(path) => sink.add(diag.with_file(path)),
                None => sink.add(diag),
            }
        }
    }

    /// 使用统一诊断系统输出错误；有源码时带上源码片段
    pub fn emit(&self, emitter: &Emitter, file_path: Option<&str>, source: Option<&str>) {
        let mut sink = DiagnosticSink::new();
        self.collect_to_sink(&mut sink, file_path);

        match source {
            Some(src) => {
                for diag in sink.diagnostics() {
                    emitter.emit_with_source(diag, src);
                }
            }
            None => emitter.emit_all(sink.diagnostics()),
        }
    }
}

pub fn lexical_diagnostic(err: &LexicalError) -> Diagnostic {
    let diag = Diagnostic::error(format!("lexical error: {}", err.message))
        .at(err.line, err.column)
        .span(err.span.clone())
        .with_note("tokenization stops at the first lexical error");

    if err.message.starts_with("invalid unit") {
        diag.suggest("register the unit in the vocabulary (quantac --unit NAME)")
    } else {
        diag
    }
}

pub fn syntax_diagnostic(err: &SyntaxError) -> Diagnostic {
    let diag = Diagnostic::error(format!("syntax error: {}", err.message))
        .at(err.line, err.column)
        .span(err.span.clone());

    if err.message.starts_with("Expected ';'") {
        diag.with_suggestion(
            quanta_diagnostics::Suggestion::new("terminate the statement with ';'")
                .with_replacement(";"),
        )
    } else {
        diag
    }
}

fn format_syntax_errors(errors: &[SyntaxError]) -> String {
    errors
        .iter()
        .enumerate()
        .map(|(i, e)| format!("  {}. {}", i + 1, e))
        .collect::<Vec<_>>()
        .join("\n")
}

pub type FrontendResult<T> = Result<T, FrontendError>;
