//! Diagnostic - 诊断信息
//!
//! 一条面向用户的诊断：级别、消息、位置，以及可选的注释和修复建议

use crate::level::DiagnosticLevel;
use crate::span::{Location, Span};

/// 修复建议
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestion {
    /// 建议消息
    pub message: String,
    /// 建议的替换内容（如果有）
    pub replacement: Option<String>,
}

impl Suggestion {
    /// 创建只有消息的建议
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            replacement: None,
        }
    }

    /// 附上替换内容
    pub fn with_replacement(mut self, replacement: impl Into<String>) -> Self {
        self.replacement = Some(replacement.into());
        self
    }
}

/// 诊断信息
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// 诊断级别
    pub level: DiagnosticLevel,
    /// 主要消息
    pub message: String,
    /// 行列位置
    pub location: Option<Location>,
    /// 字节范围，用于源码片段标注
    pub span: Option<Span>,
    /// 所属文件
    pub file: Option<String>,
    /// 补充注释
    pub notes: Vec<String>,
    /// 修复建议
    pub suggestions: Vec<Suggestion>,
}

impl Diagnostic {
    /// 创建指定级别的诊断
    pub fn new(level: DiagnosticLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            location: None,
            span: None,
            file: None,
            notes: Vec::new(),
            suggestions: Vec::new(),
        }
    }

    /// 创建错误诊断
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(DiagnosticLevel::Error, message)
    }

    /// 创建警告诊断
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(DiagnosticLevel::Warning, message)
    }

    /// 创建说明诊断
    pub fn note(message: impl Into<String>) -> Self {
        Self::new(DiagnosticLevel::Note, message)
    }

    /// 设置行列位置
    pub fn at(mut self, line: usize, column: usize) -> Self {
        self.location = Some(Location::new(line, column));
        self
    }

    /// 设置字节范围
    pub fn span(mut self, span: Span) -> Self {
        self.span = Some(span);
        self
    }

    /// 设置所属文件
    pub fn with_file(mut self, path: impl Into<String>) -> Self {
        self.file = Some(path.into());
        self
    }

    /// 添加注释
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    /// 添加建议
    pub fn with_suggestion(mut self, suggestion: Suggestion) -> Self {
        self.suggestions.push(suggestion);
        self
    }

    /// 添加简单建议（仅消息）
    pub fn suggest(self, message: impl Into<String>) -> Self {
        self.with_suggestion(Suggestion::new(message))
    }

    /// `file:line:col`，缺哪部分就省略哪部分
    pub fn position(&self) -> Option<String> {
        match (&self.file, self.location) {
            (Some(file), Some(loc)) => Some(format!("{}:{}", file, loc)),
            (Some(file), None) => Some(file.clone()),
            (None, Some(loc)) => Some(loc.to_string()),
            (None, None) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diagnostic_creation() {
        let diag = Diagnostic::error("invalid unit: parsec")
            .at(3, 9)
            .span(20..26)
            .with_note("known units: m, km")
            .suggest("register the unit with --unit");

        assert_eq!(diag.level, DiagnosticLevel::Error);
        assert_eq!(diag.message, "invalid unit: parsec");
        assert_eq!(diag.location, Some(Location::new(3, 9)));
        assert_eq!(diag.span, Some(20..26));
        assert_eq!(diag.notes, vec!["known units: m, km".to_string()]);
        assert_eq!(diag.suggestions.len(), 1);
        assert_eq!(diag.suggestions[0].replacement, None);
    }

    #[test]
    fn test_position() {
        assert_eq!(Diagnostic::error("e").position(), None);
        assert_eq!(
            Diagnostic::error("e").at(1, 2).position().as_deref(),
            Some("1:2")
        );
        assert_eq!(
            Diagnostic::error("e")
                .at(1, 2)
                .with_file("calc.qt")
                .position()
                .as_deref(),
            Some("calc.qt:1:2")
        );
    }

    #[test]
    fn test_replacement() {
        let suggestion = Suggestion::new("add a semicolon").with_replacement(";");
        assert_eq!(suggestion.replacement.as_deref(), Some(";"));
    }
}
