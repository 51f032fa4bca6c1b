//! DiagnosticSink - 诊断收集器

use crate::diagnostic::Diagnostic;
use crate::level::DiagnosticLevel;

/// 诊断收集器，按加入顺序保存
#[derive(Debug, Default)]
pub struct DiagnosticSink {
    /// 已收集的诊断
    diagnostics: Vec<Diagnostic>,
}

impl DiagnosticSink {
    /// 创建空的收集器
    pub fn new() -> Self {
        Self::default()
    }

    /// 添加一条诊断
    pub fn add(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    /// 批量添加
    pub fn extend(&mut self, diagnostics: impl IntoIterator<Item = Diagnostic>) {
        self.diagnostics.extend(diagnostics);
    }

    /// 添加只有消息的错误
    pub fn error(&mut self, message: impl Into<String>) {
        self.add(Diagnostic::error(message));
    }

    /// 添加只有消息的警告
    pub fn warning(&mut self, message: impl Into<String>) {
        self.add(Diagnostic::warning(message));
    }

    /// 是否有错误级别的诊断
    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(|d| d.level.is_error())
    }

    /// 获取所有诊断
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// 取出所有诊断
    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
    }

    /// 错误数量
    pub fn error_count(&self) -> usize {
        self.count(DiagnosticLevel::Error)
    }

    /// 警告数量
    pub fn warning_count(&self) -> usize {
        self.count(DiagnosticLevel::Warning)
    }

    fn count(&self, level: DiagnosticLevel) -> usize {
        self.diagnostics.iter().filter(|d| d.level == level).count()
    }

    /// 诊断总数
    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    /// 是否为空
    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sink_creation() {
        let sink = DiagnosticSink::new();
        assert!(!sink.has_errors());
        assert!(sink.is_empty());
    }

    #[test]
    fn test_counts() {
        let mut sink = DiagnosticSink::new();
        sink.error("e1");
        sink.warning("w1");
        sink.extend(vec![Diagnostic::error("e2"), Diagnostic::note("n1")]);

        assert!(sink.has_errors());
        assert_eq!(sink.error_count(), 2);
        assert_eq!(sink.warning_count(), 1);
        assert_eq!(sink.len(), 4);
        assert_eq!(sink.into_diagnostics()[2].message, "e2");
    }

    #[test]
    fn test_warnings_only() {
        let mut sink = DiagnosticSink::new();
        sink.warning("w");
        assert!(!sink.has_errors());
    }
}
