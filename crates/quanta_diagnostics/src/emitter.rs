//! Emitter - 诊断输出器
//!
//! 三种输出方式：
//! - 纯文本 (测试、重定向到文件)
//! - 彩色终端输出
//! - 带源码片段的报告 (ariadne)

use crate::diagnostic::Diagnostic;
use crate::span::char_offset;
use ariadne::{Color, Config, Label, Report, Source};
use colored::*;
use std::io::{self, Write};

/// 诊断输出器
pub struct Emitter {
    /// 是否使用彩色输出
    use_colors: bool,
}

impl Default for Emitter {
    fn default() -> Self {
        Self::new()
    }
}

impl Emitter {
    /// 创建彩色输出器
    pub fn new() -> Self {
        Self { use_colors: true }
    }

    /// 创建纯文本输出器
    pub fn without_colors() -> Self {
        Self { use_colors: false }
    }

    /// 是否使用彩色输出
    pub fn uses_colors(&self) -> bool {
        self.use_colors
    }

    /// 输出到 stderr
    pub fn emit(&self, diagnostic: &Diagnostic) {
        let _ = self.render(diagnostic, &mut io::stderr().lock());
    }

    /// 输出所有诊断到 stderr
    pub fn emit_all(&self, diagnostics: &[Diagnostic]) {
        let _ = self.render_all(diagnostics, &mut io::stderr().lock());
    }

    /// 带源码片段输出到 stderr
    pub fn emit_with_source(&self, diagnostic: &Diagnostic, source: &str) {
        let _ = self.render_with_source(diagnostic, source, &mut io::stderr().lock());
    }

    /// 逐条输出，每条之后空一行
    pub fn render_all(&self, diagnostics: &[Diagnostic], out: &mut impl Write) -> io::Result<()> {
        for diagnostic in diagnostics {
            self.render(diagnostic, out)?;
            writeln!(out)?;
        }
        Ok(())
    }

    /// 输出单条诊断到任意 writer
    pub fn render(&self, diagnostic: &Diagnostic, out: &mut impl Write) -> io::Result<()> {
        if self.use_colors {
            self.render_colored(diagnostic, out)
        } else {
            self.render_plain(diagnostic, out)
        }
    }

    fn render_colored(&self, diagnostic: &Diagnostic, out: &mut impl Write) -> io::Result<()> {
        writeln!(
            out,
            "{}: {}",
            diagnostic.level.colored_name(),
            diagnostic.message.bold()
        )?;

        if let Some(position) = diagnostic.position() {
            writeln!(out, "  {} {}", "-->".blue().bold(), position)?;
        }

        for note in &diagnostic.notes {
            writeln!(
                out,
                "  {} {}",
                "=".blue().bold(),
                format!("note: {}", note).bright_black()
            )?;
        }

        for suggestion in &diagnostic.suggestions {
            writeln!(
                out,
                "  {} {}",
                "=".green().bold(),
                format!("help: {}", suggestion.message).green()
            )?;
            if let Some(replacement) = &suggestion.replacement {
                writeln!(out, "        try: {}", replacement.green().italic())?;
            }
        }
        Ok(())
    }

    fn render_plain(&self, diagnostic: &Diagnostic, out: &mut impl Write) -> io::Result<()> {
        writeln!(out, "{}: {}", diagnostic.level, diagnostic.message)?;

        if let Some(position) = diagnostic.position() {
            writeln!(out, "  --> {}", position)?;
        }

        for note in &diagnostic.notes {
            writeln!(out, "  = note: {}", note)?;
        }

        for suggestion in &diagnostic.suggestions {
            writeln!(out, "  = help: {}", suggestion.message)?;
            if let Some(replacement) = &suggestion.replacement {
                writeln!(out, "        try: {}", replacement)?;
            }
        }
        Ok(())
    }

    /// 带源码片段的报告；没有 span 时退回普通输出
    pub fn render_with_source(
        &self,
        diagnostic: &Diagnostic,
        source: &str,
        out: &mut impl Write,
    ) -> io::Result<()> {
        let Some(span) = &diagnostic.span else {
            return self.render(diagnostic, out);
        };

        let len = source.chars().count();
        if len == 0 {
            return self.render(diagnostic, out);
        }

        // 标签至少占一个字符；输入末尾的位置标到最后一个字符上
        let start = char_offset(source, span.start).min(len - 1);
        let end = char_offset(source, span.end).max(start + 1).min(len);

        let mut label = Label::new(start..end).with_message(&diagnostic.message);
        if self.use_colors {
            label = label.with_color(Color::Red);
        }

        let mut report = Report::build(diagnostic.level.report_kind(), (), start)
            .with_config(Config::default().with_color(self.use_colors))
            .with_message(&diagnostic.message)
            .with_label(label);

        for note in &diagnostic.notes {
            report = report.with_note(note);
        }
        for suggestion in &diagnostic.suggestions {
            report = report.with_help(&suggestion.message);
        }

        report.finish().write(Source::from(source), out)
    }
}
