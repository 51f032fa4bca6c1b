//! Quanta Diagnostics
//!
//! 统一的诊断系统，把词法/语法错误整理成带位置的诊断并输出。
//!
//! # 核心类型
//!
//! - [`Diagnostic`] - 诊断信息主体
//! - [`DiagnosticLevel`] - 诊断级别（Error/Warning/Note）
//! - [`DiagnosticSink`] - 诊断收集器
//! - [`Emitter`] - 诊断输出器（纯文本、彩色、带源码片段）
//! - [`Location`] / [`Span`] - 源码位置信息
//!
//! # 示例
//!
//! ```rust
//! use quanta_diagnostics::{Diagnostic, DiagnosticSink, Emitter};
//!
//! let mut sink = DiagnosticSink::new();
//!
//! sink.add(
//!     Diagnostic::error("Expected ';', but found end of input")
//!         .at(1, 10)
//!         .span(9..9)
//!         .suggest("terminate the statement with ';'"),
//! );
//!
//! if sink.has_errors() {
//!     let mut out = Vec::new();
//!     Emitter::without_colors()
//!         .render_all(sink.diagnostics(), &mut out)
//!         .unwrap();
//!     assert!(String::from_utf8(out).unwrap().contains("1:10"));
//! }
//! ```

pub mod diagnostic;
pub mod emitter;
pub mod level;
pub mod sink;
pub mod span;

// 重新导出核心类型
pub use diagnostic::{Diagnostic, Suggestion};
pub use emitter::Emitter;
pub use level::DiagnosticLevel;
pub use sink::DiagnosticSink;
pub use span::{Location, Span};
