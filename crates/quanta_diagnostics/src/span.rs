//! Span / Location - 源码位置信息

use std::fmt;

/// 源码位置范围 (字节偏移)
pub type Span = std::ops::Range<usize>;

/// 人类可读的位置 (行、列都从 1 开始)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Location {
    pub line: usize,
    pub column: usize,
}

impl Location {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// 字节偏移转字符偏移 (ariadne 按字符计数)
pub fn char_offset(source: &str, byte_offset: usize) -> usize {
    let clamped = byte_offset.min(source.len());
    match source.get(..clamped) {
        Some(prefix) => prefix.chars().count(),
        None => source.chars().count(),
    }
}
