//! Token - 词法单元
//!
//! Lexer 产出、Parser 只读消费的带位置词法单元

use std::fmt;

/// 源码位置范围 (字节偏移)
pub type Span = std::ops::Range<usize>;

/// 数值字面量：整数或浮点数
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    Int(i64),
    Float(f64),
}

impl Number {
    pub fn as_f64(self) -> f64 {
        match self {
            Number::Int(n) => n as f64,
            Number::Float(f) => f,
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Int(n) => write!(f, "{}", n),
            Number::Float(x) => f.write_str(&format_float(*x)),
        }
    }
}

/// 浮点数总是带小数点输出，保证重新扫描后仍然是浮点数
pub fn format_float(value: f64) -> String {
    let text = value.to_string();
    if text.contains('.') {
        text
    } else {
        format!("{}.0", text)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Keyword {
    Let,
    Convert,
    To,
    In,
    Print,
}

impl Keyword {
    /// 默认拼写
    pub fn as_str(&self) -> &'static str {
        match self {
            Keyword::Let => "let",
            Keyword::Convert => "convert",
            Keyword::To => "to",
            Keyword::In => "in",
            Keyword::Print => "print",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Plus,
    Minus,
    Star,
    Slash,
    Assign,
}

impl Operator {
    pub fn symbol(&self) -> char {
        match self {
            Operator::Plus => '+',
            Operator::Minus => '-',
            Operator::Star => '*',
            Operator::Slash => '/',
            Operator::Assign => '=',
        }
    }
}

/// 词法单元的种类与负载
///
/// 每个种类只携带自己需要的数据。
#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    Number(Number),
    UnitValue { value: f64, unit: String },
    Keyword(Keyword),
    Identifier(String),
    /// 命中预定义函数表的标识符
    Function(String),
    Operator(Operator),
    Semicolon,
    LParen,
    RParen,
    Comma,
    EndOfInput,
}

impl TokenKind {
    /// 诊断和 token dump 中使用的种类名
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::Number(_) => "NUMBER",
            TokenKind::UnitValue { .. } => "UNIT_VALUE",
            TokenKind::Keyword(_) => "KEYWORD",
            TokenKind::Identifier(_) => "IDENTIFIER",
            TokenKind::Function(_) => "FUNCTION",
            TokenKind::Operator(_) => "OPERATOR",
            TokenKind::Semicolon => "SEMICOLON",
            TokenKind::LParen => "LPAREN",
            TokenKind::RParen => "RPAREN",
            TokenKind::Comma => "COMMA",
            TokenKind::EndOfInput => "EOF",
        }
    }

    /// 源码拼写；EndOfInput 为空串
    pub fn lexeme(&self) -> String {
        match self {
            TokenKind::Number(n) => n.to_string(),
            TokenKind::UnitValue { value, unit } => format!("{}{}", format_float(*value), unit),
            TokenKind::Keyword(kw) => kw.as_str().to_string(),
            TokenKind::Identifier(name) | TokenKind::Function(name) => name.clone(),
            TokenKind::Operator(op) => op.symbol().to_string(),
            TokenKind::Semicolon => ";".to_string(),
            TokenKind::LParen => "(".to_string(),
            TokenKind::RParen => ")".to_string(),
            TokenKind::Comma => ",".to_string(),
            TokenKind::EndOfInput => String::new(),
        }
    }
}

/// 带位置信息的词法单元，创建后不再修改
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    /// 行号 (从 1 开始)
    pub line: usize,
    /// 列号 (从 1 开始，按字符计)
    pub column: usize,
    /// 源码中的字节范围
    pub span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, line: usize, column: usize, span: Span) -> Self {
        Self {
            kind,
            line,
            column,
            span,
        }
    }

    pub fn is_eof(&self) -> bool {
        matches!(self.kind, TokenKind::EndOfInput)
    }

    /// 紧跟在该 token 之后的列号
    pub fn end_column(&self) -> usize {
        self.column + self.span.len()
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            TokenKind::EndOfInput => write!(f, "end of input"),
            kind => write!(f, "'{}' ({})", kind.lexeme(), kind.name()),
        }
    }
}
