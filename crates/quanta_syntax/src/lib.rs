//! Quanta Syntax
//!
//! 单位计算器 DSL 的前端：词法分析 + 递归下降语法分析。
//!
//! ```rust
//! use quanta_syntax::{parse, tokenize, Vocabulary};
//!
//! let tokens = tokenize("let d = 5m + 6km;", &Vocabulary::standard()).unwrap();
//! let output = parse(&tokens);
//! assert!(output.errors.is_empty());
//! assert_eq!(output.program.statements.len(), 1);
//! ```

pub mod ast;
pub mod dump;
pub mod error;
pub mod lexer;
pub mod parser;
pub mod token;
pub mod vocab;

pub use ast::Program;
pub use dump::{ast_dump, render_source, token_dump};
pub use error::{LexicalError, SyntaxError};
pub use lexer::{tokenize, Lexer};
pub use parser::{parse, parse_with_options, ParseOutput, Parser, ParserOptions};
pub use token::{Keyword, Number, Operator, Span, Token, TokenKind};
pub use vocab::Vocabulary;
