//! Quanta Frontend Driver
//!
//! 驱动模块，串联词法分析和语法分析：
//! `source -> tokens -> Program`

pub mod error;

pub use error::{FrontendError, FrontendResult};

use quanta_syntax::{
    ast_dump, parse_with_options, token_dump, tokenize, ParserOptions, Program, SyntaxError,
    Token, Vocabulary,
};

/// 前端配置
#[derive(Debug, Clone, Default)]
pub struct FrontendConfig {
    pub vocabulary: Vocabulary,
    pub parser: ParserOptions,
}

/// 前端输出
#[derive(Debug, Clone)]
pub struct FrontendOutput {
    /// 完整 token 序列 (以 EndOfInput 结尾)
    pub tokens: Vec<Token>,
    /// 成功解析的语句
    pub program: Program,
    /// 恢复过程中收集的语法错误
    pub syntax_errors: Vec<SyntaxError>,
}

impl FrontendOutput {
    pub fn is_clean(&self) -> bool {
        self.syntax_errors.is_empty()
    }

    pub fn token_dump(&self) -> String {
        token_dump(&self.tokens)
    }

    pub fn ast_dump(&self) -> String {
        ast_dump(&self.program)
    }
}

/// 只做词法分析
pub fn tokenize_source(source: &str, config: &FrontendConfig) -> FrontendResult<Vec<Token>> {
    Ok(tokenize(source, &config.vocabulary)?)
}

/// 词法 + 语法分析，语法错误不算失败
///
/// 只有词法错误返回 `Err`；语法错误和部分程序一起放在输出里。
pub fn analyze_recovering(source: &str, config: &FrontendConfig) -> FrontendResult<FrontendOutput> {
    let tokens = tokenize_source(source, config)?;
    let parsed = parse_with_options(&tokens, config.parser);

    Ok(FrontendOutput {
        tokens,
        program: parsed.program,
        syntax_errors: parsed.errors,
    })
}

/// 词法 + 语法分析，任何错误都返回 `Err`
///
/// # Example
/// ```
/// use quanta_driver::{analyze, FrontendConfig};
///
/// let output = analyze("let x = 5 + 3;", &FrontendConfig::default()).unwrap();
/// assert_eq!(output.program.statements.len(), 1);
/// assert!(analyze("let x = 5", &FrontendConfig::default()).is_err());
/// ```
pub fn analyze(source: &str, config: &FrontendConfig) -> FrontendResult<FrontendOutput> {
    let output = analyze_recovering(source, config)?;
    if output.is_clean() {
        Ok(output)
    } else {
        Err(FrontendError::Syntax(output.syntax_errors))
    }
}

/// 读取源文件；源码要留给诊断输出源码片段
pub fn read_source(path: &str) -> FrontendResult<String> {
    Ok(std::fs::read_to_string(path)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use quanta_syntax::ast::Stmt;

    #[test]
    fn test_analyze_simple() {
        let output = analyze("print 1;", &FrontendConfig::default()).unwrap();
        assert_eq!(output.tokens.len(), 4);
        assert_eq!(output.program.statements.len(), 1);
        assert!(output.is_clean());
    }

    #[test]
    fn test_lexical_error_has_no_output() {
        match analyze_recovering("let a = 1 $", &FrontendConfig::default()) {
            Err(FrontendError::Lexical(err)) => assert!(err.message.contains("invalid character")),
            other => panic!("Expected lexical error, got {:?}", other),
        }
    }

    #[test]
    fn test_recovering_keeps_partial_program() {
        let output =
            analyze_recovering("let = ;\nprint 1;", &FrontendConfig::default()).unwrap();
        assert_eq!(output.syntax_errors.len(), 1);
        assert!(matches!(output.program.statements[..], [Stmt::Print(_)]));
    }

    #[test]
    fn test_analyze_rejects_syntax_errors() {
        match analyze("print 1; print", &FrontendConfig::default()) {
            Err(FrontendError::Syntax(errors)) => assert_eq!(errors.len(), 1),
            other => panic!("Expected syntax errors, got {:?}", other),
        }
    }

    #[test]
    fn test_config_drives_lexer_and_parser() {
        let config = FrontendConfig {
            vocabulary: Vocabulary::standard().with_unit("parsec"),
            parser: ParserOptions {
                allow_empty_statements: false,
            },
        };
        let output = analyze_recovering("print 3parsec;;", &config).unwrap();
        assert_eq!(output.program.statements.len(), 1);
        assert_eq!(output.syntax_errors[0].message, "Empty statement");
    }

    #[test]
    fn test_missing_file() {
        let result = read_source("/definitely/not/here.qt");
        assert!(matches!(result, Err(FrontendError::Io(_))));
    }
}
