//! Lexer - 词法分析
//!
//! 两层结构：
//! - `raw`: logos 生成的扫描器，产出原始词素和位置
//! - 本模块: 按 [`Vocabulary`] 归类词素、识别单位后缀，产出 [`Token`] 序列
//!
//! 任何词法错误都会立即终止扫描，调用方要么拿到完整的 token 序列，
//! 要么拿到一个 [`LexicalError`]。

mod raw;

use crate::error::LexicalError;
use crate::token::{Number, Operator, Span, Token, TokenKind};
use crate::vocab::Vocabulary;
use logos::Logos;
use raw::{RawError, RawToken};

/// 带位置的原始词素
#[derive(Debug, Clone)]
struct Lexeme {
    raw: RawToken,
    span: Span,
    line: usize,
    column: usize,
}

/// 扫描源码并产出以 `EndOfInput` 结尾的 token 序列
pub fn tokenize(source: &str, vocab: &Vocabulary) -> Result<Vec<Token>, LexicalError> {
    Lexer::new(source, vocab).tokenize()
}

pub struct Lexer<'src, 'v> {
    source: &'src str,
    vocab: &'v Vocabulary,
}

impl<'src, 'v> Lexer<'src, 'v> {
    pub fn new(source: &'src str, vocab: &'v Vocabulary) -> Self {
        Self { source, vocab }
    }

    pub fn tokenize(&self) -> Result<Vec<Token>, LexicalError> {
        let (lexemes, eof) = self.scan()?;

        let mut tokens = Vec::with_capacity(lexemes.len() + 1);
        let mut index = 0;
        while index < lexemes.len() {
            let (token, consumed) = self.classify(&lexemes, index)?;
            tokens.push(token);
            index += consumed;
        }
        tokens.push(eof);

        Ok(tokens)
    }

    /// 第一遍：logos 扫描，顺带算好行列号和 EOF 位置
    fn scan(&self) -> Result<(Vec<Lexeme>, Token), LexicalError> {
        let mut lexer = RawToken::lexer(self.source);
        let mut lexemes = Vec::new();

        while let Some(result) = lexer.next() {
            let span = lexer.span();
            let line = lexer.extras.line;
            let column = self.column_of(lexer.extras.line_start, span.start);

            match result {
                Ok(raw) => lexemes.push(Lexeme {
                    raw,
                    span,
                    line,
                    column,
                }),
                Err(RawError::InvalidNumber) => {
                    let message = format!("invalid number format: {}", lexer.slice());
                    return Err(LexicalError::new(line, column, span, message));
                }
                Err(RawError::InvalidCharacter) => {
                    let ch = lexer.slice().chars().next().unwrap_or_default();
                    let message = format!("invalid character: '{}'", ch);
                    return Err(LexicalError::new(line, column, span, message));
                }
            }
        }

        let end = self.source.len();
        let eof = Token::new(
            TokenKind::EndOfInput,
            lexer.extras.line,
            self.column_of(lexer.extras.line_start, end),
            end..end,
        );

        Ok((lexemes, eof))
    }

    /// 第二遍：归类一个词素，返回 token 和消耗的词素数
    fn classify(&self, lexemes: &[Lexeme], index: usize) -> Result<(Token, usize), LexicalError> {
        let lexeme = &lexemes[index];
        let kind = match &lexeme.raw {
            RawToken::Number(number) => {
                if self.has_unit_suffix(lexemes, index) {
                    return self.unit_value(lexemes, index, *number);
                }
                TokenKind::Number(*number)
            }
            RawToken::Word => self.classify_word(self.text(lexeme)),
            RawToken::Plus => self.operator(lexeme, Operator::Plus)?,
            RawToken::Minus => self.operator(lexeme, Operator::Minus)?,
            RawToken::Star => self.operator(lexeme, Operator::Star)?,
            RawToken::Slash => self.operator(lexeme, Operator::Slash)?,
            RawToken::Assign => self.operator(lexeme, Operator::Assign)?,
            RawToken::Semicolon => TokenKind::Semicolon,
            RawToken::LParen => TokenKind::LParen,
            RawToken::RParen => TokenKind::RParen,
            RawToken::Comma => TokenKind::Comma,
            // newline 回调总是返回 Skip
            RawToken::Newline => unreachable!("newlines never reach the classifier"),
        };

        Ok((
            Token::new(kind, lexeme.line, lexeme.column, lexeme.span.clone()),
            1,
        ))
    }

    fn classify_word(&self, word: &str) -> TokenKind {
        if let Some(keyword) = self.vocab.keyword(word) {
            TokenKind::Keyword(keyword)
        } else if self.vocab.is_function(word) {
            TokenKind::Function(word.to_string())
        } else {
            TokenKind::Identifier(word.to_string())
        }
    }

    fn operator(&self, lexeme: &Lexeme, op: Operator) -> Result<TokenKind, LexicalError> {
        if self.vocab.allows(op) {
            Ok(TokenKind::Operator(op))
        } else {
            Err(LexicalError::new(
                lexeme.line,
                lexeme.column,
                lexeme.span.clone(),
                format!("invalid character: '{}'", op.symbol()),
            ))
        }
    }

    /// 数字后面紧贴着以字母开头的单词
    fn has_unit_suffix(&self, lexemes: &[Lexeme], index: usize) -> bool {
        match lexemes.get(index + 1) {
            Some(next) => {
                next.raw == RawToken::Word
                    && adjacent(&lexemes[index], next)
                    && self.text(next).starts_with(|c: char| c.is_ascii_alphabetic())
            }
            None => false,
        }
    }

    /// 数字 + 单位后缀 => UnitValue
    ///
    /// 后缀可以跨过紧邻的 `/` 或 `*` 组成复合单位 (`m/s`)，
    /// 但只在拼出的结果是已知单位时才继续吸收。
    /// 最终的后缀必须是已知单位。
    fn unit_value(
        &self,
        lexemes: &[Lexeme],
        index: usize,
        number: Number,
    ) -> Result<(Token, usize), LexicalError> {
        let mut last = index + 1;
        let mut unit = self.text(&lexemes[last]).to_string();

        while let (Some(op), Some(word)) = (lexemes.get(last + 1), lexemes.get(last + 2)) {
            let joins = matches!(op.raw, RawToken::Slash | RawToken::Star)
                && word.raw == RawToken::Word
                && adjacent(&lexemes[last], op)
                && adjacent(op, word);
            if !joins {
                break;
            }

            let candidate = format!("{}{}{}", unit, self.text(op), self.text(word));
            if !self.vocab.is_unit(&candidate) {
                break;
            }
            unit = candidate;
            last += 2;
        }

        let suffix = &lexemes[index + 1];
        if !self.vocab.is_unit(&unit) {
            return Err(LexicalError::new(
                suffix.line,
                suffix.column,
                suffix.span.start..lexemes[last].span.end,
                format!("invalid unit: {}", unit),
            ));
        }

        let start = &lexemes[index];
        let token = Token::new(
            TokenKind::UnitValue {
                value: number.as_f64(),
                unit,
            },
            start.line,
            start.column,
            start.span.start..lexemes[last].span.end,
        );
        Ok((token, last - index + 1))
    }

    fn text(&self, lexeme: &Lexeme) -> &'src str {
        &self.source[lexeme.span.clone()]
    }

    /// 按字符计的列号 (从 1 开始)
    fn column_of(&self, line_start: usize, offset: usize) -> usize {
        self.source[line_start..offset].chars().count() + 1
    }
}

fn adjacent(left: &Lexeme, right: &Lexeme) -> bool {
    left.span.end == right.span.start
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::Keyword;

    fn kinds(source: &str) -> Vec<TokenKind> {
        tokenize(source, &Vocabulary::standard())
            .unwrap()
            .into_iter()
            .map(|t| t.kind)
            .collect()
    }

    fn lex_error(source: &str) -> LexicalError {
        tokenize(source, &Vocabulary::standard()).unwrap_err()
    }

    #[test]
    fn test_let_statement() {
        assert_eq!(
            kinds("let x = 5 + 3;"),
            vec![
                TokenKind::Keyword(Keyword::Let),
                TokenKind::Identifier("x".to_string()),
                TokenKind::Operator(Operator::Assign),
                TokenKind::Number(Number::Int(5)),
                TokenKind::Operator(Operator::Plus),
                TokenKind::Number(Number::Int(3)),
                TokenKind::Semicolon,
                TokenKind::EndOfInput,
            ]
        );
    }

    #[test]
    fn test_whitespace_only_yields_single_eof() {
        for source in ["", "   ", "\n\n\t  \r\n"] {
            assert_eq!(kinds(source), vec![TokenKind::EndOfInput]);
        }
    }

    #[test]
    fn test_positions() {
        let tokens = tokenize("let a = 1;\n  print a;", &Vocabulary::standard()).unwrap();

        assert_eq!((tokens[0].line, tokens[0].column), (1, 1));
        assert_eq!((tokens[1].line, tokens[1].column), (1, 5));
        assert_eq!((tokens[4].line, tokens[4].column), (1, 10));
        // print
        assert_eq!((tokens[5].line, tokens[5].column), (2, 3));
        assert_eq!((tokens[6].line, tokens[6].column), (2, 9));

        let eof = tokens.last().unwrap();
        assert!(eof.is_eof());
        assert_eq!((eof.line, eof.column), (2, 11));
    }

    #[test]
    fn test_function_and_identifier() {
        assert_eq!(
            kinds("miles_to_km(d)"),
            vec![
                TokenKind::Function("miles_to_km".to_string()),
                TokenKind::LParen,
                TokenKind::Identifier("d".to_string()),
                TokenKind::RParen,
                TokenKind::EndOfInput,
            ]
        );
    }

    #[test]
    fn test_unit_suffix() {
        assert_eq!(
            kinds("5m 2.5km"),
            vec![
                TokenKind::UnitValue {
                    value: 5.0,
                    unit: "m".to_string()
                },
                TokenKind::UnitValue {
                    value: 2.5,
                    unit: "km".to_string()
                },
                TokenKind::EndOfInput,
            ]
        );
    }

    #[test]
    fn test_unit_requires_adjacency() {
        assert_eq!(
            kinds("5 m"),
            vec![
                TokenKind::Number(Number::Int(5)),
                TokenKind::Identifier("m".to_string()),
                TokenKind::EndOfInput,
            ]
        );
    }

    #[test]
    fn test_compound_unit() {
        let tokens = tokenize("10m/s", &Vocabulary::standard()).unwrap();
        assert_eq!(
            tokens[0].kind,
            TokenKind::UnitValue {
                value: 10.0,
                unit: "m/s".to_string()
            }
        );
        assert_eq!(tokens[0].span, 0..5);
        assert!(tokens[1].is_eof());
    }

    #[test]
    fn test_compound_stops_at_unknown_unit() {
        assert_eq!(
            kinds("10m/x"),
            vec![
                TokenKind::UnitValue {
                    value: 10.0,
                    unit: "m".to_string()
                },
                TokenKind::Operator(Operator::Slash),
                TokenKind::Identifier("x".to_string()),
                TokenKind::EndOfInput,
            ]
        );
        // 除以数字不属于单位
        assert_eq!(kinds("10m/2").len(), 4);
    }

    #[test]
    fn test_invalid_unit() {
        let err = lex_error("let d = 3parsec;");
        assert!(err.message.contains("invalid unit"));
        assert!(err.message.contains("parsec"));
        assert_eq!((err.line, err.column), (1, 10));
    }

    #[test]
    fn test_invalid_number_format() {
        let err = lex_error("3.");
        assert!(err.message.contains("invalid number format"));
        assert_eq!((err.line, err.column), (1, 1));
    }

    #[test]
    fn test_invalid_character() {
        let err = lex_error("10 $");
        assert!(err.message.contains("invalid character"));
        assert_eq!((err.line, err.column), (1, 4));

        let err = lex_error("print 1;\nlet y = 2 # 3;");
        assert!(err.message.contains("'#'"));
        assert_eq!((err.line, err.column), (2, 11));
    }

    #[test]
    fn test_underscore_word_is_not_a_unit() {
        assert_eq!(
            kinds("5_x"),
            vec![
                TokenKind::Number(Number::Int(5)),
                TokenKind::Identifier("_x".to_string()),
                TokenKind::EndOfInput,
            ]
        );
    }

    #[test]
    fn test_custom_vocabulary() {
        let vocab = Vocabulary::empty()
            .with_keyword("soit", Keyword::Let)
            .with_function("racine")
            .with_unit("parsec")
            .without_operator(Operator::Star);

        let tokens = tokenize("soit d = racine(3parsec)", &vocab).unwrap();
        assert_eq!(tokens[0].kind, TokenKind::Keyword(Keyword::Let));
        assert_eq!(tokens[3].kind, TokenKind::Function("racine".to_string()));
        assert_eq!(
            tokens[5].kind,
            TokenKind::UnitValue {
                value: 3.0,
                unit: "parsec".to_string()
            }
        );

        // 标准关键字在这里只是普通标识符
        let tokens = tokenize("let", &vocab).unwrap();
        assert_eq!(tokens[0].kind, TokenKind::Identifier("let".to_string()));

        let err = tokenize("2 * 3", &vocab).unwrap_err();
        assert!(err.message.contains("invalid character: '*'"));
    }
}
