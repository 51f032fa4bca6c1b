use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use colored::*;
use quanta_diagnostics::Emitter;
use quanta_driver::{
    analyze_recovering, read_source, tokenize_source, FrontendConfig, FrontendError,
};
use quanta_syntax::{token_dump, ParserOptions, Vocabulary};
use std::fs;

#[derive(Parser)]
#[command(name = "quantac")]
#[command(about = "Quanta 单位计算器前端 - 词法与语法分析", version)]
struct Cli {
    #[command(flatten)]
    options: GlobalOptions,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct GlobalOptions {
    /// 额外的已知单位 (可重复)
    #[arg(long = "unit", value_name = "NAME", global = true)]
    units: Vec<String>,

    /// 额外的预定义函数 (可重复)
    #[arg(long = "function", value_name = "NAME", global = true)]
    functions: Vec<String>,

    /// 把空语句 (`;;`) 当作语法错误
    #[arg(long, global = true)]
    no_empty_statements: bool,

    /// 关闭彩色输出
    #[arg(long, global = true)]
    no_color: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// 输出 token 序列
    Tokens {
        /// 输入文件
        input: String,

        /// 输出文件 (默认: 标准输出)
        #[arg(short, long)]
        output: Option<String>,
    },

    /// 输出抽象语法树
    Ast {
        /// 输入文件
        input: String,

        /// 输出文件 (默认: 标准输出)
        #[arg(short, long)]
        output: Option<String>,
    },

    /// 检查词法和语法错误
    Check {
        /// 输入文件
        input: String,
    },
}

impl GlobalOptions {
    fn frontend_config(&self) -> FrontendConfig {
        let mut vocabulary = Vocabulary::standard();
        for unit in &self.units {
            vocabulary = vocabulary.with_unit(unit.clone());
        }
        for function in &self.functions {
            vocabulary = vocabulary.with_function(function.clone());
        }

        FrontendConfig {
            vocabulary,
            parser: ParserOptions {
                allow_empty_statements: !self.no_empty_statements,
            },
        }
    }

    fn emitter(&self) -> Emitter {
        if self.no_color {
            colored::control::set_override(false);
            Emitter::without_colors()
        } else {
            Emitter::new()
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = cli.options.frontend_config();
    let emitter = cli.options.emitter();

    let ok = match &cli.command {
        Commands::Tokens { input, output } => {
            cmd_tokens(input, output.as_deref(), &config, &emitter)?
        }
        Commands::Ast { input, output } => cmd_ast(input, output.as_deref(), &config, &emitter)?,
        Commands::Check { input } => cmd_check(input, &config, &emitter)?,
    };

    if !ok {
        std::process::exit(1);
    }
    Ok(())
}

fn read_input(input: &str) -> Result<String> {
    read_source(input).with_context(|| format!("failed to read {}", input))
}

fn write_output(output: Option<&str>, text: &str) -> Result<()> {
    match output {
        Some(path) => {
            fs::write(path, text).with_context(|| format!("failed to write {}", path))?;
            eprintln!("{} {}", "✅ 已写入".green(), path);
        }
        None => print!("{}", text),
    }
    Ok(())
}

/// token 命令
fn cmd_tokens(
    input: &str,
    output: Option<&str>,
    config: &FrontendConfig,
    emitter: &Emitter,
) -> Result<bool> {
    eprintln!("🔍 扫描 {} ...", input);
    let source = read_input(input)?;

    match tokenize_source(&source, config) {
        Ok(tokens) => {
            write_output(output, &token_dump(&tokens))?;
            Ok(true)
        }
        Err(err) => {
            err.emit(emitter, Some(input), Some(&source));
            Ok(false)
        }
    }
}

/// AST 命令：有语法错误时仍输出成功解析的部分
fn cmd_ast(
    input: &str,
    output: Option<&str>,
    config: &FrontendConfig,
    emitter: &Emitter,
) -> Result<bool> {
    eprintln!("🌳 解析 {} ...", input);
    let source = read_input(input)?;

    match analyze_recovering(&source, config) {
        Ok(result) => {
            write_output(output, &result.ast_dump())?;
            if result.is_clean() {
                return Ok(true);
            }
            FrontendError::Syntax(result.syntax_errors).emit(emitter, Some(input), Some(&source));
            Ok(false)
        }
        Err(err) => {
            err.emit(emitter, Some(input), Some(&source));
            Ok(false)
        }
    }
}

/// 检查命令
fn cmd_check(input: &str, config: &FrontendConfig, emitter: &Emitter) -> Result<bool> {
    eprintln!("🔍 检查 {} ...", input);
    let source = read_input(input)?;

    match analyze_recovering(&source, config) {
        Ok(result) if result.is_clean() => {
            eprintln!(
                "{} ({} 条语句)",
                "✅ 无错误".green().bold(),
                result.program.statements.len()
            );
            Ok(true)
        }
        Ok(result) => {
            let count = result.syntax_errors.len();
            FrontendError::Syntax(result.syntax_errors).emit(emitter, Some(input), Some(&source));
            eprintln!("{}", format!("❌ 发现 {} 个语法错误", count).red().bold());
            Ok(false)
        }
        Err(err) => {
            err.emit(emitter, Some(input), Some(&source));
            eprintln!("{}", "❌ 词法错误".red().bold());
            Ok(false)
        }
    }
}
