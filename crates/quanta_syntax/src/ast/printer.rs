//! AST Printer
//!
//! 按深度缩进输出节点名和标量字段，每层两个空格。

use super::*;
use crate::token::format_float;

const INDENT: &str = "  ";

#[derive(Debug, Default)]
pub struct AstPrinter {
    out: String,
    depth: usize,
}

impl AstPrinter {
    pub fn new() -> Self {
        Self::default()
    }

    /// 渲染整个程序
    pub fn print(program: &Program) -> String {
        let mut printer = Self::new();
        printer.visit_program(program);
        printer.out
    }

    /// 渲染单个表达式
    pub fn print_expr(expr: &Expr) -> String {
        let mut printer = Self::new();
        printer.visit_expr(expr);
        printer.out
    }

    fn line(&mut self, text: &str) {
        for _ in 0..self.depth {
            self.out.push_str(INDENT);
        }
        self.out.push_str(text);
        self.out.push('\n');
    }

    fn nested(&mut self, f: impl FnOnce(&mut Self)) {
        self.depth += 1;
        f(self);
        self.depth -= 1;
    }

    fn field(&mut self, text: &str) {
        self.nested(|p| p.line(text));
    }
}

impl Visitor<()> for AstPrinter {
    fn visit_program(&mut self, program: &Program) {
        self.line("Program");
        self.nested(|p| {
            for stmt in &program.statements {
                p.visit_stmt(stmt);
            }
        });
    }

    fn visit_stmt(&mut self, stmt: &Stmt) {
        match stmt {
            Stmt::VarDecl { name, value } => {
                self.line("VariableDeclaration");
                self.field(&format!("name: {}", name));
                self.nested(|p| p.visit_expr(value));
            }
            Stmt::Convert { expr, target_unit } => {
                self.line("UnitConversionStatement");
                self.field(&format!("target_unit: {}", target_unit));
                self.nested(|p| p.visit_expr(expr));
            }
            Stmt::Print(expr) => {
                self.line("PrintStatement");
                self.nested(|p| p.visit_expr(expr));
            }
            // 表达式语句直接输出表达式本身
            Stmt::Expression(expr) => self.visit_expr(expr),
        }
    }

    fn visit_expr(&mut self, expr: &Expr) {
        match expr {
            Expr::Binary(left, op, right) => {
                self.line("BinaryOperation");
                self.field(&format!("op: {}", op.symbol()));
                self.nested(|p| {
                    p.visit_expr(left);
                    p.visit_expr(right);
                });
            }
            Expr::UnitValue { value, unit } => {
                self.line("UnitValue");
                self.field(&format!("value: {}, unit: {}", format_float(*value), unit));
            }
            Expr::Literal(number) => {
                self.line("NumberLiteral");
                self.field(&format!("value: {}", number));
            }
            Expr::Variable(name) => {
                self.line("Variable");
                self.field(&format!("name: {}", name));
            }
            Expr::Call { name, args } => {
                self.line("FunctionCall");
                self.field(&format!("name: {}", name));
                // 参数比 name 字段再深一层
                self.nested(|p| {
                    p.nested(|p| {
                        for arg in args {
                            p.visit_expr(arg);
                        }
                    })
                });
            }
        }
    }
}
