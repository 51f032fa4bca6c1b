use crate::ast::expr::Expr;

// 语句：程序的顶层单位，以 ';' 结尾
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    // 变量声明: let x = 5 + 3;
    VarDecl { name: String, value: Expr },

    // 单位换算: convert (5m + 6km) to miles;
    Convert { expr: Expr, target_unit: String },

    // 输出: print distance;
    Print(Expr),

    // 表达式语句: miles_to_km(100);
    Expression(Expr),
}
