use crate::token::Number;

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    // 二元运算: a + b, 5m * 2
    Binary(Box<Expr>, BinaryOp, Box<Expr>),

    // 带单位的数值: 5m, 2.5km, 10m/s
    UnitValue { value: f64, unit: String },

    // 纯数字: 5, 2.5
    Literal(Number),

    // 变量引用: distance
    Variable(String),

    // 函数调用: miles_to_km(100), f()
    Call { name: String, args: Vec<Expr> },
}

impl Expr {
    pub fn binary(left: Expr, op: BinaryOp, right: Expr) -> Self {
        Expr::Binary(Box::new(left), op, Box::new(right))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
}

impl BinaryOp {
    pub fn symbol(&self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
        }
    }
}
