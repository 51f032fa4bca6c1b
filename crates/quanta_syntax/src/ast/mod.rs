pub mod expr;
pub mod printer;
pub mod stmt;
pub mod visitor;

// 重新导出核心类型，方便外部直接使用 quanta_syntax::ast::Expr 等
pub use expr::{BinaryOp, Expr};
pub use printer::AstPrinter;
pub use stmt::Stmt;
pub use visitor::Visitor;

// 整个程序：按源码顺序排列的语句
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    pub statements: Vec<Stmt>,
}

impl Program {
    pub fn new(statements: Vec<Stmt>) -> Self {
        Self { statements }
    }

    pub fn len(&self) -> usize {
        self.statements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }
}
