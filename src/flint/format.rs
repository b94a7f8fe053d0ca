use std::fmt;

use crate::flint::model::{Block, Call, Expr, Ident, Stmt};

// Blocks print in IR surface syntax: braces around statements, one
// statement per line, four-space nesting. A block's closing brace sits at
// the block's own indent level, so printed blocks compose when spliced
// line-by-line into surrounding code.

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_with_indent(f, 0)
    }
}

impl Block {
    fn fmt_with_indent(&self, f: &mut fmt::Formatter<'_>, level: usize) -> fmt::Result {
        writeln!(f, "{{")?;
        for stmt in &self.stmts {
            stmt.fmt_with_indent(f, level + 1)?;
        }
        write!(f, "{}}}", indent(level))
    }
}

impl Stmt {
    fn fmt_with_indent(&self, f: &mut fmt::Formatter<'_>, level: usize) -> fmt::Result {
        let pad = indent(level);
        match self {
            Stmt::Let {
                name,
                value: Some(value),
            } => writeln!(f, "{pad}let {name} := {value}"),
            Stmt::Let { name, value: None } => writeln!(f, "{pad}let {name}"),
            Stmt::Assign { target, value } => writeln!(f, "{pad}{target} := {value}"),
            Stmt::Expr(expr) => writeln!(f, "{pad}{expr}"),
            Stmt::Block(block) => {
                write!(f, "{pad}")?;
                block.fmt_with_indent(f, level)?;
                writeln!(f)
            }
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Lit(value) => write!(f, "{value}"),
            Expr::Ref(ident) => write!(f, "{ident}"),
            Expr::Call(call) => write!(f, "{call}"),
        }
    }
}

impl fmt::Display for Call {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let args = self
            .args
            .iter()
            .map(|arg| arg.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        write!(f, "{}({})", self.target, args)
    }
}

impl fmt::Display for Ident {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

fn indent(level: usize) -> String {
    "    ".repeat(level)
}
