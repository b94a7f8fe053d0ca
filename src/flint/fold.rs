use crate::flint::model::{Block, Call, Expr, Ident, Stmt};

/// Copying rewriter over Flint trees.
///
/// The free `rewrite_*` functions perform the structural recursion,
/// rebuilding every node from rewritten children; literals and nesting are
/// copied unchanged. An implementation supplies the identifier hooks and
/// decides what each name becomes. Every identifier-bearing position in the
/// grammar goes through a hook, including inside nested blocks.
pub trait IdentRewrite {
    type Error;

    /// Rewrites one identifier occurrence in reference position.
    fn rewrite_ident(&mut self, ident: &Ident) -> Result<Ident, Self::Error>;

    /// Rewrites a declared name (a `let` binding site, never an occurrence).
    fn rewrite_name(&mut self, name: &str) -> String;

    /// Rewrites the identifier an assignment stores into.
    fn rewrite_assign_target(&mut self, ident: &Ident) -> Result<Ident, Self::Error> {
        self.rewrite_ident(ident)
    }
}

pub fn rewrite_block<R: IdentRewrite + ?Sized>(
    rewriter: &mut R,
    block: &Block,
) -> Result<Block, R::Error> {
    let stmts = block
        .stmts
        .iter()
        .map(|stmt| rewrite_stmt(rewriter, stmt))
        .collect::<Result<_, _>>()?;
    Ok(Block { stmts })
}

pub fn rewrite_stmt<R: IdentRewrite + ?Sized>(
    rewriter: &mut R,
    stmt: &Stmt,
) -> Result<Stmt, R::Error> {
    match stmt {
        Stmt::Let { name, value } => Ok(Stmt::Let {
            name: rewriter.rewrite_name(name),
            value: value
                .as_ref()
                .map(|value| rewrite_expr(rewriter, value))
                .transpose()?,
        }),
        Stmt::Assign { target, value } => Ok(Stmt::Assign {
            target: rewriter.rewrite_assign_target(target)?,
            value: rewrite_expr(rewriter, value)?,
        }),
        Stmt::Expr(expr) => Ok(Stmt::Expr(rewrite_expr(rewriter, expr)?)),
        Stmt::Block(block) => Ok(Stmt::Block(rewrite_block(rewriter, block)?)),
    }
}

pub fn rewrite_expr<R: IdentRewrite + ?Sized>(
    rewriter: &mut R,
    expr: &Expr,
) -> Result<Expr, R::Error> {
    match expr {
        Expr::Lit(value) => Ok(Expr::Lit(*value)),
        Expr::Ref(ident) => Ok(Expr::Ref(rewriter.rewrite_ident(ident)?)),
        Expr::Call(call) => Ok(Expr::Call(Call {
            target: rewriter.rewrite_ident(&call.target)?,
            args: call
                .args
                .iter()
                .map(|arg| rewrite_expr(rewriter, arg))
                .collect::<Result<_, _>>()?,
        })),
    }
}
