//! Flint tree model: the grammar of embedded low-level blocks.

use crate::tree::NodeId;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Block {
    pub stmts: Vec<Stmt>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Stmt {
    /// `let name` or `let name := value`. The name is a declaration site,
    /// not an occurrence, so it carries no node id.
    Let { name: String, value: Option<Expr> },
    /// `target := value`
    Assign { target: Ident, value: Expr },
    /// A bare expression evaluated for its effects.
    Expr(Expr),
    /// A nested block.
    Block(Block),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Expr {
    Lit(u64),
    Ref(Ident),
    Call(Call),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Call {
    pub target: Ident,
    pub args: Vec<Expr>,
}

/// One identifier occurrence. Occurrences are keyed by node id in
/// external-reference maps, so the id must survive rewriting.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Ident {
    pub id: NodeId,
    pub name: String,
}
