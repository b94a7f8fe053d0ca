//! Resolved tree: every identifier carries its def id, every asm block its
//! external-reference map.

use std::collections::HashMap;

use crate::flint;
use crate::resolve::DefId;
use crate::tree::NodeId;

// --- Module ---

#[derive(Clone, Debug)]
pub struct Module {
    pub functions: Vec<Function>,
}

// --- Function ---

#[derive(Clone, Debug)]
pub struct Function {
    pub id: NodeId,
    pub def_id: DefId,
    pub params: Vec<DefId>,
    /// The function's single return variable.
    pub ret: DefId,
    pub body: Vec<Stmt>,
}

// --- Statements ---

#[derive(Clone, Debug)]
pub struct Stmt {
    pub id: NodeId,
    pub kind: StmtKind,
}

#[derive(Clone, Debug)]
pub enum StmtKind {
    /// `var x;` possibly with several names or an initializer, though the
    /// lowering engine only supports the single-name uninitialized form.
    VarDecl {
        decls: Vec<DefId>,
        init: Option<Expr>,
    },
    /// An expression evaluated for its effects; the result is unused.
    Expr(Expr),
    /// An embedded Flint block, `asm { ... }`.
    Asm(AsmBlock),
}

/// An embedded low-level block plus the map from identifier occurrences
/// inside it to the enclosing declarations they reference. The map is
/// attached by name resolution; occurrences it does not key are private
/// to the block.
#[derive(Clone, Debug)]
pub struct AsmBlock {
    pub body: flint::Block,
    pub external_refs: HashMap<NodeId, DefId>,
}

// --- Expressions ---

#[derive(Clone, Debug)]
pub struct Expr {
    pub id: NodeId,
    pub kind: ExprKind,
}

#[derive(Clone, Debug)]
pub enum ExprKind {
    /// A reference to a declared name.
    Ident(DefId),
    /// `callee(args...)`
    Call {
        callee: Box<Expr>,
        args: Vec<Expr>,
    },
    /// `target = value`, itself an expression whose result is the
    /// assigned value.
    Assign {
        target: Box<Expr>,
        value: Box<Expr>,
    },

    // Kinds without a lowering rule yet.
    IntLit(u64),
    Member {
        base: Box<Expr>,
        name: String,
    },
}
