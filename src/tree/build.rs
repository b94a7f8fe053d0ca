//! Builder for resolved trees.
//!
//! The lowering stage sits behind the parser, resolver, and type checker;
//! none of those live in this crate. `TreeBuilder` stands in for them: it
//! mints node and def ids from owned generators and produces the same
//! resolved shapes those passes would, for use by tests and drivers.

use std::collections::HashMap;

use crate::flint;
use crate::resolve::{Def, DefId, DefIdGen, DefKind, DefTable};
use crate::tree::model::{AsmBlock, Expr, ExprKind, Function, Module, Stmt, StmtKind};
use crate::tree::{NodeId, NodeIdGen};

pub struct TreeBuilder {
    nodes: NodeIdGen,
    def_ids: DefIdGen,
    defs: Vec<Def>,
    functions: Vec<Function>,
}

impl Default for TreeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TreeBuilder {
    pub fn new() -> Self {
        Self {
            nodes: NodeIdGen::new(),
            def_ids: DefIdGen::new(),
            defs: Vec::new(),
            functions: Vec::new(),
        }
    }

    // --- Declarations ---

    pub fn declare_var(&mut self, name: &str) -> DefId {
        self.declare(name, DefKind::LocalVar)
    }

    pub fn declare_func(&mut self, name: &str) -> DefId {
        self.declare(name, DefKind::Func)
    }

    fn declare(&mut self, name: &str, kind: DefKind) -> DefId {
        let id = self.def_ids.new_id();
        self.defs.push(Def {
            id,
            name: name.to_string(),
            kind,
        });
        id
    }

    // --- Expressions ---

    pub fn ident(&mut self, def_id: DefId) -> Expr {
        self.expr(ExprKind::Ident(def_id))
    }

    pub fn int_lit(&mut self, value: u64) -> Expr {
        self.expr(ExprKind::IntLit(value))
    }

    pub fn member(&mut self, base: Expr, name: &str) -> Expr {
        self.expr(ExprKind::Member {
            base: Box::new(base),
            name: name.to_string(),
        })
    }

    pub fn call(&mut self, callee: Expr, args: Vec<Expr>) -> Expr {
        self.expr(ExprKind::Call {
            callee: Box::new(callee),
            args,
        })
    }

    pub fn assign(&mut self, target: Expr, value: Expr) -> Expr {
        self.expr(ExprKind::Assign {
            target: Box::new(target),
            value: Box::new(value),
        })
    }

    fn expr(&mut self, kind: ExprKind) -> Expr {
        Expr {
            id: self.nodes.new_id(),
            kind,
        }
    }

    // --- Statements ---

    pub fn var_decl(&mut self, decls: Vec<DefId>, init: Option<Expr>) -> Stmt {
        self.stmt(StmtKind::VarDecl { decls, init })
    }

    pub fn expr_stmt(&mut self, expr: Expr) -> Stmt {
        self.stmt(StmtKind::Expr(expr))
    }

    pub fn asm_stmt(
        &mut self,
        body: flint::Block,
        external_refs: HashMap<NodeId, DefId>,
    ) -> Stmt {
        self.stmt(StmtKind::Asm(AsmBlock {
            body,
            external_refs,
        }))
    }

    fn stmt(&mut self, kind: StmtKind) -> Stmt {
        Stmt {
            id: self.nodes.new_id(),
            kind,
        }
    }

    /// Mints a Flint identifier occurrence. Occurrences share the tree's
    /// node id space so external-reference maps can key them.
    pub fn asm_ident(&mut self, name: &str) -> flint::Ident {
        flint::Ident {
            id: self.nodes.new_id(),
            name: name.to_string(),
        }
    }

    // --- Functions ---

    pub fn function(&mut self, def_id: DefId, params: Vec<DefId>, ret: DefId, body: Vec<Stmt>) {
        let id = self.nodes.new_id();
        self.functions.push(Function {
            id,
            def_id,
            params,
            ret,
            body,
        });
    }

    pub fn finish(self) -> (Module, DefTable) {
        (
            Module {
                functions: self.functions,
            },
            DefTable::new(self.defs),
        )
    }
}
