use crate::lower::LowerCtx;
use crate::lower::errors::LowerError;
use crate::lower::names;
use crate::lower::rewrite::AsmTranslator;
use crate::resolve::{Def, DefId, DefKind};
use crate::tree::{AsmBlock, Expr, ExprKind, Stmt, StmtKind};

/// Lowers the statements of one function body into IR text.
///
/// Instructions append to an owned sink in visit order, so an expression's
/// operands are lowered, and named, strictly before the instruction that
/// consumes them. Function calls do not descend into the callee; the
/// target is enqueued on the context's worklist instead and lowered by the
/// driver on its own sink.
pub struct StmtLowerer<'c, 'd> {
    ctx: &'c mut LowerCtx<'d>,
    code: String,
}

impl<'c, 'd> StmtLowerer<'c, 'd> {
    pub fn new(ctx: &'c mut LowerCtx<'d>) -> Self {
        Self {
            ctx,
            code: String::new(),
        }
    }

    /// Returns the accumulated IR fragment.
    pub fn finish(self) -> String {
        self.code
    }

    pub fn lower_stmt(&mut self, stmt: &Stmt) -> Result<(), LowerError> {
        match &stmt.kind {
            StmtKind::VarDecl { decls, init } => self.lower_var_decl(stmt, decls, init.as_ref()),
            StmtKind::Expr(expr) => {
                // Lowered for its effects; the result name is unused.
                self.lower_expr(expr)?;
                Ok(())
            }
            StmtKind::Asm(asm) => self.lower_asm(asm),
        }
    }

    fn lower_var_decl(
        &mut self,
        stmt: &Stmt,
        decls: &[DefId],
        init: Option<&Expr>,
    ) -> Result<(), LowerError> {
        if decls.len() != 1 {
            return Err(LowerError::MultiVarDecl(stmt.id));
        }
        if init.is_some() {
            return Err(LowerError::InitializedVarDecl(stmt.id));
        }
        let def = self.lookup_def(decls[0])?;
        if def.kind != DefKind::LocalVar {
            return Err(LowerError::DeclNotVar(stmt.id, decls[0]));
        }
        let var = names::local_var(def);
        self.emit(&format!("let {var}"));
        Ok(())
    }

    fn lower_expr(&mut self, expr: &Expr) -> Result<(), LowerError> {
        match &expr.kind {
            ExprKind::Ident(def_id) => self.lower_ident(expr, *def_id),
            ExprKind::Call { callee, args } => self.lower_call(expr, callee, args),
            ExprKind::Assign { target, value } => self.lower_assign(expr, target, value),
            ExprKind::IntLit(_) | ExprKind::Member { .. } => {
                Err(LowerError::UnsupportedExpr(expr.id))
            }
        }
    }

    fn lower_ident(&mut self, expr: &Expr, def_id: DefId) -> Result<(), LowerError> {
        let def = self.lookup_def(def_id)?;
        if def.kind != DefKind::LocalVar {
            return Err(LowerError::IdentNotVar(expr.id, def_id));
        }
        let var = names::local_var(def);
        let result = names::expr_value(expr.id);
        self.emit(&format!("let {result} := {var}"));
        Ok(())
    }

    fn lower_call(&mut self, expr: &Expr, callee: &Expr, args: &[Expr]) -> Result<(), LowerError> {
        for arg in args {
            self.lower_expr(arg)?;
        }

        let ExprKind::Ident(target_def) = &callee.kind else {
            return Err(LowerError::IndirectCall(callee.id));
        };
        let def = self.lookup_def(*target_def)?;
        if def.kind != DefKind::Func {
            return Err(LowerError::CallTargetNotFunc(callee.id, *target_def));
        }
        let func = names::function(def);
        self.ctx.queue.enqueue(*target_def);

        let arg_names = args
            .iter()
            .map(|arg| names::expr_value(arg.id))
            .collect::<Vec<_>>()
            .join(", ");
        let result = names::expr_value(expr.id);
        self.emit(&format!("let {result} := {func}({arg_names})"));
        Ok(())
    }

    fn lower_assign(&mut self, expr: &Expr, target: &Expr, value: &Expr) -> Result<(), LowerError> {
        self.lower_expr(value)?;

        let ExprKind::Ident(target_def) = &target.kind else {
            return Err(LowerError::AssignTargetNotIdent(target.id));
        };
        let def = self.lookup_def(*target_def)?;
        if def.kind != DefKind::LocalVar {
            return Err(LowerError::AssignTargetNotVar(target.id, *target_def));
        }
        let var = names::local_var(def);

        self.emit(&format!("{var} := {}", names::expr_value(value.id)));
        // The assignment's own result reads the variable after the update.
        self.emit(&format!("let {} := {var}", names::expr_value(expr.id)));
        Ok(())
    }

    fn lower_asm(&mut self, asm: &AsmBlock) -> Result<(), LowerError> {
        let mut translator =
            AsmTranslator::new(self.ctx.defs, self.ctx.dialect, &asm.external_refs);
        let block = translator.rewrite(&asm.body)?;
        self.emit(&block.to_string());
        Ok(())
    }

    fn lookup_def(&self, def_id: DefId) -> Result<&Def, LowerError> {
        self.ctx
            .defs
            .lookup_def(def_id)
            .ok_or(LowerError::DefNotFound(def_id))
    }

    fn emit(&mut self, line: &str) {
        self.code.push_str(line);
        self.code.push('\n');
    }
}

#[cfg(test)]
#[path = "../tests/t_lower.rs"]
mod tests;
