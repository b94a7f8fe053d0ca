use std::collections::HashMap;

use crate::flint::{self, Dialect, IdentRewrite};
use crate::lower::errors::LowerError;
use crate::lower::names;
use crate::resolve::{DefId, DefKind, DefTable};
use crate::tree::NodeId;

/// Rewrites one asm block for splicing into generated IR.
///
/// External occurrences (keys of the block's reference map) become the
/// referenced variable's stable name. Everything else must keep resolving
/// inside the block itself: builtins stay as they are, private names get
/// the `usr$` tag so they cannot collide with generated names.
pub(crate) struct AsmTranslator<'a> {
    defs: &'a DefTable,
    dialect: &'a Dialect,
    external_refs: &'a HashMap<NodeId, DefId>,
}

impl<'a> AsmTranslator<'a> {
    pub(crate) fn new(
        defs: &'a DefTable,
        dialect: &'a Dialect,
        external_refs: &'a HashMap<NodeId, DefId>,
    ) -> Self {
        Self {
            defs,
            dialect,
            external_refs,
        }
    }

    pub(crate) fn rewrite(&mut self, block: &flint::Block) -> Result<flint::Block, LowerError> {
        flint::rewrite_block(self, block)
    }

    fn translate_ref(
        &self,
        ident: &flint::Ident,
        def_id: DefId,
    ) -> Result<flint::Ident, LowerError> {
        let def = self
            .defs
            .lookup_def(def_id)
            .ok_or(LowerError::DefNotFound(def_id))?;
        if def.kind != DefKind::LocalVar {
            return Err(LowerError::AsmRefNotVar(ident.id, def_id));
        }
        Ok(flint::Ident {
            id: ident.id,
            name: names::local_var(def),
        })
    }
}

impl IdentRewrite for AsmTranslator<'_> {
    type Error = LowerError;

    fn rewrite_ident(&mut self, ident: &flint::Ident) -> Result<flint::Ident, LowerError> {
        match self.external_refs.get(&ident.id) {
            Some(def_id) => self.translate_ref(ident, *def_id),
            None => Ok(flint::Ident {
                id: ident.id,
                name: self.rewrite_name(&ident.name),
            }),
        }
    }

    fn rewrite_name(&mut self, name: &str) -> String {
        if self.dialect.is_builtin(name) {
            name.to_string()
        } else {
            format!("usr${name}")
        }
    }

    // External references are read-only inside asm blocks.
    fn rewrite_assign_target(&mut self, ident: &flint::Ident) -> Result<flint::Ident, LowerError> {
        if self.external_refs.contains_key(&ident.id) {
            return Err(LowerError::AsmAssignToExternal(ident.id));
        }
        self.rewrite_ident(ident)
    }
}

#[cfg(test)]
#[path = "../tests/t_rewrite.rs"]
mod tests;
