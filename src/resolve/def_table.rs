use std::fmt;

use crate::resolve::{Def, DefId};

/// All declarations of one compilation, indexed by [`DefId`].
///
/// Ids are dense: the def with id `n` sits at index `n`. Lookup is O(1)
/// and identity-based; the table is immutable once built.
#[derive(Debug, Clone)]
pub struct DefTable {
    defs: Vec<Def>,
}

impl DefTable {
    pub fn new(defs: Vec<Def>) -> Self {
        Self { defs }
    }

    pub fn lookup_def(&self, def_id: DefId) -> Option<&Def> {
        self.defs.get(def_id.0 as usize)
    }
}

impl fmt::Display for DefTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Defs:")?;
        for def in self.defs.iter() {
            writeln!(f, "{}", def)?;
        }
        Ok(())
    }
}
