//! Symbolic names for emitted IR.
//!
//! Every name class has its own prefix and carries the entity's numeric id,
//! so names never collide across classes, and never within one: def ids and
//! node ids are unique per compilation. The same declaration yields the
//! same name at every occurrence.

use crate::resolve::Def;
use crate::tree::NodeId;

/// The stable name of a declared variable's storage slot.
pub fn local_var(def: &Def) -> String {
    format!("var_{}_{}", def.name, def.id)
}

/// The name holding one lowered expression's result.
pub fn expr_value(id: NodeId) -> String {
    format!("expr_{}", id)
}

/// The IR-level name of a function definition.
pub fn function(def: &Def) -> String {
    format!("fun_{}_{}", def.name, def.id)
}
