pub mod def;
pub mod def_table;

pub use def::{Def, DefId, DefIdGen, DefKind};
pub use def_table::DefTable;
