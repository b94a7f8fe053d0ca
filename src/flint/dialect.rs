//! The Flint dialect descriptor.

use std::collections::HashSet;

const CORE_BUILTINS: &[&str] = &[
    // arithmetic
    "add", "sub", "mul", "div", "mod",
    // bitwise
    "and", "or", "xor", "shl", "shr",
    // comparison
    "eq", "lt", "gt", "iszero", "not",
    // memory and control
    "load", "store", "trap",
];

/// Answers the one question lowering asks of the dialect: whether a name
/// resolves to a builtin operation. Builtin names must keep resolving after
/// a block is spliced into generated code, so the rewriter leaves them
/// untouched.
pub struct Dialect {
    builtins: HashSet<&'static str>,
}

impl Default for Dialect {
    fn default() -> Self {
        Self::core()
    }
}

impl Dialect {
    pub fn core() -> Self {
        Self {
            builtins: CORE_BUILTINS.iter().copied().collect(),
        }
    }

    pub fn is_builtin(&self, name: &str) -> bool {
        self.builtins.contains(name)
    }
}
