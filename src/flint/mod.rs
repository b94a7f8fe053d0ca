//! Flint, the low-level dialect embeddable in Opal `asm` blocks.
//!
//! The dialect's evaluation rules live elsewhere; this crate only needs its
//! tree grammar, the builtin catalog, a printer, and a copying rewriter.

pub mod dialect;
pub mod fold;
pub mod format;
pub mod model;

pub use dialect::Dialect;
pub use fold::{IdentRewrite, rewrite_block, rewrite_expr, rewrite_stmt};
pub use model::*;
