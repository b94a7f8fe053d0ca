use thiserror::Error;

use crate::resolve::DefId;
use crate::tree::NodeId;

/// A broken invariant of the lowering contract.
///
/// Lowering trusts the upstream pipeline to hand it resolved trees inside
/// the supported subset; every variant here marks a pipeline bug, not a
/// user error. Callers must abort the compilation run; there is nothing to
/// recover.
#[derive(Debug, Error)]
pub enum LowerError {
    #[error("definition not found for def {0:?}")]
    DefNotFound(DefId),

    #[error("no function body in the module for enqueued def {0:?}")]
    FuncNotFound(DefId),

    #[error("multi variable declarations not supported (node {0:?})")]
    MultiVarDecl(NodeId),

    #[error("initial values not yet supported (node {0:?})")]
    InitializedVarDecl(NodeId),

    #[error("declared name is not a variable (node {0:?}, def {1:?})")]
    DeclNotVar(NodeId, DefId),

    #[error("identifier does not refer to a variable (node {0:?}, def {1:?})")]
    IdentNotVar(NodeId, DefId),

    #[error("complex call targets not supported (node {0:?})")]
    IndirectCall(NodeId),

    #[error("call target does not refer to a function (node {0:?}, def {1:?})")]
    CallTargetNotFunc(NodeId, DefId),

    #[error("can only assign to identifiers (node {0:?})")]
    AssignTargetNotIdent(NodeId),

    #[error("assignment target does not refer to a variable (node {0:?}, def {1:?})")]
    AssignTargetNotVar(NodeId, DefId),

    #[error("external reference in asm block to something that is not a variable (node {0:?}, def {1:?})")]
    AsmRefNotVar(NodeId, DefId),

    #[error("assignment to an external reference in asm block not supported (node {0:?})")]
    AsmAssignToExternal(NodeId),

    #[error("unsupported expression during lowering (node {0:?})")]
    UnsupportedExpr(NodeId),
}
