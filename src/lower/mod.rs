//! Lowering from resolved Opal trees into Flint-syntax IR text.
//!
//! One function lowers at a time onto its own sink; calls discovered along
//! the way land on a shared worklist instead of being lowered inline. The
//! module driver drains that worklist until every transitively reachable
//! function has been emitted exactly once.

mod errors;
pub mod names;
mod queue;
mod rewrite;
mod stmts;

pub use errors::LowerError;
pub use queue::FunctionQueue;
pub use stmts::StmtLowerer;

use indexmap::IndexMap;

use crate::flint::Dialect;
use crate::resolve::{DefId, DefTable};
use crate::tree::{Function, Module};

/// Everything a lowering invocation depends on: the declaration table, the
/// Flint dialect of embedded blocks, and the shared function worklist.
pub struct LowerCtx<'a> {
    pub defs: &'a DefTable,
    pub dialect: &'a Dialect,
    pub queue: FunctionQueue,
}

impl<'a> LowerCtx<'a> {
    pub fn new(defs: &'a DefTable, dialect: &'a Dialect) -> Self {
        Self {
            defs,
            dialect,
            queue: FunctionQueue::new(),
        }
    }
}

/// Lowers one function to an IR function definition.
///
/// The signature introduces the parameters' and return variable's stable
/// names; body instructions are emitted by a fresh [`StmtLowerer`] and
/// indented one level. Callees reached from the body are enqueued on
/// `ctx.queue`, not lowered here.
pub fn lower_function(ctx: &mut LowerCtx, func: &Function) -> Result<String, LowerError> {
    let defs = ctx.defs;
    let def = defs
        .lookup_def(func.def_id)
        .ok_or(LowerError::DefNotFound(func.def_id))?;
    let fname = names::function(def);
    let params = func
        .params
        .iter()
        .map(|&param| stable_name(defs, param))
        .collect::<Result<Vec<_>, _>>()?
        .join(", ");
    let ret = stable_name(defs, func.ret)?;

    let mut lowerer = StmtLowerer::new(ctx);
    for stmt in &func.body {
        lowerer.lower_stmt(stmt)?;
    }
    let body = lowerer.finish();

    let mut text = format!("function {fname}({params}) -> {ret} {{\n");
    for line in body.lines() {
        text.push_str("    ");
        text.push_str(line);
        text.push('\n');
    }
    text.push_str("}\n");
    Ok(text)
}

/// Lowers a module: seeds the worklist and drains it.
///
/// Roots are the function named `main` if the module has one, otherwise
/// every function in module order (library-style modules). Drain order is
/// first-enqueue order, so output layout is deterministic: roots first,
/// then callees in discovery order, one definition each, separated by
/// blank lines.
pub fn lower_module(
    module: &Module,
    defs: &DefTable,
    dialect: &Dialect,
) -> Result<String, LowerError> {
    let mut ctx = LowerCtx::new(defs, dialect);

    let functions: IndexMap<DefId, &Function> = module
        .functions
        .iter()
        .map(|func| (func.def_id, func))
        .collect();

    let main = functions.values().find(|func| {
        defs.lookup_def(func.def_id)
            .is_some_and(|def| def.name == "main")
    });
    match main {
        Some(func) => ctx.queue.enqueue(func.def_id),
        None => {
            for func in functions.values() {
                ctx.queue.enqueue(func.def_id);
            }
        }
    }

    let mut out = String::new();
    while let Some(def_id) = ctx.queue.dequeue() {
        let func = functions
            .get(&def_id)
            .copied()
            .ok_or(LowerError::FuncNotFound(def_id))?;
        if !out.is_empty() {
            out.push('\n');
        }
        out.push_str(&lower_function(&mut ctx, func)?);
    }
    Ok(out)
}

fn stable_name(defs: &DefTable, def_id: DefId) -> Result<String, LowerError> {
    let def = defs
        .lookup_def(def_id)
        .ok_or(LowerError::DefNotFound(def_id))?;
    Ok(names::local_var(def))
}

#[cfg(test)]
#[path = "../tests/t_module.rs"]
mod tests;
