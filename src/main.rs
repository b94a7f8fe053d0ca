use std::collections::HashMap;

use clap::Parser as ClapParser;

use opal::flint::{self, Dialect};
use opal::lower::{LowerError, lower_module};
use opal::resolve::DefTable;
use opal::tree::{Module, TreeBuilder};

#[derive(ClapParser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Comma-separated list of things to dump: defs,ir
    #[clap(long)]
    dump: Option<String>,
}

fn main() {
    let args = Args::parse();

    match compile(args) {
        Ok(ir) => match std::fs::write("output.ir", ir) {
            Ok(_) => println!("[SUCCESS] ir written to output.ir"),
            Err(e) => println!("[ERROR] failed to write ir: {e}"),
        },
        Err(e) => {
            println!("[ERROR] {e}");
            std::process::exit(1);
        }
    }
}

fn compile(args: Args) -> Result<String, LowerError> {
    let mut dump_defs = false;
    let mut dump_ir = false;

    if let Some(dump) = &args.dump {
        for item in dump.split(',').map(|s| s.trim().to_lowercase()) {
            match item.as_str() {
                "defs" => dump_defs = true,
                "ir" => dump_ir = true,
                "" => {}
                _ => {
                    eprintln!("[WARN] unknown dump flag: {item}");
                }
            }
        }
    }

    let (module, defs) = sample_module();

    if dump_defs {
        println!("--------------------------------");
        print!("{}", defs);
        println!("--------------------------------");
    }

    let dialect = Dialect::core();
    let ir = lower_module(&module, &defs, &dialect)?;

    if dump_ir {
        println!("IR:");
        println!("--------------------------------");
        print!("{}", ir);
        println!("--------------------------------");
    }

    Ok(ir)
}

/// Builds the demo program:
///
/// ```text
/// fn main() -> r {
///     var x;
///     x = seed();
///     r = twice(x);
///     asm { store(0, r) }
/// }
/// fn seed() -> s {
///     asm { let raw := load(7) }
/// }
/// fn twice(n) -> t {
///     combine(n, n);
///     t = combine(n, n);
/// }
/// fn combine(lhs, rhs) -> c {
///     c = lhs;
///     asm { let s := add(lhs, rhs) }
/// }
/// ```
///
/// Covers the supported subset end to end: declarations, assignments,
/// calls feeding the worklist (with `combine` reached twice but lowered
/// once), and asm blocks mixing builtins, private names, and external
/// references.
fn sample_module() -> (Module, DefTable) {
    let mut b = TreeBuilder::new();

    let main_fn = b.declare_func("main");
    let seed_fn = b.declare_func("seed");
    let twice_fn = b.declare_func("twice");
    let combine_fn = b.declare_func("combine");

    // fn main() -> r
    let r = b.declare_var("r");
    let x = b.declare_var("x");
    let decl_x = b.var_decl(vec![x], None);
    let seed_callee = b.ident(seed_fn);
    let seed_call = b.call(seed_callee, vec![]);
    let x_target = b.ident(x);
    let assign_x = b.assign(x_target, seed_call);
    let stmt_seed = b.expr_stmt(assign_x);
    let twice_callee = b.ident(twice_fn);
    let x_arg = b.ident(x);
    let twice_call = b.call(twice_callee, vec![x_arg]);
    let r_target = b.ident(r);
    let assign_r = b.assign(r_target, twice_call);
    let stmt_twice = b.expr_stmt(assign_r);
    let r_occ = b.asm_ident("r");
    let refs = HashMap::from([(r_occ.id, r)]);
    let store = b.asm_ident("store");
    let body = flint::Block {
        stmts: vec![flint::Stmt::Expr(flint::Expr::Call(flint::Call {
            target: store,
            args: vec![flint::Expr::Lit(0), flint::Expr::Ref(r_occ)],
        }))],
    };
    let stmt_asm = b.asm_stmt(body, refs);
    b.function(main_fn, vec![], r, vec![decl_x, stmt_seed, stmt_twice, stmt_asm]);

    // fn seed() -> s
    let s = b.declare_var("s");
    let load = b.asm_ident("load");
    let body = flint::Block {
        stmts: vec![flint::Stmt::Let {
            name: "raw".to_string(),
            value: Some(flint::Expr::Call(flint::Call {
                target: load,
                args: vec![flint::Expr::Lit(7)],
            })),
        }],
    };
    let stmt_asm = b.asm_stmt(body, HashMap::new());
    b.function(seed_fn, vec![], s, vec![stmt_asm]);

    // fn twice(n) -> t
    let n = b.declare_var("n");
    let t = b.declare_var("t");
    let combine_callee = b.ident(combine_fn);
    let arg1 = b.ident(n);
    let arg2 = b.ident(n);
    let first_call = b.call(combine_callee, vec![arg1, arg2]);
    let stmt_first = b.expr_stmt(first_call);
    let combine_callee = b.ident(combine_fn);
    let arg1 = b.ident(n);
    let arg2 = b.ident(n);
    let second_call = b.call(combine_callee, vec![arg1, arg2]);
    let t_target = b.ident(t);
    let assign_t = b.assign(t_target, second_call);
    let stmt_second = b.expr_stmt(assign_t);
    b.function(twice_fn, vec![n], t, vec![stmt_first, stmt_second]);

    // fn combine(lhs, rhs) -> c
    let lhs = b.declare_var("lhs");
    let rhs = b.declare_var("rhs");
    let c = b.declare_var("c");
    let c_target = b.ident(c);
    let lhs_value = b.ident(lhs);
    let assign_c = b.assign(c_target, lhs_value);
    let stmt_assign = b.expr_stmt(assign_c);
    let lhs_occ = b.asm_ident("lhs");
    let rhs_occ = b.asm_ident("rhs");
    let refs = HashMap::from([(lhs_occ.id, lhs), (rhs_occ.id, rhs)]);
    let add = b.asm_ident("add");
    let body = flint::Block {
        stmts: vec![flint::Stmt::Let {
            name: "s".to_string(),
            value: Some(flint::Expr::Call(flint::Call {
                target: add,
                args: vec![flint::Expr::Ref(lhs_occ), flint::Expr::Ref(rhs_occ)],
            })),
        }],
    };
    let stmt_asm = b.asm_stmt(body, refs);
    b.function(combine_fn, vec![lhs, rhs], c, vec![stmt_assign, stmt_asm]);

    b.finish()
}
