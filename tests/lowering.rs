use std::collections::HashMap;

use indoc::indoc;

use opal::flint::{Block, Call, Dialect, Expr, Stmt};
use opal::lower::lower_module;
use opal::tree::TreeBuilder;

/// Lowers this program through the public surface and checks the whole
/// module output:
///
/// ```text
/// fn main() -> out {
///     var x;
///     out = double(x);
///     asm { store(0, out) }
/// }
/// fn double(n) -> d {
///     asm { let s := add(n, n) }
/// }
/// ```
#[test]
fn test_lower_program_end_to_end() {
    let mut b = TreeBuilder::new();
    let main_fn = b.declare_func("main");
    let double_fn = b.declare_func("double");
    let out = b.declare_var("out");
    let x = b.declare_var("x");
    let n = b.declare_var("n");
    let d = b.declare_var("d");

    let decl_x = b.var_decl(vec![x], None);
    let callee = b.ident(double_fn);
    let arg = b.ident(x);
    let call = b.call(callee, vec![arg]);
    let target = b.ident(out);
    let assign = b.assign(target, call);
    let stmt_assign = b.expr_stmt(assign);
    let out_occ = b.asm_ident("out");
    let refs = HashMap::from([(out_occ.id, out)]);
    let store = b.asm_ident("store");
    let body = Block {
        stmts: vec![Stmt::Expr(Expr::Call(Call {
            target: store,
            args: vec![Expr::Lit(0), Expr::Ref(out_occ)],
        }))],
    };
    let stmt_asm = b.asm_stmt(body, refs);
    b.function(main_fn, vec![], out, vec![decl_x, stmt_assign, stmt_asm]);

    let n_first = b.asm_ident("n");
    let n_second = b.asm_ident("n");
    let refs = HashMap::from([(n_first.id, n), (n_second.id, n)]);
    let add = b.asm_ident("add");
    let body = Block {
        stmts: vec![Stmt::Let {
            name: "s".to_string(),
            value: Some(Expr::Call(Call {
                target: add,
                args: vec![Expr::Ref(n_first), Expr::Ref(n_second)],
            })),
        }],
    };
    let stmt_asm = b.asm_stmt(body, refs);
    b.function(double_fn, vec![n], d, vec![stmt_asm]);

    let (module, defs) = b.finish();
    let ir = lower_module(&module, &defs, &Dialect::core()).expect("failed to lower");

    assert_eq!(
        ir,
        indoc! {"
            function fun_main_0() -> var_out_2 {
                let var_x_3
                let expr_2 := var_x_3
                let expr_3 := fun_double_1(expr_2)
                var_out_2 := expr_3
                let expr_5 := var_out_2
                {
                    store(0, var_out_2)
                }
            }

            function fun_double_1(var_n_4) -> var_d_5 {
                {
                    let usr$s := add(var_n_4, var_n_4)
                }
            }
        "}
    );
}

#[test]
fn test_unsupported_expression_reports_node() {
    let mut b = TreeBuilder::new();
    let f = b.declare_func("f");
    let r = b.declare_var("r");
    let lit = b.int_lit(1);
    let stmt = b.expr_stmt(lit);
    b.function(f, vec![], r, vec![stmt]);
    let (module, defs) = b.finish();

    let err = lower_module(&module, &defs, &Dialect::core()).unwrap_err();
    assert_eq!(
        err.to_string(),
        "unsupported expression during lowering (node NodeId(0))"
    );
}
