//! Integration tests for the watforge construction API.
//!
//! Tests validate:
//! - Numeric constructors produce the right node shape and tag per family
//! - Integer constants stay 64-bit-exact
//! - Variable and bulk-memory constructors
//! - Block/loop/if chainable builders, including persistent reuse via
//!   `clone` (two chains never share accumulated state)
//! - If/else sequencing (an `if` can never acquire a second `else`)
//! - Import/global/data/func/export/module builders and insertion-order
//!   preservation of module sections

use watforge_builder::{
    block, br, br_table, call, data, drop_, export, f32, f64, func, global, global_, i32, i64,
    if_, import, local, loop_, memory, module, mut_, nop, return_, select, unreachable, F64, I32,
    I64,
};
use watforge_ir::{
    ExportDesc, ImportDesc, Index, Instr, IntBinaryOp, IntType, Label, NumType, Opcode, Value,
};

// ══════════════════════════════════════════════════════════════════════════════
// Numeric constructors
// ══════════════════════════════════════════════════════════════════════════════

#[test]
fn binary_constructor_carries_both_operands() {
    let node = i32::add(i32::const_(2), i32::const_(3));
    let Instr::Binary { op, left, right } = node else {
        panic!("expected a binary node");
    };
    assert_eq!(op, Opcode::IntBinary(IntType::I32, IntBinaryOp::Add));
    assert_eq!(*left, i32::const_(2));
    assert_eq!(*right, i32::const_(3));
}

#[test]
fn integer_constants_normalize_through_i64() {
    // Above 2^53, a double would silently round; i64 must not.
    let node = i64::const_(9_007_199_254_740_993i64);
    let Instr::Const { op, value } = node else {
        panic!("expected a const node");
    };
    assert_eq!(op, Opcode::Const(NumType::I64));
    assert_eq!(value, Value::Int(9_007_199_254_740_993));

    let Instr::Const { value, .. } = i32::const_(-7) else {
        panic!("expected a const node");
    };
    assert_eq!(value, Value::Int(-7));
}

#[test]
fn float_constants_carry_floating_values() {
    let Instr::Const { op, value } = f64::const_(0.5) else {
        panic!("expected a const node");
    };
    assert_eq!(op, Opcode::Const(NumType::F64));
    assert_eq!(value, Value::Float(0.5));
}

#[test]
fn unary_test_and_conversion_constructors() {
    assert!(matches!(
        f32::sqrt(f32::const_(2.0)),
        Instr::Unary { op: Opcode::FloatUnary(..), .. }
    ));
    assert!(matches!(
        i32::eqz(i32::const_(0)),
        Instr::Unary { op: Opcode::IntTest(..), .. }
    ));
    assert!(matches!(
        i64::extend_i32_s(i32::const_(1)),
        Instr::Unary { op: Opcode::ConvertI64(_), .. }
    ));
    assert!(matches!(
        f64::promote_f32(f32::const_(1.0)),
        Instr::Unary { op: Opcode::ConvertF64(_), .. }
    ));
}

#[test]
fn load_and_store_constructors() {
    assert!(matches!(
        i32::load8_u(i32::const_(0)),
        Instr::Load { op: Opcode::LoadI32(_), .. }
    ));
    assert!(matches!(
        i64::load32_s(i32::const_(4)),
        Instr::Load { op: Opcode::LoadI64(_), .. }
    ));
    assert!(matches!(f64::load(i32::const_(8)), Instr::Load { op: Opcode::LoadF64, .. }));

    let Instr::Store { op, address, value } = f64::store(i32::const_(8), f64::const_(1.5)) else {
        panic!("expected a store node");
    };
    assert_eq!(op, Opcode::Store(NumType::F64));
    assert_eq!(*address, i32::const_(8));
    assert_eq!(*value, f64::const_(1.5));
}

// ══════════════════════════════════════════════════════════════════════════════
// Variables and bulk memory
// ══════════════════════════════════════════════════════════════════════════════

#[test]
fn local_accessors_take_labels_or_raw_indices() {
    let Instr::VarGet { op, target } = local::get("$x") else {
        panic!("expected a var-get node");
    };
    assert_eq!(op, Opcode::LocalGet);
    assert_eq!(target, Index::Label(Label::new("x")));

    let Instr::VarGet { target, .. } = local::get(2u32) else {
        panic!("expected a var-get node");
    };
    assert_eq!(target, Index::Num(2));

    let Instr::VarSet { op, target, right } = local::tee("$x", i32::const_(1)) else {
        panic!("expected a var-set node");
    };
    assert_eq!(op, Opcode::LocalTee);
    assert_eq!(target, Index::from("$x"));
    assert_eq!(*right, i32::const_(1));
}

#[test]
fn global_accessors_are_label_only() {
    assert!(matches!(
        global::get("$counter"),
        Instr::VarGet { op: Opcode::GlobalGet, target: Index::Label(_) }
    ));
    assert!(matches!(
        global::set("$counter", i32::const_(1)),
        Instr::VarSet { op: Opcode::GlobalSet, .. }
    ));
}

#[test]
fn bulk_memory_constructors_carry_three_operands() {
    let copy = memory::copy(i32::const_(0), i32::const_(16), i32::const_(8));
    assert!(matches!(copy, Instr::MemoryCopy { .. }));

    let Instr::MemoryFill { address, value, count } =
        memory::fill(i32::const_(0), i32::const_(0xff), i32::const_(4))
    else {
        panic!("expected a memory-fill node");
    };
    assert_eq!(*address, i32::const_(0));
    assert_eq!(*value, i32::const_(0xff));
    assert_eq!(*count, i32::const_(4));
}

// ══════════════════════════════════════════════════════════════════════════════
// Control-flow builders
// ══════════════════════════════════════════════════════════════════════════════

#[test]
fn block_builder_accumulates_signature_and_label() {
    let node = block()
        .label("body")
        .params([I32])
        .results([I32, I64])
        .locals([F64])
        .body(vec![nop()]);
    let Instr::Block { label, block_type, body } = node else {
        panic!("expected a block node");
    };
    assert_eq!(label, Some(Label::new("$body")));
    assert_eq!(block_type.params, vec![I32]);
    assert_eq!(block_type.results, vec![I32, I64]);
    assert_eq!(block_type.locals, vec![F64]);
    assert_eq!(body, vec![nop()]);
}

#[test]
fn loop_builder_produces_a_loop_node() {
    let node = loop_().label("$top").body(vec![br("$top")]);
    assert!(matches!(node, Instr::Loop { label: Some(_), .. }));
}

#[test]
fn cloned_builders_do_not_share_state() {
    let base = func("$f").params([("$x", I32)]);
    let with_result = base.clone().results([I32]).body(vec![return_(vec![local::get("$x")])]);
    let plain = base.body(vec![]);

    assert_eq!(with_result.ty.results, vec![I32]);
    assert!(plain.ty.results.is_empty());
    assert_eq!(plain.ty.params.len(), 1);
}

#[test]
fn if_chain_with_and_without_else() {
    let bare = if_(i32::const_(1)).then(vec![nop()]).build();
    let Instr::If { else_body, .. } = bare else {
        panic!("expected an if node");
    };
    assert_eq!(else_body, None);

    let full = if_(i32::const_(0))
        .label("$guard")
        .then(vec![nop()])
        .else_(vec![unreachable()]);
    let Instr::If { label, then_body, else_body, .. } = full else {
        panic!("expected an if node");
    };
    assert_eq!(label, Some(Label::new("guard")));
    assert_eq!(then_body, vec![nop()]);
    assert_eq!(else_body, Some(vec![unreachable()]));
}

#[test]
fn branch_and_call_constructors() {
    assert!(matches!(br("exit"), Instr::Br { .. }));

    let table = br_table(local::get("$i"), ["$a", "$b"]);
    let Instr::BrTable { targets, value } = table else {
        panic!("expected a br_table node");
    };
    assert_eq!(targets, vec![Index::from("$a"), Index::from("$b")]);
    assert_eq!(*value, local::get("$i"));

    let Instr::Call { function, arguments } = call("$f", vec![i32::const_(1)]) else {
        panic!("expected a call node");
    };
    assert_eq!(function, Label::new("f"));
    assert_eq!(arguments, vec![i32::const_(1)]);
}

#[test]
fn a_function_node_stands_in_for_its_own_name() {
    let add = func("$add").params([("$a", I32)]).body(vec![]);
    let Instr::Call { function, .. } = call(&add, vec![]) else {
        panic!("expected a call node");
    };
    assert_eq!(function, Label::new("add"));
}

#[test]
fn remaining_parallel_constructors() {
    assert_eq!(return_(vec![]), Instr::Return { values: vec![] });
    assert!(matches!(
        select(i32::const_(1), i32::const_(2), local::get("$c")),
        Instr::Select { .. }
    ));
    assert_eq!(drop_(None), Instr::Drop { value: None });
    assert!(matches!(drop_(i32::const_(1)), Instr::Drop { value: Some(_) }));
    assert_eq!(unreachable(), Instr::Unreachable);
    assert_eq!(nop(), Instr::Nop);
}

// ══════════════════════════════════════════════════════════════════════════════
// Module-level builders
// ══════════════════════════════════════════════════════════════════════════════

#[test]
fn import_builder_covers_both_extern_shapes() {
    let mem = import("env", "mem").memory(1, 4);
    assert_eq!(mem.module, "env");
    assert_eq!(mem.item, "mem");
    let ImportDesc::Memory(limits) = mem.desc else {
        panic!("expected a memory import");
    };
    assert_eq!((limits.min, limits.max), (1, Some(4)));

    let log = import("env", "log").func("$log").params([I32, I32]).build();
    let ImportDesc::Func { name, ty } = log.desc else {
        panic!("expected a func import");
    };
    assert_eq!(name, Label::new("log"));
    assert_eq!(ty.params, vec![I32, I32]);
    assert!(ty.results.is_empty());
}

#[test]
fn global_builder_attaches_type_and_initializer() {
    let ro = global_("$origin", I32).init(i32::const_(0));
    assert!(!ro.ty.mutable);
    assert_eq!(ro.ty.ty, I32);

    let rw = global_("$counter", mut_(I64)).init(i64::const_(1));
    assert!(rw.ty.mutable);
    assert_eq!(*rw.init, i64::const_(1));
}

#[test]
fn func_builder_keeps_named_params_and_locals_in_order() {
    let f = func("$blend")
        .params([("$a", I32), ("$b", F64)])
        .results([F64])
        .locals([("$tmp", F64)])
        .body(vec![nop()]);

    let params: Vec<_> = f.ty.params.iter().map(|(name, ty)| (name.as_str(), *ty)).collect();
    assert_eq!(params, vec![("$a", I32), ("$b", F64)]);
    assert_eq!(f.ty.results, vec![F64]);
    assert_eq!(f.ty.locals.get(&Label::new("tmp")), Some(&F64));
    assert_eq!(f.body, vec![nop()]);
}

#[test]
fn redeclaring_a_param_name_replaces_without_reordering() {
    let f = func("$f")
        .params([("$a", I32), ("$b", I32)])
        .params([("$a", I64)])
        .body(vec![]);
    let params: Vec<_> = f.ty.params.iter().map(|(name, ty)| (name.as_str(), *ty)).collect();
    assert_eq!(params, vec![("$a", I64), ("$b", I32)]);
}

#[test]
fn export_builder_covers_both_extern_shapes() {
    let run = export("run").func("$main");
    assert_eq!(run.name, "run");
    assert_eq!(run.desc, ExportDesc::Func(Label::new("main")));

    let mem = export("mem").memory(0);
    assert_eq!(mem.desc, ExportDesc::Memory(0));
}

#[test]
fn module_sections_preserve_insertion_order_across_calls() {
    let m = module()
        .imports([import("env", "a").memory(1, None)])
        .globals([global_("$c", I32).init(i32::const_(0))])
        .imports([import("env", "b").func("$b").build()])
        .globals([global_("$d", mut_(I32)).init(i32::const_(1))])
        .funcs([func("$one").body(vec![]), func("$two").body(vec![])])
        .build();

    let imports: Vec<_> = m.imports.iter().map(|i| i.item.as_str()).collect();
    assert_eq!(imports, vec!["a", "b"]);
    let globals: Vec<_> = m.globals.iter().map(|g| g.name.as_str()).collect();
    assert_eq!(globals, vec!["$c", "$d"]);
    let funcs: Vec<_> = m.funcs.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(funcs, vec!["$one", "$two"]);
    assert_eq!(m.start, None);
}

#[test]
fn start_func_designates_the_start_function_once() {
    // StartedModuleBuilder has no start_func method, so a second start
    // cannot be expressed at all; the remaining sections still chain.
    let m = module()
        .funcs([func("$main").body(vec![])])
        .start_func("$main")
        .exports([export("main").func("$main")])
        .build();

    assert_eq!(m.start.map(|s| s.function), Some(Label::new("main")));
    assert_eq!(m.exports.len(), 1);
}

#[test]
fn data_segment_carries_offset_and_payload() {
    let d = data(i32::const_(16), "greeting");
    assert_eq!(*d.offset, i32::const_(16));
    assert_eq!(d.bytes, "greeting");
}
