//! Integration tests for the branch-table block synthesizer.
//!
//! Tests validate:
//! - Three targets with three case bodies produce three nested blocks,
//!   `br_table` in the innermost position, case 0 innermost
//! - Labeled targets name their blocks, numeric targets leave them bare
//! - Fallthrough layout: case `k`'s body sits right after the close of
//!   the block named by target `k`
//! - Arity mismatch and non-`br_table` inputs fail, never truncate

use watforge_builder::{br_table, br_table_blocks, call, i32, local, nop, BuildError};
use watforge_ir::{Index, Instr, Label, Opcode};

/// Split the head block off a synthesized chain, returning its label,
/// its body, and whatever instructions trail it.
fn open_block(chain: Vec<Instr>) -> (Option<Label>, Vec<Instr>, Vec<Instr>) {
    let mut chain = chain.into_iter();
    let Some(Instr::Block { label, body, .. }) = chain.next() else {
        panic!("chain does not start with a block");
    };
    (label, body, chain.collect())
}

#[test]
fn three_cases_nest_three_blocks_with_the_table_innermost() {
    let table = br_table(local::get("$i"), ["$a", "$b", "$c"]);
    let chain = br_table_blocks(
        table,
        vec![
            vec![call("$case0", vec![])],
            vec![call("$case1", vec![])],
            vec![call("$case2", vec![])],
        ],
    )
    .unwrap();

    // Outermost block carries the last target's label; case 2's body
    // trails it.
    let (label, body, rest) = open_block(chain);
    assert_eq!(label, Some(Label::new("c")));
    assert_eq!(rest, vec![call("$case2", vec![])]);

    let (label, body, rest) = open_block(body);
    assert_eq!(label, Some(Label::new("b")));
    assert_eq!(rest, vec![call("$case1", vec![])]);

    let (label, body, rest) = open_block(body);
    assert_eq!(label, Some(Label::new("a")));
    assert_eq!(rest, vec![call("$case0", vec![])]);

    // Innermost position holds the original br_table over the same
    // targets and value.
    let [Instr::BrTable { targets, value }] = body.as_slice() else {
        panic!("innermost block does not hold the br_table");
    };
    assert_eq!(
        targets,
        &vec![Index::from("$a"), Index::from("$b"), Index::from("$c")]
    );
    assert_eq!(**value, local::get("$i"));
}

#[test]
fn numeric_targets_leave_their_blocks_unlabeled() {
    let table = br_table(local::get(0u32), vec![Index::from("$named"), Index::from(1u32)]);
    let chain = br_table_blocks(table, vec![vec![nop()], vec![nop()]]).unwrap();

    let (outer_label, body, _) = open_block(chain);
    assert_eq!(outer_label, None);
    let (inner_label, _, _) = open_block(body);
    assert_eq!(inner_label, Some(Label::new("named")));
}

#[test]
fn case_bodies_may_hold_several_instructions() {
    let table = br_table(local::get("$i"), ["$only"]);
    let chain = br_table_blocks(table, vec![vec![call("$first", vec![]), nop()]]).unwrap();

    let (_, _, rest) = open_block(chain);
    assert_eq!(rest, vec![call("$first", vec![]), nop()]);
}

#[test]
fn mismatched_body_count_is_an_arity_error() {
    let table = br_table(local::get("$i"), ["$a", "$b", "$c"]);
    let result = br_table_blocks(table, vec![vec![nop()], vec![nop()]]);
    assert_eq!(
        result,
        Err(BuildError::BrTableArity {
            targets: 3,
            bodies: 2,
        })
    );
}

#[test]
fn non_branch_table_input_is_a_shape_error() {
    let result = br_table_blocks(i32::const_(0), vec![]);
    assert_eq!(
        result,
        Err(BuildError::ExpectedBrTable {
            found: Opcode::Const(watforge_ir::NumType::I32),
        })
    );
}
