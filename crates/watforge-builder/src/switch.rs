//! Branch-table block synthesis.
//!
//! WebAssembly has no switch construct: `br_table` jumps to the Nth
//! enclosing block counting outward from the branch. This helper wraps
//! one case body per target in a chain of nested blocks so that breaking
//! out of exactly `k` blocks lands at the start of case `k`'s code.

use watforge_ir::{BlockType, Index, Instr};

use crate::error::{BuildError, BuildResult};

/// Expand a `br_table` node plus one instruction sequence per case into
/// the nested-block chain that implements the multi-way jump.
///
/// Case index 0 becomes the innermost block and holds the `br_table`
/// itself; case `k`'s body sits immediately after the close of the block
/// named by target `k`. Execution therefore falls through from the end of
/// one case into the next, mirroring duplicated-switch fallthrough — a
/// case that must not fall through ends with its own `br`.
///
/// A `Label` target names its synthesized block; a raw-index target
/// leaves the block unlabeled.
///
/// Fails if `table` is not a `br_table` node, or if the number of case
/// bodies differs from the number of targets.
pub fn br_table_blocks(table: Instr, bodies: Vec<Vec<Instr>>) -> BuildResult<Vec<Instr>> {
    let Instr::BrTable { targets, value } = table else {
        return Err(BuildError::ExpectedBrTable {
            found: table.opcode(),
        });
    };
    if targets.len() != bodies.len() {
        return Err(BuildError::BrTableArity {
            targets: targets.len(),
            bodies: bodies.len(),
        });
    }

    // Innermost position: the original br_table, re-issued over the same
    // targets. Each pass wraps the chain so far in the next case's block
    // and appends that case's body after it.
    let mut chain = vec![Instr::BrTable {
        targets: targets.clone(),
        value,
    }];
    for (target, body) in targets.iter().zip(bodies) {
        let label = match target {
            Index::Label(label) => Some(label.clone()),
            Index::Num(_) => None,
        };
        let wrapped = Instr::Block {
            label,
            block_type: BlockType::default(),
            body: chain,
        };
        chain = std::iter::once(wrapped).chain(body).collect();
    }
    Ok(chain)
}
