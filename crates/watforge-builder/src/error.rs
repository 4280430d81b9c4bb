//! Builder error types.

use thiserror::Error;
use watforge_ir::Opcode;

/// Errors that can occur while assembling instruction trees.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BuildError {
    /// A branch-table synthesis was given a different number of case
    /// bodies than the table has targets.
    #[error("br_table has {targets} target(s) but {bodies} case body/bodies were supplied")]
    BrTableArity { targets: usize, bodies: usize },

    /// The branch-table synthesizer was handed a node that is not a
    /// `br_table` instruction.
    #[error("expected a br_table instruction, found `{found}`")]
    ExpectedBrTable { found: Opcode },
}

/// Builder result type alias.
pub type BuildResult<T> = Result<T, BuildError>;
