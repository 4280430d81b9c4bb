//! Emitter error types.

use thiserror::Error;
use watforge_ir::{Category, Opcode};

/// Errors that can occur while rendering an instruction tree.
///
/// Rendering a tree produced by the builder API cannot fail; these arise
/// only from hand-assembled nodes whose tag disagrees with their shape —
/// a defect in the caller's IR construction, surfaced as an error rather
/// than silently dropped data. A failed render returns no partial text.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EmitError {
    /// An operator tag reached a renderer for a different category.
    #[error("operator `{opcode}` belongs to the {found:?} category but reached the {expected:?} renderer")]
    CategoryMismatch {
        opcode: Opcode,
        found: Category,
        expected: Category,
    },
}

/// Emitter result type alias.
pub type EmitResult<T> = Result<T, EmitError>;
