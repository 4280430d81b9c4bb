//! WAT text emitter for watforge instruction trees.
//!
//! The single entry point is [`render`]: given any [`watforge_ir::Instr`]
//! — typically a `module` node — it walks the tree recursively and
//! returns the canonical S-expression text, dispatching each node through
//! the operator category table. Rendering is pure and deterministic: the
//! same tree always yields the same string, and a failed render returns
//! no partial text.
//!
//! ```
//! use watforge_builder::i32;
//! use watforge_emit::render;
//!
//! let sum = i32::add(i32::const_(2), i32::const_(3));
//! assert_eq!(render(&sum).unwrap(), "(i32.add (i32.const 2) (i32.const 3))");
//! ```

mod error;
mod render;

pub use error::{EmitError, EmitResult};
pub use render::render;
