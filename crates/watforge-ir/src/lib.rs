//! Shared data model for the watforge WAT toolkit.
//!
//! This crate defines the instruction-tree node types, the numeric
//! value-type system, and the operator dispatch table used by the
//! builder and emitter crates.
//!
//! Nodes are plain immutable values: trees are assembled bottom-up
//! (children before parents) and never mutated afterwards, so a finished
//! tree can be rendered repeatedly — or from several threads — with
//! identical output.

mod dispatch;
mod instr;
mod ops;
mod types;

pub use dispatch::Category;
pub use instr::{
    Data, Export, ExportDesc, Func, Global, Import, ImportDesc, Instr, Module, Start,
};
pub use ops::{
    F32ConvertOp, F64ConvertOp, FloatBinaryOp, FloatCompareOp, FloatUnaryOp, I32ConvertOp,
    I32LoadOp, I64ConvertOp, I64LoadOp, IntBinaryOp, IntCompareOp, IntTestOp, Opcode,
};
pub use types::{
    BlockType, FloatType, FuncType, GlobalType, Index, IntType, Label, Limits, NumType, Value,
};
