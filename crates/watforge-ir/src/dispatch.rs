//! The operator dispatch table.
//!
//! Hundreds of concrete tags collapse onto a small set of rendering
//! categories: every `i32`/`i64`/`f32`/`f64` binary arithmetic or
//! comparison tag renders the same way, all load widths render the same
//! way, and so on. The emitter picks its renderer by category, so adding
//! an operator whose shape matches an existing category needs only a new
//! table entry here, never new rendering code.

use serde::{Deserialize, Serialize};

use crate::ops::Opcode;

/// A semantic rendering category.
///
/// Each category implies a fixed field set on the instruction node and a
/// single textual template in the emitter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Const,
    Unary,
    Binary,
    Load,
    Store,
    MemoryCopy,
    MemoryFill,
    VariableGet,
    VariableSet,
    Block,
    Loop,
    If,
    Br,
    BrTable,
    Call,
    Return,
    Select,
    Drop,
    Unreachable,
    Nop,
    Import,
    Global,
    Data,
    Func,
    Export,
    Start,
    Module,
}

impl Opcode {
    /// The rendering category this tag belongs to.
    ///
    /// Total over every constructible tag; the match is deliberately
    /// wildcard-free so a new [`Opcode`] variant fails to compile until it
    /// is entered here.
    pub const fn category(self) -> Category {
        match self {
            Opcode::Const(_) => Category::Const,

            Opcode::IntBinary(..)
            | Opcode::FloatBinary(..)
            | Opcode::IntCompare(..)
            | Opcode::FloatCompare(..) => Category::Binary,

            Opcode::FloatUnary(..)
            | Opcode::IntTest(..)
            | Opcode::ConvertI32(_)
            | Opcode::ConvertI64(_)
            | Opcode::ConvertF32(_)
            | Opcode::ConvertF64(_) => Category::Unary,

            Opcode::LoadI32(_) | Opcode::LoadI64(_) | Opcode::LoadF32 | Opcode::LoadF64 => {
                Category::Load
            }
            Opcode::Store(_) => Category::Store,
            Opcode::MemoryCopy => Category::MemoryCopy,
            Opcode::MemoryFill => Category::MemoryFill,

            Opcode::LocalGet | Opcode::GlobalGet => Category::VariableGet,
            Opcode::LocalSet | Opcode::LocalTee | Opcode::GlobalSet => Category::VariableSet,

            Opcode::Block => Category::Block,
            Opcode::Loop => Category::Loop,
            Opcode::If => Category::If,
            Opcode::Br => Category::Br,
            Opcode::BrTable => Category::BrTable,
            Opcode::Call => Category::Call,
            Opcode::Return => Category::Return,
            Opcode::Select => Category::Select,
            Opcode::Drop => Category::Drop,
            Opcode::Unreachable => Category::Unreachable,
            Opcode::Nop => Category::Nop,

            Opcode::Import => Category::Import,
            Opcode::Global => Category::Global,
            Opcode::Data => Category::Data,
            Opcode::Func => Category::Func,
            Opcode::Export => Category::Export,
            Opcode::Start => Category::Start,
            Opcode::Module => Category::Module,
        }
    }
}
