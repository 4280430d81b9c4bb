//! The closed operator vocabularies and the concrete operator tag.
//!
//! Each family enum lists every operator the corresponding value-type
//! class supports — nothing outside these lists is expressible. [`Opcode`]
//! combines a family with the value type it applies to and renders the
//! dot-qualified tag text (`i64.div_s`, `f32.sqrt`, `local.tee`, …).

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::types::{FloatType, IntType, NumType};

macro_rules! op_family {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $text:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            /// Every operator in this family, in canonical order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// The operator text after the dot in its tag.
            pub const fn name(self) -> &'static str {
                match self {
                    $($name::$variant => $text),+
                }
            }
        }
    };
}

op_family! {
    /// Integer arithmetic, bitwise, and shift operators.
    IntBinaryOp {
        Add => "add",
        Sub => "sub",
        Mul => "mul",
        DivS => "div_s",
        DivU => "div_u",
        And => "and",
        Or => "or",
        Xor => "xor",
        Shl => "shl",
        ShrS => "shr_s",
        ShrU => "shr_u",
    }
}

op_family! {
    /// Floating-point arithmetic operators.
    FloatBinaryOp {
        Add => "add",
        Sub => "sub",
        Mul => "mul",
        Div => "div",
    }
}

op_family! {
    /// Integer comparisons. All comparisons yield an `i32`.
    IntCompareOp {
        Eq => "eq",
        Ne => "ne",
        LtS => "lt_s",
        LtU => "lt_u",
        GtS => "gt_s",
        GtU => "gt_u",
        LeS => "le_s",
        LeU => "le_u",
        GeS => "ge_s",
        GeU => "ge_u",
    }
}

op_family! {
    /// Floating-point comparisons. All comparisons yield an `i32`.
    FloatCompareOp {
        Eq => "eq",
        Ne => "ne",
        Lt => "lt",
        Gt => "gt",
        Le => "le",
        Ge => "ge",
    }
}

op_family! {
    /// Unary floating-point operators.
    FloatUnaryOp {
        Neg => "neg",
        Abs => "abs",
        Sqrt => "sqrt",
        Ceil => "ceil",
        Floor => "floor",
        Trunc => "trunc",
        Nearest => "nearest",
    }
}

op_family! {
    /// Integer test operators.
    IntTestOp {
        Eqz => "eqz",
    }
}

op_family! {
    /// Conversions producing an `i32`.
    I32ConvertOp {
        WrapI64 => "wrap_i64",
        ReinterpretF32 => "reinterpret_f32",
        TruncF32S => "trunc_f32_s",
        TruncF32U => "trunc_f32_u",
        TruncF64S => "trunc_f64_s",
        TruncF64U => "trunc_f64_u",
    }
}

op_family! {
    /// Conversions producing an `i64`.
    I64ConvertOp {
        ExtendI32S => "extend_i32_s",
        ExtendI32U => "extend_i32_u",
        ReinterpretF64 => "reinterpret_f64",
        TruncF32S => "trunc_f32_s",
        TruncF32U => "trunc_f32_u",
        TruncF64S => "trunc_f64_s",
        TruncF64U => "trunc_f64_u",
    }
}

op_family! {
    /// Conversions producing an `f32`.
    F32ConvertOp {
        DemoteF64 => "demote_f64",
        ReinterpretI32 => "reinterpret_i32",
        ConvertI32S => "convert_i32_s",
        ConvertI32U => "convert_i32_u",
        ConvertI64S => "convert_i64_s",
        ConvertI64U => "convert_i64_u",
    }
}

op_family! {
    /// Conversions producing an `f64`.
    F64ConvertOp {
        PromoteF32 => "promote_f32",
        ReinterpretI64 => "reinterpret_i64",
        ConvertI32S => "convert_i32_s",
        ConvertI32U => "convert_i32_u",
        ConvertI64S => "convert_i64_s",
        ConvertI64U => "convert_i64_u",
    }
}

op_family! {
    /// `i32` loads: full width plus the narrow widths.
    ///
    /// Narrow widths are part of the tag, not a separate field.
    I32LoadOp {
        Load => "load",
        Load8S => "load8_s",
        Load8U => "load8_u",
        Load16S => "load16_s",
        Load16U => "load16_u",
    }
}

op_family! {
    /// `i64` loads: full width plus the narrow widths, including 32-bit.
    I64LoadOp {
        Load => "load",
        Load8S => "load8_s",
        Load8U => "load8_u",
        Load16S => "load16_s",
        Load16U => "load16_u",
        Load32S => "load32_s",
        Load32U => "load32_u",
    }
}

// ══════════════════════════════════════════════════════════════════════════════
// Concrete operator tags
// ══════════════════════════════════════════════════════════════════════════════

/// A concrete operator tag.
///
/// Numeric/memory/variable tags are dot-qualified (`<type>.<operation>`);
/// control and module tags are bare keywords. The set of constructible
/// tags is closed: every variant below maps to exactly one rendering
/// category via [`Opcode::category`](crate::Category).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Opcode {
    Const(NumType),
    IntBinary(IntType, IntBinaryOp),
    FloatBinary(FloatType, FloatBinaryOp),
    IntCompare(IntType, IntCompareOp),
    FloatCompare(FloatType, FloatCompareOp),
    FloatUnary(FloatType, FloatUnaryOp),
    IntTest(IntType, IntTestOp),
    ConvertI32(I32ConvertOp),
    ConvertI64(I64ConvertOp),
    ConvertF32(F32ConvertOp),
    ConvertF64(F64ConvertOp),
    LoadI32(I32LoadOp),
    LoadI64(I64LoadOp),
    LoadF32,
    LoadF64,
    Store(NumType),
    LocalGet,
    LocalSet,
    LocalTee,
    GlobalGet,
    GlobalSet,
    MemoryCopy,
    MemoryFill,
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

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Opcode::Const(ty) => write!(f, "{ty}.const"),
            Opcode::IntBinary(ty, op) => write!(f, "{ty}.{}", op.name()),
            Opcode::FloatBinary(ty, op) => write!(f, "{ty}.{}", op.name()),
            Opcode::IntCompare(ty, op) => write!(f, "{ty}.{}", op.name()),
            Opcode::FloatCompare(ty, op) => write!(f, "{ty}.{}", op.name()),
            Opcode::FloatUnary(ty, op) => write!(f, "{ty}.{}", op.name()),
            Opcode::IntTest(ty, op) => write!(f, "{ty}.{}", op.name()),
            Opcode::ConvertI32(op) => write!(f, "i32.{}", op.name()),
            Opcode::ConvertI64(op) => write!(f, "i64.{}", op.name()),
            Opcode::ConvertF32(op) => write!(f, "f32.{}", op.name()),
            Opcode::ConvertF64(op) => write!(f, "f64.{}", op.name()),
            Opcode::LoadI32(op) => write!(f, "i32.{}", op.name()),
            Opcode::LoadI64(op) => write!(f, "i64.{}", op.name()),
            Opcode::LoadF32 => f.write_str("f32.load"),
            Opcode::LoadF64 => f.write_str("f64.load"),
            Opcode::Store(ty) => write!(f, "{ty}.store"),
            Opcode::LocalGet => f.write_str("local.get"),
            Opcode::LocalSet => f.write_str("local.set"),
            Opcode::LocalTee => f.write_str("local.tee"),
            Opcode::GlobalGet => f.write_str("global.get"),
            Opcode::GlobalSet => f.write_str("global.set"),
            Opcode::MemoryCopy => f.write_str("memory.copy"),
            Opcode::MemoryFill => f.write_str("memory.fill"),
            Opcode::Block => f.write_str("block"),
            Opcode::Loop => f.write_str("loop"),
            Opcode::If => f.write_str("if"),
            Opcode::Br => f.write_str("br"),
            Opcode::BrTable => f.write_str("br_table"),
            Opcode::Call => f.write_str("call"),
            Opcode::Return => f.write_str("return"),
            Opcode::Select => f.write_str("select"),
            Opcode::Drop => f.write_str("drop"),
            Opcode::Unreachable => f.write_str("unreachable"),
            Opcode::Nop => f.write_str("nop"),
            Opcode::Import => f.write_str("import"),
            Opcode::Global => f.write_str("global"),
            Opcode::Data => f.write_str("data"),
            Opcode::Func => f.write_str("func"),
            Opcode::Export => f.write_str("export"),
            Opcode::Start => f.write_str("start"),
            Opcode::Module => f.write_str("module"),
        }
    }
}
