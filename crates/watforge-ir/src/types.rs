//! Value types, identifiers, and signature types.
//!
//! Everything here is a small immutable value. `Display` implementations
//! render the exact WAT atom (`i64`, `$name`, `-inf`, …); composite
//! S-expression layout is the emitter's concern.

use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

// ══════════════════════════════════════════════════════════════════════════════
// Numeric types
// ══════════════════════════════════════════════════════════════════════════════

/// The four primitive WebAssembly numeric types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NumType {
    I32,
    I64,
    F32,
    F64,
}

impl NumType {
    /// The WAT keyword for this type.
    pub const fn keyword(self) -> &'static str {
        match self {
            NumType::I32 => "i32",
            NumType::I64 => "i64",
            NumType::F32 => "f32",
            NumType::F64 => "f64",
        }
    }
}

impl fmt::Display for NumType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// The integer subset of [`NumType`].
///
/// Integer-only operator families (bitwise, shifts, signed/unsigned
/// variants, narrow loads) are keyed by this type so a float-typed
/// integer opcode cannot be expressed at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IntType {
    I32,
    I64,
}

impl IntType {
    pub const fn num(self) -> NumType {
        match self {
            IntType::I32 => NumType::I32,
            IntType::I64 => NumType::I64,
        }
    }
}

impl From<IntType> for NumType {
    fn from(ty: IntType) -> Self {
        ty.num()
    }
}

impl fmt::Display for IntType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.num().keyword())
    }
}

/// The floating-point subset of [`NumType`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FloatType {
    F32,
    F64,
}

impl FloatType {
    pub const fn num(self) -> NumType {
        match self {
            FloatType::F32 => NumType::F32,
            FloatType::F64 => NumType::F64,
        }
    }
}

impl From<FloatType> for NumType {
    fn from(ty: FloatType) -> Self {
        ty.num()
    }
}

impl fmt::Display for FloatType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.num().keyword())
    }
}

/// The type of a module-level global: a numeric type plus mutability.
///
/// Mutability applies only to globals; no other construct carries it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GlobalType {
    pub ty: NumType,
    pub mutable: bool,
}

impl GlobalType {
    /// An immutable global type.
    pub const fn immutable(ty: NumType) -> Self {
        Self { ty, mutable: false }
    }

    /// A mutable global type.
    pub const fn mutable(ty: NumType) -> Self {
        Self { ty, mutable: true }
    }
}

impl From<NumType> for GlobalType {
    fn from(ty: NumType) -> Self {
        GlobalType::immutable(ty)
    }
}

// ══════════════════════════════════════════════════════════════════════════════
// Identifiers
// ══════════════════════════════════════════════════════════════════════════════

/// A symbolic WAT identifier, always stored with its `$` sigil.
///
/// Construction normalizes a missing prefix, so `Label::new("add")` and
/// `Label::new("$add")` are the same label.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Label(String);

impl Label {
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        if name.starts_with('$') {
            Self(name)
        } else {
            Self(format!("${name}"))
        }
    }

    /// The full identifier text, including the `$` sigil.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Label {
    fn from(name: &str) -> Self {
        Label::new(name)
    }
}

impl From<String> for Label {
    fn from(name: String) -> Self {
        Label::new(name)
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A reference to a label or a raw numeric index.
///
/// Branch-table targets and local-variable operators accept either form;
/// WAT resolves a bare number positionally.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Index {
    Label(Label),
    Num(u32),
}

impl From<Label> for Index {
    fn from(label: Label) -> Self {
        Index::Label(label)
    }
}

impl From<&str> for Index {
    fn from(name: &str) -> Self {
        Index::Label(Label::new(name))
    }
}

impl From<String> for Index {
    fn from(name: String) -> Self {
        Index::Label(Label::new(name))
    }
}

impl From<u32> for Index {
    fn from(index: u32) -> Self {
        Index::Num(index)
    }
}

impl fmt::Display for Index {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Index::Label(label) => label.fmt(f),
            Index::Num(index) => index.fmt(f),
        }
    }
}

// ══════════════════════════════════════════════════════════════════════════════
// Constant values
// ══════════════════════════════════════════════════════════════════════════════

/// The payload of a constant instruction.
///
/// Integer constants are held as `i64`, which represents every 32- and
/// 64-bit WebAssembly integer exactly; they are never routed through a
/// floating-point representation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Value {
    Int(i64),
    Float(f64),
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Int(value.into())
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Value::Int(value) => value.fmt(f),
            Value::Float(value) if value.is_nan() => f.write_str("nan"),
            Value::Float(value) if value.is_infinite() => {
                f.write_str(if value > 0.0 { "inf" } else { "-inf" })
            }
            Value::Float(value) => value.fmt(f),
        }
    }
}

// ══════════════════════════════════════════════════════════════════════════════
// Signature types
// ══════════════════════════════════════════════════════════════════════════════

/// Memory limits: a minimum page count and an optional maximum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Limits {
    pub min: u32,
    pub max: Option<u32>,
}

/// The anonymous signature of a `block`, `loop`, `if`, or imported
/// function: ordered value types, no names.
///
/// `results` order is semantic — it is the order values are produced.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockType {
    pub params: Vec<NumType>,
    pub results: Vec<NumType>,
    pub locals: Vec<NumType>,
}

/// The named signature of a defined function.
///
/// Parameters and locals are name-keyed and insertion-ordered; declaring
/// the same name twice replaces the earlier type without reordering.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FuncType {
    pub params: IndexMap<Label, NumType>,
    pub results: Vec<NumType>,
    pub locals: IndexMap<Label, NumType>,
}
