//! Instruction node shapes.
//!
//! [`Instr`] has one variant per rendering category, so a node
//! structurally carries exactly the fields its category requires — there
//! is no way to build a `store` without a value or an `if` with two
//! `else` branches. Large recursive operands are boxed to keep the enum
//! size reasonable.
//!
//! Module-level declarations (`import`, `global`, `data`, `func`,
//! `export`, `start`, `module`) are concrete structs wrapped by an
//! [`Instr`] variant: the structs keep the module builder statically
//! typed, the variants let the renderer accept any node uniformly.

use serde::{Deserialize, Serialize};

use crate::ops::Opcode;
use crate::types::{BlockType, FuncType, GlobalType, Index, Label, Limits, Value};

/// One WebAssembly instruction or module-level declaration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Instr {
    /// `(<type>.const <value>)`
    Const { op: Opcode, value: Value },
    /// Single-operand numeric tag: unary float ops, tests, conversions.
    Unary { op: Opcode, right: Box<Instr> },
    /// Two-operand numeric tag: arithmetic, bitwise, comparisons.
    Binary {
        op: Opcode,
        left: Box<Instr>,
        right: Box<Instr>,
    },
    /// Memory read; narrow widths are part of the tag.
    Load { op: Opcode, address: Box<Instr> },
    /// Memory write.
    Store {
        op: Opcode,
        address: Box<Instr>,
        value: Box<Instr>,
    },
    MemoryCopy {
        destination: Box<Instr>,
        source: Box<Instr>,
        size: Box<Instr>,
    },
    MemoryFill {
        address: Box<Instr>,
        value: Box<Instr>,
        count: Box<Instr>,
    },
    /// `local.get` / `global.get`.
    VarGet { op: Opcode, target: Index },
    /// `local.set` / `local.tee` / `global.set`.
    VarSet {
        op: Opcode,
        target: Index,
        right: Box<Instr>,
    },
    Block {
        label: Option<Label>,
        block_type: BlockType,
        body: Vec<Instr>,
    },
    Loop {
        label: Option<Label>,
        block_type: BlockType,
        body: Vec<Instr>,
    },
    If {
        predicate: Box<Instr>,
        label: Option<Label>,
        block_type: BlockType,
        then_body: Vec<Instr>,
        else_body: Option<Vec<Instr>>,
    },
    /// Unconditional branch to an enclosing construct.
    Br { label: Label },
    /// Multi-way branch selecting among `targets` by runtime index.
    BrTable {
        targets: Vec<Index>,
        value: Box<Instr>,
    },
    Call {
        function: Label,
        arguments: Vec<Instr>,
    },
    Return { values: Vec<Instr> },
    Select {
        first: Box<Instr>,
        second: Box<Instr>,
        condition: Box<Instr>,
    },
    Drop { value: Option<Box<Instr>> },
    Unreachable,
    Nop,
    Import(Import),
    Global(Global),
    Data(Data),
    Func(Func),
    Export(Export),
    Start(Start),
    Module(Module),
}

impl Instr {
    /// The node's concrete operator tag.
    pub fn opcode(&self) -> Opcode {
        match self {
            Instr::Const { op, .. }
            | Instr::Unary { op, .. }
            | Instr::Binary { op, .. }
            | Instr::Load { op, .. }
            | Instr::Store { op, .. }
            | Instr::VarGet { op, .. }
            | Instr::VarSet { op, .. } => *op,
            Instr::MemoryCopy { .. } => Opcode::MemoryCopy,
            Instr::MemoryFill { .. } => Opcode::MemoryFill,
            Instr::Block { .. } => Opcode::Block,
            Instr::Loop { .. } => Opcode::Loop,
            Instr::If { .. } => Opcode::If,
            Instr::Br { .. } => Opcode::Br,
            Instr::BrTable { .. } => Opcode::BrTable,
            Instr::Call { .. } => Opcode::Call,
            Instr::Return { .. } => Opcode::Return,
            Instr::Select { .. } => Opcode::Select,
            Instr::Drop { .. } => Opcode::Drop,
            Instr::Unreachable => Opcode::Unreachable,
            Instr::Nop => Opcode::Nop,
            Instr::Import(_) => Opcode::Import,
            Instr::Global(_) => Opcode::Global,
            Instr::Data(_) => Opcode::Data,
            Instr::Func(_) => Opcode::Func,
            Instr::Export(_) => Opcode::Export,
            Instr::Start(_) => Opcode::Start,
            Instr::Module(_) => Opcode::Module,
        }
    }
}

// ══════════════════════════════════════════════════════════════════════════════
// Module-level declarations
// ══════════════════════════════════════════════════════════════════════════════

/// The shape of an imported item — a named function signature or memory
/// limits. This set is closed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ImportDesc {
    Func { name: Label, ty: BlockType },
    Memory(Limits),
}

/// `(import "<module>" "<item>" …)`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Import {
    pub module: String,
    pub item: String,
    pub desc: ImportDesc,
}

/// A module-level global with an initializer expression.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Global {
    pub name: Label,
    pub ty: GlobalType,
    pub init: Box<Instr>,
}

/// An active data segment: an offset expression plus the raw payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Data {
    pub offset: Box<Instr>,
    pub bytes: String,
}

/// A defined function: name, named signature, body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Func {
    pub name: Label,
    pub ty: FuncType,
    pub body: Vec<Instr>,
}

/// The shape of an exported item — a function identifier or a memory
/// index. This set is closed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExportDesc {
    Func(Label),
    Memory(u32),
}

/// `(export "<name>" …)`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Export {
    pub name: String,
    pub desc: ExportDesc,
}

/// `(start <function>)` — at most one per module.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Start {
    pub function: Label,
}

/// The root aggregate. Every collection is append-only and
/// insertion-ordered; rendering preserves that order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Module {
    pub imports: Vec<Import>,
    pub globals: Vec<Global>,
    pub datas: Vec<Data>,
    pub funcs: Vec<Func>,
    pub start: Option<Start>,
    pub exports: Vec<Export>,
}

impl From<Import> for Instr {
    fn from(import: Import) -> Self {
        Instr::Import(import)
    }
}

impl From<Global> for Instr {
    fn from(global: Global) -> Self {
        Instr::Global(global)
    }
}

impl From<Data> for Instr {
    fn from(data: Data) -> Self {
        Instr::Data(data)
    }
}

impl From<Func> for Instr {
    fn from(func: Func) -> Self {
        Instr::Func(func)
    }
}

impl From<Export> for Instr {
    fn from(export: Export) -> Self {
        Instr::Export(export)
    }
}

impl From<Start> for Instr {
    fn from(start: Start) -> Self {
        Instr::Start(start)
    }
}

impl From<Module> for Instr {
    fn from(module: Module) -> Self {
        Instr::Module(module)
    }
}

/// A function node can stand in for its own name, e.g. as a `call`
/// target.
impl From<&Func> for Label {
    fn from(func: &Func) -> Self {
        func.name.clone()
    }
}
