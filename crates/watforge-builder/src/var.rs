//! Variable and bulk-memory instruction constructors.

pub mod local {
    use watforge_ir::{Index, Instr, Opcode};

    /// `(local.get <target>)` — the target may be a label or a raw index.
    pub fn get(target: impl Into<Index>) -> Instr {
        Instr::VarGet {
            op: Opcode::LocalGet,
            target: target.into(),
        }
    }

    /// `(local.set <target> <right>)`
    pub fn set(target: impl Into<Index>, right: Instr) -> Instr {
        Instr::VarSet {
            op: Opcode::LocalSet,
            target: target.into(),
            right: Box::new(right),
        }
    }

    /// `(local.tee <target> <right>)` — like `set`, but leaves the value
    /// on the stack.
    pub fn tee(target: impl Into<Index>, right: Instr) -> Instr {
        Instr::VarSet {
            op: Opcode::LocalTee,
            target: target.into(),
            right: Box::new(right),
        }
    }
}

pub mod global {
    use watforge_ir::{Index, Instr, Label, Opcode};

    /// `(global.get <label>)` — globals are always referenced by name.
    pub fn get(label: impl Into<Label>) -> Instr {
        Instr::VarGet {
            op: Opcode::GlobalGet,
            target: Index::Label(label.into()),
        }
    }

    /// `(global.set <label> <right>)`
    pub fn set(label: impl Into<Label>, right: Instr) -> Instr {
        Instr::VarSet {
            op: Opcode::GlobalSet,
            target: Index::Label(label.into()),
            right: Box::new(right),
        }
    }
}

pub mod memory {
    use watforge_ir::Instr;

    /// `(memory.copy <destination> <source> <size>)`
    pub fn copy(destination: Instr, source: Instr, size: Instr) -> Instr {
        Instr::MemoryCopy {
            destination: Box::new(destination),
            source: Box::new(source),
            size: Box::new(size),
        }
    }

    /// `(memory.fill <address> <value> <count>)`
    pub fn fill(address: Instr, value: Instr, count: Instr) -> Instr {
        Instr::MemoryFill {
            address: Box::new(address),
            value: Box::new(value),
            count: Box::new(count),
        }
    }
}
