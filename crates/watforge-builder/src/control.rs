//! Control-flow instruction constructors.
//!
//! `block`, `loop`, and `if` use chainable builders: every configuration
//! method takes the builder by value and returns the updated value, so a
//! partially configured builder can only be reused through an explicit
//! `clone` and two chains never share accumulated state. The terminal
//! method (`body`, `then`/`else_`/`build`) freezes the configuration into
//! a finished node.

use watforge_ir::{BlockType, Index, Instr, Label, NumType};

#[derive(Debug, Clone, Copy)]
enum BlockKind {
    Block,
    Loop,
}

/// Chainable configuration for a `block` or `loop` node.
#[derive(Debug, Clone)]
pub struct BlockBuilder {
    kind: BlockKind,
    label: Option<Label>,
    block_type: BlockType,
}

impl BlockBuilder {
    pub fn label(mut self, label: impl Into<Label>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn params(mut self, types: impl IntoIterator<Item = NumType>) -> Self {
        self.block_type.params.extend(types);
        self
    }

    pub fn results(mut self, types: impl IntoIterator<Item = NumType>) -> Self {
        self.block_type.results.extend(types);
        self
    }

    pub fn locals(mut self, types: impl IntoIterator<Item = NumType>) -> Self {
        self.block_type.locals.extend(types);
        self
    }

    /// Attach the body and return the finished node.
    pub fn body(self, body: Vec<Instr>) -> Instr {
        match self.kind {
            BlockKind::Block => Instr::Block {
                label: self.label,
                block_type: self.block_type,
                body,
            },
            BlockKind::Loop => Instr::Loop {
                label: self.label,
                block_type: self.block_type,
                body,
            },
        }
    }
}

/// Start building an unlabeled `block`.
pub fn block() -> BlockBuilder {
    BlockBuilder {
        kind: BlockKind::Block,
        label: None,
        block_type: BlockType::default(),
    }
}

/// Start building an unlabeled `loop`.
pub fn loop_() -> BlockBuilder {
    BlockBuilder {
        kind: BlockKind::Loop,
        label: None,
        block_type: BlockType::default(),
    }
}

/// Chainable configuration for an `if` node; `then` moves on to
/// [`IfThen`].
#[derive(Debug, Clone)]
pub struct IfBuilder {
    predicate: Box<Instr>,
    label: Option<Label>,
    block_type: BlockType,
}

impl IfBuilder {
    pub fn label(mut self, label: impl Into<Label>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn params(mut self, types: impl IntoIterator<Item = NumType>) -> Self {
        self.block_type.params.extend(types);
        self
    }

    pub fn results(mut self, types: impl IntoIterator<Item = NumType>) -> Self {
        self.block_type.results.extend(types);
        self
    }

    pub fn locals(mut self, types: impl IntoIterator<Item = NumType>) -> Self {
        self.block_type.locals.extend(types);
        self
    }

    /// Attach the `then` arm.
    pub fn then(self, then_body: Vec<Instr>) -> IfThen {
        IfThen {
            predicate: self.predicate,
            label: self.label,
            block_type: self.block_type,
            then_body,
        }
    }
}

/// An `if` with its `then` arm attached.
///
/// Both finishing operations consume the value, so an `if` can never
/// acquire a second `else` arm.
#[derive(Debug, Clone)]
pub struct IfThen {
    predicate: Box<Instr>,
    label: Option<Label>,
    block_type: BlockType,
    then_body: Vec<Instr>,
}

impl IfThen {
    /// Attach an `else` arm and return the finished node.
    pub fn else_(self, else_body: Vec<Instr>) -> Instr {
        Instr::If {
            predicate: self.predicate,
            label: self.label,
            block_type: self.block_type,
            then_body: self.then_body,
            else_body: Some(else_body),
        }
    }

    /// Finish without an `else` arm.
    pub fn build(self) -> Instr {
        Instr::If {
            predicate: self.predicate,
            label: self.label,
            block_type: self.block_type,
            then_body: self.then_body,
            else_body: None,
        }
    }
}

impl From<IfThen> for Instr {
    fn from(if_then: IfThen) -> Self {
        if_then.build()
    }
}

/// Start building an `if` over the given predicate.
pub fn if_(predicate: Instr) -> IfBuilder {
    IfBuilder {
        predicate: Box::new(predicate),
        label: None,
        block_type: BlockType::default(),
    }
}

/// `(br <label>)`
pub fn br(label: impl Into<Label>) -> Instr {
    Instr::Br {
        label: label.into(),
    }
}

/// `(br_table <targets…> <value>)` — a multi-way jump selecting among
/// `targets` by the runtime value.
pub fn br_table<T: Into<Index>>(value: Instr, targets: impl IntoIterator<Item = T>) -> Instr {
    Instr::BrTable {
        targets: targets.into_iter().map(Into::into).collect(),
        value: Box::new(value),
    }
}

/// `(call <function> <arguments…>)` — a `&Func` also works as the
/// function reference.
pub fn call(function: impl Into<Label>, arguments: Vec<Instr>) -> Instr {
    Instr::Call {
        function: function.into(),
        arguments,
    }
}

/// `(return <values…>)`
pub fn return_(values: Vec<Instr>) -> Instr {
    Instr::Return { values }
}

/// `(select <first> <second> <condition>)`
pub fn select(first: Instr, second: Instr, condition: Instr) -> Instr {
    Instr::Select {
        first: Box::new(first),
        second: Box::new(second),
        condition: Box::new(condition),
    }
}

/// `(drop <value?>)`
pub fn drop_(value: impl Into<Option<Instr>>) -> Instr {
    Instr::Drop {
        value: value.into().map(Box::new),
    }
}

/// `(unreachable)`
pub fn unreachable() -> Instr {
    Instr::Unreachable
}

/// `(nop)`
pub fn nop() -> Instr {
    Instr::Nop
}
