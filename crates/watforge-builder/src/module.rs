//! Module-level declaration builders.
//!
//! These produce the concrete declaration structs (`Import`, `Global`,
//! `Data`, `Func`, `Export`, `Module`) rather than bare [`Instr`] values,
//! so a module can only be assembled from the right kinds of parts. Each
//! struct converts into an [`Instr`] when it needs to be rendered or
//! embedded.

use watforge_ir::{
    BlockType, Data, Export, ExportDesc, Func, FuncType, Global, GlobalType, Import, ImportDesc,
    Instr, Label, Limits, Module, NumType, Start,
};

/// Shorthand for a mutable global type.
pub fn mut_(ty: NumType) -> GlobalType {
    GlobalType::mutable(ty)
}

// ══════════════════════════════════════════════════════════════════════════════
// Imports
// ══════════════════════════════════════════════════════════════════════════════

/// Start building an import of `item` from `module`.
pub fn import(module: impl Into<String>, item: impl Into<String>) -> ImportBuilder {
    ImportBuilder {
        module: module.into(),
        item: item.into(),
    }
}

/// An import with its module/item names fixed; pick the imported shape.
#[derive(Debug, Clone)]
pub struct ImportBuilder {
    module: String,
    item: String,
}

impl ImportBuilder {
    /// Import a memory with the given limits.
    pub fn memory(self, min: u32, max: impl Into<Option<u32>>) -> Import {
        Import {
            module: self.module,
            item: self.item,
            desc: ImportDesc::Memory(Limits {
                min,
                max: max.into(),
            }),
        }
    }

    /// Import a function under the given internal name; configure its
    /// signature, then `build`.
    pub fn func(self, name: impl Into<Label>) -> ImportFuncBuilder {
        ImportFuncBuilder {
            module: self.module,
            item: self.item,
            name: name.into(),
            ty: BlockType::default(),
        }
    }
}

/// Chainable signature configuration for a function import.
#[derive(Debug, Clone)]
pub struct ImportFuncBuilder {
    module: String,
    item: String,
    name: Label,
    ty: BlockType,
}

impl ImportFuncBuilder {
    pub fn params(mut self, types: impl IntoIterator<Item = NumType>) -> Self {
        self.ty.params.extend(types);
        self
    }

    pub fn results(mut self, types: impl IntoIterator<Item = NumType>) -> Self {
        self.ty.results.extend(types);
        self
    }

    pub fn locals(mut self, types: impl IntoIterator<Item = NumType>) -> Self {
        self.ty.locals.extend(types);
        self
    }

    /// Freeze the signature and return the finished import.
    pub fn build(self) -> Import {
        Import {
            module: self.module,
            item: self.item,
            desc: ImportDesc::Func {
                name: self.name,
                ty: self.ty,
            },
        }
    }
}

// ══════════════════════════════════════════════════════════════════════════════
// Globals, data segments
// ══════════════════════════════════════════════════════════════════════════════

/// Start building a module-level global. A bare [`NumType`] gives an
/// immutable global; wrap it with [`mut_`] for a mutable one.
pub fn global_(name: impl Into<Label>, ty: impl Into<GlobalType>) -> GlobalBuilder {
    GlobalBuilder {
        name: name.into(),
        ty: ty.into(),
    }
}

/// A global awaiting its initializer expression.
#[derive(Debug, Clone)]
pub struct GlobalBuilder {
    name: Label,
    ty: GlobalType,
}

impl GlobalBuilder {
    /// Attach the initializer and return the finished global.
    pub fn init(self, value: Instr) -> Global {
        Global {
            name: self.name,
            ty: self.ty,
            init: Box::new(value),
        }
    }
}

/// An active data segment at the given offset expression.
pub fn data(offset: Instr, bytes: impl Into<String>) -> Data {
    Data {
        offset: Box::new(offset),
        bytes: bytes.into(),
    }
}

// ══════════════════════════════════════════════════════════════════════════════
// Functions
// ══════════════════════════════════════════════════════════════════════════════

/// Start building a function definition.
pub fn func(name: impl Into<Label>) -> FuncBuilder {
    FuncBuilder {
        name: name.into(),
        ty: FuncType::default(),
    }
}

/// Chainable signature configuration for a function definition.
///
/// Parameters and locals are named and keep insertion order; declaring a
/// name twice replaces its type without reordering.
#[derive(Debug, Clone)]
pub struct FuncBuilder {
    name: Label,
    ty: FuncType,
}

impl FuncBuilder {
    pub fn params<L: Into<Label>>(mut self, params: impl IntoIterator<Item = (L, NumType)>) -> Self {
        for (name, ty) in params {
            self.ty.params.insert(name.into(), ty);
        }
        self
    }

    pub fn results(mut self, types: impl IntoIterator<Item = NumType>) -> Self {
        self.ty.results.extend(types);
        self
    }

    pub fn locals<L: Into<Label>>(mut self, locals: impl IntoIterator<Item = (L, NumType)>) -> Self {
        for (name, ty) in locals {
            self.ty.locals.insert(name.into(), ty);
        }
        self
    }

    /// Attach the body and return the finished function.
    pub fn body(self, body: Vec<Instr>) -> Func {
        Func {
            name: self.name,
            ty: self.ty,
            body,
        }
    }
}

// ══════════════════════════════════════════════════════════════════════════════
// Exports
// ══════════════════════════════════════════════════════════════════════════════

/// Start building an export under the given external name.
pub fn export(name: impl Into<String>) -> ExportBuilder {
    ExportBuilder { name: name.into() }
}

/// An export with its external name fixed; pick the exported shape.
#[derive(Debug, Clone)]
pub struct ExportBuilder {
    name: String,
}

impl ExportBuilder {
    /// Export the function with the given identifier.
    pub fn func(self, id: impl Into<Label>) -> Export {
        Export {
            name: self.name,
            desc: ExportDesc::Func(id.into()),
        }
    }

    /// Export the memory at the given index.
    pub fn memory(self, index: u32) -> Export {
        Export {
            name: self.name,
            desc: ExportDesc::Memory(index),
        }
    }
}

// ══════════════════════════════════════════════════════════════════════════════
// Modules
// ══════════════════════════════════════════════════════════════════════════════

macro_rules! module_sections {
    () => {
        /// Append imports, preserving insertion order.
        pub fn imports(mut self, imports: impl IntoIterator<Item = Import>) -> Self {
            self.parts.imports.extend(imports);
            self
        }

        /// Append globals, preserving insertion order.
        pub fn globals(mut self, globals: impl IntoIterator<Item = Global>) -> Self {
            self.parts.globals.extend(globals);
            self
        }

        /// Append data segments, preserving insertion order.
        pub fn datas(mut self, datas: impl IntoIterator<Item = Data>) -> Self {
            self.parts.datas.extend(datas);
            self
        }

        /// Append function definitions, preserving insertion order.
        pub fn funcs(mut self, funcs: impl IntoIterator<Item = Func>) -> Self {
            self.parts.funcs.extend(funcs);
            self
        }

        /// Append exports, preserving insertion order.
        pub fn exports(mut self, exports: impl IntoIterator<Item = Export>) -> Self {
            self.parts.exports.extend(exports);
            self
        }

        /// Freeze the accumulated configuration into a module node.
        pub fn build(self) -> Module {
            self.parts
        }
    };
}

/// Start building an empty module.
pub fn module() -> ModuleBuilder {
    ModuleBuilder {
        parts: Module::default(),
    }
}

/// Chainable, append-only module assembly.
#[derive(Debug, Clone, Default)]
pub struct ModuleBuilder {
    parts: Module,
}

impl ModuleBuilder {
    module_sections!();

    /// Designate the start function. The returned builder has no
    /// `start_func` of its own, so a module can carry at most one.
    pub fn start_func(mut self, function: impl Into<Label>) -> StartedModuleBuilder {
        self.parts.start = Some(Start {
            function: function.into(),
        });
        StartedModuleBuilder { parts: self.parts }
    }
}

/// A module builder whose start function is already set.
#[derive(Debug, Clone)]
pub struct StartedModuleBuilder {
    parts: Module,
}

impl StartedModuleBuilder {
    module_sections!();
}
