//! Construction API for watforge instruction trees.
//!
//! One constructor per operator tag, each accepting exactly the operands
//! its tag requires and returning an immutable node from
//! [`watforge_ir`]. Numeric operators live in per-type namespaces
//! (`i32::add`, `f64::sqrt`, …); structural constructors (`block`,
//! `if_`, `func`, `module`, …) are chainable builders whose terminal
//! operation freezes the configuration.
//!
//! ```
//! use watforge_builder::{func, i32, local, module, return_, I32};
//!
//! let add = func("$add")
//!     .params([("$a", I32), ("$b", I32)])
//!     .results([I32])
//!     .body(vec![return_(vec![i32::add(
//!         local::get("$a"),
//!         local::get("$b"),
//!     )])]);
//! let module = module().funcs([add]).build();
//! assert_eq!(module.funcs.len(), 1);
//! ```

mod control;
mod error;
mod module;
mod numeric;
mod switch;
mod var;

pub use control::{
    block, br, br_table, call, drop_, if_, loop_, nop, return_, select, unreachable,
    BlockBuilder, IfBuilder, IfThen,
};
pub use error::{BuildError, BuildResult};
pub use module::{
    data, export, func, global_, import, module, mut_, ExportBuilder, FuncBuilder, GlobalBuilder,
    ImportBuilder, ImportFuncBuilder, ModuleBuilder, StartedModuleBuilder,
};
pub use numeric::{f32, f64, i32, i64};
pub use switch::br_table_blocks;
pub use var::{global, local, memory};

pub use watforge_ir::NumType::{F32, F64, I32, I64};
