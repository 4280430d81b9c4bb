//! Recursive rendering of instruction trees into WAT text.
//!
//! Dispatch works through the operator table: each node variant is one
//! rendering category, and tag-carrying variants verify that their tag
//! actually maps to that category before any text is produced. Output is
//! deterministic — the same tree always renders to the same string.

use std::fmt;

use watforge_ir::{
    Category, Data, Export, ExportDesc, Func, Global, Import, ImportDesc, Instr, Module, NumType,
    Opcode, Start,
};

use crate::error::{EmitError, EmitResult};

/// Render any node — typically a `module` — to its exact WAT text.
pub fn render(instr: &Instr) -> EmitResult<String> {
    match instr {
        Instr::Const { op, value } => {
            expect(*op, Category::Const)?;
            Ok(sexpr(op, [value.to_string()]))
        }
        Instr::Unary { op, right } => {
            expect(*op, Category::Unary)?;
            Ok(sexpr(op, [render(right)?]))
        }
        Instr::Binary { op, left, right } => {
            expect(*op, Category::Binary)?;
            Ok(sexpr(op, [render(left)?, render(right)?]))
        }
        Instr::Load { op, address } => {
            expect(*op, Category::Load)?;
            Ok(sexpr(op, [render(address)?]))
        }
        Instr::Store { op, address, value } => {
            expect(*op, Category::Store)?;
            Ok(sexpr(op, [render(address)?, render(value)?]))
        }
        Instr::MemoryCopy {
            destination,
            source,
            size,
        } => Ok(sexpr(
            "memory.copy",
            [render(destination)?, render(source)?, render(size)?],
        )),
        Instr::MemoryFill {
            address,
            value,
            count,
        } => Ok(sexpr(
            "memory.fill",
            [render(address)?, render(value)?, render(count)?],
        )),
        Instr::VarGet { op, target } => {
            expect(*op, Category::VariableGet)?;
            Ok(sexpr(op, [target.to_string()]))
        }
        Instr::VarSet { op, target, right } => {
            expect(*op, Category::VariableSet)?;
            Ok(sexpr(op, [target.to_string(), render(right)?]))
        }
        Instr::Block { label, body, .. } => {
            let label = label.as_ref().map(ToString::to_string);
            Ok(sexpr("block", label.into_iter().chain(render_seq(body)?)))
        }
        Instr::Loop { label, body, .. } => {
            let label = label.as_ref().map(ToString::to_string);
            Ok(sexpr("loop", label.into_iter().chain(render_seq(body)?)))
        }
        Instr::If {
            predicate,
            label,
            then_body,
            else_body,
            ..
        } => {
            let mut parts = Vec::new();
            if let Some(label) = label {
                parts.push(label.to_string());
            }
            parts.push(render(predicate)?);
            parts.push(sexpr("then", render_seq(then_body)?));
            if let Some(else_body) = else_body {
                parts.push(sexpr("else", render_seq(else_body)?));
            }
            Ok(sexpr("if", parts))
        }
        Instr::Br { label } => Ok(sexpr("br", [label.to_string()])),
        Instr::BrTable { targets, value } => {
            let targets = targets.iter().map(ToString::to_string);
            Ok(sexpr("br_table", targets.chain([render(value)?])))
        }
        Instr::Call {
            function,
            arguments,
        } => {
            let function = function.to_string();
            Ok(sexpr(
                "call",
                std::iter::once(function).chain(render_seq(arguments)?),
            ))
        }
        Instr::Return { values } => Ok(sexpr("return", render_seq(values)?)),
        Instr::Select {
            first,
            second,
            condition,
        } => Ok(sexpr(
            "select",
            [render(first)?, render(second)?, render(condition)?],
        )),
        Instr::Drop { value } => {
            let value = match value {
                Some(value) => Some(render(value)?),
                None => None,
            };
            Ok(sexpr("drop", value))
        }
        Instr::Unreachable => Ok("(unreachable)".to_string()),
        Instr::Nop => Ok("(nop)".to_string()),
        Instr::Import(import) => render_import(import),
        Instr::Global(global) => render_global(global),
        Instr::Data(data) => render_data(data),
        Instr::Func(func) => render_func(func),
        Instr::Export(export) => Ok(render_export(export)),
        Instr::Start(start) => Ok(render_start(start)),
        Instr::Module(module) => render_module(module),
    }
}

/// Check that a tag-carrying node's tag maps to the category its shape
/// claims. A mismatch means the node was assembled by hand.
fn expect(opcode: Opcode, expected: Category) -> EmitResult<()> {
    let found = opcode.category();
    if found == expected {
        Ok(())
    } else {
        Err(EmitError::CategoryMismatch {
            opcode,
            found,
            expected,
        })
    }
}

/// `(head part part …)` — empty parts contribute no token and no space.
fn sexpr(head: impl fmt::Display, parts: impl IntoIterator<Item = String>) -> String {
    let mut out = format!("({head}");
    for part in parts {
        if !part.is_empty() {
            out.push(' ');
            out.push_str(&part);
        }
    }
    out.push(')');
    out
}

fn render_seq(instrs: &[Instr]) -> EmitResult<Vec<String>> {
    instrs.iter().map(render).collect()
}

fn join_types(types: &[NumType]) -> String {
    types
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

/// `"text"` with WAT string escaping applied.
fn quote(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 2);
    out.push('"');
    for c in text.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\t' => out.push_str("\\t"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            c if (c as u32) < 0x20 || c as u32 == 0x7f => {
                out.push_str(&format!("\\{:02x}", c as u32));
            }
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

// ══════════════════════════════════════════════════════════════════════════════
// Module-level forms
// ══════════════════════════════════════════════════════════════════════════════

fn render_import(import: &Import) -> EmitResult<String> {
    let desc = match &import.desc {
        ImportDesc::Func { name, ty } => {
            let mut parts = vec![name.to_string()];
            parts.extend(ty.params.iter().map(|ty| format!("(param {ty})")));
            parts.extend(ty.results.iter().map(|ty| format!("(result {ty})")));
            sexpr("func", parts)
        }
        ImportDesc::Memory(limits) => {
            let mut parts = vec![limits.min.to_string()];
            if let Some(max) = limits.max {
                parts.push(max.to_string());
            }
            sexpr("memory", parts)
        }
    };
    Ok(sexpr(
        "import",
        [quote(&import.module), quote(&import.item), desc],
    ))
}

fn render_global(global: &Global) -> EmitResult<String> {
    // An immutable global type is a bare valtype in WAT; only the mutable
    // form is parenthesized.
    let ty = if global.ty.mutable {
        format!("(mut {})", global.ty.ty)
    } else {
        global.ty.ty.to_string()
    };
    Ok(sexpr(
        "global",
        [global.name.to_string(), ty, render(&global.init)?],
    ))
}

fn render_data(data: &Data) -> EmitResult<String> {
    Ok(sexpr("data", [render(&data.offset)?, quote(&data.bytes)]))
}

fn render_func(func: &Func) -> EmitResult<String> {
    let mut parts = vec![func.name.to_string()];
    parts.extend(
        func.ty
            .params
            .iter()
            .map(|(name, ty)| format!("(param {name} {ty})")),
    );
    if !func.ty.results.is_empty() {
        parts.push(format!("(result {})", join_types(&func.ty.results)));
    }
    parts.extend(
        func.ty
            .locals
            .iter()
            .map(|(name, ty)| format!("(local {name} {ty})")),
    );
    parts.extend(render_seq(&func.body)?);
    Ok(sexpr("func", parts))
}

fn render_export(export: &Export) -> String {
    let desc = match &export.desc {
        ExportDesc::Func(id) => sexpr("func", [id.to_string()]),
        ExportDesc::Memory(index) => sexpr("memory", [index.to_string()]),
    };
    sexpr("export", [quote(&export.name), desc])
}

fn render_start(start: &Start) -> String {
    sexpr("start", [start.function.to_string()])
}

fn render_module(module: &Module) -> EmitResult<String> {
    let mut children = Vec::new();
    for import in &module.imports {
        children.push(render_import(import)?);
    }
    for global in &module.globals {
        children.push(render_global(global)?);
    }
    for data in &module.datas {
        children.push(render_data(data)?);
    }
    for func in &module.funcs {
        children.push(render_func(func)?);
    }
    if let Some(start) = &module.start {
        children.push(render_start(start));
    }
    for export in &module.exports {
        children.push(render_export(export));
    }

    if children.is_empty() {
        return Ok("(module)".to_string());
    }
    let mut out = String::from("(module");
    for child in children {
        out.push_str("\n  ");
        out.push_str(&child);
    }
    out.push_str("\n)");
    Ok(out)
}
