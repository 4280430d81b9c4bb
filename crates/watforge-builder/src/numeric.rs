//! Numeric instruction constructors, one namespace per value type.
//!
//! Each module exposes exactly its type's closed operator vocabulary: the
//! integer namespaces carry the signed/unsigned arithmetic, bitwise, and
//! shift families plus narrow loads; the float namespaces carry the unary
//! float family instead. Constant constructors route integers through
//! `i64`, which holds every 32- and 64-bit WebAssembly integer exactly.

macro_rules! binary_fns {
    ($($fn_name:ident : $op:expr),+ $(,)?) => { $(
        pub fn $fn_name(left: Instr, right: Instr) -> Instr {
            Instr::Binary {
                op: $op,
                left: Box::new(left),
                right: Box::new(right),
            }
        }
    )+ };
}

macro_rules! unary_fns {
    ($($fn_name:ident : $op:expr),+ $(,)?) => { $(
        pub fn $fn_name(right: Instr) -> Instr {
            Instr::Unary {
                op: $op,
                right: Box::new(right),
            }
        }
    )+ };
}

macro_rules! load_fns {
    ($($fn_name:ident : $op:expr),+ $(,)?) => { $(
        pub fn $fn_name(address: Instr) -> Instr {
            Instr::Load {
                op: $op,
                address: Box::new(address),
            }
        }
    )+ };
}

macro_rules! store_fn {
    ($ty:expr) => {
        pub fn store(address: Instr, value: Instr) -> Instr {
            Instr::Store {
                op: Opcode::Store($ty),
                address: Box::new(address),
                value: Box::new(value),
            }
        }
    };
}

pub mod i32 {
    use watforge_ir::{
        I32ConvertOp, I32LoadOp, Instr, IntBinaryOp, IntCompareOp, IntTestOp, IntType, NumType,
        Opcode, Value,
    };

    const TY: IntType = IntType::I32;

    /// `(i32.const <value>)`
    pub fn const_(value: impl Into<i64>) -> Instr {
        Instr::Const {
            op: Opcode::Const(NumType::I32),
            value: Value::Int(value.into()),
        }
    }

    binary_fns! {
        add: Opcode::IntBinary(TY, IntBinaryOp::Add),
        sub: Opcode::IntBinary(TY, IntBinaryOp::Sub),
        mul: Opcode::IntBinary(TY, IntBinaryOp::Mul),
        div_s: Opcode::IntBinary(TY, IntBinaryOp::DivS),
        div_u: Opcode::IntBinary(TY, IntBinaryOp::DivU),
        and: Opcode::IntBinary(TY, IntBinaryOp::And),
        or: Opcode::IntBinary(TY, IntBinaryOp::Or),
        xor: Opcode::IntBinary(TY, IntBinaryOp::Xor),
        shl: Opcode::IntBinary(TY, IntBinaryOp::Shl),
        shr_s: Opcode::IntBinary(TY, IntBinaryOp::ShrS),
        shr_u: Opcode::IntBinary(TY, IntBinaryOp::ShrU),
        eq: Opcode::IntCompare(TY, IntCompareOp::Eq),
        ne: Opcode::IntCompare(TY, IntCompareOp::Ne),
        lt_s: Opcode::IntCompare(TY, IntCompareOp::LtS),
        lt_u: Opcode::IntCompare(TY, IntCompareOp::LtU),
        gt_s: Opcode::IntCompare(TY, IntCompareOp::GtS),
        gt_u: Opcode::IntCompare(TY, IntCompareOp::GtU),
        le_s: Opcode::IntCompare(TY, IntCompareOp::LeS),
        le_u: Opcode::IntCompare(TY, IntCompareOp::LeU),
        ge_s: Opcode::IntCompare(TY, IntCompareOp::GeS),
        ge_u: Opcode::IntCompare(TY, IntCompareOp::GeU),
    }

    unary_fns! {
        eqz: Opcode::IntTest(TY, IntTestOp::Eqz),
        wrap_i64: Opcode::ConvertI32(I32ConvertOp::WrapI64),
        reinterpret_f32: Opcode::ConvertI32(I32ConvertOp::ReinterpretF32),
        trunc_f32_s: Opcode::ConvertI32(I32ConvertOp::TruncF32S),
        trunc_f32_u: Opcode::ConvertI32(I32ConvertOp::TruncF32U),
        trunc_f64_s: Opcode::ConvertI32(I32ConvertOp::TruncF64S),
        trunc_f64_u: Opcode::ConvertI32(I32ConvertOp::TruncF64U),
    }

    load_fns! {
        load: Opcode::LoadI32(I32LoadOp::Load),
        load8_s: Opcode::LoadI32(I32LoadOp::Load8S),
        load8_u: Opcode::LoadI32(I32LoadOp::Load8U),
        load16_s: Opcode::LoadI32(I32LoadOp::Load16S),
        load16_u: Opcode::LoadI32(I32LoadOp::Load16U),
    }

    store_fn!(NumType::I32);
}

pub mod i64 {
    use watforge_ir::{
        I64ConvertOp, I64LoadOp, Instr, IntBinaryOp, IntCompareOp, IntTestOp, IntType, NumType,
        Opcode, Value,
    };

    const TY: IntType = IntType::I64;

    /// `(i64.const <value>)`
    pub fn const_(value: impl Into<i64>) -> Instr {
        Instr::Const {
            op: Opcode::Const(NumType::I64),
            value: Value::Int(value.into()),
        }
    }

    binary_fns! {
        add: Opcode::IntBinary(TY, IntBinaryOp::Add),
        sub: Opcode::IntBinary(TY, IntBinaryOp::Sub),
        mul: Opcode::IntBinary(TY, IntBinaryOp::Mul),
        div_s: Opcode::IntBinary(TY, IntBinaryOp::DivS),
        div_u: Opcode::IntBinary(TY, IntBinaryOp::DivU),
        and: Opcode::IntBinary(TY, IntBinaryOp::And),
        or: Opcode::IntBinary(TY, IntBinaryOp::Or),
        xor: Opcode::IntBinary(TY, IntBinaryOp::Xor),
        shl: Opcode::IntBinary(TY, IntBinaryOp::Shl),
        shr_s: Opcode::IntBinary(TY, IntBinaryOp::ShrS),
        shr_u: Opcode::IntBinary(TY, IntBinaryOp::ShrU),
        eq: Opcode::IntCompare(TY, IntCompareOp::Eq),
        ne: Opcode::IntCompare(TY, IntCompareOp::Ne),
        lt_s: Opcode::IntCompare(TY, IntCompareOp::LtS),
        lt_u: Opcode::IntCompare(TY, IntCompareOp::LtU),
        gt_s: Opcode::IntCompare(TY, IntCompareOp::GtS),
        gt_u: Opcode::IntCompare(TY, IntCompareOp::GtU),
        le_s: Opcode::IntCompare(TY, IntCompareOp::LeS),
        le_u: Opcode::IntCompare(TY, IntCompareOp::LeU),
        ge_s: Opcode::IntCompare(TY, IntCompareOp::GeS),
        ge_u: Opcode::IntCompare(TY, IntCompareOp::GeU),
    }

    unary_fns! {
        eqz: Opcode::IntTest(TY, IntTestOp::Eqz),
        extend_i32_s: Opcode::ConvertI64(I64ConvertOp::ExtendI32S),
        extend_i32_u: Opcode::ConvertI64(I64ConvertOp::ExtendI32U),
        reinterpret_f64: Opcode::ConvertI64(I64ConvertOp::ReinterpretF64),
        trunc_f32_s: Opcode::ConvertI64(I64ConvertOp::TruncF32S),
        trunc_f32_u: Opcode::ConvertI64(I64ConvertOp::TruncF32U),
        trunc_f64_s: Opcode::ConvertI64(I64ConvertOp::TruncF64S),
        trunc_f64_u: Opcode::ConvertI64(I64ConvertOp::TruncF64U),
    }

    load_fns! {
        load: Opcode::LoadI64(I64LoadOp::Load),
        load8_s: Opcode::LoadI64(I64LoadOp::Load8S),
        load8_u: Opcode::LoadI64(I64LoadOp::Load8U),
        load16_s: Opcode::LoadI64(I64LoadOp::Load16S),
        load16_u: Opcode::LoadI64(I64LoadOp::Load16U),
        load32_s: Opcode::LoadI64(I64LoadOp::Load32S),
        load32_u: Opcode::LoadI64(I64LoadOp::Load32U),
    }

    store_fn!(NumType::I64);
}

pub mod f32 {
    use watforge_ir::{
        F32ConvertOp, FloatBinaryOp, FloatCompareOp, FloatType, FloatUnaryOp, Instr, NumType,
        Opcode, Value,
    };

    const TY: FloatType = FloatType::F32;

    /// `(f32.const <value>)`
    pub fn const_(value: f64) -> Instr {
        Instr::Const {
            op: Opcode::Const(NumType::F32),
            value: Value::Float(value),
        }
    }

    binary_fns! {
        add: Opcode::FloatBinary(TY, FloatBinaryOp::Add),
        sub: Opcode::FloatBinary(TY, FloatBinaryOp::Sub),
        mul: Opcode::FloatBinary(TY, FloatBinaryOp::Mul),
        div: Opcode::FloatBinary(TY, FloatBinaryOp::Div),
        eq: Opcode::FloatCompare(TY, FloatCompareOp::Eq),
        ne: Opcode::FloatCompare(TY, FloatCompareOp::Ne),
        lt: Opcode::FloatCompare(TY, FloatCompareOp::Lt),
        gt: Opcode::FloatCompare(TY, FloatCompareOp::Gt),
        le: Opcode::FloatCompare(TY, FloatCompareOp::Le),
        ge: Opcode::FloatCompare(TY, FloatCompareOp::Ge),
    }

    unary_fns! {
        neg: Opcode::FloatUnary(TY, FloatUnaryOp::Neg),
        abs: Opcode::FloatUnary(TY, FloatUnaryOp::Abs),
        sqrt: Opcode::FloatUnary(TY, FloatUnaryOp::Sqrt),
        ceil: Opcode::FloatUnary(TY, FloatUnaryOp::Ceil),
        floor: Opcode::FloatUnary(TY, FloatUnaryOp::Floor),
        trunc: Opcode::FloatUnary(TY, FloatUnaryOp::Trunc),
        nearest: Opcode::FloatUnary(TY, FloatUnaryOp::Nearest),
        demote_f64: Opcode::ConvertF32(F32ConvertOp::DemoteF64),
        reinterpret_i32: Opcode::ConvertF32(F32ConvertOp::ReinterpretI32),
        convert_i32_s: Opcode::ConvertF32(F32ConvertOp::ConvertI32S),
        convert_i32_u: Opcode::ConvertF32(F32ConvertOp::ConvertI32U),
        convert_i64_s: Opcode::ConvertF32(F32ConvertOp::ConvertI64S),
        convert_i64_u: Opcode::ConvertF32(F32ConvertOp::ConvertI64U),
    }

    load_fns! {
        load: Opcode::LoadF32,
    }

    store_fn!(NumType::F32);
}

pub mod f64 {
    use watforge_ir::{
        F64ConvertOp, FloatBinaryOp, FloatCompareOp, FloatType, FloatUnaryOp, Instr, NumType,
        Opcode, Value,
    };

    const TY: FloatType = FloatType::F64;

    /// `(f64.const <value>)`
    pub fn const_(value: f64) -> Instr {
        Instr::Const {
            op: Opcode::Const(NumType::F64),
            value: Value::Float(value),
        }
    }

    binary_fns! {
        add: Opcode::FloatBinary(TY, FloatBinaryOp::Add),
        sub: Opcode::FloatBinary(TY, FloatBinaryOp::Sub),
        mul: Opcode::FloatBinary(TY, FloatBinaryOp::Mul),
        div: Opcode::FloatBinary(TY, FloatBinaryOp::Div),
        eq: Opcode::FloatCompare(TY, FloatCompareOp::Eq),
        ne: Opcode::FloatCompare(TY, FloatCompareOp::Ne),
        lt: Opcode::FloatCompare(TY, FloatCompareOp::Lt),
        gt: Opcode::FloatCompare(TY, FloatCompareOp::Gt),
        le: Opcode::FloatCompare(TY, FloatCompareOp::Le),
        ge: Opcode::FloatCompare(TY, FloatCompareOp::Ge),
    }

    unary_fns! {
        neg: Opcode::FloatUnary(TY, FloatUnaryOp::Neg),
        abs: Opcode::FloatUnary(TY, FloatUnaryOp::Abs),
        sqrt: Opcode::FloatUnary(TY, FloatUnaryOp::Sqrt),
        ceil: Opcode::FloatUnary(TY, FloatUnaryOp::Ceil),
        floor: Opcode::FloatUnary(TY, FloatUnaryOp::Floor),
        trunc: Opcode::FloatUnary(TY, FloatUnaryOp::Trunc),
        nearest: Opcode::FloatUnary(TY, FloatUnaryOp::Nearest),
        promote_f32: Opcode::ConvertF64(F64ConvertOp::PromoteF32),
        reinterpret_i64: Opcode::ConvertF64(F64ConvertOp::ReinterpretI64),
        convert_i32_s: Opcode::ConvertF64(F64ConvertOp::ConvertI32S),
        convert_i32_u: Opcode::ConvertF64(F64ConvertOp::ConvertI32U),
        convert_i64_s: Opcode::ConvertF64(F64ConvertOp::ConvertI64S),
        convert_i64_u: Opcode::ConvertF64(F64ConvertOp::ConvertI64U),
    }

    load_fns! {
        load: Opcode::LoadF64,
    }

    store_fn!(NumType::F64);
}
