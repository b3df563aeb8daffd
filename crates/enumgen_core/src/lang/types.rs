//! Predeclared Go basic types.
//!
//! The resolver maps every named type down to one of these to decide whether an enum is backed by a
//! string or an integer, and the constant evaluator uses the integer bounds to reject values that do
//! not fit their declared type.
//!
//! ## Examples
//! ```rust
//! use enumgen_core::lang::types::{self, BasicType};
//!
//! let t = types::from_str("uint8").unwrap();
//! assert!(t.is_integer() && t.is_unsigned());
//! assert_eq!(types::from_str("byte"), Some(BasicType::Uint8));
//! ```

/// A predeclared basic type. `byte` and `rune` are aliases of `uint8` and `int32`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BasicType {
    Bool,
    String,
    Int,
    Int8,
    Int16,
    Int32,
    Int64,
    Uint,
    Uint8,
    Uint16,
    Uint32,
    Uint64,
    Uintptr,
    Float32,
    Float64,
    Complex64,
    Complex128,
}

/// Coarse classification of a basic type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BasicClass {
    Boolean,
    String,
    Integer,
    Float,
    Complex,
}

/// Metadata for a basic type.
#[derive(Debug, Clone, Copy)]
pub struct BasicInfo {
    pub ty: BasicType,
    pub name: &'static str,
    pub class: BasicClass,
    pub unsigned: bool,
    /// Width in bits for integers; `int`, `uint` and `uintptr` are treated as 64-bit.
    pub bits: u32,
}

/// Registry of basic types in declaration order of the Go specification.
pub const BASIC_TYPES: &[BasicInfo] = &[
    basic(BasicType::Bool, "bool", BasicClass::Boolean, false, 0),
    basic(BasicType::String, "string", BasicClass::String, false, 0),
    basic(BasicType::Int, "int", BasicClass::Integer, false, 64),
    basic(BasicType::Int8, "int8", BasicClass::Integer, false, 8),
    basic(BasicType::Int16, "int16", BasicClass::Integer, false, 16),
    basic(BasicType::Int32, "int32", BasicClass::Integer, false, 32),
    basic(BasicType::Int64, "int64", BasicClass::Integer, false, 64),
    basic(BasicType::Uint, "uint", BasicClass::Integer, true, 64),
    basic(BasicType::Uint8, "uint8", BasicClass::Integer, true, 8),
    basic(BasicType::Uint16, "uint16", BasicClass::Integer, true, 16),
    basic(BasicType::Uint32, "uint32", BasicClass::Integer, true, 32),
    basic(BasicType::Uint64, "uint64", BasicClass::Integer, true, 64),
    basic(BasicType::Uintptr, "uintptr", BasicClass::Integer, true, 64),
    basic(BasicType::Float32, "float32", BasicClass::Float, false, 32),
    basic(BasicType::Float64, "float64", BasicClass::Float, false, 64),
    basic(BasicType::Complex64, "complex64", BasicClass::Complex, false, 64),
    basic(BasicType::Complex128, "complex128", BasicClass::Complex, false, 128),
];

/// Predeclared aliases and the basic type they stand for.
pub const ALIASES: &[(&str, BasicType)] = &[("byte", BasicType::Uint8), ("rune", BasicType::Int32)];

impl BasicType {
    pub fn info(self) -> &'static BasicInfo {
        BASIC_TYPES
            .iter()
            .find(|b| b.ty == self)
            .expect("basic type info missing")
    }

    pub fn name(self) -> &'static str {
        self.info().name
    }

    pub fn class(self) -> BasicClass {
        self.info().class
    }

    pub fn is_integer(self) -> bool {
        self.class() == BasicClass::Integer
    }

    pub fn is_unsigned(self) -> bool {
        self.info().unsigned
    }

    pub fn is_string(self) -> bool {
        self.class() == BasicClass::String
    }

    /// Inclusive value range of an integer type, or `None` for non-integers.
    pub fn integer_range(self) -> Option<(i128, i128)> {
        let info = self.info();
        if info.class != BasicClass::Integer {
            return None;
        }
        if info.unsigned {
            Some((0, (1i128 << info.bits) - 1))
        } else {
            let half = 1i128 << (info.bits - 1);
            Some((-half, half - 1))
        }
    }
}

/// Lookup a predeclared type (or alias) by name.
pub fn from_str(s: &str) -> Option<BasicType> {
    BASIC_TYPES
        .iter()
        .find(|b| b.name == s)
        .map(|b| b.ty)
        .or_else(|| ALIASES.iter().find(|(name, _)| *name == s).map(|(_, ty)| *ty))
}

const fn basic(ty: BasicType, name: &'static str, class: BasicClass, unsigned: bool, bits: u32) -> BasicInfo {
    BasicInfo {
        ty,
        name,
        class,
        unsigned,
        bits,
    }
}
