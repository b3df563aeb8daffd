//! Constant evaluation
//!
//! Computes the value and static type of package-level constants: `iota`, implicit repetition,
//! literals, references to other constants in any order, typed conversions `T(x)`, `len` of a
//! constant string, and the unary and binary operators of Go constant expressions.
//!
//! Evaluation is lazy and memoized per constant name. A name that is reached again while it is
//! still being evaluated is an initialization cycle.
//!
//! ## Notes
//! - Integers are held as `i128`, which covers every value of every sized Go integer type. Untyped
//!   intermediate values outside that range are reported as overflow.
//! - Qualified constants (`math.MaxInt8`) and complex numbers are not evaluated.

use std::collections::{HashMap, HashSet};

use enumgen_core::lang::types::{BasicClass, BasicType};
use enumgen_core::strings::quote;
use enumgen_syntax::ast::{BinaryOp, Expr, Spanned, TypeExpr, UnaryOp};

// ============================================================================
// Values and types
// ============================================================================

/// The value of a constant.
#[derive(Debug, Clone, PartialEq)]
pub enum ConstValue {
    Bool(bool),
    String(String),
    Int(i128),
    Float(f64),
}

impl ConstValue {
    /// Canonical literal text: Go-quoted strings, decimal integers.
    ///
    /// ## Examples
    /// ```rust
    /// use enumgen::frontend::const_eval::ConstValue;
    ///
    /// assert_eq!(ConstValue::String("One".into()).literal(), "\"One\"");
    /// assert_eq!(ConstValue::Int(-3).literal(), "-3");
    /// ```
    pub fn literal(&self) -> String {
        match self {
            ConstValue::Bool(b) => b.to_string(),
            ConstValue::String(s) => quote(s),
            ConstValue::Int(v) => v.to_string(),
            ConstValue::Float(f) => f.to_string(),
        }
    }

    pub fn is_string(&self) -> bool {
        matches!(self, ConstValue::String(_))
    }

    fn as_f64(&self) -> Option<f64> {
        match self {
            ConstValue::Int(v) => Some(*v as f64),
            ConstValue::Float(f) => Some(*f),
            _ => None,
        }
    }
}

/// Kind of an untyped constant, in increasing numeric rank where that applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum UntypedKind {
    Bool,
    String,
    Int,
    Rune,
    Float,
}

/// Static type of a constant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConstType {
    Untyped(UntypedKind),
    /// A named type: a declared type of the package or a predeclared basic type name.
    Typed(String),
}

impl ConstType {
    /// The type name, if the constant is typed.
    pub fn type_name(&self) -> Option<&str> {
        match self {
            ConstType::Typed(name) => Some(name),
            ConstType::Untyped(_) => None,
        }
    }
}

/// An evaluated constant.
#[derive(Debug, Clone, PartialEq)]
pub struct Constant {
    pub value: ConstValue,
    pub ty: ConstType,
}

impl Constant {
    fn untyped(value: ConstValue, kind: UntypedKind) -> Self {
        Self {
            value,
            ty: ConstType::Untyped(kind),
        }
    }
}

/// Why a constant could not be evaluated.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EvalError {
    #[error("undefined: {0}")]
    Undefined(String),

    #[error("initialization cycle involving {0}")]
    Cycle(String),

    #[error("{0} is not a constant expression")]
    NotConstant(String),

    #[error("constant {value} overflows {ty}")]
    Overflow { value: String, ty: String },

    #[error("cannot convert {value} to type {ty}")]
    Conversion { value: String, ty: String },

    #[error("mismatched types {0} and {1}")]
    Mismatched(String, String),

    #[error("invalid operation: {0}")]
    InvalidOperation(String),

    #[error("division by zero")]
    DivisionByZero,

    #[error("{0} is not supported in constant evaluation")]
    Unsupported(String),
}

// ============================================================================
// Evaluator
// ============================================================================

/// One constant name with the expression, declared type and `iota` it is evaluated with.
///
/// For implicit repetition (`B` on its own line after `A T = iota`) this already carries the
/// repeated expression and type, paired with the spec's own `iota`.
#[derive(Debug, Clone)]
pub struct ConstDef {
    pub name: String,
    pub expr: Spanned<Expr>,
    pub ty: Option<TypeExpr>,
    pub iota: usize,
}

/// Type information the evaluator needs from the package.
pub trait TypeResolver {
    /// Return `true` if `name` denotes a type (declared or predeclared).
    fn is_type(&self, name: &str) -> bool;

    /// Resolve a type name to its underlying basic type, if it has one.
    fn underlying_basic(&self, name: &str) -> Option<BasicType>;
}

/// Lazily evaluates constants by name.
pub struct ConstEvaluator<'a, R: TypeResolver> {
    defs: &'a HashMap<String, ConstDef>,
    types: &'a R,
    cache: HashMap<String, Result<Constant, EvalError>>,
    in_progress: HashSet<String>,
}

impl<'a, R: TypeResolver> ConstEvaluator<'a, R> {
    pub fn new(defs: &'a HashMap<String, ConstDef>, types: &'a R) -> Self {
        Self {
            defs,
            types,
            cache: HashMap::new(),
            in_progress: HashSet::new(),
        }
    }

    /// Evaluate the constant called `name`.
    ///
    /// ## Errors
    /// Returns an [`EvalError`] if the name is unknown, part of a cycle, or its expression is not a
    /// representable constant.
    pub fn eval(&mut self, name: &str) -> Result<Constant, EvalError> {
        if let Some(result) = self.cache.get(name) {
            return result.clone();
        }
        let defs = self.defs;
        let Some(def) = defs.get(name) else {
            return Err(EvalError::Undefined(name.to_string()));
        };
        if !self.in_progress.insert(name.to_string()) {
            return Err(EvalError::Cycle(name.to_string()));
        }

        let result = self.eval_def(def);

        self.in_progress.remove(name);
        self.cache.insert(name.to_string(), result.clone());
        result
    }

    fn eval_def(&mut self, def: &ConstDef) -> Result<Constant, EvalError> {
        let value = self.eval_expr(&def.expr.node, def.iota)?;
        match &def.ty {
            None => Ok(value),
            Some(TypeExpr::Named(target)) => self.assign(value, target),
            Some(other) => Err(EvalError::Unsupported(format!("constant type {}", other))),
        }
    }

    fn eval_expr(&mut self, expr: &Expr, iota: usize) -> Result<Constant, EvalError> {
        match expr {
            Expr::Int(v) => match i128::try_from(*v) {
                Ok(v) => Ok(Constant::untyped(ConstValue::Int(v), UntypedKind::Int)),
                Err(_) => Err(EvalError::Overflow {
                    value: v.to_string(),
                    ty: "untyped int".to_string(),
                }),
            },
            Expr::Float(f) => Ok(Constant::untyped(ConstValue::Float(*f), UntypedKind::Float)),
            Expr::Imaginary(_) => Err(EvalError::Unsupported("complex constant".to_string())),
            Expr::Rune(c) => Ok(Constant::untyped(ConstValue::Int(*c as i128), UntypedKind::Rune)),
            Expr::String(s) => Ok(Constant::untyped(ConstValue::String(s.clone()), UntypedKind::String)),
            Expr::Ident(name) => self.eval_ident(name, iota),
            Expr::Paren(inner) => self.eval_expr(&inner.node, iota),
            Expr::Selector(base, field) => {
                let base = match &base.node {
                    Expr::Ident(name) => name.clone(),
                    _ => "expression".to_string(),
                };
                Err(EvalError::Unsupported(format!("qualified constant {}.{}", base, field)))
            }
            Expr::Call { func, args } => self.eval_call(&func.node, args, iota),
            Expr::Unary(op, operand) => {
                let operand = self.eval_expr(&operand.node, iota)?;
                self.unary(*op, operand)
            }
            Expr::Binary(left, op, right) => {
                let left = self.eval_expr(&left.node, iota)?;
                let right = self.eval_expr(&right.node, iota)?;
                self.binary(left, *op, right)
            }
            Expr::Type(ty) => Err(EvalError::NotConstant(ty.to_string())),
        }
    }

    fn eval_ident(&mut self, name: &str, iota: usize) -> Result<Constant, EvalError> {
        if self.defs.contains_key(name) {
            return self.eval(name);
        }
        match name {
            "iota" => Ok(Constant::untyped(ConstValue::Int(iota as i128), UntypedKind::Int)),
            "true" => Ok(Constant::untyped(ConstValue::Bool(true), UntypedKind::Bool)),
            "false" => Ok(Constant::untyped(ConstValue::Bool(false), UntypedKind::Bool)),
            _ if self.types.is_type(name) => Err(EvalError::NotConstant(format!("type {}", name))),
            _ => Err(EvalError::Undefined(name.to_string())),
        }
    }

    fn eval_call(&mut self, func: &Expr, args: &[Spanned<Expr>], iota: usize) -> Result<Constant, EvalError> {
        let mut callee = func;
        while let Expr::Paren(inner) = callee {
            callee = &inner.node;
        }
        let Expr::Ident(name) = callee else {
            return Err(EvalError::NotConstant("function call".to_string()));
        };

        if name == "len" && !self.defs.contains_key(name) && !self.types.is_type(name) {
            let [arg] = args else {
                return Err(EvalError::InvalidOperation("len expects one argument".to_string()));
            };
            let arg = self.eval_expr(&arg.node, iota)?;
            return match arg.value {
                ConstValue::String(s) => Ok(Constant::untyped(ConstValue::Int(s.len() as i128), UntypedKind::Int)),
                other => Err(EvalError::InvalidOperation(format!("invalid argument {} for len", other.literal()))),
            };
        }

        if self.types.is_type(name) {
            let [arg] = args else {
                return Err(EvalError::InvalidOperation(format!(
                    "conversion to {} expects one argument",
                    name
                )));
            };
            let arg = self.eval_expr(&arg.node, iota)?;
            return self.convert(arg, name, true);
        }

        Err(EvalError::NotConstant(format!("call of {}", name)))
    }

    // ========================================================================
    // Conversions
    // ========================================================================

    /// Implicit conversion of a declaration's value to its declared type.
    fn assign(&self, value: Constant, target: &str) -> Result<Constant, EvalError> {
        if let ConstType::Typed(actual) = &value.ty {
            if actual != target {
                return Err(EvalError::Mismatched(actual.clone(), target.to_string()));
            }
        }
        self.convert(value, target, false)
    }

    /// Convert to `target`. `explicit` allows the integer-to-string conversion of `string(65)`.
    fn convert(&self, value: Constant, target: &str, explicit: bool) -> Result<Constant, EvalError> {
        let conversion_error = |v: &ConstValue| EvalError::Conversion {
            value: v.literal(),
            ty: target.to_string(),
        };
        let Some(basic) = self.types.underlying_basic(target) else {
            return Err(conversion_error(&value.value));
        };

        let converted = match (basic.class(), value.value) {
            (BasicClass::String, ConstValue::String(s)) => ConstValue::String(s),
            (BasicClass::String, ConstValue::Int(v)) if explicit => {
                let c = u32::try_from(v).ok().and_then(char::from_u32).unwrap_or('\u{FFFD}');
                ConstValue::String(c.to_string())
            }
            (BasicClass::Integer, ConstValue::Int(v)) => ConstValue::Int(v),
            (BasicClass::Integer, ConstValue::Float(f)) if f.is_finite() && f.fract() == 0.0 => {
                ConstValue::Int(f as i128)
            }
            (BasicClass::Float, ConstValue::Int(v)) => ConstValue::Float(v as f64),
            (BasicClass::Float, ConstValue::Float(f)) => ConstValue::Float(f),
            (BasicClass::Boolean, ConstValue::Bool(b)) => ConstValue::Bool(b),
            (_, other) => return Err(conversion_error(&other)),
        };

        self.check_representable(Constant {
            value: converted,
            ty: ConstType::Typed(target.to_string()),
        })
    }

    /// Reject typed integer values outside their type's range.
    fn check_representable(&self, constant: Constant) -> Result<Constant, EvalError> {
        let ConstType::Typed(name) = &constant.ty else {
            return Ok(constant);
        };
        let Some(basic) = self.types.underlying_basic(name) else {
            return Ok(constant);
        };
        let Some((min, max)) = basic.integer_range() else {
            return Ok(constant);
        };

        match constant.value {
            ConstValue::Int(v) if v < min || v > max => Err(EvalError::Overflow {
                value: v.to_string(),
                ty: name.clone(),
            }),
            ConstValue::Float(f) => {
                if f.is_finite() && f.fract() == 0.0 {
                    self.check_representable(Constant {
                        value: ConstValue::Int(f as i128),
                        ty: constant.ty,
                    })
                } else {
                    Err(EvalError::Conversion {
                        value: f.to_string(),
                        ty: name.clone(),
                    })
                }
            }
            _ => Ok(constant),
        }
    }

    // ========================================================================
    // Operators
    // ========================================================================

    fn unary(&self, op: UnaryOp, operand: Constant) -> Result<Constant, EvalError> {
        let value = match (op, &operand.value) {
            (UnaryOp::Plus, ConstValue::Int(_) | ConstValue::Float(_)) => operand.value.clone(),
            (UnaryOp::Neg, ConstValue::Int(v)) => ConstValue::Int(v.checked_neg().ok_or_else(|| EvalError::Overflow {
                value: format!("-{}", v),
                ty: "untyped int".to_string(),
            })?),
            (UnaryOp::Neg, ConstValue::Float(f)) => ConstValue::Float(-f),
            (UnaryOp::Complement, ConstValue::Int(v)) => {
                let unsigned_bits = operand
                    .ty
                    .type_name()
                    .and_then(|t| self.types.underlying_basic(t))
                    .filter(|b| b.is_integer() && b.is_unsigned())
                    .map(|b| b.info().bits);
                match unsigned_bits {
                    Some(bits) => ConstValue::Int(v ^ ((1i128 << bits) - 1)),
                    None => ConstValue::Int(!v),
                }
            }
            (UnaryOp::Not, ConstValue::Bool(b)) => ConstValue::Bool(!b),
            (op, value) => {
                return Err(EvalError::InvalidOperation(format!(
                    "operator {:?} not defined on {}",
                    op,
                    value.literal()
                )));
            }
        };
        self.check_representable(Constant { value, ty: operand.ty })
    }

    fn binary(&self, left: Constant, op: BinaryOp, right: Constant) -> Result<Constant, EvalError> {
        if op.is_shift() {
            return self.shift(left, op, right);
        }

        let ty = unify(&left.ty, &right.ty)?;
        let invalid = || {
            EvalError::InvalidOperation(format!(
                "{} {} {}",
                left.value.literal(),
                op,
                right.value.literal()
            ))
        };

        if op.is_comparison() {
            let result = compare(&left.value, op, &right.value).ok_or_else(invalid)?;
            return Ok(Constant::untyped(ConstValue::Bool(result), UntypedKind::Bool));
        }

        let value = match (&left.value, &right.value) {
            (ConstValue::Bool(a), ConstValue::Bool(b)) => match op {
                BinaryOp::LogicalAnd => ConstValue::Bool(*a && *b),
                BinaryOp::LogicalOr => ConstValue::Bool(*a || *b),
                _ => return Err(invalid()),
            },
            (ConstValue::String(a), ConstValue::String(b)) => match op {
                BinaryOp::Add => ConstValue::String(format!("{}{}", a, b)),
                _ => return Err(invalid()),
            },
            (ConstValue::Int(a), ConstValue::Int(b)) if !is_float_kind(&ty) => int_op(*a, op, *b, &ty)?,
            (a, b) => {
                let (Some(a), Some(b)) = (a.as_f64(), b.as_f64()) else {
                    return Err(invalid());
                };
                match op {
                    BinaryOp::Add => ConstValue::Float(a + b),
                    BinaryOp::Sub => ConstValue::Float(a - b),
                    BinaryOp::Mul => ConstValue::Float(a * b),
                    BinaryOp::Div if b == 0.0 => return Err(EvalError::DivisionByZero),
                    BinaryOp::Div => ConstValue::Float(a / b),
                    _ => return Err(invalid()),
                }
            }
        };

        self.check_representable(Constant { value, ty })
    }

    fn shift(&self, left: Constant, op: BinaryOp, right: Constant) -> Result<Constant, EvalError> {
        let count = match right.value {
            ConstValue::Int(c) if c >= 0 => c,
            ConstValue::Float(f) if f >= 0.0 && f.fract() == 0.0 => f as i128,
            other => {
                return Err(EvalError::InvalidOperation(format!(
                    "invalid shift count {}",
                    other.literal()
                )));
            }
        };
        let value = match left.value {
            ConstValue::Int(v) => v,
            ConstValue::Float(f) if left.ty.type_name().is_none() && f.fract() == 0.0 => f as i128,
            other => {
                return Err(EvalError::InvalidOperation(format!(
                    "shift of non-integer {}",
                    other.literal()
                )));
            }
        };

        let shifted = match op {
            BinaryOp::Shl => {
                if value == 0 {
                    0
                } else if count >= 127 {
                    return Err(EvalError::Overflow {
                        value: format!("{} << {}", value, count),
                        ty: "untyped int".to_string(),
                    });
                } else {
                    let r = value << count;
                    if r >> count != value {
                        return Err(EvalError::Overflow {
                            value: format!("{} << {}", value, count),
                            ty: "untyped int".to_string(),
                        });
                    }
                    r
                }
            }
            _ => {
                if count >= 127 {
                    if value < 0 { -1 } else { 0 }
                } else {
                    value >> count
                }
            }
        };

        let ty = match left.ty {
            ConstType::Untyped(UntypedKind::Float) => ConstType::Untyped(UntypedKind::Int),
            other => other,
        };
        self.check_representable(Constant {
            value: ConstValue::Int(shifted),
            ty,
        })
    }
}

// ============================================================================
// Operator helpers
// ============================================================================

/// Result type of a binary operation on two constants.
fn unify(a: &ConstType, b: &ConstType) -> Result<ConstType, EvalError> {
    match (a, b) {
        (ConstType::Typed(x), ConstType::Typed(y)) if x != y => Err(EvalError::Mismatched(x.clone(), y.clone())),
        (ConstType::Typed(x), _) | (_, ConstType::Typed(x)) => Ok(ConstType::Typed(x.clone())),
        (ConstType::Untyped(x), ConstType::Untyped(y)) => Ok(ConstType::Untyped((*x).max(*y))),
    }
}

fn is_float_kind(ty: &ConstType) -> bool {
    matches!(ty, ConstType::Untyped(UntypedKind::Float))
}

fn int_op(a: i128, op: BinaryOp, b: i128, ty: &ConstType) -> Result<ConstValue, EvalError> {
    let overflow = || EvalError::Overflow {
        value: format!("{} {} {}", a, op, b),
        ty: match ty {
            ConstType::Typed(name) => name.clone(),
            ConstType::Untyped(_) => "untyped int".to_string(),
        },
    };
    let v = match op {
        BinaryOp::Add => a.checked_add(b).ok_or_else(overflow)?,
        BinaryOp::Sub => a.checked_sub(b).ok_or_else(overflow)?,
        BinaryOp::Mul => a.checked_mul(b).ok_or_else(overflow)?,
        BinaryOp::Div | BinaryOp::Rem if b == 0 => return Err(EvalError::DivisionByZero),
        BinaryOp::Div => a.checked_div(b).ok_or_else(overflow)?,
        BinaryOp::Rem => a.checked_rem(b).ok_or_else(overflow)?,
        BinaryOp::And => a & b,
        BinaryOp::Or => a | b,
        BinaryOp::Xor => a ^ b,
        BinaryOp::AndNot => a & !b,
        _ => {
            return Err(EvalError::InvalidOperation(format!(
                "operator {} not defined on integers",
                op
            )));
        }
    };
    Ok(ConstValue::Int(v))
}

fn compare(a: &ConstValue, op: BinaryOp, b: &ConstValue) -> Option<bool> {
    use std::cmp::Ordering;

    let ordering = match (a, b) {
        (ConstValue::Int(x), ConstValue::Int(y)) => x.cmp(y),
        (ConstValue::String(x), ConstValue::String(y)) => x.cmp(y),
        (ConstValue::Bool(x), ConstValue::Bool(y)) => {
            return match op {
                BinaryOp::Eq => Some(x == y),
                BinaryOp::NotEq => Some(x != y),
                _ => None,
            };
        }
        (x, y) => x.as_f64()?.partial_cmp(&y.as_f64()?)?,
    };

    Some(match op {
        BinaryOp::Eq => ordering == Ordering::Equal,
        BinaryOp::NotEq => ordering != Ordering::Equal,
        BinaryOp::Lt => ordering == Ordering::Less,
        BinaryOp::LtEq => ordering != Ordering::Greater,
        BinaryOp::Gt => ordering == Ordering::Greater,
        BinaryOp::GtEq => ordering != Ordering::Less,
        _ => return None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use enumgen_core::lang::types;
    use enumgen_syntax::ast::{Declaration, Span};
    use enumgen_syntax::parser::parse_source;

    /// Declared types for tests: `type Name underlying`.
    struct Types(Vec<(&'static str, &'static str)>);

    impl TypeResolver for Types {
        fn is_type(&self, name: &str) -> bool {
            types::from_str(name).is_some() || self.0.iter().any(|(n, _)| *n == name)
        }

        fn underlying_basic(&self, name: &str) -> Option<BasicType> {
            match self.0.iter().find(|(n, _)| *n == name) {
                Some((_, underlying)) => self.underlying_basic(underlying),
                None => types::from_str(name),
            }
        }
    }

    /// Build defs from a const block the same way the symbol table does.
    fn defs(source: &str) -> HashMap<String, ConstDef> {
        let file = parse_source(&format!("package p\n{}", source)).unwrap();
        let mut defs = HashMap::new();
        for decl in &file.declarations {
            let Declaration::Const(c) = &decl.node else { continue };
            let mut last: Option<(Option<TypeExpr>, Vec<Spanned<Expr>>)> = None;
            for spec in &c.specs {
                if !spec.node.values.is_empty() {
                    last = Some((spec.node.ty.as_ref().map(|t| t.node.clone()), spec.node.values.clone()));
                }
                let Some((ty, values)) = &last else { continue };
                for (i, name) in spec.node.names.iter().enumerate() {
                    defs.insert(
                        name.node.clone(),
                        ConstDef {
                            name: name.node.clone(),
                            expr: values.get(i).cloned().unwrap_or(Spanned::new(Expr::Int(0), Span::default())),
                            ty: ty.clone(),
                            iota: spec.node.iota,
                        },
                    );
                }
            }
        }
        defs
    }

    fn eval(source: &str, name: &str) -> Result<Constant, EvalError> {
        let types = Types(vec![("Color", "int"), ("Small", "uint8"), ("Label", "string"), ("Ratio", "float64")]);
        let defs = defs(source);
        ConstEvaluator::new(&defs, &types).eval(name)
    }

    #[test]
    fn test_iota_and_implicit_repetition() {
        let src = "const (\n\tRed Color = iota\n\tGreen\n\tBlue\n)\n";
        let blue = eval(src, "Blue").unwrap();
        assert_eq!(blue.value, ConstValue::Int(2));
        assert_eq!(blue.ty, ConstType::Typed("Color".into()));
    }

    #[test]
    fn test_iota_expression_repeats() {
        let src = "const (\n\t_ = iota\n\tKB Color = 1 << (10 * iota)\n\tMB\n)\n";
        assert_eq!(eval(src, "KB").unwrap().value, ConstValue::Int(1024));
        assert_eq!(eval(src, "MB").unwrap().value, ConstValue::Int(1 << 20));
    }

    #[test]
    fn test_typed_conversion_call() {
        let src = "const (\n\tA = Color(iota + 1)\n\tB\n)\n";
        let b = eval(src, "B").unwrap();
        assert_eq!(b.value, ConstValue::Int(2));
        assert_eq!(b.ty.type_name(), Some("Color"));
    }

    #[test]
    fn test_forward_reference() {
        let src = "const A Color = B + 1\nconst B = 41\n";
        assert_eq!(eval(src, "A").unwrap().value, ConstValue::Int(42));
    }

    #[test]
    fn test_cycle_detected() {
        let src = "const A = B\nconst B = A\n";
        assert!(matches!(eval(src, "A"), Err(EvalError::Cycle(_))));
    }

    #[test]
    fn test_overflow_of_typed_value() {
        let src = "const X Small = 256\n";
        assert!(matches!(eval(src, "X"), Err(EvalError::Overflow { .. })));
        let src = "const Y Small = -1\n";
        assert!(matches!(eval(src, "Y"), Err(EvalError::Overflow { .. })));
    }

    #[test]
    fn test_complement_of_unsigned() {
        let src = "const X Small = ^Small(0)\n";
        assert_eq!(eval(src, "X").unwrap().value, ConstValue::Int(255));
        let src = "const Y = ^0\n";
        assert_eq!(eval(src, "Y").unwrap().value, ConstValue::Int(-1));
    }

    #[test]
    fn test_string_constants() {
        let src = "const (\n\tPrefix = \"pre\"\n\tA Label = Prefix + \"fix\"\n\tN = len(Prefix)\n)\n";
        assert_eq!(eval(src, "A").unwrap().value, ConstValue::String("prefix".into()));
        assert_eq!(eval(src, "N").unwrap().value, ConstValue::Int(3));
    }

    #[test]
    fn test_string_of_int_conversion() {
        assert_eq!(
            eval("const A = Label(65)\n", "A").unwrap().value,
            ConstValue::String("A".into())
        );
        assert!(matches!(eval("const B Label = 65\n", "B"), Err(EvalError::Conversion { .. })));
    }

    #[test]
    fn test_mismatched_typed_operands() {
        let src = "const (\n\tA Color = 1\n\tB Small = 2\n\tC = A + B\n)\n";
        assert!(matches!(eval(src, "C"), Err(EvalError::Mismatched(_, _))));
    }

    #[test]
    fn test_integer_division_and_division_by_zero() {
        assert_eq!(eval("const A = 7 / 2\n", "A").unwrap().value, ConstValue::Int(3));
        assert_eq!(eval("const B = 7.0 / 2\n", "B").unwrap().value, ConstValue::Float(3.5));
        assert!(matches!(eval("const C = 1 / 0\n", "C"), Err(EvalError::DivisionByZero)));
    }

    #[test]
    fn test_float_truncation_into_integer_type() {
        assert_eq!(eval("const A Color = 2.0\n", "A").unwrap().value, ConstValue::Int(2));
        assert!(eval("const B Color = 2.5\n", "B").is_err());
    }

    #[test]
    fn test_comparisons_and_logic() {
        assert_eq!(
            eval("const A = 1 < 2 && \"a\" != \"b\"\n", "A").unwrap().value,
            ConstValue::Bool(true)
        );
    }

    #[test]
    fn test_undefined_and_qualified() {
        assert!(matches!(eval("const A = Missing\n", "A"), Err(EvalError::Undefined(_))));
        assert!(matches!(
            eval("const B = math.MaxInt8\n", "B"),
            Err(EvalError::Unsupported(_))
        ));
    }

    #[test]
    fn test_rune_literal() {
        let c = eval("const A = 'a' + 1\n", "A").unwrap();
        assert_eq!(c.value, ConstValue::Int(98));
        assert_eq!(c.ty, ConstType::Untyped(UntypedKind::Rune));
    }
}
