//! Source expression trees and the construction DSL.
//!
//! An [`Expr`] is the input language of the engine: an immutable,
//! caller-owned tree describing a boolean predicate over a declared object
//! model. The engine walks these trees; it never mutates them.
//!
//! The builder methods on [`Expr`] (and the free functions [`param`], [`lit`]
//! and [`lambda`]) are the embedded query DSL face of the crate: they
//! construct well-formed trees with correct method-signature metadata so that
//! translators can match on call shape alone.

use std::fmt;

use skiff_model::Value;
use smol_str::SmolStr;

/// Binary operators in the source language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    /// Logical conjunction (`&&`).
    And,
    /// Logical disjunction (`||`).
    Or,
    /// Equality (`==`).
    Eq,
    /// Inequality (`!=`).
    Ne,
    /// Less-than (`<`).
    Lt,
    /// Less-than-or-equal (`<=`).
    Lte,
    /// Greater-than (`>`).
    Gt,
    /// Greater-than-or-equal (`>=`).
    Gte,
}

impl BinaryOp {
    /// Check whether this is a logical combinator.
    pub fn is_logical(&self) -> bool {
        matches!(self, Self::And | Self::Or)
    }

    /// Check whether this is a comparison operator.
    pub fn is_comparison(&self) -> bool {
        !self.is_logical()
    }

    /// The operator with its operand order swapped (`a < b` ⇔ `b > a`).
    pub fn mirrored(self) -> Self {
        match self {
            Self::Lt => Self::Gt,
            Self::Lte => Self::Gte,
            Self::Gt => Self::Lt,
            Self::Gte => Self::Lte,
            other => other,
        }
    }

    /// Source-level symbol, used by the pretty-printer.
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::And => "&&",
            Self::Or => "||",
            Self::Eq => "==",
            Self::Ne => "!=",
            Self::Lt => "<",
            Self::Lte => "<=",
            Self::Gt => ">",
            Self::Gte => ">=",
        }
    }
}

/// Unary operators in the source language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnaryOp {
    /// Logical negation (`!`).
    Not,
}

/// Declared return type recorded in a method signature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeKind {
    /// Boolean.
    Bool,
    /// Any numeric type.
    Number,
    /// String.
    String,
    /// Any other object type.
    Object,
    /// No value.
    Void,
}

/// Signature facts a translator may match on: name, staticness, visibility
/// and return type. Arity comes from the argument list of the call itself.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MethodSig {
    /// Method name.
    pub name: SmolStr,
    /// Whether the method is static (has no receiver).
    pub is_static: bool,
    /// Whether the method is publicly visible.
    pub is_public: bool,
    /// Declared return type.
    pub returns: TypeKind,
}

impl MethodSig {
    /// Create a signature with every fact spelled out.
    pub fn new(name: impl Into<SmolStr>, is_static: bool, is_public: bool, returns: TypeKind) -> Self {
        Self {
            name: name.into(),
            is_static,
            is_public,
            returns,
        }
    }

    /// Create a public instance-method signature.
    pub fn instance(name: impl Into<SmolStr>, returns: TypeKind) -> Self {
        Self::new(name, false, true, returns)
    }
}

/// A method call together with its signature metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct MethodCall {
    /// Receiver expression; `None` for static calls.
    pub receiver: Option<Box<Expr>>,
    /// Signature of the invoked method.
    pub method: MethodSig,
    /// Argument expressions, in source order.
    pub args: Vec<Expr>,
}

impl MethodCall {
    /// Number of arguments.
    pub fn arity(&self) -> usize {
        self.args.len()
    }

    /// Check whether the call is a non-static call with a receiver.
    pub fn is_instance(&self) -> bool {
        !self.method.is_static && self.receiver.is_some()
    }
}

/// A node of the source predicate language.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// Reference to an enclosing lambda parameter.
    Parameter(SmolStr),
    /// Compile-time constant.
    Constant(Value),
    /// Member access: `object.member`.
    Member {
        /// Expression producing the accessed object.
        object: Box<Expr>,
        /// Member name, as declared on the model.
        member: SmolStr,
    },
    /// Indexer/keyed access: `object[index]`.
    Index {
        /// Expression producing the indexed object.
        object: Box<Expr>,
        /// Index expression.
        index: Box<Expr>,
    },
    /// Method invocation.
    Call(MethodCall),
    /// Binary operator application.
    Binary {
        /// The operator.
        op: BinaryOp,
        /// Left operand.
        left: Box<Expr>,
        /// Right operand.
        right: Box<Expr>,
    },
    /// Unary operator application.
    Unary {
        /// The operator.
        op: UnaryOp,
        /// Operand.
        operand: Box<Expr>,
    },
    /// Lambda abstraction: `param => body`.
    Lambda {
        /// Parameter name.
        param: SmolStr,
        /// Predicate body.
        body: Box<Expr>,
    },
}

/// Reference a lambda parameter.
pub fn param(name: impl Into<SmolStr>) -> Expr {
    Expr::Parameter(name.into())
}

/// Embed a compile-time constant.
pub fn lit(value: impl Into<Value>) -> Expr {
    Expr::Constant(value.into())
}

/// Build a lambda predicate `param => body`.
pub fn lambda(param: impl Into<SmolStr>, body: Expr) -> Expr {
    Expr::Lambda {
        param: param.into(),
        body: Box::new(body),
    }
}

impl Expr {
    /// Access a member: `self.member`.
    pub fn member(self, member: impl Into<SmolStr>) -> Expr {
        Expr::Member {
            object: Box::new(self),
            member: member.into(),
        }
    }

    /// Keyed/indexer access: `self[index]`.
    pub fn index(self, index: Expr) -> Expr {
        Expr::Index {
            object: Box::new(self),
            index: Box::new(index),
        }
    }

    /// Invoke a method on this expression with explicit signature metadata.
    pub fn call(self, method: MethodSig, args: Vec<Expr>) -> Expr {
        Expr::Call(MethodCall {
            receiver: Some(Box::new(self)),
            method,
            args,
        })
    }

    /// Key-membership test on a mapping-typed member: `self.contains_key(key)`.
    pub fn contains_key(self, key: Expr) -> Expr {
        self.call(MethodSig::instance("contains_key", TypeKind::Bool), vec![key])
    }

    /// Membership test: `self.contains(item)`.
    pub fn contains(self, item: Expr) -> Expr {
        self.call(MethodSig::instance("contains", TypeKind::Bool), vec![item])
    }

    /// Prefix test on a string-typed member: `self.starts_with(prefix)`.
    pub fn starts_with(self, prefix: Expr) -> Expr {
        self.call(MethodSig::instance("starts_with", TypeKind::Bool), vec![prefix])
    }

    /// Suffix test on a string-typed member: `self.ends_with(suffix)`.
    pub fn ends_with(self, suffix: Expr) -> Expr {
        self.call(MethodSig::instance("ends_with", TypeKind::Bool), vec![suffix])
    }

    fn binary(self, op: BinaryOp, right: Expr) -> Expr {
        Expr::Binary {
            op,
            left: Box::new(self),
            right: Box::new(right),
        }
    }

    /// Equality comparison: `self == other`.
    pub fn eq(self, other: Expr) -> Expr {
        self.binary(BinaryOp::Eq, other)
    }

    /// Inequality comparison: `self != other`.
    pub fn ne(self, other: Expr) -> Expr {
        self.binary(BinaryOp::Ne, other)
    }

    /// Less-than comparison: `self < other`.
    pub fn lt(self, other: Expr) -> Expr {
        self.binary(BinaryOp::Lt, other)
    }

    /// Less-than-or-equal comparison: `self <= other`.
    pub fn lte(self, other: Expr) -> Expr {
        self.binary(BinaryOp::Lte, other)
    }

    /// Greater-than comparison: `self > other`.
    pub fn gt(self, other: Expr) -> Expr {
        self.binary(BinaryOp::Gt, other)
    }

    /// Greater-than-or-equal comparison: `self >= other`.
    pub fn gte(self, other: Expr) -> Expr {
        self.binary(BinaryOp::Gte, other)
    }

    /// Logical conjunction: `self && other`.
    pub fn and(self, other: Expr) -> Expr {
        self.binary(BinaryOp::And, other)
    }

    /// Logical disjunction: `self || other`.
    pub fn or(self, other: Expr) -> Expr {
        self.binary(BinaryOp::Or, other)
    }

    /// Logical negation: `!self`.
    pub fn not(self) -> Expr {
        Expr::Unary {
            op: UnaryOp::Not,
            operand: Box::new(self),
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parameter(name) => write!(f, "{}", name),
            Self::Constant(value) => write!(f, "{}", value),
            Self::Member { object, member } => write!(f, "{}.{}", object, member),
            Self::Index { object, index } => write!(f, "{}[{}]", object, index),
            Self::Call(call) => {
                if let Some(receiver) = &call.receiver {
                    write!(f, "{}.{}(", receiver, call.method.name)?;
                } else {
                    write!(f, "{}(", call.method.name)?;
                }
                for (i, arg) in call.args.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", arg)?;
                }
                write!(f, ")")
            }
            Self::Binary { op, left, right } => {
                write!(f, "({} {} {})", left, op.symbol(), right)
            }
            Self::Unary { op: UnaryOp::Not, operand } => write!(f, "!{}", operand),
            Self::Lambda { param, body } => write!(f, "{} => {}", param, body),
        }
    }
}
