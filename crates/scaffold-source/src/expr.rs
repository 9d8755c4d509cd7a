//! Go expression builder
//!
//! Inserted entries are assembled from [`GoExpr`] values instead of being
//! spliced together from formatted strings, so a type such as
//! `*orders.OrdersModule` is a pointer to a qualified name by construction.

use std::fmt::{self, Display, Formatter};

/// A Go expression or type expression
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum GoExpr {
    /// Plain identifier: `db`
    Ident(String),
    /// Pointer type: `*T`
    Pointer(Box<GoExpr>),
    /// Selector or qualified name: `orders.OrdersModule`, `c.OrdersModule`
    Selector(Box<GoExpr>, String),
    /// Call expression: `f(a, b)`
    Call(Box<GoExpr>, Vec<GoExpr>),
}

impl GoExpr {
    /// Plain identifier
    #[inline]
    #[must_use]
    pub fn ident(name: impl Into<String>) -> Self {
        Self::Ident(name.into())
    }

    /// Package-qualified name: `package.name`
    #[inline]
    #[must_use]
    pub fn qualified(package: impl Into<String>, name: impl Into<String>) -> Self {
        Self::ident(package).select(name)
    }

    /// Pointer to this type
    #[inline]
    #[must_use]
    pub fn pointer(self) -> Self {
        Self::Pointer(Box::new(self))
    }

    /// Select `field` from this expression
    #[inline]
    #[must_use]
    pub fn select(self, field: impl Into<String>) -> Self {
        Self::Selector(Box::new(self), field.into())
    }

    /// Call this expression with `args`
    #[inline]
    #[must_use]
    pub fn call(self, args: impl IntoIterator<Item = GoExpr>) -> Self {
        Self::Call(Box::new(self), args.into_iter().collect())
    }
}

impl Display for GoExpr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            GoExpr::Ident(name) => f.write_str(name),
            GoExpr::Pointer(inner) => write!(f, "*{inner}"),
            // `*T` binds looser than `.`, so a pointer operand needs parens
            GoExpr::Selector(operand, field) => match operand.as_ref() {
                GoExpr::Pointer(_) => write!(f, "({operand}).{field}"),
                _ => write!(f, "{operand}.{field}"),
            },
            GoExpr::Call(function, args) => {
                write!(f, "{function}(")?;
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{arg}")?;
                }
                f.write_str(")")
            }
        }
    }
}
