//! The type vocabulary and its algebra
//!
//! Types form a total order (void, then primitives alphabetically, then
//! unions by member count and member order, then function types). Equality
//! and ordering are derived from the same comparison so that union
//! canonicalization and membership checks can never disagree.

use std::cmp::Ordering;
use std::fmt;

use thiserror::Error;

/// A type in the catena type system
#[derive(Debug, Clone)]
pub enum Type {
    /// The unit type; equal only to itself
    Void,

    /// A nominal primitive type such as `int` or `float`
    Prim(String),

    /// A closed set of alternatives, kept sorted and duplicate-free
    ///
    /// Only [Type::union] may build this variant.
    Union(Vec<Type>),

    /// The type of a verb
    ///
    /// Never produced by the type grammar; it enters the system through
    /// type world entries and quotations.
    Func(FuncType),
}

/// Argument and return types of a verb, in stack order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FuncType {
    pub args: Vec<Type>,
    pub rets: Vec<Type>,
}

impl FuncType {
    pub fn new(args: Vec<Type>, rets: Vec<Type>) -> Self {
        Self { args, rets }
    }
}

/// A union type listed the same member twice
#[derive(Debug, Clone, Error)]
#[error("Duplicate type `{duplicate}` in union type")]
pub struct DuplicateUnionMember {
    pub duplicate: Type,
}

impl Type {
    pub fn prim(name: impl Into<String>) -> Self {
        Type::Prim(name.into())
    }

    /// Canonicalizing union constructor
    ///
    /// Sorts the members and rejects duplicates, so that any permutation of
    /// the same member set yields an equal union.
    pub fn union(mut members: Vec<Type>) -> Result<Self, DuplicateUnionMember> {
        members.sort();
        for pair in members.windows(2) {
            if pair[0] == pair[1] {
                return Err(DuplicateUnionMember {
                    duplicate: pair[0].clone(),
                });
            }
        }
        Ok(Type::Union(members))
    }

    /// Whether a value of this type may be supplied where `formal` is required
    ///
    /// The relation is directional: a primitive fits a union that lists it
    /// and a union fits any superset union, but not the other way around.
    pub fn compatible_with(&self, formal: &Type) -> bool {
        match (self, formal) {
            (Type::Void, Type::Void) => true,
            (Type::Prim(_), Type::Prim(_)) => self == formal,
            (Type::Prim(_), Type::Union(members)) => members.iter().any(|m| m == self),
            (Type::Union(have), Type::Union(want)) => have.iter().all(|t| want.contains(t)),
            (Type::Func(_), Type::Func(_)) => self == formal,
            _ => false,
        }
    }
}

fn rank(typ: &Type) -> u8 {
    match typ {
        Type::Void => 0,
        Type::Prim(_) => 1,
        Type::Union(_) => 2,
        Type::Func(_) => 3,
    }
}

impl Ord for Type {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Type::Prim(a), Type::Prim(b)) => a.cmp(b),
            (Type::Union(a), Type::Union(b)) => a.len().cmp(&b.len()).then_with(|| a.cmp(b)),
            (Type::Func(a), Type::Func(b)) => {
                a.args.cmp(&b.args).then_with(|| a.rets.cmp(&b.rets))
            }
            _ => rank(self).cmp(&rank(other)),
        }
    }
}

impl PartialOrd for Type {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Type {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Type {}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Type::Void => write!(f, "void"),
            Type::Prim(name) => write!(f, "{name}"),
            Type::Union(members) => {
                write!(f, "{{")?;
                for (i, member) in members.iter().enumerate() {
                    if i != 0 {
                        write!(f, " ")?;
                    }
                    write!(f, "{member}")?;
                }
                write!(f, "}}")
            }
            Type::Func(func_type) => write!(f, "{func_type}"),
        }
    }
}

impl fmt::Display for FuncType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "func{{")?;
        for (i, arg) in self.args.iter().enumerate() {
            if i != 0 {
                write!(f, " ")?;
            }
            write!(f, "{arg}")?;
        }
        write!(f, " : ")?;
        for (i, ret) in self.rets.iter().enumerate() {
            if i != 0 {
                write!(f, " ")?;
            }
            write!(f, "{ret}")?;
        }
        write!(f, "}}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn int() -> Type {
        Type::prim("int")
    }

    fn float() -> Type {
        Type::prim("float")
    }

    #[test]
    fn union_is_canonical() {
        let a = Type::union(vec![int(), float()]).unwrap();
        let b = Type::union(vec![float(), int()]).unwrap();
        assert_eq!(a, b);

        let Type::Union(members) = &a else {
            panic!("not a union");
        };
        assert_eq!(members, &[float(), int()]);
    }

    #[test]
    fn union_rejects_duplicates() {
        let err = Type::union(vec![int(), float(), int()]).unwrap_err();
        assert_eq!(err.duplicate, int());
    }

    #[test]
    fn order_is_total() {
        let samples = [
            Type::Void,
            float(),
            int(),
            Type::prim("string"),
            Type::union(vec![int(), float()]).unwrap(),
            Type::union(vec![int(), float(), Type::prim("string")]).unwrap(),
            Type::Func(FuncType::new(vec![int()], vec![int()])),
        ];

        for (i, a) in samples.iter().enumerate() {
            assert_eq!(a.cmp(a), Ordering::Equal);
            for b in &samples[i + 1..] {
                assert_eq!(a.cmp(b), Ordering::Less);
                assert_eq!(b.cmp(a), Ordering::Greater);
            }
        }
    }

    #[test]
    fn unions_order_by_size_first() {
        let small = Type::union(vec![Type::prim("x"), Type::prim("y")]).unwrap();
        let big = Type::union(vec![Type::prim("a"), Type::prim("b"), Type::prim("c")]).unwrap();
        assert!(small < big);
    }

    #[test]
    fn compatibility_is_reflexive() {
        let samples = [
            Type::Void,
            int(),
            Type::union(vec![int(), float()]).unwrap(),
            Type::Func(FuncType::new(vec![int()], vec![float()])),
        ];
        for typ in &samples {
            assert!(typ.compatible_with(typ));
        }
    }

    #[test]
    fn prim_fits_union_listing_it() {
        let union = Type::union(vec![int(), float()]).unwrap();
        assert!(int().compatible_with(&union));
        assert!(!union.compatible_with(&int()));
        assert!(!Type::prim("string").compatible_with(&union));
    }

    #[test]
    fn union_fits_superset() {
        let small = Type::union(vec![int(), float()]).unwrap();
        let big = Type::union(vec![int(), float(), Type::prim("string")]).unwrap();
        assert!(small.compatible_with(&big));
        assert!(!big.compatible_with(&small));
    }

    #[test]
    fn void_only_fits_void() {
        assert!(Type::Void.compatible_with(&Type::Void));
        assert!(!Type::Void.compatible_with(&int()));
        assert!(!int().compatible_with(&Type::Void));
    }

    #[test]
    fn display() {
        let union = Type::union(vec![int(), float()]).unwrap();
        assert_eq!(union.to_string(), "{float int}");

        let func = Type::Func(FuncType::new(vec![int(), int()], vec![int()]));
        assert_eq!(func.to_string(), "func{int int : int}");
    }
}
