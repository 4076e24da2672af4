//! Recursive terms over uninterpreted function symbols

use serde::{Deserialize, Serialize};
use std::fmt;

/// Classification of a leaf identifier, decided once at construction
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum LeafKind {
    /// A goal placeholder `goal<N>` introduced by flattening
    Goal(usize),
    /// An all-uppercase identifier (a prover variable)
    Variable,
    /// A `num<N>` / `numneg<N>` / `negnum<N>` encoded integer
    Numeric(i64),
    /// Any other identifier
    Constant,
}

/// A leaf: an identifier with no children
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Leaf {
    pub name: String,
    pub kind: LeafKind,
}

/// A term: a leaf or an application of an identifier to child terms
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Term {
    Leaf(Leaf),
    Application(String, Vec<Term>),
}

impl Leaf {
    pub fn new(name: &str) -> Self {
        Leaf {
            name: name.to_string(),
            kind: classify(name),
        }
    }
}

/// Classify a leaf identifier.
///
/// Precedence: goal label, then numeric encoding (case-insensitive prefix),
/// then uppercase variable, then constant. A goal label must be `goal`
/// followed by nothing but decimal digits.
fn classify(name: &str) -> LeafKind {
    if let Some(digits) = name.strip_prefix("goal") {
        if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) {
            if let Ok(index) = digits.parse() {
                return LeafKind::Goal(index);
            }
        }
    }
    for negative_prefix in ["numneg", "negnum"] {
        if has_prefix_ci(name, negative_prefix) {
            if let Ok(value) = name[negative_prefix.len()..].parse::<i64>() {
                return LeafKind::Numeric(-value);
            }
        }
    }
    if has_prefix_ci(name, "num") {
        if let Ok(value) = name[3..].parse::<i64>() {
            return LeafKind::Numeric(value);
        }
    }
    if !name.is_empty() && name == name.to_uppercase() {
        return LeafKind::Variable;
    }
    LeafKind::Constant
}

/// ASCII case-insensitive prefix check. A match guarantees the prefix
/// length is a char boundary of `name`.
fn has_prefix_ci(name: &str, prefix: &str) -> bool {
    name.len() >= prefix.len()
        && name.as_bytes()[..prefix.len()].eq_ignore_ascii_case(prefix.as_bytes())
}

impl Term {
    /// Create a leaf term, classifying the identifier
    pub fn leaf(name: &str) -> Term {
        Term::Leaf(Leaf::new(name))
    }

    /// Create an application. An empty argument list degrades to a leaf,
    /// so `f()` and `f` denote the same term.
    pub fn app(head: &str, args: Vec<Term>) -> Term {
        if args.is_empty() {
            Term::leaf(head)
        } else {
            Term::Application(head.to_string(), args)
        }
    }

    /// The identifier at the root of this term
    pub fn head(&self) -> &str {
        match self {
            Term::Leaf(leaf) => &leaf.name,
            Term::Application(head, _) => head,
        }
    }

    /// True iff this is an all-uppercase leaf
    pub fn is_variable(&self) -> bool {
        matches!(self, Term::Leaf(leaf) if leaf.kind == LeafKind::Variable)
    }

    /// The integer encoded by a `num`-prefixed leaf, if any
    pub fn numeric_value(&self) -> Option<i64> {
        match self {
            Term::Leaf(Leaf {
                kind: LeafKind::Numeric(value),
                ..
            }) => Some(*value),
            _ => None,
        }
    }

    /// The goal label name, if this term is a bare goal leaf
    pub fn as_goal(&self) -> Option<&str> {
        match self {
            Term::Leaf(leaf) if matches!(leaf.kind, LeafKind::Goal(_)) => Some(&leaf.name),
            _ => None,
        }
    }

    /// Node count: 1 for a leaf, 1 plus the children for an application
    pub fn size(&self) -> usize {
        match self {
            Term::Leaf(_) => 1,
            Term::Application(_, args) => 1 + args.iter().map(Term::size).sum::<usize>(),
        }
    }

    /// True iff no goal-label leaf occurs anywhere in this term
    pub fn is_ground(&self) -> bool {
        match self {
            Term::Leaf(leaf) => !matches!(leaf.kind, LeafKind::Goal(_)),
            Term::Application(_, args) => args.iter().all(Term::is_ground),
        }
    }

    /// True iff `name` occurs as the identifier of any node in this term
    pub fn contains_symbol(&self, name: &str) -> bool {
        if self.head() == name {
            return true;
        }
        match self {
            Term::Leaf(_) => false,
            Term::Application(_, args) => args.iter().any(|arg| arg.contains_symbol(name)),
        }
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Term::Leaf(leaf) => write!(f, "{}", leaf.name),
            Term::Application(head, args) => {
                write!(f, "{}(", head)?;
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        write!(f, ",")?;
                    }
                    write!(f, "{}", arg)?;
                }
                write!(f, ")")
            }
        }
    }
}
