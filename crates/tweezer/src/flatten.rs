//! Flattening encoder
//!
//! Decomposes one (possibly deep) term into shallow equations, each
//! introducing a fresh `goal<N>` label for one internal node, so the
//! completion prover only ever sees bounded-depth axioms.

use crate::term::Term;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// The label assigned to the traversal root
pub const ROOT_LABEL: &str = "goal0";

/// One shallow equation `label = rhs`, together with the original subterm
/// the label stands for (used for payload comments).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Equation {
    pub index: usize,
    pub label: String,
    pub rhs: Term,
    pub original: Term,
}

impl Equation {
    /// The TPTP axiom line for this equation
    pub fn axiom_line(&self) -> String {
        format!("cnf(goal,axiom, {} = {}).", self.label, self.rhs)
    }

    /// The comment line recording what the label stands for
    pub fn comment_line(&self) -> String {
        format!("% {} represents {}", self.label, self.original)
    }
}

/// Flatten a term into shallow goal equations.
///
/// Pre-order traversal assigns strictly increasing indices starting at 0,
/// so the root is always `goal0`, even when it is a leaf. A per-call cache
/// keyed by structural equality reuses one label for structurally identical
/// subterms. Leaves below the root are left in place. The returned list is
/// in assignment order, root equation first.
pub fn flatten(term: &Term) -> Vec<Equation> {
    let mut cache = HashMap::new();
    let mut equations = Vec::new();
    collect(term, 0, &mut cache, &mut equations);
    equations.sort_by_key(|eq| eq.index);
    equations
}

/// The degenerate encoding: a single equation `goal0 = term`
pub fn unflattened(term: &Term) -> Vec<Equation> {
    vec![Equation {
        index: 0,
        label: ROOT_LABEL.to_string(),
        rhs: term.clone(),
        original: term.clone(),
    }]
}

/// Returns the next free index and the shallow replacement for `term`
/// (its goal leaf if an equation was emitted, the leaf itself otherwise).
fn collect(
    term: &Term,
    index: usize,
    cache: &mut HashMap<Term, Term>,
    out: &mut Vec<Equation>,
) -> (usize, Term) {
    if let Some(label_leaf) = cache.get(term) {
        // no index consumed, the existing label is reused
        return (index, label_leaf.clone());
    }
    if index > 0 && matches!(term, Term::Leaf(_)) {
        // a non-root leaf needs no decomposition
        return (index, term.clone());
    }
    let mut next = index + 1;
    let mut shallow_args = Vec::new();
    if let Term::Application(_, args) = term {
        for arg in args {
            let (after, shallow) = collect(arg, next, cache, out);
            next = after;
            shallow_args.push(shallow);
        }
    }
    let label = format!("goal{}", index);
    let label_leaf = Term::leaf(&label);
    out.push(Equation {
        index,
        label,
        rhs: Term::app(term.head(), shallow_args),
        original: term.clone(),
    });
    cache.insert(term.clone(), label_leaf.clone());
    (next, label_leaf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;

    fn lines(equations: &[Equation]) -> Vec<String> {
        equations
            .iter()
            .map(|eq| format!("{} = {}", eq.label, eq.rhs))
            .collect()
    }

    #[test]
    fn test_flatten_simple() {
        let term = parse("f(g(a),b)").unwrap();
        let equations = flatten(&term);
        assert_eq!(
            lines(&equations),
            vec!["goal0 = f(goal1,b)", "goal1 = g(a)"]
        );
    }

    #[test]
    fn test_root_leaf_still_labeled() {
        let term = parse("a").unwrap();
        let equations = flatten(&term);
        assert_eq!(lines(&equations), vec!["goal0 = a"]);
    }

    #[test]
    fn test_dedup_repeated_subterm() {
        let term = parse("f(g(a),g(a))").unwrap();
        let equations = flatten(&term);
        assert_eq!(
            lines(&equations),
            vec!["goal0 = f(goal1,goal1)", "goal1 = g(a)"]
        );
        // exactly one equation for the repeated subterm
        let for_g = equations.iter().filter(|eq| eq.rhs.head() == "g").count();
        assert_eq!(for_g, 1);
    }

    #[test]
    fn test_assignment_order_root_first() {
        let term = parse("f(g(h(a)),k(b))").unwrap();
        let equations = flatten(&term);
        let indices: Vec<usize> = equations.iter().map(|eq| eq.index).collect();
        assert_eq!(indices, vec![0, 1, 2, 3]);
        assert_eq!(equations[0].label, ROOT_LABEL);
        assert_eq!(
            lines(&equations),
            vec![
                "goal0 = f(goal1,goal3)",
                "goal1 = g(goal2)",
                "goal2 = h(a)",
                "goal3 = k(b)"
            ]
        );
    }

    #[test]
    fn test_leaves_left_in_place() {
        let term = parse("f(a,X,num2)").unwrap();
        let equations = flatten(&term);
        assert_eq!(lines(&equations), vec!["goal0 = f(a,X,num2)"]);
    }

    #[test]
    fn test_unflattened() {
        let term = parse("f(g(a),b)").unwrap();
        let equations = unflattened(&term);
        assert_eq!(lines(&equations), vec!["goal0 = f(g(a),b)"]);
    }

    #[test]
    fn test_axiom_line_format() {
        let term = parse("f(a)").unwrap();
        let equations = flatten(&term);
        assert_eq!(equations[0].axiom_line(), "cnf(goal,axiom, goal0 = f(a)).");
        assert_eq!(equations[0].comment_line(), "% goal0 represents f(a)");
    }
}
