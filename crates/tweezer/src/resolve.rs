//! Resolver
//!
//! Greedily combines candidate equality pairs into a mapping from goal
//! labels to their minimal ground representatives, driven by a min-heap
//! keyed on (term size, label). Bindings are write-once: the heap ordering
//! guarantees the first extraction for a label is minimal, so later
//! candidates for the same label are discarded unexamined.

use crate::flatten::ROOT_LABEL;
use crate::term::Term;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;
use std::collections::BinaryHeap;

/// A scheduled binding candidate. The derived ordering makes the heap
/// deterministic: size first, then label, then the term itself.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
struct Candidate {
    size: usize,
    label: String,
    value: Term,
}

/// What resolution concluded about the root label `goal0`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RootOutcome {
    /// A ground binding was committed
    Resolved(Term),
    /// No binding, but a final pending pair mentions `goal0` bare on one
    /// side; this is the textually shortest opposite side, non-definitive
    BestEffort(Term),
    /// `goal0` appeared in the evidence but no binding survived
    Unresolved,
    /// `goal0` never appeared in any original pair
    Absent,
}

/// The result of one resolution run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Resolution {
    /// Committed bindings, in commit order
    pub bindings: IndexMap<String, Term>,
    /// Pairs that never became reducible to a binding
    pub pending: Vec<(Term, Term)>,
    pub root: RootOutcome,
}

/// Resolve candidate pairs into goal-label bindings.
pub fn resolve(pairs: &[(Term, Term)]) -> Resolution {
    let root_mentioned = pairs
        .iter()
        .any(|(lhs, rhs)| lhs.contains_symbol(ROOT_LABEL) || rhs.contains_symbol(ROOT_LABEL));

    let mut heap: BinaryHeap<Reverse<Candidate>> = BinaryHeap::new();
    let mut pending: Vec<(Term, Term)> = Vec::new();

    for (lhs, rhs) in pairs {
        if is_self_referential(lhs, rhs) {
            continue;
        }
        classify(lhs.clone(), rhs.clone(), &mut heap, &mut pending);
    }

    let mut bindings: IndexMap<String, Term> = IndexMap::new();
    while let Some(Reverse(candidate)) = heap.pop() {
        if bindings.contains_key(&candidate.label) {
            continue;
        }
        bindings.insert(candidate.label.clone(), candidate.value.clone());

        let label_leaf = Term::leaf(&candidate.label);
        let previous = std::mem::take(&mut pending);
        for (lhs, rhs) in previous {
            // a pair defining the just-resolved label in terms of itself
            // closes out here instead of looping under substitution
            if (lhs == label_leaf && rhs.contains_symbol(&candidate.label))
                || (rhs == label_leaf && lhs.contains_symbol(&candidate.label))
            {
                continue;
            }
            let new_lhs = lhs.replace_leaf(&candidate.label, &candidate.value);
            let new_rhs = rhs.replace_leaf(&candidate.label, &candidate.value);
            if new_lhs == new_rhs {
                continue;
            }
            classify(new_lhs, new_rhs, &mut heap, &mut pending);
        }
    }

    let root = root_outcome(&bindings, &pending, root_mentioned);
    Resolution {
        bindings,
        pending,
        root,
    }
}

/// One side is a bare goal label and the other side mentions that label
/// anywhere, in either orientation.
fn is_self_referential(lhs: &Term, rhs: &Term) -> bool {
    if let Some(label) = lhs.as_goal() {
        if rhs.contains_symbol(label) {
            return true;
        }
    }
    if let Some(label) = rhs.as_goal() {
        if lhs.contains_symbol(label) {
            return true;
        }
    }
    false
}

/// Schedule a pair as a binding candidate when one side is a bare goal
/// label and the other is ground; drop it when both sides are ground with
/// no bare-label side; keep it pending otherwise.
fn classify(
    lhs: Term,
    rhs: Term,
    heap: &mut BinaryHeap<Reverse<Candidate>>,
    pending: &mut Vec<(Term, Term)>,
) {
    if rhs.is_ground() {
        if let Some(label) = lhs.as_goal() {
            heap.push(Reverse(Candidate {
                size: rhs.size(),
                label: label.to_string(),
                value: rhs,
            }));
            return;
        }
    }
    if lhs.is_ground() {
        if let Some(label) = rhs.as_goal() {
            heap.push(Reverse(Candidate {
                size: lhs.size(),
                label: label.to_string(),
                value: lhs,
            }));
            return;
        }
    }
    if lhs.is_ground() && rhs.is_ground() {
        // equality between two resolved encodings, no binding information
        return;
    }
    pending.push((lhs, rhs));
}

fn root_outcome(
    bindings: &IndexMap<String, Term>,
    pending: &[(Term, Term)],
    root_mentioned: bool,
) -> RootOutcome {
    if let Some(term) = bindings.get(ROOT_LABEL) {
        return RootOutcome::Resolved(term.clone());
    }
    let root_leaf = Term::leaf(ROOT_LABEL);
    let best = pending
        .iter()
        .filter_map(|(lhs, rhs)| {
            if *lhs == root_leaf {
                Some(rhs)
            } else if *rhs == root_leaf {
                Some(lhs)
            } else {
                None
            }
        })
        .min_by_key(|term| {
            let printed = term.to_string();
            (printed.len(), printed)
        });
    if let Some(term) = best {
        return RootOutcome::BestEffort(term.clone());
    }
    if root_mentioned {
        RootOutcome::Unresolved
    } else {
        RootOutcome::Absent
    }
}
