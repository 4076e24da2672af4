//! Property-based tests for the term parser using proptest.

use crate::parser::parse;
use crate::term::Term;
use proptest::prelude::*;

/// Term description (before building) over a fixed symbol pool free of
/// the delimiter characters.
#[derive(Debug, Clone)]
enum TermDesc {
    Leaf(u8),
    App(u8, Vec<TermDesc>),
}

fn arb_term_desc(max_depth: u32) -> BoxedStrategy<TermDesc> {
    if max_depth == 0 {
        (0..8u8).prop_map(TermDesc::Leaf).boxed()
    } else {
        prop_oneof![
            3 => (0..8u8).prop_map(TermDesc::Leaf),
            2 => (0..3u8, proptest::collection::vec(arb_term_desc(max_depth - 1), 1..=3))
                .prop_map(|(f, args)| TermDesc::App(f, args)),
        ]
        .boxed()
    }
}

fn build_term(desc: &TermDesc) -> Term {
    const LEAVES: [&str; 8] = ["a", "b", "X", "Y", "num0", "num12", "numneg3", "goal1"];
    match desc {
        TermDesc::Leaf(i) => Term::leaf(LEAVES[*i as usize]),
        TermDesc::App(f, args) => {
            let head = format!("f{}", f);
            Term::app(&head, args.iter().map(build_term).collect())
        }
    }
}

proptest! {
    /// Printing a term and re-parsing it yields a structurally equal term.
    #[test]
    fn print_parse_round_trip(desc in arb_term_desc(4)) {
        let term = build_term(&desc);
        let printed = term.to_string();
        let reparsed = parse(&printed).unwrap();
        prop_assert_eq!(term, reparsed);
    }

    /// Size is stable under the round trip.
    #[test]
    fn size_stable_under_round_trip(desc in arb_term_desc(4)) {
        let term = build_term(&desc);
        let reparsed = parse(&term.to_string()).unwrap();
        prop_assert_eq!(term.size(), reparsed.size());
    }
}
