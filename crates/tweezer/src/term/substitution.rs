//! Pure leaf substitution

use super::term::Term;

impl Term {
    /// Replace every leaf occurrence of `label` with `value`, returning a
    /// fresh term. Application heads are never rewritten, only 0-arity
    /// leaves, so `goal1(x)` keeps its head while `goal1` is replaced.
    pub fn replace_leaf(&self, label: &str, value: &Term) -> Term {
        match self {
            Term::Leaf(leaf) if leaf.name == label => value.clone(),
            Term::Leaf(_) => self.clone(),
            Term::Application(head, args) => Term::Application(
                head.clone(),
                args.iter().map(|arg| arg.replace_leaf(label, value)).collect(),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replace_leaf() {
        let t = Term::app("f", vec![Term::leaf("goal1"), Term::leaf("a")]);
        let v = Term::app("g", vec![Term::leaf("b")]);
        let replaced = t.replace_leaf("goal1", &v);
        assert_eq!(replaced.to_string(), "f(g(b),a)");
        // the original is untouched
        assert_eq!(t.to_string(), "f(goal1,a)");
    }

    #[test]
    fn test_replace_all_occurrences() {
        let t = Term::app("f", vec![Term::leaf("goal1"), Term::leaf("goal1")]);
        let v = Term::leaf("num3");
        assert_eq!(t.replace_leaf("goal1", &v).to_string(), "f(num3,num3)");
    }

    #[test]
    fn test_replace_ignores_heads() {
        let t = Term::app("goal1", vec![Term::leaf("goal1")]);
        let v = Term::leaf("c");
        assert_eq!(t.replace_leaf("goal1", &v).to_string(), "goal1(c)");
    }

    #[test]
    fn test_replace_no_match() {
        let t = Term::app("f", vec![Term::leaf("a")]);
        assert_eq!(t.replace_leaf("goal9", &Term::leaf("b")), t);
    }
}
