//! Recursive-descent term parser
//!
//! Grammar: `term := identifier ( '(' term (',' term)* ')' )?` where an
//! identifier is a maximal non-empty run of characters other than the three
//! delimiters. Whitespace is stripped from the whole input up front, so it
//! never reaches the grammar.

use crate::error::{Result, TweezerError};
use crate::term::Term;
use nom::{bytes::complete::take_while1, character::complete::char, multi::separated_list0, IResult};

/// Parse a complete term from a string.
///
/// Fails with `Parse` when the input is empty, an identifier is empty,
/// parentheses are unbalanced, or anything is left over after the term.
pub fn parse(input: &str) -> Result<Term> {
    let stripped: String = input.chars().filter(|c| !c.is_whitespace()).collect();
    if stripped.is_empty() {
        return Err(TweezerError::Parse("empty term".to_string()));
    }
    match parse_term(&stripped) {
        Ok(("", term)) => Ok(term),
        Ok((rest, _)) => Err(TweezerError::Parse(format!(
            "trailing input {:?} after term in {:?}",
            rest, stripped
        ))),
        Err(e) => Err(TweezerError::Parse(format!(
            "malformed term {:?}: {:?}",
            stripped, e
        ))),
    }
}

fn parse_term(input: &str) -> IResult<&str, Term> {
    let (input, name) = parse_identifier(input)?;
    if let Ok((input, _)) = char::<_, nom::error::Error<&str>>('(')(input) {
        let (input, args) = separated_list0(char(','), parse_term)(input)?;
        let (input, _) = char(')')(input)?;
        Ok((input, Term::app(name, args)))
    } else {
        Ok((input, Term::leaf(name)))
    }
}

fn parse_identifier(input: &str) -> IResult<&str, &str> {
    take_while1(|c: char| c != '(' && c != ')' && c != ',')(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_leaf() {
        assert_eq!(parse("a").unwrap(), Term::leaf("a"));
        assert_eq!(parse("  X  ").unwrap(), Term::leaf("X"));
    }

    #[test]
    fn test_parse_nested() {
        let t = parse("f(a, g(b, c), X)").unwrap();
        assert_eq!(t.to_string(), "f(a,g(b,c),X)");
        assert_eq!(t.size(), 6);
    }

    #[test]
    fn test_parse_whitespace_stripped() {
        let t = parse(" plus ( num1 ,\n neg( X ) ) ").unwrap();
        assert_eq!(t.to_string(), "plus(num1,neg(X))");
    }

    #[test]
    fn test_empty_arglist_is_leaf() {
        assert_eq!(parse("f()").unwrap(), Term::leaf("f"));
    }

    #[test]
    fn test_round_trip() {
        for s in ["a", "f(a)", "f(g(h(a,b)),c)", "mul(plus(num1,num2),X)"] {
            let t = parse(s).unwrap();
            let again = parse(&t.to_string()).unwrap();
            assert_eq!(t, again);
        }
    }

    #[test]
    fn test_malformed_inputs() {
        for bad in ["", "   ", "f(a", "f(a))", "(a)", "f(,a)", "f(a,)", "a,b", ")", "f(a)b"] {
            assert!(parse(bad).is_err(), "expected parse failure for {:?}", bad);
        }
    }
}
