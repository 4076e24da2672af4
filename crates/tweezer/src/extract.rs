//! Substitution extractor
//!
//! Recovers candidate equality pairs from raw prover output or from a
//! saved substitution log. A pair is kept only when at least one side is
//! a bare goal-label leaf, since only those can ever contribute a binding.

use crate::error::{Result, TweezerError};
use crate::parser::parse;
use crate::term::Term;

/// The line the prover prints once it has derived the posed falsity goal.
/// Everything after it is the evidence block.
pub const PROOF_MARKER: &str = "Goal 1 (goal): zero = one.";

/// Header and footer bounding the substitution block of a saved log
pub const LOG_HEADER: &str = "Substitutions found:";
pub const LOG_FOOTER: &str = "Resolving";

/// Extract candidate pairs from raw prover output.
///
/// The evidence block starts right after the literal marker line; a
/// missing marker means the prover never completed its derivation, which
/// is a hard failure carrying both raw streams.
pub fn from_prover_output(stdout: &str, stderr: &str) -> Result<Vec<(Term, Term)>> {
    match stdout.split_once(PROOF_MARKER) {
        Some((_, block)) => Ok(scan_block(block.lines())),
        None => Err(TweezerError::DerivationIncomplete {
            stdout: stdout.to_string(),
            stderr: stderr.to_string(),
        }),
    }
}

/// Extract candidate pairs from a saved substitution log.
///
/// The block is bounded by a `Substitutions found:` header line and a line
/// beginning with `Resolving`. A missing header means the whole file up to
/// the footer is scanned; a missing footer runs to end of file.
pub fn from_log(text: &str) -> Vec<(Term, Term)> {
    let lines: Vec<&str> = text.lines().collect();
    let mut start = 0;
    let mut end = lines.len();
    for (i, line) in lines.iter().enumerate() {
        if line.starts_with(LOG_HEADER) {
            start = i + 1;
        }
        if line.starts_with(LOG_FOOTER) {
            end = i;
            break;
        }
    }
    scan_block(lines[start..end].iter().copied())
}

fn scan_block<'a>(lines: impl Iterator<Item = &'a str>) -> Vec<(Term, Term)> {
    let mut pairs = Vec::new();
    for line in lines {
        let line = strip_ordinal(line.trim());
        if line.is_empty() {
            continue;
        }
        let (lhs_text, rhs_text) = match line
            .split_once(" <-> ")
            .or_else(|| line.split_once(" -> "))
        {
            Some(split) => split,
            None => continue,
        };
        let lhs_text = lhs_text.trim();
        let rhs_text = rhs_text.trim();
        if lhs_text == rhs_text {
            continue;
        }
        // unparseable sides are prover noise, not candidate equalities
        let (lhs, rhs) = match (parse(lhs_text), parse(rhs_text)) {
            (Ok(lhs), Ok(rhs)) => (lhs, rhs),
            _ => continue,
        };
        if lhs.as_goal().is_some() || rhs.as_goal().is_some() {
            pairs.push((lhs, rhs));
        }
    }
    pairs
}

/// Strip a leading `<digits>. ` ordinal prefix, if present
fn strip_ordinal(line: &str) -> &str {
    let digits = line.len() - line.trim_start_matches(|c: char| c.is_ascii_digit()).len();
    if digits > 0 {
        if let Some(rest) = line[digits..].strip_prefix('.') {
            let trimmed = rest.trim_start();
            if trimmed.len() < rest.len() {
                return trimmed;
            }
        }
    }
    line
}
