//! End-to-end simplification pipeline
//!
//! Parse the goal term, encode it, run the prover, extract candidate
//! pairs, and resolve them. The saved-log path skips the prover entirely.

use crate::error::{Result, TweezerError};
use crate::extract;
use crate::flatten::{flatten, unflattened, Equation};
use crate::parser::parse;
use crate::prover::{payload, run_prover, SimplifyConfig};
use crate::resolve::{resolve, Resolution};
use crate::term::Term;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;

/// Everything one run produced: the generated equations, the extracted
/// candidate pairs, and the resolution outcome.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    pub equations: Vec<Equation>,
    pub pairs: Vec<(Term, Term)>,
    pub resolution: Resolution,
}

/// Simplify a term against a rule set by running the external prover.
pub fn simplify(rules: &str, term_text: &str, config: &SimplifyConfig) -> Result<Report> {
    let term = parse(term_text)?;
    let equations = if config.flatten {
        flatten(&term)
    } else {
        unflattened(&term)
    };
    let problem = payload(rules, &equations);
    let output = run_prover(config, &problem)?;
    let pairs = extract::from_prover_output(&output.stdout, &output.stderr)?;
    let resolution = resolve(&pairs);
    Ok(Report {
        equations,
        pairs,
        resolution,
    })
}

/// Resolve a saved substitution log without touching the prover.
pub fn resolve_log(text: &str) -> Report {
    let pairs = extract::from_log(text);
    let resolution = resolve(&pairs);
    Report {
        equations: Vec::new(),
        pairs,
        resolution,
    }
}

/// Read a required input file. An absent or empty file is `MissingInput`,
/// any other IO failure passes through as `Io`.
pub fn read_required(path: &str) -> Result<String> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return Err(TweezerError::MissingInput(format!(
                "file not found: {}",
                path
            )))
        }
        Err(e) => return Err(e.into()),
    };
    if content.trim().is_empty() {
        return Err(TweezerError::MissingInput(format!("file is empty: {}", path)));
    }
    Ok(content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolve::RootOutcome;

    #[test]
    fn test_resolve_log_end_to_end() {
        let log = "\
Substitutions found:
  goal0 -> f(goal1,num2)
  goal1 -> num3
Resolving
";
        let report = resolve_log(log);
        assert_eq!(report.pairs.len(), 2);
        assert_eq!(
            report.resolution.root,
            RootOutcome::Resolved(parse("f(num3,num2)").unwrap())
        );
    }

    #[test]
    fn test_read_required_missing() {
        let err = read_required("/nonexistent/tweezer-input.p").unwrap_err();
        assert!(matches!(err, TweezerError::MissingInput(_)));
    }

    #[test]
    fn test_read_required_empty() {
        let path = std::env::temp_dir().join(format!("tweezer-empty-{}", std::process::id()));
        fs::write(&path, "  \n").unwrap();
        let err = read_required(path.to_str().unwrap()).unwrap_err();
        fs::remove_file(&path).ok();
        assert!(matches!(err, TweezerError::MissingInput(_)));
    }
}
