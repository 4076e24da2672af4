//! External completion prover interface
//!
//! Builds the problem payload and runs the prover as a child process. The
//! timeout is handed to the prover command as its first argument and
//! enforced by the prover itself; this side only waits for process exit.

use crate::error::Result;
use crate::flatten::Equation;
use std::io::Write;
use std::process::{Command, Stdio};
use std::time::Duration;

/// The always-false target forcing the prover to surface every derivable
/// fact about the goal labels.
pub const CONJECTURE_LINE: &str = "cnf(goal,conjecture, zero = one).";

/// Configuration for one simplification run
#[derive(Debug, Clone)]
pub struct SimplifyConfig {
    /// Prover command, invoked as `<prover> <timeout-secs> -`
    pub prover: String,
    pub timeout: Duration,
    /// Flatten the goal term into shallow equations before posing it
    pub flatten: bool,
}

impl Default for SimplifyConfig {
    fn default() -> Self {
        SimplifyConfig {
            prover: "./twee.sh".to_string(),
            timeout: Duration::from_secs(1),
            flatten: true,
        }
    }
}

/// Raw prover streams, captured to completion
#[derive(Debug, Clone)]
pub struct ProverOutput {
    pub stdout: String,
    pub stderr: String,
}

/// Assemble the problem payload: the rule text, one comment and one axiom
/// line per goal equation, and the fixed falsity conjecture.
pub fn payload(rules: &str, equations: &[Equation]) -> String {
    let mut text = String::with_capacity(rules.len() + equations.len() * 64 + 64);
    text.push_str(rules);
    text.push('\n');
    for equation in equations {
        text.push_str(&equation.comment_line());
        text.push('\n');
        text.push_str(&equation.axiom_line());
        text.push('\n');
    }
    text.push_str(CONJECTURE_LINE);
    text.push('\n');
    text
}

/// Run the prover over a payload, writing it to stdin and capturing both
/// output streams. No retries, no timeout enforcement on this side.
pub fn run_prover(config: &SimplifyConfig, payload: &str) -> Result<ProverOutput> {
    let mut child = Command::new(&config.prover)
        .arg(config.timeout.as_secs().to_string())
        .arg("-")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()?;

    if let Some(mut stdin) = child.stdin.take() {
        stdin.write_all(payload.as_bytes())?;
        // dropping stdin closes the pipe so the prover sees end of input
    }

    let output = child.wait_with_output()?;
    Ok(ProverOutput {
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flatten::flatten;
    use crate::parser::parse;

    #[test]
    fn test_payload_format() {
        let term = parse("f(g(a),b)").unwrap();
        let equations = flatten(&term);
        let text = payload("cnf(assoc,axiom, f(X,Y) = f(Y,X)).", &equations);
        let expected = "\
cnf(assoc,axiom, f(X,Y) = f(Y,X)).
% goal0 represents f(g(a),b)
cnf(goal,axiom, goal0 = f(goal1,b)).
% goal1 represents g(a)
cnf(goal,axiom, goal1 = g(a)).
cnf(goal,conjecture, zero = one).
";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_payload_ends_with_conjecture() {
        let text = payload("", &[]);
        assert!(text.ends_with("cnf(goal,conjecture, zero = one).\n"));
    }
}
