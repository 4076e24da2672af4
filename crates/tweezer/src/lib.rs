//! Tweezer: term simplification by completion
//!
//! This library drives an external completion-based equational prover
//! (twee) over a rule set and a goal term, then resolves the equalities
//! the prover derives into one canonical ground term for the root
//! placeholder `goal0`.
//!
//! Pipeline: parse the term, flatten it into shallow goal equations, pose
//! them to the prover together with an always-false conjecture, extract
//! candidate equality pairs from the prover's evidence block, and greedily
//! resolve them into minimal ground bindings.

pub mod error;
pub mod extract;
pub mod flatten;
pub mod parser;
pub mod prover;
pub mod resolve;
pub mod simplify;
pub mod term;

// Re-export commonly used types
pub use error::{Result, TweezerError};
pub use extract::{from_log, from_prover_output, LOG_FOOTER, LOG_HEADER, PROOF_MARKER};
pub use flatten::{flatten, unflattened, Equation, ROOT_LABEL};
pub use parser::parse;
pub use prover::{payload, run_prover, ProverOutput, SimplifyConfig, CONJECTURE_LINE};
pub use resolve::{resolve, Resolution, RootOutcome};
pub use simplify::{read_required, resolve_log, simplify, Report};
pub use term::{Leaf, LeafKind, Term};
