//! Error types for tweezer

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TweezerError {
    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Missing input: {0}")]
    MissingInput(String),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// The prover finished without the marker line that precedes its
    /// evidence block. Both raw streams are kept for diagnosis.
    #[error("prover derivation incomplete: expected marker not found in output\n--- prover stdout: ---\n{stdout}\n--- prover stderr: ---\n{stderr}")]
    DerivationIncomplete { stdout: String, stderr: String },
}

pub type Result<T> = std::result::Result<T, TweezerError>;
