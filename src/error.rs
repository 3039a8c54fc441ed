//! Top-level run errors.
//!
//! Only transfer submission failures are absorbed inside the forwarding loop.
//! Everything here ends the run with a non-zero exit code.

use thiserror::Error;

use crate::blockchain::LedgerError;
use crate::config::ConfigError;
use crate::forwarder::prompt::PromptError;

#[derive(Debug, Error)]
pub enum RunError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Ledger(#[from] LedgerError),

    #[error("Operator prompt failed: {0}")]
    Prompt(#[from] PromptError),

    #[error("Seed account not funded after {0} confirmation attempts")]
    SeedNotFunded(u32),

    #[error("Session log error: {0}")]
    Log(#[source] std::io::Error),
}

impl RunError {
    /// The error followed by each `source()` in its chain, outermost first.
    pub fn chain(&self) -> Vec<String> {
        let mut out = vec![self.to_string()];
        let mut source = std::error::Error::source(self);
        while let Some(err) = source {
            out.push(err.to_string());
            source = err.source();
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chain_includes_sources() {
        let err = RunError::Log(std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"));
        let chain = err.chain();
        assert_eq!(chain.len(), 2);
        assert_eq!(chain[1], "denied");
    }

    #[test]
    fn test_ledger_errors_are_transparent() {
        let err = RunError::from(LedgerError::Query("down".to_string()));
        assert_eq!(err.to_string(), "RPC error: down");
    }
}
