//! Forwarding controller subsystem.
//!
//! # Data Flow
//! ```text
//! seed.rs (generate seed → poll → operator confirm → re-check balance)
//!     → controller.rs (per hop: generate → balance → gas quote
//!                      → policy.rs (safe amount) → transfer → advance)
//!     → ForwardingChain (accounts in creation order + hop outcomes)
//! ```
//!
//! # Design Decisions
//! - Strictly sequential: one RPC call in flight, each hop depends on the last
//! - Delays go through `Clock`, operator input through `OperatorPrompt`
//! - A failed transfer never stops the chain

pub mod clock;
pub mod controller;
pub mod policy;
pub mod prompt;
pub mod seed;

pub use clock::{Clock, TokioClock};
pub use controller::{Forwarder, ForwardingChain, HopOutcome};
pub use policy::{plan_transfer, TransferPlan};
pub use prompt::{LinePrompt, OperatorPrompt, PromptError};
pub use seed::SeedState;
