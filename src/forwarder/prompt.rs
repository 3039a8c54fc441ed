//! Operator yes/no confirmation.
//!
//! Input lines are read on a dedicated OS thread and handed over through a
//! channel. A pending question never ties up a runtime worker, so an
//! interrupt can end the process while the operator is still thinking.

use std::io::BufRead;
use std::thread;

use async_trait::async_trait;
use thiserror::Error;
use tokio::io::{AsyncWrite, AsyncWriteExt};
use tokio::sync::mpsc;

/// Failure to obtain an answer from the operator.
#[derive(Debug, Error)]
pub enum PromptError {
    #[error("operator input closed")]
    Closed,

    #[error("operator I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A line-oriented question/answer channel to the operator.
#[async_trait]
pub trait OperatorPrompt: Send {
    /// Show `question` and return the operator's raw answer line.
    async fn ask(&mut self, question: &str) -> Result<String, PromptError>;
}

/// True when the answer is an affirmative "yes" (case-insensitive, trimmed).
pub fn is_affirmative(answer: &str) -> bool {
    answer.trim().eq_ignore_ascii_case("yes")
}

/// Prompt fed by a reader thread; stdin/stdout in production.
pub struct LinePrompt<W> {
    answers: mpsc::Receiver<std::io::Result<String>>,
    output: W,
}

impl LinePrompt<tokio::io::Stdout> {
    /// Prompt on the process terminal.
    pub fn stdio() -> Self {
        Self::spawn(std::io::BufReader::new(std::io::stdin()), tokio::io::stdout())
    }
}

impl<W> LinePrompt<W>
where
    W: AsyncWrite + Unpin + Send,
{
    /// Start a reader thread over `input`.
    ///
    /// The thread stops at end of input or once the prompt is dropped and
    /// the next line arrives.
    pub fn spawn<R>(input: R, output: W) -> Self
    where
        R: BufRead + Send + 'static,
    {
        let (tx, answers) = mpsc::channel(1);
        thread::spawn(move || {
            for line in input.lines() {
                if tx.blocking_send(line).is_err() {
                    break;
                }
            }
        });
        Self { answers, output }
    }
}

#[async_trait]
impl<W> OperatorPrompt for LinePrompt<W>
where
    W: AsyncWrite + Unpin + Send,
{
    async fn ask(&mut self, question: &str) -> Result<String, PromptError> {
        self.output.write_all(question.as_bytes()).await?;
        self.output.flush().await?;

        match self.answers.recv().await {
            Some(Ok(line)) => Ok(line),
            Some(Err(e)) => Err(PromptError::Io(e)),
            None => Err(PromptError::Closed),
        }
    }
}
