//! Request context: cancellation and deadlines for outgoing calls.

use std::future::Future;
use std::time::Duration;
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;
use tracing::warn;

use crate::errors::{CancelledError, LinkedInResult};

/// Controls cancellation and deadline of the requests a session sends.
///
/// Clones share the same cancellation token, so cancelling any clone
/// cancels every request running under it.
#[derive(Clone, Debug, Default)]
pub struct RequestContext {
    cancellation: CancellationToken,
    deadline: Option<Instant>,
}

impl RequestContext {
    /// A context that is never cancelled and has no deadline.
    pub fn background() -> Self {
        Self::default()
    }

    /// A context driven by an existing cancellation token.
    pub fn with_cancellation(token: CancellationToken) -> Self {
        Self {
            cancellation: token,
            deadline: None,
        }
    }

    /// Returns a copy that expires `timeout` from now.
    pub fn with_timeout(self, timeout: Duration) -> Self {
        self.with_deadline(Instant::now() + timeout)
    }

    /// Returns a copy that expires at `deadline`; an earlier existing deadline wins.
    pub fn with_deadline(mut self, deadline: Instant) -> Self {
        self.deadline = Some(match self.deadline {
            Some(existing) if existing < deadline => existing,
            _ => deadline,
        });
        self
    }

    /// Cancel every request running under this context.
    pub fn cancel(&self) {
        self.cancellation.cancel();
    }

    /// True once `cancel` was called on this context or its token.
    pub fn is_cancelled(&self) -> bool {
        self.cancellation.is_cancelled()
    }

    /// The deadline, if one was set.
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// The underlying cancellation token.
    pub fn cancellation_token(&self) -> &CancellationToken {
        &self.cancellation
    }

    /// Check the context before starting work.
    pub fn check(&self) -> Result<(), CancelledError> {
        if self.is_cancelled() {
            return Err(CancelledError::Cancelled);
        }
        match self.deadline {
            Some(deadline) if deadline <= Instant::now() => Err(CancelledError::DeadlineExceeded),
            _ => Ok(()),
        }
    }

    /// Run `future` to completion unless the context is cancelled or expires first.
    pub async fn run<T, F>(&self, future: F) -> LinkedInResult<T>
    where
        F: Future<Output = LinkedInResult<T>>,
    {
        self.check()?;

        let deadline = async {
            match self.deadline {
                Some(deadline) => tokio::time::sleep_until(deadline).await,
                None => std::future::pending::<()>().await,
            }
        };

        tokio::select! {
            result = future => result,
            _ = self.cancellation.cancelled() => {
                warn!("request cancelled");
                Err(CancelledError::Cancelled.into())
            }
            _ = deadline => {
                warn!("request deadline exceeded");
                Err(CancelledError::DeadlineExceeded.into())
            }
        }
    }
}
