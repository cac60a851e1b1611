use std::borrow::Cow;
use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};
use tokio::sync::oneshot;
use tokio::sync::oneshot::error::TryRecvError;
use tracing::debug;
use vbridge_domain::coded::CodedError;

/// Code reported when a channel is dropped before anyone settled it.
pub const ABANDONED_CODE: &str = "ERR_PROMISE_ABANDONED";

/// Final outcome delivered to the caller of an asynchronous operation.
#[derive(Debug)]
pub enum Outcome<T> {
    Resolved(T),
    Rejected(CodedError),
    /// Every handle of the channel was dropped while it was still pending.
    Abandoned,
}

impl<T> Outcome<T> {
    #[must_use]
    pub const fn is_resolved(&self) -> bool {
        matches!(self, Self::Resolved(_))
    }

    /// Flattens the outcome; an abandoned channel becomes an [`ABANDONED_CODE`] error.
    ///
    /// # Errors
    /// Returns the rejection, or a synthesized error for an abandoned channel.
    pub fn into_result(self) -> Result<T, CodedError> {
        match self {
            Self::Resolved(value) => Ok(value),
            Self::Rejected(err) => Err(err),
            Self::Abandoned => Err(CodedError::new(
                ABANDONED_CODE,
                Some("operation finished without settling its result".into()),
                None,
            )),
        }
    }
}

/// Caller side of a [`ResultChannel`](crate::ResultChannel): receives the outcome exactly once.
///
/// Await it from async code, or use [`Settlement::try_take`] / [`Settlement::wait`] from a
/// plain host thread.
pub struct Settlement<T> {
    receiver: oneshot::Receiver<Outcome<T>>,
    label: Cow<'static, str>,
}

impl<T> Settlement<T> {
    pub(crate) const fn new(receiver: oneshot::Receiver<Outcome<T>>, label: Cow<'static, str>) -> Self {
        Self { receiver, label }
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Takes the outcome if the channel has settled (or was abandoned), without waiting.
    pub fn try_take(&mut self) -> Option<Outcome<T>> {
        match self.receiver.try_recv() {
            Ok(outcome) => Some(outcome),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Closed) => {
                debug!(channel = %self.label, "Settlement observed an abandoned channel");
                Some(Outcome::Abandoned)
            },
        }
    }

    /// Blocks the current thread until the outcome arrives.
    ///
    /// # Panics
    /// Panics when called from within an asynchronous runtime; `.await` the settlement there.
    #[must_use]
    pub fn wait(self) -> Outcome<T> {
        self.receiver.blocking_recv().unwrap_or(Outcome::Abandoned)
    }
}

impl<T> Future for Settlement<T> {
    type Output = Outcome<T>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.get_mut();
        Pin::new(&mut this.receiver).poll(cx).map(|received| {
            received.unwrap_or_else(|_| {
                debug!(channel = %this.label, "Settlement observed an abandoned channel");
                Outcome::Abandoned
            })
        })
    }
}

impl<T> fmt::Debug for Settlement<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Settlement").field("label", &self.label).finish_non_exhaustive()
    }
}
