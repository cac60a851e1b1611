use crate::error::ChannelError;
use crate::settlement::{Outcome, Settlement};
use parking_lot::Mutex;
use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicU8, Ordering};
use tokio::sync::oneshot;
use tracing::{error, trace, warn};
use vbridge_domain::coded::{Cause, Coded, CodedError};

const PENDING: u8 = 0;
const SETTLING: u8 = 1;
const RESOLVED: u8 = 2;
const REJECTED: u8 = 3;

const ANONYMOUS: &str = "anonymous";

/// Completion side of an asynchronous operation.
///
/// Module code settles the operation through this trait so it can be written against
/// `&dyn Promise<T>` and tested with any implementation.
pub trait Promise<T>: Send + Sync {
    /// Completes the operation with `value`.
    ///
    /// # Errors
    /// Returns [`ChannelError::DoubleSettlement`] if the operation was already settled.
    fn resolve(&self, value: T) -> Result<(), ChannelError>;

    /// Fails the operation with a machine-readable `code`, an optional human `message` and an
    /// optional chained `cause`.
    ///
    /// # Errors
    /// Returns [`ChannelError::DoubleSettlement`] if the operation was already settled.
    fn reject(
        &self,
        code: Cow<'static, str>,
        message: Option<Cow<'static, str>>,
        cause: Option<Cause>,
    ) -> Result<(), ChannelError>;

    /// Fails the operation with a pre-built [`CodedError`].
    ///
    /// # Errors
    /// Returns [`ChannelError::DoubleSettlement`] if the operation was already settled.
    fn reject_with(&self, error: CodedError) -> Result<(), ChannelError> {
        let (code, message, cause) = error.into_parts();
        self.reject(code, message, cause)
    }

    /// Fails the operation with any [`Coded`] error, keeping the error as the cause.
    ///
    /// # Errors
    /// Returns [`ChannelError::DoubleSettlement`] if the operation was already settled.
    fn reject_coded<E>(&self, error: E) -> Result<(), ChannelError>
    where
        E: Coded + Send + Sync + 'static,
        Self: Sized,
    {
        self.reject_with(CodedError::from_coded(error))
    }
}

/// Observable state of a [`ResultChannel`].
///
/// A settle call that has won the race but not yet delivered its outcome still reports
/// `Pending`; competing settle calls already fail at that point.
#[derive(Debug, Clone, PartialEq)]
pub enum ChannelState {
    Pending,
    Resolved,
    Rejected(CodedError),
}

impl ChannelState {
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Resolved | Self::Rejected(_))
    }
}

struct Shared<T> {
    state: AtomicU8,
    label: Cow<'static, str>,
    sender: Mutex<Option<oneshot::Sender<Outcome<T>>>>,
    rejection: Mutex<Option<CodedError>>,
}

impl<T> Drop for Shared<T> {
    fn drop(&mut self) {
        if self.state.load(Ordering::Acquire) == PENDING {
            warn!(channel = %self.label, "Result channel dropped without being settled");
        }
    }
}

/// A single-fire completion object: `Pending` until the first `resolve`/`reject`, terminal after.
///
/// The Pending → terminal transition is a compare-and-swap, so clones of the channel may be
/// settled from any thread and exactly one call wins. Every later call fails with
/// [`ChannelError::DoubleSettlement`] and leaves the first outcome untouched.
///
/// # Example
/// ```rust
/// use vbridge_promise::{Outcome, Promise, ResultChannel};
///
/// # fn main() -> Result<(), vbridge_promise::ChannelError> {
/// let (channel, mut settlement) = ResultChannel::<u32>::new();
/// channel.resolve(7)?;
/// assert!(channel.resolve(8).is_err());
/// assert!(matches!(settlement.try_take(), Some(Outcome::Resolved(7))));
/// # Ok(())
/// # }
/// ```
pub struct ResultChannel<T> {
    shared: Arc<Shared<T>>,
}

impl<T: Send + 'static> ResultChannel<T> {
    /// Creates a pending channel and the [`Settlement`] that will receive its outcome.
    #[must_use]
    pub fn new() -> (Self, Settlement<T>) {
        Self::labeled(ANONYMOUS)
    }

    /// Creates a pending channel whose `label` identifies it in logs and errors.
    #[must_use]
    pub fn labeled(label: impl Into<Cow<'static, str>>) -> (Self, Settlement<T>) {
        let label = label.into();
        let (tx, rx) = oneshot::channel();
        trace!(channel = %label, "Result channel created");

        let shared = Arc::new(Shared {
            state: AtomicU8::new(PENDING),
            label: label.clone(),
            sender: Mutex::new(Some(tx)),
            rejection: Mutex::new(None),
        });

        (Self { shared }, Settlement::new(rx, label))
    }
}

impl<T> ResultChannel<T> {
    #[must_use]
    pub fn label(&self) -> &str {
        &self.shared.label
    }

    #[must_use]
    pub fn state(&self) -> ChannelState {
        match self.shared.state.load(Ordering::Acquire) {
            RESOLVED => ChannelState::Resolved,
            REJECTED => self
                .shared
                .rejection
                .lock()
                .clone()
                .map_or(ChannelState::Pending, ChannelState::Rejected),
            _ => ChannelState::Pending,
        }
    }

    /// Whether the channel reached a terminal state.
    #[must_use]
    pub fn is_settled(&self) -> bool {
        matches!(self.shared.state.load(Ordering::Acquire), RESOLVED | REJECTED)
    }

    fn claim(&self, attempt: &'static str) -> Result<(), ChannelError> {
        match self.shared.state.compare_exchange(
            PENDING,
            SETTLING,
            Ordering::AcqRel,
            Ordering::Acquire,
        ) {
            Ok(_) => Ok(()),
            Err(current) => {
                let previous = match current {
                    RESOLVED => "resolved",
                    REJECTED => "rejected",
                    _ => "settling",
                };
                error!(
                    channel = %self.shared.label,
                    attempt,
                    previous,
                    "Result channel settled more than once"
                );
                Err(ChannelError::DoubleSettlement {
                    message: format!(
                        "cannot {attempt} channel '{}': already {previous}",
                        self.shared.label
                    )
                    .into(),
                    context: None,
                })
            },
        }
    }

    fn deliver(&self, outcome: Outcome<T>, terminal: u8) {
        if let Outcome::Rejected(err) = &outcome {
            *self.shared.rejection.lock() = Some(err.clone());
        }
        let sender = self.shared.sender.lock().take();
        self.shared.state.store(terminal, Ordering::Release);

        // Only the winning claim reaches this point, so the sender is always present.
        if let Some(tx) = sender {
            if tx.send(outcome).is_err() {
                trace!(channel = %self.shared.label, "Settlement receiver already dropped");
            } else {
                trace!(channel = %self.shared.label, "Result channel settled");
            }
        }
    }
}

impl<T: Send> Promise<T> for ResultChannel<T> {
    fn resolve(&self, value: T) -> Result<(), ChannelError> {
        self.claim("resolve")?;
        self.deliver(Outcome::Resolved(value), RESOLVED);
        Ok(())
    }

    fn reject(
        &self,
        code: Cow<'static, str>,
        message: Option<Cow<'static, str>>,
        cause: Option<Cause>,
    ) -> Result<(), ChannelError> {
        self.claim("reject")?;
        self.deliver(Outcome::Rejected(CodedError::new(code, message, cause)), REJECTED);
        Ok(())
    }
}

impl<T> Clone for ResultChannel<T> {
    fn clone(&self) -> Self {
        Self { shared: Arc::clone(&self.shared) }
    }
}

impl<T> fmt::Debug for ResultChannel<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResultChannel")
            .field("label", &self.shared.label)
            .field("state", &self.state())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_channel_is_pending() {
        let (channel, _settlement) = ResultChannel::<()>::labeled("pending");
        assert_eq!(channel.state(), ChannelState::Pending);
        assert!(!channel.is_settled());
        assert_eq!(channel.label(), "pending");
    }

    #[test]
    fn resolve_is_terminal() {
        let (channel, _settlement) = ResultChannel::new();
        channel.resolve(1_u8).expect("first resolve wins");
        assert_eq!(channel.state(), ChannelState::Resolved);
        assert!(channel.state().is_terminal());

        let err = channel.resolve(2).expect_err("second resolve is a contract violation");
        assert!(matches!(err, ChannelError::DoubleSettlement { .. }));
    }

    #[test]
    fn reject_after_resolve_keeps_resolved_state() {
        let (channel, _settlement) = ResultChannel::new();
        channel.resolve("ok").expect("resolve");
        assert!(channel.reject("E_LATE".into(), None, None).is_err());
        assert_eq!(channel.state(), ChannelState::Resolved);
    }

    #[test]
    fn reject_records_the_triple() {
        let (channel, _settlement) = ResultChannel::<()>::new();
        channel.reject("E_X".into(), Some("boom".into()), None).expect("reject");
        assert_eq!(
            channel.state(),
            ChannelState::Rejected(CodedError::new("E_X", Some("boom".into()), None))
        );
    }

    #[test]
    fn double_settlement_message_names_channel_and_state() {
        let (channel, _settlement) = ResultChannel::<()>::labeled("upload");
        channel.reject("E".into(), None, None).expect("reject");
        let err = channel.resolve(()).expect_err("already rejected");
        assert_eq!(
            err.to_string(),
            "Result channel already settled: cannot resolve channel 'upload': already rejected"
        );
    }

    #[test]
    fn in_flight_settlement_reads_as_pending_and_blocks_others() {
        let (channel, mut settlement) = ResultChannel::<u8>::labeled("in-flight");
        channel.claim("resolve").expect("first claim wins");

        assert_eq!(channel.state(), ChannelState::Pending);
        assert!(!channel.is_settled());
        let err = channel.reject("E_LATE".into(), None, None).expect_err("claim already taken");
        assert!(err.to_string().contains("already settling"));

        channel.deliver(Outcome::Resolved(4), RESOLVED);
        assert_eq!(channel.state(), ChannelState::Resolved);
        assert!(channel.is_settled());
        assert!(matches!(settlement.try_take(), Some(Outcome::Resolved(4))));
    }

    #[test]
    fn clones_share_one_transition() {
        let (channel, _settlement) = ResultChannel::new();
        let other = channel.clone();
        other.resolve(5_i32).expect("clone settles");
        assert!(channel.is_settled());
        assert!(channel.resolve(6).is_err());
    }
}
