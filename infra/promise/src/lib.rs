//! # Promise
//!
//! A single-fire asynchronous result channel for operations whose outcome is not available
//! synchronously.
//!
//! ## Overview
//!
//! [`ResultChannel::new`] returns two halves:
//!
//! * the [`ResultChannel`], handed to the module that performs the work. It implements
//!   [`Promise`] (`resolve` / `reject` / `reject_with`) and can be cloned and moved to whichever
//!   thread finishes the operation;
//! * the [`Settlement`], kept by the caller. It is a future yielding the [`Outcome`].
//!
//! ## Guarantees
//!
//! * **At most once**: the first settle call wins through an atomic compare-and-swap;
//!   every later call returns [`ChannelError::DoubleSettlement`].
//! * **Verbatim errors**: rejections travel as a `CodedError` and are never interpreted here.
//! * **No silent loss**: dropping every channel handle while pending logs a warning and
//!   delivers [`Outcome::Abandoned`].
//!
//! # Example
//!
//! ```rust
//! use vbridge_promise::{Outcome, Promise, ResultChannel};
//!
//! #[tokio::main]
//! async fn main() {
//!     let (channel, settlement) = ResultChannel::<String>::labeled("fetch-profile");
//!
//!     std::thread::spawn(move || {
//!         channel.reject("ERR_OFFLINE".into(), Some("network unavailable".into()), None)
//!     });
//!
//!     match settlement.await {
//!         Outcome::Rejected(err) => assert_eq!(err.code(), "ERR_OFFLINE"),
//!         other => panic!("unexpected outcome: {other:?}"),
//!     }
//! }
//! ```

mod channel;
mod error;
mod settlement;

pub use channel::{ChannelState, Promise, ResultChannel};
pub use error::{ChannelError, ChannelErrorExt};
pub use settlement::{ABANDONED_CODE, Outcome, Settlement};
