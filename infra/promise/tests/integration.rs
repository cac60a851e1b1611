use std::sync::{Arc, Barrier};
use std::thread;
use vbridge_domain::coded::{Cause, CodedError};
use vbridge_promise::{ChannelError, ChannelState, Outcome, Promise, ResultChannel};

#[derive(Debug, PartialEq, Eq)]
struct Payload(u64);

#[tokio::test]
async fn resolved_value_is_delivered_to_settlement() {
    let (channel, settlement) = ResultChannel::labeled("payload");

    let worker = tokio::spawn(async move { channel.resolve(Payload(42)) });
    worker.await.expect("worker joined").expect("resolve succeeds");

    match settlement.await {
        Outcome::Resolved(value) => assert_eq!(value, Payload(42)),
        other => panic!("expected resolved outcome, got {other:?}"),
    }
}

#[tokio::test]
async fn second_resolve_fails_and_first_value_stands() {
    let (channel, settlement) = ResultChannel::new();

    channel.resolve(Payload(1)).expect("first resolve");
    let err = channel.resolve(Payload(2)).expect_err("second resolve");
    assert!(matches!(err, ChannelError::DoubleSettlement { .. }));
    assert!(channel.reject("E_X".into(), None, None).is_err());

    assert_eq!(settlement.await.into_result().expect("resolved"), Payload(1));
}

#[tokio::test]
async fn raw_and_structured_reject_are_identical() {
    let (raw, raw_settlement) = ResultChannel::<()>::new();
    let (structured, structured_settlement) = ResultChannel::<()>::new();

    raw.reject("E_X".into(), Some("boom".into()), None).expect("raw reject");
    structured
        .reject_with(CodedError::new("E_X", Some("boom".into()), None))
        .expect("structured reject");

    assert_eq!(raw.state(), structured.state());

    let expected = CodedError::new("E_X", Some("boom".into()), None);
    assert_eq!(raw_settlement.await.into_result().expect_err("rejected"), expected);
    assert_eq!(structured_settlement.await.into_result().expect_err("rejected"), expected);
}

#[tokio::test]
async fn rejection_cause_is_carried_verbatim() {
    let cause: Cause = Arc::new(std::io::Error::other("socket closed"));
    let (channel, settlement) = ResultChannel::<()>::new();

    channel
        .reject("ERR_IO".into(), Some("upload failed".into()), Some(cause.clone()))
        .expect("reject");

    let err = settlement.await.into_result().expect_err("rejected");
    assert_eq!(err.code(), "ERR_IO");
    assert_eq!(err.message(), Some("upload failed"));
    assert!(Arc::ptr_eq(err.cause().expect("cause kept"), &cause));
}

#[tokio::test]
async fn coded_errors_reject_with_their_code() {
    let (channel, settlement) = ResultChannel::<()>::new();
    let (first, _first_settlement) = ResultChannel::<()>::labeled("first");
    first.resolve(()).expect("resolve");
    let violation = first.resolve(()).expect_err("double settlement");

    channel.reject_coded(violation).expect("reject with coded error");

    let err = settlement.await.into_result().expect_err("rejected");
    assert_eq!(err.code(), "ERR_DOUBLE_SETTLEMENT");
    assert!(err.cause().is_some());
}

#[tokio::test]
async fn dropping_pending_channel_abandons_settlement() {
    let (channel, settlement) = ResultChannel::<u8>::labeled("forgotten");
    let clone = channel.clone();
    drop(channel);
    drop(clone);

    assert!(matches!(settlement.await, Outcome::Abandoned));
}

#[test]
fn dropped_settlement_does_not_fail_resolve() {
    let (channel, settlement) = ResultChannel::new();
    drop(settlement);

    channel.resolve(Payload(9)).expect("resolve still wins the transition");
    assert_eq!(channel.state(), ChannelState::Resolved);
}

#[test]
fn try_take_reports_pending_then_outcome() {
    let (channel, mut settlement) = ResultChannel::new();
    assert!(settlement.try_take().is_none());

    channel.resolve(Payload(3)).expect("resolve");
    assert!(matches!(settlement.try_take(), Some(Outcome::Resolved(Payload(3)))));
}

#[test]
fn wait_blocks_until_another_thread_settles() {
    let (channel, settlement) = ResultChannel::<u32>::new();

    let handle = thread::spawn(move || {
        thread::sleep(std::time::Duration::from_millis(10));
        channel.resolve(11)
    });

    assert!(matches!(settlement.wait(), Outcome::Resolved(11)));
    handle.join().expect("thread joined").expect("resolve");
}

#[test]
fn concurrent_settlers_produce_exactly_one_winner() {
    const SETTLERS: usize = 16;

    let (channel, mut settlement) = ResultChannel::<usize>::labeled("race");
    let barrier = Arc::new(Barrier::new(SETTLERS));

    let handles: Vec<_> = (0..SETTLERS)
        .map(|i| {
            let channel = channel.clone();
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                if i % 2 == 0 {
                    channel.resolve(i).is_ok()
                } else {
                    channel.reject("E_RACE".into(), None, None).is_ok()
                }
            })
        })
        .collect();

    let winners = handles
        .into_iter()
        .map(|h| h.join().expect("settler joined"))
        .filter(|won| *won)
        .count();

    assert_eq!(winners, 1, "exactly one settle call may win");
    assert!(channel.state().is_terminal());

    match (channel.state(), settlement.try_take()) {
        (ChannelState::Resolved, Some(Outcome::Resolved(i))) => assert_eq!(i % 2, 0),
        (ChannelState::Rejected(state_err), Some(Outcome::Rejected(err))) => {
            assert_eq!(state_err, err);
            assert_eq!(err.code(), "E_RACE");
        },
        (state, outcome) => panic!("state {state:?} disagrees with outcome {outcome:?}"),
    }
}
