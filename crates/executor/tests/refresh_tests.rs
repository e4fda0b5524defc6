//! Usage-tracking and age-based refresh tests.

mod common;

use std::time::Duration;

use common::{settings, FakeClock, FakeTransport, Step};
use p4runner_core::RetryPolicy;
use p4runner_executor::{FatalError, P4Client, StatusResult};

fn policy(retries: u32, threshold: u32) -> RetryPolicy {
    RetryPolicy {
        command_retries: retries,
        refresh_threshold: threshold,
        retry_delay: Duration::from_secs(5),
    }
}

#[test]
fn usage_counts_each_successful_command() {
    let (transport, _counters) = FakeTransport::new(Vec::<Step>::new());
    let clock = FakeClock::default();
    let mut client =
        P4Client::connect_with_clock(transport, settings(), policy(2, 1000), clock).unwrap();

    assert_eq!(client.usage(), 0);
    for expected in 1..=3 {
        let _: StatusResult = client.run("info", &[]).unwrap();
        assert_eq!(client.usage(), expected);
    }
}

#[test]
fn usage_resets_after_error_recovery() {
    let (transport, _counters) =
        FakeTransport::new([Step::Ok(vec![]), Step::Dropped, Step::Ok(vec![])]);
    let clock = FakeClock::default();
    let mut client =
        P4Client::connect_with_clock(transport, settings(), policy(2, 1000), clock).unwrap();

    let _: StatusResult = client.run("info", &[]).unwrap();
    assert_eq!(client.usage(), 1);

    // Second command drops once; recovery reinitializes the session, which
    // zeroes the counter before the command's own increment.
    let _: StatusResult = client.run("info", &[]).unwrap();
    assert_eq!(client.usage(), 1);
}

#[test]
fn reaching_the_threshold_triggers_a_refresh() {
    let (transport, counters) = FakeTransport::new(Vec::<Step>::new());
    let clock = FakeClock::default();
    let mut client =
        P4Client::connect_with_clock(transport, settings(), policy(2, 3), clock.clone()).unwrap();

    for _ in 0..2 {
        let _: StatusResult = client.run("info", &[]).unwrap();
    }
    assert_eq!(counters.lock().connects, 1);

    // Third success reaches the threshold: the connection is refreshed and
    // the counter is back to zero before any further command.
    let _: StatusResult = client.run("info", &[]).unwrap();
    assert_eq!(counters.lock().connects, 2);
    assert_eq!(client.usage(), 0);

    // The fourth command runs on the fresh connection.
    let _: StatusResult = client.run("info", &[]).unwrap();
    assert_eq!(client.usage(), 1);
    assert_eq!(counters.lock().connects, 2);
    // A clean refresh needs no retry delays.
    assert!(clock.sleeps.lock().is_empty());
}

#[test]
fn failed_refresh_retries_then_escalates() {
    let (transport, counters) = FakeTransport::new(Vec::<Step>::new());
    let failing = transport.failing_connects_handle();
    let clock = FakeClock::default();
    let mut client =
        P4Client::connect_with_clock(transport, settings(), policy(2, 1), clock.clone()).unwrap();

    // Every reconnect from here on fails.
    *failing.lock() = u32::MAX;

    let err = client.run::<StatusResult>("info", &[]).unwrap_err();
    assert_eq!(err, FatalError::RefreshFailed { retries: 2 });

    // Initial connect plus two failed refresh attempts, with the fixed
    // delay after each failure.
    assert_eq!(counters.lock().connects, 3);
    assert_eq!(
        clock.sleeps.lock().as_slice(),
        &[Duration::from_secs(5), Duration::from_secs(5)]
    );
}

#[test]
fn refresh_recovers_after_one_failed_attempt() {
    let (transport, counters) = FakeTransport::new(Vec::<Step>::new());
    let failing = transport.failing_connects_handle();
    let clock = FakeClock::default();
    let mut client =
        P4Client::connect_with_clock(transport, settings(), policy(3, 1), clock.clone()).unwrap();

    *failing.lock() = 1;

    let _: StatusResult = client.run("info", &[]).unwrap();
    assert_eq!(client.usage(), 0);
    // Initial connect, one failed refresh, one successful refresh.
    assert_eq!(counters.lock().connects, 3);
    assert_eq!(clock.sleeps.lock().len(), 1);
}
