use crate::common::{fixtures, helpers};
use std::time::Duration;
use tagrw::protocol::{DataEvent, EngineCommand, T2tCommand, T2tEvent};
use tagrw::{Notification, OperationRequest, RwConfig, RwEvent, SelRes, Status, T2tRequest};
use tagrw::{ActivationParams, Protocol, TechParams};

fn mifare_classic() -> ActivationParams {
    ActivationParams {
        protocol: Protocol::T2t,
        tech: TechParams::NfcA {
            sel_res: SelRes::new(0x08),
            nfcid1: fixtures::ntag_uid(),
            t1t_hr: [0; 2],
        },
        not_exclusive_rf: true,
    }
}

#[test]
fn timer_runs_only_between_commands() {
    let config = RwConfig::default().with_presence_check_interval(Duration::from_millis(250));
    let mut h = helpers::activated_with(config, fixtures::ntag(true));
    assert!(h.timer.is_running());
    assert_eq!(h.timer.interval(), Some(Duration::from_millis(250)));

    helpers::request(&mut h, OperationRequest::T2t(T2tRequest::Read { block: 0 }));
    assert!(!h.timer.is_running());

    helpers::t2t(&mut h, T2tEvent::ReadComplete(DataEvent::ok([0x04; 16])));
    assert!(h.timer.is_running());
}

#[test]
fn exclusive_rf_never_starts_the_timer() {
    let mut h = helpers::activated(fixtures::ntag(false));
    assert_eq!(h.timer.starts(), 0);

    helpers::request(&mut h, OperationRequest::DetectNdef);
    helpers::t2t(&mut h, T2tEvent::NdefDetect(fixtures::detected(0, 48)));
    assert_eq!(h.timer.starts(), 0);
}

#[test]
fn disabled_auto_check_never_starts_the_timer() {
    let config = RwConfig::default().with_auto_presence_check(false);
    let h = helpers::activated_with(config, fixtures::ntag(true));
    assert!(!h.timer.is_running());
    assert_eq!(h.timer.starts(), 0);
}

#[test]
fn successful_auto_check_is_silent() {
    let mut h = helpers::activated(fixtures::ntag(true));
    helpers::tick(&mut h);
    assert_eq!(
        h.engine.last_submitted(),
        Some(EngineCommand::T2t(T2tCommand::PresenceCheck))
    );

    helpers::t2t(&mut h, T2tEvent::PresenceCheck { status: Status::Ok });
    assert!(h.notifier.is_empty());
    assert!(!h.rw.is_busy());
    assert!(!h.rw.session().auto_presence_check_busy);
    assert!(h.timer.is_running());
}

#[test]
fn failed_auto_check_takes_the_link_down() {
    let mut h = helpers::activated(fixtures::ntag(true));
    helpers::tick(&mut h);

    helpers::t2t(&mut h, T2tEvent::PresenceCheck {
        status: Status::Timeout,
    });
    assert!(h.notifier.is_empty());
    assert_eq!(h.rf.deactivations(), 1);
    assert!(!h.timer.is_running());

    h.rw.handle_event(RwEvent::Deactivate);
    assert!(!h.rw.is_activated());
}

#[test]
fn explicit_check_is_answered() {
    let mut h = helpers::activated(fixtures::ntag(true));
    helpers::request(&mut h, OperationRequest::PresenceCheck);
    helpers::t2t(&mut h, T2tEvent::PresenceCheck { status: Status::Ok });
    assert_eq!(
        h.notifier.notifications(),
        vec![Notification::PresenceCheck { status: Status::Ok }]
    );
    assert_eq!(h.rf.deactivations(), 0);
}

#[test]
fn failed_explicit_check_deactivates_outside_exclusive_rf() {
    let mut shared = helpers::activated(fixtures::ntag(true));
    helpers::request(&mut shared, OperationRequest::PresenceCheck);
    helpers::t2t(&mut shared, T2tEvent::PresenceCheck {
        status: Status::Failed,
    });
    assert_eq!(
        shared.notifier.notifications(),
        vec![Notification::PresenceCheck {
            status: Status::Failed
        }]
    );
    assert_eq!(shared.rf.deactivations(), 1);

    let mut exclusive = helpers::activated(fixtures::ntag(false));
    helpers::request(&mut exclusive, OperationRequest::PresenceCheck);
    helpers::t2t(&mut exclusive, T2tEvent::PresenceCheck {
        status: Status::Failed,
    });
    assert_eq!(exclusive.notifier.len(), 1);
    assert_eq!(exclusive.rf.deactivations(), 0);
}

#[test]
fn non_forum_type2_uses_the_rf_probe() {
    let mut h = helpers::activated(mifare_classic());
    helpers::request(&mut h, OperationRequest::PresenceCheck);
    assert_eq!(h.rf.presence_checks(), 1);
    assert_eq!(h.engine.call_count(), 0);

    h.rw.handle_event(RwEvent::GenericPresenceCheck(Status::Ok));
    assert_eq!(
        h.notifier.notifications(),
        vec![Notification::PresenceCheck { status: Status::Ok }]
    );
    assert!(!h.rw.is_busy());
}

#[test]
fn rf_probe_that_cannot_start_fails_the_check() {
    let mut h = helpers::activated(mifare_classic());
    h.rf.set_fail_presence_check(true);
    helpers::request(&mut h, OperationRequest::PresenceCheck);
    assert_eq!(
        h.notifier.notifications(),
        vec![Notification::PresenceCheck {
            status: Status::Failed
        }]
    );
    assert_eq!(h.rf.deactivations(), 1);
}

#[test]
fn tick_without_tag_does_nothing() {
    helpers::init_logger();
    let mut h = tagrw::test_support::Harness::new();
    h.rw.handle_event(RwEvent::PresenceTick);
    assert!(!h.rw.is_busy());
    assert_eq!(h.engine.call_count(), 0);
    assert_eq!(h.rf.presence_checks(), 0);
}
