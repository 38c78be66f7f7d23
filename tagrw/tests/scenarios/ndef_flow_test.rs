use crate::common::{fixtures, helpers};
use tagrw::protocol::{
    DataEvent, EngineCommand, EngineEvent, NdefDetectEvent, T2tCommand, T2tEvent, T3tCommand,
    T3tEvent, T4tCommand, T4tEvent,
};
use tagrw::rw::NdefState;
use tagrw::test_support::Harness;
use tagrw::{NdefDetectResult, NdefFlags, Notification, OperationRequest, Protocol, RwEvent, Status};

fn t4t(h: &mut Harness, event: T4tEvent) {
    helpers::engine(h, EngineEvent::T4t(event));
}

fn t3t(h: &mut Harness, event: T3tEvent) {
    helpers::engine(h, EngineEvent::T3t(event));
}

#[test]
fn empty_message_is_read_without_the_engine() {
    let mut h = helpers::activated(fixtures::ntag(false));

    helpers::request(&mut h, OperationRequest::ReadNdef);
    helpers::t2t(&mut h, T2tEvent::NdefDetect(fixtures::detected(0, 64)));
    assert_eq!(
        h.notifier.take(),
        vec![Notification::ReadComplete { status: Status::Ok }]
    );
    assert_eq!(
        h.engine.submitted(),
        vec![EngineCommand::T2t(T2tCommand::DetectNdef)]
    );

    // NDEF state is known now; a second read never reaches the engine
    h.engine.clear();
    helpers::request(&mut h, OperationRequest::ReadNdef);
    assert_eq!(h.engine.call_count(), 0);
    assert_eq!(
        h.notifier.notifications(),
        vec![Notification::ReadComplete { status: Status::Ok }]
    );
    assert_eq!(
        h.ndef.messages(),
        vec![(Status::Ok, Vec::new()), (Status::Ok, Vec::new())]
    );
    assert!(!h.rw.is_busy());
}

#[test]
fn oversized_write_fails_before_the_engine() {
    let mut h = helpers::activated(fixtures::ntag(false));
    helpers::request(&mut h, OperationRequest::DetectNdef);
    helpers::t2t(&mut h, T2tEvent::NdefDetect(fixtures::detected(0, 100)));
    h.forget();

    helpers::request(&mut h, OperationRequest::WriteNdef(vec![0xAB; 150]));

    assert_eq!(h.engine.call_count(), 0);
    assert_eq!(
        h.notifier.notifications(),
        vec![Notification::WriteComplete {
            status: Status::BufferFull
        }]
    );
    assert!(h.rw.session().write_source.is_empty());
    assert!(!h.rw.is_busy());
}

#[test]
fn write_to_read_only_tag_is_refused() {
    let mut h = helpers::activated(fixtures::ntag(false));
    helpers::request(&mut h, OperationRequest::WriteNdef(fixtures::hello_record()));
    helpers::t2t(&mut h, T2tEvent::NdefDetect(fixtures::detected_read_only(18)));

    assert_eq!(
        h.engine.submitted(),
        vec![EngineCommand::T2t(T2tCommand::DetectNdef)]
    );
    assert_eq!(
        h.notifier.notifications(),
        vec![Notification::WriteComplete {
            status: Status::Failed
        }]
    );
}

#[test]
fn invalid_message_is_refused_before_detection() {
    let mut h = helpers::activated(fixtures::ntag(false));
    h.ndef.set_reject_validation(true);

    helpers::request(&mut h, OperationRequest::WriteNdef(vec![0x00]));

    assert_eq!(h.engine.call_count(), 0);
    assert_eq!(h.ndef.validated(), vec![vec![0x00]]);
    assert_eq!(
        h.notifier.notifications(),
        vec![Notification::WriteComplete {
            status: Status::Failed
        }]
    );
}

#[test]
fn read_of_non_ndef_tag_fails_without_a_second_detection() {
    let mut h = helpers::activated(fixtures::ntag(false));
    helpers::request(&mut h, OperationRequest::DetectNdef);
    helpers::t2t(
        &mut h,
        T2tEvent::NdefDetect(NdefDetectEvent::failed(Status::Failed)),
    );
    assert_eq!(h.rw.session().ndef_state, NdefState::False);
    h.forget();

    helpers::request(&mut h, OperationRequest::ReadNdef);
    assert_eq!(h.engine.call_count(), 0);
    assert_eq!(
        h.notifier.notifications(),
        vec![Notification::ReadComplete {
            status: Status::Failed
        }]
    );
    assert_eq!(h.ndef.messages(), vec![(Status::Failed, Vec::new())]);
}

#[test]
fn detection_timeout_reports_nothing_known() {
    let mut h = helpers::activated(fixtures::ntag(false));
    helpers::request(&mut h, OperationRequest::DetectNdef);
    helpers::t2t(
        &mut h,
        T2tEvent::NdefDetect(NdefDetectEvent {
            status: Status::Timeout,
            cur_size: 12,
            max_size: 48,
            flags: NdefFlags::SUPPORTED,
        }),
    );
    assert_eq!(
        h.notifier.notifications(),
        vec![Notification::NdefDetect(NdefDetectResult::unknown(
            Status::Failed,
            Protocol::T2t
        ))]
    );
}

#[test]
fn segmented_read_is_delivered_whole() {
    let mut h = helpers::activated(fixtures::iso_dep(false));
    let message = fixtures::hello_record();
    let (head, tail) = message.split_at(7);

    helpers::request(&mut h, OperationRequest::ReadNdef);
    t4t(&mut h, T4tEvent::NdefDetect(fixtures::detected(message.len(), 255)));
    assert_eq!(
        h.engine.last_submitted(),
        Some(EngineCommand::T4t(T4tCommand::ReadNdef))
    );
    assert_eq!(
        h.rw.session()
            .read_buffer
            .as_ref()
            .map(|buffer| buffer.capacity()),
        Some(message.len())
    );

    t4t(&mut h, T4tEvent::NdefRead(DataEvent::ok(head)));
    t4t(&mut h, T4tEvent::NdefReadComplete(DataEvent::ok(tail)));

    assert_eq!(h.ndef.messages(), vec![(Status::Ok, message)]);
    assert_eq!(
        h.notifier.notifications(),
        vec![Notification::ReadComplete { status: Status::Ok }]
    );
    assert!(h.rw.session().read_buffer.is_none());
}

#[test]
fn failed_read_releases_the_buffer() {
    let mut h = helpers::activated(fixtures::iso_dep(false));
    helpers::request(&mut h, OperationRequest::ReadNdef);
    t4t(&mut h, T4tEvent::NdefDetect(fixtures::detected(32, 255)));
    t4t(&mut h, T4tEvent::NdefRead(DataEvent::ok([0xD1; 16])));

    t4t(&mut h, T4tEvent::NdefReadFail {
        status: Status::RfTransmissionError,
    });

    assert!(h.rw.session().read_buffer.is_none());
    assert_eq!(h.ndef.messages(), vec![(Status::Failed, Vec::new())]);
    assert_eq!(
        h.notifier.notifications(),
        vec![Notification::ReadComplete {
            status: Status::Failed
        }]
    );
}

#[test]
fn deactivation_mid_read_releases_the_buffer() {
    let mut h = helpers::activated(fixtures::iso_dep(false));
    helpers::request(&mut h, OperationRequest::ReadNdef);
    t4t(&mut h, T4tEvent::NdefDetect(fixtures::detected(32, 255)));
    assert!(h.rw.session().read_buffer.is_some());

    h.rw.handle_event(RwEvent::Deactivate);
    assert!(h.rw.session().read_buffer.is_none());
    assert!(!h.rw.is_busy());

    // late segments of the old tag go nowhere
    t4t(&mut h, T4tEvent::NdefReadComplete(DataEvent::ok([0xD1; 32])));
    assert!(h.notifier.is_empty());
    assert!(h.ndef.messages().is_empty());
}

#[test]
fn oversized_segment_fails_the_read_once() {
    helpers::init_logger();
    let mut h = Harness::activated_t3t_ready();
    helpers::request(&mut h, OperationRequest::ReadNdef);
    t3t(&mut h, T3tEvent::NdefDetect(fixtures::detected(4, 64)));
    assert_eq!(
        h.engine.last_submitted(),
        Some(EngineCommand::T3t(T3tCommand::CheckNdef))
    );

    t3t(&mut h, T3tEvent::Check(DataEvent::ok([1, 2, 3, 4, 5, 6])));
    t3t(&mut h, T3tEvent::Check(DataEvent::ok([7])));
    t3t(&mut h, T3tEvent::CheckComplete { status: Status::Ok });

    assert_eq!(h.ndef.messages(), vec![(Status::Failed, Vec::new())]);
    assert_eq!(
        h.notifier.notifications(),
        vec![Notification::ReadComplete {
            status: Status::Failed
        }]
    );
    assert!(!h.rw.is_busy());
}

#[test]
fn completed_write_forces_detection_before_next_read() {
    let mut h = helpers::activated(fixtures::iso_dep(false));
    let message = fixtures::hello_record();
    helpers::request(&mut h, OperationRequest::WriteNdef(message.clone()));
    t4t(&mut h, T4tEvent::NdefDetect(fixtures::detected(0, 255)));
    assert_eq!(
        h.engine.last_submitted(),
        Some(EngineCommand::T4t(T4tCommand::UpdateNdef(message.clone())))
    );
    t4t(&mut h, T4tEvent::NdefUpdateComplete);

    assert_eq!(h.rw.session().ndef_state, NdefState::Unknown);
    assert_eq!(h.rw.session().ndef_cur_size, message.len());
    assert!(h.rw.session().write_source.is_empty());
    h.forget();

    helpers::request(&mut h, OperationRequest::ReadNdef);
    assert_eq!(
        h.engine.submitted(),
        vec![EngineCommand::T4t(T4tCommand::DetectNdef)]
    );
}

#[test]
fn interface_error_during_write_reports_write_complete() {
    let mut h = helpers::activated(fixtures::iso_dep(false));
    helpers::request(&mut h, OperationRequest::WriteNdef(fixtures::hello_record()));
    t4t(&mut h, T4tEvent::NdefDetect(fixtures::detected(0, 255)));

    t4t(&mut h, T4tEvent::InterfaceError {
        status: Status::RfProtocolError,
    });

    assert_eq!(
        h.notifier.notifications(),
        vec![Notification::WriteComplete {
            status: Status::RfProtocolError
        }]
    );
    assert_eq!(h.rw.session().ndef_state, NdefState::Unknown);
    assert!(!h.rw.is_busy());
}
