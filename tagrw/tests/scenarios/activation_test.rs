use crate::common::{fixtures, helpers};
use tagrw::protocol::{
    DataEvent, EngineCommand, EngineEvent, T1tCommand, T1tEvent, T2tEvent, T3tCommand, T3tEvent,
};
use tagrw::rw::NdefState;
use tagrw::test_support::Harness;
use tagrw::{
    Admission, Notification, OperationRequest, RawModeEvent, RwEvent, SelRes, Status, SystemCode,
    TagParams,
};
use tagrw::{ActivationParams, Protocol, TechParams};

fn fresh() -> Harness {
    helpers::init_logger();
    Harness::new()
}

#[test]
fn type2_is_reported_with_its_uid() {
    let mut h = fresh();
    h.rw.handle_event(RwEvent::Activate(fixtures::ntag(true)));
    assert_eq!(
        h.notifier.notifications(),
        vec![Notification::Activated {
            status: Status::Ok,
            params: TagParams::T2t {
                uid: fixtures::ntag_uid()
            }
        }]
    );
    assert_eq!(h.engine.activation_count(), 1);
    assert!(h.rw.is_activated());
    assert!(!h.rw.is_busy());
}

#[test]
fn type1_report_waits_for_rid() {
    let mut h = fresh();
    h.rw.handle_event(RwEvent::Activate(fixtures::topaz(false)));
    assert_eq!(
        h.engine.submitted(),
        vec![EngineCommand::T1t(T1tCommand::Rid)]
    );
    assert!(h.notifier.is_empty());
    assert!(h.rw.session().activation_ntf_pending);

    // the application cannot get in before the activation step is done
    assert_eq!(
        helpers::request(&mut h, OperationRequest::DetectNdef),
        Admission::Rejected
    );
    h.notifier.take();

    let rid = hex::decode("124c01020304").unwrap();
    helpers::engine(&mut h, EngineEvent::T1t(T1tEvent::Rid(DataEvent::ok(rid))));
    assert_eq!(
        h.notifier.notifications(),
        vec![Notification::Activated {
            status: Status::Ok,
            params: TagParams::T1t {
                hr: [0x12, 0x4C],
                uid: vec![0x01, 0x02, 0x03, 0x04],
            }
        }]
    );
    assert!(!h.rw.is_busy());
    assert!(!h.rw.session().activation_ntf_pending);
}

#[test]
fn failed_rid_reports_activation_parameters() {
    let mut h = fresh();
    h.rw.handle_event(RwEvent::Activate(fixtures::topaz(false)));
    helpers::engine(
        &mut h,
        EngineEvent::T1t(T1tEvent::Rid(DataEvent::status_only(Status::Timeout))),
    );
    assert_eq!(
        h.notifier.notifications(),
        vec![Notification::Activated {
            status: Status::Ok,
            params: TagParams::T1t {
                hr: [0x12, 0x4C],
                uid: hex::decode("8a7b6c5d").unwrap(),
            }
        }]
    );
}

#[test]
fn type3_report_carries_system_codes() {
    let mut h = fresh();
    h.rw.handle_event(RwEvent::Activate(fixtures::felica(true)));
    assert_eq!(
        h.engine.submitted(),
        vec![EngineCommand::T3t(T3tCommand::GetSystemCodes)]
    );
    assert!(!h.timer.is_running());

    helpers::engine(
        &mut h,
        EngineEvent::T3t(T3tEvent::SystemCodes {
            status: Status::Ok,
            codes: vec![SystemCode::new(0x12FC), SystemCode::new(0x88B4)],
        }),
    );
    assert_eq!(
        h.notifier.notifications(),
        vec![Notification::Activated {
            status: Status::Ok,
            params: TagParams::T3t {
                system_codes: vec![SystemCode::new(0x12FC), SystemCode::new(0x88B4)]
            }
        }]
    );
    assert!(h.timer.is_running());
}

#[test]
fn engine_that_refuses_the_tag_gets_no_report() {
    let mut h = fresh();
    h.engine.set_fail_init(true);
    h.rw.handle_event(RwEvent::Activate(fixtures::ntag(false)));
    assert!(h.notifier.is_empty());
    assert_eq!(h.engine.call_count(), 0);
}

#[test]
fn reactivation_starts_from_a_clean_session() {
    let mut h = helpers::activated(fixtures::ntag(false));
    helpers::request(&mut h, OperationRequest::DetectNdef);
    helpers::t2t(&mut h, T2tEvent::NdefDetect(fixtures::detected(20, 48)));
    assert_eq!(h.rw.session().ndef_state, NdefState::True);

    h.rw.handle_event(RwEvent::Deactivate);
    h.rw.handle_event(RwEvent::Activate(fixtures::iso_dep(false)));

    let session = h.rw.session();
    assert_eq!(session.ndef_state, NdefState::Unknown);
    assert_eq!(session.ndef_cur_size, 0);
    assert_eq!(session.ndef_max_size, 0);
    assert_eq!(session.target.protocol, Protocol::IsoDep);
    assert!(session.tlv_state.is_not_started());
    assert!(!session.busy);
}

#[test]
fn deactivation_is_idempotent() {
    let mut h = helpers::activated(fixtures::ntag(true));
    h.rw.handle_event(RwEvent::Deactivate);
    h.rw.handle_event(RwEvent::Deactivate);
    assert!(!h.rw.is_activated());
    assert!(!h.timer.is_running());
    assert!(h.notifier.is_empty());
}

fn mifare_classic() -> ActivationParams {
    ActivationParams {
        protocol: Protocol::T2t,
        tech: TechParams::NfcA {
            sel_res: SelRes::new(0x08),
            nfcid1: fixtures::ntag_uid(),
            t1t_hr: [0; 2],
        },
        not_exclusive_rf: false,
    }
}

#[test]
fn unsupported_tag_runs_in_raw_mode() {
    let mut h = fresh();
    h.rw.handle_event(RwEvent::Activate(mifare_classic()));
    assert!(h.rf.raw_mode());
    assert!(h.rw.session().raw_mode);
    assert_eq!(h.engine.activation_count(), 0);
    assert_eq!(
        h.notifier.take(),
        vec![Notification::Activated {
            status: Status::Ok,
            params: TagParams::None
        }]
    );

    let auth = hex::decode("6004").unwrap();
    helpers::request(&mut h, OperationRequest::SendRawFrame(auth.clone()));
    assert_eq!(h.rf.raw_frames(), vec![auth]);
    assert!(!h.rw.is_busy());

    h.rw.handle_event(RwEvent::RawMode(RawModeEvent::Data {
        status: Status::Ok,
        data: vec![0x5A, 0x3C, 0x11, 0x08],
    }));
    assert_eq!(
        h.notifier.notifications(),
        vec![Notification::Data {
            status: Status::Ok,
            data: vec![0x5A, 0x3C, 0x11, 0x08]
        }]
    );

    h.rw.handle_event(RwEvent::Deactivate);
    assert!(!h.rf.raw_mode());
}

#[test]
fn raw_frame_to_engine_tag_waits_for_the_response() {
    let mut h = helpers::activated(fixtures::ntag(false));
    helpers::request(&mut h, OperationRequest::SendRawFrame(vec![0x30, 0x04]));
    assert!(h.rw.is_busy());

    helpers::t2t(&mut h, T2tEvent::RawFrame(DataEvent::ok([0x00; 16])));
    assert!(!h.rw.is_busy());
    assert_eq!(
        h.notifier.notifications(),
        vec![Notification::Data {
            status: Status::Ok,
            data: vec![0x00; 16]
        }]
    );
}

#[test]
fn raw_frame_that_cannot_be_sent_is_an_interface_error() {
    let mut h = helpers::activated(fixtures::ntag(false));
    h.rf.set_fail_raw_frame(true);
    helpers::request(&mut h, OperationRequest::SendRawFrame(vec![0x30, 0x04]));
    assert!(!h.rw.is_busy());
    assert_eq!(
        h.notifier.notifications(),
        vec![Notification::InterfaceError {
            status: Status::Failed
        }]
    );
}

#[test]
fn builder_wires_a_working_reader_writer() -> anyhow::Result<()> {
    helpers::init_logger();
    let engine = tagrw::engine::MockEngine::new();
    let notifier = tagrw::host::RecordingNotifier::new();
    let mut rw = tagrw::ReaderWriter::builder()
        .with_engine(Box::new(engine.clone()))
        .with_notifier(Box::new(notifier.clone()))
        .with_ndef_handler(Box::new(tagrw::host::RecordingNdefHandler::new()))
        .with_rf_control(Box::new(tagrw::host::MockRfControl::new()))
        .with_timer(Box::new(tagrw::host::MockTimer::new()))
        .build()?;

    rw.handle_event(RwEvent::Activate(fixtures::iso_dep(false)));
    rw.handle_event(RwEvent::Request(OperationRequest::DetectNdef));

    assert_eq!(notifier.len(), 1);
    assert_eq!(engine.submit_count(), 1);
    assert!(rw.is_busy());
    Ok(())
}
