use crate::common::{fixtures, helpers};
use tagrw::constants::*;
use tagrw::protocol::{DataEvent, EngineCommand, EngineEvent, I93Command, I93Event};
use tagrw::rw::NdefState;
use tagrw::test_support::Harness;
use tagrw::{
    I93CommandParams, I93CommandResult, I93Request, I93SysInfo, I93Uid, Notification,
    OperationRequest, RwEvent, Status, TagParams,
};

fn i93(h: &mut Harness, event: I93Event) {
    helpers::engine(h, EngineEvent::I93(event));
}

fn activating(uid: [u8; 8]) -> Harness {
    helpers::init_logger();
    let mut h = Harness::new();
    h.rw.handle_event(RwEvent::Activate(fixtures::vicinity(uid, true)));
    h
}

#[test]
fn tag_it_chip_is_inventoried_instead_of_queried() {
    let uid = I93Uid::from_bytes(fixtures::tag_it_std_uid());
    let mut h = activating(fixtures::tag_it_std_uid());

    assert_eq!(
        h.engine.submitted(),
        vec![EngineCommand::I93(I93Command::Vicinity(
            I93Request::Inventory {
                afi: 0,
                uid: Some(uid)
            }
        ))]
    );
    assert_eq!(h.rw.session().i93.block_size, 4);
    assert_eq!(h.rw.session().i93.num_blocks, 11);
    assert!(h.notifier.is_empty());

    i93(&mut h, I93Event::Inventory {
        status: Status::Ok,
        dsfid: 0x00,
        uid,
    });
    // AFI lives in block 36 / 4
    assert_eq!(
        h.engine.last_submitted(),
        Some(EngineCommand::I93(I93Command::Vicinity(
            I93Request::ReadSingleBlock { block: 9 }
        )))
    );
    assert!(h.notifier.is_empty());

    i93(&mut h, I93Event::Data(DataEvent::ok([0x3E, 0x00, 0x00, 0x00])));
    assert_eq!(
        h.notifier.notifications(),
        vec![Notification::Activated {
            status: Status::Ok,
            params: TagParams::I93(I93SysInfo {
                info_flags: I93_INFO_FLAG_DSFID | I93_INFO_FLAG_MEM_SIZE | I93_INFO_FLAG_AFI,
                uid,
                dsfid: 0,
                afi: 0x3E,
                num_blocks: 11,
                block_size: 4,
                ic_reference: 0,
            })
        }]
    );
    assert!(!h.rw.is_busy());
    assert!(h.timer.is_running());
}

#[test]
fn other_chips_are_queried_for_system_information() {
    let uid = I93Uid::from_bytes(fixtures::icode_uid());
    let mut h = activating(fixtures::icode_uid());
    assert_eq!(
        h.engine.submitted(),
        vec![EngineCommand::I93(I93Command::Vicinity(
            I93Request::GetSystemInfo { uid: Some(uid) }
        ))]
    );

    let info = I93SysInfo {
        info_flags: 0x0F,
        uid,
        dsfid: 0x00,
        afi: 0x00,
        num_blocks: 28,
        block_size: 4,
        ic_reference: 0x01,
    };
    i93(&mut h, I93Event::SystemInfo {
        status: Status::Ok,
        info,
    });
    assert_eq!(
        h.notifier.notifications(),
        vec![Notification::Activated {
            status: Status::Ok,
            params: TagParams::I93(info)
        }]
    );
}

#[test]
fn interface_error_during_activation_still_reports_the_tag() {
    let uid = I93Uid::from_bytes(fixtures::icode_uid());
    let mut h = activating(fixtures::icode_uid());

    i93(&mut h, I93Event::InterfaceError {
        status: Status::Timeout,
    });

    assert_eq!(
        h.notifier.notifications(),
        vec![Notification::Activated {
            status: Status::Ok,
            params: TagParams::I93(I93SysInfo {
                uid,
                ..I93SysInfo::default()
            })
        }]
    );
    assert!(!h.rw.is_busy());
    assert!(!h.rw.session().activation_ntf_pending);
}

#[test]
fn inventory_failure_still_reports_the_tag() {
    let mut h = activating(fixtures::tag_it_pro_uid());
    i93(&mut h, I93Event::Inventory {
        status: Status::Failed,
        dsfid: 0,
        uid: I93Uid::default(),
    });
    assert_eq!(h.notifier.len(), 1);
    assert_eq!(h.engine.submit_count(), 1);
}

#[test]
fn commands_echo_their_code() {
    helpers::init_logger();
    let mut h = Harness::activated_i93_ready();
    helpers::request(&mut h, OperationRequest::I93(I93Request::WriteDsfid { dsfid: 0x42 }));
    i93(&mut h, I93Event::CommandComplete {
        status: Status::Ok,
        command: I93_CMD_WRITE_DSFID,
        error_code: 0,
    });
    assert_eq!(
        h.notifier.notifications(),
        vec![Notification::I93CommandComplete(I93CommandResult {
            status: Status::Ok,
            command: I93_CMD_WRITE_DSFID,
            params: I93CommandParams::None
        })]
    );
}

#[test]
fn block_write_invalidates_ndef_state() {
    helpers::init_logger();
    let mut h = Harness::activated_i93_ready();
    helpers::request(&mut h, OperationRequest::DetectNdef);
    i93(&mut h, I93Event::NdefDetect(fixtures::detected(10, 240)));
    assert_eq!(h.rw.session().ndef_state, NdefState::True);

    helpers::request(
        &mut h,
        OperationRequest::I93(I93Request::WriteSingleBlock {
            block: 2,
            data: vec![0xE1, 0x40, 0x1E, 0x00],
        }),
    );
    assert_eq!(h.rw.session().ndef_state, NdefState::Unknown);
}

#[test]
fn busy_command_is_answered_with_its_code() {
    helpers::init_logger();
    let mut h = Harness::activated_i93_ready();
    helpers::request(&mut h, OperationRequest::I93(I93Request::StayQuiet));
    helpers::request(&mut h, OperationRequest::I93(I93Request::LockAfi));
    assert_eq!(
        h.notifier.notifications(),
        vec![Notification::I93CommandComplete(I93CommandResult {
            status: Status::Busy,
            command: I93_CMD_LOCK_AFI,
            params: I93CommandParams::None
        })]
    );
}
