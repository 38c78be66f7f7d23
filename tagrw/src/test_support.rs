// tagrw/src/test_support.rs
//! Test support helpers intended for use by unit and integration tests.
//!
//! `Harness` wires a `ReaderWriter` to the recording mocks and keeps a
//! handle to each of them, so tests across the crate and tests/ directory
//! can drive the state machine and inspect every collaborator.
#![allow(dead_code)]

use crate::config::RwConfig;
use crate::engine::MockEngine;
use crate::host::{MockRfControl, MockTimer, RecordingNdefHandler, RecordingNotifier};
use crate::protocol::{EngineEvent, I93Event, T3tEvent};
use crate::rw::ReaderWriter;
use crate::types::{ActivationParams, I93SysInfo, I93Uid, Status, SystemCode};

/// ReaderWriter plus handles to its mock collaborators.
#[doc(hidden)]
pub struct Harness {
    pub rw: ReaderWriter,
    pub engine: MockEngine,
    pub notifier: RecordingNotifier,
    pub ndef: RecordingNdefHandler,
    pub rf: MockRfControl,
    pub timer: MockTimer,
}

impl Harness {
    pub fn new() -> Self {
        Self::with_config(RwConfig::default())
    }

    pub fn with_config(config: RwConfig) -> Self {
        let engine = MockEngine::new();
        let notifier = RecordingNotifier::new();
        let ndef = RecordingNdefHandler::new();
        let rf = MockRfControl::new();
        let timer = MockTimer::new();
        let rw = ReaderWriter::new(
            Box::new(engine.clone()),
            Box::new(notifier.clone()),
            Box::new(ndef.clone()),
            Box::new(rf.clone()),
            Box::new(timer.clone()),
            config,
        );
        Self {
            rw,
            engine,
            notifier,
            ndef,
            rf,
            timer,
        }
    }

    /// Activate a tag that reports itself without an activation step,
    /// then forget the activation traffic.
    pub fn activated(params: ActivationParams) -> Self {
        let mut h = Self::new();
        h.rw.activate(&params);
        h.forget();
        h
    }

    /// Type-1 tag activated with RID on activation disabled.
    pub fn activated_t1t_without_rid() -> Self {
        let mut h = Self::with_config(RwConfig::default().with_t1t_read_id(false));
        h.rw.activate(&params::t1t(false));
        h.forget();
        h
    }

    /// Type-3 tag with its system codes fetched.
    pub fn activated_t3t_ready() -> Self {
        let mut h = Self::new();
        h.rw.activate(&params::t3t(false));
        h.rw.handle_engine_event(EngineEvent::T3t(T3tEvent::SystemCodes {
            status: Status::Ok,
            codes: vec![SystemCode::NDEF],
        }));
        h.forget();
        h
    }

    /// ISO 15693 tag with its system information fetched.
    pub fn activated_i93_ready() -> Self {
        let mut h = Self::new();
        h.rw.activate(&params::i93(params::I93_UID, false));
        h.rw.handle_engine_event(EngineEvent::I93(I93Event::SystemInfo {
            status: Status::Ok,
            info: I93SysInfo {
                info_flags: 0x0F,
                uid: I93Uid::from_bytes(params::I93_UID),
                dsfid: 0,
                afi: 0,
                num_blocks: 64,
                block_size: 4,
                ic_reference: 0,
            },
        }));
        h.forget();
        h
    }

    /// Drop recorded notifications and engine commands.
    pub fn forget(&mut self) {
        self.notifier.take();
        self.engine.clear();
    }
}

impl Default for Harness {
    fn default() -> Self {
        Self::new()
    }
}

/// Activation parameters of the tags used in tests.
#[doc(hidden)]
pub mod params {
    use crate::types::{ActivationParams, I93Uid, Protocol, SelRes, TechParams};

    pub const T2T_UID: [u8; 7] = [0x04, 0x8E, 0x5A, 0x12, 0x34, 0x56, 0x78];
    pub const T1T_HR: [u8; 2] = [0x11, 0x48];
    pub const T1T_UID: [u8; 4] = [0x01, 0x02, 0x03, 0x04];
    pub const T3T_NFCID2: [u8; 8] = [0x01, 0x2E, 0x3C, 0x4D, 0x5E, 0x6F, 0x70, 0x81];
    /// Byte 1 manufacturer (NXP), byte 2 product id
    pub const I93_UID: [u8; 8] = [0xE0, 0x04, 0x01, 0x50, 0x12, 0x34, 0x56, 0x78];
    /// Texas Instruments Tag-it HF-I Standard
    pub const TAG_IT_STD_UID: [u8; 8] = [0xE0, 0x07, 0xC0, 0x11, 0x22, 0x33, 0x44, 0x55];
    /// Texas Instruments Tag-it HF-I Pro
    pub const TAG_IT_PRO_UID: [u8; 8] = [0xE0, 0x07, 0xC5, 0x11, 0x22, 0x33, 0x44, 0x55];

    fn nfc_a(protocol: Protocol, sel_res: u8, nfcid1: &[u8], not_exclusive_rf: bool) -> ActivationParams {
        ActivationParams {
            protocol,
            tech: TechParams::NfcA {
                sel_res: SelRes::new(sel_res),
                nfcid1: nfcid1.to_vec(),
                t1t_hr: [0; 2],
            },
            not_exclusive_rf,
        }
    }

    pub fn t1t(not_exclusive_rf: bool) -> ActivationParams {
        ActivationParams {
            protocol: Protocol::T1t,
            tech: TechParams::NfcA {
                sel_res: SelRes::new(0x0C),
                nfcid1: T1T_UID.to_vec(),
                t1t_hr: T1T_HR,
            },
            not_exclusive_rf,
        }
    }

    /// NFC-Forum Type-2 tag
    pub fn t2t_forum(not_exclusive_rf: bool) -> ActivationParams {
        nfc_a(Protocol::T2t, 0x00, &T2T_UID, not_exclusive_rf)
    }

    /// Type-2 protocol with a non NFC-Forum SEL_RES (MIFARE Classic)
    pub fn t2t_classic(not_exclusive_rf: bool) -> ActivationParams {
        nfc_a(Protocol::T2t, 0x08, &T2T_UID, not_exclusive_rf)
    }

    pub fn t3t(not_exclusive_rf: bool) -> ActivationParams {
        ActivationParams {
            protocol: Protocol::T3t,
            tech: TechParams::NfcF { nfcid2: T3T_NFCID2 },
            not_exclusive_rf,
        }
    }

    pub fn t4t(not_exclusive_rf: bool) -> ActivationParams {
        nfc_a(Protocol::IsoDep, 0x20, &T2T_UID, not_exclusive_rf)
    }

    pub fn i93(uid: [u8; 8], not_exclusive_rf: bool) -> ActivationParams {
        ActivationParams {
            protocol: Protocol::Iso15693,
            tech: TechParams::Iso15693 {
                uid: I93Uid::from_bytes(uid),
                dsfid: 0,
            },
            not_exclusive_rf,
        }
    }
}
