// fixtures.rs: activation parameters and NDEF payloads used across scenarios

use tagrw::protocol::NdefDetectEvent;
use tagrw::{ActivationParams, I93Uid, NdefFlags, Protocol, SelRes, TechParams};

/// NDEF text record "Hello world", language "en"
pub fn hello_record() -> Vec<u8> {
    hex::decode("d1010e5402656e48656c6c6f20776f726c64").unwrap()
}

pub fn ntag_uid() -> Vec<u8> {
    hex::decode("048e5a12345678").unwrap()
}

/// ICODE SLIX, NXP manufacturer code
pub fn icode_uid() -> [u8; 8] {
    uid8("e004015012345678")
}

/// Tag-it HF-I Standard
pub fn tag_it_std_uid() -> [u8; 8] {
    uid8("e007c01122334455")
}

/// Tag-it HF-I Pro
pub fn tag_it_pro_uid() -> [u8; 8] {
    uid8("e007c51122334455")
}

fn uid8(s: &str) -> [u8; 8] {
    let bytes = hex::decode(s).unwrap();
    bytes.try_into().unwrap()
}

/// Topaz 512, HR0 0x12
pub fn topaz(not_exclusive_rf: bool) -> ActivationParams {
    ActivationParams {
        protocol: Protocol::T1t,
        tech: TechParams::NfcA {
            sel_res: SelRes::new(0x0C),
            nfcid1: hex::decode("8a7b6c5d").unwrap(),
            t1t_hr: [0x12, 0x4C],
        },
        not_exclusive_rf,
    }
}

pub fn ntag(not_exclusive_rf: bool) -> ActivationParams {
    ActivationParams {
        protocol: Protocol::T2t,
        tech: TechParams::NfcA {
            sel_res: SelRes::new(0x00),
            nfcid1: ntag_uid(),
            t1t_hr: [0; 2],
        },
        not_exclusive_rf,
    }
}

pub fn felica(not_exclusive_rf: bool) -> ActivationParams {
    ActivationParams {
        protocol: Protocol::T3t,
        tech: TechParams::NfcF {
            nfcid2: uid8("012e3c4d5e6f7081"),
        },
        not_exclusive_rf,
    }
}

pub fn iso_dep(not_exclusive_rf: bool) -> ActivationParams {
    ActivationParams {
        protocol: Protocol::IsoDep,
        tech: TechParams::NfcA {
            sel_res: SelRes::new(0x20),
            nfcid1: ntag_uid(),
            t1t_hr: [0; 2],
        },
        not_exclusive_rf,
    }
}

pub fn vicinity(uid: [u8; 8], not_exclusive_rf: bool) -> ActivationParams {
    ActivationParams {
        protocol: Protocol::Iso15693,
        tech: TechParams::Iso15693 {
            uid: I93Uid::from_bytes(uid),
            dsfid: 0,
        },
        not_exclusive_rf,
    }
}

pub fn detected(cur_size: usize, max_size: usize) -> NdefDetectEvent {
    NdefDetectEvent::ok(cur_size, max_size, NdefFlags::SUPPORTED | NdefFlags::FORMATED)
}

pub fn detected_read_only(cur_size: usize) -> NdefDetectEvent {
    NdefDetectEvent::ok(
        cur_size,
        cur_size,
        NdefFlags::SUPPORTED | NdefFlags::FORMATED | NdefFlags::READ_ONLY,
    )
}
