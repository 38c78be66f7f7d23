// tagrw/src/types.rs

use crate::Error;
use crate::constants::{
    I93_UID_BYTE_LEN, NDEF_FL_FORMATABLE, NDEF_FL_FORMATED, NDEF_FL_READ_ONLY, NDEF_FL_SUPPORTED,
    NDEF_FL_UNKNOWN, SEL_RES_NFC_FORUM_T2T, TLV_LOCK_CONTROL, TLV_MEMORY_CONTROL,
};
use derive_more::Display;
use std::convert::TryFrom;

/// Completion status carried by every notification and engine event.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Status {
    #[default]
    #[display(fmt = "ok")]
    Ok,
    #[display(fmt = "failed")]
    Failed,
    #[display(fmt = "busy")]
    Busy,
    #[display(fmt = "timeout")]
    Timeout,
    #[display(fmt = "buffer full")]
    BufferFull,
    #[display(fmt = "rejected")]
    Rejected,
    #[display(fmt = "not supported")]
    NotSupported,
    #[display(fmt = "rf transmission error")]
    RfTransmissionError,
    #[display(fmt = "rf protocol error")]
    RfProtocolError,
}

impl Status {
    pub fn is_ok(self) -> bool {
        self == Self::Ok
    }

    /// Collapse every non-OK status into `Failed`.
    pub fn ok_or_failed(self) -> Self {
        if self.is_ok() { Self::Ok } else { Self::Failed }
    }
}

/// RF protocol reported by the activation collaborator.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Protocol {
    #[display(fmt = "t1t")]
    T1t,
    #[display(fmt = "t2t")]
    T2t,
    #[display(fmt = "t3t")]
    T3t,
    #[display(fmt = "iso-dep")]
    IsoDep,
    #[display(fmt = "iso15693")]
    Iso15693,
    #[display(fmt = "nfc-dep")]
    NfcDep,
    #[display(fmt = "other({:#04x})", _0)]
    Other(u8),
}

/// NFC-A SEL_RES (SAK) byte
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SelRes(u8);

impl SelRes {
    pub const NFC_FORUM_T2T: Self = Self(SEL_RES_NFC_FORUM_T2T);

    pub const fn new(value: u8) -> Self {
        Self(value)
    }

    pub fn value(&self) -> u8 {
        self.0
    }

    pub fn is_nfc_forum_t2t(&self) -> bool {
        *self == Self::NFC_FORUM_T2T
    }
}

/// Tag family handled by the engine.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Family {
    #[display(fmt = "type-1")]
    T1t,
    #[display(fmt = "type-2")]
    T2t,
    #[display(fmt = "type-3")]
    T3t,
    #[display(fmt = "type-4")]
    T4t,
    #[display(fmt = "iso15693")]
    I93,
}

/// Protocol and selector of the activated tag. Every engine command is
/// built against one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TagTarget {
    pub protocol: Protocol,
    pub sel_res: Option<SelRes>,
}

impl TagTarget {
    pub fn new(protocol: Protocol, sel_res: Option<SelRes>) -> Self {
        Self { protocol, sel_res }
    }

    /// Family the engine drives for this tag, or `None` when the engine has
    /// no command set for it (non NFC-Forum Type-2 included).
    pub fn family(&self) -> Option<Family> {
        match self.protocol {
            Protocol::T1t => Some(Family::T1t),
            Protocol::T2t if self.sel_res.is_some_and(|s| s.is_nfc_forum_t2t()) => {
                Some(Family::T2t)
            }
            Protocol::T3t => Some(Family::T3t),
            Protocol::IsoDep => Some(Family::T4t),
            Protocol::Iso15693 => Some(Family::I93),
            _ => None,
        }
    }

    pub fn is_rw_supported(&self) -> bool {
        self.family().is_some()
    }
}

impl Default for TagTarget {
    fn default() -> Self {
        Self::new(Protocol::Other(0), None)
    }
}

/// NDEF attribute flags reported by detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NdefFlags(u8);

impl NdefFlags {
    pub const READ_ONLY: Self = Self(NDEF_FL_READ_ONLY);
    pub const FORMATED: Self = Self(NDEF_FL_FORMATED);
    pub const SUPPORTED: Self = Self(NDEF_FL_SUPPORTED);
    pub const UNKNOWN: Self = Self(NDEF_FL_UNKNOWN);
    pub const FORMATABLE: Self = Self(NDEF_FL_FORMATABLE);

    pub const fn from_bits(bits: u8) -> Self {
        Self(bits)
    }

    pub fn bits(&self) -> u8 {
        self.0
    }

    pub fn contains(&self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    pub fn is_read_only(&self) -> bool {
        self.contains(Self::READ_ONLY)
    }
}

impl std::ops::BitOr for NdefFlags {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

/// ISO 15693 UID - Newtype Pattern (8 バイト)
///
/// Byte 1 carries the IC manufacturer code and byte 2 the product id, in
/// the order the activation collaborator reports them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct I93Uid([u8; I93_UID_BYTE_LEN]);

impl I93Uid {
    pub fn from_bytes(bytes: [u8; I93_UID_BYTE_LEN]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; I93_UID_BYTE_LEN] {
        &self.0
    }

    pub fn mfg_code(&self) -> u8 {
        self.0[1]
    }

    pub fn product_id(&self) -> u8 {
        self.0[2]
    }
}

impl TryFrom<&[u8]> for I93Uid {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        if bytes.len() != I93_UID_BYTE_LEN {
            return Err(Error::InvalidLength {
                expected: I93_UID_BYTE_LEN,
                actual: bytes.len(),
            });
        }
        let mut arr = [0u8; I93_UID_BYTE_LEN];
        arr.copy_from_slice(bytes);
        Ok(Self(arr))
    }
}

/// FeliCa SystemCode (u16)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SystemCode(u16);

impl SystemCode {
    pub const NDEF: Self = Self(0x12fc);

    pub const fn new(code: u16) -> Self {
        Self(code)
    }

    pub fn value(&self) -> u16 {
        self.0
    }
}

/// FeliCa ServiceCode (u16)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ServiceCode(u16);

impl ServiceCode {
    pub const fn new(code: u16) -> Self {
        Self(code)
    }

    pub fn value(&self) -> u16 {
        self.0
    }
}

/// Type-3 block address used by check/update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct T3tBlockDesc {
    pub service_code: ServiceCode,
    pub block_number: u32,
}

impl T3tBlockDesc {
    pub fn new(service_code: ServiceCode, block_number: u32) -> Self {
        Self {
            service_code,
            block_number,
        }
    }
}

/// TLV blocks that can be located on Type-1/Type-2 tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TlvType {
    LockControl,
    MemoryControl,
}

impl TlvType {
    pub fn tag(&self) -> u8 {
        match self {
            Self::LockControl => TLV_LOCK_CONTROL,
            Self::MemoryControl => TLV_MEMORY_CONTROL,
        }
    }
}

/// RF technology parameters captured at activation.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TechParams {
    NfcA {
        sel_res: SelRes,
        nfcid1: Vec<u8>,
        /// HR0/HR1 from the Type-1 activation interface parameters.
        t1t_hr: [u8; 2],
    },
    NfcF {
        nfcid2: [u8; 8],
    },
    Iso15693 {
        uid: I93Uid,
        dsfid: u8,
    },
    Other,
}

/// Activation notification delivered by the RF discovery layer.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActivationParams {
    pub protocol: Protocol,
    pub tech: TechParams,
    /// Set when the stack is not in exclusive RF mode; enables the
    /// periodic presence check.
    pub not_exclusive_rf: bool,
}

impl ActivationParams {
    pub fn target(&self) -> TagTarget {
        TagTarget::new(self.protocol, self.sel_res())
    }

    pub fn sel_res(&self) -> Option<SelRes> {
        match &self.tech {
            TechParams::NfcA { sel_res, .. } => Some(*sel_res),
            _ => None,
        }
    }

    pub fn nfcid1(&self) -> &[u8] {
        match &self.tech {
            TechParams::NfcA { nfcid1, .. } => nfcid1,
            _ => &[],
        }
    }

    pub fn t1t_hr(&self) -> [u8; 2] {
        match &self.tech {
            TechParams::NfcA { t1t_hr, .. } => *t1t_hr,
            _ => [0; 2],
        }
    }

    pub fn i93_uid(&self) -> Option<I93Uid> {
        match &self.tech {
            TechParams::Iso15693 { uid, .. } => Some(*uid),
            _ => None,
        }
    }
}

/// ISO 15693 tag information, from GET SYSTEM INFORMATION or from the
/// fixed layout of chips that do not support it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct I93SysInfo {
    pub info_flags: u8,
    pub uid: I93Uid,
    pub dsfid: u8,
    pub afi: u8,
    pub num_blocks: u16,
    pub block_size: u8,
    pub ic_reference: u8,
}

/// Tag parameters carried by the activated notification.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TagParams {
    #[default]
    None,
    T1t {
        hr: [u8; 2],
        uid: Vec<u8>,
    },
    T2t {
        uid: Vec<u8>,
    },
    T3t {
        system_codes: Vec<SystemCode>,
    },
    I93(I93SysInfo),
}
