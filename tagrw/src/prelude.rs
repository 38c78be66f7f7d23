// tagrw/src/prelude.rs

pub use crate::config::RwConfig;
pub use crate::engine::TagEngine;
pub use crate::host::{NdefHandler, Notifier, PresenceTimer, RfControl};
pub use crate::notify::{
    I93CommandParams, I93CommandResult, NdefDetectResult, Notification, TlvResult,
};
pub use crate::protocol::{EngineCommand, EngineEvent};
pub use crate::request::{
    I93Request, Operation, OperationRequest, T1tRequest, T2tRequest, T3tRequest,
};
pub use crate::rw::{Admission, RawModeEvent, ReaderWriter, ReaderWriterBuilder, RwEvent};
pub use crate::{
    ActivationParams, Error, Family, I93SysInfo, I93Uid, NdefFlags, Protocol, Result, SelRes,
    ServiceCode, Status, SystemCode, T3tBlockDesc, TagParams, TagTarget, TechParams,
};

#[cfg(feature = "async")]
pub use crate::driver::{DriverMessage, EventLoop, TokioPresenceTimer};
