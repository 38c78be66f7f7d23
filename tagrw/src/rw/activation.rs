// tagrw/src/rw/activation.rs
//! Tag activation and deactivation.
//!
//! Some families need one more command before the activated notification
//! can be sent (Type-1 RID, Type-3 system codes, ISO 15693 inventory or
//! system information). Those run as activation steps through the execute
//! path, with `activation_ntf_pending` set until the notification goes out.

use crate::constants::*;
use crate::notify::Notification;
use crate::protocol::{EngineCommand, I93Command, T1tCommand, T3tCommand};
use crate::request::{I93Request, Operation};
use crate::rw::{RawModeEvent, ReaderWriter};
use crate::types::{ActivationParams, Family, I93SysInfo, I93Uid, Status, TagParams, TagTarget};
use crate::Result;
use log::{debug, error, info, warn};

/// Command run after activation before the tag is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivationStep {
    /// Type-1 RID for HR0/HR1 and UID
    T1tReadId,
    T3tSystemCodes,
    /// Inventory of a Tag-it HF-I chip, which has no system information
    I93Inventory { uid: I93Uid },
    I93SystemInfo { uid: I93Uid },
    /// Single block read of the block holding the AFI byte
    I93ReadAfi { block: u8 },
}

impl ActivationStep {
    pub fn operation(&self) -> Operation {
        match self {
            Self::T1tReadId => Operation::T1tRid,
            Self::T3tSystemCodes => Operation::T3tGetSystemCodes,
            Self::I93Inventory { .. } => Operation::I93(I93_CMD_INVENTORY),
            Self::I93SystemInfo { .. } => Operation::I93(I93_CMD_GET_SYS_INFO),
            Self::I93ReadAfi { .. } => Operation::I93(I93_CMD_READ_SINGLE_BLOCK),
        }
    }

    pub fn command(&self, target: TagTarget) -> Result<EngineCommand> {
        match *self {
            Self::T1tReadId => EngineCommand::t1t(target, T1tCommand::Rid),
            Self::T3tSystemCodes => EngineCommand::t3t(target, T3tCommand::GetSystemCodes),
            Self::I93Inventory { uid } => EngineCommand::i93(
                target,
                I93Command::Vicinity(I93Request::Inventory {
                    afi: 0,
                    uid: Some(uid),
                }),
            ),
            Self::I93SystemInfo { uid } => EngineCommand::i93(
                target,
                I93Command::Vicinity(I93Request::GetSystemInfo { uid: Some(uid) }),
            ),
            Self::I93ReadAfi { block } => EngineCommand::i93(
                target,
                I93Command::Vicinity(I93Request::ReadSingleBlock { block }),
            ),
        }
    }
}

/// Tag-it HF-I Standard/Pro chips do not answer GET SYSTEM INFORMATION;
/// returns their fixed block count.
fn tag_it_hf_i_blocks(uid: &I93Uid) -> Option<u16> {
    if uid.mfg_code() != I93_UID_IC_MFG_CODE_TI {
        return None;
    }
    match uid.product_id() & I93_UID_TAG_IT_HF_I_PRODUCT_ID_MASK {
        I93_UID_TAG_IT_HF_I_STD_CHIP_INLAY => Some(I93_TAG_IT_HF_I_STD_NUM_TOTAL_BLOCKS),
        I93_UID_TAG_IT_HF_I_PRO_CHIP_INLAY => Some(I93_TAG_IT_HF_I_PRO_NUM_TOTAL_BLOCKS),
        _ => None,
    }
}

impl ReaderWriter {
    /// A tag was activated by the RF layer.
    pub fn activate(&mut self, params: &ActivationParams) {
        self.stop_presence_timer();
        self.session.reset_for(params);
        let target = self.session.target;
        info!(
            "tag activated: protocol={} not_exclusive_rf={}",
            target.protocol, params.not_exclusive_rf
        );

        let Some(family) = target.family() else {
            info!("{} not handled by the engine, using raw mode", target.protocol);
            if let Err(err) = self.rf.set_raw_mode(true) {
                warn!("raw mode not enabled: {}", err);
            }
            self.session.raw_mode = true;
            self.notify_activated(TagParams::None);
            return;
        };

        if let Err(err) = self.engine.set_activated_tag(params) {
            // no notification; the tag stays activated
            error!("engine initialisation failed for {}: {}", family, err);
            return;
        }

        match family {
            Family::T1t => {
                self.session.pending_params = TagParams::T1t {
                    hr: params.t1t_hr(),
                    uid: params.nfcid1().to_vec(),
                };
                if self.config.t1t_read_id_on_activation {
                    self.run_activation_step(ActivationStep::T1tReadId);
                } else {
                    let tag_params = std::mem::take(&mut self.session.pending_params);
                    self.notify_activated(tag_params);
                }
            }
            Family::T2t => self.notify_activated(TagParams::T2t {
                uid: params.nfcid1().to_vec(),
            }),
            Family::T3t => {
                self.session.pending_params = TagParams::T3t {
                    system_codes: Vec::new(),
                };
                self.run_activation_step(ActivationStep::T3tSystemCodes);
            }
            Family::T4t => self.notify_activated(TagParams::None),
            Family::I93 => self.activate_i93(params),
        }
    }

    fn activate_i93(&mut self, params: &ActivationParams) {
        let uid = params.i93_uid().unwrap_or_default();
        self.session.i93.uid = uid;
        self.session.pending_params = TagParams::I93(I93SysInfo {
            uid,
            ..I93SysInfo::default()
        });

        match tag_it_hf_i_blocks(&uid) {
            Some(num_blocks) => {
                debug!("Tag-it HF-I chip, fixed layout of {} blocks", num_blocks);
                self.session.i93.block_size = I93_TAG_IT_HF_I_BLOCK_SIZE;
                self.session.i93.num_blocks = num_blocks;
                self.session.i93.afi_location = I93_TAG_IT_HF_I_AFI_LOCATION;
                self.run_activation_step(ActivationStep::I93Inventory { uid });
            }
            None => {
                self.session.i93.block_size = 0;
                self.session.i93.num_blocks = 0;
                self.run_activation_step(ActivationStep::I93SystemInfo { uid });
            }
        }
    }

    /// Issue an activation step directly, bypassing the admission gate.
    /// A step that cannot start reports the activation with what is known.
    pub(crate) fn run_activation_step(&mut self, step: ActivationStep) {
        debug!("activation step {:?}", step);
        self.session.activation_ntf_pending = true;
        self.session.busy = true;
        self.stop_presence_timer();
        self.session.current_op = Some(step.operation());

        let result = step.command(self.session.target).and_then(|cmd| self.submit(cmd));
        if let Err(err) = result {
            warn!("activation step {:?} failed to start: {}", step, err);
            self.finish_activation(Status::Ok);
        }
    }

    /// Deliver the deferred activated notification with the parameters
    /// gathered so far.
    pub(crate) fn finish_activation(&mut self, status: Status) {
        self.session.activation_ntf_pending = false;
        self.command_complete();
        let params = std::mem::take(&mut self.session.pending_params);
        self.notify(Notification::Activated { status, params });
    }

    fn notify_activated(&mut self, params: TagParams) {
        self.notify(Notification::Activated {
            status: Status::Ok,
            params,
        });
        self.start_presence_timer();
    }

    /// The tag left the field or the link was dropped. Safe to call when
    /// nothing is activated.
    pub fn deactivate(&mut self) {
        if self.session.activated {
            info!("tag deactivated");
        }
        self.session.activated = false;
        self.session.busy = false;
        self.session.auto_presence_check_busy = false;
        self.session.activation_ntf_pending = false;
        self.session.current_op = None;
        self.session.release_read_buffer();
        self.session.write_source.clear();
        if let Some(request) = self.session.pending.take() {
            debug!("deferred {:?} discarded on deactivation", request.operation());
        }
        self.stop_presence_timer();

        if self.session.raw_mode {
            self.session.raw_mode = false;
            if let Err(err) = self.rf.set_raw_mode(false) {
                warn!("raw mode not disabled: {}", err);
            }
        }
    }

    /// Traffic of a tag handled in raw mode.
    pub fn handle_raw_mode_event(&mut self, event: RawModeEvent) {
        match event {
            RawModeEvent::Data { status, data } => {
                if !self.session.raw_mode {
                    debug!("raw data outside raw mode dropped");
                    return;
                }
                if status.is_ok() {
                    self.notify(Notification::Data { status, data });
                } else {
                    debug!("raw mode data with status {} dropped", status);
                }
            }
            RawModeEvent::Deactivated => {
                if self.session.raw_mode {
                    self.session.raw_mode = false;
                    if let Err(err) = self.rf.set_raw_mode(false) {
                        warn!("raw mode not disabled: {}", err);
                    }
                }
            }
        }
    }
}
