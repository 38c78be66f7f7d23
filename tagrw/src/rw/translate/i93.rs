// tagrw/src/rw/translate/i93.rs

use super::failure_status;
use crate::constants::*;
use crate::notify::{I93CommandParams, I93CommandResult, Notification};
use crate::protocol::events::i93::afi_from_block;
use crate::protocol::{DataEvent, EngineCommand, I93Command, I93Event};
use crate::request::{I93Request, Operation};
use crate::rw::ReaderWriter;
use crate::rw::activation::ActivationStep;
use crate::rw::session::NdefState;
use crate::types::{I93SysInfo, I93Uid, Status, TagParams};
use log::{debug, warn};

impl ReaderWriter {
    pub(crate) fn i93_command(&mut self, request: I93Request) {
        let mutates = request.mutates_content();
        let command = EngineCommand::i93(self.session.target, I93Command::Vicinity(request));
        if self.submit_for_current(command) && mutates {
            self.session.ndef_state = NdefState::Unknown;
        }
    }

    pub(crate) fn handle_i93_event(&mut self, event: I93Event) {
        match event {
            I93Event::NdefDetect(event) => self.handle_ndef_detect(event),
            I93Event::NdefRead(data) => self.store_ndef_data(&data),
            I93Event::NdefReadComplete(data) => {
                self.store_ndef_data(&data);
                self.complete_ndef_read(data.status);
            }
            I93Event::NdefReadFail { status } => self.complete_ndef_read(failure_status(status)),
            I93Event::NdefUpdateComplete => self.complete_ndef_write(Status::Ok),
            I93Event::NdefUpdateFail { status } => self.complete_ndef_write(failure_status(status)),
            I93Event::RawFrame(data) => self.handle_raw_frame(data),
            I93Event::InterfaceError { status } => self.handle_interface_error(status),
            I93Event::PresenceCheck { status } => self.handle_presence_check_rsp(status),
            I93Event::FormatComplete { status } => self.complete_format(status),
            I93Event::SetTagReadOnly { status } => self.complete_set_read_only(status),
            I93Event::Inventory { status, dsfid, uid } => {
                self.handle_i93_inventory(status, dsfid, uid)
            }
            I93Event::Data(data) => self.handle_i93_data(data),
            I93Event::SystemInfo { status, info } => self.handle_i93_sys_info(status, info),
            I93Event::CommandComplete {
                status,
                command,
                error_code,
            } => {
                self.command_complete();
                let params = if status.is_ok() {
                    I93CommandParams::None
                } else {
                    I93CommandParams::ErrorCode(error_code)
                };
                self.notify_i93(status, command, params);
            }
        }
    }

    fn notify_i93(&mut self, status: Status, command: u8, params: I93CommandParams) {
        self.notify(Notification::I93CommandComplete(I93CommandResult {
            status,
            command,
            params,
        }));
    }

    /// Layout known so far, for the activated notification.
    fn i93_activation_info(&self, info_flags: u8) -> I93SysInfo {
        let scratch = &self.session.i93;
        I93SysInfo {
            info_flags,
            uid: scratch.uid,
            dsfid: scratch.dsfid,
            afi: 0,
            num_blocks: scratch.num_blocks,
            block_size: scratch.block_size,
            ic_reference: 0,
        }
    }

    fn handle_i93_inventory(&mut self, status: Status, dsfid: u8, uid: I93Uid) {
        if !self.session.activation_ntf_pending {
            self.command_complete();
            let params = if status.is_ok() {
                I93CommandParams::Inventory { dsfid, uid }
            } else {
                I93CommandParams::None
            };
            self.notify_i93(status, I93_CMD_INVENTORY, params);
            return;
        }

        if !status.is_ok() {
            warn!("inventory failed during activation ({})", status);
            self.finish_activation(Status::Ok);
            return;
        }

        self.session.i93.dsfid = dsfid;
        let info = self.i93_activation_info(I93_INFO_FLAG_DSFID | I93_INFO_FLAG_MEM_SIZE);
        self.session.pending_params = TagParams::I93(info);

        let block_size = u16::from(self.session.i93.block_size);
        let block = match self.session.i93.afi_location.checked_div(block_size) {
            Some(block) => u8::try_from(block).ok(),
            None => None,
        };
        match block {
            Some(block) => self.run_activation_step(ActivationStep::I93ReadAfi { block }),
            None => {
                warn!("AFI location outside addressable blocks");
                self.finish_activation(Status::Ok);
            }
        }
    }

    /// Block read or multi-block security status. During activation this is
    /// the block holding the AFI byte.
    fn handle_i93_data(&mut self, data: DataEvent) {
        if self.session.activation_ntf_pending {
            let afi = match (&data.data, data.status.is_ok()) {
                (Some(block), true) => afi_from_block(
                    block,
                    self.session.i93.afi_location,
                    self.session.i93.block_size,
                ),
                _ => None,
            };
            if let TagParams::I93(info) = &mut self.session.pending_params {
                if let Some(afi) = afi {
                    info.afi = afi;
                    info.info_flags |= I93_INFO_FLAG_AFI;
                } else {
                    debug!("AFI not read during activation");
                }
            }
            self.finish_activation(Status::Ok);
            return;
        }

        let op = self.command_complete();
        let status = data.status;
        if data.status != Status::Timeout && data.data.is_some() {
            self.send_data_to_upper(data);
        } else {
            let command = match op {
                Some(Operation::I93(code)) => code,
                _ => I93_CMD_READ_SINGLE_BLOCK,
            };
            self.notify_i93(failure_status(status), command, I93CommandParams::None);
        }
    }

    fn handle_i93_sys_info(&mut self, status: Status, info: I93SysInfo) {
        if status.is_ok() {
            self.session.i93.block_size = info.block_size;
            self.session.i93.num_blocks = info.num_blocks;
        }

        if self.session.activation_ntf_pending {
            if status.is_ok() {
                self.session.pending_params = TagParams::I93(info);
            } else {
                warn!("system information failed during activation ({})", status);
            }
            self.finish_activation(Status::Ok);
            return;
        }

        self.command_complete();
        let params = if status.is_ok() {
            I93CommandParams::SystemInfo(info)
        } else {
            I93CommandParams::None
        };
        self.notify_i93(status, I93_CMD_GET_SYS_INFO, params);
    }
}
