// tagrw/src/engine/mock.rs

use crate::engine::traits::TagEngine;
use crate::protocol::EngineCommand;
use crate::types::ActivationParams;
use crate::{Error, Result};
use std::cell::RefCell;
use std::rc::Rc;

/// State shared between a `MockEngine` and the clones a test keeps for
/// assertions.
#[derive(Debug, Default)]
pub struct EngineLog {
    pub activations: Vec<ActivationParams>,
    pub submitted: Vec<EngineCommand>,
    pub rejected: Vec<EngineCommand>,
    /// Testing hook: number of upcoming submits to refuse
    pub reject_next: usize,
    pub reject_all: bool,
    pub fail_init: bool,
}

/// Mock engine for unit tests. It records submitted commands and can be
/// told to refuse them.
#[derive(Debug, Clone, Default)]
pub struct MockEngine {
    log: Rc<RefCell<EngineLog>>,
}

impl MockEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn submitted(&self) -> Vec<EngineCommand> {
        self.log.borrow().submitted.clone()
    }

    pub fn submit_count(&self) -> usize {
        self.log.borrow().submitted.len()
    }

    /// Accepted plus refused submits.
    pub fn call_count(&self) -> usize {
        let log = self.log.borrow();
        log.submitted.len() + log.rejected.len()
    }

    pub fn last_submitted(&self) -> Option<EngineCommand> {
        self.log.borrow().submitted.last().cloned()
    }

    pub fn activation_count(&self) -> usize {
        self.log.borrow().activations.len()
    }

    pub fn reject_next(&self, n: usize) {
        self.log.borrow_mut().reject_next = n;
    }

    pub fn set_reject_all(&self, reject: bool) {
        self.log.borrow_mut().reject_all = reject;
    }

    pub fn set_fail_init(&self, fail: bool) {
        self.log.borrow_mut().fail_init = fail;
    }

    /// Forget recorded commands, keeping the testing hooks.
    pub fn clear(&self) {
        let mut log = self.log.borrow_mut();
        log.submitted.clear();
        log.rejected.clear();
    }
}

impl TagEngine for MockEngine {
    fn set_activated_tag(&mut self, params: &ActivationParams) -> Result<()> {
        let mut log = self.log.borrow_mut();
        if log.fail_init {
            return Err(Error::EngineRejected {
                command: "set activated tag",
            });
        }
        log.activations.push(params.clone());
        Ok(())
    }

    fn submit(&mut self, command: EngineCommand) -> Result<()> {
        let mut log = self.log.borrow_mut();
        if log.reject_all || log.reject_next > 0 {
            log.reject_next = log.reject_next.saturating_sub(1);
            let name = command.name();
            log.rejected.push(command);
            return Err(Error::EngineRejected { command: name });
        }
        log.submitted.push(command);
        Ok(())
    }
}
