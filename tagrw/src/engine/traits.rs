// tagrw/src/engine/traits.rs

use crate::protocol::EngineCommand;
use crate::types::ActivationParams;
use crate::Result;

/// Per-family command/response engine. It frames and parses the radio
/// commands; completions come back later as `EngineEvent`s, in issue
/// order, with at most one command outstanding.
pub trait TagEngine {
    /// Bind the engine to a freshly activated tag.
    fn set_activated_tag(&mut self, params: &ActivationParams) -> Result<()>;

    /// Start one command. `Ok` only promises a later completion event.
    fn submit(&mut self, command: EngineCommand) -> Result<()>;
}
