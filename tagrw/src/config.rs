// tagrw/src/config.rs

use crate::constants::PRESENCE_CHECK_INTERVAL;
use std::time::Duration;

/// Reader/writer tunables.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RwConfig {
    /// Run the periodic presence check while not in exclusive RF mode.
    pub auto_presence_check: bool,
    pub presence_check_interval: Duration,
    /// Fetch HR0/HR1 and UID with RID before reporting a Type-1 activation.
    pub t1t_read_id_on_activation: bool,
}

impl Default for RwConfig {
    fn default() -> Self {
        Self {
            auto_presence_check: true,
            presence_check_interval: PRESENCE_CHECK_INTERVAL,
            t1t_read_id_on_activation: true,
        }
    }
}

impl RwConfig {
    pub fn with_auto_presence_check(mut self, enabled: bool) -> Self {
        self.auto_presence_check = enabled;
        self
    }

    pub fn with_presence_check_interval(mut self, interval: Duration) -> Self {
        self.presence_check_interval = interval;
        self
    }

    pub fn with_t1t_read_id(mut self, enabled: bool) -> Self {
        self.t1t_read_id_on_activation = enabled;
        self
    }
}
