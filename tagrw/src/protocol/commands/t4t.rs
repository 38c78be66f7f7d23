// tagrw/src/protocol/commands/t4t.rs

/// Type-4 (ISO-DEP) engine commands
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum T4tCommand {
    DetectNdef,
    ReadNdef,
    UpdateNdef(Vec<u8>),
    Format,
    PresenceCheck,
}

impl T4tCommand {
    pub fn name(&self) -> &'static str {
        match self {
            Self::DetectNdef => "t4t detect ndef",
            Self::ReadNdef => "t4t read ndef",
            Self::UpdateNdef(_) => "t4t update ndef",
            Self::Format => "t4t format",
            Self::PresenceCheck => "t4t presence check",
        }
    }
}
